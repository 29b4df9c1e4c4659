// src/common/csv.rs

use serde_json::{Map, Value};

use crate::common::error::AppError;

// Formata um valor JSON para dentro de uma célula. Escalares viram
// texto simples; estruturas aninhadas viram JSON compacto.
fn render_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

// Converte uma lista de registros em CSV (RFC 4180).
//
// O cabeçalho vem das chaves do PRIMEIRO registro, na ordem de
// inserção; os demais registros são lidos por chave (ausente ou nulo
// vira célula vazia, chave extra é ignorada). Lista vazia devolve
// string vazia, sem cabeçalho.
pub fn to_csv(rows: &[Map<String, Value>]) -> Result<String, AppError> {
    let Some(first) = rows.first() else {
        return Ok(String::new());
    };

    let headers: Vec<&str> = first.keys().map(String::as_str).collect();

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(&headers)?;
    for row in rows {
        let record: Vec<String> = headers
            .iter()
            .map(|key| row.get(*key).map(render_value).unwrap_or_default())
            .collect();
        writer.write_record(&record)?;
    }

    let bytes = writer.into_inner().map_err(|e| anyhow::anyhow!(e.into_error()))?;
    let mut out = String::from_utf8(bytes).map_err(|e| anyhow::anyhow!(e))?;

    // O writer termina cada registro com '\n'; o arquivo exportado
    // não carrega terminador depois da última linha.
    if out.ends_with('\n') {
        out.pop();
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn empty_input_gives_empty_string() {
        assert_eq!(to_csv(&[]).unwrap(), "");
    }

    #[test]
    fn quotes_fields_with_commas() {
        let rows = vec![row(json!({"a": 1, "b": "x,y"}))];
        assert_eq!(to_csv(&rows).unwrap(), "a,b\n1,\"x,y\"");
    }

    #[test]
    fn doubles_embedded_quotes() {
        let rows = vec![row(json!({"quote": "He said \"hi\""}))];
        assert_eq!(to_csv(&rows).unwrap(), "quote\n\"He said \"\"hi\"\"\"");
    }

    #[test]
    fn missing_and_null_values_become_empty_cells() {
        let rows = vec![row(json!({"a": 1, "b": "x"})), row(json!({"a": null}))];
        assert_eq!(to_csv(&rows).unwrap(), "a,b\n1,x\n,");
    }

    #[test]
    fn header_follows_first_record_key_order() {
        let rows = vec![
            row(json!({"b": 1, "a": 2})),
            row(json!({"a": 3, "b": 4, "c": 5})),
        ];
        // "c" não está no primeiro registro, então fica de fora.
        assert_eq!(to_csv(&rows).unwrap(), "b,a\n1,2\n4,3");
    }

    #[test]
    fn nested_values_become_compact_json() {
        let rows = vec![row(json!({"tags": ["a", "b"], "meta": {"k": 1}}))];
        assert_eq!(
            to_csv(&rows).unwrap(),
            "tags,meta\n\"[\"\"a\"\",\"\"b\"\"]\",\"{\"\"k\"\":1}\""
        );
    }

    #[test]
    fn output_parses_back_with_a_csv_reader() {
        let rows = vec![
            row(json!({"name": "Uwase, Alice", "note": "line1\nline2"})),
            row(json!({"name": "Bosco", "note": "He said \"hi\""})),
        ];
        let out = to_csv(&rows).unwrap();

        let mut reader = csv::Reader::from_reader(out.as_bytes());
        assert_eq!(
            reader.headers().unwrap(),
            &csv::StringRecord::from(vec!["name", "note"])
        );
        let parsed: Vec<csv::StringRecord> =
            reader.records().collect::<Result<_, _>>().unwrap();
        assert_eq!(parsed[0], csv::StringRecord::from(vec!["Uwase, Alice", "line1\nline2"]));
        assert_eq!(parsed[1], csv::StringRecord::from(vec!["Bosco", "He said \"hi\""]));
    }
}

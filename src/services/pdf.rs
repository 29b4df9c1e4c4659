// src/services/pdf.rs

// Montagem do relatório nacional em PDF com genpdf. As seções vêm
// prontas em mapas (rótulo -> valor) para a tabela desenhar na ordem
// de inserção; quem monta os mapas é o ExportService.

use chrono::{DateTime, NaiveDate, Utc};
use genpdf::elements::{Break, FrameCellDecorator, LinearLayout, Paragraph, TableLayout};
use genpdf::style::Style;
use genpdf::{Alignment, Document, Element, SimplePageDecorator, elements, fonts};
use serde_json::{Map, Value};

use crate::common::error::AppError;
use crate::config::Branding;

// Os quatro arquivos Roboto-{Regular,Bold,Italic,BoldItalic}.ttf
// precisam existir no diretório de fontes configurado.
const FONT_NAME: &str = "Roboto";

// Dados já buscados e agrupados de um mês, prontos para desenhar
#[derive(Debug, Clone)]
pub struct NationalReportData {
    pub month_label: String,
    pub generated_at: DateTime<Utc>,
    pub totals: Map<String, Value>,
    pub by_region: Vec<Map<String, Value>>,
    pub rows: Vec<Map<String, Value>>,
}

// "universities_reached" -> "Universities Reached"
pub fn format_label(key: &str) -> String {
    key.replace('_', " ")
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

// Valor de célula: nulo vira vazio, número ganha separador de
// milhares, o resto vira texto como está.
pub fn format_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Number(n) => group_thousands(&n.to_string()),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

fn group_thousands(number: &str) -> String {
    let (sign, rest) = number
        .strip_prefix('-')
        .map_or(("", number), |r| ("-", r));
    let (int_part, frac_part) = match rest.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (rest, None),
    };

    let mut grouped = String::new();
    for (idx, ch) in int_part.chars().enumerate() {
        if idx > 0 && (int_part.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}

// "2026-04" -> "April 2026" (entrada inesperada passa intacta)
pub fn month_label(month: &str) -> String {
    match NaiveDate::parse_from_str(&format!("{month}-01"), "%Y-%m-%d") {
        Ok(date) => date.format("%B %Y").to_string(),
        Err(_) => month.to_string(),
    }
}

// Conta as páginas de um PDF já serializado procurando os objetos
// "/Type /Page". O "/Type /Pages" (o catálogo) entra na primeira
// contagem por ser prefixo, daí a subtração.
pub fn count_pdf_pages(pdf: &[u8]) -> usize {
    let pages = count_occurrences(pdf, b"/Type /Page");
    let containers = count_occurrences(pdf, b"/Type /Pages");
    pages.saturating_sub(containers).max(1)
}

fn count_occurrences(haystack: &[u8], needle: &[u8]) -> usize {
    if needle.is_empty() || haystack.len() < needle.len() {
        return 0;
    }
    haystack.windows(needle.len()).filter(|w| *w == needle).count()
}

// Gera o PDF do relatório nacional.
//
// O genpdf só conhece o total de páginas depois de renderizar, e o
// cabeçalho de cada página imprime "Page X of N". Então renderizamos
// duas vezes: a primeira passada descarta o resultado e serve só
// para contar páginas, a segunda escreve o N verdadeiro. O cabeçalho
// tem a mesma altura nas duas passadas, a paginação não muda.
pub fn build_national_pdf(
    data: &NationalReportData,
    branding: &Branding,
) -> Result<Vec<u8>, AppError> {
    let mut probe = Vec::new();
    build_document(data, branding, None)?.render(&mut probe)?;
    let total_pages = count_pdf_pages(&probe);

    let mut output = Vec::new();
    build_document(data, branding, Some(total_pages))?.render(&mut output)?;
    Ok(output)
}

fn build_document(
    data: &NationalReportData,
    branding: &Branding,
    total_pages: Option<usize>,
) -> Result<Document, AppError> {
    let font_family = fonts::from_files(&branding.fonts_dir, FONT_NAME, None)?;
    let mut doc = Document::new(font_family);
    doc.set_title(format!("{} National Report", branding.org_name));
    doc.set_font_size(10);

    let banner = format!("{} ({})", branding.org_full_name, branding.org_name);
    let mut decorator = SimplePageDecorator::new();
    decorator.set_margins(10);
    decorator.set_header(move |page| {
        let mut header = LinearLayout::vertical();
        header.push(
            Paragraph::new(banner.clone()).styled(Style::new().with_font_size(8)),
        );
        let page_line = match total_pages {
            Some(total) => format!("Page {page} of {total}"),
            None => format!("Page {page}"),
        };
        header.push(
            Paragraph::new(page_line)
                .aligned(Alignment::Center)
                .styled(Style::new().with_font_size(8)),
        );
        header.push(Break::new(1));
        header
    });
    doc.set_page_decorator(decorator);

    // Cabeçalho do relatório
    doc.push(
        Paragraph::new(format!("{} National Report", branding.org_name))
            .styled(Style::new().bold().with_font_size(18)),
    );
    doc.push(
        Paragraph::new(format!("Month: {}", data.month_label))
            .styled(Style::new().with_font_size(12)),
    );
    doc.push(
        Paragraph::new(format!(
            "Generated: {}",
            data.generated_at.format("%Y-%m-%d %H:%M UTC")
        ))
        .styled(Style::new().with_font_size(9)),
    );
    doc.push(Break::new(1));

    // Totais nacionais: tabela métrica/valor
    push_section_title(&mut doc, "National Totals");
    let totals_rows: Vec<Vec<String>> = data
        .totals
        .iter()
        .map(|(key, value)| vec![format_label(key), format_value(value)])
        .collect();
    push_table(&mut doc, &["Metric".into(), "Value".into()], totals_rows)?;

    // Quadro regional (some quando não há regiões)
    if let Some(first) = data.by_region.first() {
        doc.push(Break::new(1));
        push_section_title(&mut doc, "Regional Summary");
        let keys: Vec<&String> = first.keys().collect();
        let headers: Vec<String> = keys.iter().map(|k| format_label(k)).collect();
        let rows = map_rows(&data.by_region, &keys);
        push_table(&mut doc, &headers, rows)?;
    }

    // Detalhe por campus (idem)
    if let Some(first) = data.rows.first() {
        doc.push(Break::new(1));
        push_section_title(&mut doc, "Campus Reports");
        let keys: Vec<&String> = first.keys().collect();
        let headers: Vec<String> = keys.iter().map(|k| format_label(k)).collect();
        let rows = map_rows(&data.rows, &keys);
        push_table(&mut doc, &headers, rows)?;
    }

    Ok(doc)
}

fn push_section_title(doc: &mut Document, title: &str) {
    doc.push(Paragraph::new(title).styled(Style::new().bold().with_font_size(14)));
    doc.push(Break::new(0.5));
}

fn map_rows(maps: &[Map<String, Value>], keys: &[&String]) -> Vec<Vec<String>> {
    maps.iter()
        .map(|map| {
            keys.iter()
                .map(|key| map.get(*key).map(format_value).unwrap_or_default())
                .collect()
        })
        .collect()
}

fn push_table(
    doc: &mut Document,
    headers: &[String],
    rows: Vec<Vec<String>>,
) -> Result<(), AppError> {
    let mut table = TableLayout::new(vec![1; headers.len()]);
    table.set_cell_decorator(FrameCellDecorator::new(true, true, false));

    let mut header_row = table.row();
    for header in headers {
        header_row = header_row
            .element(Paragraph::new(header.clone()).styled(Style::new().bold()));
    }
    header_row.push()?;

    for cells in rows {
        let mut row = table.row();
        for cell in cells {
            row = row.element(elements::Paragraph::new(cell));
        }
        row.push()?;
    }

    doc.push(table);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_lose_underscores_and_gain_capitals() {
        assert_eq!(format_label("universities_reached"), "Universities Reached");
        assert_eq!(format_label("souls_saved"), "Souls Saved");
        assert_eq!(format_label("region"), "Region");
        assert_eq!(format_label("literature_money"), "Literature Money");
    }

    #[test]
    fn values_get_thousands_separators() {
        assert_eq!(format_value(&serde_json::json!(1234567)), "1,234,567");
        assert_eq!(format_value(&serde_json::json!(999)), "999");
        assert_eq!(format_value(&serde_json::json!(-1234)), "-1,234");
        assert_eq!(format_value(&serde_json::json!(1234.56)), "1,234.56");
    }

    #[test]
    fn null_renders_as_empty_and_strings_pass_through() {
        assert_eq!(format_value(&Value::Null), "");
        assert_eq!(format_value(&serde_json::json!("Kigali")), "Kigali");
    }

    #[test]
    fn month_labels_spell_out_the_month() {
        assert_eq!(month_label("2026-04"), "April 2026");
        assert_eq!(month_label("2025-12"), "December 2025");
        // Entrada fora do formato passa sem mexer.
        assert_eq!(month_label("sim"), "sim");
    }

    #[test]
    fn page_count_ignores_the_pages_catalog() {
        let pdf = b"1 0 obj << /Type /Pages /Kids [] >> 2 0 obj << /Type /Page >> 3 0 obj << /Type /Page >>";
        assert_eq!(count_pdf_pages(pdf), 2);
    }

    #[test]
    fn page_count_never_reports_zero() {
        assert_eq!(count_pdf_pages(b""), 1);
        assert_eq!(count_pdf_pages(b"not a pdf"), 1);
    }
}

// src/common/ics.rs

use chrono::{DateTime, Duration, Utc};

use crate::models::event::Event;

// Formato de data-hora do iCalendar, sempre em UTC.
const ICS_DATETIME: &str = "%Y%m%dT%H%M%SZ";

// Duração assumida quando o evento não tem horário de término.
const DEFAULT_EVENT_HOURS: i64 = 2;

fn escape_text(text: &str) -> String {
    // Quebras de linha dentro de DESCRIPTION viram a sequência "\n".
    text.replace('\r', "").replace('\n', "\\n")
}

// Gera um VCALENDAR com um único VEVENT para o botão
// "adicionar ao calendário". `now` entra como argumento para o
// DTSTAMP ficar determinístico nos testes.
pub fn event_to_ics(event: &Event, org_name: &str, domain: &str, now: DateTime<Utc>) -> String {
    let end_at = event
        .end_at
        .unwrap_or(event.start_at + Duration::hours(DEFAULT_EVENT_HOURS));

    let mut lines = vec![
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        format!("PRODID:-//{org_name}//Events//EN"),
        "BEGIN:VEVENT".to_string(),
        format!("UID:{}@{}", event.id, domain),
        format!("DTSTAMP:{}", now.format(ICS_DATETIME)),
        format!("DTSTART:{}", event.start_at.format(ICS_DATETIME)),
        format!("DTEND:{}", end_at.format(ICS_DATETIME)),
        format!("SUMMARY:{}", event.title),
    ];
    if let Some(description) = event.description.as_deref() {
        lines.push(format!("DESCRIPTION:{}", escape_text(description)));
    }
    if let Some(location) = event.location.as_deref() {
        lines.push(format!("LOCATION:{location}"));
    }
    lines.push("END:VEVENT".to_string());
    lines.push("END:VCALENDAR".to_string());

    lines.join("\r\n")
}

// Nome de arquivo derivado do título: minúsculas, e qualquer coisa
// fora de a-z0-9 vira underscore.
pub fn ics_filename(title: &str) -> String {
    let slug: String = title
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    format!("{slug}.ics")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use uuid::Uuid;

    fn sample_event() -> Event {
        Event {
            id: Uuid::nil(),
            title: "National Youth Conference".into(),
            description: Some("Bring your Bible.\nDoors open at 8am.".into()),
            start_at: Utc.with_ymd_and_hms(2026, 4, 10, 9, 0, 0).unwrap(),
            end_at: None,
            location: Some("Kigali Convention Centre".into()),
            category: Some("Conference".into()),
            capacity: Some(500),
            created_by: None,
            created_at: Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn calendar_carries_version_and_utc_stamps() {
        let now = Utc.with_ymd_and_hms(2026, 4, 1, 18, 30, 0).unwrap();
        let ics = event_to_ics(&sample_event(), "CYSMF", "cysmf.org", now);

        let lines: Vec<&str> = ics.split("\r\n").collect();
        assert_eq!(lines[0], "BEGIN:VCALENDAR");
        assert_eq!(lines[1], "VERSION:2.0");
        assert_eq!(lines[2], "PRODID:-//CYSMF//Events//EN");
        assert!(lines.contains(&"DTSTAMP:20260401T183000Z"));
        assert!(lines.contains(&"DTSTART:20260410T090000Z"));
        assert_eq!(*lines.last().unwrap(), "END:VCALENDAR");
    }

    #[test]
    fn missing_end_defaults_to_two_hours() {
        let now = Utc.with_ymd_and_hms(2026, 4, 1, 0, 0, 0).unwrap();
        let ics = event_to_ics(&sample_event(), "CYSMF", "cysmf.org", now);
        assert!(ics.contains("DTEND:20260410T110000Z"));
    }

    #[test]
    fn explicit_end_is_kept() {
        let mut event = sample_event();
        event.end_at = Some(Utc.with_ymd_and_hms(2026, 4, 10, 16, 0, 0).unwrap());
        let now = Utc.with_ymd_and_hms(2026, 4, 1, 0, 0, 0).unwrap();
        let ics = event_to_ics(&event, "CYSMF", "cysmf.org", now);
        assert!(ics.contains("DTEND:20260410T160000Z"));
    }

    #[test]
    fn description_newlines_are_escaped() {
        let now = Utc.with_ymd_and_hms(2026, 4, 1, 0, 0, 0).unwrap();
        let ics = event_to_ics(&sample_event(), "CYSMF", "cysmf.org", now);
        assert!(ics.contains("DESCRIPTION:Bring your Bible.\\nDoors open at 8am."));
    }

    #[test]
    fn uid_combines_id_and_domain() {
        let now = Utc.with_ymd_and_hms(2026, 4, 1, 0, 0, 0).unwrap();
        let ics = event_to_ics(&sample_event(), "CYSMF", "cysmf.org", now);
        assert!(ics.contains("UID:00000000-0000-0000-0000-000000000000@cysmf.org"));
    }

    #[test]
    fn filename_is_a_lowercase_slug() {
        assert_eq!(
            ics_filename("National Youth Conference"),
            "national_youth_conference.ics"
        );
        assert_eq!(ics_filename("Prière & Jeûne 2026"), "pri_re___je_ne_2026.ics");
    }
}

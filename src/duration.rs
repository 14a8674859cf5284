use regex::Regex;
use std::sync::LazyLock;

static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("Invalid digit-run regex"));

/// Convert a schema.org duration into total minutes.
///
/// `PT1H30M` style ISO-8601 durations are decomposed into hour and minute
/// components (plus a seconds component some sites emit, e.g. `PT5400S`).
/// Anything else falls back to the first run of digits in the string, read
/// as a minute count. Missing or unreadable input degrades to 0.
pub fn parse_duration(input: Option<&str>) -> u32 {
    let raw = match input {
        Some(s) => s.trim(),
        None => return 0,
    };
    if raw.is_empty() {
        return 0;
    }

    if let Some(body) = raw.strip_prefix("PT") {
        return parse_iso_body(body);
    }

    DIGIT_RUN
        .find(raw)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

fn parse_iso_body(body: &str) -> u32 {
    let mut minutes = 0u32;
    let mut h_end = 0;

    if let Some(h_pos) = body.find(['H', 'h']) {
        let hours: u32 = body[..h_pos].trim().parse().unwrap_or(0);
        minutes = hours.saturating_mul(60);
        h_end = h_pos + 1;
    }

    if let Some(m_pos) = body.find(['M', 'm']) {
        if m_pos >= h_end {
            let extra: u32 = body[h_end..m_pos].trim().parse().unwrap_or(0);
            minutes = minutes.saturating_add(extra);
        }
        return minutes;
    }

    // Some sites publish seconds only (PT5400S, PT5400.0S)
    if minutes == 0 {
        if let Some(s_pos) = body.find(['S', 's']) {
            if let Ok(seconds) = body[..s_pos].trim().parse::<f64>() {
                return (seconds / 60.0).round().max(0.0) as u32;
            }
        }
    }

    minutes
}

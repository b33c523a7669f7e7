
use crate::core::session::Session;
use crate::core::types::Weekday;
use strum::IntoEnumIterator;

/// Render the weekly schedule as YAML.
///
/// Days appear in Monday..Friday order and only when their bucket is
/// non-empty; entries keep insertion order. Each entry is a mapping with
/// keys `course`, `start_time`, `end_time`, `send_message` in that literal
/// order, and booleans render as the capitalized tokens `True`/`False` --
/// downstream consumers of the file expect exactly that casing.
pub fn emit_schedule(session: &Session) -> String {
    let mut out = String::new();
    for day in Weekday::iter() {
        let entries = session.entries(day);
        if entries.is_empty() {
            continue;
        }
        out.push_str(&format!("{day}:\n"));
        for entry in entries {
            out.push_str(&format!("  - course: {}\n", scalar(&entry.name)));
            out.push_str(&format!(
                "    start_time: {}\n",
                scalar(&entry.start_time.to_string())
            ));
            out.push_str(&format!(
                "    end_time: {}\n",
                scalar(&entry.end_time.to_string())
            ));
            out.push_str(&format!("    send_message: {}\n", entry.send_message));
        }
    }
    out
}

/// Render the course -> metadata mapping as YAML, one key per registered
/// course in first-seen order. Courses with no stored value emit
/// `placeholder` rather than an empty or missing key.
pub fn emit_metadata(session: &Session, placeholder: &str) -> String {
    let mut out = String::new();
    for name in session.course_names() {
        let value = session.metadata_for(name).unwrap_or(placeholder);
        out.push_str(&format!("{}: {}\n", scalar(name), scalar(value)));
    }
    out
}

/// Render a string scalar, single-quoting it whenever the plain form would
/// be ambiguous YAML. Quoting doubles embedded single quotes.
fn scalar(s: &str) -> String {
    if needs_quotes(s) {
        format!("'{}'", s.replace('\'', "''"))
    } else {
        s.to_string()
    }
}

fn needs_quotes(s: &str) -> bool {
    if s.is_empty() || s != s.trim() {
        return true;
    }
    // Plain scalars that a YAML reader would resolve to something other
    // than a string: booleans, null, numbers, and colon-separated digit
    // runs (the 1.1 sexagesimal form, which covers HH:MM times).
    let lowered = s.to_ascii_lowercase();
    if matches!(
        lowered.as_str(),
        "true" | "false" | "yes" | "no" | "on" | "off" | "null" | "~"
    ) {
        return true;
    }
    if s.parse::<f64>().is_ok() {
        return true;
    }
    if s.contains(':') && s.chars().all(|c| c.is_ascii_digit() || c == ':') {
        return true;
    }
    // Structurally significant leading characters or sequences.
    if s.starts_with([
        '!', '&', '*', '-', '?', '#', '|', '>', '%', '@', '`', '"', '\'', '[', ']', '{', '}', ',',
    ]) {
        return true;
    }
    s.contains(": ") || s.contains(" #")
}

//! Plain-text rendering helpers for post bodies and timestamps.

use chrono::{DateTime, Utc};

/// Removes markup from an HTML fragment and decodes common entities.
/// Runs of whitespace collapse to a single space.
pub fn strip_html(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut in_tag = false;
    let mut chars = html.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '<' => {
                in_tag = true;
                // Block boundaries separate words.
                text.push(' ');
            }
            '>' if in_tag => in_tag = false,
            _ if in_tag => {}
            '&' => {
                let mut entity = String::new();
                while let Some(&next) = chars.peek() {
                    if next == ';' || entity.len() > 8 {
                        break;
                    }
                    entity.push(next);
                    chars.next();
                }
                if chars.peek() == Some(&';') {
                    if let Some(decoded) = decode_entity(&entity) {
                        chars.next();
                        text.push(decoded);
                        continue;
                    }
                }
                text.push('&');
                text.push_str(&entity);
            }
            _ => text.push(ch),
        }
    }

    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn decode_entity(entity: &str) -> Option<char> {
    match entity {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some(' '),
        _ => {
            let code = entity.strip_prefix('#')?;
            let value = match code.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => code.parse().ok()?,
            };
            char::from_u32(value)
        }
    }
}

/// `"MMM dd yyyy at HH:mm"` in UTC, e.g. `"May 03 2021 at 00:00"`.
pub fn format_date(timestamp: i64) -> String {
    DateTime::<Utc>::from_timestamp(timestamp, 0)
        .map(|date| date.format("%b %d %Y at %H:%M").to_string())
        .unwrap_or_default()
}

/// Coarse "time ago" text relative to `now` (both unix seconds).
pub fn relative_time(timestamp: i64, now: i64) -> String {
    const MINUTE: i64 = 60;
    const HOUR: i64 = 60 * MINUTE;
    const DAY: i64 = 24 * HOUR;
    const MONTH: i64 = 30 * DAY;
    const YEAR: i64 = 365 * DAY;

    let elapsed = now.saturating_sub(timestamp);
    let (count, unit) = match elapsed {
        e if e < MINUTE => return "just now".to_string(),
        e if e < HOUR => (e / MINUTE, "minute"),
        e if e < DAY => (e / HOUR, "hour"),
        e if e < MONTH => (e / DAY, "day"),
        e if e < YEAR => (e / MONTH, "month"),
        e => (e / YEAR, "year"),
    };
    let plural = if count == 1 { "" } else { "s" };
    format!("{} {}{} ago", count, unit, plural)
}

/// Relative to the current clock.
pub fn time_ago(timestamp: i64) -> String {
    relative_time(timestamp, Utc::now().timestamp())
}

/// Shortens `text` to at most `max_chars` characters, ending in "...".
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", kept)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_html_removes_tags() {
        assert_eq!(
            strip_html("<b>Bold</b> and <i>italic</i> text"),
            "Bold and italic text"
        );
    }

    #[test]
    fn strip_html_handles_empty_and_plain() {
        assert_eq!(strip_html(""), "");
        assert_eq!(strip_html("Just text"), "Just text");
    }

    #[test]
    fn strip_html_decodes_entities() {
        assert_eq!(
            strip_html("<code>a &lt; b &amp;&amp; c &gt; d</code>"),
            "a < b && c > d"
        );
        assert_eq!(strip_html("it&#39;s &quot;fine&quot;"), "it's \"fine\"");
        assert_eq!(strip_html("&#x41;&#66;"), "AB");
    }

    #[test]
    fn strip_html_keeps_unknown_ampersands() {
        assert_eq!(strip_html("R&D &bogus; x"), "R&D &bogus; x");
    }

    #[test]
    fn strip_html_separates_paragraphs() {
        assert_eq!(strip_html("<p>one</p><p>two</p>"), "one two");
    }

    #[test]
    fn format_date_uses_fixed_pattern() {
        assert_eq!(format_date(1_620_000_000), "May 03 2021 at 00:00");
    }

    #[test]
    fn relative_time_buckets() {
        let now = 1_000_000_000;
        assert_eq!(relative_time(now - 5, now), "just now");
        assert_eq!(relative_time(now - 60, now), "1 minute ago");
        assert_eq!(relative_time(now - 3 * 3600, now), "3 hours ago");
        assert_eq!(relative_time(now - 2 * 86_400, now), "2 days ago");
        assert_eq!(relative_time(now - 4 * 30 * 86_400, now), "4 months ago");
        assert_eq!(relative_time(now - 2 * 365 * 86_400, now), "2 years ago");
        assert_eq!(relative_time(now + 100, now), "just now");
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("ünïcödé text here", 8), "ünïcö...");
    }
}

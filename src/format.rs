use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn truncate_unicode(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut result = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > max_width.saturating_sub(1) {
            result.push('\u{2026}');
            break;
        }
        result.push(ch);
        width += ch_width;
    }
    result
}

/// `"{days}d {hours:02}h {minutes:02}m"`.
pub fn format_uptime(secs: u64) -> String {
    let minutes = secs / 60;
    let hours = minutes / 60;
    let days = hours / 24;
    format!("{}d {:02}h {:02}m", days, hours % 24, minutes % 60)
}

/// Left text, right text, and spaces between them to fill `width` columns.
/// The result is cut to `width` when both sides do not fit.
pub fn spread(left: &str, right: &str, width: usize) -> String {
    let used = left.width() + right.width();
    let line = format!("{left}{}{right}", " ".repeat(width.saturating_sub(used)));
    clip(&line, width)
}

/// `text` padded with spaces (or cut) to exactly `width` columns.
pub fn pad_to(text: &str, width: usize) -> String {
    let clipped = clip(text, width);
    let pad = width.saturating_sub(clipped.width());
    format!("{clipped}{}", " ".repeat(pad))
}

fn clip(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out
}

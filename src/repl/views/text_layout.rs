//! # Text Layout Helpers
//!
//! Display-width aware truncation and wrapping. Widths are terminal columns,
//! so wide characters (CJK titles are common in search results) count as two.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Display width of a single character
fn char_width(ch: char) -> usize {
    UnicodeWidthChar::width(ch).unwrap_or(0)
}

/// Display width of a string
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Cut `text` to at most `max_width` columns, ending with `…` when shortened
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if display_width(text) <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut output = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let width = char_width(ch);
        if used + width > max_width - 1 {
            break;
        }
        output.push(ch);
        used += width;
    }
    output.push('…');
    output
}

/// Pad `text` with spaces up to `width` columns (truncating if it is longer)
pub fn pad_to_width(text: &str, width: usize) -> String {
    let mut output = truncate_to_width(text, width);
    let used = display_width(&output);
    output.extend(std::iter::repeat(' ').take(width.saturating_sub(used)));
    output
}

/// Keep the last `max_width` columns of `text`
///
/// Used for the search input so the cursor end stays visible.
pub fn tail_to_width(text: &str, max_width: usize) -> &str {
    let mut used = 0;
    for (index, ch) in text.char_indices().rev() {
        used += char_width(ch);
        if used > max_width {
            return &text[index + ch.len_utf8()..];
        }
    }
    text
}

/// Word-wrap `text` into lines of at most `width` columns
///
/// Words longer than a line are split at character boundaries.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = display_width(word);

        if current_width > 0 && current_width + 1 + word_width <= width {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
            continue;
        }

        if current_width > 0 {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }

        if word_width <= width {
            current.push_str(word);
            current_width = word_width;
            continue;
        }

        for ch in word.chars() {
            let w = char_width(ch);
            if current_width + w > width && current_width > 0 {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            current.push(ch);
            current_width += w;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

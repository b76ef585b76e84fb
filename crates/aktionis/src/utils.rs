pub const ALERT_GLYPH: char = '🚨';

/// Terminal columns taken by `text`. The alert glyph renders two columns wide.
///
/// Every other char counts as one column, so other emoji or CJK text in a
/// deal will render wider than measured and misalign borders.
pub fn column_width(text: &str) -> usize {
    text.chars()
        .map(|c| if c == ALERT_GLYPH { 2 } else { 1 })
        .sum()
}

/// Collapses every whitespace run, line breaks included, to a single space.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Greedy word wrap at `limit` columns.
///
/// Words longer than `limit` are put on a line of their own and never split.
/// Existing line breaks are kept.
pub fn word_wrap(text: &str, limit: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            if line.is_empty() {
                line.push_str(word);
            } else if column_width(&line) + 1 + column_width(word) <= limit {
                line.push(' ');
                line.push_str(word);
            } else {
                lines.push(std::mem::take(&mut line));
                line.push_str(word);
            }
        }
        lines.push(line);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

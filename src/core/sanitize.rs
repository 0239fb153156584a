// src/core/sanitize.rs
// Text cleanup for scraped cell contents.

/// Trim a single-value cell (spaces, tabs, newlines on either side).
pub fn trim_cell(s: &str) -> String {
    s.trim().to_string()
}

/// Split a multi-value cell on newlines; trim entries and drop empty ones.
pub fn split_lines(s: &str) -> Vec<String> {
    s.split('\n')
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .map(String::from)
        .collect()
}

/// Collapse sequences of whitespace into a single space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space {
                out.push(' ');
                prev_space = true;
            }
        } else {
            out.push(ch);
            prev_space = false;
        }
    }
    out.trim().to_string()
}

/// True when nothing but whitespace is left.
pub fn is_blank(s: &str) -> bool {
    s.chars().all(char::is_whitespace)
}

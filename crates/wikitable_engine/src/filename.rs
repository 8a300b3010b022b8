/// Keeps names well under the common 255-byte file name limit.
const MAX_TITLE_BYTES: usize = 200;

/// `{sanitized_title}-{ordinal}.csv`, safe on Windows and Unix.
pub fn table_filename(title: &str, ordinal: usize) -> String {
    format!("{}-{ordinal}.csv", sanitize_title(title))
}

fn sanitize_title(input: &str) -> String {
    let cleaned: String = input
        .chars()
        .map(|c| if is_forbidden(c) { '_' } else { c })
        .collect();
    let mut cleaned = cleaned.trim_matches(&[' ', '.'][..]).to_string();
    if cleaned.is_empty() {
        return "untitled".to_string();
    }
    if cleaned.len() > MAX_TITLE_BYTES {
        let mut end = MAX_TITLE_BYTES;
        while !cleaned.is_char_boundary(end) {
            end -= 1;
        }
        cleaned.truncate(end);
    }
    cleaned
}

fn is_forbidden(c: char) -> bool {
    matches!(c,
        '\\' | '/' | ':' | '*' | '?' | '"' | '<' | '>' | '|' | '\0'..='\u{1F}'
    )
}

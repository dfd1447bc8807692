//! Character-data normalization.

/// The XML `S` production: space, tab, carriage return, line feed.
const XML_WHITESPACE: [char; 4] = [' ', '\t', '\r', '\n'];

/// Trim a character run and collapse each interior whitespace run to a
/// single space.
///
/// Only XML whitespace counts. A no-break space (`&#160;`) is content and is
/// kept as is.
///
/// Returns `None` when nothing but whitespace remains; such runs sit between
/// sibling tags and carry no content.
pub fn normalize_whitespace(raw: &str) -> Option<String> {
    let mut out = String::with_capacity(raw.len());
    for word in raw.split(XML_WHITESPACE).filter(|w| !w.is_empty()) {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    if out.is_empty() { None } else { Some(out) }
}

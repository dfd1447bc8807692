//! Byte decoding for license files.

use std::borrow::Cow;

use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};
use tracing::debug;

/// Decode a license file to text.
///
/// A byte-order mark wins, then the encoding named in the XML declaration,
/// then UTF-8. Bytes that are not valid UTF-8 and came with no usable
/// declaration are read as Windows-1252.
pub fn decode_xml(bytes: &[u8]) -> Cow<'_, str> {
    let declared = declared_encoding(bytes)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        // The declaration was read as ASCII, so a UTF-16 label is wrong.
        .filter(|encoding| encoding.is_ascii_compatible());

    let (text, used, malformed) = declared.unwrap_or(UTF_8).decode(bytes);
    if malformed && used == UTF_8 {
        debug!("license file is not valid UTF-8, decoding as windows-1252");
        return WINDOWS_1252.decode(bytes).0;
    }
    text
}

/// Encoding label from a leading `<?xml ... encoding="..."?>` declaration.
fn declared_encoding(bytes: &[u8]) -> Option<&str> {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    let rest = bytes.strip_prefix(b"<?xml")?;
    let end = rest.windows(2).position(|w| w == b"?>")?;
    let declaration = std::str::from_utf8(&rest[..end]).ok()?;

    let (_, value) = declaration.split_once("encoding")?;
    let value = value.trim_start().strip_prefix('=')?.trim_start();
    let quote = value.chars().next().filter(|&c| c == '"' || c == '\'')?;
    value[1..].split_once(quote).map(|(label, _)| label)
}

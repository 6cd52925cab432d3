use std::fmt::Write;

/// Quote `text` as a C string literal.
///
/// Bytes outside printable ASCII use three-digit octal escapes, which cannot
/// run into a following character the way `\x` escapes do. A `?` following
/// another `?` is escaped so that no trigraph can form.
pub(crate) fn c_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    let mut prev = 0u8;
    for byte in text.bytes() {
        match byte {
            b'"' => out.push_str("\\\""),
            b'\\' => out.push_str("\\\\"),
            b'?' if prev == b'?' => out.push_str("\\?"),
            0x20..=0x7e => out.push(byte as char),
            _ => {
                let _ = write!(out, "\\{byte:03o}");
            }
        }
        prev = byte;
    }
    out.push('"');
    out
}

pub(crate) fn rust_string(text: &str) -> String {
    format!("{text:?}")
}

pub(crate) fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

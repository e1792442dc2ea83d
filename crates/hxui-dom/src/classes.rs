//! Class merging
//!
//! Space-joined class lists contributed by nested callers.
//! No deduplication: utility-class scanners rely on textual presence.

/// Join non-empty class strings with single spaces, preserving order.
///
/// Blank parts (empty or whitespace only) are dropped; other parts are kept
/// verbatim.
pub fn cn<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for part in parts {
        let part = part.as_ref();
        if part.trim().is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(part);
    }
    out
}

/// Pick one of two class strings
#[inline]
pub fn cn_if<'a>(pred: bool, yes: &'a str, no: &'a str) -> &'a str {
    if pred { yes } else { no }
}

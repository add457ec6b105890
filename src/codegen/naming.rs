//! Component name derivation from raw icon ids

use heck::ToUpperCamelCase;

/// Characters stripped from the front of an id after its prefix is removed
pub const SEPARATORS: &[char] = &['-', '_', '.', '=', '+', '#', '@', '!', '~', '*'];

/// Derive a PascalCase component name from a raw icon id
///
/// When `trim_prefix` is set and the id starts with it, the prefix is removed
/// along with any separators directly after it. The prefix is only stripped
/// if something remains, so `resolve("icon", Some("icon"))` keeps the id.
///
/// ```rust
/// use iconfont_codegen::codegen::resolve;
///
/// assert_eq!(resolve("icon-home-outline", None), "IconHomeOutline");
/// assert_eq!(resolve("icon-home", Some("icon")), "Home");
/// ```
pub fn resolve(raw_id: &str, trim_prefix: Option<&str>) -> String {
    let trimmed = match trim_prefix.filter(|p| !p.is_empty()) {
        Some(prefix) => trim(raw_id, prefix),
        None => raw_id,
    };
    split_digit_runs(trimmed).to_upper_camel_case()
}

/// Insert a separator wherever a digit run meets a letter, so `24gl` is read
/// as the two words `24` and `gl`
fn split_digit_runs(id: &str) -> String {
    let mut out = String::with_capacity(id.len() + 4);
    let mut prev: Option<char> = None;
    for c in id.chars() {
        if let Some(p) = prev {
            if p.is_alphanumeric()
                && c.is_alphanumeric()
                && p.is_ascii_digit() != c.is_ascii_digit()
            {
                out.push('-');
            }
        }
        out.push(c);
        prev = Some(c);
    }
    out
}

fn trim<'a>(raw_id: &'a str, prefix: &str) -> &'a str {
    match raw_id.strip_prefix(prefix) {
        Some(rest) if !rest.is_empty() => rest.trim_start_matches(SEPARATORS),
        _ => raw_id,
    }
}

use regex_lite::Regex;
use std::sync::OnceLock;

fn percent_octet_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"%[A-Fa-f0-9]{2}").expect("percent-octet regex must compile"))
}

fn unsafe_class_char_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^A-Za-z0-9_-]").expect("class-char regex must compile"))
}

/// Reduces a string to a safe CSS class token.
///
/// Percent-encoded octets are dropped, then everything outside
/// `[A-Za-z0-9_-]` is removed.
#[must_use]
pub fn sanitize_html_class(raw: &str) -> String {
    let without_octets = percent_octet_re().replace_all(raw, "");
    unsafe_class_char_re()
        .replace_all(&without_octets, "")
        .into_owned()
}

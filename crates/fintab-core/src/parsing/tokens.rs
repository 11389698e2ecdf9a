use regex::Regex;
use std::sync::LazyLock;

/// Monetary value token: digits with optional thousands separators and
/// decimal fraction, optionally parenthesized (negative by convention),
/// optionally minus-signed — or a bare "-" meaning blank/nil.
///
/// Matches: 68, 4,494, 1,234.56, (1,478), (243), -123, -
static VALUE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\(?-?[\d,]+(?:\.\d+)?\)?|-)$").expect("value token regex is valid")
});

/// Note-reference token: a disclosure-note code attached to a line item.
///
/// Matches: 2, 2a, 2.4, 9(a), 10(a), 3.1(b)
static NOTE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\d+[A-Za-z]?(?:\(\w+\))?(?:\.\d+)?[A-Za-z]?$|^\d+\.\d+(?:\([A-Za-z0-9]+\))?$|^\d+\([A-Za-z0-9]+\)$",
    )
    .expect("note token regex is valid")
});

pub fn is_value_token(token: &str) -> bool {
    VALUE_RE.is_match(token)
}

pub fn is_note_token(token: &str) -> bool {
    NOTE_RE.is_match(token)
}

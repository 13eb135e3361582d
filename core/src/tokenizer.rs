use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref DELIMS: Regex = Regex::new(r"[\s,.?!:]").expect("valid regex");
    static ref NUMBER_PREFIX: Regex = Regex::new(r"^[0-9.+-]+").expect("valid regex");
}

/// Split a line into candidate words on whitespace and `, . ? ! :`.
///
/// Runs of delimiters yield empty tokens between them; callers skip those.
/// The same split serves stopword parsing and input parsing.
pub fn tokenize(line: &str) -> impl Iterator<Item = &str> + '_ {
    DELIMS.split(line)
}

/// True when a token starts with digits, `.`, `+` or `-`.
///
/// Deliberately a prefix match, so mixed tokens like `123abc` or `3D` are
/// classified as numeric too.
pub fn is_number_like(word: &str) -> bool {
    NUMBER_PREFIX.is_match(word)
}

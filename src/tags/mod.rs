//! Tag canonicalization.
//!
//! Tags are free-form tokens typed on the command line. They are stored as
//! `#`-prefixed, de-duplicated, space-joined tokens and shown with their first
//! character capitalized unless they are acronyms.

use crate::constants::TAG_PREFIX;

/// Splits a raw tag string on whitespace.
pub fn split_tags(raw: &str) -> Vec<&str> {
    raw.split_whitespace().collect()
}

/// Canonicalizes tokens into the stored tag column.
///
/// Each token is trimmed and given a leading `#`; empty tokens are dropped and
/// duplicates are removed, keeping the first occurrence.
///
/// # Examples
///
/// ```
/// use curate::tags::normalize_for_storage;
///
/// assert_eq!(normalize_for_storage(&["rust", "#rust", " cli "]), "#rust #cli");
/// ```
pub fn normalize_for_storage<S: AsRef<str>>(tokens: &[S]) -> String {
    let mut cleaned: Vec<String> = Vec::with_capacity(tokens.len());

    for token in tokens {
        let token = token.as_ref().trim();
        if token.is_empty() {
            continue;
        }
        let tag = if token.starts_with(TAG_PREFIX) {
            token.to_string()
        } else {
            format!("{}{}", TAG_PREFIX, token)
        };
        if !cleaned.contains(&tag) {
            cleaned.push(tag);
        }
    }

    cleaned.join(" ")
}

/// True when `word` has at least one letter and every letter is uppercase.
fn is_acronym(word: &str) -> bool {
    let mut has_alpha = false;
    for ch in word.chars().filter(|c| c.is_alphabetic()) {
        has_alpha = true;
        if !ch.is_uppercase() {
            return false;
        }
    }
    has_alpha
}

/// Display form of a single tag.
///
/// A leading `#` is kept. Acronyms (`#AI`, `#LLM2`) are unchanged; otherwise
/// only the first character is uppercased.
///
/// # Examples
///
/// ```
/// use curate::tags::normalize_for_display;
///
/// assert_eq!(normalize_for_display("#rust"), "#Rust");
/// assert_eq!(normalize_for_display("#AI"), "#AI");
/// assert_eq!(normalize_for_display("webAssembly"), "WebAssembly");
/// ```
pub fn normalize_for_display(token: &str) -> String {
    let token = token.trim();
    let (prefix, body) = match token.strip_prefix(TAG_PREFIX) {
        Some(rest) => (Some(TAG_PREFIX), rest),
        None => (None, token),
    };

    let body = if is_acronym(body) {
        body.to_string()
    } else {
        let mut chars = body.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    };

    match prefix {
        Some(p) => format!("{}{}", p, body),
        None => body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_tags_on_any_whitespace() {
        assert_eq!(split_tags("  #a\t#b  c\n"), vec!["#a", "#b", "c"]);
        assert!(split_tags("   ").is_empty());
    }

    #[test]
    fn test_normalize_for_storage_prefixes_and_dedupes() {
        assert_eq!(normalize_for_storage(&["a", "b", "#a", "", "  "]), "#a #b");
        assert_eq!(normalize_for_storage::<&str>(&[]), "");
    }

    #[test]
    fn test_normalize_for_storage_preserves_first_seen_order() {
        assert_eq!(normalize_for_storage(&["zeta", "alpha", "zeta", "mid"]), "#zeta #alpha #mid");
    }

    #[test]
    fn test_normalize_for_storage_is_case_sensitive() {
        assert_eq!(normalize_for_storage(&["Rust", "rust"]), "#Rust #rust");
    }

    #[test]
    fn test_normalize_for_storage_is_idempotent() {
        for raw in ["a b #a", "  #x   y z  x ", "", "#AI ml #ml ML"] {
            let once = normalize_for_storage(&split_tags(raw));
            let twice = normalize_for_storage(&split_tags(&once));
            assert_eq!(once, twice, "raw input {:?}", raw);
        }
    }

    #[test]
    fn test_normalize_for_display() {
        assert_eq!(normalize_for_display("#rust"), "#Rust");
        assert_eq!(normalize_for_display("#machineLearning"), "#MachineLearning");
        assert_eq!(normalize_for_display("#AI"), "#AI");
        assert_eq!(normalize_for_display("#GPT4"), "#GPT4");
        assert_eq!(normalize_for_display("#Rust"), "#Rust");
        assert_eq!(normalize_for_display("plain"), "Plain");
        assert_eq!(normalize_for_display("#42"), "#42");
        assert_eq!(normalize_for_display("#"), "#");
        assert_eq!(normalize_for_display("#émigré"), "#Émigré");
    }
}

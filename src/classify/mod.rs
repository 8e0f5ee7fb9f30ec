//! Rule-based URL classification.
//!
//! A rule pairs a case-insensitive regular expression with a kind label. Rules
//! are read from `rules.tsv` once per invocation and evaluated in file order;
//! the first pattern found anywhere in the URL decides the kind.

use crate::constants;
use crate::errors::AppResult;
use regex::{Regex, RegexBuilder};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Contents written to `rules.tsv` when it does not exist yet.
pub const DEFAULT_RULES_FILE: &str = "\
# curate kind rules
# Format: <regex>\\t<kind>
# Lines beginning with # are comments. Blank lines ignored.
# Patterns are case-insensitive and may match anywhere in the URL.
# The first matching rule wins; unmatched URLs are classified as article.

youtube\\.com/|youtu\\.be/\tvideo
(?:^|https?://)?(?:www\\.)?(?:twitter\\.com|x\\.com)/\ttweet
(?:^|https?://)?(?:www\\.)?substack\\.com/\tpost
(?:^|https?://)?(?:www\\.)?reddit\\.com/\tthread
(?:^|https?://)?news\\.ycombinator\\.com/\thn
(?:^|https?://)?(?:www\\.)?github\\.com/\tcode
\\.pdf(?:$|\\?)\tpdf
";

/// A single (pattern, kind) pair.
#[derive(Debug, Clone)]
pub struct Rule {
    pattern: Regex,
    kind: String,
}

impl Rule {
    /// Compiles `pattern` case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns the regex error when `pattern` is not a valid expression.
    pub fn new(pattern: &str, kind: impl Into<String>) -> Result<Self, regex::Error> {
        let pattern = RegexBuilder::new(pattern).case_insensitive(true).build()?;
        Ok(Rule {
            pattern,
            kind: kind.into(),
        })
    }

    /// The source text of the pattern.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// The label assigned on a match.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// True when the pattern occurs anywhere in `url`.
    pub fn matches(&self, url: &str) -> bool {
        self.pattern.is_match(url)
    }
}

/// Parses rules from the text of a rules file.
///
/// Blank lines and lines starting with `#` are ignored, as are lines without a
/// tab-separated label. A line whose pattern does not compile is logged and
/// skipped; the remaining rules still load.
pub fn load_rules(source: &str) -> Vec<Rule> {
    let mut rules = Vec::new();

    for (index, line) in source.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with(constants::RULE_COMMENT_PREFIX) {
            continue;
        }

        let mut columns = line.split(constants::FIELD_SEPARATOR);
        let (pattern, kind) = match (columns.next(), columns.next()) {
            (Some(pattern), Some(kind)) if !kind.trim().is_empty() => (pattern, kind.trim()),
            _ => {
                debug!("Skipping rule line {} without a kind column", index + 1);
                continue;
            }
        };

        match Rule::new(pattern, kind) {
            Ok(rule) => rules.push(rule),
            Err(e) => warn!("Skipping invalid rule pattern on line {}: {}", index + 1, e),
        }
    }

    rules
}

/// Writes the default rules file if `path` does not exist.
///
/// Returns `true` when a file was created.
pub fn ensure_default_rules_file(path: &Path) -> AppResult<bool> {
    if path.exists() {
        return Ok(false);
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, DEFAULT_RULES_FILE)?;
    debug!("Seeded default rules at {:?}", path);
    Ok(true)
}

/// An ordered rule set, loaded once and passed to whoever needs a kind.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    rules: Vec<Rule>,
}

impl Classifier {
    /// Wraps an already parsed rule list.
    pub fn new(rules: Vec<Rule>) -> Self {
        Classifier { rules }
    }

    /// Loads the classifier from `path`, seeding the default rules first if
    /// the file is missing.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Io` if the file cannot be created or read.
    pub fn load(path: &Path) -> AppResult<Self> {
        ensure_default_rules_file(path)?;
        let source = fs::read_to_string(path)?;
        let rules = load_rules(&source);
        debug!("Loaded {} classification rules", rules.len());
        Ok(Classifier::new(rules))
    }

    /// The classifier built from the default rules file contents.
    pub fn with_default_rules() -> Self {
        Classifier::new(load_rules(DEFAULT_RULES_FILE))
    }

    /// The rules in precedence order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Returns the kind of the first matching rule, or `article`.
    ///
    /// # Examples
    ///
    /// ```
    /// use curate::classify::Classifier;
    ///
    /// let classifier = Classifier::with_default_rules();
    /// assert_eq!(classifier.classify("https://github.com/foo/bar"), "code");
    /// assert_eq!(classifier.classify("https://example.com/post"), "article");
    /// ```
    pub fn classify(&self, url: &str) -> &str {
        self.rules
            .iter()
            .find(|rule| rule.matches(url))
            .map(Rule::kind)
            .unwrap_or(constants::FALLBACK_KIND)
    }
}

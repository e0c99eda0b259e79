//! Compilation of raw ignore tokens into anchored name matchers

use regex::Regex;

use crate::error::{LinetreeError, Result};

/// How raw ignore tokens are translated into regular expressions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PatternSyntax {
    /// Reference translation: escape the first `.`, turn the first `*` into
    /// `.*`, and hand everything else to the regex engine untouched.
    #[default]
    Legacy,
    /// Shell-style glob: every `*` is `.*`, every `?` is `.`, and all other
    /// characters match literally.
    Glob,
}

/// A single compiled ignore rule.
#[derive(Debug, Clone)]
pub struct IgnorePattern {
    raw: String,
    regex: Regex,
}

impl IgnorePattern {
    /// Compile a raw token with the given syntax.
    pub fn compile(raw: &str, syntax: PatternSyntax) -> Result<Self> {
        let normalized = normalize(raw, syntax);
        let regex = Regex::new(&normalized).map_err(|source| LinetreeError::InvalidPattern {
            pattern: raw.to_string(),
            source,
        })?;
        Ok(Self {
            raw: raw.to_string(),
            regex,
        })
    }

    /// The token as it was supplied.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The anchored regular expression the token compiled to.
    pub fn as_regex(&self) -> &str {
        self.regex.as_str()
    }

    pub fn is_match(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }
}

/// Translate a raw token into an anchored regular expression source.
pub fn normalize(raw: &str, syntax: PatternSyntax) -> String {
    match syntax {
        PatternSyntax::Legacy => anchor(raw.replacen('.', "\\.", 1).replacen('*', ".*", 1)),
        PatternSyntax::Glob => {
            let mut body = String::with_capacity(raw.len() + 4);
            for c in raw.chars() {
                match c {
                    '*' => body.push_str(".*"),
                    '?' => body.push('.'),
                    _ => body.push_str(&regex::escape(c.encode_utf8(&mut [0u8; 4]))),
                }
            }
            format!("^{body}$")
        }
    }
}

/// Add `^` and `$` unless the pattern already carries them.
fn anchor(mut pattern: String) -> String {
    if !pattern.starts_with('^') {
        pattern.insert(0, '^');
    }
    if !pattern.ends_with('$') {
        pattern.push('$');
    }
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;

    fn legacy(raw: &str) -> IgnorePattern {
        IgnorePattern::compile(raw, PatternSyntax::Legacy).unwrap()
    }

    fn glob(raw: &str) -> IgnorePattern {
        IgnorePattern::compile(raw, PatternSyntax::Glob).unwrap()
    }

    #[test]
    fn test_legacy_normalization() {
        assert_eq!(normalize(".git", PatternSyntax::Legacy), r"^\.git$");
        assert_eq!(normalize(".", PatternSyntax::Legacy), r"^\.$");
        assert_eq!(normalize("..", PatternSyntax::Legacy), r"^\..$");
        assert_eq!(normalize("*.log", PatternSyntax::Legacy), r"^.*\.log$");
        assert_eq!(normalize("build", PatternSyntax::Legacy), "^build$");
        assert_eq!(normalize("build*", PatternSyntax::Legacy), "^build.*$");
    }

    #[test]
    fn test_legacy_keeps_existing_anchors() {
        assert_eq!(normalize("^tmp", PatternSyntax::Legacy), "^tmp$");
        assert_eq!(normalize("tmp$", PatternSyntax::Legacy), "^tmp$");
        assert_eq!(normalize("^tmp$", PatternSyntax::Legacy), "^tmp$");
    }

    #[test]
    fn test_legacy_replaces_only_first_occurrence() {
        // Second dot stays a regex wildcard, second star stays a quantifier.
        assert_eq!(normalize("a.b.c", PatternSyntax::Legacy), r"^a\.b.c$");
        assert_eq!(normalize("a*b*", PatternSyntax::Legacy), "^a.*b*$");

        let p = legacy("a.b.c");
        assert!(p.is_match("a.b.c"));
        assert!(p.is_match("a.bxc"));
        assert!(!p.is_match("axb.c"));

        // `b*` means "zero or more b", so the trailing part is optional.
        let p = legacy("a*b*");
        assert!(p.is_match("a"));
        assert!(p.is_match("axyzbbb"));
    }

    #[test]
    fn test_legacy_anchored_full_name() {
        let p = legacy("build");
        assert!(p.is_match("build"));
        assert!(!p.is_match("buildtools"));
        assert!(!p.is_match("mybuild"));

        let p = legacy("build*");
        assert!(p.is_match("build"));
        assert!(p.is_match("build2"));
        assert!(p.is_match("buildtools"));
        assert!(!p.is_match("rebuild"));
    }

    #[test]
    fn test_legacy_star_extension() {
        let p = legacy("*.log");
        assert!(p.is_match("a.log"));
        assert!(p.is_match("b.log"));
        assert!(!p.is_match("a.log.txt"));
        assert!(!p.is_match("alog"));
    }

    #[test]
    fn test_legacy_dotdot_matches_two_char_dot_names() {
        let p = legacy("..");
        assert!(p.is_match(".."));
        assert!(p.is_match(".a"));
        assert!(!p.is_match("."));
        assert!(!p.is_match(".ab"));
    }

    #[test]
    fn test_legacy_case_sensitive() {
        let p = legacy("Target");
        assert!(p.is_match("Target"));
        assert!(!p.is_match("target"));
    }

    #[test]
    fn test_legacy_invalid_regex_is_error() {
        let err = IgnorePattern::compile("[abc", PatternSyntax::Legacy).unwrap_err();
        assert!(matches!(err, LinetreeError::InvalidPattern { ref pattern, .. } if pattern == "[abc"));
        assert!(err.is_configuration());
    }

    #[test]
    fn test_glob_replaces_every_star() {
        assert_eq!(normalize("a*b*", PatternSyntax::Glob), "^a.*b.*$");
        let p = glob("*.test.*");
        assert!(p.is_match("foo.test.rs"));
        assert!(!p.is_match("foo_test_rs"));
    }

    #[test]
    fn test_glob_escapes_metacharacters() {
        let p = glob("c++");
        assert!(p.is_match("c++"));
        assert!(!p.is_match("cc"));

        let p = glob("[abc]");
        assert!(p.is_match("[abc]"));
        assert!(!p.is_match("a"));

        let p = glob("file?.txt");
        assert!(p.is_match("file1.txt"));
        assert!(!p.is_match("file12.txt"));
    }

    #[test]
    fn test_raw_and_regex_accessors() {
        let p = legacy("*.log");
        assert_eq!(p.raw(), "*.log");
        assert_eq!(p.as_regex(), r"^.*\.log$");
    }
}

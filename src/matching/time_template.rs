use regex::Regex;

use crate::error::{LogError, Result};
use crate::matching::matcher::TokenMatcher;

/// Conventional timestamp shape of the supported log format.
pub const DEFAULT_TIME_TEMPLATE: &str = "hh:mm.ss";

/// A human time template compiled into a token matcher.
///
/// Each template character is widened into a character class: digits and
/// the placeholder letters `h`, `m`, `s` accept exactly one digit, any
/// other ASCII alphanumeric accepts one ASCII letter of either case,
/// and every remaining character is an exact-match separator. The
/// compiled matcher finds the first substring of a line with this
/// shape; it does not anchor to the start of the line.
#[derive(Debug, Clone)]
pub struct TimeTemplate {
    template: String,
    pattern: Regex,
}

impl TimeTemplate {
    /// Compiles `template` into a matcher.
    ///
    /// A template whose synthesized pattern fails to compile is a caller
    /// programming error and fails fast with
    /// [`LogError::MalformedPattern`].
    pub fn compile(template: &str) -> Result<Self> {
        let mut pattern = String::new();
        for ch in template.chars() {
            if ch.is_ascii_digit() || matches!(ch, 'h' | 'm' | 's') {
                pattern.push_str("[0-9]");
            } else if ch.is_ascii_alphanumeric() {
                pattern.push_str("[A-Za-z]");
            } else {
                pattern.push_str(&regex::escape(ch.encode_utf8(&mut [0; 4])));
            }
        }
        let pattern = Regex::new(&pattern).map_err(|source| LogError::MalformedPattern {
            template: template.to_string(),
            source,
        })?;
        Ok(Self {
            template: template.to_string(),
            pattern,
        })
    }

    pub fn template(&self) -> &str {
        &self.template
    }
}

impl TokenMatcher for TimeTemplate {
    fn token<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.pattern.find(line).map(|m| m.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template(t: &str) -> TimeTemplate {
        TimeTemplate::compile(t).unwrap()
    }

    #[test]
    fn accepts_matching_token() {
        assert_eq!(template("hh:mm.ss").token("04:20.00"), Some("04:20.00"));
    }

    #[test]
    fn rejects_wrong_literal_separator() {
        assert_eq!(template("hh:mm.ss").token("4:20:00"), None);
    }

    #[test]
    fn rejects_letters_where_digits_required() {
        assert_eq!(template("hh:mm.ss").token("ab:cd.ef"), None);
    }

    #[test]
    fn finds_first_token_unanchored() {
        let t = template("hh:mm.ss");
        let line = "level=INFO 04:20.07|CPU_current: 5.0";
        assert_eq!(t.token(line), Some("04:20.07"));
    }

    #[test]
    fn digits_in_template_are_digit_slots() {
        assert_eq!(template("00:00").token("late 12:59 entry"), Some("12:59"));
    }

    #[test]
    fn other_letters_are_letter_wildcards() {
        let t = template("hh:mm xM");
        assert_eq!(t.token("at 04:20 PM sharp"), Some("04:20 PM"));
        assert_eq!(t.token("at 04:20 00 sharp"), None);
    }

    #[test]
    fn punctuation_is_escaped_not_wildcarded() {
        // The '.' must match a literal dot, never ':'.
        assert_eq!(template("hh.mm").token("04:20"), None);
        assert_eq!(template("hh.mm").token("04.20"), Some("04.20"));
    }

    #[test]
    fn template_is_retained() {
        assert_eq!(template("hh:mm.ss").template(), "hh:mm.ss");
    }
}

//! Directive scanner
//!
//! Scans a name left to right. Everything before the first `#` is ignored;
//! afterwards each character is an operator candidate paired with the
//! character that follows it. The caller decides whether that value was
//! consumed: if so the scan skips it, otherwise the value is scanned again as
//! the next operator.

use std::iter::Peekable;
use std::str::Chars;

use super::{Operator, SENTINEL};

/// Operator candidate with the character following it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawDirective {
    /// Operator character
    pub operator: char,
    /// Next character, `None` at the end of the name
    pub value: Option<char>,
}

/// Lazy scanner over one name
///
/// Call [`DirectiveParser::consume_value`] after [`Iterator::next`] when the
/// yielded value was used. Parsing a name again means building a new parser.
#[derive(Debug, Clone)]
pub struct DirectiveParser<'a> {
    chars: Peekable<Chars<'a>>,
    armed: bool,
}

impl<'a> DirectiveParser<'a> {
    /// Start scanning `name`
    pub fn new(name: &'a str) -> Self {
        Self {
            chars: name.chars().peekable(),
            armed: false,
        }
    }

    /// Skip the value of the directive just yielded
    ///
    /// Returns the skipped character, `None` at the end of the name.
    pub fn consume_value(&mut self) -> Option<char> {
        self.chars.next()
    }

    /// Typed tokens of `name`, consuming values of recognized operators only
    pub fn tokens(name: &'a str) -> Tokens<'a> {
        Tokens {
            parser: Self::new(name),
        }
    }
}

impl Iterator for DirectiveParser<'_> {
    type Item = RawDirective;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let c = self.chars.next()?;
            if c == SENTINEL {
                self.armed = true;
                continue;
            }
            if !self.armed {
                continue;
            }
            return Some(RawDirective {
                operator: c,
                value: self.chars.peek().copied(),
            });
        }
    }
}

/// Directive token with the operator already classified
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// Recognized operator and its (possibly missing) value
    Directive {
        /// Operator
        operator: Operator,
        /// Value character
        value: Option<char>,
    },
    /// Character in operator position that is not an operator
    Unknown(char),
}

/// Iterator returned by [`DirectiveParser::tokens`]
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    parser: DirectiveParser<'a>,
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let raw = self.parser.next()?;
        match Operator::from_char(raw.operator) {
            Some(operator) => {
                self.parser.consume_value();
                Some(Token::Directive { operator, value: raw.value })
            }
            None => Some(Token::Unknown(raw.operator)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(name: &str) -> Vec<Token> {
        DirectiveParser::tokens(name).collect()
    }

    fn directive(operator: Operator, value: char) -> Token {
        Token::Directive { operator, value: Some(value) }
    }

    #[test]
    fn test_no_sentinel_yields_nothing() {
        assert!(tokens("").is_empty());
        assert!(tokens("Black Pearl").is_empty());
        assert!(tokens("SbFpLr").is_empty());
    }

    #[test]
    fn test_single_directive() {
        assert_eq!(tokens("Ship#Sb"), vec![directive(Operator::SailColor, 'b')]);
    }

    #[test]
    fn test_chained_directives() {
        assert_eq!(
            tokens("Revenge#SbFpLrRwDs"),
            vec![
                directive(Operator::SailColor, 'b'),
                directive(Operator::FlagTexture, 'p'),
                directive(Operator::LightColor, 'r'),
                directive(Operator::RiggingColor, 'w'),
                directive(Operator::SailTexture, 's'),
            ]
        );
    }

    #[test]
    fn test_operator_at_end_has_no_value() {
        assert_eq!(
            tokens("Ship#F"),
            vec![Token::Directive { operator: Operator::FlagTexture, value: None }]
        );
    }

    #[test]
    fn test_unknown_operator_at_end() {
        assert_eq!(tokens("Ship#Z"), vec![Token::Unknown('Z')]);
    }

    #[test]
    fn test_unknown_operator_does_not_consume() {
        // 'x' is unknown, so 'S' is scanned as the next operator
        assert_eq!(
            tokens("Ship#xSb"),
            vec![Token::Unknown('x'), directive(Operator::SailColor, 'b')]
        );
    }

    #[test]
    fn test_value_can_look_like_an_operator() {
        // The value of 'S' is 'F', which is consumed and never becomes an operator
        assert_eq!(tokens("Ship#SFb"), vec![directive(Operator::SailColor, 'F'), Token::Unknown('b')]);
    }

    #[test]
    fn test_prefix_before_sentinel_is_ignored() {
        assert_eq!(tokens("SR#Lg"), vec![directive(Operator::LightColor, 'g')]);
    }

    #[test]
    fn test_extra_sentinels_are_skipped() {
        assert_eq!(
            tokens("A#Sb#Lr##"),
            vec![directive(Operator::SailColor, 'b'), directive(Operator::LightColor, 'r')]
        );
        // A sentinel in value position is consumed as a value
        assert_eq!(tokens("A#S#"), vec![directive(Operator::SailColor, '#')]);
    }

    #[test]
    fn test_multibyte_characters() {
        assert_eq!(
            tokens("Корабль#Sé→"),
            vec![directive(Operator::SailColor, 'é'), Token::Unknown('→')]
        );
    }

    #[test]
    fn test_raw_scan_follows_caller_consumption() {
        let mut parser = DirectiveParser::new("x#ab");
        let first = parser.next().unwrap();
        assert_eq!(first, RawDirective { operator: 'a', value: Some('b') });

        // Not consumed: the value comes back as the next operator
        let second = parser.next().unwrap();
        assert_eq!(second, RawDirective { operator: 'b', value: None });
        assert_eq!(parser.next(), None);

        let mut parser = DirectiveParser::new("x#ab");
        parser.next();
        assert_eq!(parser.consume_value(), Some('b'));
        assert_eq!(parser.next(), None);
    }
}

//! Shell-style glob patterns for resource types and resource names
//!
//! Grammar: literal characters match themselves, `*` matches zero or more
//! characters excluding the segment separator `/`, `?` matches exactly one
//! such character, `[abc]` / `[a-z]` / `[^abc]` match one character against a
//! class, and `\x` escapes `x`. The whole-pattern literal `"*"` is a
//! distinguished match-everything wildcard that does cross separators; call
//! sites check [`is_match_all`] before falling back to glob matching.
//!
//! Validation parses the grammar directly rather than probing the matcher
//! with a placeholder candidate, so a malformed pattern is rejected before it
//! is ever stored.

use std::iter::Peekable;
use std::str::Chars;

/// Segment separator that `*` and `?` never match across.
pub const SEPARATOR: char = '/';

/// True if `pattern` is the distinguished match-everything wildcard.
pub fn is_match_all(pattern: &str) -> bool {
    pattern == "*"
}

/// True if `pattern` is syntactically well-formed glob syntax.
pub fn is_valid(pattern: &str) -> bool {
    parse(pattern).is_some()
}

/// Glob-match `candidate` against `pattern`.
///
/// A malformed pattern matches nothing. Note that this is plain glob
/// matching: the pattern `"*"` alone will not match a candidate containing a
/// separator — resolve [`is_match_all`] first where match-everything
/// semantics are wanted.
pub fn matches(pattern: &str, candidate: &str) -> bool {
    match parse(pattern) {
        Some(tokens) => {
            let chars: Vec<char> = candidate.chars().collect();
            match_tokens(&tokens, &chars)
        }
        None => false,
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Literal(char),
    /// `?` — exactly one non-separator character.
    AnyChar,
    /// `*` — zero or more non-separator characters.
    AnySeq,
    Class {
        negated: bool,
        ranges: Vec<(char, char)>,
    },
}

fn parse(pattern: &str) -> Option<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '*' => {
                // adjacent stars are equivalent to one
                if !matches!(tokens.last(), Some(Token::AnySeq)) {
                    tokens.push(Token::AnySeq);
                }
            }
            '?' => tokens.push(Token::AnyChar),
            '\\' => tokens.push(Token::Literal(chars.next()?)),
            '[' => tokens.push(parse_class(&mut chars)?),
            _ => tokens.push(Token::Literal(c)),
        }
    }

    Some(tokens)
}

fn parse_class(chars: &mut Peekable<Chars<'_>>) -> Option<Token> {
    let negated = chars.peek() == Some(&'^');
    if negated {
        chars.next();
    }

    let mut ranges = Vec::new();
    loop {
        if chars.peek() == Some(&']') && !ranges.is_empty() {
            chars.next();
            break;
        }

        let lo = class_char(chars)?;
        let hi = if chars.peek() == Some(&'-') {
            chars.next();
            let hi = class_char(chars)?;
            if lo > hi {
                return None;
            }
            hi
        } else {
            lo
        };

        ranges.push((lo, hi));
    }

    Some(Token::Class { negated, ranges })
}

/// One character inside a class; `]` and `-` must be escaped to appear
/// literally, and an empty class (`[]`) is malformed.
fn class_char(chars: &mut Peekable<Chars<'_>>) -> Option<char> {
    match chars.next()? {
        '\\' => chars.next(),
        ']' | '-' => None,
        c => Some(c),
    }
}

fn match_tokens(tokens: &[Token], chars: &[char]) -> bool {
    let Some((token, rest)) = tokens.split_first() else {
        return chars.is_empty();
    };

    if let Token::AnySeq = token {
        // Try every run of consumed characters, shortest first, stopping at
        // the separator boundary the star may not cross.
        for i in 0..=chars.len() {
            if match_tokens(rest, &chars[i..]) {
                return true;
            }
            if i < chars.len() && chars[i] == SEPARATOR {
                return false;
            }
        }
        return false;
    }

    let Some((&c, tail)) = chars.split_first() else {
        return false;
    };

    let matched = match token {
        Token::Literal(l) => *l == c,
        Token::AnyChar => c != SEPARATOR,
        Token::Class { negated, ranges } => {
            let in_class = ranges.iter().any(|&(lo, hi)| lo <= c && c <= hi);
            in_class != *negated
        }
        Token::AnySeq => unreachable!(),
    };

    matched && match_tokens(rest, tail)
}

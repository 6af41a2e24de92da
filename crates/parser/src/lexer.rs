//! Splits template source into text, `{{ }}`, `{% %}` and `{# #}` tokens.

use crate::error::{Location, ParseError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Text,
    Variable,
    Block,
    Comment,
}

/// A slice of the source. For tag tokens, `contents` excludes the delimiters
/// and surrounding whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub contents: &'a str,
    pub location: Location,
}

pub fn tokenize(source: &str) -> Result<Vec<Token<'_>>, ParseError> {
    let mut tokens = Vec::new();
    let mut cursor = Cursor::new();
    let mut rest = source;

    while !rest.is_empty() {
        let Some(start) = find_tag_start(rest) else {
            tokens.push(Token {
                kind: TokenKind::Text,
                contents: rest,
                location: cursor.location(),
            });
            break;
        };

        if start > 0 {
            let text = &rest[..start];
            tokens.push(Token {
                kind: TokenKind::Text,
                contents: text,
                location: cursor.location(),
            });
            cursor.advance(text);
        }

        let location = cursor.location();
        let (kind, close) = match &rest[start..start + 2] {
            "{{" => (TokenKind::Variable, "}}"),
            "{%" => (TokenKind::Block, "%}"),
            _ => (TokenKind::Comment, "#}"),
        };
        let body_start = start + 2;
        let end = rest[body_start..]
            .find(close)
            .map(|offset| body_start + offset)
            .ok_or_else(|| ParseError::syntax(format!("unclosed tag, expected '{}'", close), location))?;

        tokens.push(Token {
            kind,
            contents: rest[body_start..end].trim(),
            location,
        });
        cursor.advance(&rest[start..end + 2]);
        rest = &rest[end + 2..];
    }

    Ok(tokens)
}

fn find_tag_start(s: &str) -> Option<usize> {
    s.match_indices('{')
        .map(|(i, _)| i)
        .find(|&i| matches!(s.as_bytes().get(i + 1), Some(b'{' | b'%' | b'#')))
}

/// Tracks line and column while the lexer consumes input.
struct Cursor {
    line: usize,
    col: usize,
}

impl Cursor {
    fn new() -> Self {
        Self { line: 1, col: 1 }
    }

    fn location(&self) -> Location {
        Location {
            line: self.line,
            col: self.col,
        }
    }

    fn advance(&mut self, consumed: &str) {
        for c in consumed.chars() {
            if c == '\n' {
                self.line += 1;
                self.col = 1;
            } else {
                self.col += 1;
            }
        }
    }
}

/// Splits tag contents on whitespace, keeping quoted sections together.
///
/// `Button label="Save draft" mode=outlined` gives
/// `["Button", "label=\"Save draft\"", "mode=outlined"]`.
pub fn split_contents(contents: &str, location: Location) -> Result<Vec<&str>, ParseError> {
    let mut bits = Vec::new();
    let mut start: Option<usize> = None;
    let mut quote: Option<char> = None;

    for (i, c) in contents.char_indices() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                start.get_or_insert(i);
            }
            None if c.is_whitespace() => {
                if let Some(s) = start.take() {
                    bits.push(&contents[s..i]);
                }
            }
            None => {
                start.get_or_insert(i);
            }
        }
    }

    if quote.is_some() {
        return Err(ParseError::syntax(
            format!("unterminated string in '{}'", contents),
            location,
        ));
    }
    if let Some(s) = start {
        bits.push(&contents[s..]);
    }
    Ok(bits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_carry_their_location() {
        let tokens = tokenize("<p>\n  {% Button %}{{ user.name }}{# note #}</p>").unwrap();
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Text,
                TokenKind::Block,
                TokenKind::Variable,
                TokenKind::Comment,
                TokenKind::Text
            ]
        );
        assert_eq!(tokens[1].contents, "Button");
        assert_eq!(tokens[1].location, Location { line: 2, col: 3 });
        assert_eq!(tokens[2].contents, "user.name");
    }

    #[test]
    fn lone_braces_are_text() {
        let tokens = tokenize("a { b } c").unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Text);
    }

    #[test]
    fn unclosed_tag_is_a_syntax_error() {
        let err = tokenize("ok\n{% Button").unwrap_err();
        assert!(matches!(err, ParseError::Syntax { location, .. } if location == Location { line: 2, col: 1 }));
    }

    #[test]
    fn split_respects_quotes() {
        let loc = Location { line: 1, col: 1 };
        assert_eq!(
            split_contents(r#"Button label="Save draft" mode=outlined  'a b'"#, loc).unwrap(),
            vec!["Button", r#"label="Save draft""#, "mode=outlined", "'a b'"]
        );
        assert!(split_contents(r#"Button label="oops"#, loc).is_err());
    }
}

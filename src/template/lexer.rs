//! Lexer for component templates using logos
//!
//! Templates are free text with `#name#` placeholders. The lexer only splits
//! the input into hash marks, words and everything else; placeholders are
//! assembled from `Hash Word Hash` runs by the template parser.

use logos::Logos;

/// Byte range in template text
pub type Span = std::ops::Range<usize>;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    #[token("#")]
    Hash,

    #[regex(r"[A-Za-z0-9]+")]
    Word,

    #[regex(r"[^#A-Za-z0-9]+")]
    Other,
}

/// Tokenize template text into tokens with their spans
pub fn lex(source: &str) -> Vec<(Token, Span)> {
    Token::lexer(source)
        .spanned()
        .map(|(token, span)| (token.unwrap_or(Token::Other), span))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<Token> {
        lex(source).into_iter().map(|(t, _)| t).collect()
    }

    #[test]
    fn test_lex_placeholder_parts() {
        assert_eq!(
            kinds("size: #size#;"),
            vec![
                Token::Word,
                Token::Other,
                Token::Hash,
                Token::Word,
                Token::Hash,
                Token::Other,
            ]
        );
    }

    #[test]
    fn test_lex_spans_cover_input() {
        let source = "a #b# {{ c }}\n#";
        let tokens = lex(source);
        let rebuilt: String = tokens.iter().map(|(_, span)| &source[span.clone()]).collect();
        assert_eq!(rebuilt, source);
    }

    #[test]
    fn test_lex_non_ascii_text() {
        assert_eq!(kinds("图标 #x#"), vec![Token::Other, Token::Hash, Token::Word, Token::Hash]);
    }
}

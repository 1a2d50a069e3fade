//! Fixture parser for a tiny C-like language
//!
//! Good enough to turn test snippets such as `if (x) { y; } else z;` into a
//! [`SyntaxTree`]. It is not a production front end: there is no error
//! recovery beyond what the lint tests need.
//!
//! Grammar:
//!
//! ```text
//! unit       := statement* EOF
//! statement  := if | block | expression ';'
//! if         := 'if' [ '(' expression ')' ] [ statement ] [ 'else' statement ]
//! block      := '{' statement* '}'
//! expression := primary ( operator primary )*
//! primary    := identifier | number | '(' expression ')'
//! ```
//!
//! A token owns, as trailing trivia, everything on its own line up to and
//! including the first end-of-line. All other trivia leads the next token.
//! Lines end in `\n` or `\r\n`; a lone `\r` is rejected.

use thiserror::Error;
use trivia_syntax::{BuildError, SyntaxKind, SyntaxTree, TreeBuilder, TriviaKind};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FixtureError {
    #[error("unexpected character {found:?} at offset {offset}")]
    UnexpectedCharacter { offset: usize, found: char },

    #[error("expected {expected} at offset {offset}, found {found:?}")]
    UnexpectedToken {
        offset: usize,
        expected: &'static str,
        found: String,
    },

    #[error("unterminated block comment starting at offset {offset}")]
    UnterminatedComment { offset: usize },

    #[error(transparent)]
    Build(#[from] BuildError),
}

/// Parse a fixture snippet into a syntax tree.
///
/// ```
/// use trivia_syntax::SyntaxKind;
///
/// let tree = trivia_test_utils::parse_fixture("if(x) y;")?;
/// assert_eq!(tree.text(), "if(x) y;");
/// assert!(tree
///     .root()
///     .descendants()
///     .any(|node| node.kind() == SyntaxKind::IfStatement));
/// # Ok::<(), trivia_test_utils::FixtureError>(())
/// ```
pub fn parse_fixture(source: &str) -> Result<SyntaxTree, FixtureError> {
    let tokens = Lexer::new(source).tokenize()?;
    let mut parser = Parser {
        tokens,
        pos: 0,
        builder: TreeBuilder::new(),
    };
    parser.compilation_unit()?;
    Ok(parser.builder.finish()?)
}

type RawTrivia<'s> = (TriviaKind, &'s str);

struct LexedToken<'s> {
    kind: SyntaxKind,
    text: &'s str,
    offset: usize,
    leading: Vec<RawTrivia<'s>>,
    trailing: Vec<RawTrivia<'s>>,
}

const TWO_CHAR_OPERATORS: [&str; 6] = ["==", "!=", "<=", ">=", "&&", "||"];
const OPERATOR_CHARS: &str = "+-*/%<>=!&|";

struct Lexer<'s> {
    source: &'s str,
    pos: usize,
}

impl<'s> Lexer<'s> {
    fn new(source: &'s str) -> Self {
        Self { source, pos: 0 }
    }

    fn tokenize(mut self) -> Result<Vec<LexedToken<'s>>, FixtureError> {
        let mut tokens = Vec::new();
        loop {
            let leading = self.trivia(false)?;
            let offset = self.pos;
            let (kind, text) = self.token()?;
            self.pos += text.len();

            let at_end = kind == SyntaxKind::EndOfFile;
            let trailing = if at_end { Vec::new() } else { self.trivia(true)? };
            tokens.push(LexedToken {
                kind,
                text,
                offset,
                leading,
                trailing,
            });
            if at_end {
                return Ok(tokens);
            }
        }
    }

    /// Scan trivia; trailing trivia stops after the first end-of-line.
    fn trivia(&mut self, trailing: bool) -> Result<Vec<RawTrivia<'s>>, FixtureError> {
        let source = self.source;
        let mut trivia = Vec::new();
        loop {
            let rest = &source[self.pos..];
            let (kind, len) = if rest.starts_with("\r\n") {
                (TriviaKind::EndOfLine, 2)
            } else if rest.starts_with('\n') {
                (TriviaKind::EndOfLine, 1)
            } else if rest.starts_with([' ', '\t']) {
                let len = rest
                    .find(|c: char| c != ' ' && c != '\t')
                    .unwrap_or(rest.len());
                (TriviaKind::Whitespace, len)
            } else if rest.starts_with("//") {
                let len = rest.find(['\n', '\r']).unwrap_or(rest.len());
                (TriviaKind::SingleLineComment, len)
            } else if rest.starts_with("/*") {
                let Some(end) = rest[2..].find("*/") else {
                    return Err(FixtureError::UnterminatedComment { offset: self.pos });
                };
                (TriviaKind::MultiLineComment, end + 4)
            } else {
                return Ok(trivia);
            };

            trivia.push((kind, &rest[..len]));
            self.pos += len;
            if trailing && kind == TriviaKind::EndOfLine {
                return Ok(trivia);
            }
        }
    }

    fn token(&self) -> Result<(SyntaxKind, &'s str), FixtureError> {
        let source = self.source;
        let rest = &source[self.pos..];
        let Some(first) = rest.chars().next() else {
            return Ok((SyntaxKind::EndOfFile, ""));
        };

        let punctuation = match first {
            '(' => Some(SyntaxKind::OpenParen),
            ')' => Some(SyntaxKind::CloseParen),
            '{' => Some(SyntaxKind::OpenBrace),
            '}' => Some(SyntaxKind::CloseBrace),
            ';' => Some(SyntaxKind::Semicolon),
            _ => None,
        };
        if let Some(kind) = punctuation {
            return Ok((kind, &rest[..1]));
        }

        if first.is_ascii_alphabetic() || first == '_' {
            let len = rest
                .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
                .unwrap_or(rest.len());
            let word = &rest[..len];
            let kind = match word {
                "if" => SyntaxKind::IfKeyword,
                "else" => SyntaxKind::ElseKeyword,
                _ => SyntaxKind::Identifier,
            };
            return Ok((kind, word));
        }

        if first.is_ascii_digit() {
            let len = rest
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(rest.len());
            return Ok((SyntaxKind::NumberLiteral, &rest[..len]));
        }

        if OPERATOR_CHARS.contains(first) {
            let len = if TWO_CHAR_OPERATORS.iter().any(|op| rest.starts_with(op)) {
                2
            } else {
                1
            };
            return Ok((SyntaxKind::Operator, &rest[..len]));
        }

        Err(FixtureError::UnexpectedCharacter {
            offset: self.pos,
            found: first,
        })
    }
}

struct Parser<'s> {
    tokens: Vec<LexedToken<'s>>,
    pos: usize,
    builder: TreeBuilder,
}

impl Parser<'_> {
    fn peek(&self) -> SyntaxKind {
        self.tokens
            .get(self.pos)
            .map_or(SyntaxKind::EndOfFile, |token| token.kind)
    }

    fn at_statement_end(&self) -> bool {
        matches!(
            self.peek(),
            SyntaxKind::EndOfFile | SyntaxKind::CloseBrace | SyntaxKind::ElseKeyword
        )
    }

    /// Emit the current token with its trivia and advance.
    fn bump(&mut self) -> Result<(), FixtureError> {
        let Some(token) = self.tokens.get(self.pos) else {
            return Err(self.unexpected("a token"));
        };
        for &(kind, text) in &token.leading {
            self.builder.leading_trivia(kind, text);
        }
        self.builder.token(token.kind, token.text)?;
        for &(kind, text) in &token.trailing {
            self.builder.trailing_trivia(kind, text)?;
        }
        self.pos += 1;
        Ok(())
    }

    fn expect(&mut self, kind: SyntaxKind, expected: &'static str) -> Result<(), FixtureError> {
        if self.peek() != kind {
            return Err(self.unexpected(expected));
        }
        self.bump()
    }

    fn unexpected(&self, expected: &'static str) -> FixtureError {
        let (offset, found) = self.tokens.get(self.pos).map_or_else(
            || (0, String::new()),
            |token| (token.offset, token.text.to_string()),
        );
        FixtureError::UnexpectedToken {
            offset,
            expected,
            found,
        }
    }

    fn compilation_unit(&mut self) -> Result<(), FixtureError> {
        self.builder.start_node(SyntaxKind::CompilationUnit);
        while self.peek() != SyntaxKind::EndOfFile {
            self.statement()?;
        }
        self.bump()?;
        Ok(self.builder.finish_node()?)
    }

    fn statement(&mut self) -> Result<(), FixtureError> {
        match self.peek() {
            SyntaxKind::IfKeyword => self.if_statement(),
            SyntaxKind::OpenBrace => self.block(),
            _ => self.expression_statement(),
        }
    }

    fn if_statement(&mut self) -> Result<(), FixtureError> {
        self.builder.start_node(SyntaxKind::IfStatement);
        self.bump()?;

        if self.peek() == SyntaxKind::OpenParen {
            self.bump()?;
            self.expression()?;
            self.expect(SyntaxKind::CloseParen, "')'")?;
        }
        if !self.at_statement_end() {
            self.statement()?;
        }

        if self.peek() == SyntaxKind::ElseKeyword {
            self.builder.start_node(SyntaxKind::ElseClause);
            self.bump()?;
            if !self.at_statement_end() {
                self.statement()?;
            }
            self.builder.finish_node()?;
        }
        Ok(self.builder.finish_node()?)
    }

    fn block(&mut self) -> Result<(), FixtureError> {
        self.builder.start_node(SyntaxKind::Block);
        self.expect(SyntaxKind::OpenBrace, "'{'")?;
        while !matches!(self.peek(), SyntaxKind::CloseBrace | SyntaxKind::EndOfFile) {
            self.statement()?;
        }
        self.expect(SyntaxKind::CloseBrace, "'}'")?;
        Ok(self.builder.finish_node()?)
    }

    fn expression_statement(&mut self) -> Result<(), FixtureError> {
        self.builder.start_node(SyntaxKind::ExpressionStatement);
        self.expression()?;
        self.expect(SyntaxKind::Semicolon, "';'")?;
        Ok(self.builder.finish_node()?)
    }

    fn expression(&mut self) -> Result<(), FixtureError> {
        self.builder.start_node(SyntaxKind::Expression);
        self.primary()?;
        while self.peek() == SyntaxKind::Operator {
            self.bump()?;
            self.primary()?;
        }
        Ok(self.builder.finish_node()?)
    }

    fn primary(&mut self) -> Result<(), FixtureError> {
        match self.peek() {
            SyntaxKind::Identifier | SyntaxKind::NumberLiteral => self.bump(),
            SyntaxKind::OpenParen => {
                self.bump()?;
                self.expression()?;
                self.expect(SyntaxKind::CloseParen, "')'")
            }
            _ => Err(self.unexpected("an expression")),
        }
    }
}

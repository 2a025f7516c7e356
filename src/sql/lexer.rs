//! SQL lexer for tokenizing DDL statements.

use std::borrow::Cow;
use std::iter::Peekable;
use std::str::Chars;

use crate::diagnostic::Position;

/// SQL token types.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Keywords
    Create,
    Alter,
    Add,
    Table,
    Only,
    Primary,
    Key,
    Foreign,
    References,
    Not,
    Null,
    Unique,
    Default,
    On,
    Delete,
    Update,
    Cascade,
    Restrict,
    Constraint,
    Index,
    If,
    Exists,
    Increment, // AUTO_INCREMENT / AUTOINCREMENT
    Check,

    // Identifiers and literals
    Ident(String),
    Str(String),
    Num(String),

    // Symbols
    LParen,
    RParen,
    Comma,
    Semicolon,
    Dot,
    /// Any other punctuation (`=`, `:`, `+`, ...), kept so expressions survive.
    Symbol(char),

    // End of input
    Eof,
}

impl Token {
    /// Keyword spelling, for keywords that double as plain words.
    pub fn keyword(&self) -> Option<&'static str> {
        let word = match self {
            Token::Create => "CREATE",
            Token::Alter => "ALTER",
            Token::Add => "ADD",
            Token::Table => "TABLE",
            Token::Only => "ONLY",
            Token::Primary => "PRIMARY",
            Token::Key => "KEY",
            Token::Foreign => "FOREIGN",
            Token::References => "REFERENCES",
            Token::Not => "NOT",
            Token::Null => "NULL",
            Token::Unique => "UNIQUE",
            Token::Default => "DEFAULT",
            Token::On => "ON",
            Token::Delete => "DELETE",
            Token::Update => "UPDATE",
            Token::Cascade => "CASCADE",
            Token::Restrict => "RESTRICT",
            Token::Constraint => "CONSTRAINT",
            Token::Index => "INDEX",
            Token::If => "IF",
            Token::Exists => "EXISTS",
            Token::Increment => "AUTO_INCREMENT",
            Token::Check => "CHECK",
            _ => return None,
        };
        Some(word)
    }

    /// Source-like text of the token.
    pub fn text(&self) -> Cow<'_, str> {
        match self {
            Token::Ident(s) | Token::Num(s) => Cow::Borrowed(s),
            Token::Str(s) => Cow::Owned(format!("'{}'", s.replace('\'', "''"))),
            Token::LParen => Cow::Borrowed("("),
            Token::RParen => Cow::Borrowed(")"),
            Token::Comma => Cow::Borrowed(","),
            Token::Semicolon => Cow::Borrowed(";"),
            Token::Dot => Cow::Borrowed("."),
            Token::Symbol(c) => Cow::Owned(c.to_string()),
            Token::Eof => Cow::Borrowed(""),
            other => Cow::Borrowed(other.keyword().unwrap_or_default()),
        }
    }

    /// Keywords that are also accepted as column or table names.
    pub fn soft_keyword(&self) -> Option<&'static str> {
        match self {
            Token::Add
            | Token::Primary
            | Token::Foreign
            | Token::Key
            | Token::Index
            | Token::Unique
            | Token::Check
            | Token::Only
            | Token::On
            | Token::Delete
            | Token::Update
            | Token::Cascade
            | Token::Restrict
            | Token::If
            | Token::Exists => self.keyword(),
            _ => None,
        }
    }
}

/// Keyword token for a bare word, if it is one.
fn keyword(word: &str) -> Option<Token> {
    let token = match word.to_uppercase().as_str() {
        "CREATE" => Token::Create,
        "ALTER" => Token::Alter,
        "ADD" => Token::Add,
        "TABLE" => Token::Table,
        "ONLY" => Token::Only,
        "PRIMARY" => Token::Primary,
        "KEY" => Token::Key,
        "FOREIGN" => Token::Foreign,
        "REFERENCES" => Token::References,
        "NOT" => Token::Not,
        "NULL" => Token::Null,
        "UNIQUE" => Token::Unique,
        "DEFAULT" => Token::Default,
        "ON" => Token::On,
        "DELETE" => Token::Delete,
        "UPDATE" => Token::Update,
        "CASCADE" => Token::Cascade,
        "RESTRICT" => Token::Restrict,
        "CONSTRAINT" => Token::Constraint,
        "INDEX" => Token::Index,
        "IF" => Token::If,
        "EXISTS" => Token::Exists,
        "AUTO_INCREMENT" | "AUTOINCREMENT" => Token::Increment,
        "CHECK" => Token::Check,
        _ => return None,
    };
    Some(token)
}

/// Whether a bare word lexes as a keyword; such names must be quoted on output.
pub fn is_keyword(word: &str) -> bool {
    keyword(word).is_some()
}

/// A token and where it starts in the source.
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned {
    pub token: Token,
    pub pos: Position,
}

/// SQL lexer.
pub struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
    current_char: Option<char>,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        let mut chars = input.chars().peekable();
        let current_char = chars.next();
        Self {
            chars,
            current_char,
            line: 1,
            column: 1,
        }
    }

    fn advance(&mut self) {
        if self.current_char == Some('\n') {
            self.line += 1;
            self.column = 1;
        } else if self.current_char.is_some() {
            self.column += 1;
        }
        self.current_char = self.chars.next();
    }

    fn peek(&mut self) -> Option<&char> {
        self.chars.peek()
    }

    fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.current_char {
            if c.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn skip_line_comment(&mut self) {
        while let Some(c) = self.current_char {
            if c == '\n' {
                self.advance();
                break;
            }
            self.advance();
        }
    }

    fn skip_block_comment(&mut self) {
        self.advance(); // skip *
        while let Some(c) = self.current_char {
            if c == '*' {
                self.advance();
                if self.current_char == Some('/') {
                    self.advance();
                    break;
                }
            } else {
                self.advance();
            }
        }
    }

    fn read_identifier(&mut self) -> String {
        let mut ident = String::new();
        while let Some(c) = self.current_char {
            if c.is_alphanumeric() || c == '_' || c == '$' {
                ident.push(c);
                self.advance();
            } else {
                break;
            }
        }
        ident
    }

    fn read_quoted_identifier(&mut self, close: char) -> String {
        self.advance(); // skip opening quote
        let mut ident = String::new();
        while let Some(c) = self.current_char {
            if c == close {
                // Doubled closing quote is an escaped quote
                if self.peek() == Some(&close) {
                    ident.push(c);
                    self.advance();
                    self.advance();
                } else {
                    self.advance();
                    break;
                }
            } else {
                ident.push(c);
                self.advance();
            }
        }
        ident
    }

    fn read_string(&mut self) -> String {
        self.advance(); // skip opening quote
        let mut s = String::new();
        while let Some(c) = self.current_char {
            if c == '\'' {
                if self.peek() == Some(&'\'') {
                    s.push(c);
                    self.advance();
                    self.advance();
                } else {
                    self.advance();
                    break;
                }
            } else if c == '\\' {
                self.advance();
                if let Some(escaped) = self.current_char {
                    match escaped {
                        'n' => s.push('\n'),
                        't' => s.push('\t'),
                        'r' => s.push('\r'),
                        _ => s.push(escaped),
                    }
                    self.advance();
                }
            } else {
                s.push(c);
                self.advance();
            }
        }
        s
    }

    fn read_number(&mut self) -> String {
        let mut num = String::new();
        let mut has_dot = false;

        if self.current_char == Some('-') {
            num.push('-');
            self.advance();
        }

        while let Some(c) = self.current_char {
            if c.is_ascii_digit() {
                num.push(c);
                self.advance();
            } else if c == '.' && !has_dot {
                has_dot = true;
                num.push(c);
                self.advance();
            } else {
                break;
            }
        }
        num
    }

    fn keyword_or_ident(&self, s: &str) -> Token {
        keyword(s).unwrap_or_else(|| Token::Ident(s.to_string()))
    }

    fn next_token(&mut self) -> Spanned {
        loop {
            self.skip_whitespace();
            let pos = self.position();
            let token = |token| Spanned { token, pos };

            match self.current_char {
                None => return token(Token::Eof),

                Some('-') => {
                    if self.peek() == Some(&'-') {
                        self.skip_line_comment();
                        continue;
                    } else if self.peek().is_some_and(|c| c.is_ascii_digit()) {
                        return token(Token::Num(self.read_number()));
                    } else {
                        self.advance();
                        return token(Token::Symbol('-'));
                    }
                }

                Some('/') => {
                    self.advance();
                    if self.current_char == Some('*') {
                        self.skip_block_comment();
                        continue;
                    }
                    return token(Token::Symbol('/'));
                }

                Some('#') => {
                    self.skip_line_comment();
                    continue;
                }

                Some('(') => {
                    self.advance();
                    return token(Token::LParen);
                }
                Some(')') => {
                    self.advance();
                    return token(Token::RParen);
                }
                Some(',') => {
                    self.advance();
                    return token(Token::Comma);
                }
                Some(';') => {
                    self.advance();
                    return token(Token::Semicolon);
                }
                Some('.') => {
                    self.advance();
                    return token(Token::Dot);
                }

                Some('"') => return token(Token::Ident(self.read_quoted_identifier('"'))),
                Some('`') => return token(Token::Ident(self.read_quoted_identifier('`'))),
                Some('[') => return token(Token::Ident(self.read_quoted_identifier(']'))),

                Some('\'') => return token(Token::Str(self.read_string())),

                Some(c) if c.is_ascii_digit() => {
                    return token(Token::Num(self.read_number()));
                }

                Some(c) if c.is_alphabetic() || c == '_' => {
                    let ident = self.read_identifier();
                    return token(self.keyword_or_ident(&ident));
                }

                Some(c) => {
                    self.advance();
                    return token(Token::Symbol(c));
                }
            }
        }
    }

    /// Collect all tokens, ending with `Eof`.
    pub fn tokenize(&mut self) -> Vec<Spanned> {
        let mut tokens = Vec::new();
        loop {
            let spanned = self.next_token();
            let done = spanned.token == Token::Eof;
            tokens.push(spanned);
            if done {
                break;
            }
        }
        tokens
    }
}

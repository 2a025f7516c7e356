//! Recursive-descent parser for CREATE TABLE statements.
//!
//! Input is usually generated by a language model, so the default mode is
//! lenient: a statement that cannot be parsed is reported and skipped, and
//! parsing resumes at the next statement.

use serde::Serialize;
use thiserror::Error;

use super::fence::extract_sql;
use super::infer::infer_relationships;
use super::lexer::{Lexer, Spanned, Token};
use super::types::{is_serial, normalize_type};
use crate::diagnostic::{Diagnostic, DiagnosticCode, Position, Severity};
use crate::model::{Field, ForeignKey, LogicalType, Relationship, Schema, Table};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SqlParseError {
    #[error("{position}: malformed statement: {reason}")]
    Malformed { position: Position, reason: String },
    #[error("{position}: unsupported constraint: {reason}")]
    UnsupportedConstraint { position: Position, reason: String },
}

impl SqlParseError {
    fn into_diagnostic(self) -> Diagnostic {
        match self {
            SqlParseError::Malformed { position, reason } => {
                Diagnostic::error(DiagnosticCode::MalformedStatement, reason).at(position)
            }
            SqlParseError::UnsupportedConstraint { position, reason } => {
                Diagnostic::warning(DiagnosticCode::CompositeConstraint, reason).at(position)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Skip what cannot be parsed and report it as a diagnostic
    #[default]
    Lenient,
    /// Fail on the first malformed statement or unmodeled constraint
    Strict,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    pub mode: ParseMode,
    pub infer_relationships: bool,
    /// Parse only Markdown-fenced blocks when the input has any
    pub extract_fences: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            mode: ParseMode::Lenient,
            infer_relationships: true,
            extract_fences: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseOutcome {
    pub schema: Schema,
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseOutcome {
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }
}

/// Parse DDL text into a Schema, skipping anything that does not parse.
pub fn parse_sql(input: &str) -> Schema {
    parse_sql_with(input, &ParseOptions::default())
        .map(|outcome| outcome.schema)
        .unwrap_or_default()
}

/// Parse DDL text with explicit options. Only `ParseMode::Strict` returns `Err`.
pub fn parse_sql_with(input: &str, options: &ParseOptions) -> Result<ParseOutcome, SqlParseError> {
    let source = if options.extract_fences {
        extract_sql(input)
    } else {
        std::borrow::Cow::Borrowed(input)
    };
    let tokens = Lexer::new(&source).tokenize();
    let mut parser = Parser::new(tokens, options.mode);
    let mut outcome = parser.parse()?;

    if options.infer_relationships {
        infer_relationships(&mut outcome.schema);
    }

    tracing::debug!(
        tables = outcome.schema.tables.len(),
        relationships = outcome.schema.relationships.len(),
        diagnostics = outcome.diagnostics.len(),
        "parsed schema"
    );
    Ok(outcome)
}

/// A foreign key seen in the DDL, resolved once every table is known.
struct PendingReference {
    table: String,
    field: String,
    target: String,
    target_column: Option<String>,
    pos: Position,
}

struct FkInfo {
    columns: Vec<String>,
    target: String,
    target_columns: Vec<String>,
}

/// Type words that continue a multi-word type name.
const TYPE_CONTINUATIONS: &[&str] = &[
    "precision",
    "varying",
    "with",
    "without",
    "time",
    "zone",
    "unsigned",
    "signed",
    "zerofill",
];

struct Parser {
    tokens: Vec<Spanned>,
    pos: usize,
    mode: ParseMode,
    diagnostics: Vec<Diagnostic>,
    tables: Vec<Table>,
    references: Vec<PendingReference>,
    alter_references: Vec<PendingReference>,
}

impl Parser {
    fn new(tokens: Vec<Spanned>, mode: ParseMode) -> Self {
        Self {
            tokens,
            pos: 0,
            mode,
            diagnostics: Vec::new(),
            tables: Vec::new(),
            references: Vec::new(),
            alter_references: Vec::new(),
        }
    }

    fn current(&self) -> &Token {
        self.tokens.get(self.pos).map_or(&Token::Eof, |s| &s.token)
    }

    fn peek_at(&self, offset: usize) -> &Token {
        self.tokens
            .get(self.pos + offset)
            .map_or(&Token::Eof, |s| &s.token)
    }

    fn position(&self) -> Position {
        self.tokens
            .get(self.pos)
            .or_else(|| self.tokens.last())
            .map(|s| s.pos)
            .unwrap_or_default()
    }

    fn advance(&mut self) {
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
    }

    fn warn(&mut self, code: DiagnosticCode, message: String, pos: Position) {
        self.diagnostics.push(Diagnostic::warning(code, message).at(pos));
    }

    /// Record an unmodeled constraint. Strict mode turns it into an error.
    fn unsupported(&mut self, reason: String, position: Position) -> Result<(), SqlParseError> {
        let err = SqlParseError::UnsupportedConstraint { position, reason };
        match self.mode {
            ParseMode::Strict => Err(err),
            ParseMode::Lenient => {
                self.diagnostics.push(err.into_diagnostic());
                Ok(())
            }
        }
    }

    /// Identifier at the cursor, accepting keywords that double as names.
    fn name_here(&self) -> Option<String> {
        match self.current() {
            Token::Ident(name) => Some(name.to_lowercase()),
            other => other.soft_keyword().map(str::to_lowercase),
        }
    }

    fn parse(&mut self) -> Result<ParseOutcome, SqlParseError> {
        while self.current() != &Token::Eof {
            let start = self.pos;
            let result = match self.current() {
                Token::Create => self.parse_create(),
                Token::Alter => self.parse_alter(),
                _ => {
                    self.advance();
                    Ok(())
                }
            };

            if let Err(err) = result {
                if self.mode == ParseMode::Strict {
                    return Err(err);
                }
                self.diagnostics.push(err.into_diagnostic());
                if self.pos == start {
                    self.advance();
                }
                self.skip_statement();
            }
        }

        let relationships = self.resolve_references();
        Ok(ParseOutcome {
            schema: Schema {
                tables: std::mem::take(&mut self.tables),
                relationships,
            },
            diagnostics: std::mem::take(&mut self.diagnostics),
        })
    }

    fn parse_create(&mut self) -> Result<(), SqlParseError> {
        let start = self.position();
        self.advance(); // CREATE

        while let Token::Ident(word) = self.current() {
            if matches!(
                word.to_uppercase().as_str(),
                "TEMP" | "TEMPORARY" | "UNLOGGED" | "GLOBAL" | "LOCAL" | "OR" | "REPLACE"
            ) {
                self.advance();
            } else {
                break;
            }
        }

        if self.current() != &Token::Table {
            // CREATE INDEX, VIEW, ...
            self.skip_statement();
            return Ok(());
        }
        self.advance();

        if self.current() == &Token::If {
            self.advance();
            if self.current() == &Token::Not {
                self.advance();
            }
            if self.current() == &Token::Exists {
                self.advance();
            }
        }

        let name = self
            .parse_object_name()
            .ok_or_else(|| SqlParseError::Malformed {
                position: self.position(),
                reason: "expected table name after CREATE TABLE".to_string(),
            })?;

        if self.current() != &Token::LParen {
            return Err(SqlParseError::Malformed {
                position: self.position(),
                reason: format!("expected '(' after table name {}", name),
            });
        }

        let (table, references) = self.parse_table_body(name)?;
        self.skip_table_options();

        if self.tables.iter().any(|t| t.name == table.name) {
            self.warn(
                DiagnosticCode::DuplicateTable,
                format!("table {} is declared more than once; keeping the first", table.name),
                start,
            );
            return Ok(());
        }

        tracing::debug!(table = %table.name, columns = table.fields.len(), "parsed table");
        self.tables.push(table);
        self.references.extend(references);
        Ok(())
    }

    /// `[schema.]name`, lowercased, schema qualifier dropped.
    fn parse_object_name(&mut self) -> Option<String> {
        let mut name = self.name_here()?;
        self.advance();
        while self.current() == &Token::Dot {
            self.advance();
            name = self.name_here()?;
            self.advance();
        }
        Some(name)
    }

    fn parse_table_body(
        &mut self,
        table_name: String,
    ) -> Result<(Table, Vec<PendingReference>), SqlParseError> {
        self.advance(); // (

        let mut fields: Vec<Field> = Vec::new();
        let mut references = Vec::new();
        let mut pk_columns: Vec<(String, Position)> = Vec::new();

        loop {
            match self.current() {
                Token::RParen => {
                    self.advance();
                    break;
                }
                Token::Comma => {
                    self.advance();
                }
                Token::Eof | Token::Semicolon => {
                    return Err(SqlParseError::Malformed {
                        position: self.position(),
                        reason: format!("unterminated column list for table {}", table_name),
                    });
                }
                Token::Constraint => {
                    self.advance();
                    if matches!(self.current(), Token::Ident(_)) {
                        self.advance();
                    }
                }
                Token::Primary if self.peek_at(1) == &Token::Key => {
                    let pos = self.position();
                    self.advance();
                    if self.current() == &Token::Key {
                        self.advance();
                    }
                    let columns = self.parse_column_list();
                    match columns.len() {
                        0 => {}
                        1 => pk_columns.extend(columns.into_iter().map(|c| (c, pos))),
                        _ => self.unsupported(
                            format!(
                                "composite primary key ({}) on table {} is not modeled",
                                columns.join(", "),
                                table_name
                            ),
                            pos,
                        )?,
                    }
                    self.skip_until_clause_end();
                }
                Token::Foreign if self.peek_at(1) == &Token::Key => {
                    let pos = self.position();
                    if let Some(fk) = self.parse_foreign_key_constraint() {
                        if fk.columns.len() == 1 && fk.target_columns.len() <= 1 {
                            references.push(PendingReference {
                                table: table_name.clone(),
                                field: fk.columns[0].clone(),
                                target: fk.target,
                                target_column: fk.target_columns.into_iter().next(),
                                pos,
                            });
                        } else {
                            self.unsupported(
                                format!(
                                    "composite foreign key ({}) on table {} is not modeled",
                                    fk.columns.join(", "),
                                    table_name
                                ),
                                pos,
                            )?;
                        }
                    }
                    self.skip_until_clause_end();
                }
                _ if self.index_clause_here() => {
                    self.skip_until_clause_end();
                }
                _ if self.name_here().is_some() => {
                    let pos = self.position();
                    let (field, reference) = self.parse_column();
                    if fields.iter().any(|f| f.name == field.name) {
                        self.warn(
                            DiagnosticCode::DuplicateColumn,
                            format!(
                                "column {} is declared more than once in table {}; keeping the first",
                                field.name, table_name
                            ),
                            pos,
                        );
                        continue;
                    }
                    if let Some((target, target_column)) = reference {
                        references.push(PendingReference {
                            table: table_name.clone(),
                            field: field.name.clone(),
                            target,
                            target_column,
                            pos,
                        });
                    }
                    fields.push(field);
                }
                _ => {
                    self.advance();
                }
            }
        }

        for (column, pos) in pk_columns {
            match fields.iter_mut().find(|f| f.name == column) {
                Some(field) => {
                    field.primary_key = true;
                    field.nullable = false;
                }
                None => self.warn(
                    DiagnosticCode::UnknownColumn,
                    format!("primary key names unknown column {}.{}", table_name, column),
                    pos,
                ),
            }
        }

        Ok((Table::new(table_name, fields), references))
    }

    /// Whether the clause at the cursor is a UNIQUE, CHECK or index clause
    /// rather than a column that happens to be named `key`, `unique`, ...
    fn index_clause_here(&self) -> bool {
        match self.current() {
            Token::Unique | Token::Check => {
                matches!(self.peek_at(1), Token::LParen | Token::Key | Token::Index)
            }
            // `KEY (a)` or `KEY idx (a)`, but not `key VARCHAR(255)`
            Token::Key | Token::Index => match self.peek_at(1) {
                Token::LParen => true,
                Token::Ident(next) => {
                    normalize_type(next).is_none() && self.peek_at(2) == &Token::LParen
                }
                _ => false,
            },
            Token::Ident(word)
                if word.eq_ignore_ascii_case("FULLTEXT") || word.eq_ignore_ascii_case("SPATIAL") =>
            {
                matches!(self.peek_at(1), Token::Key | Token::Index)
            }
            _ => false,
        }
    }

    /// One column definition: name, type, then constraints until `,` or `)`.
    fn parse_column(&mut self) -> (Field, Option<(String, Option<String>)>) {
        let name = self.name_here().unwrap_or_default();
        self.advance();

        let type_pos = self.position();
        let raw_type = self.parse_raw_type();
        let typ = match normalize_type(&raw_type) {
            Some(typ) => typ,
            None => {
                if !raw_type.is_empty() {
                    self.diagnostics.push(
                        Diagnostic::info(
                            DiagnosticCode::UnknownType,
                            format!("type {} of column {} is stored as text", raw_type, name),
                        )
                        .at(type_pos),
                    );
                }
                LogicalType::Text
            }
        };

        let mut primary = false;
        let mut auto_increment = false;
        let mut not_null = false;
        let mut default_value = None;
        let mut reference = None;

        loop {
            match self.current() {
                Token::Primary => {
                    self.advance();
                    if self.current() == &Token::Key {
                        self.advance();
                    }
                    primary = true;
                }
                Token::Increment => {
                    self.advance();
                    auto_increment = true;
                }
                Token::Not => {
                    self.advance();
                    if self.current() == &Token::Null {
                        self.advance();
                        not_null = true;
                    }
                }
                Token::Default => {
                    self.advance();
                    default_value = self.parse_default_value();
                }
                Token::References => {
                    self.advance();
                    if let Some((target, mut columns)) = self.parse_reference() {
                        let column = if columns.is_empty() {
                            None
                        } else {
                            Some(columns.swap_remove(0))
                        };
                        reference = Some((target, column));
                    }
                    self.skip_on_actions();
                }
                Token::Check | Token::LParen => {
                    if self.current() == &Token::Check {
                        self.advance();
                    }
                    self.skip_parenthesized();
                }
                Token::On => self.skip_on_actions(),
                Token::Comma | Token::RParen | Token::Semicolon | Token::Eof => break,
                _ => {
                    self.advance();
                }
            }
        }

        // AUTO_INCREMENT / AUTOINCREMENT imply a key the same way SERIAL does
        let primary_key = primary || auto_increment || is_serial(&raw_type);
        let field = Field {
            name,
            typ,
            nullable: !(not_null || primary_key),
            primary_key,
            foreign_key: None,
            default_value,
        };
        (field, reference)
    }

    /// Type words plus any `(...)` arguments, e.g. `NUMERIC(10, 2)` or
    /// `TIMESTAMP WITH TIME ZONE`. Empty when the column has no type.
    fn parse_raw_type(&mut self) -> String {
        let mut raw = match self.current() {
            Token::Ident(word) => word.clone(),
            _ => return String::new(),
        };
        self.advance();
        if self.current() == &Token::LParen {
            raw.push_str(&self.collect_parenthesized());
        }

        while let Token::Ident(word) = self.current() {
            if !TYPE_CONTINUATIONS.contains(&word.to_lowercase().as_str()) {
                break;
            }
            raw.push(' ');
            raw.push_str(word);
            self.advance();
            if self.current() == &Token::LParen {
                raw.push_str(&self.collect_parenthesized());
            }
        }

        // Postgres array suffix; `[]` lexes as an empty bracketed identifier
        while matches!(self.current(), Token::Ident(s) if s.is_empty()) {
            raw.push_str("[]");
            self.advance();
        }

        raw
    }

    /// One default value, kept verbatim (literal, word, call or parenthesized expression).
    fn parse_default_value(&mut self) -> Option<String> {
        let value = match self.current() {
            Token::Str(_) | Token::Num(_) | Token::Null => {
                let text = self.current().text().into_owned();
                self.advance();
                text
            }
            Token::Ident(word) => {
                let mut text = word.clone();
                self.advance();
                if self.current() == &Token::LParen {
                    text.push_str(&self.collect_parenthesized());
                }
                text
            }
            Token::LParen => self.collect_parenthesized(),
            _ => return None,
        };
        Some(value)
    }

    /// Consume a balanced `( ... )` group and render it back to text.
    fn collect_parenthesized(&mut self) -> String {
        let mut out = String::new();
        let mut depth = 0usize;
        let mut prev: Option<Token> = None;

        loop {
            let token = self.current().clone();
            match token {
                Token::Eof | Token::Semicolon => break,
                Token::LParen => depth += 1,
                Token::RParen => depth = depth.saturating_sub(1),
                _ => {}
            }

            let glued = match (&prev, &token) {
                (None, _) => true,
                (Some(Token::LParen | Token::Dot), _) => true,
                (_, Token::RParen | Token::Comma | Token::Dot) => true,
                (Some(Token::Ident(_)), Token::LParen) => true,
                _ => false,
            };
            if !glued {
                out.push(' ');
            }
            out.push_str(&token.text());
            self.advance();

            if depth == 0 {
                break;
            }
            prev = Some(token);
        }

        out
    }

    /// `table [(col, ...)]`, names lowercased, schema qualifier dropped.
    fn parse_reference(&mut self) -> Option<(String, Vec<String>)> {
        let target = self.parse_object_name()?;
        let columns = self.parse_column_list();
        Some((target, columns))
    }

    /// `FOREIGN KEY (cols) REFERENCES table (cols)`
    fn parse_foreign_key_constraint(&mut self) -> Option<FkInfo> {
        self.advance(); // FOREIGN
        if self.current() != &Token::Key {
            return None;
        }
        self.advance();

        let columns = self.parse_column_list();
        if self.current() != &Token::References {
            return None;
        }
        self.advance();

        let (target, target_columns) = self.parse_reference()?;
        self.skip_on_actions();

        Some(FkInfo {
            columns,
            target,
            target_columns,
        })
    }

    fn parse_column_list(&mut self) -> Vec<String> {
        let mut cols = Vec::new();

        if self.current() != &Token::LParen {
            return cols;
        }
        self.advance();

        loop {
            match self.current() {
                Token::RParen => {
                    self.advance();
                    break;
                }
                Token::Eof | Token::Semicolon => break,
                Token::LParen => self.skip_parenthesized(),
                _ => {
                    if let Some(name) = self.name_here() {
                        cols.push(name);
                    }
                    self.advance();
                }
            }
        }

        cols
    }

    /// `ALTER TABLE [ONLY] t ADD [CONSTRAINT n] FOREIGN KEY (c) REFERENCES r (x)`.
    /// Any other ALTER statement is skipped.
    fn parse_alter(&mut self) -> Result<(), SqlParseError> {
        self.advance(); // ALTER

        if self.current() != &Token::Table {
            self.skip_statement();
            return Ok(());
        }
        self.advance();

        if self.current() == &Token::If {
            self.advance();
            if self.current() == &Token::Exists {
                self.advance();
            }
        }
        if self.current() == &Token::Only {
            self.advance();
        }

        let Some(table_name) = self.parse_object_name() else {
            self.skip_statement();
            return Ok(());
        };

        if self.current() != &Token::Add {
            self.skip_statement();
            return Ok(());
        }
        self.advance();

        if self.current() == &Token::Constraint {
            self.advance();
            if matches!(self.current(), Token::Ident(_)) {
                self.advance();
            }
        }

        if self.current() != &Token::Foreign {
            self.skip_statement();
            return Ok(());
        }

        let pos = self.position();
        if let Some(fk) = self.parse_foreign_key_constraint() {
            if fk.columns.len() == 1 && fk.target_columns.len() <= 1 {
                self.alter_references.push(PendingReference {
                    table: table_name,
                    field: fk.columns[0].clone(),
                    target: fk.target,
                    target_column: fk.target_columns.into_iter().next(),
                    pos,
                });
            } else {
                self.unsupported(
                    format!(
                        "composite foreign key ({}) on table {} is not modeled",
                        fk.columns.join(", "),
                        table_name
                    ),
                    pos,
                )?;
            }
        }

        self.skip_statement();
        Ok(())
    }

    /// Turn collected foreign keys into field links and relationships:
    /// CREATE TABLE references first, in declaration order, then ALTER TABLE ones.
    fn resolve_references(&mut self) -> Vec<Relationship> {
        let mut pending = std::mem::take(&mut self.references);
        pending.append(&mut self.alter_references);

        let mut relationships = Vec::new();
        let mut warnings = Vec::new();
        for reference in pending {
            let target_table = self.tables.iter().find(|t| t.name == reference.target);
            if target_table.is_none() {
                warnings.push(
                    Diagnostic::warning(
                        DiagnosticCode::UnknownReference,
                        format!(
                            "{}.{} references undeclared table {}",
                            reference.table, reference.field, reference.target
                        ),
                    )
                    .at(reference.pos),
                );
            }
            let target_column = reference
                .target_column
                .or_else(|| target_table.and_then(|t| t.primary_key()).map(|f| f.name.clone()))
                .unwrap_or_else(|| "id".to_string());

            let field = self
                .tables
                .iter_mut()
                .find(|t| t.name == reference.table)
                .and_then(|t| t.field_mut(&reference.field));
            let Some(field) = field else {
                warnings.push(
                    Diagnostic::warning(
                        DiagnosticCode::UnknownColumn,
                        format!(
                            "foreign key names unknown column {}.{}",
                            reference.table, reference.field
                        ),
                    )
                    .at(reference.pos),
                );
                continue;
            };

            if field.foreign_key.is_some() {
                warnings.push(
                    Diagnostic::warning(
                        DiagnosticCode::DuplicateForeignKey,
                        format!(
                            "{}.{} already has a foreign key; ignoring reference to {}",
                            reference.table, reference.field, reference.target
                        ),
                    )
                    .at(reference.pos),
                );
                continue;
            }

            field.foreign_key = Some(ForeignKey {
                table: reference.target.clone(),
                column: target_column.clone(),
            });
            relationships.push(Relationship {
                from_table: reference.table,
                from_field: reference.field,
                to_table: reference.target,
                to_field: target_column,
                inferred: false,
            });
        }

        self.diagnostics.extend(warnings);
        relationships
    }

    fn skip_on_actions(&mut self) {
        while self.current() == &Token::On {
            self.advance();
            if matches!(self.current(), Token::Delete | Token::Update) {
                self.advance();
            }
            // CASCADE, RESTRICT, SET NULL, SET DEFAULT, NO ACTION
            match self.current() {
                Token::Cascade | Token::Restrict => self.advance(),
                Token::Ident(s) if s.eq_ignore_ascii_case("SET") => {
                    self.advance();
                    if matches!(self.current(), Token::Null | Token::Default) {
                        self.advance();
                    }
                }
                Token::Ident(s) if s.eq_ignore_ascii_case("NO") => {
                    self.advance();
                    if matches!(self.current(), Token::Ident(a) if a.eq_ignore_ascii_case("ACTION"))
                    {
                        self.advance();
                    }
                }
                _ => {}
            }
        }
    }

    fn skip_parenthesized(&mut self) {
        if self.current() != &Token::LParen {
            self.advance();
            return;
        }
        self.advance();
        let mut depth = 1;
        while depth > 0 {
            match self.current() {
                Token::LParen => depth += 1,
                Token::RParen => depth -= 1,
                Token::Eof | Token::Semicolon => break,
                _ => {}
            }
            self.advance();
        }
    }

    /// Skip the rest of a table-level clause, stopping before `,` or `)`.
    fn skip_until_clause_end(&mut self) {
        while !matches!(
            self.current(),
            Token::Comma | Token::RParen | Token::Semicolon | Token::Eof
        ) {
            if self.current() == &Token::LParen {
                self.skip_parenthesized();
            } else {
                self.advance();
            }
        }
    }

    /// Skip table options such as `ENGINE=InnoDB` up to the end of the statement.
    /// A missing `;` before the next statement is tolerated.
    fn skip_table_options(&mut self) {
        while !matches!(
            self.current(),
            Token::Semicolon | Token::Eof | Token::Create | Token::Alter
        ) {
            self.advance();
        }
        if self.current() == &Token::Semicolon {
            self.advance();
        }
    }

    fn skip_statement(&mut self) {
        while !matches!(
            self.current(),
            Token::Semicolon | Token::Eof | Token::Create | Token::Alter
        ) {
            self.advance();
        }
        if self.current() == &Token::Semicolon {
            self.advance();
        }
    }
}

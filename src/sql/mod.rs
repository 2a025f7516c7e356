//! SQL DDL parsing, relationship inference and dialect-aware generation.

mod dialect;
mod fence;
mod generator;
mod infer;
mod lexer;
mod parser;
mod types;

pub use dialect::{Dialect, DialectSyntax};
pub use fence::extract_sql;
pub use generator::{GenerateOptions, generate_sql, generate_sql_with, quote_ident};
pub use infer::infer_relationships;
pub use parser::{ParseMode, ParseOptions, ParseOutcome, SqlParseError, parse_sql, parse_sql_with};
pub use types::{map_data_type, normalize_type};

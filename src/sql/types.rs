//! Type normalization (SQL -> logical) and type mapping (logical -> SQL).

use super::Dialect;
use crate::model::LogicalType;

/// Lowercased first word of a raw type, without any `(...)` arguments.
fn base_word(raw: &str) -> String {
    let lower = raw.trim().to_lowercase();
    let head = lower.split('(').next().unwrap_or(&lower);
    head.split_whitespace().next().unwrap_or_default().to_string()
}

/// Normalize a raw column type to a logical type. `None` for unrecognized types.
pub fn normalize_type(raw: &str) -> Option<LogicalType> {
    let typ = match base_word(raw).as_str() {
        "int" | "integer" | "int2" | "int4" | "int8" | "smallint" | "bigint" | "mediumint"
        | "tinyint" | "serial" | "bigserial" | "smallserial" | "serial2" | "serial4"
        | "serial8" => LogicalType::Int8,

        "text" | "varchar" | "char" | "character" | "nvarchar" | "nchar" | "string" | "clob"
        | "tinytext" | "mediumtext" | "longtext" | "citext" | "enum" => LogicalType::Text,

        "boolean" | "bool" => LogicalType::Boolean,

        "timestamp" | "timestamptz" | "datetime" | "date" | "time" | "timetz" => {
            LogicalType::Timestamp
        }

        "numeric" | "decimal" | "real" | "float" | "float4" | "float8" | "double" | "money" => {
            LogicalType::Numeric
        }

        "uuid" | "uniqueidentifier" => LogicalType::Uuid,

        "json" | "jsonb" => LogicalType::Json,

        _ => return None,
    };
    Some(typ)
}

/// Auto-increment integer types that imply a primary key.
pub fn is_serial(raw: &str) -> bool {
    matches!(
        base_word(raw).as_str(),
        "serial" | "bigserial" | "smallserial" | "serial2" | "serial4" | "serial8"
    )
}

/// Logical type named by a type token, accepting common spellings.
fn logical_alias(base: &str) -> Option<LogicalType> {
    let typ = match base {
        "int" | "integer" | "bigint" => LogicalType::Int8,
        "string" => LogicalType::Text,
        "bool" => LogicalType::Boolean,
        "timestamptz" | "datetime" => LogicalType::Timestamp,
        "decimal" => LogicalType::Numeric,
        "jsonb" => LogicalType::Json,
        other => return LogicalType::from_name(other),
    };
    Some(typ)
}

/// Map a free-form type token to the dialect's spelling.
///
/// Unknown tokens are returned upper-cased, arguments included.
pub fn map_data_type(raw: &str, dialect: Dialect) -> String {
    let syntax = dialect.syntax();
    let trimmed = raw.trim();
    let (head, args) = match trimmed.find('(') {
        Some(i) => (&trimmed[..i], Some(&trimmed[i..])),
        None => (trimmed, None),
    };
    let base = head.trim().to_lowercase();

    match base.as_str() {
        "serial" | "bigserial" => syntax.auto_increment_pk.to_string(),
        "varchar" | "character varying" => match (dialect, args) {
            (Dialect::Sqlite, _) | (_, None) => syntax.text.to_string(),
            (_, Some(args)) => format!("VARCHAR{}", args.trim()),
        },
        other => match logical_alias(other) {
            Some(typ) => syntax.type_name(typ).to_string(),
            None => trimmed.to_uppercase(),
        },
    }
}

/// Rewrite a captured default into the target dialect.
///
/// Current-timestamp and random-UUID expressions use the dialect's spelling;
/// SQLite booleans become integers. Anything else is kept verbatim.
pub fn translate_default(value: &str, dialect: Dialect) -> String {
    let syntax = dialect.syntax();
    let normalized: String = value
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    match normalized.as_str() {
        "now()" | "current_timestamp" | "current_timestamp()" | "localtimestamp"
        | "datetime('now')" => syntax.now.to_string(),
        "gen_random_uuid()" | "uuid()" | "uuid_generate_v4()" | "lower(hex(randomblob(16)))" => {
            syntax.uuid_fn.to_string()
        }
        "true" if dialect == Dialect::Sqlite => "1".to_string(),
        "false" if dialect == Dialect::Sqlite => "0".to_string(),
        _ => value.trim().to_string(),
    }
}

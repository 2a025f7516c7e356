//! Render a Schema as dialect-specific CREATE TABLE statements.

use std::borrow::Cow;

use super::Dialect;
use super::lexer::is_keyword;
use super::types::translate_default;
use crate::model::{Field, LogicalType, Schema, Table};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GenerateOptions {
    /// Append captured `DEFAULT` values, translated to the dialect
    pub with_defaults: bool,
}

/// One `CREATE TABLE IF NOT EXISTS` statement per table, separated by blank lines.
pub fn generate_sql(schema: &Schema, dialect: Dialect) -> String {
    generate_sql_with(schema, dialect, &GenerateOptions::default())
}

pub fn generate_sql_with(schema: &Schema, dialect: Dialect, options: &GenerateOptions) -> String {
    let mut output = String::new();

    for (i, table) in schema.tables.iter().enumerate() {
        if i > 0 {
            output.push_str("\n\n");
        }
        write_table(&mut output, schema, table, dialect, options);
    }

    tracing::debug!(
        dialect = dialect.syntax().name,
        tables = schema.tables.len(),
        "generated sql"
    );
    output
}

fn write_table(
    output: &mut String,
    schema: &Schema,
    table: &Table,
    dialect: Dialect,
    options: &GenerateOptions,
) {
    let quote = dialect.syntax().quote;
    let columns: Vec<String> = table
        .fields
        .iter()
        .map(|field| render_column(schema, table, field, dialect, options))
        .collect();

    output.push_str("CREATE TABLE IF NOT EXISTS ");
    output.push_str(&quote_ident(&table.name, quote));
    output.push_str(" (\n  ");
    output.push_str(&columns.join(",\n  "));
    output.push_str("\n);");
}

fn render_column(
    schema: &Schema,
    table: &Table,
    field: &Field,
    dialect: Dialect,
    options: &GenerateOptions,
) -> String {
    let syntax = dialect.syntax();
    let quote = syntax.quote;
    let mut column = quote_ident(&field.name, quote).into_owned();
    column.push(' ');

    let auto_increment = field.primary_key && field.typ == LogicalType::Int8;
    if auto_increment {
        column.push_str(syntax.auto_increment_pk);
    } else {
        column.push_str(syntax.type_name(field.typ));
        if field.primary_key {
            column.push_str(" PRIMARY KEY");
        }
    }

    if !field.nullable && !field.primary_key {
        column.push_str(" NOT NULL");
    }

    if options.with_defaults && !auto_increment {
        if let Some(value) = &field.default_value {
            column.push_str(" DEFAULT ");
            column.push_str(&translate_default(value, dialect));
        }
    }

    if let Some(rel) = schema.relationship_from(&table.name, &field.name) {
        column.push_str(&format!(
            " REFERENCES {}({})",
            quote_ident(&rel.to_table, quote),
            quote_ident(&rel.to_field, quote)
        ));
    }

    column
}

fn is_plain_ident(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_lowercase() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

/// Quote names that are not plain lowercase words or that read back as
/// keywords, doubling embedded quotes.
pub fn quote_ident(name: &str, quote: char) -> Cow<'_, str> {
    if is_plain_ident(name) && !is_keyword(name) {
        return Cow::Borrowed(name);
    }
    let escaped = name.replace(quote, &format!("{quote}{quote}"));
    Cow::Owned(format!("{quote}{escaped}{quote}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Field, Table};
    use pretty_assertions::assert_eq;

    fn blog() -> Schema {
        let mut schema = Schema::default();
        schema.add_table(Table::new(
            "users",
            vec![
                Field::new("id", LogicalType::Int8).primary(),
                Field::new("email", LogicalType::Text).not_null(),
            ],
        ));
        schema.add_table(Table::new(
            "posts",
            vec![
                Field::new("id", LogicalType::Int8).primary(),
                Field::new("user_id", LogicalType::Int8),
                Field::new("published", LogicalType::Boolean)
                    .not_null()
                    .with_default("false"),
                Field::new("created_at", LogicalType::Timestamp).with_default("NOW()"),
            ],
        ));
        schema.link("posts", "user_id", "users", "id").unwrap();
        schema
    }

    #[test]
    fn test_generate_postgres() {
        let sql = generate_sql(&blog(), Dialect::Postgres);
        assert_eq!(
            sql,
            "CREATE TABLE IF NOT EXISTS users (\n  \
             id SERIAL PRIMARY KEY,\n  \
             email TEXT NOT NULL\n\
             );\n\n\
             CREATE TABLE IF NOT EXISTS posts (\n  \
             id SERIAL PRIMARY KEY,\n  \
             user_id INTEGER REFERENCES users(id),\n  \
             published BOOLEAN NOT NULL,\n  \
             created_at TIMESTAMP\n\
             );"
        );
    }

    #[test]
    fn test_generate_mysql_and_sqlite_types() {
        let mysql = generate_sql(&blog(), Dialect::MySql);
        assert!(mysql.contains("id INT AUTO_INCREMENT PRIMARY KEY,"));
        assert!(mysql.contains("user_id INT REFERENCES users(id),"));

        let sqlite = generate_sql(&blog(), Dialect::Sqlite);
        assert!(sqlite.contains("id INTEGER PRIMARY KEY AUTOINCREMENT,"));
        assert!(sqlite.contains("published INTEGER NOT NULL,"));
        assert!(sqlite.contains("created_at TEXT\n"));
    }

    #[test]
    fn test_non_integer_primary_key() {
        let mut schema = Schema::default();
        schema.add_table(Table::new(
            "sessions",
            vec![Field::new("token", LogicalType::Uuid).primary()],
        ));

        assert_eq!(
            generate_sql(&schema, Dialect::Postgres),
            "CREATE TABLE IF NOT EXISTS sessions (\n  token UUID PRIMARY KEY\n);"
        );
        assert!(generate_sql(&schema, Dialect::Sqlite).contains("token TEXT PRIMARY KEY"));
    }

    #[test]
    fn test_with_defaults() {
        let options = GenerateOptions {
            with_defaults: true,
        };

        let sqlite = generate_sql_with(&blog(), Dialect::Sqlite, &options);
        assert!(sqlite.contains("published INTEGER NOT NULL DEFAULT 0,"));
        assert!(sqlite.contains("created_at TEXT DEFAULT datetime('now')\n"));

        let pg = generate_sql_with(&blog(), Dialect::Postgres, &options);
        assert!(pg.contains("published BOOLEAN NOT NULL DEFAULT false,"));
        assert!(pg.contains("created_at TIMESTAMP DEFAULT NOW()\n"));
    }

    #[test]
    fn test_defaults_off_by_default() {
        assert!(!generate_sql(&blog(), Dialect::Postgres).contains("DEFAULT"));
    }

    #[test]
    fn test_quoting() {
        assert_eq!(quote_ident("users", '"'), "users");
        assert_eq!(quote_ident("user table", '"'), "\"user table\"");
        assert_eq!(quote_ident("Order", '`'), "`Order`");
        assert_eq!(quote_ident("2fa", '"'), "\"2fa\"");
        assert_eq!(quote_ident("we\"ird", '"'), "\"we\"\"ird\"");
    }

    #[test]
    fn test_keyword_names_are_quoted() {
        assert_eq!(quote_ident("key", '"'), "\"key\"");
        assert_eq!(quote_ident("index", '`'), "`index`");
        assert_eq!(quote_ident("update", '"'), "\"update\"");
        assert_eq!(quote_ident("value", '"'), "value");

        let mut schema = Schema::default();
        schema.add_table(Table::new(
            "settings",
            vec![
                Field::new("key", LogicalType::Text).primary(),
                Field::new("value", LogicalType::Text),
            ],
        ));
        assert_eq!(
            generate_sql(&schema, Dialect::MySql),
            "CREATE TABLE IF NOT EXISTS settings (\n  `key` TEXT PRIMARY KEY,\n  value TEXT\n);"
        );
    }

    #[test]
    fn test_empty_schema() {
        assert_eq!(generate_sql(&Schema::default(), Dialect::MySql), "");
    }
}

//! SQL dialect selection and per-dialect syntax.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::LogicalType;

/// Target SQL families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// PostgreSQL and compatible hosts (Supabase)
    #[default]
    Postgres,
    /// MySQL and compatible hosts (MariaDB, PlanetScale)
    MySql,
    /// SQLite
    Sqlite,
}

/// Spellings a dialect uses for each generated construct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialectSyntax {
    pub name: &'static str,
    /// Replaces type and key clause of an integer primary key
    pub auto_increment_pk: &'static str,
    pub text: &'static str,
    pub integer: &'static str,
    pub boolean: &'static str,
    pub timestamp: &'static str,
    pub numeric: &'static str,
    pub uuid: &'static str,
    pub json: &'static str,
    /// Current-timestamp expression
    pub now: &'static str,
    /// Random UUID expression
    pub uuid_fn: &'static str,
    pub quote: char,
}

impl DialectSyntax {
    pub fn type_name(&self, typ: LogicalType) -> &'static str {
        match typ {
            LogicalType::Int8 => self.integer,
            LogicalType::Text => self.text,
            LogicalType::Boolean => self.boolean,
            LogicalType::Timestamp => self.timestamp,
            LogicalType::Numeric => self.numeric,
            LogicalType::Uuid => self.uuid,
            LogicalType::Json => self.json,
        }
    }
}

static POSTGRES: DialectSyntax = DialectSyntax {
    name: "PostgreSQL",
    auto_increment_pk: "SERIAL PRIMARY KEY",
    text: "TEXT",
    integer: "INTEGER",
    boolean: "BOOLEAN",
    timestamp: "TIMESTAMP",
    numeric: "DECIMAL",
    uuid: "UUID",
    json: "JSONB",
    now: "NOW()",
    uuid_fn: "gen_random_uuid()",
    quote: '"',
};

static MYSQL: DialectSyntax = DialectSyntax {
    name: "MySQL",
    auto_increment_pk: "INT AUTO_INCREMENT PRIMARY KEY",
    text: "TEXT",
    integer: "INT",
    boolean: "BOOLEAN",
    timestamp: "TIMESTAMP",
    numeric: "DECIMAL",
    uuid: "UUID",
    json: "JSON",
    now: "NOW()",
    uuid_fn: "UUID()",
    quote: '`',
};

static SQLITE: DialectSyntax = DialectSyntax {
    name: "SQLite",
    auto_increment_pk: "INTEGER PRIMARY KEY AUTOINCREMENT",
    text: "TEXT",
    integer: "INTEGER",
    boolean: "INTEGER",
    timestamp: "TEXT",
    numeric: "REAL",
    uuid: "TEXT",
    json: "TEXT",
    now: "datetime('now')",
    uuid_fn: "lower(hex(randomblob(16)))",
    quote: '"',
};

impl Dialect {
    pub const ALL: [Dialect; 3] = [Dialect::Postgres, Dialect::MySql, Dialect::Sqlite];

    /// Parse dialect from a label. Hosting-provider names map onto their SQL family.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "postgres" | "postgresql" | "pg" | "postgres-like" | "supabase" => {
                Some(Self::Postgres)
            }
            "mysql" | "mariadb" | "mysql-like" | "planetscale" => Some(Self::MySql),
            "sqlite" | "sqlite3" | "sqlite-like" => Some(Self::Sqlite),
            _ => None,
        }
    }

    /// Like `from_str`, but unknown labels fall back to Postgres.
    pub fn resolve(label: &str) -> Self {
        Self::from_str(label).unwrap_or_else(|| {
            tracing::warn!(dialect = label, "unknown dialect, falling back to postgres");
            Self::default()
        })
    }

    /// Guess the dialect a dump was written for.
    pub fn detect(content: &str) -> Option<Self> {
        let lower = content.to_lowercase();

        // Header comments
        if lower.contains("postgresql database dump") || lower.contains("pg_dump") {
            return Some(Self::Postgres);
        }
        if lower.contains("mysql dump") || lower.contains("mysqldump") {
            return Some(Self::MySql);
        }

        // Type and option keywords
        if lower.contains("serial")
            || lower.contains("timestamptz")
            || lower.contains("jsonb")
            || lower.contains("::")
        {
            return Some(Self::Postgres);
        }
        if lower.contains("auto_increment")
            || lower.contains("engine=")
            || lower.contains("unsigned")
            || lower.contains('`')
        {
            return Some(Self::MySql);
        }
        if lower.contains("autoincrement")
            || lower.contains("without rowid")
            || lower.contains("randomblob")
        {
            return Some(Self::Sqlite);
        }

        None
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Postgres => "postgres",
            Self::MySql => "mysql",
            Self::Sqlite => "sqlite",
        }
    }

    pub fn syntax(self) -> &'static DialectSyntax {
        match self {
            Self::Postgres => &POSTGRES,
            Self::MySql => &MYSQL,
            Self::Sqlite => &SQLITE,
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

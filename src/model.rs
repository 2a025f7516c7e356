//! Schema model shared by the DDL parser and the SQL generator.
//!
//! The serialized field names (`name`, `type`, `nullable`, `primaryKey`,
//! `foreignKey`, `defaultValue`) are read back by exported backups; keep them stable.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Dialect-independent column type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogicalType {
    Int8,
    Text,
    Boolean,
    Timestamp,
    Numeric,
    Uuid,
    Json,
}

impl LogicalType {
    pub const ALL: [LogicalType; 7] = [
        LogicalType::Int8,
        LogicalType::Text,
        LogicalType::Boolean,
        LogicalType::Timestamp,
        LogicalType::Numeric,
        LogicalType::Uuid,
        LogicalType::Json,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LogicalType::Int8 => "int8",
            LogicalType::Text => "text",
            LogicalType::Boolean => "boolean",
            LogicalType::Timestamp => "timestamp",
            LogicalType::Numeric => "numeric",
            LogicalType::Uuid => "uuid",
            LogicalType::Json => "json",
        }
    }

    /// Look up a logical type by its canonical name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for LogicalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ForeignKey {
    pub table: String,
    pub column: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub typ: LogicalType,
    #[serde(default = "nullable_by_default")]
    pub nullable: bool,
    #[serde(default)]
    pub primary_key: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreign_key: Option<ForeignKey>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

fn nullable_by_default() -> bool {
    true
}

impl Field {
    /// A nullable, unkeyed column.
    pub fn new(name: impl Into<String>, typ: LogicalType) -> Self {
        Self {
            name: name.into(),
            typ,
            nullable: true,
            primary_key: false,
            foreign_key: None,
            default_value: None,
        }
    }

    /// Mark as primary key; primary keys are never nullable.
    pub fn primary(mut self) -> Self {
        self.primary_key = true;
        self.nullable = false;
        self
    }

    pub fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl Table {
    pub fn new(name: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut Field> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    /// First primary-key field in declaration order.
    pub fn primary_key(&self) -> Option<&Field> {
        self.fields.iter().find(|f| f.primary_key)
    }
}

/// Directed foreign-key edge `from_table.from_field -> to_table.to_field`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    pub from_table: String,
    pub from_field: String,
    pub to_table: String,
    pub to_field: String,
    /// Derived from an `_id` naming convention rather than a REFERENCES clause.
    #[serde(default)]
    pub inferred: bool,
}

impl Relationship {
    pub fn foreign_key(&self) -> ForeignKey {
        ForeignKey {
            table: self.to_table.clone(),
            column: self.to_field.clone(),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LinkError {
    #[error("unknown table {0}")]
    UnknownTable(String),
    #[error("unknown field {table}.{field}")]
    UnknownField { table: String, field: String },
    #[error("field {table}.{field} already has a foreign key")]
    AlreadyLinked { table: String, field: String },
    #[error("field {table}.{field} has a foreign key but no relationship")]
    MissingRelationship { table: String, field: String },
    #[error("relationship from {table}.{field} disagrees with the field's foreign key")]
    Mismatched { table: String, field: String },
    #[error("more than one relationship starts at {table}.{field}")]
    DuplicateRelationship { table: String, field: String },
}

/// Tables in declaration order plus the relationships between them.
///
/// Every relationship has exactly one field whose `foreign_key` equals its
/// target, and every field with a `foreign_key` has exactly one relationship.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    #[serde(default)]
    pub tables: Vec<Table>,
    #[serde(default)]
    pub relationships: Vec<Relationship>,
}

impl Schema {
    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.name == name)
    }

    pub fn table_mut(&mut self, name: &str) -> Option<&mut Table> {
        self.tables.iter_mut().find(|t| t.name == name)
    }

    /// Relationship leaving `table.field`, if any.
    pub fn relationship_from(&self, table: &str, field: &str) -> Option<&Relationship> {
        self.relationships
            .iter()
            .find(|r| r.from_table == table && r.from_field == field)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Append a table. Foreign keys already set on its fields become
    /// relationships. Returns false if a table with that name exists.
    pub fn add_table(&mut self, table: Table) -> bool {
        if self.table(&table.name).is_some() {
            return false;
        }
        for field in &table.fields {
            if let Some(fk) = &field.foreign_key {
                self.relationships.push(Relationship {
                    from_table: table.name.clone(),
                    from_field: field.name.clone(),
                    to_table: fk.table.clone(),
                    to_field: fk.column.clone(),
                    inferred: false,
                });
            }
        }
        self.tables.push(table);
        true
    }

    /// Remove a table together with every relationship touching it.
    /// Fields elsewhere that pointed at it lose their foreign key.
    pub fn remove_table(&mut self, name: &str) -> Option<Table> {
        let index = self.tables.iter().position(|t| t.name == name)?;
        let removed = self.tables.remove(index);

        let (dropped, kept): (Vec<_>, Vec<_>) = self
            .relationships
            .drain(..)
            .partition(|r| r.from_table == name || r.to_table == name);
        self.relationships = kept;

        for rel in dropped.iter().filter(|r| r.from_table != name) {
            if let Some(field) = self
                .table_mut(&rel.from_table)
                .and_then(|t| t.field_mut(&rel.from_field))
            {
                field.foreign_key = None;
            }
        }

        Some(removed)
    }

    /// Declare `from_table.from_field` as referencing `to_table.to_field`.
    pub fn link(
        &mut self,
        from_table: &str,
        from_field: &str,
        to_table: &str,
        to_field: &str,
    ) -> Result<(), LinkError> {
        if self.table(to_table).is_none() {
            return Err(LinkError::UnknownTable(to_table.to_string()));
        }
        let table = self
            .table_mut(from_table)
            .ok_or_else(|| LinkError::UnknownTable(from_table.to_string()))?;
        let field = table
            .field_mut(from_field)
            .ok_or_else(|| LinkError::UnknownField {
                table: from_table.to_string(),
                field: from_field.to_string(),
            })?;
        if field.foreign_key.is_some() {
            return Err(LinkError::AlreadyLinked {
                table: from_table.to_string(),
                field: from_field.to_string(),
            });
        }

        let rel = Relationship {
            from_table: from_table.to_string(),
            from_field: from_field.to_string(),
            to_table: to_table.to_string(),
            to_field: to_field.to_string(),
            inferred: false,
        };
        field.foreign_key = Some(rel.foreign_key());
        self.relationships.push(rel);
        Ok(())
    }

    /// Remove the relationship leaving `table.field` and clear the field's foreign key.
    pub fn unlink(&mut self, table: &str, field: &str) -> Option<Relationship> {
        let index = self
            .relationships
            .iter()
            .position(|r| r.from_table == table && r.from_field == field)?;
        let rel = self.relationships.remove(index);
        if let Some(f) = self.table_mut(table).and_then(|t| t.field_mut(field)) {
            f.foreign_key = None;
        }
        Some(rel)
    }

    /// Report every place where relationships and field foreign keys disagree.
    pub fn check_links(&self) -> Vec<LinkError> {
        let mut errors = Vec::new();

        for (i, rel) in self.relationships.iter().enumerate() {
            if self.relationships[..i]
                .iter()
                .any(|r| r.from_table == rel.from_table && r.from_field == rel.from_field)
            {
                errors.push(LinkError::DuplicateRelationship {
                    table: rel.from_table.clone(),
                    field: rel.from_field.clone(),
                });
                continue;
            }

            let Some(table) = self.table(&rel.from_table) else {
                errors.push(LinkError::UnknownTable(rel.from_table.clone()));
                continue;
            };
            let Some(field) = table.field(&rel.from_field) else {
                errors.push(LinkError::UnknownField {
                    table: rel.from_table.clone(),
                    field: rel.from_field.clone(),
                });
                continue;
            };
            if field.foreign_key.as_ref() != Some(&rel.foreign_key()) {
                errors.push(LinkError::Mismatched {
                    table: rel.from_table.clone(),
                    field: rel.from_field.clone(),
                });
            }
        }

        for table in &self.tables {
            for field in table.fields.iter().filter(|f| f.foreign_key.is_some()) {
                if self.relationship_from(&table.name, &field.name).is_none() {
                    errors.push(LinkError::MissingRelationship {
                        table: table.name.clone(),
                        field: field.name.clone(),
                    });
                }
            }
        }

        errors
    }
}

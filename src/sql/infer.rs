//! Implicit foreign keys from `<table>_id` column names.

use crate::model::{ForeignKey, Relationship, Schema};

const ID_SUFFIX: &str = "_id";

/// Whether a column stem such as `author` names `table`.
///
/// Singularization is a blind trailing-`s` strip: `authors` and `author` match
/// `author`, irregular plurals like `people` do not match `person`.
fn names_table(stem: &str, table: &str) -> bool {
    table == stem || table.strip_suffix('s') == Some(stem)
}

/// Link unlinked, non-key `*_id` columns to the first table (in declaration
/// order) whose name matches the column stem and that has a primary key.
///
/// Returns the number of relationships added.
pub fn infer_relationships(schema: &mut Schema) -> usize {
    let primary_keys: Vec<(String, String)> = schema
        .tables
        .iter()
        .filter_map(|t| t.primary_key().map(|pk| (t.name.clone(), pk.name.clone())))
        .collect();

    let Schema {
        tables,
        relationships,
    } = schema;
    let mut added = 0;

    for table in tables.iter_mut() {
        for field in table.fields.iter_mut() {
            if field.foreign_key.is_some() || field.primary_key {
                continue;
            }
            let Some(stem) = field.name.strip_suffix(ID_SUFFIX) else {
                continue;
            };
            if stem.is_empty() {
                continue;
            }
            let Some((target, target_pk)) = primary_keys
                .iter()
                .find(|(name, _)| names_table(stem, name))
            else {
                continue;
            };

            let exists = relationships.iter().any(|r| {
                r.from_table == table.name && r.from_field == field.name && r.to_table == *target
            });
            if exists {
                continue;
            }

            tracing::trace!(
                from = %format!("{}.{}", table.name, field.name),
                to = %format!("{}.{}", target, target_pk),
                "inferred relationship"
            );
            field.foreign_key = Some(ForeignKey {
                table: target.clone(),
                column: target_pk.clone(),
            });
            relationships.push(Relationship {
                from_table: table.name.clone(),
                from_field: field.name.clone(),
                to_table: target.clone(),
                to_field: target_pk.clone(),
                inferred: true,
            });
            added += 1;
        }
    }

    added
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Field, LogicalType, Table};
    use pretty_assertions::assert_eq;

    fn table(name: &str, fields: Vec<Field>) -> Table {
        Table::new(name, fields)
    }

    fn id() -> Field {
        Field::new("id", LogicalType::Int8).primary()
    }

    #[test]
    fn test_plural_table_match() {
        let mut schema = Schema::default();
        schema.add_table(table("authors", vec![id()]));
        schema.add_table(table(
            "books",
            vec![id(), Field::new("author_id", LogicalType::Int8)],
        ));

        assert_eq!(infer_relationships(&mut schema), 1);
        assert_eq!(
            schema.relationships,
            vec![Relationship {
                from_table: "books".to_string(),
                from_field: "author_id".to_string(),
                to_table: "authors".to_string(),
                to_field: "id".to_string(),
                inferred: true,
            }]
        );
        assert_eq!(
            schema.tables[1].fields[1].foreign_key,
            Some(ForeignKey {
                table: "authors".to_string(),
                column: "id".to_string()
            })
        );
    }

    #[test]
    fn test_singular_table_match_uses_primary_key_name() {
        let mut schema = Schema::default();
        schema.add_table(table(
            "category",
            vec![Field::new("code", LogicalType::Text).primary()],
        ));
        schema.add_table(table(
            "products",
            vec![id(), Field::new("category_id", LogicalType::Text)],
        ));

        assert_eq!(infer_relationships(&mut schema), 1);
        assert_eq!(schema.relationships[0].to_table, "category");
        assert_eq!(schema.relationships[0].to_field, "code");
    }

    #[test]
    fn test_no_matching_table() {
        let mut schema = Schema::default();
        schema.add_table(table(
            "orders",
            vec![id(), Field::new("external_id", LogicalType::Text)],
        ));

        assert_eq!(infer_relationships(&mut schema), 0);
        assert_eq!(schema.tables[0].fields[1].foreign_key, None);
    }

    #[test]
    fn test_irregular_plural_is_not_matched() {
        let mut schema = Schema::default();
        schema.add_table(table("people", vec![id()]));
        schema.add_table(table(
            "visits",
            vec![id(), Field::new("person_id", LogicalType::Int8)],
        ));

        assert_eq!(infer_relationships(&mut schema), 0);
    }

    #[test]
    fn test_table_without_primary_key_is_not_a_target() {
        let mut schema = Schema::default();
        schema.add_table(table("users", vec![Field::new("email", LogicalType::Text)]));
        schema.add_table(table(
            "posts",
            vec![id(), Field::new("user_id", LogicalType::Int8)],
        ));

        assert_eq!(infer_relationships(&mut schema), 0);
    }

    #[test]
    fn test_existing_foreign_key_and_primary_key_are_skipped() {
        let mut schema = Schema::default();
        schema.add_table(table("users", vec![id()]));
        schema.add_table(table("accounts", vec![id()]));
        schema.add_table(table(
            "profiles",
            vec![
                Field::new("user_id", LogicalType::Int8).primary(),
                Field::new("account_id", LogicalType::Int8),
            ],
        ));
        schema.link("profiles", "account_id", "accounts", "id").unwrap();

        assert_eq!(infer_relationships(&mut schema), 0);
        assert_eq!(schema.relationships.len(), 1);
        assert!(!schema.relationships[0].inferred);
    }

    #[test]
    fn test_first_declared_table_wins() {
        let mut schema = Schema::default();
        schema.add_table(table("tag", vec![id()]));
        schema.add_table(table("tags", vec![id()]));
        schema.add_table(table(
            "notes",
            vec![id(), Field::new("tag_id", LogicalType::Int8)],
        ));

        assert_eq!(infer_relationships(&mut schema), 1);
        assert_eq!(schema.relationships[0].to_table, "tag");
    }

    #[test]
    fn test_inference_is_idempotent() {
        let mut schema = Schema::default();
        schema.add_table(table("users", vec![id()]));
        schema.add_table(table(
            "posts",
            vec![id(), Field::new("user_id", LogicalType::Int8)],
        ));

        assert_eq!(infer_relationships(&mut schema), 1);
        assert_eq!(infer_relationships(&mut schema), 0);
        assert!(schema.check_links().is_empty());
    }
}

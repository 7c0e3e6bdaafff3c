use std::collections::BTreeSet;

use nestidx_core::{EntityDef, MigrationOperation};
use tracing::debug;

use crate::error::PlannerError;
use crate::extract::extract_descriptors;
use crate::reconcile::{TableKey, reconcile};

/// Collect the tables dropped by the given operations.
pub fn dropped_tables(operations: &[MigrationOperation]) -> BTreeSet<TableKey> {
    operations
        .iter()
        .filter_map(MigrationOperation::dropped_table)
        .map(|(table, schema)| (table.to_string(), schema.map(str::to_string)))
        .collect()
}

/// Append index operations for nested-property indexes to a base operation list.
///
/// Index drops come first, then index creates. Creates carry the provider options
/// declared in the target snapshot. Drops on tables dropped by `operations` are
/// left out.
pub fn append_index_operations(
    source: Option<&[EntityDef]>,
    target: Option<&[EntityDef]>,
    mut operations: Vec<MigrationOperation>,
) -> Result<Vec<MigrationOperation>, PlannerError> {
    let source_indexes = extract_descriptors(source)?;
    let target_indexes = extract_descriptors(target)?;
    let dropped = dropped_tables(&operations);

    let changes = reconcile(
        source_indexes.descriptors(),
        target_indexes.descriptors(),
        &dropped,
    );

    debug!(
        drops = changes.drops.len(),
        creates = changes.creates.len(),
        dropped_tables = dropped.len(),
        "reconciled nested-property indexes"
    );

    operations.reserve(changes.drops.len() + changes.creates.len());
    operations.extend(changes.drops.iter().map(MigrationOperation::drop_index));
    operations.extend(changes.creates.iter().map(|descriptor| {
        let options = target_indexes
            .options_for(descriptor)
            .cloned()
            .unwrap_or_default();
        MigrationOperation::create_index(descriptor, options)
    }));

    Ok(operations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nestidx_core::{
        ComplexPropertyDef, IndexDeclaration, PropertyDef, PropertyIndex, WithProviderOptions,
    };
    use rstest::rstest;

    fn person(email_index: Option<PropertyIndex>) -> EntityDef {
        let mut value = PropertyDef::new("Value");
        if let Some(index) = email_index {
            value = value.with_index(index);
        }
        EntityDef::new("Person")
            .with_table("person")
            .with_property(PropertyDef::new("Id").with_column("id"))
            .with_property(PropertyDef::new("Name").with_column("name"))
            .with_complex_property(
                ComplexPropertyDef::new("EmailAddress")
                    .with_property(value.with_column("email_address")),
            )
    }

    #[rstest]
    #[case::none(vec![], vec![])]
    #[case::create_and_add(
        vec![
            MigrationOperation::CreateTable { table: "person".into(), schema: None },
            MigrationOperation::AddColumn { table: "person".into(), schema: None, column: "name".into() },
        ],
        vec![],
    )]
    #[case::single_drop(
        vec![MigrationOperation::DropTable { table: "person".into(), schema: None }],
        vec![("person", None)],
    )]
    #[case::schema_qualified(
        vec![
            MigrationOperation::DropTable { table: "person".into(), schema: Some("crm".into()) },
            MigrationOperation::DropTable { table: "order".into(), schema: None },
        ],
        vec![("order", None), ("person", Some("crm"))],
    )]
    fn collects_dropped_tables(
        #[case] operations: Vec<MigrationOperation>,
        #[case] expected: Vec<(&str, Option<&str>)>,
    ) {
        let expected: BTreeSet<TableKey> = expected
            .into_iter()
            .map(|(t, s)| (t.to_string(), s.map(str::to_string)))
            .collect();
        assert_eq!(dropped_tables(&operations), expected);
    }

    #[test]
    fn appends_after_base_operations() {
        let base = vec![MigrationOperation::AddColumn {
            table: "person".into(),
            schema: None,
            column: "email_address".into(),
        }];
        let source = [person(None)];
        let target = [person(Some(PropertyIndex::new()))];

        let operations =
            append_index_operations(Some(&source), Some(&target), base.clone()).unwrap();

        assert_eq!(operations.len(), 2);
        assert_eq!(operations[0], base[0]);
        assert!(matches!(
            &operations[1],
            MigrationOperation::CreateIndex { name, .. } if name == "IX_person_email_address"
        ));
    }

    #[test]
    fn drops_precede_creates() {
        let source = [person(Some(PropertyIndex::new()))];
        let target = [person(Some(PropertyIndex::new().unique(true)))];

        let operations = append_index_operations(Some(&source), Some(&target), vec![]).unwrap();

        assert_eq!(
            operations,
            vec![
                MigrationOperation::DropIndex {
                    table: "person".into(),
                    schema: None,
                    name: "IX_person_email_address".into(),
                },
                MigrationOperation::CreateIndex {
                    table: "person".into(),
                    schema: None,
                    name: "IX_person_email_address".into(),
                    columns: vec!["email_address".into()],
                    unique: true,
                    filter: None,
                    options: Default::default(),
                },
            ]
        );
    }

    #[test]
    fn dropped_table_suppresses_index_drops() {
        let source = [person(Some(PropertyIndex::new()))];
        let base = vec![MigrationOperation::DropTable {
            table: "person".into(),
            schema: None,
        }];

        let operations = append_index_operations(Some(&source), None, base.clone()).unwrap();

        assert_eq!(operations, base);
    }

    #[test]
    fn creates_carry_target_options() {
        let declaration = IndexDeclaration::builder(["Name", "EmailAddress.Value"])
            .with_option("Npgsql:IndexMethod", "gin")
            .build()
            .unwrap();
        let target = [person(None).with_composite_index(declaration).unwrap()];

        let operations = append_index_operations(None, Some(&target), vec![]).unwrap();

        let [MigrationOperation::CreateIndex { options, columns, .. }] = operations.as_slice()
        else {
            panic!("expected a single create, got {operations:?}");
        };
        assert_eq!(columns, &vec!["name".to_string(), "email_address".to_string()]);
        assert_eq!(options.get("Npgsql:IndexMethod"), Some(&serde_json::json!("gin")));
    }

    #[test]
    fn option_only_change_emits_nothing() {
        let plain = IndexDeclaration::builder(["Name", "EmailAddress.Value"])
            .build()
            .unwrap();
        let with_method = IndexDeclaration::builder(["Name", "EmailAddress.Value"])
            .with_option("Npgsql:IndexMethod", "gin")
            .build()
            .unwrap();
        let source = [person(None).with_composite_index(plain).unwrap()];
        let target = [person(None).with_composite_index(with_method).unwrap()];

        let operations = append_index_operations(Some(&source), Some(&target), vec![]).unwrap();

        assert!(operations.is_empty());
    }

    #[test]
    fn unresolvable_path_fails() {
        let declaration = IndexDeclaration::builder(["Name", "EmailAddress.Missing"])
            .build()
            .unwrap();
        let target = [person(None).with_composite_index(declaration).unwrap()];

        let err = append_index_operations(None, Some(&target), vec![]).unwrap_err();

        assert!(matches!(err, PlannerError::UnresolvablePath { .. }));
    }
}

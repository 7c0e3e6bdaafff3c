use std::collections::BTreeSet;

use nestidx_core::{IndexDescriptor, SchemaName, TableName};

/// A physical table: name and optional schema.
pub type TableKey = (TableName, Option<SchemaName>);

/// Index drops and creates needed to move from one descriptor set to another.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexChanges {
    pub drops: Vec<IndexDescriptor>,
    pub creates: Vec<IndexDescriptor>,
}

impl IndexChanges {
    pub fn is_empty(&self) -> bool {
        self.drops.is_empty() && self.creates.is_empty()
    }
}

/// Compare two descriptor sets by full value.
///
/// Drops on tables listed in `dropped_tables` are suppressed: the table drop
/// removes them already. A change to any field of an index is one drop plus one
/// create. Both lists follow descriptor order, so identical input always gives
/// identical output.
pub fn reconcile(
    source: &BTreeSet<IndexDescriptor>,
    target: &BTreeSet<IndexDescriptor>,
    dropped_tables: &BTreeSet<TableKey>,
) -> IndexChanges {
    let drops = source
        .difference(target)
        .filter(|descriptor| !is_table_dropped(descriptor, dropped_tables))
        .cloned()
        .collect();

    let creates = target.difference(source).cloned().collect();

    IndexChanges { drops, creates }
}

fn is_table_dropped(descriptor: &IndexDescriptor, dropped_tables: &BTreeSet<TableKey>) -> bool {
    dropped_tables
        .iter()
        .any(|(table, schema)| descriptor.is_on_table(table, schema.as_deref()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn d(table: &str, columns: &[&str]) -> IndexDescriptor {
        IndexDescriptor {
            table: table.into(),
            schema: None,
            columns: columns.iter().map(|c| c.to_string()).collect(),
            name: nestidx_naming::build_index_name(table, columns),
            unique: false,
            filter: None,
        }
    }

    fn set(descriptors: Vec<IndexDescriptor>) -> BTreeSet<IndexDescriptor> {
        descriptors.into_iter().collect()
    }

    fn tables(keys: &[(&str, Option<&str>)]) -> BTreeSet<TableKey> {
        keys.iter()
            .map(|(t, s)| (t.to_string(), s.map(Into::into)))
            .collect()
    }

    #[test]
    fn new_index_from_empty_source() {
        let target = set(vec![d("person", &["email_address"])]);
        let changes = reconcile(&BTreeSet::new(), &target, &BTreeSet::new());

        assert!(changes.drops.is_empty());
        assert_eq!(changes.creates, vec![d("person", &["email_address"])]);
    }

    #[test]
    fn removed_index() {
        let source = set(vec![d("person", &["email_address"])]);
        let changes = reconcile(&source, &BTreeSet::new(), &BTreeSet::new());

        assert_eq!(changes.drops.len(), 1);
        assert_eq!(changes.drops[0].name, "IX_person_email_address");
        assert_eq!(changes.drops[0].table, "person");
        assert!(changes.creates.is_empty());
    }

    #[test]
    fn table_drop_suppresses_index_drop() {
        let source = set(vec![d("person", &["email_address"])]);
        let changes = reconcile(
            &source,
            &BTreeSet::new(),
            &tables(&[("person", None)]),
        );

        assert!(changes.is_empty());
    }

    #[test]
    fn table_drop_in_other_schema_does_not_suppress() {
        let source = set(vec![d("person", &["email_address"])]);
        let changes = reconcile(
            &source,
            &BTreeSet::new(),
            &tables(&[("person", Some("archive"))]),
        );

        assert_eq!(changes.drops.len(), 1);
    }

    #[test]
    fn table_drop_does_not_suppress_creates() {
        let target = set(vec![d("person", &["email_address"])]);
        let changes = reconcile(&BTreeSet::new(), &target, &tables(&[("person", None)]));

        assert_eq!(changes.creates.len(), 1);
    }

    #[test]
    fn identical_sets_are_a_noop() {
        let descriptors = set(vec![d("person", &["name"]), d("person", &["a", "b"])]);
        assert!(reconcile(&descriptors, &descriptors.clone(), &BTreeSet::new()).is_empty());
    }

    #[test]
    fn column_order_change_is_drop_and_create() {
        let mut forward = d("person", &["a", "b"]);
        forward.name = "IX_ab".into();
        let mut backward = d("person", &["b", "a"]);
        backward.name = "IX_ab".into();

        let changes = reconcile(
            &set(vec![forward.clone()]),
            &set(vec![backward.clone()]),
            &BTreeSet::new(),
        );

        assert_eq!(changes.drops, vec![forward]);
        assert_eq!(changes.creates, vec![backward]);
    }

    #[rstest]
    #[case::uniqueness(|x: &mut IndexDescriptor| x.unique = true)]
    #[case::filter(|x: &mut IndexDescriptor| x.filter = Some("deleted_at IS NULL".into()))]
    #[case::name(|x: &mut IndexDescriptor| x.name = "IX_renamed".into())]
    #[case::columns(|x: &mut IndexDescriptor| x.columns.push("extra".into()))]
    #[case::schema(|x: &mut IndexDescriptor| x.schema = Some("crm".into()))]
    fn single_field_change_is_drop_and_create(#[case] change: fn(&mut IndexDescriptor)) {
        let before = d("person", &["email_address"]);
        let mut after = before.clone();
        change(&mut after);

        let changes = reconcile(
            &set(vec![before.clone()]),
            &set(vec![after.clone()]),
            &BTreeSet::new(),
        );

        assert_eq!(changes.drops, vec![before]);
        assert_eq!(changes.creates, vec![after]);
    }

    #[test]
    fn deterministic_across_runs() {
        let source = set(vec![
            d("person", &["name"]),
            d("order", &["placed_at"]),
            d("person", &["email_address"]),
        ]);
        let target = set(vec![
            d("person", &["email_address", "name"]),
            d("address", &["zip"]),
            d("order", &["placed_at"]),
        ]);

        let first = reconcile(&source, &target, &BTreeSet::new());
        let second = reconcile(&source, &target, &BTreeSet::new());

        assert_eq!(first, second);
        assert_eq!(
            first.creates,
            vec![d("address", &["zip"]), d("person", &["email_address", "name"])]
        );
        assert_eq!(
            first.drops,
            vec![d("person", &["email_address"]), d("person", &["name"])]
        );
    }
}

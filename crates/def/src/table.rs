use {
    crate::{Path, ValueType},
    common::pub_fields_struct,
};

pub_fields_struct! {
    /// Constraints declared on one field of a table.
    #[derive(Debug, Clone, PartialEq)]
    struct FieldConstraint {
        path: Path,
        /// `None` when the field accepts values of any type.
        value_type: Option<ValueType>,
        is_primary_key: bool,
        is_not_null: bool,
    }

    /// Schema of a table as declared by `CREATE TABLE`.
    #[derive(Debug, Clone, Default, PartialEq)]
    struct TableInfo {
        field_constraints: Vec<FieldConstraint>,
        /// Indexes into `field_constraints`, in key order.
        primary_keys: Vec<usize>,
    }
}

impl FieldConstraint {
    pub fn new(path: Path) -> Self {
        Self {
            path,
            value_type: None,
            is_primary_key: false,
            is_not_null: false,
        }
    }
}

impl TableInfo {
    pub fn field_index(&self, path: &Path) -> Option<usize> {
        self.field_constraints.iter().position(|fc| fc.path == *path)
    }

    pub fn primary_key_paths(&self) -> impl Iterator<Item = &Path> + '_ {
        self.primary_keys
            .iter()
            .filter_map(|&i| self.field_constraints.get(i))
            .map(|fc| &fc.path)
    }

    pub fn has_primary_key(&self) -> bool {
        !self.primary_keys.is_empty()
    }
}

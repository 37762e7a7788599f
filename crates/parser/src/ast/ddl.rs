use {
    common::pub_fields_struct,
    def::{Path, TableInfo},
};

pub_fields_struct! {
    #[derive(Debug, Clone, Default, PartialEq)]
    struct CreateTableStmt {
        table_name: String,
        /// Recorded only; the executor decides what an existing table means.
        if_not_exists: bool,
        info: TableInfo,
    }

    #[derive(Debug, Clone, PartialEq)]
    struct CreateIndexStmt {
        index_name: String,
        table_name: String,
        path: Path,
        if_not_exists: bool,
        unique: bool,
    }
}

pub mod document;
pub mod table;
mod value_type;

pub use {
    document::{Path, PathFragment},
    table::{FieldConstraint, TableInfo},
    value_type::ValueType,
};

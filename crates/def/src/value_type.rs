use std::fmt::{Display, Formatter, Result};

/// The canonical value types a document field can be constrained to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Integer,
    Double,
    Bool,
    Blob,
    Text,
    Array,
    Document,
}

impl ValueType {
    pub const ALL: [ValueType; 7] = [
        Self::Integer,
        Self::Double,
        Self::Bool,
        Self::Blob,
        Self::Text,
        Self::Array,
        Self::Document,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Double => "double",
            Self::Bool => "bool",
            Self::Blob => "blob",
            Self::Text => "text",
            Self::Array => "array",
            Self::Document => "document",
        }
    }
}

impl Display for ValueType {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.name())
    }
}

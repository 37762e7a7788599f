use {
    snafu::{prelude::*, Backtrace},
    std::fmt::{Display, Formatter, Write},
};

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("a path must contain at least one fragment"))]
    EmptyPath { backtrace: Backtrace },

    #[snafu(display("a path must start with a field name"))]
    LeadingIndex { backtrace: Backtrace },
}

pub type Result<T> = std::result::Result<T, Error>;

/// One step of a traversal into a document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathFragment {
    Field(String),
    Index(usize),
}

/// Address of a value nested inside a document, e.g. `baz[4][1].bat`.
///
/// A path always starts with a field name and is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path(Vec<PathFragment>);

impl Path {
    pub fn new(fragments: Vec<PathFragment>) -> Result<Self> {
        match fragments.first() {
            None => EmptyPathSnafu.fail(),
            Some(PathFragment::Index(_)) => LeadingIndexSnafu.fail(),
            Some(PathFragment::Field(_)) => Ok(Self(fragments)),
        }
    }

    /// A path made of a single field name.
    pub fn field(name: impl Into<String>) -> Self {
        Self(vec![PathFragment::Field(name.into())])
    }

    pub fn with_field(mut self, name: impl Into<String>) -> Self {
        self.0.push(PathFragment::Field(name.into()));
        self
    }

    pub fn with_index(mut self, index: usize) -> Self {
        self.0.push(PathFragment::Index(index));
        self
    }

    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// Returns the field name when the path is a single top-level field.
    pub fn as_field_name(&self) -> Option<&str> {
        match self.0.as_slice() {
            [PathFragment::Field(name)] => Some(name),
            _ => None,
        }
    }
}

/// Words the SQL lexer reads as keywords rather than field names.
pub const RESERVED_WORDS: [&str; 18] = [
    "AND", "CREATE", "EXISTS", "FALSE", "IF", "IN", "INDEX", "IS", "KEY", "LIKE", "NOT", "NULL",
    "ON", "OR", "PRIMARY", "TABLE", "TRUE", "UNIQUE",
];

/// Whether `s` is a reserved word, ignoring case.
pub fn is_reserved_word(s: &str) -> bool {
    RESERVED_WORDS.iter().any(|word| word.eq_ignore_ascii_case(s))
}

fn is_plain_identifier(s: &str) -> bool {
    let mut chars = s.chars();

    matches!(chars.next(), Some(c) if c.is_alphabetic() || c == '_')
        && chars.all(|c| c.is_alphanumeric() || c == '_')
        && !is_reserved_word(s)
}

fn write_field(f: &mut Formatter<'_>, name: &str) -> std::fmt::Result {
    if is_plain_identifier(name) {
        return f.write_str(name);
    }

    f.write_char('`')?;
    f.write_str(&name.replace('`', "``"))?;
    f.write_char('`')
}

impl Display for Path {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (i, fragment) in self.0.iter().enumerate() {
            match fragment {
                PathFragment::Field(name) => {
                    if i > 0 {
                        f.write_char('.')?;
                    }
                    write_field(f, name)?;
                }
                PathFragment::Index(index) => write!(f, "[{}]", index)?,
            }
        }

        Ok(())
    }
}

use {
    crate::lexer,
    common::Span,
    def::Path,
    snafu::prelude::*,
    std::fmt::{Display, Formatter},
};

/// A clause that may be declared at most once per field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintKind {
    Type,
    PrimaryKey,
    NotNull,
}

impl Display for ConstraintKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Type => "type",
            Self::PrimaryKey => "PRIMARY KEY",
            Self::NotNull => "NOT NULL",
        })
    }
}

#[derive(Debug, PartialEq, Snafu)]
#[snafu(visibility(pub(super)))]
pub enum Error {
    #[snafu(display("unexpected end of input"))]
    UnexpectedEnd {},

    #[snafu(display("syntax error at {}..={}", span.start(), span.end()))]
    Syntax { span: Span },

    #[snafu(display(
        "invalid type argument at {}..={}: {}",
        span.start(),
        span.end(),
        reason
    ))]
    InvalidArgument { span: Span, reason: &'static str },

    #[snafu(display("{}", source))]
    Lexing { source: lexer::Error },

    #[snafu(display("duplicate {} constraint on field \"{}\"", constraint, path))]
    DuplicateConstraint {
        path: Path,
        constraint: ConstraintKind,
        span: Span,
    },

    #[snafu(display("table \"{}\" has more than one primary key", table))]
    MultiplePrimaryKeys { table: String },

    #[snafu(display("primary key references unknown field \"{}\"", name))]
    UnknownColumn { name: String, span: Span },

    #[snafu(display("parsing was cancelled"))]
    Cancelled {},
}

impl Error {
    /// Whether the input is malformed, as opposed to well-formed but contradictory.
    pub fn is_syntax_error(&self) -> bool {
        matches!(
            self,
            Self::UnexpectedEnd { .. }
                | Self::Syntax { .. }
                | Self::InvalidArgument { .. }
                | Self::Lexing { .. }
        )
    }

    /// Location of the offending input, when there is one.
    pub fn span(&self) -> Option<Span> {
        match self {
            Self::Syntax { span }
            | Self::InvalidArgument { span, .. }
            | Self::DuplicateConstraint { span, .. }
            | Self::UnknownColumn { span, .. } => Some(span.clone()),
            Self::Lexing {
                source: lexer::Error::NoClosingQuote { span, .. },
            } => Some(span.clone()),
            Self::Lexing {
                source: lexer::Error::UnexpectedChar { offset, .. },
            } => Some(*offset..=*offset),
            Self::UnexpectedEnd { .. } | Self::MultiplePrimaryKeys { .. } | Self::Cancelled { .. } => {
                None
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

use {common::Span, snafu::prelude::*};

#[derive(Debug, PartialEq, Clone, Snafu)]
#[snafu(visibility(pub(super)))]
pub enum Error {
    #[snafu(display("no closing quote for {} starting at {}", what, span.start()))]
    NoClosingQuote { what: &'static str, span: Span },

    #[snafu(display("unexpected char {:?} at {}", c, offset))]
    UnexpectedChar { c: char, offset: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

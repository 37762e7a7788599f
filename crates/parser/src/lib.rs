//! Parser for the `CREATE TABLE` and `CREATE INDEX` statements of a document database.
//!
//! ```
//! use parser::{ast::Statement, parse_query, CancellationToken};
//!
//! let query = parse_query(
//!     &CancellationToken::new(),
//!     "CREATE TABLE test(foo INTEGER PRIMARY KEY); CREATE INDEX idx ON test (foo[3].baz)",
//! )
//! .unwrap();
//!
//! assert!(matches!(&query.statements[..], [Statement::CreateTable(_), Statement::CreateIndex(_)]));
//! ```
pub mod ast;
mod context;
mod lexer;
mod parser;

pub use self::{
    context::CancellationToken,
    lexer::Error as LexingError,
    parser::{lookup_type_alias, parse_query, ConstraintKind, Error, Parser, Result},
};

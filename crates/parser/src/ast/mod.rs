mod ddl;
pub mod expr;

pub use self::{
    ddl::{CreateIndexStmt, CreateTableStmt},
    expr::Expression,
};

use common::pub_fields_struct;

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    CreateTable(CreateTableStmt),
    CreateIndex(CreateIndexStmt),
}

impl Statement {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::CreateTable(_) => "CREATE TABLE",
            Self::CreateIndex(_) => "CREATE INDEX",
        }
    }
}

impl From<CreateTableStmt> for Statement {
    fn from(stmt: CreateTableStmt) -> Self {
        Self::CreateTable(stmt)
    }
}

impl From<CreateIndexStmt> for Statement {
    fn from(stmt: CreateIndexStmt) -> Self {
        Self::CreateIndex(stmt)
    }
}

pub_fields_struct! {
    /// Statements produced by one parse call, in source order.
    #[derive(Debug, Clone, Default, PartialEq)]
    struct Query {
        statements: Vec<Statement>,
    }
}

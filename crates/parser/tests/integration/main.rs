mod create_table;
mod query;

use parser::{ast::Statement, parse_query, CancellationToken, Result};

/// Parses `sql`, which must hold exactly one statement.
fn parse_one(sql: &str) -> Result<Statement> {
    let mut query = parse_query(&CancellationToken::new(), sql)?;
    assert_eq!(query.statements.len(), 1, "{sql}");

    Ok(query.statements.remove(0))
}

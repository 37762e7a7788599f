mod constraint;
mod data_type;
mod ddl;
mod error;
mod expr;
mod helpers;
mod path;

pub use self::{
    data_type::lookup_type_alias,
    error::{ConstraintKind, Error, Result},
};

use {
    self::{error::CancelledSnafu, helpers::match_token},
    crate::{
        ast::{Query, Statement},
        context::CancellationToken,
        lexer::{Keyword, Lexer, Token},
    },
    common::{
        iter::{MultiPeek, MultiPeekable},
        Spanned,
    },
    tracing::{debug, trace},
};

/// Parses every statement of `sql`.
///
/// `ctx` is checked before each statement; once it is cancelled, parsing stops
/// with [`Error::Cancelled`]. Either all statements are returned or none is.
pub fn parse_query(ctx: &CancellationToken, sql: &str) -> Result<Query> {
    collect_statements(ctx, Parser::new(sql))
}

fn collect_statements(
    ctx: &CancellationToken,
    mut parser: impl Iterator<Item = Result<Statement>>,
) -> Result<Query> {
    let mut statements = vec![];

    loop {
        if ctx.is_cancelled() {
            debug!(parsed = statements.len(), "query parsing cancelled");
            return CancelledSnafu.fail();
        }

        match parser.next() {
            Some(stmt) => statements.push(stmt?),
            None => break,
        }
    }

    debug!(statements = statements.len(), "parsed query");

    Ok(Query { statements })
}

pub struct Parser<'a> {
    src: &'a str,
    tokens: MultiPeekable<Lexer<'a>>,
}

impl<'a> Parser<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            src,
            tokens: Lexer::new(src).multi_peekable(),
        }
    }

    pub fn parse(sql: &'a str) -> Result<Vec<Statement>> {
        Self::new(sql).collect()
    }

    fn parse_statement(&mut self) -> Result<Statement> {
        let stmt = match_token!(self.tokens.next(), {
            Spanned(Token::Keyword(Keyword::CREATE), _) => self.parse_create()?,
        });

        // a statement runs up to a semicolon or the end of input
        match self.tokens.peek() {
            None | Some(Ok(Spanned(Token::Semicolon, _))) => {}
            Some(Ok(Spanned(_, span))) => return Err(Error::Syntax { span: span.clone() }),
            Some(Err(e)) => return Err(Error::Lexing { source: e.clone() }),
        }

        trace!(kind = stmt.kind(), "parsed statement");

        Ok(stmt)
    }
}

impl<'a> Iterator for Parser<'a> {
    type Item = Result<Statement>;

    fn next(&mut self) -> Option<Self::Item> {
        self.skip_semicolons();
        self.tokens.peek()?;

        Some(self.parse_statement())
    }
}

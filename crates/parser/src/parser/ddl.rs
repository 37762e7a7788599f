use {
    super::{
        constraint::PrimaryKeySources,
        error::{Error, Result},
        helpers::match_token,
        Parser,
    },
    crate::{
        ast::{CreateIndexStmt, CreateTableStmt, Statement},
        lexer::{Keyword, Token},
    },
    common::Spanned,
    def::{FieldConstraint, TableInfo},
};

impl<'a> Parser<'a> {
    pub(super) fn parse_create(&mut self) -> Result<Statement> {
        match_token!(self.tokens.next(), {
            Spanned(Token::Keyword(Keyword::TABLE), _) => self.parse_create_table().map(Statement::from),
            Spanned(Token::Keyword(Keyword::INDEX), _) => self.parse_create_index(false).map(Statement::from),
            Spanned(Token::Keyword(Keyword::UNIQUE), _) => {
                self.must_match(Token::Keyword(Keyword::INDEX))?;
                self.parse_create_index(true).map(Statement::from)
            },
        })
    }

    fn parse_if_not_exists(&mut self) -> bool {
        self.match_keyword_sequence(&[Keyword::IF, Keyword::NOT, Keyword::EXISTS])
            .is_some()
    }

    fn parse_create_table(&mut self) -> Result<CreateTableStmt> {
        let if_not_exists = self.parse_if_not_exists();
        let Spanned(table_name, _) = self.parse_identifier()?;

        let info = if self.peek_is(Token::LeftParen) {
            self.parse_table_info(&table_name)?
        } else {
            TableInfo::default()
        };

        Ok(CreateTableStmt {
            table_name,
            if_not_exists,
            info,
        })
    }

    /// Parses the parenthesized list of field definitions and table constraints.
    fn parse_table_info(&mut self, table_name: &str) -> Result<TableInfo> {
        self.must_match(Token::LeftParen)?;

        let mut fields: Vec<FieldConstraint> = vec![];
        let mut sources = PrimaryKeySources::default();

        loop {
            match_token!(self.tokens.next(), {
                Spanned(Token::Keyword(Keyword::PRIMARY), _) => {
                    self.must_match(Token::Keyword(Keyword::KEY))?;
                    self.parse_table_primary_key(table_name, &mut fields, &mut sources)?;
                },
                Spanned(token @ (Token::Identifier | Token::QuotedIdentifier), span) => {
                    let head = Spanned(self.identifier_from_span(token, span.clone()), span);
                    let Spanned(path, _) = self.parse_path_after(head)?;
                    let field = self.parse_field_constraint(path)?;

                    if field.is_primary_key {
                        sources.add_inline(fields.len());
                    }
                    fields.push(field);
                },
            });

            match_token!(self.tokens.next(), {
                Spanned(Token::Comma, _) => {},
                Spanned(Token::RightParen, _) => break,
            })
        }

        let primary_keys = sources.resolve(table_name)?;

        Ok(TableInfo {
            field_constraints: fields,
            primary_keys,
        })
    }

    fn parse_create_index(&mut self, unique: bool) -> Result<CreateIndexStmt> {
        let if_not_exists = self.parse_if_not_exists();
        let Spanned(index_name, _) = self.parse_identifier()?;

        self.must_match(Token::Keyword(Keyword::ON))?;

        let Spanned(table_name, _) = self.parse_identifier()?;

        // exactly one path, multi-field indexes are not supported
        self.must_match(Token::LeftParen)?;
        let Spanned(path, _) = self.parse_path()?;
        self.must_match(Token::RightParen)?;

        Ok(CreateIndexStmt {
            index_name,
            table_name,
            path,
            if_not_exists,
            unique,
        })
    }
}

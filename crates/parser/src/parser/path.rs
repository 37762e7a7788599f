use {
    super::{
        error::{Error, Result},
        helpers::match_token,
        Parser,
    },
    crate::lexer::Token,
    common::Spanned,
    def::{Path, PathFragment},
};

impl<'a> Parser<'a> {
    /// Parses `ident ( .ident | [index] )*`.
    pub(super) fn parse_path(&mut self) -> Result<Spanned<Path>> {
        let head = self.parse_identifier()?;
        self.parse_path_after(head)
    }

    /// Parses the rest of a path whose leading field name was already consumed.
    pub(super) fn parse_path_after(&mut self, head: Spanned<String>) -> Result<Spanned<Path>> {
        let Spanned(name, span) = head;
        let (begin, mut end) = (*span.start(), *span.end());
        let mut fragments = vec![PathFragment::Field(name)];

        loop {
            if self.try_match(Token::Period).is_some() {
                let Spanned(name, span) = self.parse_identifier()?;
                fragments.push(PathFragment::Field(name));
                end = *span.end();
            } else if self.try_match(Token::LeftBracket).is_some() {
                let index = match_token!(self.tokens.next(), {
                    Spanned(Token::Number { is_float: false }, span) => self.number_from_span(span)?,
                });
                fragments.push(PathFragment::Index(index));
                end = *self.must_match(Token::RightBracket)?.end();
            } else {
                break;
            }
        }

        let path = Path::new(fragments).map_err(|_| Error::Syntax {
            span: begin..=end,
        })?;

        Ok(Spanned(path, begin..=end))
    }
}

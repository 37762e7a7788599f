use {
    super::{
        error::{Error, Result},
        Parser,
    },
    crate::lexer::{Keyword, Token},
    common::{Span, Spanned},
    std::str::FromStr,
};

/// Matches the next lexed item against token patterns, returning early with
/// the appropriate error when nothing matches.
macro_rules! match_token {
    ( $token:expr, { $( $($t:pat_param)|* $(if $cond:expr)? => $e:expr, )* } ) => {
        match $token {
            $( $( Some(Ok($t)) )|* $(if $cond)? => $e,)*

            Some(Ok(Spanned(_, span))) => return Err(Error::Syntax { span }),
            Some(Err(source)) => return Err(Error::Lexing { source }),
            None => return Err(Error::UnexpectedEnd {}),
        }
    };
}

pub(super) use match_token;

impl<'a> Parser<'a> {
    /// Text of an identifier token, without backquotes for quoted identifiers.
    pub(super) fn identifier_from_span(&self, token: Token, span: Span) -> String {
        match token {
            Token::QuotedIdentifier => self.unquote(span, '`'),
            _ => self.src[span].to_string(),
        }
    }

    pub(super) fn string_from_span(&self, span: Span) -> String {
        self.unquote(span, '\'')
    }

    // Trims the enclosing quotes and collapses doubled quotes.
    fn unquote(&self, span: Span, quote: char) -> String {
        let (start, end) = (span.start() + 1, span.end() - 1);
        let doubled = format!("{quote}{quote}");

        if start > end {
            return String::new();
        }

        self.src[start..=end].replace(&doubled, &quote.to_string())
    }

    pub(super) fn number_from_span<T: FromStr>(&self, span: Span) -> Result<T> {
        self.src[span.clone()]
            .parse::<T>()
            .map_err(|_| Error::Syntax { span })
    }

    pub(super) fn skip_semicolons(&mut self) {
        while self
            .tokens
            .next_if(|token| matches!(token, Ok(Spanned(Token::Semicolon, _))))
            .is_some()
        {}
    }

    /// Consumes `keywords` only if all of them come next, returning the span they cover.
    pub(super) fn match_keyword_sequence(&mut self, keywords: &[Keyword]) -> Option<Span> {
        let begin = match self.tokens.peek() {
            Some(Ok(Spanned(_, span))) => *span.start(),
            _ => return None,
        };

        self.tokens
            .advance_n_if_each(keywords.len(), |(i, token)| match token {
                Ok(Spanned(Token::Keyword(keyword), _)) => *keyword == keywords[i],
                _ => false,
            })
            .and_then(|last| last.ok())
            .map(|Spanned(_, span)| begin..=*span.end())
    }

    pub(super) fn must_match(&mut self, token: Token) -> Result<Span> {
        match_token!(self.tokens.next(), {
            Spanned(t, span) if t == token => Ok(span),
        })
    }

    pub(super) fn try_match(&mut self, token: Token) -> Option<Span> {
        match self
            .tokens
            .next_if(|item| matches!(item, Ok(Spanned(t, _)) if *t == token))
        {
            Some(Ok(Spanned(_, span))) => Some(span),
            _ => None,
        }
    }

    pub(super) fn peek_is(&mut self, token: Token) -> bool {
        matches!(self.tokens.peek(), Some(Ok(Spanned(t, _))) if *t == token)
    }

    pub(super) fn parse_identifier(&mut self) -> Result<Spanned<String>> {
        match_token!(self.tokens.next(), {
            Spanned(token @ (Token::Identifier | Token::QuotedIdentifier), span) => {
                Ok(Spanned(self.identifier_from_span(token, span.clone()), span))
            },
        })
    }

    pub(super) fn parse_comma_separated<T, F>(&mut self, mut func: F) -> Result<Vec<T>>
    where
        F: FnMut(&mut Parser<'a>) -> Result<T>,
    {
        let mut v = vec![func(self)?];

        while self.try_match(Token::Comma).is_some() {
            v.push(func(self)?);
        }

        Ok(v)
    }

    /// Parses `( item, ... )`, returning the items and the span from `(` to `)`.
    pub(super) fn parse_comma_separated_within_parentheses<T, F>(
        &mut self,
        func: F,
    ) -> Result<Spanned<Vec<T>>>
    where
        F: FnMut(&mut Parser<'a>) -> Result<T>,
    {
        let s1 = self.must_match(Token::LeftParen)?;
        let items = self.parse_comma_separated(func)?;
        let s2 = self.must_match(Token::RightParen)?;

        Ok(Spanned(items, *s1.start()..=*s2.end()))
    }
}

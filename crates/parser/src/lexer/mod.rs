mod error;
mod token;

pub use self::error::{Error, Result};
pub(crate) use self::token::{Keyword, Token};

use {
    self::error::{NoClosingQuoteSnafu, UnexpectedCharSnafu},
    common::Spanned,
    std::{iter::Peekable, str::CharIndices},
};

pub(crate) struct Lexer<'a> {
    src: &'a str,
    iter: Peekable<CharIndices<'a>>,
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Spanned<Token>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.skip_whitespace_and_comments();

        let &(begin, c) = self.iter.peek()?;

        Some(match c {
            '\'' => self.scan_quoted(begin, '\'', "string", Token::String),
            '`' => self.scan_quoted(begin, '`', "identifier", Token::QuotedIdentifier),
            c if c.is_ascii_digit() => Ok(self.scan_number(begin)),
            c if c.is_alphabetic() || c == '_' => Ok(self.scan_identifier(begin)),
            c => self.scan_symbol(begin, c),
        })
    }
}

/// Byte offset of the last byte of `c` located at `i`.
fn last_byte(i: usize, c: char) -> usize {
    i + c.len_utf8() - 1
}

impl<'a> Lexer<'a> {
    pub(crate) fn new(src: &'a str) -> Self {
        Self {
            src,
            iter: src.char_indices().peekable(),
        }
    }

    /// Consumes chars while `func` holds, moving `end` to the last consumed byte.
    fn consume_while(&mut self, end: &mut usize, func: impl Fn(char) -> bool) {
        while let Some((i, c)) = self.iter.next_if(|&(_, c)| func(c)) {
            *end = last_byte(i, c);
        }
    }

    fn skip_whitespace_and_comments(&mut self) {
        loop {
            while self.iter.next_if(|(_, c)| c.is_whitespace()).is_some() {}

            let mut ahead = self.iter.clone();
            match (ahead.next(), ahead.next()) {
                (Some((_, '-')), Some((_, '-'))) => {
                    while self.iter.next_if(|&(_, c)| c != '\n').is_some() {}
                }
                _ => return,
            }
        }
    }

    fn scan_quoted(
        &mut self,
        begin: usize,
        quote: char,
        what: &'static str,
        token: Token,
    ) -> Result<Spanned<Token>> {
        self.iter.next();

        while let Some((i, c)) = self.iter.next() {
            if c != quote {
                continue;
            }

            // a doubled quote escapes itself
            if self.iter.next_if(|&(_, c)| c == quote).is_none() {
                return Ok(Spanned(token, begin..=i));
            }
        }

        NoClosingQuoteSnafu {
            what,
            span: begin..=self.src.len() - 1,
        }
        .fail()
    }

    fn scan_number(&mut self, begin: usize) -> Spanned<Token> {
        let mut end = begin;
        self.consume_while(&mut end, |c| c.is_ascii_digit());

        let mut is_float = false;

        let mut ahead = self.iter.clone();
        if let (Some((_, '.')), Some((_, c))) = (ahead.next(), ahead.next()) {
            if c.is_ascii_digit() {
                is_float = true;
                self.iter.next();
                self.consume_while(&mut end, |c| c.is_ascii_digit());
            }
        }

        let mut ahead = self.iter.clone();
        let has_exponent = match (ahead.next(), ahead.next(), ahead.next()) {
            (Some((_, 'e' | 'E')), Some((_, c)), _) if c.is_ascii_digit() => true,
            (Some((_, 'e' | 'E')), Some((_, '+' | '-')), Some((_, c))) => c.is_ascii_digit(),
            _ => false,
        };

        if has_exponent {
            is_float = true;
            self.iter.next();
            self.iter.next_if(|&(_, c)| c == '+' || c == '-');
            self.consume_while(&mut end, |c| c.is_ascii_digit());
        }

        Spanned(Token::Number { is_float }, begin..=end)
    }

    fn followed_by(&mut self, expected: char, end: &mut usize) -> bool {
        match self.iter.next_if(|&(_, c)| c == expected) {
            Some((i, _)) => {
                *end = i;
                true
            }
            None => false,
        }
    }

    fn scan_identifier(&mut self, begin: usize) -> Spanned<Token> {
        let mut end = begin;
        self.consume_while(&mut end, |c| c.is_alphanumeric() || c == '_');

        let token = Keyword::lookup(&self.src[begin..=end])
            .map(Token::Keyword)
            .unwrap_or(Token::Identifier);

        Spanned(token, begin..=end)
    }

    fn scan_symbol(&mut self, begin: usize, c: char) -> Result<Spanned<Token>> {
        self.iter.next();

        let mut end = begin;

        let token = match c {
            '.' => Token::Period,
            ',' => Token::Comma,
            ';' => Token::Semicolon,
            '(' => Token::LeftParen,
            ')' => Token::RightParen,
            '[' => Token::LeftBracket,
            ']' => Token::RightBracket,
            '?' => Token::Question,
            '=' => Token::Equal,
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' => Token::Asterisk,
            '/' => Token::Slash,
            '%' => Token::Percent,
            '<' if self.followed_by('>', &mut end) => Token::LessOrGreaterThan,
            '<' if self.followed_by('=', &mut end) => Token::LessThanOrEqual,
            '<' => Token::LessThan,
            '>' if self.followed_by('=', &mut end) => Token::GreaterThanOrEqual,
            '>' => Token::GreaterThan,
            '!' if self.followed_by('=', &mut end) => Token::NotEqual,
            '|' if self.followed_by('|', &mut end) => Token::Concat,
            c => return UnexpectedCharSnafu { c, offset: begin }.fail(),
        };

        Ok(Spanned(token, begin..=end))
    }
}

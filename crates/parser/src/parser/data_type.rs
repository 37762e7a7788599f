use {
    super::{
        error::{InvalidArgumentSnafu, Result},
        Parser,
    },
    crate::lexer::Token,
    common::Spanned,
    def::ValueType,
    once_cell::sync::Lazy,
    snafu::prelude::*,
    std::collections::HashMap,
};

/// Every accepted type name, lower-cased, mapped to the type it stands for.
static TYPE_ALIASES: Lazy<HashMap<&'static str, ValueType>> = Lazy::new(|| {
    use ValueType::*;

    HashMap::from([
        ("integer", Integer),
        ("int", Integer),
        ("int2", Integer),
        ("int8", Integer),
        ("mediumint", Integer),
        ("smallint", Integer),
        ("bigint", Integer),
        ("tinyint", Integer),
        ("double", Double),
        ("double precision", Double),
        ("real", Double),
        ("bool", Bool),
        ("boolean", Bool),
        ("blob", Blob),
        ("bytes", Blob),
        ("text", Text),
        ("varchar", Text),
        ("character", Text),
        ("array", Array),
        ("document", Document),
    ])
});

/// Resolves a type name such as `INT8` or `double precision`, ignoring case.
pub fn lookup_type_alias(name: &str) -> Option<ValueType> {
    TYPE_ALIASES.get(name.to_lowercase().as_str()).copied()
}

impl<'a> Parser<'a> {
    /// Parses a type name and its optional `(argument)`.
    ///
    /// Returns `None` without consuming anything when the next token does not
    /// name a type. The argument must be a constant expression; its value is
    /// not kept.
    pub(super) fn try_parse_value_type(&mut self) -> Result<Option<Spanned<ValueType>>> {
        let Some((value_type, words, name_span)) = self.peek_type_name() else {
            return Ok(None);
        };

        for _ in 0..words {
            self.tokens.next();
        }

        let (begin, mut end) = (*name_span.start(), *name_span.end());

        if let Some(s1) = self.try_match(Token::LeftParen) {
            let expr = self.parse_expr()?;
            let s2 = self.must_match(Token::RightParen)?;
            end = *s2.end();

            ensure!(
                expr.is_constant(),
                InvalidArgumentSnafu {
                    span: *s1.start()..=end,
                    reason: "the argument must be a constant expression",
                }
            );
        }

        Ok(Some(Spanned(value_type, begin..=end)))
    }

    /// Looks for a one- or two-word type name, preferring the longer one.
    fn peek_type_name(&mut self) -> Option<(ValueType, usize, common::Span)> {
        let first = match self.tokens.peek_nth(0) {
            Some(Ok(Spanned(Token::Identifier, span))) => span.clone(),
            _ => return None,
        };

        if let Some(Ok(Spanned(Token::Identifier, second))) = self.tokens.peek_nth(1) {
            let name = format!("{} {}", &self.src[first.clone()], &self.src[second.clone()]);

            if let Some(value_type) = lookup_type_alias(&name) {
                return Some((value_type, 2, *first.start()..=*second.end()));
            }
        }

        lookup_type_alias(&self.src[first.clone()]).map(|value_type| (value_type, 1, first))
    }
}

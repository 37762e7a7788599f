use {
    super::{
        error::{Error, InvalidArgumentSnafu, Result},
        helpers::match_token,
        Parser,
    },
    crate::{
        ast::expr::{Expression, InfixOperator, Literal, Operator, PrefixOperator},
        lexer::{Keyword, Token},
    },
    common::Spanned,
    snafu::prelude::*,
};

/// Deepest nesting of operators, parentheses and arrays an expression may have.
const MAX_EXPR_DEPTH: usize = 64;

impl<'a> Parser<'a> {
    pub(super) fn parse_expr(&mut self) -> Result<Expression> {
        self.parse_expr_recursive(0, 0)
    }

    fn parse_expr_recursive(&mut self, min_prec: u8, depth: usize) -> Result<Expression> {
        if depth > MAX_EXPR_DEPTH {
            let span = match self.tokens.peek() {
                Some(Ok(Spanned(_, span))) => span.clone(),
                _ => return Err(Error::UnexpectedEnd {}),
            };
            return InvalidArgumentSnafu {
                span,
                reason: "the expression is nested too deeply",
            }
            .fail();
        }

        let mut expr = match self.try_match_operator::<PrefixOperator>(min_prec) {
            Some(op) => op.build_expr(self.parse_expr_recursive(op.prec(), depth + 1)?),
            None => self.parse_expr_atom(depth)?,
        };

        while let Some(op) = self.try_match_operator::<InfixOperator>(min_prec) {
            let rhs = self.parse_expr_recursive(op.assoc() + op.prec(), depth + 1)?;
            expr = op.build_expr(expr, rhs);
        }

        Ok(expr)
    }

    fn try_match_operator<T: Operator>(&mut self, min_prec: u8) -> Option<T> {
        let first = match self.tokens.peek_nth(0)? {
            Ok(Spanned(token, _)) => *token,
            Err(_) => return None,
        };
        let second = match self.tokens.peek_nth(1) {
            Some(Ok(Spanned(token, _))) => Some(*token),
            _ => None,
        };

        let (op, count) = T::from(&first, second.as_ref())?;
        if op.prec() < min_prec {
            return None;
        }

        for _ in 0..count {
            self.tokens.next();
        }

        Some(op)
    }

    fn parse_expr_atom(&mut self, depth: usize) -> Result<Expression> {
        Ok(match_token!(self.tokens.next(), {
            Spanned(token @ (Token::Identifier | Token::QuotedIdentifier), span) => {
                let head = Spanned(self.identifier_from_span(token, span.clone()), span);
                Expression::Path(self.parse_path_after(head)?.into_value())
            },
            Spanned(Token::Number { is_float: true }, span) => {
                Literal::Double(self.number_from_span(span)?).into()
            },
            Spanned(Token::Number { is_float: false }, span) => {
                Literal::Integer(self.number_from_span(span)?).into()
            },
            Spanned(Token::String, span) => Literal::Text(self.string_from_span(span)).into(),
            Spanned(Token::Keyword(Keyword::TRUE), _) => Literal::Boolean(true).into(),
            Spanned(Token::Keyword(Keyword::FALSE), _) => Literal::Boolean(false).into(),
            Spanned(Token::Keyword(Keyword::NULL), _) => Literal::Null.into(),
            Spanned(Token::Question, _) => Expression::Parameter,
            Spanned(Token::LeftParen, _) => {
                let expr = self.parse_expr_recursive(0, depth + 1)?;
                self.must_match(Token::RightParen)?;
                expr
            },
            Spanned(Token::LeftBracket, _) => {
                if self.try_match(Token::RightBracket).is_some() {
                    Expression::Array(vec![])
                } else {
                    let items = self.parse_comma_separated(|p| p.parse_expr_recursive(0, depth + 1))?;
                    self.must_match(Token::RightBracket)?;
                    Expression::Array(items)
                }
            },
        }))
    }
}

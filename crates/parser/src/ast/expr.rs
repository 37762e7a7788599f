//! Expressions accepted as type arguments, e.g. the length in `VARCHAR(255)`.
//! The operator tables follow the layout used by `toydb`.
use {
    crate::lexer::{Keyword, Token},
    def::Path,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Literal(Literal),
    Path(Path),
    /// Positional parameter `?`.
    Parameter,
    Array(Vec<Expression>),
    Operation(Operation),
}

impl From<Literal> for Expression {
    fn from(literal: Literal) -> Self {
        Self::Literal(literal)
    }
}

impl From<Operation> for Expression {
    fn from(op: Operation) -> Self {
        Self::Operation(op)
    }
}

impl Expression {
    /// Whether the expression can be evaluated without a document or bound parameters.
    pub fn is_constant(&self) -> bool {
        match self {
            Self::Literal(_) => true,
            Self::Path(_) | Self::Parameter => false,
            Self::Array(items) => items.iter().all(Self::is_constant),
            Self::Operation(op) => op.operands().into_iter().all(Self::is_constant),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Null,
    Boolean(bool),
    Integer(i64),
    Double(f64),
    Text(String),
}

pub(crate) trait Operator: Sized {
    /// Looks up the operator spelled by the next one or two tokens, along with
    /// the number of tokens it takes.
    fn from(first: &Token, second: Option<&Token>) -> Option<(Self, usize)>;

    /// Returns the operator's associativity
    fn assoc(&self) -> u8;

    /// Returns the operator's precedence
    fn prec(&self) -> u8;
}

macro_rules! op_variants {
    ($((unary, $($uop:ident)*))* $((binary, $($bop:ident)*))*) => {
        #[derive(Debug, Clone, PartialEq)]
        pub enum Operation {
            $($($uop(Box<Expression>),)*)*
            $($($bop(Box<Expression>, Box<Expression>),)*)*
        }

        impl Operation {
            fn operands(&self) -> Vec<&Expression> {
                match self {
                    $($(Self::$uop(expr) => vec![expr.as_ref()],)*)*
                    $($(Self::$bop(lhs, rhs) => vec![lhs.as_ref(), rhs.as_ref()],)*)*
                }
            }
        }
    }
}

macro_rules! build_expr {
    (unary { $($op:ident)* }) => {
        pub(crate) fn build_expr(&self, expr: Expression) -> Expression {
            let expr = Box::new(expr);

            match self {
                $( Self::$op => Operation::$op(expr), )*
            }
            .into()
        }
    };
    (binary { $($op:ident)* }) => {
        pub(crate) fn build_expr(&self, lhs: Expression, rhs: Expression) -> Expression {
            let (lhs, rhs) = (Box::new(lhs), Box::new(rhs));

            match self {
                $( Self::$op => Operation::$op(lhs, rhs), )*
            }
            .into()
        }
    };
}

macro_rules! second_token {
    () => {
        _
    };
    ($second:pat) => {
        Some($second)
    };
}

macro_rules! token_count {
    () => {
        1
    };
    ($second:pat) => {
        2
    };
}

macro_rules! operations {
    {
        $(
            $ty:ident $id:ident {
                $( ($op:ident, [$first:pat $(, $second:pat)?], $prec:literal, $assoc:literal), )*
            }
        )*
    }
    => {
        op_variants!($(($ty, $($op)*))*);

        $(
            #[derive(Debug, Clone, Copy, PartialEq)]
            pub(crate) enum $id {
                $( $op, )*
            }

            impl $id {
                build_expr!($ty {$($op)*});
            }

            impl Operator for $id {
                fn from(first: &Token, second: Option<&Token>) -> Option<(Self, usize)> {
                    Some(match (first, second) {
                        $( ($first, second_token!($($second)?)) => (Self::$op, token_count!($($second)?)), )*
                        _ => return None,
                    })
                }

                fn assoc(&self) -> u8 {
                    match self {
                        $( Self::$op => $assoc, )*
                    }
                }

                fn prec(&self) -> u8 {
                    match self {
                        $( Self::$op => $prec, )*
                    }
                }
            }
        )*
    }
}

// Two-token spellings come before their one-token prefixes.
operations!(
    unary PrefixOperator {
        (Not, [Token::Keyword(Keyword::NOT)], 3, 1),
        (Positive, [Token::Plus], 8, 1),
        (Negative, [Token::Minus], 8, 1),
    }

    binary InfixOperator {
        (Or, [Token::Keyword(Keyword::OR)], 1, 1),
        (And, [Token::Keyword(Keyword::AND)], 2, 1),

        (IsNot, [Token::Keyword(Keyword::IS), Token::Keyword(Keyword::NOT)], 4, 1),
        (Is, [Token::Keyword(Keyword::IS)], 4, 1),
        (NotIn, [Token::Keyword(Keyword::NOT), Token::Keyword(Keyword::IN)], 4, 1),
        (In, [Token::Keyword(Keyword::IN)], 4, 1),
        (NotLike, [Token::Keyword(Keyword::NOT), Token::Keyword(Keyword::LIKE)], 4, 1),
        (Like, [Token::Keyword(Keyword::LIKE)], 4, 1),
        (Equal, [Token::Equal], 4, 1),
        (NotEqual, [Token::NotEqual | Token::LessOrGreaterThan], 4, 1),

        (GreaterThan, [Token::GreaterThan], 5, 1),
        (GreaterThanOrEqual, [Token::GreaterThanOrEqual], 5, 1),
        (LessThan, [Token::LessThan], 5, 1),
        (LessThanOrEqual, [Token::LessThanOrEqual], 5, 1),

        (Add, [Token::Plus], 6, 1),
        (Subtract, [Token::Minus], 6, 1),
        (Concat, [Token::Concat], 6, 1),
        (Multiply, [Token::Asterisk], 7, 1),
        (Divide, [Token::Slash], 7, 1),
        (Modulo, [Token::Percent], 7, 1),
    }
);

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Token {
    Keyword(Keyword),

    Identifier,
    /// An identifier enclosed in backquotes, which may contain any character.
    QuotedIdentifier,

    Number { is_float: bool },
    String,

    Comma,
    Period,
    Semicolon,
    LeftParen,
    RightParen,
    LeftBracket,
    RightBracket,
    Question,

    Equal,
    NotEqual,
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
    LessOrGreaterThan,

    Plus,
    Minus,
    Asterisk,
    Slash,
    Percent,
    Concat,
}

macro_rules! keyword {
    ( $( $var:ident, )* ) => {
        #[derive(Debug, Clone, Copy, PartialEq)]
        #[allow(clippy::upper_case_acronyms)]
        pub(crate) enum Keyword {
            $($var,)*
        }

        impl Keyword {
            #[cfg(test)]
            pub(crate) const NAMES: &'static [&'static str] = &[$(stringify!($var),)*];

            /// Case-insensitive lookup of a reserved word.
            pub(crate) fn lookup(s: &str) -> Option<Self> {
                match s.to_ascii_uppercase().as_str() {
                    $(stringify!($var) => Some(Self::$var),)*
                    _ => None,
                }
            }
        }
    };
}

// Type names are not keywords, the parser resolves them from identifiers.
keyword! {
    AND,
    CREATE,
    EXISTS,
    FALSE,
    IF,
    IN,
    INDEX,
    IS,
    KEY,
    LIKE,
    NOT,
    NULL,
    ON,
    OR,
    PRIMARY,
    TABLE,
    TRUE,
    UNIQUE,
}

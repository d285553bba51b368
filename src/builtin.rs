use crate::error::SemanticError;
use crate::lexer::Token;

macro_rules! builtins {
    {
        $( $name:ident ($token:ident, $symbol:literal) => $checked:ident,)*
    } => {
        /// Arithmetic operators the grammar can fold.
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum BinOp {
            $($name,)*
        }

        impl BinOp {
            pub fn from_token(token: &Token) -> Option<BinOp> {
                match token {
                    $(Token::$token => Some(BinOp::$name),)*
                    _ => None,
                }
            }

            pub fn symbol(self) -> char {
                match self {
                    $(BinOp::$name => $symbol,)*
                }
            }

            fn checked(self, lhs: i32, rhs: i32) -> Option<i32> {
                match self {
                    $(BinOp::$name => lhs.$checked(rhs),)*
                }
            }
        }
    };
}

builtins! {
    Add(Plus, '+') => checked_add,
    Sub(Minus, '-') => checked_sub,
    Mul(Star, '*') => checked_mul,
    Div(Slash, '/') => checked_div,
}

impl BinOp {
    /// `+` and `-`, the loosest binding level.
    pub fn additive(token: &Token) -> Option<BinOp> {
        Self::from_token(token).filter(|op| matches!(op, BinOp::Add | BinOp::Sub))
    }

    /// `*` and `/`.
    pub fn multiplicative(token: &Token) -> Option<BinOp> {
        Self::from_token(token).filter(|op| matches!(op, BinOp::Mul | BinOp::Div))
    }

    /// Division truncates toward zero. A zero divisor is reported before anything else.
    pub fn apply(self, lhs: i32, rhs: i32) -> Result<i32, SemanticError> {
        if self == BinOp::Div && rhs == 0 {
            return Err(SemanticError::DivisionByZero);
        }
        self.checked(lhs, rhs).ok_or(SemanticError::Overflow {
            op: self.symbol(),
            lhs,
            rhs,
        })
    }
}

// Tokens produced by the expression lexer

/// Comparative operators accepted between the two operands of an
/// expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    Ne,
    Gt,
    Ge,
    Lt,
    Le,
}

impl CompareOp {
    /// Map an operator token's text to its operator, if it is one of
    /// the six accepted symbols.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "==" => Some(CompareOp::Eq),
            "!=" => Some(CompareOp::Ne),
            ">" => Some(CompareOp::Gt),
            ">=" => Some(CompareOp::Ge),
            "<" => Some(CompareOp::Lt),
            "<=" => Some(CompareOp::Le),
            _ => None,
        }
    }
}

/// One token of a conditional expression.
///
/// A well-formed expression always tokenizes to exactly three tokens:
/// an identifier, an operator, and one of identifier/string/number.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A column name: the left operand, or an unquoted right operand.
    Ident(String),
    /// A comparison operator.
    Op(CompareOp),
    /// A quoted string literal.
    Str(String),
    /// A numeric literal.
    Number(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_symbols() {
        assert_eq!(CompareOp::from_symbol("=="), Some(CompareOp::Eq));
        assert_eq!(CompareOp::from_symbol("!="), Some(CompareOp::Ne));
        assert_eq!(CompareOp::from_symbol(">"), Some(CompareOp::Gt));
        assert_eq!(CompareOp::from_symbol(">="), Some(CompareOp::Ge));
        assert_eq!(CompareOp::from_symbol("<"), Some(CompareOp::Lt));
        assert_eq!(CompareOp::from_symbol("<="), Some(CompareOp::Le));
    }

    #[test]
    fn test_unknown_symbols() {
        assert_eq!(CompareOp::from_symbol("="), None);
        assert_eq!(CompareOp::from_symbol("=!"), None);
        assert_eq!(CompareOp::from_symbol("<>"), None);
        assert_eq!(CompareOp::from_symbol(""), None);
    }
}

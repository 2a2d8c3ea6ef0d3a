//! Condition resolution.
//!
//! The lexer produces a flat token sequence; this module maps its
//! identifier tokens to header positions and assembles the final
//! [`Condition`]. The two operands follow different policies: the left
//! column must resolve, while an unresolved right column is kept as a
//! sentinel and degrades to the absent-operand comparison path.

use super::error::ParseError;
use super::lexer::Lexer;
use super::token::{CompareOp, Token};
use crate::table::Header;
use crate::value::FieldValue;

/// The right-hand operand of a parsed condition.
#[derive(Debug, Clone, PartialEq)]
pub enum Rhs {
    /// A second column, compared cell against cell.
    Column(usize),
    /// A literal decoded once at parse time.
    Literal(FieldValue),
    /// A right-hand column name that did not resolve against the
    /// header. The comparison never sees a right operand, so the
    /// condition can only hold through the absent-value rules.
    Unresolved,
}

/// One parsed conditional expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    /// Index of the left operand's column in the header.
    pub left: usize,
    /// The operator between the operands.
    pub op: CompareOp,
    /// The right operand.
    pub rhs: Rhs,
}

/// Parse one conditional expression against a table header.
pub fn parse(header: &Header, text: &str) -> Result<Condition, ParseError> {
    let tokens = Lexer::new(text).tokenize()?;
    resolve(header, &tokens)
}

/// Resolve a token sequence into a condition over header positions.
fn resolve(header: &Header, tokens: &[Token]) -> Result<Condition, ParseError> {
    let (name, op, rhs_token) = match tokens {
        [Token::Ident(name), Token::Op(op), rhs] => (name, *op, rhs),
        _ => return Err(ParseError::UnexpectedEnd),
    };

    let left = header
        .index_of(name)
        .ok_or_else(|| ParseError::UnknownColumn(name.clone()))?;

    let rhs = match rhs_token {
        Token::Ident(column) => match header.index_of(column) {
            Some(index) => Rhs::Column(index),
            None => Rhs::Unresolved,
        },
        Token::Str(text) => Rhs::Literal(FieldValue::Text(text.clone())),
        Token::Number(number) => Rhs::Literal(FieldValue::Number(*number)),
        Token::Op(_) => return Err(ParseError::UnexpectedEnd),
    };

    Ok(Condition { left, op, rhs })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header() -> Header {
        Header::new(
            ["cost", "number", "id", "name"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        )
    }

    #[test]
    fn test_parse_numeric_literal() {
        let condition = parse(&header(), "cost > 50").unwrap();
        assert_eq!(condition.left, 0);
        assert_eq!(condition.op, CompareOp::Gt);
        assert_eq!(condition.rhs, Rhs::Literal(FieldValue::Number(50.0)));
    }

    #[test]
    fn test_parse_without_whitespace() {
        let condition = parse(&header(), "cost<=50").unwrap();
        assert_eq!(condition.left, 0);
        assert_eq!(condition.op, CompareOp::Le);
        assert_eq!(condition.rhs, Rhs::Literal(FieldValue::Number(50.0)));
    }

    #[test]
    fn test_parse_column_rhs() {
        let condition = parse(&header(), "cost<id").unwrap();
        assert_eq!(condition.left, 0);
        assert_eq!(condition.op, CompareOp::Lt);
        assert_eq!(condition.rhs, Rhs::Column(2));

        let condition = parse(&header(), "cost>=id").unwrap();
        assert_eq!(condition.op, CompareOp::Ge);
        assert_eq!(condition.rhs, Rhs::Column(2));
    }

    #[test]
    fn test_parse_string_literal() {
        let condition = parse(&header(), r#"name == "test name""#).unwrap();
        assert_eq!(condition.left, 3);
        assert_eq!(condition.op, CompareOp::Eq);
        assert_eq!(
            condition.rhs,
            Rhs::Literal(FieldValue::Text("test name".to_string()))
        );

        let condition = parse(&header(), r#"id!="xABF01""#).unwrap();
        assert_eq!(condition.left, 2);
        assert_eq!(condition.op, CompareOp::Ne);
        assert_eq!(
            condition.rhs,
            Rhs::Literal(FieldValue::Text("xABF01".to_string()))
        );
    }

    #[test]
    fn test_unknown_left_column() {
        assert_eq!(
            parse(&header(), "price > 50"),
            Err(ParseError::UnknownColumn("price".to_string()))
        );
    }

    #[test]
    fn test_unresolved_right_column() {
        // A right-hand name missing from the header is not an error.
        let condition = parse(&header(), "cost<price").unwrap();
        assert_eq!(condition.rhs, Rhs::Unresolved);
    }

    #[test]
    fn test_duplicate_column_uses_first() {
        let header = Header::new(
            ["a", "b", "a"].iter().map(|s| s.to_string()).collect(),
        );
        let condition = parse(&header, "a==a").unwrap();
        assert_eq!(condition.left, 0);
        assert_eq!(condition.rhs, Rhs::Column(0));
    }

    #[test]
    fn test_parse_errors_pass_through() {
        assert_eq!(
            parse(&header(), "cost = 50"),
            Err(ParseError::UnknownOperand("=".to_string()))
        );
        assert_eq!(
            parse(&header(), "cost>12b4"),
            Err(ParseError::MalformedNumber("12b4".to_string()))
        );
        assert_eq!(parse(&header(), "cost"), Err(ParseError::UnexpectedEnd));
    }
}

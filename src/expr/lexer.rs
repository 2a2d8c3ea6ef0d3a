// Expression lexer - tokenizes one conditional expression

use super::error::ParseError;
use super::token::{CompareOp, Token};

/// Lexer for conditional expressions.
///
/// The grammar is positional, so tokenization runs as three reads in a
/// fixed order: a column name, an operator, and a right-hand operand.
/// Each read knows its own stop set; no character is ever un-read.
pub struct Lexer {
    input: String,
    position: usize,
    current_char: Option<char>,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        let mut lexer = Lexer {
            input: input.to_string(),
            position: 0,
            current_char: None,
        };
        lexer.current_char = lexer.input.chars().next();
        lexer
    }

    /// Tokenize a full conditional expression.
    ///
    /// A well-formed expression yields exactly `[Ident, Op, rhs]` where
    /// the rhs token is an identifier, a string, or a number. Trailing
    /// input after the rhs token is ignored.
    pub fn tokenize(mut self) -> Result<Vec<Token>, ParseError> {
        self.skip_whitespace();
        let column = self.read_column_name()?;
        self.skip_whitespace();
        let op = self.read_operator()?;
        self.skip_whitespace();
        let rhs = self.read_rhs()?;
        Ok(vec![Token::Ident(column), Token::Op(op), rhs])
    }

    /// Advance to the next character.
    fn advance(&mut self) {
        self.position += 1;
        self.current_char = self.input.chars().nth(self.position);
    }

    /// Skip a run of whitespace characters.
    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Read the left-hand column name: a run of characters ending at
    /// whitespace or at the first character of an operator.
    fn read_column_name(&mut self) -> Result<String, ParseError> {
        let mut name = String::new();
        loop {
            match self.current_char {
                None => return Err(ParseError::UnexpectedEnd),
                Some(ch) if ch.is_whitespace() => break,
                Some('=') | Some('!') | Some('>') | Some('<') => break,
                Some(ch) => {
                    name.push(ch);
                    self.advance();
                }
            }
        }
        Ok(name)
    }

    /// Read the operator: a maximal run of operator characters. The
    /// trailing `=` is what separates `>=` from `>`.
    fn read_operator(&mut self) -> Result<CompareOp, ParseError> {
        let mut symbol = String::new();
        while let Some(ch) = self.current_char {
            if matches!(ch, '=' | '!' | '>' | '<') {
                symbol.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        if symbol.is_empty() && self.current_char.is_none() {
            return Err(ParseError::UnexpectedEnd);
        }
        CompareOp::from_symbol(&symbol).ok_or(ParseError::UnknownOperand(symbol))
    }

    /// Read the right-hand operand. The first character decides the
    /// kind: a quote starts a string, a digit/`-`/`.` starts a number,
    /// anything else starts a column name.
    fn read_rhs(&mut self) -> Result<Token, ParseError> {
        match self.current_char {
            None => Err(ParseError::UnexpectedEnd),
            Some('"') => {
                self.advance();
                Ok(Token::Str(self.read_quoted_string()))
            }
            Some(ch) if ch.is_ascii_digit() || ch == '-' || ch == '.' => self.read_number(),
            Some(_) => Ok(Token::Ident(self.read_rhs_column_name())),
        }
    }

    /// Read a quoted string. The opening quote is already consumed;
    /// end of input closes the string just like a closing quote does.
    fn read_quoted_string(&mut self) -> String {
        let mut text = String::new();
        while let Some(ch) = self.current_char {
            self.advance();
            if ch == '"' {
                break;
            }
            text.push(ch);
        }
        text
    }

    /// Read a numeric literal: everything up to whitespace or end of
    /// input, decoded as a float.
    fn read_number(&mut self) -> Result<Token, ParseError> {
        let mut text = String::new();
        while let Some(ch) = self.current_char {
            if ch.is_whitespace() {
                break;
            }
            text.push(ch);
            self.advance();
        }
        match text.parse::<f64>() {
            Ok(number) => Ok(Token::Number(number)),
            Err(_) => Err(ParseError::MalformedNumber(text)),
        }
    }

    /// Read a right-hand column name: everything up to whitespace or
    /// end of input.
    fn read_rhs_column_name(&mut self) -> String {
        let mut name = String::new();
        while let Some(ch) = self.current_char {
            if ch.is_whitespace() {
                break;
            }
            name.push(ch);
            self.advance();
        }
        name
    }
}

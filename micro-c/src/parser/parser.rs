use super::lexer::{Token, TokenKind};
use super::symbols::SymbolTable;
use crate::error::CompileError;
use crate::ir::ast;

pub fn parse_tokens(tokens: Vec<Token>) -> Result<ast::Program, CompileError> {
    let mut parser = Parser::new(tokens);
    parser.parse_program()
}

/// Рекурсивный спуск: по одному методу на уровень приоритета.
///
/// program    := statement ( ";"? statement )* ";"?
/// statement  := "return" expr | expr
/// expr       := assign
/// assign     := equality ( "=" assign )?
/// equality   := relational ( ("=="|"!=") relational )*
/// relational := add ( ("<"|"<="|">"|">=") add )*
/// add        := mul ( ("+"|"-") mul )*
/// mul        := unary ( ("*"|"/") unary )*
/// unary      := ("+"|"-")? primary
/// primary    := "(" expr ")" | number | identifier
struct Parser {
    tokens: Vec<Token>,
    position: usize,
    symbols: SymbolTable,
}

impl Parser {
    fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            position: 0,
            symbols: SymbolTable::new(),
        }
    }

    fn parse_program(&mut self) -> Result<ast::Program, CompileError> {
        let mut statements = Vec::new();

        while !self.is_at_end() {
            statements.push(self.parse_statement()?);
            // Необязательный разделитель между операторами
            self.consume(&TokenKind::Semicolon);
        }

        Ok(ast::Program { statements })
    }

    fn parse_statement(&mut self) -> Result<ast::Statement, CompileError> {
        if self.consume(&TokenKind::Return) {
            let value = self.parse_expression()?;
            return Ok(ast::Statement::Return(value));
        }

        Ok(ast::Statement::Expr(self.parse_expression()?))
    }

    fn parse_expression(&mut self) -> Result<ast::Expression, CompileError> {
        self.parse_assign()
    }

    fn parse_assign(&mut self) -> Result<ast::Expression, CompileError> {
        let target_offset = self.offset();
        let node = self.parse_equality()?;

        if self.consume(&TokenKind::Assign) {
            if !matches!(node, ast::Expression::Variable { .. }) {
                return Err(CompileError::SyntaxError {
                    message: "expected a variable on the left side of assignment".to_string(),
                    offset: target_offset,
                });
            }
            // Правая часть разбирается рекурсивно: a = b = 5 читается как a = (b = 5)
            let value = self.parse_assign()?;
            return Ok(ast::Expression::Assign {
                target: Box::new(node),
                value: Box::new(value),
            });
        }

        Ok(node)
    }

    fn parse_equality(&mut self) -> Result<ast::Expression, CompileError> {
        let mut node = self.parse_relational()?;

        loop {
            if self.consume(&TokenKind::Equal) {
                let right = self.parse_relational()?;
                node = binary(node, ast::BinaryOperator::Equal, right);
            } else if self.consume(&TokenKind::NotEqual) {
                let right = self.parse_relational()?;
                node = binary(node, ast::BinaryOperator::NotEqual, right);
            } else {
                break;
            }
        }

        Ok(node)
    }

    fn parse_relational(&mut self) -> Result<ast::Expression, CompileError> {
        let mut node = self.parse_add()?;

        loop {
            if self.consume(&TokenKind::Less) {
                let right = self.parse_add()?;
                node = binary(node, ast::BinaryOperator::Less, right);
            } else if self.consume(&TokenKind::LessEqual) {
                let right = self.parse_add()?;
                node = binary(node, ast::BinaryOperator::LessEqual, right);
            } else if self.consume(&TokenKind::Greater) {
                // x > y строится как y < x
                let right = self.parse_add()?;
                node = binary(right, ast::BinaryOperator::Less, node);
            } else if self.consume(&TokenKind::GreaterEqual) {
                let right = self.parse_add()?;
                node = binary(right, ast::BinaryOperator::LessEqual, node);
            } else {
                break;
            }
        }

        Ok(node)
    }

    fn parse_add(&mut self) -> Result<ast::Expression, CompileError> {
        let mut node = self.parse_mul()?;

        loop {
            if self.consume(&TokenKind::Plus) {
                let right = self.parse_mul()?;
                node = binary(node, ast::BinaryOperator::Add, right);
            } else if self.consume(&TokenKind::Minus) {
                let right = self.parse_mul()?;
                node = binary(node, ast::BinaryOperator::Subtract, right);
            } else {
                break;
            }
        }

        Ok(node)
    }

    fn parse_mul(&mut self) -> Result<ast::Expression, CompileError> {
        let mut node = self.parse_unary()?;

        loop {
            if self.consume(&TokenKind::Star) {
                let right = self.parse_unary()?;
                node = binary(node, ast::BinaryOperator::Multiply, right);
            } else if self.consume(&TokenKind::Slash) {
                let right = self.parse_unary()?;
                node = binary(node, ast::BinaryOperator::Divide, right);
            } else {
                break;
            }
        }

        Ok(node)
    }

    fn parse_unary(&mut self) -> Result<ast::Expression, CompileError> {
        if self.consume(&TokenKind::Plus) {
            return self.parse_primary();
        }

        if self.consume(&TokenKind::Minus) {
            // -x переписывается в 0 - x
            let operand = self.parse_primary()?;
            return Ok(binary(
                ast::Expression::Number(0),
                ast::BinaryOperator::Subtract,
                operand,
            ));
        }

        self.parse_primary()
    }

    fn parse_primary(&mut self) -> Result<ast::Expression, CompileError> {
        let (kind, start) = match self.peek() {
            Some(token) => (token.kind.clone(), token.span.start),
            None => {
                return Err(CompileError::SyntaxError {
                    message: "expected a number, a variable, or '('".to_string(),
                    offset: self.end_offset(),
                });
            }
        };

        match kind {
            TokenKind::LParen => {
                self.advance();
                let node = self.parse_expression()?;
                self.expect(TokenKind::RParen)?;
                Ok(node)
            }
            TokenKind::Number(value) => {
                self.advance();
                Ok(ast::Expression::Number(value))
            }
            TokenKind::Identifier(name) => {
                self.advance();
                // Переменная получает слот при первой же встрече, прямо при разборе
                let offset = self.symbols.resolve_or_allocate(&name, start)?;
                Ok(ast::Expression::Variable { offset })
            }
            other => Err(CompileError::SyntaxError {
                message: format!("expected a number, a variable, or '(', found \"{other}\""),
                offset: start,
            }),
        }
    }

    // Вспомогательные методы
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    fn advance(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.position);
        self.position += 1;
        token
    }

    /// Съедает текущий токен, если он совпадает с ожидаемым.
    fn consume(&mut self, expected: &TokenKind) -> bool {
        if self.peek().map(|token| &token.kind) == Some(expected) {
            self.position += 1;
            return true;
        }
        false
    }

    fn expect(&mut self, expected: TokenKind) -> Result<(), CompileError> {
        if self.consume(&expected) {
            return Ok(());
        }

        let (found, offset) = match self.peek() {
            Some(token) => (token.kind.to_string(), token.span.start),
            None => ("end of input".to_string(), self.end_offset()),
        };
        Err(CompileError::SyntaxError {
            message: format!("expected \"{expected}\", found \"{found}\""),
            offset,
        })
    }

    fn offset(&self) -> usize {
        match self.peek() {
            Some(token) => token.span.start,
            None => self.end_offset(),
        }
    }

    fn end_offset(&self) -> usize {
        self.tokens.last().map(|token| token.span.end).unwrap_or(0)
    }

    fn is_at_end(&self) -> bool {
        matches!(self.peek().map(|token| &token.kind), Some(TokenKind::Eof) | None)
    }
}

fn binary(left: ast::Expression, op: ast::BinaryOperator, right: ast::Expression) -> ast::Expression {
    ast::Expression::BinaryOp {
        left: Box::new(left),
        op,
        right: Box::new(right),
    }
}

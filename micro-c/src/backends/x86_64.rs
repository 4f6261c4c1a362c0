use crate::error::CompileError;
use crate::ir::ast;
use crate::parser::symbols::FRAME_SIZE;

use super::Backend;

/// Стековая машина поверх машинного стека: код каждого выражения
/// оставляет на стеке ровно одно значение, родитель его снимает.
pub struct X86_64Backend {
    asm: String,
}

impl Backend for X86_64Backend {
    fn compile(&mut self, program: &ast::Program) -> Result<String, CompileError> {
        self.compile_program(program)
    }
}

impl X86_64Backend {
    pub fn new() -> Self {
        Self { asm: String::new() }
    }

    pub fn compile_program(&mut self, program: &ast::Program) -> Result<String, CompileError> {
        self.emit(".intel_syntax noprefix");
        self.emit(".globl main");
        self.emit("main:");

        // Пролог: область под все 26 слотов резервируется сразу
        self.emit("  push rbp");
        self.emit("  mov rbp, rsp");
        self.emit(&format!("  sub rsp, {FRAME_SIZE}"));

        for statement in &program.statements {
            match statement {
                ast::Statement::Expr(expr) => {
                    self.compile_expression(expr)?;
                    // Выражение оставило одно значение - снимаем, чтобы стек не рос
                    self.emit("  pop rax");
                }
                ast::Statement::Return(value) => {
                    self.compile_expression(value)?;
                    self.emit("  pop rax");
                    self.emit_epilogue();
                }
            }
        }

        // Последний pop rax уже оставил в rax неявный результат
        self.emit_epilogue();

        Ok(self.asm.clone())
    }

    fn compile_expression(&mut self, expression: &ast::Expression) -> Result<(), CompileError> {
        match expression {
            ast::Expression::Number(value) => {
                self.emit(&format!("  push {value}"));
            }
            ast::Expression::Variable { .. } => {
                self.compile_address(expression)?;
                self.emit("  pop rax");
                self.emit("  mov rax, [rax]");
                self.emit("  push rax");
            }
            ast::Expression::Assign { target, value } => {
                self.compile_address(target)?;
                self.compile_expression(value)?;
                self.emit("  pop rdi");
                self.emit("  pop rax");
                self.emit("  mov [rax], rdi");
                // Присваивание само является выражением и даёт правую часть
                self.emit("  push rdi");
            }
            ast::Expression::BinaryOp { left, op, right } => {
                self.compile_expression(left)?;
                self.compile_expression(right)?;
                self.emit("  pop rdi");
                self.emit("  pop rax");
                match op {
                    ast::BinaryOperator::Add => self.emit("  add rax, rdi"),
                    ast::BinaryOperator::Subtract => self.emit("  sub rax, rdi"),
                    ast::BinaryOperator::Multiply => self.emit("  imul rax, rdi"),
                    ast::BinaryOperator::Divide => {
                        self.emit("  cqo");
                        self.emit("  idiv rdi");
                    }
                    ast::BinaryOperator::Equal => self.emit_compare("sete"),
                    ast::BinaryOperator::NotEqual => self.emit_compare("setne"),
                    ast::BinaryOperator::Less => self.emit_compare("setl"),
                    ast::BinaryOperator::LessEqual => self.emit_compare("setle"),
                }
                self.emit("  push rax");
            }
        }
        Ok(())
    }

    /// Кладёт на стек адрес слота переменной: rbp минус смещение.
    /// Единый путь и для чтения, и для левой части присваивания.
    fn compile_address(&mut self, expression: &ast::Expression) -> Result<(), CompileError> {
        match expression {
            ast::Expression::Variable { offset } => {
                self.emit("  mov rax, rbp");
                self.emit(&format!("  sub rax, {offset}"));
                self.emit("  push rax");
                Ok(())
            }
            _ => Err(CompileError::InternalError {
                message: "left side of assignment must be a variable".to_string(),
            }),
        }
    }

    /// Сравнение даёт строго 0 или 1
    fn emit_compare(&mut self, set: &str) {
        self.emit("  cmp rax, rdi");
        self.emit(&format!("  {set} al"));
        self.emit("  movzb rax, al");
    }

    fn emit_epilogue(&mut self) {
        self.emit("  mov rsp, rbp");
        self.emit("  pop rbp");
        self.emit("  ret");
    }

    fn emit(&mut self, line: &str) {
        self.asm.push_str(line);
        self.asm.push('\n');
    }
}

impl Default for X86_64Backend {
    fn default() -> Self {
        Self::new()
    }
}

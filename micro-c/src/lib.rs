pub mod backends;
pub mod error;
pub mod ir;
pub mod parser;
pub mod span;

pub use error::CompileError;

use backends::BackendType;

/// Полный конвейер: исходник -> токены -> AST -> ассемблер.
/// Генерация кода начинается только после того, как разбор прошёл
/// целиком, поэтому при ошибке наружу не уходит ни строчки ассемблера.
pub fn compile(source: &str) -> Result<String, CompileError> {
    let program = parser::parse(source)?;
    let mut backend = BackendType::X86_64.create();
    backend.compile(&program)
}

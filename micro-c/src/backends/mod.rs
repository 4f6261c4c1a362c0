pub mod x86_64;

use crate::error::CompileError;
use crate::ir::ast;

pub trait Backend {
    fn compile(&mut self, program: &ast::Program) -> Result<String, CompileError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendType {
    X86_64,
    // I8080,
    // Arm64,
}

impl BackendType {
    pub fn all() -> Vec<Self> {
        vec![
            Self::X86_64,
            // Self::I8080,
            // Self::Arm64,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::X86_64 => "x86_64",
            // Self::I8080 => "i8080",
            // Self::Arm64 => "arm64",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::X86_64 => "x86-64 assembly, Intel syntax",
            // Self::I8080 => "Intel 8080 CPU",
            // Self::Arm64 => "ARM 64-bit assembly",
        }
    }

    pub fn create(&self) -> Box<dyn Backend> {
        match self {
            Self::X86_64 => Box::new(x86_64::X86_64Backend::new()),
            // Self::I8080 => Box::new(I8080Backend::new()),
            // Self::Arm64 => Box::new(Arm64Backend::new()),
        }
    }
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompileError {
    #[error("{message}")]
    LexError { message: String, offset: usize },

    #[error("{message}")]
    SyntaxError { message: String, offset: usize },

    #[error("too many local variables, the frame only fits {limit}")]
    CapacityExceeded { limit: usize, offset: usize },

    #[error("internal error: {message}")]
    InternalError { message: String },

    #[error("Unknown target: {name}")]
    UnknownTarget { name: String },
}

impl CompileError {
    /// Байтовое смещение ошибки в исходнике, если оно есть.
    pub fn offset(&self) -> Option<usize> {
        match self {
            Self::LexError { offset, .. }
            | Self::SyntaxError { offset, .. }
            | Self::CapacityExceeded { offset, .. } => Some(*offset),
            Self::InternalError { .. } | Self::UnknownTarget { .. } => None,
        }
    }

    /// Диагностика с исходной строкой и кареткой под ошибочным символом:
    ///
    /// ```text
    /// 1+2)
    ///    ^ expected a number, a variable, or '('
    /// ```
    pub fn report(&self, source: &str) -> String {
        match self.offset() {
            Some(offset) => {
                let offset = offset.min(source.len());
                // Каретка считается в символах, не в байтах
                let column = source[..offset].chars().count();
                format!("{source}\n{}^ {self}", " ".repeat(column))
            }
            None => self.to_string(),
        }
    }
}

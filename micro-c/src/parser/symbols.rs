use crate::error::CompileError;

/// Шаг между слотами локальных переменных, в байтах.
pub const WORD_SIZE: usize = 8;

/// Максимум различных имён в одной компиляции.
pub const MAX_LOCALS: usize = 26;

/// Размер области локальных переменных, который резервирует пролог.
pub const FRAME_SIZE: usize = MAX_LOCALS * WORD_SIZE;

#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    pub name: String,
    /// Смещение слота вниз от rbp
    pub offset: usize,
}

/// Реестр имя -> слот. Слоты выдаются в порядке первого появления имени
/// и не меняются до конца компиляции.
#[derive(Debug, Default)]
pub struct SymbolTable {
    slots: Vec<Symbol>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Возвращает смещение для имени, заводя новый слот при первой встрече.
    /// Новая запись целиком заполняется до попадания в реестр.
    pub fn resolve_or_allocate(&mut self, name: &str, at: usize) -> Result<usize, CompileError> {
        if let Some(symbol) = self.slots.iter().find(|symbol| symbol.name == name) {
            return Ok(symbol.offset);
        }

        if self.slots.len() >= MAX_LOCALS {
            return Err(CompileError::CapacityExceeded {
                limit: MAX_LOCALS,
                offset: at,
            });
        }

        let offset = (self.slots.len() + 1) * WORD_SIZE;
        self.slots.push(Symbol {
            name: name.to_string(),
            offset,
        });
        Ok(offset)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.slots.iter()
    }
}

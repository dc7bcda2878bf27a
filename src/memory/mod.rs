// src/memory/mod.rs

use thiserror::Error;

/// Size of the full 16-bit address space, and the default memory size.
pub const MEMORY_SIZE: usize = 0x10000;

pub type Result<T> = std::result::Result<T, MemoryError>;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MemoryError {
    #[error("address {address:#06x} out of range (memory size {size:#x})")]
    OutOfRange { address: usize, size: usize },
}

/// Flat byte-addressable memory with bounds-checked access.
///
/// The backing array may be smaller than the full 64KB address space;
/// reads and writes at or beyond the configured size fail with
/// [`MemoryError::OutOfRange`] instead of wrapping, so runaway execution
/// surfaces as an error rather than silently re-entering low memory.
#[derive(Debug, Clone)]
pub struct Memory {
    pub data: Box<[u8]>,
}

impl Memory {
    /// Create a zeroed memory of `size` cells.
    ///
    /// Sizes above [`MEMORY_SIZE`] are clamped: the 16-bit address space
    /// cannot reach further cells.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0; size.min(MEMORY_SIZE)].into_boxed_slice(),
        }
    }

    /// Read the byte at `address`.
    pub fn read(&self, address: u16) -> Result<u8> {
        self.data
            .get(address as usize)
            .copied()
            .ok_or(MemoryError::OutOfRange {
                address: address as usize,
                size: self.data.len(),
            })
    }

    /// Store `value` at `address`.
    pub fn write(&mut self, address: u16, value: u8) -> Result<()> {
        let size = self.data.len();
        match self.data.get_mut(address as usize) {
            Some(cell) => {
                *cell = value;
                Ok(())
            }
            None => Err(MemoryError::OutOfRange {
                address: address as usize,
                size,
            }),
        }
    }

    /// Copy a flat byte image into memory starting at `origin`.
    ///
    /// The whole image must fit; on failure nothing is written.
    pub fn load(&mut self, origin: u16, image: &[u8]) -> Result<()> {
        let start = origin as usize;
        let end = start + image.len();
        if end > self.data.len() {
            return Err(MemoryError::OutOfRange {
                address: end - 1,
                size: self.data.len(),
            });
        }
        self.data[start..end].copy_from_slice(image);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new(MEMORY_SIZE)
    }
}


#[cfg(test)]
mod tests_property;

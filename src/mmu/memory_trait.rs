use crate::error::{Error, Result};

/// Bounds-checked, byte-indexed storage.
pub trait Memory {
    /// The whole backing buffer, for bulk inspection.
    fn memory(&self) -> &[u8];

    /// Whether the storage accepts writes.
    fn editable(&self) -> bool;

    fn len(&self) -> usize {
        self.memory().len()
    }

    fn is_empty(&self) -> bool {
        self.memory().is_empty()
    }

    fn read(&self, index: usize) -> Result<u8> {
        self.memory()
            .get(index)
            .copied()
            .ok_or_else(|| index_out_of_range(index, self.len()))
    }

    // Helper for 16-bit reads (Little Endian)
    fn read_u16(&self, index: usize) -> Result<u16> {
        let low = self.read(index)? as u16;
        let high = self.read(index.wrapping_add(1))? as u16;
        Ok((high << 8) | low)
    }
}

/// Storage that accepts writes.
pub trait MemoryMut: Memory {
    fn memory_mut(&mut self) -> &mut [u8];

    fn write(&mut self, index: usize, val: u8) -> Result<()> {
        let len = self.len();
        let slot = self
            .memory_mut()
            .get_mut(index)
            .ok_or_else(|| index_out_of_range(index, len))?;
        *slot = val;
        Ok(())
    }

    // Helper for 16-bit writes (Little Endian)
    fn write_u16(&mut self, index: usize, val: u16) -> Result<()> {
        // Both bytes are checked up front, a failed write leaves memory untouched.
        let len = self.len();
        let high = match index.checked_add(1) {
            Some(high) if high < len => high,
            _ => return Err(index_out_of_range(index.saturating_add(1), len)),
        };
        self.write(index, (val & 0xFF) as u8)?;
        self.write(high, (val >> 8) as u8)
    }
}

pub(crate) fn index_out_of_range(index: usize, len: usize) -> Error {
    Error::out_of_range(format!("index {} >= length {}", index, len))
}

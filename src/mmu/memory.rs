use super::memory_trait::{Memory, MemoryMut};

/// Read-only storage. There is no way to write to it once built.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Rom {
    data: Box<[u8]>,
}

impl Rom {
    pub fn new(content: Vec<u8>) -> Self {
        Rom {
            data: content.into_boxed_slice(),
        }
    }
}

impl Memory for Rom {
    fn memory(&self) -> &[u8] {
        &self.data
    }

    fn editable(&self) -> bool {
        false
    }
}

/// Writable storage with a length fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Ram {
    // Boxed slice so the length can never change after construction.
    data: Box<[u8]>,
}

impl Ram {
    pub fn new(content: Vec<u8>) -> Self {
        Ram {
            data: content.into_boxed_slice(),
        }
    }

    /// Zero-filled storage of `size` bytes.
    pub fn zeroed(size: usize) -> Self {
        Ram::new(vec![0; size])
    }

    /// Gives up write access, keeping the contents.
    pub fn into_rom(self) -> Rom {
        Rom { data: self.data }
    }
}

impl Memory for Ram {
    fn memory(&self) -> &[u8] {
        &self.data
    }

    fn editable(&self) -> bool {
        true
    }
}

impl MemoryMut for Ram {
    fn memory_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

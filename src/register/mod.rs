use crate::constants::{MAX_BIT_INDEX, REGISTER_SIZE};
use crate::error::{Error, Result};
use crate::mmu::{Memory, MemoryMut, Ram};

/// A 16-bit register (8-bit pair) with single-bit access, for modeling
/// hardware flag registers.
///
/// Bits are indexed from the right: bit 0 is the least significant bit of
/// the byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Register {
    memory: Ram,
}

impl Default for Register {
    fn default() -> Self {
        Self::new()
    }
}

impl Register {
    pub fn new() -> Register {
        Register {
            memory: Ram::zeroed(REGISTER_SIZE),
        }
    }

    pub fn memory(&self) -> &[u8] {
        self.memory.memory()
    }

    pub fn read(&self, byte_index: usize) -> Result<u8> {
        self.memory.read(byte_index)
    }

    pub fn write(&mut self, byte_index: usize, val: u8) -> Result<()> {
        self.memory.write(byte_index, val)
    }

    /// Both bytes as one value, byte 0 low.
    pub fn value(&self) -> u16 {
        u16::from_le_bytes(self.bytes())
    }

    pub fn set_value(&mut self, val: u16) {
        self.memory.memory_mut().copy_from_slice(&val.to_le_bytes());
    }

    pub fn get_bit(&self, byte_index: usize, bit_index: u8) -> Result<bool> {
        check_indexes(byte_index, bit_index)?;
        let byte = self.memory.read(byte_index)?;
        // Shift the desired bit to the far right and mask off the rest.
        Ok((byte >> bit_index) & 0x01 == 0x01)
    }

    pub fn set_bit(&mut self, byte_index: usize, bit_index: u8, bit_value: bool) -> Result<()> {
        check_indexes(byte_index, bit_index)?;
        let byte = self.memory.read(byte_index)?;
        let mask = 1u8 << bit_index;
        let updated = if bit_value { byte | mask } else { byte & !mask };
        self.memory.write(byte_index, updated)
    }

    fn bytes(&self) -> [u8; REGISTER_SIZE] {
        let mut bytes = [0; REGISTER_SIZE];
        bytes.copy_from_slice(self.memory.memory());
        bytes
    }
}

fn check_indexes(byte_index: usize, bit_index: u8) -> Result<()> {
    if byte_index >= REGISTER_SIZE || bit_index > MAX_BIT_INDEX {
        return Err(Error::out_of_range(format!(
            "byte index {} or bit index {} outside register",
            byte_index, bit_index
        )));
    }
    Ok(())
}

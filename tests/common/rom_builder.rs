use gameboy_cartridge::cartridge::header_checksum;
use gameboy_cartridge::constants::*;

/// Builds ROM images with a well-formed header, field by field.
pub struct RomBuilder {
    data: Vec<u8>,
    fix_checksum: bool,
}

impl RomBuilder {
    /// A 0x150 byte image with the Nintendo logo in place.
    pub fn new() -> Self {
        let mut data = vec![0; CHECKSUM_END_ADDR];
        data[LOGO_START_ADDR..LOGO_START_ADDR + LOGO_LEN].copy_from_slice(&NINTENDO_LOGO);
        Self {
            data,
            fix_checksum: true,
        }
    }

    pub fn with_size(mut self, size: usize) -> Self {
        self.data.resize(size, 0);
        self
    }

    pub fn with_title(mut self, title: &[u8]) -> Self {
        let end = TITLE_START_ADDR + title.len().min(TITLE_LEN);
        self.data[TITLE_START_ADDR..end].copy_from_slice(&title[..end - TITLE_START_ADDR]);
        self
    }

    pub fn with_byte(mut self, addr: usize, val: u8) -> Self {
        self.data[addr] = val;
        self
    }

    pub fn with_licensee_new(self, code: &[u8; 2]) -> Self {
        self.with_byte(LICENSEE_NEW_HIGH_ADDR, code[0])
            .with_byte(LICENSEE_NEW_LOW_ADDR, code[1])
    }

    /// Stores the global checksum the way it sits on the cartridge, big-endian.
    pub fn with_global_checksum(self, checksum: u16) -> Self {
        let [high, low] = checksum.to_be_bytes();
        self.with_byte(CHECKSUM_ADDR, high)
            .with_byte(CHECKSUM_ADDR + 1, low)
    }

    pub fn with_broken_logo(self) -> Self {
        let val = self.data[LOGO_START_ADDR] ^ 0xFF;
        self.with_byte(LOGO_START_ADDR, val)
    }

    pub fn with_broken_checksum(mut self) -> Self {
        self.fix_checksum = false;
        let val = header_checksum(&self.data).unwrap().wrapping_add(1);
        self.with_byte(COMPLEMENT_CHECK_ADDR, val)
    }

    pub fn build(mut self) -> Vec<u8> {
        if self.fix_checksum && self.data.len() > COMPLEMENT_CHECK_ADDR {
            self.data[COMPLEMENT_CHECK_ADDR] = header_checksum(&self.data).unwrap();
        }
        self.data
    }
}

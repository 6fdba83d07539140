use std::fmt;

use log::{debug, warn};

use super::header::Headers;
use super::validation::{valid_header_checksum, valid_nintendo_logo};
use crate::error::Result;
use crate::mmu::{Memory, Rom};
use crate::utils::to_hex;

/// A parsed and validated cartridge image.
///
/// Owns the full ROM as read-only memory; nothing about it changes after
/// [`Cartridge::parse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cartridge {
    rom: Rom,
    headers: Headers,
    logo_valid: bool,
    header_checksum_valid: bool,
}

impl Cartridge {
    /// Validates the logo and header checksum and extracts the header.
    ///
    /// A mismatching logo or checksum is reported through the returned
    /// flags. A buffer too short to hold the logo, header or checksum
    /// fails with [`Error::OutOfRange`](crate::error::Error::OutOfRange).
    /// The smallest image that parses is 0x150 bytes: the header checksum
    /// only needs 0x14F, but the global checksum at 0x14E-0x14F needs one
    /// more byte.
    pub fn parse(content: Vec<u8>) -> Result<Self> {
        debug!("Parsing cartridge of {} bytes", content.len());

        let logo_valid = valid_nintendo_logo(&content)?;
        if !logo_valid {
            warn!("Nintendo Logo verification failed!");
        }

        let header_checksum_valid = valid_header_checksum(&content)?;
        let headers = Headers::extract(&content)?;
        if !header_checksum_valid {
            warn!(
                "Header Checksum mismatch! Header: {:02X}",
                headers.complement_check
            );
        }

        Ok(Cartridge {
            rom: Rom::new(content),
            headers,
            logo_valid,
            header_checksum_valid,
        })
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    pub fn rom(&self) -> &Rom {
        &self.rom
    }

    pub fn memory(&self) -> &[u8] {
        self.rom.memory()
    }

    pub fn read(&self, index: usize) -> Result<u8> {
        self.rom.read(index)
    }

    pub fn len(&self) -> usize {
        self.rom.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rom.is_empty()
    }

    pub fn is_valid_nintendo_logo(&self) -> bool {
        self.logo_valid
    }

    pub fn is_valid_header_checksum(&self) -> bool {
        self.header_checksum_valid
    }

    /// Real hardware refuses to boot unless both checks pass.
    pub fn is_bootable(&self) -> bool {
        self.logo_valid && self.header_checksum_valid
    }

    /// Multi-line summary of size, validation status and header fields.
    /// Does not include the ROM contents.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Cartridge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let h = &self.headers;
        let status = |valid: bool| if valid { "valid" } else { "not valid" };

        writeln!(f, "Binary size in bytes: {}", self.len())?;
        writeln!(f, "Logo status: {}", status(self.logo_valid))?;
        writeln!(f, "Header status: {}", status(self.header_checksum_valid))?;
        writeln!(f, "Binary title: {}", String::from_utf8_lossy(&h.title))?;

        let fields = [
            ("gameboy type", h.gameboy_type),
            ("licensee new", h.licensee_new),
            ("sgb compatibility", h.sgb_compatibility),
            ("cartridge type", h.cartridge_type),
            ("rom size", h.rom_size),
            ("ram size", h.ram_size),
            ("japanese code", h.japanese_code),
            ("licensee old", h.licensee_old),
            ("mask rom version", h.mask_rom_version),
            ("complement check", h.complement_check),
        ];
        for (name, value) in fields {
            writeln!(f, "Binary {}: {}", name, to_hex(value))?;
        }
        writeln!(f, "Binary checksum: {:04x}", h.checksum)
    }
}

/*
parses ROM headers

Address Range,Name,Purpose
0x0104–0x0133,Nintendo Logo,"A bitmap of the Nintendo logo. The Boot ROM compares this to its own copy; if it doesn't match, the GB won't boot."
0x0134–0x0141,Title,Uppercase ASCII text of the game's name.
0x0143,Game Boy Type,CGB flag.
0x0144–0x0145,New Licensee Code,Two ASCII digits identifying the game publisher.
0x0146,SGB Flag,Indicates if the game supports Super Game Boy features.
0x0147,Cartridge Type,Tells you which MBC (if any) is inside the cart.
0x0148,ROM Size,Indicates how many banks the ROM has.
0x0149,RAM Size,Indicates how much external Save RAM is on the cart.
0x014A,Destination Code,Japanese vs. Non-Japanese market.
0x014B,Old Licensee Code,Older identification for publishers.
0x014C,Mask ROM Version,The version number of the game.
0x014D,Header Checksum,A checksum of bytes 0134–014C. The GB won't boot if this is wrong.
0x014E–0x014F,Global Checksum,Big-endian checksum of the entire ROM (the hardware doesn't check this).
*/

use log::debug;

use super::validation::too_small_for_header;
use crate::constants::*;
use crate::error::{Error, Result};
use crate::utils::{combined_char_based_value, to_host_order_16, trim_trailing_null_bytes};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Headers {
    pub title: [u8; TITLE_LEN],  // 0x0134-0x0141, untrimmed
    pub gameboy_type: u8,        // 0x0143
    pub licensee_new: u8,        // 0x0144-0x0145
    pub sgb_compatibility: u8,   // 0x0146
    pub cartridge_type: u8,      // 0x0147
    pub rom_size: u8,            // 0x0148
    pub ram_size: u8,            // 0x0149
    pub japanese_code: u8,       // 0x014A
    pub licensee_old: u8,        // 0x014B
    pub mask_rom_version: u8,    // 0x014C
    pub complement_check: u8,    // 0x014D
    pub checksum: u16,           // 0x014E-0x014F
}

impl Headers {
    pub fn extract(content: &[u8]) -> Result<Self> {
        if content.len() < HEADER_END_ADDR {
            return Err(too_small_for_header(content.len()));
        }
        if content.len() < CHECKSUM_END_ADDR {
            return Err(Error::out_of_range(format!(
                "ROM size {} too small for checksum (0x{:04X}..0x{:04X})",
                content.len(),
                CHECKSUM_ADDR,
                CHECKSUM_END_ADDR
            )));
        }

        let mut title = [0; TITLE_LEN];
        title.copy_from_slice(&content[TITLE_START_ADDR..TITLE_END_ADDR]);

        let on_disk = u16::from_ne_bytes([content[CHECKSUM_ADDR], content[CHECKSUM_ADDR + 1]]);

        let headers = Self {
            title,
            gameboy_type: content[GAMEBOY_TYPE_ADDR],
            licensee_new: licensee_new(content),
            sgb_compatibility: content[SGB_COMPATIBILITY_ADDR],
            cartridge_type: content[CARTRIDGE_TYPE_ADDR],
            rom_size: content[ROM_SIZE_ADDR],
            ram_size: content[RAM_SIZE_ADDR],
            japanese_code: content[JAPANESE_CODE_ADDR],
            licensee_old: content[LICENSEE_OLD_ADDR],
            mask_rom_version: content[MASK_ROM_VERSION_ADDR],
            complement_check: content[COMPLEMENT_CHECK_ADDR],
            checksum: to_host_order_16(on_disk),
        };
        debug!("Cartridge headers: {:?}", headers);
        Ok(headers)
    }

    /// The title as text, without the null padding.
    pub fn title_trimmed(&self) -> String {
        let title = String::from_utf8_lossy(&self.title);
        trim_trailing_null_bytes(&title).to_string()
    }

    pub fn rom_banks(&self) -> usize {
        // 32KB << rom_size (where 0 is 32KB/2 banks)
        2usize.checked_shl(self.rom_size as u32).unwrap_or(0)
    }
}

// A publisher code that isn't two digits is read as "no licensee".
fn licensee_new(content: &[u8]) -> u8 {
    combined_char_based_value(
        content[LICENSEE_NEW_HIGH_ADDR],
        content[LICENSEE_NEW_LOW_ADDR],
    )
    .unwrap_or(0)
}

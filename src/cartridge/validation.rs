use super::error::LoadError;
use crate::constants::*;
use crate::error::{Error, Result};
use std::path::Path;

pub fn validate_extension(path: &Path) -> std::result::Result<(), LoadError> {
    let ext = path
        .extension()
        .ok_or(LoadError::MissingExtension)?
        .to_str()
        .ok_or(LoadError::MissingExtension)?;

    if ext.eq_ignore_ascii_case(GAME_BOY_FILE_EXT) || ext.eq_ignore_ascii_case(GAME_BOY_COLOR_FILE_EXT)
    {
        Ok(())
    } else {
        Err(LoadError::InvalidExtension {
            expected: ".gb or .gbc",
            found: ext.to_string(),
        })
    }
}

/// Checks whether 0x0104..0x0134 holds the Nintendo logo.
///
/// Fails when the buffer does not reach 0x0133. A buffer ending exactly
/// there is missing the last logo byte, so it never matches.
pub fn valid_nintendo_logo(content: &[u8]) -> Result<bool> {
    if content.len() < LOGO_END_ADDR {
        return Err(Error::out_of_range(format!(
            "ROM size {} too small for logo (0x{:04X}..0x{:04X})",
            content.len(),
            LOGO_START_ADDR,
            LOGO_END_ADDR
        )));
    }
    let logo = content.get(LOGO_START_ADDR..LOGO_START_ADDR + LOGO_LEN);
    Ok(logo == Some(&NINTENDO_LOGO[..]))
}

/// Checks the header bytes 0x0134..=0x014C against the checksum at 0x014D.
pub fn valid_header_checksum(content: &[u8]) -> Result<bool> {
    if content.len() < HEADER_END_ADDR {
        return Err(too_small_for_header(content.len()));
    }
    Ok(header_checksum(content)? == content[COMPLEMENT_CHECK_ADDR])
}

/// x=0:FOR i=0134h TO 014Ch:x=x-MEM[i]-1:NEXT
pub fn header_checksum(content: &[u8]) -> Result<u8> {
    let header = content
        .get(HEADER_CHECK_START_ADDR..=HEADER_CHECK_END_ADDR)
        .ok_or_else(|| too_small_for_header(content.len()))?;
    Ok(header
        .iter()
        .fold(0u8, |x, &b| x.wrapping_sub(b).wrapping_sub(1)))
}

pub(crate) fn too_small_for_header(len: usize) -> Error {
    Error::out_of_range(format!(
        "ROM size {} too small for header (0x{:04X}..0x{:04X})",
        len, TITLE_START_ADDR, HEADER_END_ADDR
    ))
}

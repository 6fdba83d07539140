use super::cartridge::Cartridge;
use super::error::LoadError;
use crate::cartridge::validation::validate_extension;
use log::info;
use std::fs;
use std::path::Path;

pub fn load_rom(path: &Path) -> Result<Vec<u8>, LoadError> {
    validate_extension(path)?;

    let buffer = fs::read(path)?;
    info!("Loaded {} bytes from {}", buffer.len(), path.display());

    Ok(buffer)
}

pub fn load_cartridge(path: &Path) -> Result<Cartridge, LoadError> {
    let buffer = load_rom(path)?;
    Ok(Cartridge::parse(buffer)?)
}

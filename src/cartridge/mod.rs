mod cartridge;
mod error;
mod header;
mod loader;
mod validation;

pub use cartridge::Cartridge;
pub use error::LoadError;
pub use header::Headers;
pub use loader::{load_cartridge, load_rom};
pub use validation::{header_checksum, valid_header_checksum, valid_nintendo_logo, validate_extension};

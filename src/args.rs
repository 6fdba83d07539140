use std::path::PathBuf;

use clap::Parser;

/// Loads a Game Boy cartridge and reports what its header says.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to a .gb or .gbc file
    #[arg(long)]
    pub load_rom: PathBuf,

    // Optional log path, if none given, logs go to stderr.
    #[arg(long)]
    pub log_path: Option<PathBuf>,

    // Fail when the cartridge would be rejected by the boot ROM.
    #[arg(long)]
    pub strict: bool,
}

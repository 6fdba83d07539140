pub mod args;
pub mod cartridge;
pub mod constants;
pub mod error;
pub mod mmu;
pub mod register;
pub mod utils;

use crate::cartridge::{Cartridge, LoadError};

use log::info;
use std::io;
use std::io::Write;
use std::path::PathBuf;

pub fn setup_logging(log_path: &Option<PathBuf>) -> Result<(), io::Error> {
    let env = env_logger::Env::default().default_filter_or("info");
    let mut builder = env_logger::Builder::from_env(env);
    builder.format(|buf, record| writeln!(buf, "{}", record.args()));

    // If a path is provided, redirect output to the file
    if let Some(path) = log_path {
        let file = std::fs::File::create(path)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}

/// Loads the given file as a cartridge and logs what was found in its header.
pub fn rom_exec(args: args::Args) -> Result<Cartridge, LoadError> {
    setup_logging(&args.log_path)?;
    let cartridge = cartridge::load_cartridge(&args.load_rom)?;
    info!("{}", cartridge.describe().trim_end());

    if args.strict && !cartridge.is_bootable() {
        return Err(LoadError::NotBootable);
    }
    Ok(cartridge)
}

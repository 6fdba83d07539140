use clap::Parser;
use gameboy_cartridge::args::Args;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();

    match gameboy_cartridge::rom_exec(args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

#![allow(dead_code)]

pub mod ring_logger;
pub mod rom_builder;

pub use ring_logger::{init_logger, take_log};
pub use rom_builder::RomBuilder;

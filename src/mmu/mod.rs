mod memory;
mod memory_trait;

pub use memory::{Ram, Rom};
pub use memory_trait::{Memory, MemoryMut};

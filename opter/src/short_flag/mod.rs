//! Short flag bookkeeping and automatic allocation.
//!
//! A fresh [`CharacterRegistry`] is created per resolution; it is seeded with
//! the characters the argument parser reserves for `-h/--help` and
//! `-V/--version`. Explicit claims are validated first across the whole
//! option set, then [`allocate`] hands out the remaining characters in option
//! order.

mod allocator;
mod registry;

pub use allocator::allocate;
pub use registry::{CharacterRegistry, RESERVED_SHORTS};

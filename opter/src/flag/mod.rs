//! Compilation of option definitions into flag grammar and help text.

mod compile;

pub use compile::{CompiledFlag, Placeholder, RESERVED_LONGS, compile, long_name};

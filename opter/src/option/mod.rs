//! Declarative option definitions.
//!
//! An [`OptionMap`] associates dotted option names (for example
//! `"nested.config.value"`) with an [`OptionSpec`]. The map preserves
//! insertion order because short flag allocation depends on it: the same
//! ordered set of names always yields the same flags.

mod map;
mod spec;

pub use map::OptionMap;
pub use spec::{OptionSpec, OptionType};

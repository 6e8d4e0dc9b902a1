//! Layered option resolution.
//!
//! `opter` compiles a declarative [`OptionMap`] into a command-line flag
//! surface and a single resolved, typed configuration tree. Each option is
//! looked up, in order, on the command line, in the environment (dots in the
//! option name become underscores), in an optional `opter.json` file next to
//! the program, and finally in its default. The first source that supplied a
//! value wins, even when the value is falsy.
//!
//! ```no_run
//! use opter::{OptionMap, OptionSpec, OptionType};
//!
//! let options = OptionMap::new()
//!     .with(
//!         "server.port",
//!         OptionSpec::new()
//!             .argument("port")
//!             .option_type(OptionType::Number)
//!             .default_value(8080)
//!             .description("Port to listen on."),
//!     )
//!     .with("verbose", OptionSpec::new().description("Log more."));
//!
//! let config = opter::resolve(options, env!("CARGO_PKG_VERSION"))?;
//! let port = config.get_number("server.port");
//! # let _ = port;
//! # Ok::<_, opter::OpterError>(())
//! ```

mod builder;
pub mod coerce;
mod config;
pub mod env;
mod error;
pub mod file;
pub mod flag;
mod option;
pub mod parser;
pub mod path;
pub mod resolve;
pub mod short_flag;
mod value;

pub use builder::{ConfigBuilder, resolve};
pub use config::ResolvedConfig;
pub use error::{OpterError, OpterResult};
pub use option::{OptionMap, OptionSpec, OptionType};
pub use resolve::Provenance;
pub use value::{ConfigTable, ConfigValue};

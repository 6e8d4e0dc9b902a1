//! Primary error enum for option resolution.

use thiserror::Error;

use crate::coerce::CoercionError;
use crate::option::OptionType;

/// Convenience alias for results produced by this crate.
pub type OpterResult<T> = Result<T, OpterError>;

/// Errors that abort a resolution call.
///
/// Every failure is fatal: no partial configuration is ever returned.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum OpterError {
    /// The option map or the application version was not supplied.
    #[error("Missing arguments: `{argument}` must be supplied")]
    MissingArguments {
        /// Name of the missing invocation argument.
        argument: &'static str,
    },

    /// Two options claim the same short flag character, or an option claims a
    /// reserved one.
    #[error(
        "More than one option is attempting to use the same character (\"{character}\"): \
         '{option}'. Please choose unique characters for your options."
    )]
    DuplicateCharacter {
        /// Option that attempted the duplicate claim.
        option: String,
        /// Character that was already claimed.
        character: char,
    },

    /// An explicit short flag cannot be used as a command-line switch.
    #[error("invalid character '{character}' for option '{option}': must be ASCII alphanumeric")]
    InvalidCharacter {
        /// Option declaring the character.
        option: String,
        /// Offending character.
        character: char,
    },

    /// An option name cannot be turned into a usable long flag.
    #[error("option name '{option}' cannot be used as a long flag: {reason}")]
    InvalidOptionName {
        /// Offending option name.
        option: String,
        /// Why the derived long flag is unusable.
        reason: &'static str,
    },

    /// Two options compile to the same long flag, or an option's long flag is
    /// reserved by the argument parser.
    #[error("long flag '--{long}' for option '{option}' conflicts with another flag")]
    LongFlagConflict {
        /// Option whose long flag collides.
        option: String,
        /// Colliding long flag, without the leading `--`.
        long: String,
    },

    /// A non-boolean typed option does not declare an argument label.
    #[error(
        "option '{option}' declares type {option_type} and must specify an \"argument\" label"
    )]
    ArgumentRequiredForType {
        /// Option missing the argument label.
        option: String,
        /// Declared type of the option.
        option_type: OptionType,
    },

    /// A required option resolved to no value from any source.
    #[error("Option \"{option}\" is not set and is required.")]
    RequiredOptionMissing {
        /// Option that was not supplied.
        option: String,
    },

    /// The resolved value could not be converted to the declared type.
    #[error("failed to coerce option '{option}': {source}")]
    Coercion {
        /// Option whose value failed to coerce.
        option: String,
        /// Underlying coercion failure.
        #[source]
        source: CoercionError,
    },

    /// No unclaimed short flag character remains.
    #[error(
        "There are no valid characters left for option '{option}'. \
         Consider reducing the number of options you have."
    )]
    ExhaustedCharacterSpace {
        /// Option that could not be given a character.
        option: String,
    },

    /// The argument parser rejected the command line.
    ///
    /// Help and version display requests are reported through this variant
    /// too; see [`OpterError::is_display_request`].
    #[error("Failed to parse command-line arguments: {0}")]
    CliParsing(#[from] Box<clap::Error>),

    /// An option definition loaded from JSON is malformed.
    #[error("invalid definition for option '{option}': {source}")]
    OptionDefinition {
        /// Option whose definition failed to deserialize.
        option: String,
        /// Underlying deserialization failure.
        #[source]
        source: serde_json::Error,
    },

    /// The resolved configuration could not be deserialized into the
    /// requested type.
    #[error("failed to extract resolved configuration: {source}")]
    Extraction {
        /// Underlying deserialization failure.
        #[source]
        source: serde_json::Error,
    },
}

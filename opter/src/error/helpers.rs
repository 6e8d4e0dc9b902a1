//! Constructors and classification helpers for `OpterError`.

use clap::error::ErrorKind;

use super::OpterError;

impl OpterError {
    /// Returns `true` when the argument parser stopped to display help or
    /// version information rather than because of invalid input.
    ///
    /// Binaries typically call `clap::Error::exit` in this case.
    ///
    /// # Examples
    ///
    /// ```
    /// use opter::OpterError;
    ///
    /// let err = OpterError::RequiredOptionMissing { option: "port".into() };
    /// assert!(!err.is_display_request());
    /// ```
    #[must_use]
    pub fn is_display_request(&self) -> bool {
        matches!(
            self,
            Self::CliParsing(err)
                if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion)
        )
    }

    /// Returns the option name carried by the error, when there is one.
    #[must_use]
    pub fn option(&self) -> Option<&str> {
        match self {
            Self::DuplicateCharacter { option, .. }
            | Self::InvalidCharacter { option, .. }
            | Self::LongFlagConflict { option, .. }
            | Self::InvalidOptionName { option, .. }
            | Self::ArgumentRequiredForType { option, .. }
            | Self::RequiredOptionMissing { option }
            | Self::Coercion { option, .. }
            | Self::ExhaustedCharacterSpace { option }
            | Self::OptionDefinition { option, .. } => Some(option),
            Self::MissingArguments { .. } | Self::CliParsing(_) | Self::Extraction { .. } => None,
        }
    }
}

impl From<clap::Error> for OpterError {
    fn from(err: clap::Error) -> Self {
        Self::CliParsing(Box::new(err))
    }
}

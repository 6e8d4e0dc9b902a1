//! Flag grammar and help text builders.

use serde_json::Value;

use crate::option::OptionSpec;

/// Long flags the argument parser defines for help and version output.
pub const RESERVED_LONGS: &[&str] = &["help", "version"];

/// Value placeholder for a value-taking flag.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Placeholder {
    /// Label shown in the flag grammar.
    pub label: String,
    /// `true` renders `<label>`, `false` renders `[label]`.
    pub required: bool,
}

impl Placeholder {
    /// Renders the placeholder as it appears in the flag grammar.
    #[must_use]
    pub fn render(&self) -> String {
        if self.required {
            format!("<{}>", self.label)
        } else {
            format!("[{}]", self.label)
        }
    }
}

/// A compiled command-line flag for one option.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CompiledFlag {
    /// Dotted option name the flag resolves.
    pub option: String,
    /// Short flag character.
    pub short: char,
    /// Long flag name without the leading `--`.
    pub long: String,
    /// Value placeholder; `None` for boolean flags.
    pub placeholder: Option<Placeholder>,
    /// Help description.
    pub help: String,
}

impl CompiledFlag {
    /// Returns the flag grammar, e.g. `-c, --count [n]`.
    #[must_use]
    pub fn grammar(&self) -> String {
        let mut grammar = format!("-{}, --{}", self.short, self.long);
        if let Some(placeholder) = &self.placeholder {
            grammar.push(' ');
            grammar.push_str(&placeholder.render());
        }
        grammar
    }

    /// Returns `true` when the flag takes a value.
    #[must_use]
    pub const fn takes_value(&self) -> bool {
        self.placeholder.is_some()
    }
}

/// Compiles `spec` into a flag using the already chosen `short` character.
///
/// # Examples
///
/// ```
/// use opter::OptionSpec;
/// use opter::flag::compile;
///
/// let spec = OptionSpec::new()
///     .argument("string")
///     .description("some description.")
///     .default_value("default");
/// let flag = compile("myOptionFromDefault", &spec, 'd');
/// assert_eq!(flag.grammar(), "-d, --my-option-from-default [string]");
/// assert_eq!(flag.help, "(Optional) some description. Defaults to: \"default\"");
/// ```
#[must_use]
pub fn compile(option: &str, spec: &OptionSpec, short: char) -> CompiledFlag {
    CompiledFlag {
        option: option.to_owned(),
        short,
        long: long_name(option),
        placeholder: spec.argument_label().map(|label| Placeholder {
            label: label.to_owned(),
            required: spec.required,
        }),
        help: help_text(spec),
    }
}

/// Hyphenates camel-case boundaries; dots are kept literally.
///
/// `myOption` becomes `my-option` and `nested.config.value` is unchanged.
#[must_use]
pub fn long_name(option: &str) -> String {
    let mut long = String::with_capacity(option.len() + 4);
    for c in option.chars() {
        if c.is_ascii_uppercase() {
            long.push('-');
            long.push(c.to_ascii_lowercase());
        } else {
            long.push(c);
        }
    }
    long
}

fn help_text(spec: &OptionSpec) -> String {
    let mut help = String::from(if spec.required {
        "(Required) "
    } else {
        "(Optional) "
    });
    help.push_str(
        spec.description
            .as_deref()
            .filter(|description| !description.is_empty())
            .unwrap_or("No Description."),
    );
    match &spec.default_value {
        None | Some(Value::Null) => {}
        Some(Value::String(text)) => help.push_str(&format!(" Defaults to: \"{text}\"")),
        Some(other) => help.push_str(&format!(" Defaults to: {other}")),
    }
    help
}

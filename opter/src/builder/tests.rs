//! Unit tests for resolution orchestration.

use std::collections::HashMap;
use std::ffi::OsString;

use rstest::rstest;
use serde_json::{Value, json};

use super::ConfigBuilder;
use crate::error::OpterResult;
use crate::flag::CompiledFlag;
use crate::parser::FlagParser;
use crate::{OpterError, OptionMap, OptionSpec, OptionType};

/// Records every interaction instead of parsing anything.
#[derive(Default)]
struct RecordingParser {
    version: Option<String>,
    registered: Vec<String>,
    parse_calls: usize,
    registered_at_parse: usize,
    values: HashMap<String, Value>,
}

impl FlagParser for RecordingParser {
    fn register_version(&mut self, version: &str) {
        self.version = Some(version.to_owned());
    }

    fn register(&mut self, flag: &CompiledFlag) {
        self.registered.push(flag.grammar());
    }

    fn parse(&mut self, _args: Vec<OsString>) -> OpterResult<()> {
        self.parse_calls += 1;
        self.registered_at_parse = self.registered.len();
        Ok(())
    }

    fn value(&self, option: &str) -> Option<Value> {
        self.values.get(option).cloned()
    }
}

fn builder(
    parser: &mut RecordingParser,
) -> ConfigBuilder<HashMap<String, String>, &mut RecordingParser> {
    ConfigBuilder::new()
        .version("0.1.0")
        .args(["prog"])
        .env(HashMap::new())
        .without_config_file()
        .parser(parser)
}

#[test]
fn missing_options_are_rejected() {
    let err = ConfigBuilder::new()
        .version("0.1.0")
        .resolve()
        .expect_err("no options");
    assert!(matches!(
        err,
        OpterError::MissingArguments { argument: "options" }
    ));
}

#[rstest]
#[case(None)]
#[case(Some(""))]
#[case(Some("  "))]
fn missing_version_is_rejected(#[case] version: Option<&str>) {
    let mut builder = ConfigBuilder::new().options(OptionMap::new());
    if let Some(label) = version {
        builder = builder.version(label);
    }
    let err = builder.resolve().expect_err("no version");
    assert!(matches!(
        err,
        OpterError::MissingArguments { argument: "version" }
    ));
}

#[test]
fn duplicate_characters_fail_before_parsing() {
    let mut parser = RecordingParser::default();
    let options = OptionMap::new()
        .with("optA", OptionSpec::new().character('a'))
        .with("optB", OptionSpec::new().character('a'));
    let err = builder(&mut parser)
        .options(options)
        .resolve()
        .expect_err("duplicate character");
    assert!(matches!(
        err,
        OpterError::DuplicateCharacter { ref option, character: 'a' } if option == "optB"
    ));
    assert_eq!(parser.parse_calls, 0);
    assert!(parser.registered.is_empty());
}

#[rstest]
#[case::capitalised("Port")]
#[case::leading_hyphen("-x")]
#[case::empty("")]
#[case::equals_sign("a=b")]
#[case::whitespace("my option")]
fn unusable_long_flags_fail_before_parsing(#[case] name: &str) {
    let mut parser = RecordingParser::default();
    let options = OptionMap::new().with(name, OptionSpec::new().argument("n"));
    let err = builder(&mut parser)
        .options(options)
        .resolve()
        .expect_err("unusable long flag");
    assert!(matches!(
        err,
        OpterError::InvalidOptionName { ref option, .. } if option == name
    ));
    assert_eq!(parser.parse_calls, 0);
    assert!(parser.registered.is_empty());
}

#[test]
fn explicit_characters_are_checked_before_types() {
    let mut parser = RecordingParser::default();
    let options = OptionMap::new()
        .with("count", OptionSpec::new().option_type(OptionType::Number))
        .with("first", OptionSpec::new().character('z'))
        .with("second", OptionSpec::new().character('z'));
    let err = builder(&mut parser)
        .options(options)
        .resolve()
        .expect_err("duplicate character");
    assert!(matches!(
        err,
        OpterError::DuplicateCharacter { ref option, character: 'z' } if option == "second"
    ));
    assert_eq!(parser.parse_calls, 0);
}

#[rstest]
#[case::hyphenated_twin(&["myOption", "my-option"], "my-option")]
#[case::reserved_help(&["help"], "help")]
#[case::reserved_version(&["verbose", "version"], "version")]
fn conflicting_long_flags_fail_before_parsing(#[case] names: &[&str], #[case] expected: &str) {
    let mut parser = RecordingParser::default();
    let options: OptionMap = names.iter().map(|name| (*name, OptionSpec::new())).collect();
    let err = builder(&mut parser)
        .options(options)
        .resolve()
        .expect_err("long flag conflict");
    assert!(matches!(
        err,
        OpterError::LongFlagConflict { ref long, .. } if long == expected
    ));
    assert_eq!(parser.parse_calls, 0);
}

#[rstest]
#[case(OptionType::Number)]
#[case(OptionType::Date)]
#[case(OptionType::Object)]
#[case(OptionType::String)]
fn typed_options_need_an_argument(#[case] option_type: OptionType) {
    let mut parser = RecordingParser::default();
    let options = OptionMap::new().with("typed", OptionSpec::new().option_type(option_type));
    let err = builder(&mut parser)
        .options(options)
        .resolve()
        .expect_err("argument required");
    assert!(matches!(
        err,
        OpterError::ArgumentRequiredForType { ref option, option_type: found }
            if option == "typed" && found == option_type
    ));
    assert_eq!(parser.parse_calls, 0);
}

#[test]
fn boolean_type_needs_no_argument() -> OpterResult<()> {
    let mut parser = RecordingParser::default();
    let options = OptionMap::new().with("flag", OptionSpec::new().option_type(OptionType::Boolean));
    let config = builder(&mut parser).options(options).resolve()?;
    assert_eq!(config.get_bool("flag"), Some(false));
    Ok(())
}

#[test]
fn explicit_characters_are_claimed_before_allocation() -> OpterResult<()> {
    let mut parser = RecordingParser::default();
    let options = OptionMap::new()
        .with("alpha", OptionSpec::new())
        .with("other", OptionSpec::new().character('a'));
    builder(&mut parser).options(options).resolve()?;
    assert_eq!(parser.registered, vec!["-A, --alpha", "-a, --other"]);
    Ok(())
}

#[test]
fn flags_are_registered_before_a_single_parse() -> OpterResult<()> {
    let mut parser = RecordingParser::default();
    let options = OptionMap::new()
        .with("one", OptionSpec::new())
        .with("two", OptionSpec::new().argument("v"));
    builder(&mut parser).options(options).resolve()?;
    assert_eq!(parser.version.as_deref(), Some("0.1.0"));
    assert_eq!(parser.parse_calls, 1);
    assert_eq!(parser.registered_at_parse, 2);
    Ok(())
}

#[test]
fn resolves_number_default() -> OpterResult<()> {
    let mut parser = RecordingParser::default();
    let options = OptionMap::new().with(
        "count",
        OptionSpec::new()
            .character('c')
            .argument("n")
            .option_type(OptionType::Number)
            .default_value("10"),
    );
    let config = builder(&mut parser).options(options).resolve()?;
    assert_eq!(config.get_number("count"), Some(10.0));
    assert_eq!(config.to_json(), json!({"count": 10}));
    Ok(())
}

#[test]
fn required_option_without_value_fails() {
    let mut parser = RecordingParser::default();
    let options = OptionMap::new()
        .with("present", OptionSpec::new().argument("v").default_value("x"))
        .with("needed", OptionSpec::new().argument("v").required(true));
    let err = builder(&mut parser)
        .options(options)
        .resolve()
        .expect_err("required option missing");
    assert!(matches!(
        err,
        OpterError::RequiredOptionMissing { ref option } if option == "needed"
    ));
}

#[test]
fn required_option_accepts_falsy_values() -> OpterResult<()> {
    let mut parser = RecordingParser::default();
    parser.values.insert("needed".into(), json!(""));
    let options = OptionMap::new().with("needed", OptionSpec::new().argument("v").required(true));
    let config = builder(&mut parser).options(options).resolve()?;
    assert_eq!(config.get_str("needed"), Some(""));
    Ok(())
}

#[test]
fn coercion_failures_name_the_option() {
    let mut parser = RecordingParser::default();
    parser.values.insert("payload".into(), json!("not json"));
    let options = OptionMap::new().with(
        "payload",
        OptionSpec::new().argument("json").option_type(OptionType::Object),
    );
    let err = builder(&mut parser)
        .options(options)
        .resolve()
        .expect_err("coercion failure");
    assert!(matches!(err, OpterError::Coercion { ref option, .. } if option == "payload"));
}

#[test]
fn unset_optional_values_are_left_out_of_the_tree() -> OpterResult<()> {
    let mut parser = RecordingParser::default();
    let options = OptionMap::new().with("maybe", OptionSpec::new().argument("v"));
    let config = builder(&mut parser).options(options).resolve()?;
    assert_eq!(config.get("maybe"), None);
    assert_eq!(config.provenance("maybe"), None);
    Ok(())
}

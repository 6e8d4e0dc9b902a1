//! Flag compilation, character allocation and parse-time behaviour as seen
//! through the public builder.

mod common;

use anyhow::{Context, Result, ensure};
use opter::{OpterError, OptionMap, OptionSpec, OptionType};
use rstest::rstest;
use serde_json::json;

use common::{env, isolated_builder};

fn boolean_options(names: &[&str]) -> OptionMap {
    names.iter().map(|name| ((*name).to_owned(), OptionSpec::new())).collect()
}

#[rstest]
#[case::sixth(&["myOptionFromDefault", "mySecondOption", "mySixthOption"], 's')]
#[case::seventh(
    &["myOptionFromDefault", "mySecondOption", "mySixthOption", "mySeventhOption"],
    'S'
)]
#[case::stupid(
    &[
        "myOptionFromDefault",
        "mySecondOption",
        "mySixthOption",
        "mySeventhOption",
        "mySixteenthOption",
        "mySeventeenthOption",
        "myStupidOption",
    ],
    'y'
)]
#[case::fallback(
    &[
        "optA",
        "optAa",
        "optAaa",
        "optAaaa",
        "optAaaaa",
        "optAaaaaa",
        "optAaaaaaa",
        "optAaaaaaaa",
        "optAaaaaaaaa",
    ],
    'b'
)]
fn last_option_receives_expected_character(
    #[case] names: &[&str],
    #[case] expected: char,
) -> Result<()> {
    let config = isolated_builder(&[]).options(boolean_options(names)).resolve()?;
    let last = names.last().context("no options")?;
    let flag = config.flag(last).context("flag missing")?;
    ensure!(flag.short == expected, "expected -{expected}, got -{}", flag.short);
    Ok(())
}

#[test]
fn allocated_characters_are_unique() -> Result<()> {
    let names: Vec<String> = (0..40).map(|i| format!("option{i}")).collect();
    let options: OptionMap = names.iter().map(|n| (n.clone(), OptionSpec::new())).collect();
    let config = isolated_builder(&[]).options(options).resolve()?;
    let mut shorts: Vec<char> = config.flags().iter().map(|flag| flag.short).collect();
    shorts.sort_unstable();
    shorts.dedup();
    ensure!(shorts.len() == names.len(), "duplicate characters allocated");
    ensure!(!shorts.contains(&'h') && !shorts.contains(&'V'), "reserved character allocated");
    Ok(())
}

#[test]
fn flag_grammar_and_help_with_argument_and_default() -> Result<()> {
    let options = OptionMap::new().with(
        "myOptionFromDefault",
        OptionSpec::new()
            .character('d')
            .argument("string")
            .required(true)
            .description("some description.")
            .default_value("default"),
    );
    let config = isolated_builder(&[]).options(options).resolve()?;
    let flag = config.flag("myOptionFromDefault").context("flag missing")?;
    ensure!(
        flag.grammar() == "-d, --my-option-from-default <string>",
        "got {}",
        flag.grammar()
    );
    ensure!(
        flag.help == r#"(Required) some description. Defaults to: "default""#,
        "got {}",
        flag.help
    );
    Ok(())
}

#[test]
fn flag_grammar_and_help_without_argument_or_default() -> Result<()> {
    let options = OptionMap::new().with(
        "myOptionFromDefault",
        OptionSpec::new().character('d').description("some description."),
    );
    let config = isolated_builder(&[]).options(options).resolve()?;
    let flag = config.flag("myOptionFromDefault").context("flag missing")?;
    ensure!(flag.grammar() == "-d, --my-option-from-default", "got {}", flag.grammar());
    ensure!(flag.help == "(Optional) some description.", "got {}", flag.help);
    Ok(())
}

#[rstest]
#[case::help("--help")]
#[case::short_help("-h")]
#[case::version("--version")]
#[case::short_version("-V")]
fn help_and_version_are_display_requests(#[case] arg: &str) -> Result<()> {
    let options = OptionMap::new().with("count", OptionSpec::new().argument("n"));
    let Err(err) = isolated_builder(&[arg]).options(options).resolve() else {
        anyhow::bail!("expected {arg} to stop resolution");
    };
    ensure!(err.is_display_request(), "expected display request, got {err}");
    Ok(())
}

#[test]
fn unknown_flags_are_parse_errors() -> Result<()> {
    let options = OptionMap::new().with("count", OptionSpec::new().argument("n"));
    let Err(err) = isolated_builder(&["--nope"]).options(options).resolve() else {
        anyhow::bail!("expected unknown flag to fail");
    };
    ensure!(matches!(err, OpterError::CliParsing(_)), "unexpected error {err:?}");
    ensure!(!err.is_display_request(), "unknown flag is not a display request");
    Ok(())
}

#[test]
fn duplicate_characters_from_json_definitions() -> Result<()> {
    let options = OptionMap::from_json(json!({
        "optA": {"character": "a"},
        "optB": {"character": "a"}
    }))?;
    let Err(err) = isolated_builder(&[]).options(options).resolve() else {
        anyhow::bail!("expected duplicate character error");
    };
    ensure!(
        matches!(err, OpterError::DuplicateCharacter { character: 'a', .. }),
        "unexpected error {err:?}"
    );
    Ok(())
}

#[test]
fn type_without_argument_is_rejected() -> Result<()> {
    let options = OptionMap::from_json(json!({"count": {"type": "Number"}}))?;
    let Err(err) = isolated_builder(&[]).options(options).resolve() else {
        anyhow::bail!("expected argument required error");
    };
    ensure!(
        matches!(err, OpterError::ArgumentRequiredForType { ref option, .. } if option == "count"),
        "unexpected error {err:?}"
    );
    Ok(())
}

#[test]
fn required_option_missing_everywhere() -> Result<()> {
    let options = OptionMap::new().with("token", OptionSpec::new().argument("token").required(true));
    let Err(err) = isolated_builder(&[]).options(options.clone()).resolve() else {
        anyhow::bail!("expected required option error");
    };
    ensure!(
        matches!(err, OpterError::RequiredOptionMissing { ref option } if option == "token"),
        "unexpected error {err:?}"
    );

    let config = isolated_builder(&[])
        .options(options)
        .env(env(&[("token", "")]))
        .resolve()?;
    ensure!(config.get_str("token") == Some(""), "empty env value should satisfy required");
    Ok(())
}

#[test]
fn invalid_object_text_is_a_coercion_error() -> Result<()> {
    let options = OptionMap::new().with(
        "settings",
        OptionSpec::new().argument("json").option_type(OptionType::Object),
    );
    let Err(err) = isolated_builder(&["--settings", "{oops"]).options(options).resolve() else {
        anyhow::bail!("expected coercion error");
    };
    ensure!(
        matches!(err, OpterError::Coercion { ref option, .. } if option == "settings"),
        "unexpected error {err:?}"
    );
    Ok(())
}

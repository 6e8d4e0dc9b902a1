//! Individual stages of a resolution.

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use serde_json::Value;

use crate::coerce::coerce;
use crate::env::EnvironmentSource;
use crate::error::{OpterError, OpterResult};
use crate::flag::{CompiledFlag, RESERVED_LONGS, compile as compile_flag, long_name};
use crate::option::{OptionMap, OptionType};
use crate::parser::FlagParser;
use crate::path;
use crate::resolve::{Provenance, Sources, resolve};
use crate::short_flag::{CharacterRegistry, allocate};
use crate::value::ConfigValue;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum Stage {
    Init,
    Validating,
    Compiling,
    ExternalParse,
    Resolving,
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Init => "init",
            Self::Validating => "validating",
            Self::Compiling => "compiling",
            Self::ExternalParse => "external-parse",
            Self::Resolving => "resolving",
            Self::Done => "done",
        };
        f.write_str(name)
    }
}

impl Stage {
    pub(super) fn advance(&mut self, next: Self) {
        tracing::debug!(from = %self, to = %next, "resolution stage");
        *self = next;
    }
}

/// Claims every explicit character first, then checks each option's long
/// flag and that typed options declare an argument.
pub(super) fn validate(options: &OptionMap) -> OpterResult<CharacterRegistry> {
    let mut registry = CharacterRegistry::new();
    for (name, spec) in options {
        if let Some(character) = spec.character {
            registry.claim_explicit(name, character)?;
        }
    }
    let mut longs: HashSet<String> = RESERVED_LONGS.iter().map(|&long| long.to_owned()).collect();
    for (name, spec) in options {
        let long = long_name(name);
        if let Some(reason) = long_flag_problem(&long) {
            return Err(OpterError::InvalidOptionName {
                option: name.to_owned(),
                reason,
            });
        }
        if longs.contains(&long) {
            return Err(OpterError::LongFlagConflict {
                option: name.to_owned(),
                long,
            });
        }
        longs.insert(long);
        if let Some(option_type) = spec.option_type
            && option_type != OptionType::Boolean
            && !spec.takes_value()
        {
            return Err(OpterError::ArgumentRequiredForType {
                option: name.to_owned(),
                option_type,
            });
        }
    }
    Ok(registry)
}

fn long_flag_problem(long: &str) -> Option<&'static str> {
    if long.is_empty() {
        Some("must be non-empty")
    } else if long.starts_with('-') {
        Some("must not start with '-' or a capital letter")
    } else if long.contains(|c: char| c == '=' || c.is_whitespace()) {
        Some("must not contain '=' or whitespace")
    } else {
        None
    }
}

/// Compiles every option in map order, allocating missing short flags.
pub(super) fn compile(
    options: &OptionMap,
    registry: &mut CharacterRegistry,
) -> OpterResult<Vec<CompiledFlag>> {
    options
        .iter()
        .map(|(name, spec)| {
            let short = match spec.character {
                Some(character) => character,
                None => allocate(name, registry)?,
            };
            Ok(compile_flag(name, spec, short))
        })
        .collect()
}

/// Resolves, coerces and stores every option.
pub(super) fn resolve_values(
    options: &OptionMap,
    cli: &dyn FlagParser,
    env: &dyn EnvironmentSource,
    file: Option<&Value>,
) -> OpterResult<(ConfigValue, BTreeMap<String, Provenance>)> {
    let sources = Sources { cli, env, file };
    let mut tree = ConfigValue::default();
    let mut provenance = BTreeMap::new();
    for (name, spec) in options {
        let resolved = resolve(name, spec, &sources);
        if let Some(found) = &resolved {
            tracing::debug!(option = name, source = %found.provenance, "resolved option");
            provenance.insert(name.to_owned(), found.provenance);
        }
        let raw = resolved.map(|found| found.value);
        let coerced = coerce(raw, spec.option_type).map_err(|source| OpterError::Coercion {
            option: name.to_owned(),
            source,
        })?;
        match coerced {
            Some(value) => path::set(&mut tree, name, value),
            None if spec.required => {
                return Err(OpterError::RequiredOptionMissing {
                    option: name.to_owned(),
                });
            }
            None => tracing::debug!(option = name, "option left unset"),
        }
    }
    Ok((tree, provenance))
}

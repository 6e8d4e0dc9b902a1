//! Unit tests for environment sources.

use std::collections::HashMap;

use super::{EnvironmentSource, ProcessEnv, variable_name};

#[test]
fn replaces_every_dot() {
    assert_eq!(variable_name("a.b.c"), "a_b_c");
    assert_eq!(variable_name("myOption"), "myOption");
}

#[test]
fn reads_in_memory_maps() {
    let env = HashMap::from([("port".to_owned(), String::new())]);
    assert_eq!(env.var("port").as_deref(), Some(""));
    assert_eq!(env.var("host"), None);
}

#[test]
fn reads_the_process_environment() {
    figment::Jail::expect_with(|j| {
        j.set_env("OPTER_ENV_PROBE", "probe");
        assert_eq!(ProcessEnv.var("OPTER_ENV_PROBE").as_deref(), Some("probe"));
        assert_eq!(ProcessEnv.var("OPTER_ENV_PROBE_UNSET"), None);
        Ok(())
    });
}

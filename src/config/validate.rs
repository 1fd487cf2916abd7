// src/config/validate.rs

use crate::errors::{Result, UpallError};
use crate::types::CommandSpec;

/// Apply `--only` / `--skip` filters to `specs`, keeping their order.
///
/// - An empty `only` keeps everything.
/// - A name in `only` or `skip` that matches no command is an error, so a
///   typo does not silently run (or skip) the wrong set.
/// - Every entry with a matching name is affected (e.g. both `anyenv`
///   commands).
pub fn select_commands(
    specs: Vec<CommandSpec>,
    only: &[String],
    skip: &[String],
) -> Result<Vec<CommandSpec>> {
    ensure_known(&specs, only, "--only")?;
    ensure_known(&specs, skip, "--skip")?;

    let selected: Vec<CommandSpec> = specs
        .into_iter()
        .filter(|spec| only.is_empty() || only.contains(&spec.name))
        .filter(|spec| !skip.contains(&spec.name))
        .collect();

    Ok(selected)
}

fn ensure_known(specs: &[CommandSpec], names: &[String], flag: &str) -> Result<()> {
    for name in names {
        if !specs.iter().any(|spec| &spec.name == name) {
            return Err(UpallError::Config(format!(
                "{flag} refers to unknown command '{name}'"
            )));
        }
    }
    Ok(())
}

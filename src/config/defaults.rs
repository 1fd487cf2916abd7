// src/config/defaults.rs

use crate::types::CommandSpec;

/// The update commands run when no selection flags are given.
///
/// Each entry is looked up on `PATH` at run time; tools that are not
/// installed are skipped.
pub fn default_commands() -> Vec<CommandSpec> {
    vec![
        CommandSpec::new("brew", ["upgrade"]),
        CommandSpec::new("anyenv", ["update"]),
        CommandSpec::new("anyenv", ["git", "pull"]),
        CommandSpec::new("stack", ["upgrade"]),
        CommandSpec::new("npm", ["i", "-g", "npm"]),
        CommandSpec::new("rustup", ["self", "update"]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_list_keeps_declaration_order() {
        let names: Vec<String> = default_commands().into_iter().map(|c| c.name).collect();
        assert_eq!(
            names,
            vec!["brew", "anyenv", "anyenv", "stack", "npm", "rustup"]
        );
    }
}

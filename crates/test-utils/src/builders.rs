#![allow(dead_code)]

use upall::types::CommandSpec;

/// Builder for `CommandSpec` to simplify test setup.
pub struct CommandSpecBuilder {
    spec: CommandSpec,
}

impl CommandSpecBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            spec: CommandSpec::new(name, Vec::<String>::new()),
        }
    }

    pub fn arg(mut self, arg: &str) -> Self {
        self.spec.args.push(arg.to_string());
        self
    }

    pub fn build(self) -> CommandSpec {
        self.spec
    }
}

/// `sh -c <script>`; the command's report name is `sh`.
pub fn sh(script: &str) -> CommandSpec {
    CommandSpecBuilder::new("sh").arg("-c").arg(script).build()
}

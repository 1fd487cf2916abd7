#![allow(dead_code)]

use std::path::Path;

use upall::types::CommandSpec;

pub use upall_test_utils::init_tracing;

/// Write an executable `sh` script called `name` into `dir`.
///
/// The returned spec uses the script's absolute path as its name, so the
/// report prefix is `"[<path>] "`.
#[cfg(unix)]
pub fn script(dir: &Path, name: &str, body: &str) -> CommandSpec {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("write script");
    let mut perms = std::fs::metadata(&path).expect("stat script").permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).expect("chmod script");

    CommandSpec::new(path.to_string_lossy(), Vec::<String>::new())
}

use assert_cmd::Command;
use std::path::Path;

/// ntz command running inside `dir`
pub fn ntz_cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("ntz").unwrap();
    cmd.current_dir(dir);
    cmd
}

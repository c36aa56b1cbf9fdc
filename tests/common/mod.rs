use assert_cmd::Command;
use std::path::Path;

pub fn roster_cmd() -> Command {
    let mut cmd = Command::cargo_bin("roster").unwrap();
    cmd.env_remove("ROSTER_ROOT");
    cmd.env_remove("ROSTER_LOG");
    cmd
}

/// Run `roster init` in `path` with default settings
pub fn init_roster(path: &Path) {
    roster_cmd().arg("init").arg(path).assert().success();
}

use assert_cmd::{cargo::cargo_bin_cmd, Command};

/// Get a Command for waypath, isolated from the caller's environment
pub fn waypath() -> Command {
    let mut cmd = cargo_bin_cmd!("waypath");
    cmd.env_remove("WAYPATH_CONFIG")
        .env_remove("WAYPATH_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// A three-node chain 0 -> 1 -> 2 with no pacing
#[allow(dead_code)]
pub const CHAIN_CONFIG: &str = r#"
step_delay_ms = 0

[[edges]]
from = 0
to = 1
weight = 2

[[edges]]
from = 1
to = 2
weight = 3

[query]
src1 = 0
src2 = 1
dest = 2
"#;

use assert_cmd::Command;

pub fn tagfix_cmd() -> Command {
    let mut cmd = Command::cargo_bin("tagfix").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

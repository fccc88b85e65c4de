use assert_cmd::Command;

pub fn exnew_cmd() -> Command {
	let mut cmd = Command::cargo_bin("exnew").expect("exnew binary should be built");
	cmd.env("NO_COLOR", "1");
	cmd
}

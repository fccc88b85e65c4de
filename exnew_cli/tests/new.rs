use exnew_core::AnyEmptyResult;
use predicates::prelude::PredicateBooleanExt;

mod common;

use common::exnew_cmd;

#[test]
fn can_scaffold_a_project() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	let assert = exnew_cmd()
		.current_dir(tmp.path())
		.arg("new")
		.arg("hello_world")
		.assert()
		.success();
	assert
		.stdout(predicates::str::contains("* creating mix.exs"))
		.stdout(predicates::str::contains("* creating lib/hello_world.ex"))
		.stdout(predicates::str::contains(
			"Your project was created successfully.",
		))
		.stdout(predicates::str::contains("cd hello_world"));

	let root = tmp.path().join("hello_world");
	for path in [
		"README.md",
		".formatter.exs",
		".gitignore",
		"mix.exs",
		"lib/hello_world.ex",
		"test/test_helper.exs",
		"test/hello_world_test.exs",
	] {
		assert!(root.join(path).exists(), "{path} should be created");
	}

	let manifest = std::fs::read_to_string(root.join("mix.exs"))?;
	assert!(manifest.contains("app: :hello_world"));
	assert!(manifest.contains("defmodule HelloWorld.MixProject do"));

	let lib = std::fs::read_to_string(root.join("lib/hello_world.ex"))?;
	assert!(lib.contains("defmodule HelloWorld do"));

	Ok(())
}

#[test]
fn scaffolds_into_the_current_directory() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	exnew_cmd()
		.current_dir(tmp.path())
		.arg("new")
		.arg(".")
		.arg("--app")
		.arg("demo")
		.assert()
		.success()
		.stdout(predicates::str::contains("* creating mix.exs"))
		.stdout(predicates::str::contains("cd ").not());

	// The current directory is reused, no nested directory appears.
	assert!(tmp.path().join("mix.exs").exists());
	assert!(!tmp.path().join("demo").exists());

	let manifest = std::fs::read_to_string(tmp.path().join("mix.exs"))?;
	assert!(manifest.contains("app: :demo"));
	assert!(manifest.contains("defmodule Demo.MixProject do"));

	Ok(())
}

#[test]
fn sup_generates_a_supervision_tree() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	exnew_cmd()
		.current_dir(tmp.path())
		.arg("new")
		.arg("hello")
		.arg("--sup")
		.assert()
		.success()
		.stdout(predicates::str::contains(
			"* creating lib/hello/application.ex",
		));

	let root = tmp.path().join("hello");
	let application = std::fs::read_to_string(root.join("lib/hello/application.ex"))?;
	assert!(application.contains("defmodule Hello.Application do"));

	let manifest = std::fs::read_to_string(root.join("mix.exs"))?;
	assert!(manifest.contains("mod: {Hello.Application, []}"));

	Ok(())
}

#[test]
fn without_sup_no_application_module_is_generated() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	exnew_cmd()
		.current_dir(tmp.path())
		.arg("new")
		.arg("hello")
		.assert()
		.success();

	let root = tmp.path().join("hello");
	assert!(!root.join("lib/hello/application.ex").exists());

	let manifest = std::fs::read_to_string(root.join("mix.exs"))?;
	assert!(!manifest.contains("mod: {Hello.Application, []}"));

	Ok(())
}

#[test]
fn a_dotted_module_override_nests_the_stubs() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	exnew_cmd()
		.current_dir(tmp.path())
		.arg("new")
		.arg("hello_world")
		.arg("--module")
		.arg("Foo.Bar")
		.assert()
		.success()
		.stdout(predicates::str::contains("* creating lib/foo/bar.ex"));

	let root = tmp.path().join("hello_world");
	let lib = std::fs::read_to_string(root.join("lib/foo/bar.ex"))?;
	assert!(lib.contains("defmodule Foo.Bar do"));
	assert!(root.join("test/foo/bar_test.exs").exists());

	Ok(())
}

#[test]
fn an_existing_directory_asks_for_confirmation() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::create_dir(tmp.path().join("hello_world"))?;

	exnew_cmd()
		.current_dir(tmp.path())
		.arg("new")
		.arg("hello_world")
		.write_stdin("y\n")
		.assert()
		.success()
		.stdout(predicates::str::contains("already exists"));

	assert!(tmp.path().join("hello_world/mix.exs").exists());

	Ok(())
}

#[test]
fn empty_confirmation_input_defaults_to_yes() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::create_dir(tmp.path().join("hello_world"))?;

	exnew_cmd()
		.current_dir(tmp.path())
		.arg("new")
		.arg("hello_world")
		.write_stdin("\n")
		.assert()
		.success();

	assert!(tmp.path().join("hello_world/mix.exs").exists());

	Ok(())
}

#[test]
fn declining_the_confirmation_writes_nothing() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::create_dir(tmp.path().join("hello_world"))?;

	exnew_cmd()
		.current_dir(tmp.path())
		.arg("new")
		.arg("hello_world")
		.write_stdin("n\n")
		.assert()
		.failure()
		.stderr(predicates::str::contains("already exists"));

	assert!(!tmp.path().join("hello_world/mix.exs").exists());

	Ok(())
}

#[test]
fn a_missing_path_is_a_usage_error() -> AnyEmptyResult {
	exnew_cmd()
		.arg("new")
		.assert()
		.failure()
		.stderr(predicates::str::contains("expected PATH to be given"));

	Ok(())
}

#[test]
fn an_unknown_flag_is_a_usage_error() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	exnew_cmd()
		.current_dir(tmp.path())
		.arg("new")
		.arg("hello_world")
		.arg("--frobnicate")
		.assert()
		.failure()
		.stderr(predicates::str::contains("--frobnicate"));

	assert!(!tmp.path().join("hello_world").exists());

	Ok(())
}

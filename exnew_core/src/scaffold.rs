use std::path::PathBuf;

use crate::ExnewResult;
use crate::names;
use crate::render::TemplateContext;
use crate::render::render;
use crate::templates;
use crate::version::VersionSpec;

/// A rendered scaffold file, addressed relative to the project root.
/// Produced by [`plan_project`], consumed by the filesystem writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
	pub path: PathBuf,
	pub content: String,
}

/// Assemble the rendering context for a validated name pair and render every
/// template in the scaffold set, in the order the files are written.
///
/// This is pure: nothing touches the filesystem until the caller writes the
/// returned files, so a failure here never leaves a partially scaffolded
/// directory behind.
pub fn plan_project(
	app: &str,
	module: &str,
	version: &VersionSpec,
	sup: bool,
) -> ExnewResult<Vec<RenderedFile>> {
	tracing::debug!(app, module, sup, "planning scaffold");

	let mut context = TemplateContext::new();
	context.insert("app", app);
	context.insert("mod", module);
	context.insert("version", version.requirement());
	context.insert("sup", sup);

	// Stub paths derive from the module name, so `--module Foo.Bar` nests
	// the library file under `lib/foo/bar.ex`.
	let module_path = names::underscore(module);

	let mut files = vec![
		rendered("README.md", templates::README, &context)?,
		rendered(".formatter.exs", templates::FORMATTER, &context)?,
		rendered(".gitignore", templates::GITIGNORE, &context)?,
		rendered("mix.exs", templates::MANIFEST, &context)?,
		rendered(format!("lib/{module_path}.ex"), templates::LIB, &context)?,
	];

	if sup {
		files.push(rendered(
			format!("lib/{module_path}/application.ex"),
			templates::LIB_APPLICATION,
			&context,
		)?);
	}

	files.push(rendered(
		"test/test_helper.exs",
		templates::TEST_HELPER,
		&context,
	)?);
	files.push(rendered(
		format!("test/{module_path}_test.exs"),
		templates::TEST,
		&context,
	)?);

	Ok(files)
}

fn rendered(
	path: impl Into<PathBuf>,
	source: &str,
	context: &TemplateContext,
) -> ExnewResult<RenderedFile> {
	let path = path.into();
	let content = render(&path.to_string_lossy(), source, context)?;

	Ok(RenderedFile { path, content })
}

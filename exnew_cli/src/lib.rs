use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;

pub mod resolver;

#[derive(Parser)]
#[command(
	name = "exnew",
	author,
	version,
	about = "Scaffold Elixir-style projects without booting a VM.",
	long_about = "exnew generates a ready-to-use project skeleton: a manifest, a library module, \
	              a test suite, and the usual housekeeping files.\n\nThe application name is \
	              inferred from the target path and camelized into the module name, with both \
	              checked against the naming and collision rules before anything is written to \
	              disk.\n\nQuick start:\n  exnew new my_app          Scaffold ./my_app\n  exnew \
	              new my_app --sup    Include a supervision tree\n  exnew new . --app demo    \
	              Scaffold into the current directory"
)]
pub struct ExnewCli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	/// Enable verbose output.
	#[arg(long, short, global = true, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, global = true, default_value_t = false)]
	pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
	/// Create a new project at PATH.
	///
	/// The application name defaults to the basename of the expanded path
	/// and the module name to its camelized form; both can be overridden.
	/// A path of `.` scaffolds into the current directory without creating
	/// a new one. When the target directory already exists, a single yes/no
	/// confirmation is asked before any file is written.
	New {
		/// Where to create the project.
		path: Option<PathBuf>,

		/// Name the application explicitly instead of inferring it from
		/// the path.
		#[arg(long, value_name = "APP")]
		app: Option<String>,

		/// Name the top-level module explicitly instead of camelizing the
		/// application name.
		#[arg(long, value_name = "MODULE")]
		module: Option<String>,

		/// Generate an OTP application skeleton with a supervision tree.
		#[arg(long, default_value_t = false)]
		sup: bool,
	},
}

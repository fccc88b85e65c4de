use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use exnew_cli::Commands;
use exnew_cli::ExnewCli;
use exnew_cli::resolver::HostResolver;
use exnew_core::ELIXIR_VERSION;
use exnew_core::ExnewError;
use exnew_core::VersionSpec;
use exnew_core::names;
use exnew_core::scaffold::plan_project;
use exnew_core::validate_project_names;
use owo_colors::OwoColorize;

static USE_COLOR: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(true);

fn color_enabled() -> bool {
	USE_COLOR.load(std::sync::atomic::Ordering::Relaxed)
}

/// Apply ANSI color codes only when color is enabled.
macro_rules! colored {
	($text:expr,red) => {
		if color_enabled() {
			format!("{}", $text.red())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,green) => {
		if color_enabled() {
			format!("{}", $text.green())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,yellow) => {
		if color_enabled() {
			format!("{}", $text.yellow())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,bold) => {
		if color_enabled() {
			format!("{}", $text.bold())
		} else {
			format!("{}", $text)
		}
	};
}

fn main() {
	let mut args = ExnewCli::parse();

	// Respect NO_COLOR env var and --no-color flag.
	let use_color = !args.no_color && std::env::var_os("NO_COLOR").is_none();
	if !use_color {
		USE_COLOR.store(false, std::sync::atomic::Ordering::Relaxed);
	}

	// Install miette's fancy handler for rich error diagnostics.
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
		.with_writer(std::io::stderr)
		.init();

	let result = match args.command.take() {
		Some(Commands::New {
			path,
			app,
			module,
			sup,
		}) => run_new(&args, path, app, module, sup),
		None => {
			eprintln!("No subcommand specified. Run `exnew --help` for usage.");
			process::exit(1);
		}
	};

	if let Err(e) = result {
		// Try to render through miette for rich diagnostics with help text
		// and error codes.
		match e.downcast::<ExnewError>() {
			Ok(exnew_err) => {
				let report: miette::Report = (*exnew_err).into();
				eprintln!("{report:?}");
			}
			Err(e) => {
				eprintln!("{} {e}", colored!("error:", red));
			}
		}
		process::exit(2);
	}
}

fn run_new(
	args: &ExnewCli,
	path: Option<PathBuf>,
	app_override: Option<String>,
	module_override: Option<String>,
	sup: bool,
) -> Result<(), Box<dyn std::error::Error>> {
	let Some(path) = path else {
		return Err(ExnewError::MissingPath.into());
	};

	let app_inferred = app_override.is_none();
	let app = match app_override {
		Some(app) => app,
		None => infer_app_name(&path)?,
	};
	let module = module_override.unwrap_or_else(|| names::camelize(&app));

	let (app, module) = validate_project_names(&app, &module, app_inferred, &HostResolver)?;

	if args.verbose {
		println!("Scaffolding application `{app}` as module `{module}`");
	}

	let in_current_dir = path == Path::new(".");
	if !in_current_dir {
		confirm_directory(&path)?;
	}

	let version: VersionSpec = ELIXIR_VERSION.parse()?;
	let files = plan_project(&app, &module, &version, sup)?;

	if !in_current_dir {
		std::fs::create_dir_all(&path)?;
	}

	for file in &files {
		let target = path.join(&file.path);
		if let Some(parent) = target.parent() {
			std::fs::create_dir_all(parent)?;
		}
		std::fs::write(&target, &file.content)?;
		println!("{} {}", colored!("* creating", green), file.path.display());
	}

	print_success(&path, in_current_dir);

	Ok(())
}

/// The application name defaults to the basename of the expanded path, so
/// `exnew new .` names the project after the current directory.
fn infer_app_name(path: &Path) -> Result<String, Box<dyn std::error::Error>> {
	let absolute = std::path::absolute(path)?;
	let name = absolute
		.file_name()
		.map(|name| name.to_string_lossy().into_owned())
		.unwrap_or_default();

	Ok(name)
}

/// Single yes/no confirmation when the target directory already exists.
/// Empty input counts as yes; anything other than y/yes declines.
fn confirm_directory(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
	if !path.is_dir() {
		return Ok(());
	}

	let question = format!(
		"The directory `{}` already exists. Are you sure you want to continue?",
		path.display()
	);
	print!("{} [Yn] ", colored!(question, yellow));
	std::io::stdout().flush()?;

	let mut answer = String::new();
	std::io::stdin().read_line(&mut answer)?;
	let answer = answer.trim();

	if answer.is_empty() || answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes") {
		Ok(())
	} else {
		Err(ExnewError::DirectoryDeclined(path.display().to_string()).into())
	}
}

fn print_success(path: &Path, in_current_dir: bool) {
	println!();
	println!(
		"{}",
		colored!("Your project was created successfully.", bold)
	);
	println!("You can use `mix` to compile it, test it, and more:");
	println!();
	if !in_current_dir {
		println!("    cd {}", path.display());
	}
	println!("    mix test");
	println!();
	println!("Run `mix help` for more commands.");
}

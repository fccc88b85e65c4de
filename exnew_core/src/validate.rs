use crate::ExnewError;
use crate::ExnewResult;

/// Answers whether a symbol name already resolves to a loadable unit in the
/// host environment. The embedding application supplies the implementation;
/// the validator itself never performs I/O.
pub trait SymbolResolver {
	fn resolves(&self, symbol: &str) -> bool;
}

/// Names that collide with the generator's own command line flags.
const FLAG_NAMES: &[&str] = &["app", "module", "sup"];

/// Application names claimed by the runtime distribution.
const RUNTIME_APPS: &[&str] = &[
	"asn1",
	"compiler",
	"crypto",
	"inets",
	"kernel",
	"mnesia",
	"os_mon",
	"public_key",
	"runtime_tools",
	"sasl",
	"ssl",
	"stdlib",
	"xmerl",
];

/// Application names claimed by the language and its tooling.
const TOOLING_APPS: &[&str] = &["eex", "elixir", "ex_unit", "iex", "logger", "mix"];

/// Case-sensitive membership test against the fixed reserved name table.
pub fn is_reserved(name: &str) -> bool {
	FLAG_NAMES.contains(&name) || RUNTIME_APPS.contains(&name) || TOOLING_APPS.contains(&name)
}

/// Validate an application/module name pair against the naming and
/// collision rules. Rules run in order and the first failure wins; on
/// success the pair is returned verbatim, never normalized.
///
/// `app_inferred` marks an application name derived from the target path
/// rather than passed with `--app`; app-side failures then carry guidance
/// pointing at the explicit flag.
pub fn validate_project_names(
	app: &str,
	module: &str,
	app_inferred: bool,
	resolver: &dyn SymbolResolver,
) -> ExnewResult<(String, String)> {
	tracing::debug!(app, module, app_inferred, "validating project names");

	check_app_name(app, app_inferred, resolver)?;
	check_module_name(module, resolver)?;

	Ok((app.to_string(), module.to_string()))
}

/// App-side rules: the lowercase grammar first, then the union of the
/// reserved table and a live resolvability query. The two collision sources
/// are distinct reasons but deliberately one error, since the fix is the
/// same either way.
pub fn check_app_name(
	app: &str,
	app_inferred: bool,
	resolver: &dyn SymbolResolver,
) -> ExnewResult<()> {
	if !valid_app_name(app) {
		return Err(ExnewError::InvalidAppName {
			name: app.to_string(),
			hint: ExnewError::inferred_hint(app_inferred),
		});
	}

	if is_reserved(app) || resolver.resolves(app) {
		return Err(ExnewError::AppNameTaken {
			name: app.to_string(),
			hint: ExnewError::inferred_hint(app_inferred),
		});
	}

	Ok(())
}

/// Module-side rules: the dotted capitalized grammar, then availability of
/// the fully namespaced symbol.
pub fn check_module_name(module: &str, resolver: &dyn SymbolResolver) -> ExnewResult<()> {
	if !valid_module_name(module) {
		return Err(ExnewError::InvalidModuleName(module.to_string()));
	}

	let symbol = format!("Elixir.{module}");
	if resolver.resolves(&symbol) {
		return Err(ExnewError::ModuleNameTaken(module.to_string()));
	}

	Ok(())
}

/// `^[a-z][a-z0-9_]*$`
fn valid_app_name(name: &str) -> bool {
	let mut chars = name.chars();

	let Some(first) = chars.next() else {
		return false;
	};

	first.is_ascii_lowercase()
		&& chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

/// `^[A-Z]\w*(\.[A-Z]\w*)*$`
fn valid_module_name(name: &str) -> bool {
	!name.is_empty() && name.split('.').all(valid_module_segment)
}

fn valid_module_segment(segment: &str) -> bool {
	let mut chars = segment.chars();

	let Some(first) = chars.next() else {
		return false;
	};

	first.is_ascii_uppercase() && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

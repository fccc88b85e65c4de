use exnew_core::SymbolResolver;

/// Application names a stock host installation defines, beyond the always
/// reserved table in `exnew_core`.
const KNOWN_APPLICATIONS: &[&str] = &[
	"common_test",
	"debugger",
	"dialyzer",
	"diameter",
	"edoc",
	"eldap",
	"erts",
	"et",
	"eunit",
	"ftp",
	"jinterface",
	"megaco",
	"observer",
	"odbc",
	"parsetools",
	"reltool",
	"snmp",
	"ssh",
	"syntax_tools",
	"tftp",
	"tools",
	"wx",
];

/// Standard-library module names, in their fully namespaced form.
const KNOWN_MODULES: &[&str] = &[
	"Elixir.Agent",
	"Elixir.Application",
	"Elixir.Atom",
	"Elixir.Base",
	"Elixir.Calendar",
	"Elixir.Code",
	"Elixir.Date",
	"Elixir.DateTime",
	"Elixir.EEx",
	"Elixir.Enum",
	"Elixir.ExUnit",
	"Elixir.File",
	"Elixir.Float",
	"Elixir.GenServer",
	"Elixir.IEx",
	"Elixir.IO",
	"Elixir.Integer",
	"Elixir.Kernel",
	"Elixir.Keyword",
	"Elixir.List",
	"Elixir.Logger",
	"Elixir.Macro",
	"Elixir.Map",
	"Elixir.MapSet",
	"Elixir.Mix",
	"Elixir.Module",
	"Elixir.NaiveDateTime",
	"Elixir.Process",
	"Elixir.Range",
	"Elixir.Regex",
	"Elixir.Registry",
	"Elixir.Stream",
	"Elixir.String",
	"Elixir.Supervisor",
	"Elixir.System",
	"Elixir.Task",
	"Elixir.Time",
	"Elixir.Tuple",
	"Elixir.URI",
	"Elixir.Version",
];

/// [`SymbolResolver`] backed by a compiled-in snapshot of the symbols a
/// stock host installation defines. The generator runs outside the host VM,
/// so resolvability is answered from this index; embedders with a live
/// runtime can supply their own resolver instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostResolver;

impl SymbolResolver for HostResolver {
	fn resolves(&self, symbol: &str) -> bool {
		KNOWN_APPLICATIONS.binary_search(&symbol).is_ok()
			|| KNOWN_MODULES.binary_search(&symbol).is_ok()
	}
}

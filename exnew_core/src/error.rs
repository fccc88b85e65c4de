use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum ExnewError {
	#[error(transparent)]
	#[diagnostic(code(exnew::io_error))]
	Io(#[from] std::io::Error),

	#[error("expected PATH to be given, please use `exnew new PATH`")]
	#[diagnostic(code(exnew::missing_path))]
	MissingPath,

	#[error(
		"application name `{name}` is invalid: it must start with a lowercase ASCII letter, \
		 followed by lowercase ASCII letters, numbers, or underscores{hint}"
	)]
	#[diagnostic(code(exnew::invalid_app_name))]
	InvalidAppName { name: String, hint: String },

	#[error("application name `{name}` is reserved or already taken by the host environment{hint}")]
	#[diagnostic(code(exnew::app_name_taken))]
	AppNameTaken { name: String, hint: String },

	#[error(
		"module name `{0}` is invalid: it must be a dotted sequence of capitalized segments, for \
		 example `Foo.Bar`"
	)]
	#[diagnostic(
		code(exnew::invalid_module_name),
		help("pass `--module MODULE` with a name such as `MyApp` or `MyApp.Core`")
	)]
	InvalidModuleName(String),

	#[error("module name `{0}` is already taken")]
	#[diagnostic(
		code(exnew::module_name_taken),
		help("choose another module name with `--module MODULE`")
	)]
	ModuleNameTaken(String),

	#[error("the directory `{0}` already exists, please select another directory for scaffolding")]
	#[diagnostic(code(exnew::directory_declined))]
	DirectoryDeclined(String),

	#[error("unable to parse version string `{0}`")]
	#[diagnostic(code(exnew::invalid_version))]
	InvalidVersion(String),

	#[error("template references key `{0}` which is missing from the rendering context")]
	#[diagnostic(code(exnew::missing_template_key))]
	MissingTemplateKey(String),

	#[error("unterminated `<%` tag in template `{0}`")]
	#[diagnostic(code(exnew::unterminated_tag))]
	UnterminatedTag(String),

	#[error("unsupported expression `{expression}` in template `{template}`")]
	#[diagnostic(
		code(exnew::unsupported_expression),
		help("templates only support `<%= key %>` and `<%= if key do %> ... <% end %>`")
	)]
	UnsupportedExpression {
		template: String,
		expression: String,
	},

	#[error("unexpected `<% end %>` with no open conditional in template `{0}`")]
	#[diagnostic(code(exnew::unexpected_end))]
	UnexpectedEnd(String),

	#[error("missing `<% end %>` for the conditional on `{key}` in template `{template}`")]
	#[diagnostic(code(exnew::unclosed_conditional))]
	UnclosedConditional { template: String, key: String },
}

impl ExnewError {
	/// Guidance appended to app-side validation errors when the name was
	/// inferred from the target path rather than passed explicitly.
	pub(crate) fn inferred_hint(inferred: bool) -> String {
		if inferred {
			". The application name is inferred from the path, if you'd like to explicitly name the \
			 application then use the `--app APP` option"
				.to_string()
		} else {
			String::new()
		}
	}
}

pub type ExnewResult<T> = Result<T, ExnewError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;

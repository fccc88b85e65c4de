//! `exnew_core` is the core library for the [exnew](https://github.com/exnew-rs/exnew)
//! project generator. It validates application/module name pairs against the
//! naming and collision rules, and renders the embedded scaffold templates
//! with a minimal conditional template language.
//!
//! ## Processing Pipeline
//!
//! ```text
//! (path, --app, --module)
//!   → Name resolution (basename / camelize, done by the orchestrator)
//!   → Validator (syntax grammars, reserved table, SymbolResolver queries)
//!   → TemplateContext (app, mod, version requirement, sup flag)
//!   → Renderer (interpolation + conditional blocks, once per template)
//!   → RenderedFile list (written to disk by the orchestrator)
//! ```
//!
//! ## Modules
//!
//! - [`names`] — Casing transforms: `camelize` for deriving a module name
//!   from an application name, `underscore` for deriving stub file paths.
//! - [`scaffold`] — Context assembly and per-template rendering into
//!   [`RenderedFile`] values.
//! - [`templates`] — The embedded template bodies, kept as plain data.
//!
//! ## Key Types
//!
//! - [`SymbolResolver`] — Injected capability answering whether a symbol
//!   already resolves to a loadable unit in the host environment.
//! - [`TemplateContext`] — Read-only key-value data for one rendering pass.
//! - [`VersionSpec`] — Major/minor/pre-release triple behind the manifest
//!   requirement string.
//! - [`ExnewError`] — The full error taxonomy, from user-facing naming
//!   violations to fatal template programming errors.
//!
//! ## Quick Start
//!
//! ```rust
//! use exnew_core::SymbolResolver;
//! use exnew_core::names;
//! use exnew_core::scaffold::plan_project;
//! use exnew_core::validate_project_names;
//! use exnew_core::version::VersionSpec;
//!
//! struct NoSymbols;
//!
//! impl SymbolResolver for NoSymbols {
//! 	fn resolves(&self, _symbol: &str) -> bool {
//! 		false
//! 	}
//! }
//!
//! # fn main() -> exnew_core::ExnewResult<()> {
//! let app = "hello_world";
//! let module = names::camelize(app);
//! let (app, module) = validate_project_names(app, &module, true, &NoSymbols)?;
//!
//! let version: VersionSpec = "1.18.4".parse()?;
//! let files = plan_project(&app, &module, &version, false)?;
//! assert!(files.iter().any(|file| file.path.ends_with("mix.exs")));
//! # Ok(())
//! # }
//! ```

pub use error::*;
pub use render::*;
pub use scaffold::*;
pub use validate::*;
pub use version::*;

#[allow(unused_assignments)]
mod error;
pub(crate) mod lexer;
pub mod names;
mod render;
pub mod scaffold;
pub mod templates;
mod validate;
pub mod version;

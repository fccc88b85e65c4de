use std::collections::BTreeMap;
use std::fmt::Display;

use crate::ExnewError;
use crate::ExnewResult;
use crate::lexer::TagToken;
use crate::lexer::lex_tag;

/// A scalar value bound to a template key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
	String(String),
	Bool(bool),
}

impl Value {
	/// Conditional blocks include their body only for truthy values. Strings
	/// are always truthy; only `false` is not.
	fn is_truthy(&self) -> bool {
		match self {
			Value::Bool(value) => *value,
			Value::String(_) => true,
		}
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Value::String(value) => write!(f, "{value}"),
			Value::Bool(value) => write!(f, "{value}"),
		}
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Value::String(value.to_string())
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Value::String(value)
	}
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Value::Bool(value)
	}
}

/// Read-only key-value data supplied to the renderer for one rendering
/// pass. Assembled once per run by the orchestrator; the renderer never
/// mutates it.
#[derive(Debug, Clone, Default)]
pub struct TemplateContext {
	values: BTreeMap<String, Value>,
}

impl TemplateContext {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
		self.values.insert(key.into(), value.into());
	}

	pub fn get(&self, key: &str) -> Option<&Value> {
		self.values.get(key)
	}
}

/// A parsed template fragment. Conditionals carry their body as a nested
/// sequence, so an else branch would be a second sequence on the same
/// variant rather than a new node shape.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Node {
	Text(String),
	Interpolation(String),
	Conditional { key: String, body: Vec<Node> },
}

/// Render a named template against the supplied context.
///
/// The template language is deliberately small: `<%= key %>` interpolates
/// the string form of `context[key]`, and `<%= if key do %> ... <% end %>`
/// includes its body verbatim (interpolation still applies inside) only when
/// the key is bound to a truthy value. Anything else inside a tag is
/// rejected rather than skipped, since every template shipped with the
/// generator is trusted and fixed.
pub fn render(name: &str, source: &str, context: &TemplateContext) -> ExnewResult<String> {
	let nodes = parse_template(name, source)?;
	let mut output = String::with_capacity(source.len());
	render_nodes(&nodes, context, &mut output)?;
	Ok(output)
}

fn parse_template(name: &str, source: &str) -> ExnewResult<Vec<Node>> {
	// One frame for the root sequence plus one per open conditional.
	let mut frames: Vec<(Option<String>, Vec<Node>)> = vec![(None, Vec::new())];
	let mut rest = source;

	loop {
		let Some(start) = rest.find("<%") else {
			if !rest.is_empty() {
				push_text(&mut frames, rest);
			}
			break;
		};

		if start > 0 {
			push_text(&mut frames, &rest[..start]);
		}

		let mut tag = &rest[start + 2..];
		let expression = tag.starts_with('=');
		if expression {
			tag = &tag[1..];
		}

		let Some(close) = tag.find("%>") else {
			return Err(ExnewError::UnterminatedTag(name.to_string()));
		};

		let interior = &tag[..close];
		rest = &tag[close + 2..];
		apply_tag(name, &mut frames, expression, interior)?;
	}

	match frames.pop() {
		Some((None, nodes)) if frames.is_empty() => Ok(nodes),
		Some((key, _)) => {
			Err(ExnewError::UnclosedConditional {
				template: name.to_string(),
				key: key.unwrap_or_default(),
			})
		}
		None => Ok(Vec::new()),
	}
}

fn push_text(frames: &mut [(Option<String>, Vec<Node>)], text: &str) {
	if let Some((_, nodes)) = frames.last_mut() {
		nodes.push(Node::Text(text.to_string()));
	}
}

fn apply_tag(
	name: &str,
	frames: &mut Vec<(Option<String>, Vec<Node>)>,
	expression: bool,
	interior: &str,
) -> ExnewResult<()> {
	let unsupported = || {
		ExnewError::UnsupportedExpression {
			template: name.to_string(),
			expression: interior.trim().to_string(),
		}
	};

	let tokens = lex_tag(interior).ok_or_else(unsupported)?;

	match (expression, tokens.as_slice()) {
		(true, [TagToken::Ident(key)]) => {
			if let Some((_, nodes)) = frames.last_mut() {
				nodes.push(Node::Interpolation(key.clone()));
			}
			Ok(())
		}
		(true, [TagToken::If, TagToken::Ident(key), TagToken::Do]) => {
			frames.push((Some(key.clone()), Vec::new()));
			Ok(())
		}
		(false, [TagToken::End]) => {
			if frames.len() < 2 {
				return Err(ExnewError::UnexpectedEnd(name.to_string()));
			}

			let Some((Some(key), body)) = frames.pop() else {
				return Err(ExnewError::UnexpectedEnd(name.to_string()));
			};

			if let Some((_, nodes)) = frames.last_mut() {
				nodes.push(Node::Conditional { key, body });
			}

			Ok(())
		}
		_ => Err(unsupported()),
	}
}

fn render_nodes(nodes: &[Node], context: &TemplateContext, output: &mut String) -> ExnewResult<()> {
	for node in nodes {
		match node {
			Node::Text(text) => output.push_str(text),
			Node::Interpolation(key) => {
				let value = context
					.get(key)
					.ok_or_else(|| ExnewError::MissingTemplateKey(key.clone()))?;
				output.push_str(&value.to_string());
			}
			Node::Conditional { key, body } => {
				// An unbound key reads as null and the block is omitted, the
				// same as an explicit `false`.
				if context.get(key).is_some_and(Value::is_truthy) {
					render_nodes(body, context, output)?;
				}
			}
		}
	}

	Ok(())
}

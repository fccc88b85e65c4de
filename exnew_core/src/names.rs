//! Casing transforms between application names (`hello_world`) and module
//! names (`HelloWorld`), plus the filesystem form used for stub paths.

/// Convert an underscored application name into a capitalized module name:
/// `hello_world` becomes `HelloWorld`. Empty segments produced by repeated
/// underscores are dropped.
pub fn camelize(name: &str) -> String {
	name
		.split('_')
		.filter(|segment| !segment.is_empty())
		.map(capitalize)
		.collect()
}

fn capitalize(segment: &str) -> String {
	let mut chars = segment.chars();
	match chars.next() {
		Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
		None => String::new(),
	}
}

/// Convert a module name into the relative path form used for generated
/// source files: `HelloWorld` becomes `hello_world`, and dotted names map to
/// nested directories, so `Foo.Bar` becomes `foo/bar`.
///
/// A word boundary is an uppercase letter preceded by a lowercase letter or
/// digit, or the final uppercase letter of a run that is followed by a
/// lowercase letter (`HTTPServer` becomes `http_server`).
pub fn underscore(module: &str) -> String {
	let mut output = String::with_capacity(module.len() + 4);
	let mut chars = module.chars().peekable();
	let mut previous: Option<char> = None;

	while let Some(ch) = chars.next() {
		match ch {
			'.' => {
				output.push('/');
				previous = None;
			}
			c if c.is_ascii_uppercase() => {
				let boundary = match previous {
					Some(p) if p.is_ascii_lowercase() || p.is_ascii_digit() => true,
					Some(p) if p.is_ascii_uppercase() => {
						chars.peek().is_some_and(char::is_ascii_lowercase)
					}
					_ => false,
				};

				if boundary {
					output.push('_');
				}

				output.push(c.to_ascii_lowercase());
				previous = Some(c);
			}
			c => {
				output.push(c);
				previous = Some(c);
			}
		}
	}

	output
}

use logos::Logos;

/// Raw tokens produced by logos for the interior of a `<% ... %>` template
/// tag. The surrounding text is never tokenized; only tag interiors reach
/// this lexer.
#[derive(Logos, Debug, Clone, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n]+")]
pub(crate) enum TagToken {
	#[token("if")]
	If,
	#[token("do")]
	Do,
	#[token("end")]
	End,
	#[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_owned())]
	Ident(String),
}

/// Tokenize a tag interior. Returns `None` when the interior contains bytes
/// outside the tag grammar, which callers report as an unsupported
/// expression.
pub(crate) fn lex_tag(interior: &str) -> Option<Vec<TagToken>> {
	let mut tokens = Vec::new();

	for result in TagToken::lexer(interior) {
		tokens.push(result.ok()?);
	}

	Some(tokens)
}

//! Pure text transforms shared by the renderer and templates.

use once_cell::sync::Lazy;
use regex::Regex;

static HEADING_ONE_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^([A-Za-z0-9_-]+)$").unwrap());

static HEADING_TITLE_CASE: Lazy<Regex> = Lazy::new(|| {
	Regex::new(r"(?m)^((?:[A-Z][A-Za-z0-9_-]*)(?:[ \t]+[A-Z][A-Za-z0-9_-]*)*)$").unwrap()
});

static HEADING_TITLE: Lazy<Regex> =
	Lazy::new(|| Regex::new(r"(?m)^((?:[A-Za-z0-9_-]+)(?:[ \t]+[A-Za-z0-9_-]+)*)$").unwrap());

static HEADING_TITLE_CASE_ONE_WORD: Lazy<Regex> = Lazy::new(|| {
	Regex::new(
		r"(?m)^((?:[A-Za-z0-9_-]+)|(?:(?:[A-Z][A-Za-z0-9_-]*)(?:[ \t]+[A-Z][A-Za-z0-9_-]*)*))$",
	)
	.unwrap()
});

static PLACEHOLDER_LINE: Lazy<Regex> =
	Lazy::new(|| Regex::new(r"(?m)^[ \t]*/\* private fields \*/[ \t]*\r?\n?").unwrap());

static INVISIBLE_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new("(?m)[\t ]*\x7f[\t ]*$").unwrap());

static INDENT_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^([^\n])").unwrap());

/// Strategy used to promote full doc-comment lines to Markdown headings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeadingMode {
	/// A single `[A-Za-z0-9_-]+` token on the line.
	OneWord,
	/// Whitespace-separated tokens, each starting with an uppercase letter.
	TitleCase,
	/// Whitespace-separated `[A-Za-z0-9_-]+` tokens; effectively a line
	/// without punctuation.
	Title,
	/// Union of `OneWord` and `TitleCase`.
	#[default]
	TitleCaseOneWord,
	/// No heading detection; text passes through unchanged.
	Disabled,
}

impl HeadingMode {
	/// Parse the CLI flag value. `""` and `-` disable detection;
	/// unrecognized values keep the default strategy.
	pub fn from_flag(value: &str) -> Self {
		match value {
			"1Word" => Self::OneWord,
			"TitleCase" => Self::TitleCase,
			"Title" => Self::Title,
			"TitleCase1Word" => Self::TitleCaseOneWord,
			"" | "-" => Self::Disabled,
			_ => Self::default(),
		}
	}

	fn pattern(self) -> Option<&'static Regex> {
		match self {
			Self::OneWord => Some(&HEADING_ONE_WORD),
			Self::TitleCase => Some(&HEADING_TITLE_CASE),
			Self::Title => Some(&HEADING_TITLE),
			Self::TitleCaseOneWord => Some(&HEADING_TITLE_CASE_ONE_WORD),
			Self::Disabled => None,
		}
	}
}

/// Prefix every line of `text` that matches `mode` in its entirety with
/// `marker` and a space. Lines that match only partially are left alone.
pub fn detect_headings(text: &str, mode: HeadingMode, marker: &str) -> String {
	let Some(pattern) = mode.pattern() else {
		return text.to_string();
	};
	pattern
		.replace_all(text, |caps: &regex::Captures<'_>| {
			format!("{marker} {}", &caps[1])
		})
		.into_owned()
}

/// Format a code snippet for Markdown output.
///
/// In plain mode the snippet becomes a literal block: every non-empty line
/// indented by four spaces. Otherwise a single enclosing brace pair (an
/// artifact of example-body extraction) is stripped, the snippet is
/// dedented, blank edge lines are trimmed, and the result is wrapped in a
/// fenced block tagged `rust`.
pub fn fence_code(source: &str, plain: bool) -> String {
	if plain {
		return indent_lines(&format!("{source}\n"), "    ");
	}
	let bytes = source.as_bytes();
	let source = if bytes.first() == Some(&b'{') && bytes.last() == Some(&b'}') {
		&source[1..source.len() - 1]
	} else {
		source
	};
	let source = dedent(source);
	let source = source.trim_matches('\n');
	format!("```rust\n{source}\n```")
}

/// Indent every non-empty line of `text` with `indent`.
pub fn indent_lines(text: &str, indent: &str) -> String {
	INDENT_LINE
		.replace_all(text, format!("{indent}$1"))
		.into_owned()
}

/// Remove the longest common leading-whitespace prefix shared by every
/// non-blank line.
pub fn dedent(text: &str) -> String {
	let mut margin: Option<&str> = None;
	for line in text.lines() {
		if line.trim().is_empty() {
			continue;
		}
		let indent = &line[..line.len() - line.trim_start().len()];
		margin = Some(match margin {
			None => indent,
			Some(current) => common_prefix(current, indent),
		});
	}
	let Some(margin) = margin else {
		return text.to_string();
	};
	if margin.is_empty() {
		return text.to_string();
	}
	text.lines()
		.map(|line| line.strip_prefix(margin).unwrap_or(line))
		.collect::<Vec<_>>()
		.join("\n")
}

fn common_prefix<'a>(left: &'a str, right: &str) -> &'a str {
	let mut end = 0;
	for (a, b) in left.chars().zip(right.chars()) {
		if a != b {
			break;
		}
		end += a.len_utf8();
	}
	&left[..end]
}

/// Remove lines consisting solely of the extraction placeholder emitted
/// for elided private fields.
pub fn strip_placeholder(text: &str) -> String {
	PLACEHOLDER_LINE.replace_all(text, "").into_owned()
}

/// Remove the invisible `\x7f` paragraph-joining marker, along with any
/// trailing whitespace on the same line. Markdown has no automatic
/// paragraph joining, so the marker is pure noise in the output.
pub fn strip_invisible_marker(text: &str) -> String {
	INVISIBLE_MARKER.replace_all(text, "").into_owned()
}

/// Split an example name into its owning symbol and a display qualifier.
///
/// The owner is the text before the first underscore; the qualifier, when
/// present, has the remaining underscores replaced with spaces and is
/// parenthesized with a leading space.
pub fn split_example_name(name: &str) -> (&str, String) {
	match name.split_once('_') {
		Some((owner, rest)) => (owner, format!(" ({})", rest.replace('_', " "))),
		None => (name, String::new()),
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn full_line_headings_get_a_marker() {
		let text = "Usage\n\nRun the tool.\n";
		let result = detect_headings(text, HeadingMode::TitleCaseOneWord, "####");
		assert_eq!(result, "#### Usage\n\nRun the tool.\n");
	}

	#[test]
	fn partial_line_matches_are_left_alone() {
		let text = "Usage:\n";
		let result = detect_headings(text, HeadingMode::TitleCaseOneWord, "####");
		assert_eq!(result, "Usage:\n");
	}

	#[test]
	fn one_word_mode_rejects_multiple_words() {
		let text = "Known Issues\nInstall\n";
		let result = detect_headings(text, HeadingMode::OneWord, "###");
		assert_eq!(result, "Known Issues\n### Install\n");
	}

	#[test]
	fn title_case_mode_requires_capitalized_words() {
		let text = "Known Issues\nknown issues\n";
		let result = detect_headings(text, HeadingMode::TitleCase, "####");
		assert_eq!(result, "#### Known Issues\nknown issues\n");
	}

	#[test]
	fn title_mode_accepts_lowercase_words_without_punctuation() {
		let text = "known issues\nknown issues.\n";
		let result = detect_headings(text, HeadingMode::Title, "####");
		assert_eq!(result, "#### known issues\nknown issues.\n");
	}

	#[test]
	fn disabled_mode_passes_text_through() {
		let text = "Usage\n";
		assert_eq!(detect_headings(text, HeadingMode::Disabled, "####"), text);
	}

	#[test]
	fn unknown_flag_value_keeps_the_default() {
		assert_eq!(HeadingMode::from_flag("Banner"), HeadingMode::TitleCaseOneWord);
		assert_eq!(HeadingMode::from_flag("-"), HeadingMode::Disabled);
		assert_eq!(HeadingMode::from_flag(""), HeadingMode::Disabled);
		assert_eq!(HeadingMode::from_flag("1Word"), HeadingMode::OneWord);
	}

	#[test]
	fn fencing_dedents_a_common_indent() {
		let source = "    let a = 1;\n    let b = 2;";
		assert_eq!(fence_code(source, false), "```rust\nlet a = 1;\nlet b = 2;\n```");
	}

	#[test]
	fn fencing_strips_a_single_enclosing_brace_pair() {
		let source = "{\n    let a = 1;\n}";
		assert_eq!(fence_code(source, false), "```rust\nlet a = 1;\n```");
	}

	#[test]
	fn fencing_an_empty_snippet_still_opens_and_closes() {
		assert_eq!(fence_code("{}", false), "```rust\n\n```");
	}

	#[test]
	fn plain_fencing_indents_instead() {
		let source = "let a = 1;\n\nlet b = 2;";
		assert_eq!(fence_code(source, true), "    let a = 1;\n\n    let b = 2;\n");
	}

	#[test]
	fn dedent_ignores_blank_lines_when_measuring() {
		let text = "    one\n\n    two";
		assert_eq!(dedent(text), "one\n\ntwo");
	}

	#[test]
	fn dedent_uses_the_shortest_indent() {
		let text = "        one\n    two";
		assert_eq!(dedent(text), "    one\ntwo");
	}

	#[test]
	fn placeholder_lines_are_removed() {
		let decl = "pub struct Widget {\n    /* private fields */\n}";
		assert_eq!(strip_placeholder(decl), "pub struct Widget {\n}");
	}

	#[test]
	fn invisible_marker_is_removed_with_trailing_whitespace() {
		let text = "first\x7f \nsecond\n";
		assert_eq!(strip_invisible_marker(text), "first\nsecond\n");
	}

	#[test]
	fn example_names_split_on_the_first_underscore() {
		let (owner, qualifier) = split_example_name("Foo_bar_baz");
		assert_eq!(owner, "Foo");
		assert_eq!(qualifier, " (bar baz)");
	}

	#[test]
	fn example_names_without_a_qualifier_keep_an_empty_one() {
		let (owner, qualifier) = split_example_name("Foo");
		assert_eq!(owner, "Foo");
		assert_eq!(qualifier, "");
	}
}

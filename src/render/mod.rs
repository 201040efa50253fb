//! The built-in Markdown renderer: turns a loaded [`Document`] into
//! GitHub-flavored Markdown, or plain Markdown when the style asks for
//! literal blocks and no raw HTML.

pub mod style;

use std::collections::HashMap;

use crate::loader::Document;
use crate::model::{Example, FuncDecl, Package, TypeDecl, ValueGroup};
use crate::text;
pub use style::Style;

/// Link advertised by the badge and signature lines.
const PROJECT_URL: &str = "https://github.com/docdown/docdown";

impl Document {
	/// Render the whole document: header, synopsis, and, for libraries,
	/// the usage section.
	pub fn emit(&self, style: &Style) -> String {
		let mut parts = vec![self.emit_header(style), self.emit_synopsis(style)];
		if !self.is_command {
			parts.push(self.emit_usage(style));
		}
		parts.retain(|part| !part.is_empty());
		parts.join("\n\n")
	}

	/// Render the document header: the display name and, for libraries
	/// with a known import path, an indented `use` line.
	pub fn emit_header(&self, style: &Style) -> String {
		let mut out = format!("# {}\n--\n", self.name);
		if !self.is_command && style.include_import && !self.import_path.is_empty() {
			out.push_str(&format!("    use {};\n", self.import_path));
		}
		out.trim().to_string()
	}

	/// Render the synopsis: the package doc comment with heading
	/// detection applied.
	pub fn emit_synopsis(&self, style: &Style) -> String {
		let doc = text::strip_invisible_marker(&self.package.doc);
		text::detect_headings(&doc, style.heading, &style.synopsis_header)
			.trim()
			.to_string()
	}

	/// Render the usage section: the index followed by constants,
	/// variables, functions, and types.
	pub fn emit_usage(&self, style: &Style) -> String {
		let examples = group_examples(&self.examples);
		let mut out = String::new();
		out.push_str(&style.usage_header);
		out.push_str("\n\n");
		render_index(&mut out, &self.package, style);
		render_values(&mut out, &self.package.consts, style);
		render_values(&mut out, &self.package.vars, style);
		render_funcs(
			&mut out,
			&self.package.funcs,
			&style.function_header,
			Some(&examples),
			style,
		);
		render_types(&mut out, &self.package.types, &examples, style);
		out.trim().to_string()
	}

	/// Render the generator-credit line, or nothing when disabled.
	pub fn emit_signature(&self, style: &Style) -> String {
		if style.include_signature {
			format!("--\n**docdown** {PROJECT_URL}")
		} else {
			String::new()
		}
	}

	/// Markdown badge advertising generated documentation.
	pub fn badge(&self) -> String {
		format!(
			"[![docdown](https://img.shields.io/badge/docs-generated-blue.svg)]({PROJECT_URL})"
		)
	}

	/// Drop every function and method listing, keeping constants,
	/// variables, and the type declarations themselves.
	pub fn strip_funcs(&mut self) {
		self.package.funcs.clear();
		for decl in &mut self.package.types {
			decl.funcs.clear();
			decl.methods.clear();
		}
	}
}

/// Group examples by the owning symbol name: the first
/// underscore-delimited segment. Owners that match no declared symbol
/// stay in the map and are simply never emitted.
pub(crate) fn group_examples(examples: &[Example]) -> HashMap<&str, Vec<&Example>> {
	let mut map: HashMap<&str, Vec<&Example>> = HashMap::new();
	for example in examples {
		let (owner, _) = text::split_example_name(&example.name);
		map.entry(owner).or_default().push(example);
	}
	map
}

fn render_index(out: &mut String, package: &Package, style: &Style) {
	for entry in &package.funcs {
		index_line(out, "", &one_line(&entry.decl), &entry.name, style);
	}
	for entry in &package.types {
		index_line(out, "", &format!("type {}", entry.name), &entry.name, style);
		for func in &entry.funcs {
			index_line(out, "    ", &one_line(&func.decl), &func.name, style);
		}
	}
	out.push('\n');
}

fn index_line(out: &mut String, indent: &str, label: &str, anchor: &str, style: &Style) {
	if style.plain {
		out.push_str(&format!("{indent}- {label}\n"));
	} else {
		out.push_str(&format!("{indent}- [{label}](#{anchor})\n"));
	}
}

/// Collapse a declaration to a single line for index display.
fn one_line(decl: &str) -> String {
	decl.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn render_values(out: &mut String, list: &[ValueGroup], style: &Style) {
	for entry in list {
		out.push_str(&text::fence_code(
			&text::strip_placeholder(&entry.decl),
			style.plain,
		));
		out.push('\n');
		push_doc(out, &entry.doc);
		out.push('\n');
	}
}

fn render_funcs(
	out: &mut String,
	list: &[FuncDecl],
	header: &str,
	examples: Option<&HashMap<&str, Vec<&Example>>>,
	style: &Style,
) {
	for entry in list {
		let label = if entry.recv.is_empty() {
			format!("fn {}", entry.name)
		} else {
			format!("fn ({}) {}", entry.recv, entry.name)
		};
		push_section_header(out, header, &entry.name, &label, style);
		out.push_str(&text::fence_code(
			&text::strip_placeholder(&entry.decl),
			style.plain,
		));
		out.push('\n');
		push_doc(out, &entry.doc);
		out.push('\n');
		if let Some(map) = examples {
			for example in map.get(entry.name.as_str()).into_iter().flatten() {
				render_example(out, example, style);
			}
		}
	}
}

fn render_types(
	out: &mut String,
	list: &[TypeDecl],
	examples: &HashMap<&str, Vec<&Example>>,
	style: &Style,
) {
	for entry in list {
		let label = format!("type {}", entry.name);
		push_section_header(out, &style.type_header, &entry.name, &label, style);
		out.push_str(&text::fence_code(
			&text::strip_placeholder(&entry.decl),
			style.plain,
		));
		out.push('\n');
		push_doc(out, &entry.doc);
		out.push('\n');
		for example in examples.get(entry.name.as_str()).into_iter().flatten() {
			render_example(out, example, style);
		}
		render_values(out, &entry.consts, style);
		render_values(out, &entry.vars, style);
		render_funcs(
			out,
			&entry.funcs,
			&style.type_function_header,
			Some(examples),
			style,
		);
		// Methods never carry their own examples; examples key on the
		// type name.
		render_funcs(out, &entry.methods, &style.type_function_header, None, style);
	}
}

fn render_example(out: &mut String, example: &Example, style: &Style) {
	let (_, qualifier) = text::split_example_name(&example.name);
	let code = text::fence_code(&example.code, style.plain);
	if style.plain {
		out.push_str(&format!("Example{qualifier}:\n\n"));
		push_doc(out, &example.doc);
		out.push('\n');
		out.push_str(&code);
		out.push('\n');
		out.push_str("Output:\n\n");
		out.push_str(&text::indent_lines(&format!("{}\n", example.output), "    "));
		out.push('\n');
	} else {
		out.push_str(&format!(
			"<a name=\"example_{}\"></a>\n<details><summary>Example{}</summary>\n<p>\n\n",
			example.name, qualifier
		));
		push_doc(out, &example.doc);
		out.push('\n');
		out.push_str(&code);
		out.push_str("\n\n");
		out.push_str(&format!("Output:\n\n```\n{}```\n", example.output));
		out.push_str("\n</p>\n</details>\n\n");
	}
}

fn push_section_header(out: &mut String, header: &str, anchor: &str, label: &str, style: &Style) {
	if style.plain {
		out.push_str(&format!("{header} {label}\n\n"));
	} else {
		out.push_str(&format!("{header} <a name=\"{anchor}\"></a> {label}\n\n"));
	}
}

/// Append a doc comment followed by a newline, dropping the invisible
/// marker and skipping empty docs entirely.
fn push_doc(out: &mut String, doc: &str) {
	let doc = text::strip_invisible_marker(doc);
	let doc = doc.trim();
	if !doc.is_empty() {
		out.push_str(doc);
		out.push('\n');
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	fn example(name: &str) -> Example {
		Example {
			name: name.to_string(),
			doc: String::new(),
			code: "{\n    run();\n}".to_string(),
			output: String::new(),
			whole_file: false,
		}
	}

	#[test]
	fn examples_group_by_their_first_segment() {
		let examples = vec![example("Widget"), example("Widget_basic"), example("Orphan")];
		let groups = group_examples(&examples);
		assert_eq!(groups["Widget"].len(), 2);
		// An owner with no matching symbol still appears in the map.
		assert_eq!(groups["Orphan"].len(), 1);
	}

	#[test]
	fn declarations_collapse_to_one_line_for_the_index() {
		let decl = "pub fn render(\n\twidget: &Widget,\n) -> String";
		assert_eq!(one_line(decl), "pub fn render( widget: &Widget, ) -> String");
	}
}

//! Declaration text recovery: slices item source out of the original file
//! by span, excluding attributes and function bodies.

use proc_macro2::{LineColumn, Span};
use syn::Visibility;
use syn::spanned::Spanned;

/// Source text indexed by line for span slicing.
pub(crate) struct SourceText {
	lines: Vec<String>,
}

impl SourceText {
	pub(crate) fn new(text: &str) -> Self {
		Self {
			lines: text.lines().map(str::to_string).collect(),
		}
	}

	/// Slice the text between two positions. Columns are measured in
	/// characters, matching `proc_macro2::LineColumn`.
	pub(crate) fn slice(&self, start: LineColumn, end: LineColumn) -> String {
		if start.line == 0 || start.line > self.lines.len() {
			return String::new();
		}
		let end_line = end.line.min(self.lines.len());
		let mut out = Vec::new();
		for number in start.line..=end_line {
			let line = &self.lines[number - 1];
			let from = if number == start.line { start.column } else { 0 };
			let to = if number == end.line {
				end.column
			} else {
				line.chars().count()
			};
			out.push(char_slice(line, from, to));
		}
		out.join("\n")
	}
}

fn char_slice(line: &str, from: usize, to: usize) -> String {
	line.chars()
		.skip(from)
		.take(to.saturating_sub(from))
		.collect()
}

/// Start of the declaration proper: the first line of the visibility
/// modifier, or of the introducing keyword when there is none. Column
/// zero, so the original indentation survives for nested items.
fn line_start(vis: &Visibility, keyword: Span) -> LineColumn {
	let start = match vis {
		Visibility::Inherited => keyword.start(),
		_ => vis.span().start(),
	};
	LineColumn {
		line: start.line,
		column: 0,
	}
}

/// Declaration text for an item rendered verbatim: consts, statics,
/// enums, traits, unions, and type aliases.
pub(crate) fn item_decl(src: &SourceText, vis: &Visibility, keyword: Span, item: Span) -> String {
	src.slice(line_start(vis, keyword), item.end())
}

/// Signature text for a function, stopping before the body.
pub(crate) fn fn_decl(src: &SourceText, vis: &Visibility, sig: &syn::Signature) -> String {
	let span = sig.span();
	src.slice(line_start(vis, span), span.end())
}

/// Declaration text for a struct. Named private fields are elided behind
/// a `/* private fields */` placeholder line, the way the documentation
/// output presents filtered fields.
pub(crate) fn struct_decl(src: &SourceText, item: &syn::ItemStruct) -> String {
	let start = line_start(&item.vis, item.struct_token.span);
	let syn::Fields::Named(fields) = &item.fields else {
		return src.slice(start, item.span().end());
	};
	let private = fields
		.named
		.iter()
		.filter(|field| !is_public(&field.vis))
		.count();
	if private == 0 {
		return src.slice(start, item.span().end());
	}

	let open = fields.brace_token.span.open();
	let close = fields.brace_token.span.close();
	if open.start().line == close.start().line {
		// Single-line body; rebuild it rather than splicing lines.
		let head = src.slice(start, open.start());
		return format!("{} {{ /* private fields */ }}", head.trim_end());
	}

	let mut parts = vec![src.slice(start, open.end())];
	for field in &fields.named {
		if !is_public(&field.vis) {
			continue;
		}
		let first = field_start(field);
		let mut text = src.slice(
			LineColumn {
				line: first.line,
				column: 0,
			},
			field.span().end(),
		);
		text.push(',');
		parts.push(text);
	}
	parts.push("    /* private fields */".to_string());
	parts.push("}".to_string());
	parts.join("\n")
}

fn field_start(field: &syn::Field) -> LineColumn {
	match &field.vis {
		Visibility::Inherited => match &field.ident {
			Some(ident) => ident.span().start(),
			None => field.ty.span().start(),
		},
		vis => vis.span().start(),
	}
}

fn is_public(vis: &Visibility) -> bool {
	matches!(vis, Visibility::Public(_))
}

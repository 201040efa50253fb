//! Documentation extraction: parses source files with `syn` and produces
//! the structured package model and the runnable examples the renderer
//! consumes.

mod decl;

use std::fs;
use std::path::{Path, PathBuf};

use syn::spanned::Spanned;

use crate::error::{Error, Result};
use crate::model::{Example, FuncDecl, Package, TypeDecl, ValueGroup};
use decl::SourceText;

/// Function-name prefix marking an example in a test file.
const EXAMPLE_PREFIX: &str = "example_";

/// A parsed source file plus its original text.
#[derive(Debug)]
pub struct SourceFile {
	/// Path the file was read from.
	pub path: PathBuf,
	/// Raw file contents; declaration text is sliced out of this by span.
	pub text: String,
	ast: syn::File,
}

impl SourceFile {
	pub(crate) fn from_text(path: PathBuf, mut text: String) -> Result<Self> {
		if let Some(stripped) = text.strip_prefix('\u{feff}') {
			text = stripped.to_string();
		}
		// Blank out a shebang line so spans stay aligned with the text
		// we keep.
		if text.starts_with("#!") && !text.starts_with("#![") {
			let end = text.find('\n').unwrap_or(text.len());
			text.replace_range(..end, "");
		}
		let ast = syn::parse_file(&text).map_err(|source| Error::Parse {
			path: path.clone(),
			source,
		})?;
		Ok(Self { path, text, ast })
	}
}

/// Read and parse one source file.
pub fn read_source(path: &Path) -> Result<SourceFile> {
	let text = fs::read_to_string(path).map_err(|source| Error::Read {
		path: path.to_path_buf(),
		source,
	})?;
	SourceFile::from_text(path.to_path_buf(), text)
}

/// Build the package model for one candidate file. Inherent impl blocks
/// attach their associated constants, associated functions, and methods
/// to the type they implement; trait impls are not part of the
/// documented API.
pub fn build_package(name: &str, file: &SourceFile) -> Package {
	let src = SourceText::new(&file.text);
	let mut package = Package {
		name: name.to_string(),
		doc: doc_text(&file.ast.attrs, true),
		..Package::default()
	};
	let mut impls: Vec<&syn::ItemImpl> = Vec::new();

	for item in &file.ast.items {
		match item {
			syn::Item::Const(item) => package.consts.push(ValueGroup {
				decl: decl::item_decl(&src, &item.vis, item.const_token.span, item.span()),
				doc: doc_text(&item.attrs, false),
			}),
			syn::Item::Static(item) => package.vars.push(ValueGroup {
				decl: decl::item_decl(&src, &item.vis, item.static_token.span, item.span()),
				doc: doc_text(&item.attrs, false),
			}),
			syn::Item::Fn(item) => package.funcs.push(FuncDecl {
				name: item.sig.ident.to_string(),
				recv: String::new(),
				decl: decl::fn_decl(&src, &item.vis, &item.sig),
				doc: doc_text(&item.attrs, false),
			}),
			syn::Item::Struct(item) => package.types.push(TypeDecl {
				name: item.ident.to_string(),
				decl: decl::struct_decl(&src, item),
				doc: doc_text(&item.attrs, false),
				..TypeDecl::default()
			}),
			syn::Item::Enum(item) => package.types.push(TypeDecl {
				name: item.ident.to_string(),
				decl: decl::item_decl(&src, &item.vis, item.enum_token.span, item.span()),
				doc: doc_text(&item.attrs, false),
				..TypeDecl::default()
			}),
			syn::Item::Union(item) => package.types.push(TypeDecl {
				name: item.ident.to_string(),
				decl: decl::item_decl(&src, &item.vis, item.union_token.span, item.span()),
				doc: doc_text(&item.attrs, false),
				..TypeDecl::default()
			}),
			syn::Item::Trait(item) => package.types.push(TypeDecl {
				name: item.ident.to_string(),
				decl: decl::item_decl(&src, &item.vis, item.trait_token.span, item.span()),
				doc: doc_text(&item.attrs, false),
				..TypeDecl::default()
			}),
			syn::Item::Type(item) => package.types.push(TypeDecl {
				name: item.ident.to_string(),
				decl: decl::item_decl(&src, &item.vis, item.type_token.span, item.span()),
				doc: doc_text(&item.attrs, false),
				..TypeDecl::default()
			}),
			syn::Item::Impl(item) if item.trait_.is_none() => impls.push(item),
			_ => {}
		}
	}

	for imp in impls {
		let Some(type_name) = impl_target(imp) else {
			continue;
		};
		let Some(owner) = package.types.iter_mut().find(|t| t.name == type_name) else {
			continue;
		};
		attach_impl(&src, owner, imp);
	}

	package
}

fn impl_target(imp: &syn::ItemImpl) -> Option<String> {
	match imp.self_ty.as_ref() {
		syn::Type::Path(path) => path.path.segments.last().map(|s| s.ident.to_string()),
		_ => None,
	}
}

fn attach_impl(src: &SourceText, owner: &mut TypeDecl, imp: &syn::ItemImpl) {
	for item in &imp.items {
		match item {
			syn::ImplItem::Const(item) => owner.consts.push(ValueGroup {
				decl: crate::text::dedent(&decl::item_decl(
					src,
					&item.vis,
					item.const_token.span,
					item.span(),
				)),
				doc: doc_text(&item.attrs, false),
			}),
			syn::ImplItem::Fn(item) => {
				let func = FuncDecl {
					name: item.sig.ident.to_string(),
					recv: String::new(),
					decl: crate::text::dedent(&decl::fn_decl(src, &item.vis, &item.sig)),
					doc: doc_text(&item.attrs, false),
				};
				if item.sig.receiver().is_some() {
					owner.methods.push(FuncDecl {
						recv: owner.name.clone(),
						..func
					});
				} else {
					owner.funcs.push(func);
				}
			}
			_ => {}
		}
	}
}

/// Extract every example defined in a test file.
///
/// Examples are functions named `example`, `example_<Owner>` or
/// `example_<Owner>_<qualifier>`. When the file declares top-level items
/// other than example functions and `use` declarations, the examples are
/// whole-file: their code is the entire file source.
pub fn extract_examples(file: &SourceFile) -> Vec<Example> {
	let src = SourceText::new(&file.text);
	let whole_file = file.ast.items.iter().any(|item| match item {
		syn::Item::Use(_) => false,
		syn::Item::Fn(f) => example_name(&f.sig.ident.to_string()).is_none(),
		_ => true,
	});

	let mut examples = Vec::new();
	for item in &file.ast.items {
		let syn::Item::Fn(f) = item else {
			continue;
		};
		let Some(name) = example_name(&f.sig.ident.to_string()) else {
			continue;
		};
		let brace = f.block.brace_token.span;
		let body = src.slice(brace.open().start(), brace.close().end());
		let (body, output) = split_output_comment(&body);
		let code = if whole_file {
			file.text.clone()
		} else {
			body
		};
		examples.push(Example {
			name,
			doc: doc_text(&f.attrs, false),
			code,
			output,
			whole_file,
		});
	}
	examples
}

fn example_name(ident: &str) -> Option<String> {
	if ident == "example" {
		return Some(String::new());
	}
	ident.strip_prefix(EXAMPLE_PREFIX).map(str::to_string)
}

/// Split the expected-output comment out of an example body. The marker
/// line and the comment lines following it are removed from the code.
fn split_output_comment(body: &str) -> (String, String) {
	let mut code_lines: Vec<&str> = Vec::new();
	let mut output_lines: Vec<String> = Vec::new();
	let mut in_output = false;
	for line in body.lines() {
		let trimmed = line.trim();
		if !in_output && is_output_marker(trimmed) {
			in_output = true;
			continue;
		}
		if in_output {
			if let Some(rest) = trimmed.strip_prefix("//") {
				output_lines.push(rest.strip_prefix(' ').unwrap_or(rest).to_string());
				continue;
			}
			in_output = false;
		}
		code_lines.push(line);
	}
	let mut output = output_lines.join("\n");
	if !output.is_empty() {
		output.push('\n');
	}
	(code_lines.join("\n"), output)
}

fn is_output_marker(line: &str) -> bool {
	let Some(rest) = line.strip_prefix("//") else {
		return false;
	};
	rest.trim().eq_ignore_ascii_case("output:")
}

/// Collect doc-comment text from an attribute list. `inner` selects
/// `//!` comments, the module-level form.
pub(crate) fn doc_text(attrs: &[syn::Attribute], inner: bool) -> String {
	let mut doc = String::new();
	for attr in attrs {
		let is_inner = matches!(attr.style, syn::AttrStyle::Inner(_));
		if is_inner != inner || !attr.path().is_ident("doc") {
			continue;
		}
		let syn::Meta::NameValue(meta) = &attr.meta else {
			continue;
		};
		let syn::Expr::Lit(syn::ExprLit {
			lit: syn::Lit::Str(value),
			..
		}) = &meta.value
		else {
			continue;
		};
		let line = value.value();
		doc.push_str(line.strip_prefix(' ').unwrap_or(&line));
		doc.push('\n');
	}
	doc
}

//! Template dispatch: discovery of directory-local template files and
//! execution against a capability-scoped view of the document.

use std::path::{Path, PathBuf};

use handlebars::{
	Context, Handlebars, Helper, HelperDef, HelperResult, Output, RenderContext,
	RenderErrorReason,
};
use serde::Serialize;

use crate::error::{Error, Result};
use crate::loader::Document;
use crate::render::Style;
use crate::text;

/// Conventional template file names, probed in priority order; the
/// first present file wins.
pub const TEMPLATE_NAMES: [&str; 4] = [
	".docdown.markdown",
	".docdown.md",
	".docdown.template",
	".docdown.tmpl",
];

/// Registry name under which the single template is registered.
const TEMPLATE_NAME: &str = "document";

/// The data a template can reference: precomputed partial renders plus
/// the document's identifying fields. Deliberately not the full internal
/// model.
#[derive(Debug, Serialize)]
pub struct TemplateContext {
	/// Package or command display name.
	name: String,
	/// Computed or overridden import path; may be empty.
	import_path: String,
	/// Whether the target is a command.
	is_command: bool,
	/// The full built-in render.
	body: String,
	/// Header-only render.
	header: String,
	/// Synopsis-only render.
	synopsis: String,
	/// Usage-only render.
	usage: String,
	/// Markdown badge advertising generated documentation.
	badge: String,
}

impl TemplateContext {
	/// Precompute every accessor the template can reference.
	pub fn new(document: &Document, style: &Style) -> Self {
		Self {
			name: document.name.clone(),
			import_path: document.import_path.clone(),
			is_command: document.is_command,
			body: document.emit(style),
			header: document.emit_header(style),
			synopsis: document.emit_synopsis(style),
			usage: document.emit_usage(style),
			badge: document.badge(),
		}
	}
}

/// `{{code "..."}}`: fence an arbitrary code string with the active
/// style.
struct CodeHelper {
	plain: bool,
}

impl HelperDef for CodeHelper {
	fn call<'reg: 'rc, 'rc>(
		&self,
		helper: &Helper<'rc>,
		_: &'reg Handlebars<'reg>,
		_: &'rc Context,
		_: &mut RenderContext<'reg, 'rc>,
		out: &mut dyn Output,
	) -> HelperResult {
		let code = helper
			.param(0)
			.and_then(|param| param.value().as_str())
			.ok_or(RenderErrorReason::ParamNotFoundForIndex("code", 0))?;
		out.write(&text::fence_code(code, self.plain))?;
		Ok(())
	}
}

/// Probe `dir` for the first conventionally-named template file.
pub fn find_template(dir: &Path) -> Option<PathBuf> {
	TEMPLATE_NAMES
		.iter()
		.map(|name| dir.join(name))
		.find(|path| path.is_file())
}

/// Parse the template at `path` and execute it against the document.
pub fn render_template(path: &Path, document: &Document, style: &Style) -> Result<String> {
	let mut registry = Handlebars::new();
	registry.register_escape_fn(handlebars::no_escape);
	registry.register_helper("code", Box::new(CodeHelper { plain: style.plain }));
	registry
		.register_template_file(TEMPLATE_NAME, path)
		.map_err(|source| Error::TemplateParse {
			path: path.to_path_buf(),
			source,
		})?;
	let context = TemplateContext::new(document, style);
	Ok(registry.render(TEMPLATE_NAME, &context)?)
}

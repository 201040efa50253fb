//! Rendering style configuration.

use crate::text::HeadingMode;

/// Formatting knobs consulted by the renderer.
///
/// Built once from CLI flags and passed by reference into every render
/// call; never mutated after construction.
#[derive(Debug, Clone)]
pub struct Style {
	/// Include a `use` line in the header of library documents.
	pub include_import: bool,
	/// Marker prefixed to detected synopsis headings.
	pub synopsis_header: String,
	/// Heading-detection strategy applied to the synopsis.
	pub heading: HeadingMode,
	/// Header line opening the usage section.
	pub usage_header: String,
	/// Section marker for functions.
	pub function_header: String,
	/// Section marker for types.
	pub type_header: String,
	/// Section marker for a type's associated functions and methods.
	pub type_function_header: String,
	/// Append the trailing generator signature line.
	pub include_signature: bool,
	/// Emit standard Markdown: indented code blocks, no raw HTML.
	pub plain: bool,
}

impl Default for Style {
	fn default() -> Self {
		Self {
			include_import: true,
			synopsis_header: "####".to_string(),
			heading: HeadingMode::default(),
			usage_header: "#### Index".to_string(),
			function_header: "####".to_string(),
			type_header: "####".to_string(),
			type_function_header: "####".to_string(),
			include_signature: false,
			plain: false,
		}
	}
}

impl Style {
	/// Toggle plain Markdown output.
	pub fn with_plain(mut self, plain: bool) -> Self {
		self.plain = plain;
		self
	}

	/// Select the heading-detection strategy.
	pub fn with_heading(mut self, heading: HeadingMode) -> Self {
		self.heading = heading;
		self
	}

	/// Toggle the trailing generator signature.
	pub fn with_signature(mut self, include_signature: bool) -> Self {
		self.include_signature = include_signature;
		self
	}

	/// Toggle the header `use` line.
	pub fn with_import(mut self, include_import: bool) -> Self {
		self.include_import = include_import;
		self
	}
}

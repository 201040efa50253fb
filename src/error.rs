use std::fmt;
use std::path::PathBuf;

/// Aggregate errors produced while loading a document or rendering it.
#[derive(Debug)]
pub enum Error {
	/// The module manifest exists but could not be parsed.
	Manifest {
		/// Manifest location.
		path: PathBuf,
		/// Manifest parser diagnostic.
		message: String,
	},
	/// A file or directory could not be read.
	Read {
		/// Offending path.
		path: PathBuf,
		/// Underlying IO failure.
		source: std::io::Error,
	},
	/// A source file failed to parse.
	Parse {
		/// Offending file.
		path: PathBuf,
		/// Parser diagnostic.
		source: syn::Error,
	},
	/// A template file failed to parse.
	TemplateParse {
		/// Offending template file.
		path: PathBuf,
		/// Template parser diagnostic.
		source: handlebars::TemplateError,
	},
	/// Template execution failed.
	TemplateRender(handlebars::RenderError),
	/// Failed to perform IO operations.
	Io(std::io::Error),
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Manifest { path, message } => {
				write!(f, "could not parse manifest {}: {message}", path.display())
			}
			Self::Read { path, source } => {
				write!(f, "could not read {}: {source}", path.display())
			}
			Self::Parse { path, source } => {
				write!(f, "could not parse {}: {source}", path.display())
			}
			Self::TemplateParse { path, source } => {
				write!(f, "error parsing template {}: {source}", path.display())
			}
			Self::TemplateRender(source) => write!(f, "error running template: {source}"),
			Self::Io(source) => write!(f, "{source}"),
		}
	}
}

impl std::error::Error for Error {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Self::Manifest { .. } => None,
			Self::Read { source, .. } => Some(source),
			Self::Parse { source, .. } => Some(source),
			Self::TemplateParse { source, .. } => Some(source),
			Self::TemplateRender(source) => Some(source),
			Self::Io(source) => Some(source),
		}
	}
}

impl From<std::io::Error> for Error {
	fn from(source: std::io::Error) -> Self {
		Self::Io(source)
	}
}

impl From<handlebars::RenderError> for Error {
	fn from(source: handlebars::RenderError) -> Self {
		Self::TemplateRender(source)
	}
}

/// Result type returned by the docdown library.
pub type Result<T> = std::result::Result<T, Error>;

//! Core library for docdown, which renders the documentation of one
//! directory of Rust sources as a Markdown document.
//!
//! The pipeline is a single pass: [`load`] selects the directory's
//! package, pairs it with the examples in its test files, and resolves
//! an import path; the resulting [`Document`] is rendered either by the
//! built-in Markdown renderer or by a directory-local template.

/// Error types shared across the crate.
pub mod error;

/// Parsing of source files into the structured package model.
pub mod extract;

/// Document loading: candidate selection and import-path resolution.
pub mod loader;

/// The structured documentation model.
pub mod model;

/// The built-in Markdown renderer and its style configuration.
pub mod render;

/// Template discovery and execution.
pub mod template;

/// Pure text transforms: heading detection, fencing, dedenting.
pub mod text;

pub use crate::error::{Error, Result};
pub use crate::loader::{Document, load};
pub use crate::render::Style;
pub use crate::template::{TemplateContext, find_template, render_template};
pub use crate::text::HeadingMode;

//! Structured documentation model handed from extraction to rendering.

/// Documentation extracted for one module: its doc comment plus ordered
/// declaration lists.
#[derive(Debug, Clone, Default)]
pub struct Package {
	/// Display name of the module.
	pub name: String,
	/// Module-level doc comment, newline separated.
	pub doc: String,
	/// Constant declarations, in source order.
	pub consts: Vec<ValueGroup>,
	/// Static declarations, in source order.
	pub vars: Vec<ValueGroup>,
	/// Free functions, in source order.
	pub funcs: Vec<FuncDecl>,
	/// Type declarations, in source order.
	pub types: Vec<TypeDecl>,
}

/// A value declaration (constant or static) and its doc comment.
#[derive(Debug, Clone)]
pub struct ValueGroup {
	/// Declaration source text.
	pub decl: String,
	/// Doc comment attached to the declaration.
	pub doc: String,
}

/// A function, associated function, or method.
#[derive(Debug, Clone)]
pub struct FuncDecl {
	/// Function name.
	pub name: String,
	/// Receiver type name; empty for free and associated functions.
	pub recv: String,
	/// Signature source text, without the body.
	pub decl: String,
	/// Doc comment attached to the function.
	pub doc: String,
}

/// A type declaration owning one level of nested declarations.
#[derive(Debug, Clone, Default)]
pub struct TypeDecl {
	/// Type name.
	pub name: String,
	/// Declaration source text.
	pub decl: String,
	/// Doc comment attached to the type.
	pub doc: String,
	/// Associated constants.
	pub consts: Vec<ValueGroup>,
	/// Associated statics; Rust sources leave this empty.
	pub vars: Vec<ValueGroup>,
	/// Associated functions, declared without a receiver.
	pub funcs: Vec<FuncDecl>,
	/// Methods, declared with a receiver.
	pub methods: Vec<FuncDecl>,
}

/// A runnable example extracted from a test file.
#[derive(Debug, Clone)]
pub struct Example {
	/// `Owner` or `Owner_qualifier` name; the first underscore-delimited
	/// segment names the documented symbol the example belongs to.
	pub name: String,
	/// Doc comment attached to the example function.
	pub doc: String,
	/// Example source: the function body, or the whole file for
	/// whole-file examples.
	pub code: String,
	/// Expected textual output, taken from the trailing output comment.
	pub output: String,
	/// The code is a whole program rather than a snippet body.
	pub whole_file: bool,
}

//! Document loading: candidate discovery, package selection, and
//! import-path resolution for one target directory.

use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};
use crate::extract::{self, SourceFile};
use crate::model::{Example, Package};

/// Directory-local file whose first non-blank line overrides the
/// computed import path.
const IMPORT_OVERRIDE_FILE: &str = ".docdown.import";

/// File-stem suffix marking a test file; `widgets_test.rs` carries the
/// examples for the `widgets` candidate.
const TEST_SUFFIX: &str = "_test";

/// The aggregate render target: one selected package, its examples, and
/// the context needed to present it.
#[derive(Debug)]
pub struct Document {
	/// Package or command display name.
	pub name: String,
	/// Resolved target directory.
	pub path: PathBuf,
	/// Whether the directory holds a command rather than a library.
	pub is_command: bool,
	/// Computed or overridden import path; may be empty.
	pub import_path: String,
	/// The selected package model.
	pub package: Package,
	/// Examples from the package's test files, sorted by name.
	pub examples: Vec<Example>,
}

/// Candidate classification, ranked by selection precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Rank {
	/// An explicit `documentation.rs` module: command documentation.
	Documentation,
	/// Any ordinary module file, `lib.rs` included.
	Regular,
	/// A `main.rs` module: a command with no separate documentation.
	Main,
}

struct Candidate {
	rank: Rank,
	stem: String,
	file: SourceFile,
}

fn classify(stem: &str) -> Rank {
	match stem {
		"documentation" => Rank::Documentation,
		"main" => Rank::Main,
		_ => Rank::Regular,
	}
}

/// Load the documentation for one directory.
///
/// Returns `Ok(None)` when the directory holds no documentable package;
/// the caller decides whether that is fatal. Parse failures and an
/// unreadable manifest abort the load.
pub fn load(target: &str) -> Result<Option<Document>> {
	let cwd = env::current_dir()?;
	let target_path = Path::new(target);
	let (abs_path, rel_path) = if target_path.is_absolute() {
		(target_path.to_path_buf(), relative_to(&cwd, target_path))
	} else {
		(cwd.join(target_path), target_path.to_path_buf())
	};

	let module_name = manifest_module_name(&cwd)?;
	let mut import_path = match &module_name {
		Some(name) => join_import_path(name, &rel_path),
		None => String::new(),
	};

	let mut sources: Vec<PathBuf> = fs::read_dir(&abs_path)
		.map_err(|source| Error::Read {
			path: abs_path.clone(),
			source,
		})?
		.filter_map(std::result::Result::ok)
		.map(|entry| entry.path())
		.filter(|path| is_source_file(path))
		.collect();
	sources.sort();

	let mut candidates: Vec<Candidate> = Vec::new();
	let mut test_files: HashMap<String, Vec<SourceFile>> = HashMap::new();
	for path in sources {
		let stem = match path.file_stem() {
			Some(stem) => stem.to_string_lossy().into_owned(),
			None => continue,
		};
		let file = extract::read_source(&path)?;
		if let Some(base) = stem.strip_suffix(TEST_SUFFIX) {
			if !base.is_empty() {
				test_files.entry(base.to_string()).or_default().push(file);
				continue;
			}
		}
		candidates.push(Candidate {
			rank: classify(&stem),
			stem,
			file,
		});
	}

	// Ranked first-match-wins selection: Documentation > Regular > Main.
	let mut winner: Option<Candidate> = None;
	for candidate in candidates {
		match &winner {
			Some(current) if candidate.rank >= current.rank => {}
			_ => winner = Some(candidate),
		}
	}
	let Some(winner) = winner else {
		return Ok(None);
	};

	if let Ok(contents) = fs::read_to_string(abs_path.join(IMPORT_OVERRIDE_FILE)) {
		if let Some(line) = contents.lines().find(|line| !line.trim().is_empty()) {
			import_path = line.trim().to_string();
		}
	}

	let dir_name = abs_path
		.file_name()
		.map(|name| name.to_string_lossy().into_owned())
		.unwrap_or_else(|| winner.stem.clone());
	let (name, is_command) = match winner.rank {
		Rank::Documentation | Rank::Main => (dir_name, true),
		Rank::Regular if winner.stem == "lib" => (module_name.unwrap_or(dir_name), false),
		Rank::Regular => (winner.stem.clone(), false),
	};

	let package = extract::build_package(&name, &winner.file);
	let mut examples: Vec<Example> = test_files
		.remove(&winner.stem)
		.unwrap_or_default()
		.iter()
		.flat_map(extract::extract_examples)
		.collect();
	examples.sort_by(|a, b| a.name.cmp(&b.name));

	Ok(Some(Document {
		name,
		path: abs_path,
		is_command,
		import_path,
		package,
		examples,
	}))
}

fn is_source_file(path: &Path) -> bool {
	let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
		return false;
	};
	!name.starts_with('.') && name.ends_with(".rs") && path.is_file()
}

/// Read the module name from the manifest in the working directory. A
/// missing manifest, or one without a package table, degrades to `None`;
/// a manifest that fails to parse is an error.
fn manifest_module_name(cwd: &Path) -> Result<Option<String>> {
	let manifest_path = cwd.join("Cargo.toml");
	if !manifest_path.is_file() {
		return Ok(None);
	}
	let manifest = cargo_toml::Manifest::from_path(&manifest_path).map_err(|e| Error::Manifest {
		path: manifest_path.clone(),
		message: e.to_string(),
	})?;
	Ok(manifest.package.map(|package| module_ident(&package.name)))
}

/// Join the module name with the target's relative location, using `::`
/// separators regardless of the host path separator.
fn join_import_path(module: &str, rel_path: &Path) -> String {
	let mut parts = vec![module.to_string()];
	for component in rel_path.components() {
		match component {
			Component::Normal(part) => parts.push(module_ident(&part.to_string_lossy())),
			Component::ParentDir => {
				if parts.len() > 1 {
					parts.pop();
				}
			}
			_ => {}
		}
	}
	parts.join("::")
}

fn module_ident(name: &str) -> String {
	name.replace('-', "_")
}

/// Best-effort relative path from `base` to `path`, walking up with
/// `..` components where the two diverge.
fn relative_to(base: &Path, path: &Path) -> PathBuf {
	let base: Vec<Component<'_>> = base.components().collect();
	let target: Vec<Component<'_>> = path.components().collect();
	let mut shared = 0;
	while shared < base.len() && shared < target.len() && base[shared] == target[shared] {
		shared += 1;
	}
	let mut rel = PathBuf::new();
	for _ in shared..base.len() {
		rel.push("..");
	}
	for component in &target[shared..] {
		rel.push(component);
	}
	if rel.as_os_str().is_empty() {
		rel.push(".");
	}
	rel
}

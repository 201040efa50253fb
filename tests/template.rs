//! End-to-end tests for template discovery and execution.

use std::fs;
use std::path::Path;

use docdown::{Style, find_template, load, render_template};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn write_fixture(dir: &Path) {
	fs::write(
		dir.join("widgets.rs"),
		"//! Widgets\n//!\n//! Provides widgets.\n",
	)
	.expect("write widgets.rs");
}

fn load_dir(dir: &Path) -> docdown::Document {
	load(dir.to_str().expect("utf-8 path"))
		.expect("load succeeds")
		.expect("a package is found")
}

#[test]
fn a_template_sees_the_document_context() {
	let fixture = TempDir::new().expect("tempdir");
	write_fixture(fixture.path());
	fs::write(
		fixture.path().join(".docdown.md"),
		"# Custom {{name}}\n\n{{{synopsis}}}\n\n{{#if is_command}}command{{else}}library{{/if}}\n\n{{code \"let x = 1;\"}}\n",
	)
	.expect("write template");

	let document = load_dir(fixture.path());
	let template = find_template(&document.path).expect("template found");
	let style = Style::default();
	let output = render_template(&template, &document, &style).expect("template renders");

	assert!(output.contains("# Custom widgets"));
	assert!(output.contains("#### Widgets"));
	assert!(output.contains("library"));
	assert!(output.contains("```rust\nlet x = 1;\n```"));
}

#[test]
fn the_code_helper_respects_plain_mode() {
	let fixture = TempDir::new().expect("tempdir");
	write_fixture(fixture.path());
	fs::write(fixture.path().join(".docdown.tmpl"), "{{code \"let x = 1;\"}}\n")
		.expect("write template");

	let document = load_dir(fixture.path());
	let template = find_template(&document.path).expect("template found");
	let style = Style::default().with_plain(true);
	let output = render_template(&template, &document, &style).expect("template renders");

	assert_eq!(output, "    let x = 1;\n\n");
}

#[test]
fn discovery_probes_names_in_priority_order() {
	let fixture = TempDir::new().expect("tempdir");
	write_fixture(fixture.path());
	fs::write(fixture.path().join(".docdown.tmpl"), "tmpl").expect("write tmpl");
	fs::write(fixture.path().join(".docdown.md"), "md").expect("write md");

	let found = find_template(fixture.path()).expect("template found");
	assert_eq!(
		found.file_name().expect("file name").to_string_lossy(),
		".docdown.md"
	);
}

#[test]
fn nothing_is_found_without_a_template_file() {
	let fixture = TempDir::new().expect("tempdir");
	write_fixture(fixture.path());
	assert!(find_template(fixture.path()).is_none());
}

#[test]
fn a_broken_template_fails_to_parse() {
	let fixture = TempDir::new().expect("tempdir");
	write_fixture(fixture.path());
	let template = fixture.path().join(".docdown.md");
	fs::write(&template, "{{#if is_command}} unterminated").expect("write template");

	let document = load_dir(fixture.path());
	let result = render_template(&template, &document, &Style::default());
	assert!(matches!(
		result,
		Err(docdown::Error::TemplateParse { .. })
	));
}

//! CLI entrypoint.

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process;

use clap::{CommandFactory, Parser};
use docdown::{HeadingMode, Style, find_template, load, render_template};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Parsed command-line options for the docdown CLI.
struct Cli {
	/// Directory holding the package or command to document; defaults to
	/// the current directory
	target: Option<String>,

	/// Write output to a file instead of stdout; `-` writes to stdout
	#[arg(short = 'o', long)]
	output: Option<String>,

	/// The template file to use
	#[arg(long)]
	template: Option<PathBuf>,

	/// Disable template discovery and processing
	#[arg(long, default_value_t = false)]
	no_template: bool,

	/// Emit standard Markdown, rather than GitHub Flavored Markdown
	#[arg(long, default_value_t = false)]
	plain: bool,

	/// Heading detection method: 1Word, TitleCase, Title, TitleCase1Word, ""
	#[arg(long, default_value = "TitleCase1Word")]
	heading: String,

	/// Ignore functions and methods
	#[arg(long, default_value_t = false)]
	no_funcs: bool,

	/// Append a generator signature line to the output
	#[arg(long, default_value_t = false)]
	signature: bool,
}

fn main() {
	let cli = Cli::parse();
	let fallback_usage = cli.target.is_none();
	let target = cli.target.clone().unwrap_or_else(|| ".".to_string());

	let style = Style::default()
		.with_plain(cli.plain)
		.with_heading(HeadingMode::from_flag(&cli.heading))
		.with_signature(cli.signature);

	let document = match load(&target) {
		Ok(document) => document,
		Err(error) => {
			eprintln!("{error}");
			None
		}
	};
	let Some(mut document) = document else {
		if fallback_usage {
			eprintln!("{}", Cli::command().render_help());
			process::exit(2);
		}
		eprintln!("could not find a documentable package: {target}");
		process::exit(1);
	};

	if cli.no_funcs {
		document.strip_funcs();
	}

	let template = if cli.no_template {
		None
	} else {
		cli.template.clone().or_else(|| find_template(&document.path))
	};

	let mut rendered = match template {
		Some(path) => match render_template(&path, &document, &style) {
			Ok(rendered) => rendered,
			Err(error) => {
				eprintln!("{error}");
				process::exit(1);
			}
		},
		None => document.emit(&style),
	};

	let signature = document.emit_signature(&style);
	if !signature.is_empty() {
		rendered.push_str("\n\n");
		rendered.push_str(&signature);
	}

	let rendered = rendered.trim();
	match cli.output.as_deref() {
		None | Some("-") => println!("{rendered}"),
		Some(path) => {
			if let Err(error) = write_output(path, rendered) {
				eprintln!("could not write {path}: {error}");
				process::exit(1);
			}
		}
	}
}

fn write_output(path: &str, contents: &str) -> std::io::Result<()> {
	let mut file = fs::File::create(path)?;
	writeln!(file, "{contents}")?;
	Ok(())
}

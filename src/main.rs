use anyhow::{Context, Result};
use clap::builder::{PossibleValuesParser, TypedValueParser};
use clap::{ArgAction, Parser, Subcommand};
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use fog_uri::config::{discover_configs, load_merged_config, user_config_path};
use fog_uri::logging::init_tracing;
use fog_uri::patterns::{find_pattern_by_name, matching_patterns};
use fog_uri::uri::{LambdaUri, WILD_CARD, WildcardLevel};

#[derive(Parser)]
#[command(name = "fog-uri")]
#[command(
	author,
	version,
	about = "Parse, format and match fog:// lambda URIs"
)]
#[command(arg_required_else_help = true)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	/// Increase log verbosity (-v info, -vv debug, -vvv trace)
	#[arg(short, long, action = ArgAction::Count, global = true)]
	verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
	/// Parse a lambda URI and print its canonical form and fields
	Parse {
		#[arg(value_name = "URI")]
		uri: OsString,
	},
	/// Print the wildcard address covering a lambda URI at the given level
	Widen {
		#[arg(value_name = "URI")]
		uri: OsString,

		/// Level to widen to
		#[arg(long, value_parser = wildcard_level_parser())]
		to: WildcardLevel,
	},
	/// Check whether CANDIDATE is covered by PATTERN (exit code 1 if not)
	Match {
		#[arg(value_name = "CANDIDATE")]
		candidate: OsString,

		#[arg(value_name = "PATTERN", required_unless_present = "name")]
		pattern: Option<OsString>,

		/// Use a named pattern from the configuration instead of PATTERN
		#[arg(long, conflicts_with = "pattern")]
		name: Option<String>,
	},
	/// List configured patterns covering CANDIDATE (exit code 1 if none)
	Route {
		#[arg(value_name = "CANDIDATE")]
		candidate: OsString,
	},
	/// Derive a lambda URI from a TOML lambda descriptor
	FromLambda {
		#[arg(value_name = "FILE")]
		file: PathBuf,

		/// Region country code; defaults to `default-region` from the configuration
		#[arg(long)]
		region: Option<String>,
	},
	/// Configuration management commands
	Config {
		#[command(subcommand)]
		action: ConfigAction,
	},
}

#[derive(Subcommand)]
enum ConfigAction {
	/// Display configuration files with source annotations
	Show,
	/// Check all config files for errors without running anything
	Validate,
}

fn wildcard_level_parser() -> impl TypedValueParser<Value = WildcardLevel> {
	PossibleValuesParser::new(WildcardLevel::NAMES).try_map(|name| name.parse::<WildcardLevel>())
}

fn main() -> ExitCode {
	match run() {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn run() -> Result<ExitCode> {
	let cli = Cli::parse();
	init_tracing(cli.verbose);

	match cli.command {
		Commands::Parse { uri } => handle_parse(&uri),
		Commands::Widen { uri, to } => handle_widen(&uri, to),
		Commands::Match {
			candidate,
			pattern,
			name,
		} => handle_match(&candidate, pattern.as_deref(), name.as_deref()),
		Commands::Route { candidate } => handle_route(&candidate),
		Commands::FromLambda { file, region } => handle_from_lambda(&file, region),
		Commands::Config { action } => match action {
			ConfigAction::Show => handle_config_show(),
			ConfigAction::Validate => handle_config_validate(),
		},
	}
}

fn parse_uri(raw: &OsStr) -> Result<LambdaUri> {
	LambdaUri::parse_from_os_str(raw)
		.with_context(|| format!("Failed to parse lambda URI: {}", raw.to_string_lossy()))
}

fn instance_label(uri: &LambdaUri) -> String {
	if uri.is_to_all_lambda_instances() {
		WILD_CARD.to_string()
	} else {
		uri.lambda_instance().to_string()
	}
}

fn handle_parse(raw: &OsStr) -> Result<ExitCode> {
	let uri = parse_uri(raw)?;

	println!("{}", uri);
	println!("protocol: {}", uri.protocol());
	println!("region: {}", uri.region_country_code());
	println!("project: {}", uri.project());
	println!("lambda-id: {}", uri.lambda_id());
	println!("lambda-version: {}", uri.lambda_version());
	println!("lambda-instance: {}", instance_label(&uri));

	Ok(ExitCode::SUCCESS)
}

fn handle_widen(raw: &OsStr, level: WildcardLevel) -> Result<ExitCode> {
	let uri = parse_uri(raw)?;
	println!("{}", uri.widen(level));
	Ok(ExitCode::SUCCESS)
}

fn handle_match(
	candidate: &OsStr,
	pattern: Option<&OsStr>,
	name: Option<&str>,
) -> Result<ExitCode> {
	let candidate = parse_uri(candidate)?;

	let pattern = match (pattern, name) {
		(Some(raw), _) => parse_uri(raw)?,
		(None, Some(name)) => {
			let cwd = std::env::current_dir().context("Failed to get current directory")?;
			let config = load_merged_config(&cwd).context("Failed to load configuration")?;
			find_pattern_by_name(&config, name)
				.map(|entry| entry.pattern.uri.clone())
				.ok_or_else(|| anyhow::anyhow!("No pattern named {} in configuration", name))?
		}
		(None, None) => anyhow::bail!("Either PATTERN or --name is required"),
	};

	if candidate.matches(&pattern) {
		println!("match");
		Ok(ExitCode::SUCCESS)
	} else {
		println!("no match");
		Ok(ExitCode::from(1))
	}
}

fn handle_route(candidate: &OsStr) -> Result<ExitCode> {
	let candidate = parse_uri(candidate)?;

	let cwd = std::env::current_dir().context("Failed to get current directory")?;
	let config = load_merged_config(&cwd).context("Failed to load configuration")?;

	let mut found = false;
	for entry in matching_patterns(&config, &candidate) {
		found = true;
		println!(
			"{}\t{}\t({})",
			entry.pattern.name,
			entry.pattern.uri,
			entry.source.display()
		);
	}

	if found {
		Ok(ExitCode::SUCCESS)
	} else {
		eprintln!("No configured pattern covers {}", candidate);
		Ok(ExitCode::from(1))
	}
}

fn handle_from_lambda(file: &Path, region: Option<String>) -> Result<ExitCode> {
	let region = match region {
		Some(region) => region,
		None => {
			let cwd = std::env::current_dir().context("Failed to get current directory")?;
			let config = load_merged_config(&cwd).context("Failed to load configuration")?;
			config.default_region.ok_or_else(|| {
				anyhow::anyhow!("No region given: pass --region or set default-region in .fog-uri.toml")
			})?
		}
	};

	let uri = LambdaUri::parse_from_lambda_file(file, &region)
		.with_context(|| format!("Failed to derive lambda URI from {}", file.display()))?;

	println!("{}", uri);
	Ok(ExitCode::SUCCESS)
}

fn handle_config_show() -> Result<ExitCode> {
	let cwd = std::env::current_dir().context("Failed to get current directory")?;
	let configs = discover_configs(&cwd).context("Failed to discover config files")?;

	if configs.is_empty() {
		println!("No configuration files found.");
		return Ok(ExitCode::SUCCESS);
	}

	println!("Configuration files (in cascade order):\n");

	for loaded in &configs {
		println!("# Source: {}", loaded.path.display());
		println!("# root: {}", loaded.config.root);
		println!("# no-external-lookup: {}", loaded.config.no_external_lookup);
		if let Some(ref region) = loaded.config.default_region {
			println!("# default-region: {}", region);
		}
		println!("# patterns: {}", loaded.config.patterns.len());
		println!();

		for pattern in &loaded.config.patterns {
			println!("  {} = {}", pattern.name, pattern.uri);
		}
		if !loaded.config.patterns.is_empty() {
			println!();
		}
	}

	if let Ok(user_path) = user_config_path() {
		println!("User config path: {}", user_path.display());
		if user_path.exists() {
			println!("  (exists)");
		} else {
			println!("  (not found)");
		}
	}

	Ok(ExitCode::SUCCESS)
}

fn handle_config_validate() -> Result<ExitCode> {
	let cwd = std::env::current_dir().context("Failed to get current directory")?;

	match discover_configs(&cwd) {
		Ok(configs) => {
			if configs.is_empty() {
				println!("No configuration files found.");
			} else {
				println!("All configuration files are valid:");
				for loaded in &configs {
					println!(
						"  {} ({} patterns)",
						loaded.path.display(),
						loaded.config.patterns.len()
					);
				}
			}
			Ok(ExitCode::SUCCESS)
		}
		Err(e) => {
			eprintln!("Configuration error: {:#}", anyhow::Error::from(e));
			Ok(ExitCode::FAILURE)
		}
	}
}

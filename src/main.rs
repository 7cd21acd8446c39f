use std::path::PathBuf;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use log::LevelFilter;

use crate::cmd_compare::hue_compare;
use crate::cmd_create::hue_create;
use crate::cmd_empty::hue_empty;
use crate::cmd_extract::hue_extract;
use crate::cmd_merge::hue_merge;
use crate::commands::{Cli, Commands};
use crate::common::print_output_size;

mod cmd_compare;
mod cmd_create;
mod cmd_empty;
mod cmd_extract;
mod cmd_merge;
mod commands;
mod common;

fn main() -> ExitCode {
	let cli = Cli::parse();

	let level = if cli.debug { LevelFilter::Debug } else { LevelFilter::Info };
	env_logger::Builder::new()
		.filter_level(level)
		.parse_default_env()
		.init();

	let max_hues = cli.max_hues();
	let output: Option<&PathBuf>;

	let result = match &cli.command {
		Some(Commands::Merge(args)) => {
			output = Some(&args.output);
			hue_merge(args, max_hues)
		}
		Some(Commands::Extract(args)) => {
			output = Some(&args.output);
			hue_extract(args, max_hues)
		}
		Some(Commands::Empty(args)) => {
			output = None;
			hue_empty(args, max_hues)
		}
		Some(Commands::Compare(args)) => {
			output = None;
			hue_compare(args, max_hues)
		}
		Some(Commands::Create(args)) => {
			output = Some(&args.output);
			hue_create(args, max_hues)
		}
		None => {
			let _ = Cli::command().print_help();
			return ExitCode::FAILURE;
		}
	};

	match result {
		Ok(_) => {
			if let Some(output) = output {
				print_output_size(output);
			}
			ExitCode::SUCCESS
		}
		Err(e) => {
			eprintln!("execution failed: {e:#}");
			ExitCode::FAILURE
		}
	}
}

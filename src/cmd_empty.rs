use anyhow::Result;
use colored::Colorize;
use hueedit::hues::catalog::HueCatalog;

use crate::commands::EmptyArgs;
use crate::common::print_ids;

pub(crate) fn hue_empty(args: &EmptyArgs, max_hues: usize) -> Result<()> {
	let catalog = HueCatalog::from_file(&args.input, max_hues)?;
	let blank = catalog.blank();

	println!("Empty ids available: {}", blank.len().to_string().bold());
	print_ids(&blank);
	Ok(())
}

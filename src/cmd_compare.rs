use anyhow::Result;
use colored::Colorize;
use hueedit::hues::catalog::HueCatalog;

use crate::commands::CompareArgs;
use crate::common::print_ids;

pub(crate) fn hue_compare(args: &CompareArgs, max_hues: usize) -> Result<()> {
	let source = HueCatalog::from_file(&args.input, max_hues)?;
	let compare = HueCatalog::from_file(&args.compare, max_hues)?;
	let unique = source.unique(&compare);

	let file_name = args.compare.file_name()
		.map(|n| n.to_string_lossy().into_owned())
		.unwrap_or_else(|| args.compare.display().to_string());

	println!("Unique ids in {}: {}", file_name.cyan(), unique.len().to_string().bold());
	print_ids(&unique);
	Ok(())
}

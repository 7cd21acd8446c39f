use anyhow::{Context, Result};
use colored::Colorize;
use hueedit::hues::catalog::{HueCatalog, Placement};

use crate::commands::MergeArgs;

pub(crate) fn hue_merge(args: &MergeArgs, max_hues: usize) -> Result<()> {
	let mut base = HueCatalog::from_file(&args.base, max_hues)
		.with_context(|| format!("Couldn't load base file {}", args.base.display()))?;
	let addition = HueCatalog::from_file(&args.addition, max_hues)
		.with_context(|| format!("Couldn't load addition file {}", args.addition.display()))?;

	let mut filled = 0;
	let mut appended = 0;
	base.merge_with(&addition, |placement| {
		match placement {
			Placement::Filled { .. } => filled += 1,
			Placement::Appended { .. } => appended += 1,
		}
		println!("{}", placement.to_string().green());
	})?;

	log::debug!("{filled} entries reused, {appended} entries appended");

	base.save(&args.output)?;
	Ok(())
}

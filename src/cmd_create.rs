use anyhow::Result;
use hueedit::hues::catalog::HueCatalog;

use crate::commands::CreateArgs;

pub(crate) fn hue_create(args: &CreateArgs, max_hues: usize) -> Result<()> {
	let mut catalog = HueCatalog::new(max_hues);
	catalog.import_text(&args.input)?;
	catalog.save(&args.output)?;
	Ok(())
}

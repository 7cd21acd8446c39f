use anyhow::Result;
use hueedit::hues::catalog::HueCatalog;
use hueedit::ids::parse_id_list;

use crate::commands::ExtractArgs;

pub(crate) fn hue_extract(args: &ExtractArgs, max_hues: usize) -> Result<()> {
	let catalog = HueCatalog::from_file(&args.input, max_hues)?;

	match &args.ids {
		Some(ids) => {
			let ids = parse_id_list(ids, catalog.len())?;
			catalog.export_text_ids(&args.output, &ids)?;
		}
		None => catalog.export_text(&args.output)?,
	}

	Ok(())
}

use anyhow::Result;
use regex::{Captures, Regex};

use crate::hues::error::HueError;

/// Parses a hue id list such as `1-5,9,12-13` into individual ids, all below `len`.
///
/// Ranges are inclusive, empty items are skipped and the order of the input is kept.
/// Ids past the end fail with [HueError::OutOfRange] before a range gets expanded.
pub fn parse_id_list<S: Into<String>>(list: S, len: usize) -> Result<Vec<usize>> {
	let list: String = list.into();
	let re = Regex::new(r"^(?P<first>\d+)(?:\s*-\s*(?P<last>\d+))?$")?;

	let mut ids: Vec<usize> = Vec::new();
	for item in list.split(',').map(str::trim) {
		if item.is_empty() {
			continue;
		}

		let groups: Captures = match re.captures(item) {
			None => { anyhow::bail!("Invalid id or id range \"{item}\"") }
			Some(captures) => captures
		};

		let first = groups["first"].parse::<usize>()?;
		let last = match groups.name("last") {
			Some(last) => last.as_str().parse::<usize>()?,
			None => first,
		};

		if last < first {
			anyhow::bail!("Id range \"{item}\" ends before it starts");
		}

		if last >= len {
			return Err(HueError::OutOfRange { index: last, len }.into());
		}

		ids.extend(first..=last);
	}

	Ok(ids)
}

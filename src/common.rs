use std::fs;
use std::path::Path;

use humansize::DECIMAL;

pub(crate) fn print_output_size<P: AsRef<Path>>(output: P) {
	match fs::metadata(output) {
		Ok(m) => {
			let size = humansize::format_size(m.len(), DECIMAL);
			println!("Output file size: {size}");
		}
		Err(err) => {
			eprintln!("Can't determine output file size: {err}");
		}
	}
}

pub(crate) fn print_ids(ids: &[usize]) {
	for id in ids {
		println!("\t{id}");
	}
}

use std::fmt::{Display, Formatter};
use std::io::Cursor;

use byteorder::{ByteOrder, LittleEndian, ReadBytesExt};

use crate::hues::color::HueColor;
use crate::hues::error::HueError;
use crate::hues::text::truncate_bytes;
use crate::hues::{HUE_COLORS, HUE_ENTRY_SIZE, HUE_NAME_SIZE};

// HueEntry layout:
//   WORD ColorTable[32];
//   WORD TableStart;
//   WORD TableEnd;
//   CHAR Name[20];

const ENTRY_FIELDS: usize = HUE_COLORS + 1;

/// Colors are compared with this mask when comparing entries.
const COLOR_COMPARE_MASK: u16 = 0x7FFF;

/// Replaces bytes that can't safely appear in a name with `-`. Commas are included
/// since names end up in comma delimited text.
fn sanitize_name_byte(b: u8) -> u8 {
	if b != 0 && (b < 32 || b == b',' || b >= 127) { b'-' } else { b }
}

/// Rewrites a name so it survives the text form.
fn sanitize_name(name: &str) -> String {
	name.trim()
		.chars()
		.map(|c| match c {
			',' | '\n' | '\r' => '_',
			c => c,
		})
		.collect()
}

/// Truncates a name to what the binary form can hold, then makes it safe for the text form.
fn clean_name(mut name: String) -> String {
	truncate_bytes(&mut name, HUE_NAME_SIZE);
	sanitize_name(&name)
}

/// One hue: a name and a ramp of 32 colors.
#[derive(Clone, Default, Debug)]
pub struct HueEntry {
	name: String,
	colors: [HueColor; HUE_COLORS],
}

impl HueEntry {
	pub fn new<S: Into<String>>(name: S, colors: [HueColor; HUE_COLORS]) -> Self {
		Self { name: clean_name(name.into()), colors }
	}

	/// Parses `name,r:g:b,...` with exactly 32 colors.
	pub fn from_text(line: &str) -> Result<HueEntry, HueError> {
		let fields = line.split(',').map(str::trim).collect::<Vec<&str>>();
		if fields.len() != ENTRY_FIELDS {
			return Err(HueError::InvalidFieldCount { found: fields.len() });
		}

		let mut entry = HueEntry::new(fields[0], [HueColor::default(); HUE_COLORS]);
		for (color, field) in entry.colors.iter_mut().zip(&fields[1..]) {
			*color = field.parse()?;
		}

		Ok(entry)
	}

	pub fn from_bytes(data: &[u8]) -> Result<HueEntry, HueError> {
		if data.len() != HUE_ENTRY_SIZE {
			return Err(HueError::InvalidEntrySize { size: data.len() });
		}

		let mut entry = HueEntry::default();
		let mut cursor = Cursor::new(data);
		for color in entry.colors.iter_mut() {
			let raw = cursor.read_u16::<LittleEndian>()
				.map_err(|e| HueError::InvalidField { msg: e.to_string() })?;
			*color = HueColor::from(raw);
		}

		// table start and end are copies of the first and last color
		let name_start = HUE_COLORS * 2 + 4;
		let name_bytes = &data[name_start..name_start + HUE_NAME_SIZE];
		let name_bytes = name_bytes.iter()
			.take_while(|b| **b != 0)
			.map(|b| sanitize_name_byte(*b))
			.collect::<Vec<u8>>();

		// every byte is printable ASCII at this point
		entry.name = sanitize_name(&String::from_utf8_lossy(&name_bytes));

		Ok(entry)
	}

	pub fn to_bytes(&self) -> [u8; HUE_ENTRY_SIZE] {
		let mut buf = [0_u8; HUE_ENTRY_SIZE];
		for (i, color) in self.colors.iter().enumerate() {
			LittleEndian::write_u16(&mut buf[i * 2..i * 2 + 2], color.raw());
		}

		let table_start = HUE_COLORS * 2;
		LittleEndian::write_u16(&mut buf[table_start..table_start + 2], self.colors[0].raw());
		LittleEndian::write_u16(&mut buf[table_start + 2..table_start + 4], self.colors[HUE_COLORS - 1].raw());

		let name_start = table_start + 4;
		let name = self.name.as_bytes();
		let len = name.len().min(HUE_NAME_SIZE);
		buf[name_start..name_start + len].copy_from_slice(&name[..len]);

		buf
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	/// Sets the name, truncated to the 20 bytes the binary form can hold. Surrounding
	/// whitespace is trimmed and `,`, `\n` and `\r` become `_`.
	pub fn set_name<S: Into<String>>(&mut self, name: S) {
		self.name = clean_name(name.into());
	}

	pub fn colors(&self) -> &[HueColor; HUE_COLORS] {
		&self.colors
	}

	pub fn color(&self, index: usize) -> Result<HueColor, HueError> {
		self.colors.get(index)
			.copied()
			.ok_or(HueError::OutOfRange { index, len: HUE_COLORS })
	}

	pub fn set_color(&mut self, index: usize, color: HueColor) -> Result<(), HueError> {
		let slot = self.colors.get_mut(index)
			.ok_or(HueError::OutOfRange { index, len: HUE_COLORS })?;
		*slot = color;
		Ok(())
	}

	pub fn is_empty(&self) -> bool {
		self.name.is_empty() && self.colors.iter().all(HueColor::is_empty)
	}
}

impl PartialEq for HueEntry {
	fn eq(&self, other: &Self) -> bool {
		self.name == other.name
			&& self.colors.iter()
			.zip(other.colors.iter())
			.all(|(a, b)| (a.raw() & COLOR_COMPARE_MASK) == (b.raw() & COLOR_COMPARE_MASK))
	}
}

impl Display for HueEntry {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.name)?;
		for color in self.colors.iter() {
			write!(f, ",{color}")?;
		}
		Ok(())
	}
}

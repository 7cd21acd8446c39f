use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, ErrorKind, Read, Write};
use std::path::Path;

use byteorder::{LittleEndian, WriteBytesExt};

use crate::hues::entry::HueEntry;
use crate::hues::error::HueError;
use crate::hues::text::parse_unsigned;
use crate::hues::{DEFAULT_MAX_HUES, HUE_ENTRY_SIZE, HUE_GROUP_HEADER_SIZE, HUE_GROUP_SIZE};

pub const TEXT_HEADER: &str = "hueid,name,color0,color1,color2,color3,color4,color5,color6,color7,color8,color9,\
color10,color11,color12,color13,color14,color15,color16,color17,color18,color19,color20,color21,color22,\
color23,color24,color25,color26,color27,color28,color29,color30,color31";

const TEXT_HEADER_ID: &str = "hueid";

/// Where [HueCatalog::merge_with] put an entry from the other catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
	/// The entry replaced a blank entry.
	Filled { source: usize, target: usize },
	/// No blank entries were left, so the entry was appended.
	Appended { source: usize, target: usize },
}

impl Display for Placement {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Placement::Filled { source, target } => write!(f, "Inserting addition id {source} into empty id {target}"),
			Placement::Appended { source, target } => write!(f, "Expanding for addition id {source}, placed at id {target}"),
		}
	}
}

/// Reads until `buf` is full or the reader runs dry, returning the number of bytes read.
fn read_up_to<R: Read>(reader: &mut R, buf: &mut [u8]) -> std::io::Result<usize> {
	let mut filled = 0;
	while filled < buf.len() {
		match reader.read(&mut buf[filled..]) {
			Ok(0) => break,
			Ok(n) => filled += n,
			Err(e) if e.kind() == ErrorKind::Interrupted => continue,
			Err(e) => return Err(e),
		}
	}
	Ok(filled)
}

/// An ordered collection of hue entries, addressed by hue id.
///
/// `max` must be a multiple of 8 since the binary file stores entries in groups of 8.
#[derive(Clone, Debug)]
pub struct HueCatalog {
	entries: Vec<HueEntry>,
	max: usize,
}

impl Default for HueCatalog {
	fn default() -> Self {
		Self::new(DEFAULT_MAX_HUES)
	}
}

impl HueCatalog {
	pub fn new(max: usize) -> Self {
		debug_assert!(max % HUE_GROUP_SIZE == 0, "max hues ({max}) must be a multiple of {HUE_GROUP_SIZE}");
		Self { entries: Vec::new(), max }
	}

	/// Creates a catalog and fills it from a binary hue file.
	pub fn from_file<P: AsRef<Path>>(path: P, max: usize) -> Result<Self, HueError> {
		let mut catalog = Self::new(max);
		catalog.load(path)?;
		Ok(catalog)
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn max(&self) -> usize {
		self.max
	}

	pub fn entries(&self) -> &[HueEntry] {
		&self.entries
	}

	pub fn get(&self, id: usize) -> Result<&HueEntry, HueError> {
		let len = self.entries.len();
		self.entries.get(id).ok_or(HueError::OutOfRange { index: id, len })
	}

	pub fn get_mut(&mut self, id: usize) -> Result<&mut HueEntry, HueError> {
		let len = self.entries.len();
		self.entries.get_mut(id).ok_or(HueError::OutOfRange { index: id, len })
	}

	pub fn set(&mut self, id: usize, entry: HueEntry) -> Result<(), HueError> {
		*self.get_mut(id)? = entry;
		Ok(())
	}

	// region Binary

	fn load_internal<R: Read, E: Fn(std::io::Error) -> HueError>(&mut self, reader: &mut R, io_err: E) -> Result<(), HueError> {
		self.entries.clear();

		let mut header = [0_u8; HUE_GROUP_HEADER_SIZE];
		let mut buf = [0_u8; HUE_ENTRY_SIZE];
		loop {
			if self.entries.len() % HUE_GROUP_SIZE == 0
				&& read_up_to(reader, &mut header).map_err(&io_err)? < HUE_GROUP_HEADER_SIZE {
				break;
			}

			if read_up_to(reader, &mut buf).map_err(&io_err)? < HUE_ENTRY_SIZE {
				// a trailing partial entry is dropped
				break;
			}

			if self.entries.len() >= self.max {
				return Err(HueError::TooManyHues { max: self.max });
			}

			self.entries.push(HueEntry::from_bytes(&buf)?);
		}

		Ok(())
	}

	/// Replaces the contents of the catalog with the entries of a binary hue file.
	pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<(), HueError> {
		let path = path.as_ref();
		if !path.exists() {
			return Err(HueError::NotFound(path.to_path_buf()));
		}

		let f = File::open(path).map_err(|e| HueError::io(path, e))?;
		let mut reader = BufReader::new(f);
		self.load_internal(&mut reader, |e| HueError::io(path, e))?;

		log::debug!("Loaded {} hues from {}", self.entries.len(), path.display());
		Ok(())
	}

	/// Decodes a binary hue file that is already in memory.
	pub fn load_from_bytes(&mut self, data: &[u8]) -> Result<(), HueError> {
		let mut reader = data;
		self.load_internal(&mut reader, |e| HueError::InvalidField { msg: e.to_string() })
	}

	fn save_internal<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
		for (id, entry) in self.entries.iter().enumerate() {
			if id % HUE_GROUP_SIZE == 0 {
				writer.write_u32::<LittleEndian>(0)?;
			}
			writer.write_all(&entry.to_bytes())?;
		}
		writer.flush()
	}

	pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), HueError> {
		if self.entries.is_empty() {
			return Err(HueError::Empty);
		}

		let path = path.as_ref();
		let f = File::create(path).map_err(|e| HueError::io(path, e))?;
		let mut writer = BufWriter::new(f);
		self.save_internal(&mut writer).map_err(|e| HueError::io(path, e))?;

		log::debug!("Saved {} hues to {}", self.entries.len(), path.display());
		Ok(())
	}

	/// Encodes the catalog in the binary hue file format.
	pub fn to_bytes(&self) -> Result<Vec<u8>, HueError> {
		if self.entries.is_empty() {
			return Err(HueError::Empty);
		}

		let groups = self.entries.len().div_ceil(HUE_GROUP_SIZE);
		let mut buf = Vec::with_capacity(groups * HUE_GROUP_HEADER_SIZE + self.entries.len() * HUE_ENTRY_SIZE);
		self.save_internal(&mut buf)
			.map_err(|e| HueError::InvalidField { msg: e.to_string() })?;
		Ok(buf)
	}

	// endregion

	// region Text

	fn import_text_internal<R: BufRead, E: Fn(std::io::Error) -> HueError>(&mut self, reader: R, io_err: E) -> Result<(), HueError> {
		for (i, line) in reader.split(b'\n').enumerate() {
			let line = line.map_err(&io_err)?;
			let line = String::from_utf8(line).map_err(|e| HueError::InvalidTextLine {
				line: i + 1,
				msg: format!("Invalid UTF-8 at byte {}", e.utf8_error().valid_up_to()),
			})?;
			let trimmed_line = line.trim();
			if trimmed_line.is_empty() {
				continue;
			}

			self.import_line(trimmed_line, i + 1)?;
		}

		Ok(())
	}

	fn import_line(&mut self, line: &str, line_number: usize) -> Result<(), HueError> {
		let (id_field, rest) = line.split_once(',').unwrap_or((line, ""));
		let id_field = id_field.trim();
		if id_field.eq_ignore_ascii_case(TEXT_HEADER_ID) {
			return Ok(());
		}

		let id = parse_unsigned(id_field).map_err(|e| e.at_line(line_number))? as usize;

		let rest = rest.trim();
		if rest.is_empty() {
			return Err(HueError::InvalidTextLine { line: line_number, msg: "Missing hue data".to_string() });
		}

		let needed = id + 1;
		if needed > self.max {
			return Err(HueError::TooManyHues { max: self.max });
		}
		if needed > self.entries.len() {
			self.entries.resize_with(needed, HueEntry::default);
		}

		self.entries[id] = HueEntry::from_text(rest).map_err(|e| e.at_line(line_number))?;
		Ok(())
	}

	/// Reads `id,name,r:g:b,...` lines into the catalog, growing it as needed.
	pub fn import_text<P: AsRef<Path>>(&mut self, path: P) -> Result<(), HueError> {
		let path = path.as_ref();
		if !path.exists() {
			return Err(HueError::NotFound(path.to_path_buf()));
		}

		let f = File::open(path).map_err(|e| HueError::io(path, e))?;
		let reader = BufReader::new(f);
		self.import_text_internal(reader, |e| HueError::io(path, e))?;

		log::debug!("Imported text from {}, catalog now holds {} hues", path.display(), self.entries.len());
		Ok(())
	}

	pub fn import_text_string<S: Into<String>>(&mut self, s: S) -> Result<(), HueError> {
		let s = s.into();
		let reader = BufReader::new(s.as_bytes());
		self.import_text_internal(reader, |e| HueError::InvalidField { msg: e.to_string() })
	}

	fn export_text_internal<W: Write>(&self, writer: &mut W, ids: &[usize]) -> std::io::Result<()> {
		writeln!(writer, "{TEXT_HEADER}")?;
		for &id in ids {
			writeln!(writer, "{id},{}", self.entries[id])?;
		}
		writer.flush()
	}

	fn export_to_file(&self, path: &Path, ids: &[usize]) -> Result<(), HueError> {
		let f = File::create(path).map_err(|e| HueError::io(path, e))?;
		let mut writer = BufWriter::new(f);
		self.export_text_internal(&mut writer, ids).map_err(|e| HueError::io(path, e))?;

		log::debug!("Exported {} hues to {}", ids.len(), path.display());
		Ok(())
	}

	pub fn export_text<P: AsRef<Path>>(&self, path: P) -> Result<(), HueError> {
		let ids = (0..self.entries.len()).collect::<Vec<usize>>();
		self.export_to_file(path.as_ref(), &ids)
	}

	/// Like [HueCatalog::export_text], but only writes the given ids, in the given order.
	pub fn export_text_ids<P: AsRef<Path>>(&self, path: P, ids: &[usize]) -> Result<(), HueError> {
		if let Some(&id) = ids.iter().find(|&&id| id >= self.entries.len()) {
			return Err(HueError::OutOfRange { index: id, len: self.entries.len() });
		}
		self.export_to_file(path.as_ref(), ids)
	}

	pub fn to_text_string(&self) -> String {
		let mut text = format!("{TEXT_HEADER}\n");
		for (id, entry) in self.entries.iter().enumerate() {
			text.push_str(&format!("{id},{entry}\n"));
		}
		text
	}

	// endregion

	// region Reconciliation

	/// Ids of all blank entries, ascending.
	pub fn blank(&self) -> Vec<usize> {
		self.entries.iter()
			.enumerate()
			.filter(|(_, e)| e.is_empty())
			.map(|(id, _)| id)
			.collect()
	}

	/// Ids of the non-blank entries in `other` that have no equal entry in this catalog.
	pub fn unique(&self, other: &HueCatalog) -> Vec<usize> {
		other.entries.iter()
			.enumerate()
			.filter(|(_, e)| !e.is_empty() && !self.entries.iter().any(|mine| mine == *e))
			.map(|(id, _)| id)
			.collect()
	}

	/// Adds every entry of `other` this catalog doesn't contain yet, reusing blank
	/// entries before growing. Id 0 is never reused.
	pub fn merge_with<F: FnMut(&Placement)>(&mut self, other: &HueCatalog, mut report: F) -> Result<(), HueError> {
		let mut blanks = self.blank();
		let additions = self.unique(other);
		if additions.is_empty() {
			return Err(HueError::NothingUnique);
		}

		if blanks.first() == Some(&0) {
			blanks.remove(0);
		}

		let mut blanks = blanks.into_iter();
		for source in additions {
			let entry = other.entries[source].clone();
			let placement = match blanks.next() {
				Some(target) => {
					self.entries[target] = entry;
					Placement::Filled { source, target }
				}
				None => {
					let target = self.append(entry)?;
					Placement::Appended { source, target }
				}
			};
			report(&placement);
		}

		Ok(())
	}

	/// [HueCatalog::merge_with] that reports placements to the log.
	pub fn merge(&mut self, other: &HueCatalog) -> Result<(), HueError> {
		self.merge_with(other, |p| log::info!("{p}"))
	}

	/// Adds an entry at the end and returns its id.
	pub fn append(&mut self, entry: HueEntry) -> Result<usize, HueError> {
		if self.entries.len() >= self.max {
			return Err(HueError::TooManyHues { max: self.max });
		}

		self.entries.push(entry);
		Ok(self.entries.len() - 1)
	}

	// endregion
}

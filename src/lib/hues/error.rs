use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HueErrorKind {
	Format,
	Range,
	Capacity,
	NotFound,
	Io,
	Empty,
	NothingUnique,
}

#[derive(Debug)]
pub enum HueError {
	InvalidField { msg: String },
	InvalidFieldCount { found: usize },
	InvalidEntrySize { size: usize },
	InvalidTextLine { line: usize, msg: String },
	OutOfRange { index: usize, len: usize },
	TooManyHues { max: usize },
	NotFound(PathBuf),
	Io { path: PathBuf, err: std::io::Error },
	Empty,
	NothingUnique,
}

impl HueError {
	pub fn kind(&self) -> HueErrorKind {
		match self {
			HueError::InvalidField { .. }
			| HueError::InvalidFieldCount { .. }
			| HueError::InvalidEntrySize { .. }
			| HueError::InvalidTextLine { .. } => HueErrorKind::Format,
			HueError::OutOfRange { .. } => HueErrorKind::Range,
			HueError::TooManyHues { .. } => HueErrorKind::Capacity,
			HueError::NotFound(_) => HueErrorKind::NotFound,
			HueError::Io { .. } => HueErrorKind::Io,
			HueError::Empty => HueErrorKind::Empty,
			HueError::NothingUnique => HueErrorKind::NothingUnique,
		}
	}

	pub(crate) fn io<P: AsRef<Path>>(path: P, err: std::io::Error) -> Self {
		HueError::Io { path: path.as_ref().to_path_buf(), err }
	}

	/// Attaches a 1-based line number to format errors raised while parsing a text line.
	pub(crate) fn at_line(self, line: usize) -> Self {
		match self {
			HueError::InvalidField { msg } => HueError::InvalidTextLine { line, msg },
			HueError::InvalidFieldCount { found } => HueError::InvalidTextLine {
				line,
				msg: format!("Expected 33 fields, found {found}"),
			},
			e => e,
		}
	}
}

impl Display for HueError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			HueError::InvalidField { msg } => write!(f, "Invalid field: {msg}"),
			HueError::InvalidFieldCount { found } => write!(f, "Hue entry line had {found} fields instead of 33"),
			HueError::InvalidEntrySize { size } => write!(f, "Hue entry data is {size} bytes instead of {}", super::HUE_ENTRY_SIZE),
			HueError::InvalidTextLine { line, msg } => write!(f, "Bad line on line number {line}: {msg}"),
			HueError::OutOfRange { index, len } => write!(f, "Index {index} is out of range (size {len})"),
			HueError::TooManyHues { max } => write!(f, "Exceeds max number of hues of: {max}"),
			HueError::NotFound(path) => write!(f, "Does not exist: {}", path.display()),
			HueError::Io { path, err } => write!(f, "{}: {err}", path.display()),
			HueError::Empty => write!(f, "No hues to save"),
			HueError::NothingUnique => write!(f, "Nothing unique to merge"),
		}
	}
}

impl Error for HueError {
	fn source(&self) -> Option<&(dyn Error + 'static)> {
		match self {
			HueError::Io { err, .. } => Some(err),
			_ => None,
		}
	}
}

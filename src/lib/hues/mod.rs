pub mod catalog;
pub mod color;
pub mod entry;
pub mod error;
pub(crate) mod text;

/// Number of colors in a single hue entry.
pub const HUE_COLORS: usize = 32;

/// Maximum number of name bytes stored in the binary form of an entry.
pub const HUE_NAME_SIZE: usize = 20;

/// Size of one entry in the binary file: color table, table start, table end and name.
pub const HUE_ENTRY_SIZE: usize = (HUE_COLORS * 2) + 2 + 2 + HUE_NAME_SIZE;

/// Number of entries that share one group header in the binary file.
pub const HUE_GROUP_SIZE: usize = 8;

/// Size of the header preceding every group of entries.
pub const HUE_GROUP_HEADER_SIZE: usize = 4;

pub const DEFAULT_MAX_HUES: usize = 3000;

use hueedit::hues::color::HueColor;
use hueedit::hues::entry::HueEntry;
use hueedit::hues::error::{HueError, HueErrorKind};
use hueedit::hues::{HUE_COLORS, HUE_ENTRY_SIZE};

fn ramp() -> [HueColor; HUE_COLORS] {
	let mut colors = [HueColor::default(); HUE_COLORS];
	for (i, color) in colors.iter_mut().enumerate() {
		*color = HueColor::from_channels(i as u8, 31 - i as u8, (i as u8) / 2);
	}
	colors
}

fn fire_line() -> String {
	let mut line = String::from("Fire,31:0:0");
	for _ in 1..HUE_COLORS {
		line.push_str(",0:0:0");
	}
	line
}

/// Binary entry with the given raw name bytes and a ramp of colors.
fn entry_bytes(name: &[u8]) -> Vec<u8> {
	let mut data = HueEntry::new("", ramp()).to_bytes().to_vec();
	data[68..68 + name.len()].copy_from_slice(name);
	data
}

#[test]
fn entry_from_text() {
	let entry = HueEntry::from_text(&fire_line()).unwrap();
	assert_eq!(entry.name(), "Fire");
	assert_eq!(entry.color(0).unwrap().to_string(), "31:0:0");
	assert_eq!(entry.color(31).unwrap().to_string(), "0:0:0");
	assert_eq!(entry.to_string(), fire_line());
}

#[test]
fn entry_from_text_truncates_name() {
	let line = fire_line().replacen("Fire", "A name that is far too long", 1);
	let entry = HueEntry::from_text(&line).unwrap();
	assert_eq!(entry.name(), "A name that is far t");
}

#[test]
#[should_panic(expected = "InvalidFieldCount { found: 32 }")]
fn entry_from_text_missing_color() {
	let line = fire_line().replacen(",0:0:0", "", 1);
	HueEntry::from_text(&line).unwrap();
}

#[test]
fn entry_from_text_extra_color() {
	let line = format!("{},1:1:1", fire_line());
	let err = HueEntry::from_text(&line).unwrap_err();
	assert_eq!(err.kind(), HueErrorKind::Format);
}

#[test]
fn entry_binary_layout() {
	let colors = ramp();
	let entry = HueEntry::new("Fire", colors);
	let data = entry.to_bytes();

	assert_eq!(data.len(), HUE_ENTRY_SIZE);
	assert_eq!(&data[0..2], &colors[0].raw().to_le_bytes());
	assert_eq!(&data[62..64], &colors[31].raw().to_le_bytes());
	// table start and end
	assert_eq!(&data[64..66], &colors[0].raw().to_le_bytes());
	assert_eq!(&data[66..68], &colors[31].raw().to_le_bytes());
	assert_eq!(&data[68..72], b"Fire");
	assert!(data[72..].iter().all(|b| *b == 0));
}

#[test]
fn entry_binary_round_trip() {
	let entry = HueEntry::new("Deep Blue", ramp());
	let decoded = HueEntry::from_bytes(&entry.to_bytes()).unwrap();
	assert_eq!(decoded, entry);
	assert_eq!(decoded.name(), "Deep Blue");
}

#[test]
fn entry_binary_ignores_table_fields() {
	let entry = HueEntry::new("Fire", ramp());
	let mut data = entry.to_bytes();
	data[64..68].copy_from_slice(&[0xAA, 0xBB, 0xCC, 0xDD]);

	let decoded = HueEntry::from_bytes(&data).unwrap();
	assert_eq!(decoded, entry);
	assert_eq!(decoded.to_bytes(), entry.to_bytes());
}

#[test]
fn entry_binary_full_length_name() {
	let data = entry_bytes(b"ABCDEFGHIJKLMNOPQRST");
	let entry = HueEntry::from_bytes(&data).unwrap();
	assert_eq!(entry.name(), "ABCDEFGHIJKLMNOPQRST");
}

#[test]
fn entry_binary_wrong_size() {
	let err = HueEntry::from_bytes(&[0_u8; HUE_ENTRY_SIZE - 1]).unwrap_err();
	assert!(matches!(err, HueError::InvalidEntrySize { size: 87 }));
	assert_eq!(err.kind(), HueErrorKind::Format);
}

#[test]
fn entry_name_sanitizing() {
	let entry = HueEntry::from_bytes(&entry_bytes(b"a,b\x01c\xFF\x7F")).unwrap();
	assert_eq!(entry.name(), "a-b-c--");

	let entry = HueEntry::from_bytes(&entry_bytes(b"  Blue  ")).unwrap();
	assert_eq!(entry.name(), "Blue");

	// anything after the terminator is ignored
	let entry = HueEntry::from_bytes(&entry_bytes(b"Red\0junk")).unwrap();
	assert_eq!(entry.name(), "Red");
}

#[test]
fn entry_name_sanitizing_is_idempotent() {
	let first = HueEntry::from_bytes(&entry_bytes(b"\tod,d\x90name ")).unwrap();
	let second = HueEntry::from_bytes(&first.to_bytes()).unwrap();
	assert_eq!(first.name(), "-od-d-name");
	assert_eq!(second.name(), first.name());
	assert_eq!(second, first);
}

#[test]
fn entry_name_delimiters_replaced() {
	let entry = HueEntry::new(" a,b\nc\rd ", ramp());
	assert_eq!(entry.name(), "a_b_c_d");

	let mut entry = HueEntry::default();
	entry.set_name("x,y");
	assert_eq!(entry.name(), "x_y");

	// truncation happens before trimming, no trailing space survives
	entry.set_name("nineteen characters x");
	assert_eq!(entry.name(), "nineteen characters");

	let entry = HueEntry::new("Fire, hot", ramp());
	let decoded = HueEntry::from_text(&entry.to_string()).unwrap();
	assert_eq!(decoded, entry);
}

#[test]
fn entry_text_round_trip() {
	let entry = HueEntry::new("Grass", ramp());
	let decoded = HueEntry::from_text(&entry.to_string()).unwrap();
	assert_eq!(decoded, entry);
}

#[test]
fn entry_equality_masks_top_bit() {
	let mut a = HueEntry::new("Fire", ramp());
	let b = a.clone();

	let color = a.color(3).unwrap();
	a.set_color(3, HueColor::from(color.raw() | 0x8000)).unwrap();
	assert_ne!(a.color(3).unwrap(), b.color(3).unwrap());
	assert_eq!(a, b);

	a.set_color(3, HueColor::from(color.raw() ^ 0x0001)).unwrap();
	assert_ne!(a, b);

	let mut c = b.clone();
	c.set_name("Ice");
	assert_ne!(c, b);
}

#[test]
fn entry_emptiness() {
	let mut entry = HueEntry::default();
	assert!(entry.is_empty());

	entry.set_color(17, HueColor::from(1)).unwrap();
	assert!(entry.is_empty());

	entry.set_color(17, HueColor::from(2)).unwrap();
	assert!(!entry.is_empty());

	let named = HueEntry::new("x", [HueColor::default(); HUE_COLORS]);
	assert!(!named.is_empty());
}

#[test]
fn entry_color_out_of_range() {
	let mut entry = HueEntry::default();
	let err = entry.color(HUE_COLORS).unwrap_err();
	assert!(matches!(err, HueError::OutOfRange { index: 32, len: 32 }));
	assert_eq!(err.kind(), HueErrorKind::Range);

	let err = entry.set_color(40, HueColor::default()).unwrap_err();
	assert_eq!(err.kind(), HueErrorKind::Range);
}

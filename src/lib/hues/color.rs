use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::hues::error::HueError;
use crate::hues::text::parse_unsigned;

const CHANNEL_MASK: u16 = 0x1F;
const RED_SHIFT: u16 = 10;
const GREEN_SHIFT: u16 = 5;

/// Mask used by the loose emptiness test. Hue files contain lots of garbage where only
/// the low bits are set, those colors count as empty.
const EMPTY_MASK: u16 = 0x7FF;

/// A 15-bit color as stored in hue files: `0RRRRRGG GGGBBBBB`.
///
/// Equality compares the full stored word, including the unused top bit.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash)]
pub struct HueColor {
	raw: u16,
}

impl From<u16> for HueColor {
	fn from(v: u16) -> Self {
		Self { raw: v }
	}
}

impl From<HueColor> for u16 {
	fn from(c: HueColor) -> Self {
		c.raw
	}
}

impl HueColor {
	/// Builds a color from 5-bit channels, higher bits of each channel are discarded.
	pub fn from_channels(r: u8, g: u8, b: u8) -> Self {
		let r = (r as u16) & CHANNEL_MASK;
		let g = (g as u16) & CHANNEL_MASK;
		let b = (b as u16) & CHANNEL_MASK;
		Self { raw: (r << RED_SHIFT) | (g << GREEN_SHIFT) | b }
	}

	pub fn raw(&self) -> u16 {
		self.raw
	}

	pub fn red(&self) -> u8 {
		((self.raw >> RED_SHIFT) & CHANNEL_MASK) as u8
	}

	pub fn green(&self) -> u8 {
		((self.raw >> GREEN_SHIFT) & CHANNEL_MASK) as u8
	}

	pub fn blue(&self) -> u8 {
		(self.raw & CHANNEL_MASK) as u8
	}

	pub fn is_empty(&self) -> bool {
		(self.raw & EMPTY_MASK) <= 1
	}
}

impl Display for HueColor {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}:{}:{}", self.red(), self.green(), self.blue())
	}
}

impl FromStr for HueColor {
	type Err = HueError;

	/// Parses `R:G:B`. Missing trailing channels stay zero, anything past blue is ignored.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let s = s.trim();
		if s.is_empty() {
			return Ok(HueColor::default());
		}

		let mut raw = 0_u16;
		let shifts = [RED_SHIFT, GREEN_SHIFT, 0];
		for (token, shift) in s.split(':').zip(shifts) {
			let channel = parse_unsigned(token)? as u16 & CHANNEL_MASK;
			raw |= channel << shift;
		}

		Ok(HueColor { raw })
	}
}

use crate::hues::error::HueError;

/// Parses an unsigned integer field, accepting decimal or `0x`-prefixed hexadecimal.
pub(crate) fn parse_unsigned(s: &str) -> Result<u32, HueError> {
	let trimmed = s.trim();

	let parsed = match trimmed.strip_prefix("0x").or_else(|| trimmed.strip_prefix("0X")) {
		Some(hex) => u32::from_str_radix(hex, 16),
		None => trimmed.parse::<u32>(),
	};

	parsed.map_err(|_| HueError::InvalidField { msg: format!("\"{trimmed}\" is not an unsigned number") })
}

/// Truncates `s` to at most `max` bytes without splitting a character.
pub(crate) fn truncate_bytes(s: &mut String, max: usize) {
	if s.len() <= max {
		return;
	}

	let mut end = max;
	while !s.is_char_boundary(end) {
		end -= 1;
	}
	s.truncate(end);
}

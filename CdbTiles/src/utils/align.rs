//! Section alignment helpers
//!
//! Every section inside an I3DM/B3DM/CMPT container starts on an 8-byte
//! boundary. Text sections are padded with spaces, binary sections with zeros.

/// Alignment required between container sections.
pub const SECTION_ALIGNMENT: usize = 8;

/// Round `value` up to the next multiple of `align`.
///
/// `align` must be non-zero.
#[must_use]
pub const fn round_up(value: usize, align: usize) -> usize {
    value.div_ceil(align) * align
}

/// Pad a JSON (or other text) section with spaces so that
/// `start_offset + text.len()` is a multiple of 8.
///
/// `start_offset` is the position of the text within the container, which
/// lets the first section after a 28-byte B3DM header end aligned.
pub fn pad_json(text: &mut String, start_offset: usize) {
    let end = start_offset + text.len();
    let padding = round_up(end, SECTION_ALIGNMENT) - end;
    text.extend(std::iter::repeat_n(' ', padding));
}

/// Zero-pad a binary section to a multiple of 8 bytes.
pub fn pad_binary(bytes: &mut Vec<u8>) {
    let padded = round_up(bytes.len(), SECTION_ALIGNMENT);
    bytes.resize(padded, 0);
}

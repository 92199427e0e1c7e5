//! Default numeric reference conversion.

/// Windows-1252 characters for code points 0x80..=0x9F.
///
/// Entries that Windows-1252 leaves undefined keep their own code point.
const C1_REMAP: [u32; 32] = [
    0x20AC, 0x0081, 0x201A, 0x0192, 0x201E, 0x2026, 0x2020, 0x2021, //
    0x02C6, 0x2030, 0x0160, 0x2039, 0x0152, 0x008D, 0x017D, 0x008F, //
    0x0090, 0x2018, 0x2019, 0x201C, 0x201D, 0x2022, 0x2013, 0x2014, //
    0x02DC, 0x2122, 0x0161, 0x203A, 0x0153, 0x009D, 0x017E, 0x0178, //
];

/// Convert the value of a numeric character reference into text.
///
/// NUL, surrogates and anything past U+10FFFF become U+FFFD. The C1 range is
/// read as Windows-1252, the way browsers treat `&#128;`.
pub fn decode_codepoint(codepoint: u32) -> String {
    let scalar = match codepoint {
        0x80..=0x9F => C1_REMAP[(codepoint - 0x80) as usize],
        other => other,
    };

    match scalar {
        0 => char::REPLACEMENT_CHARACTER,
        other => char::from_u32(other).unwrap_or(char::REPLACEMENT_CHARACTER),
    }
    .to_string()
}

use crate::character_sets::{DIGIT, HEX_DIGIT};

/// Marks bytes outside a map's domain
const INVALID: u8 = 0xFF;

const fn build_map(hex: bool) -> [u8; 256] {
    let mut map = [INVALID; 256];
    let mut i = 0;
    while i < 10 {
        map[b'0' as usize + i] = i as u8;
        i += 1;
    }
    if hex {
        let mut i = 0;
        while i < 6 {
            map[b'a' as usize + i] = 10 + i as u8;
            map[b'A' as usize + i] = 10 + i as u8;
            i += 1;
        }
    }
    map
}

static NUM_MAP: [u8; 256] = build_map(false);
static HEX_MAP: [u8; 256] = build_map(true);

/// Value of a decimal digit byte.
///
/// # Panics
///
/// Panics if `b` is not in `DIGIT`. Classify the byte first.
#[inline]
pub fn digit_value(b: u8) -> u8 {
    let value = NUM_MAP[usize::from(b)];
    assert!(value != INVALID, "byte {b:#04x} is not a decimal digit");
    value
}

/// Value of a hex digit byte, either case.
///
/// # Panics
///
/// Panics if `b` is not in `HEX_DIGIT`. Classify the byte first.
#[inline]
pub fn hex_value(b: u8) -> u8 {
    let value = HEX_MAP[usize::from(b)];
    assert!(value != INVALID, "byte {b:#04x} is not a hex digit");
    value
}

/// Like [`digit_value`], but returns `None` outside the domain
#[inline]
pub fn checked_digit_value(b: u8) -> Option<u8> {
    if DIGIT.contains(b) {
        Some(NUM_MAP[usize::from(b)])
    } else {
        None
    }
}

/// Like [`hex_value`], but returns `None` outside the domain
#[inline]
pub fn checked_hex_value(b: u8) -> Option<u8> {
    if HEX_DIGIT.contains(b) {
        Some(HEX_MAP[usize::from(b)])
    } else {
        None
    }
}

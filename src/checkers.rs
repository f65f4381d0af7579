use crate::character_sets::{is_digit, is_header_value_char, is_hex_digit, is_token_strict};
use crate::digits::{digit_value, hex_value};
use crate::error::{Errno, Result};
use crate::helpers::trim_ows;
use crate::types::Mode;

/// Parse a `Content-Length` value.
/// Surrounding OWS is ignored; anything but digits, or a value that does not
/// fit in a u64, is rejected.
pub fn parse_content_length(value: &[u8]) -> Result<u64> {
    parse_number(trim_ows(value), 10, Errno::InvalidContentLength)
}

/// Parse the size field of a chunk header line.
/// Chunk extensions after `;` are ignored.
pub fn parse_chunk_size(line: &[u8]) -> Result<u64> {
    let size = memchr::memchr(b';', line).map_or(line, |pos| &line[..pos]);
    parse_number(trim_ows(size), 16, Errno::InvalidChunkSize)
}

fn parse_number(digits: &[u8], radix: u64, error: Errno) -> Result<u64> {
    if digits.is_empty() {
        return Err(error);
    }
    digits.iter().try_fold(0u64, |acc, &b| {
        let digit = match radix {
            16 if is_hex_digit(b) => hex_value(b),
            10 if is_digit(b) => digit_value(b),
            _ => return Err(error),
        };
        acc.checked_mul(radix)
            .and_then(|n| n.checked_add(u64::from(digit)))
            .ok_or(error)
    })
}

/// Parse a three-digit status code
pub fn parse_status_code(code: &[u8]) -> Result<u16> {
    let &[hundreds, tens, ones] = code else {
        return Err(Errno::InvalidStatus);
    };
    if !(is_digit(hundreds) && is_digit(tens) && is_digit(ones)) {
        return Err(Errno::InvalidStatus);
    }
    Ok(u16::from(digit_value(hundreds)) * 100
        + u16::from(digit_value(tens)) * 10
        + u16::from(digit_value(ones)))
}

/// Parse `HTTP/<major>.<minor>` into its two digits
pub fn parse_version(version: &[u8]) -> Result<(u8, u8)> {
    let Some(rest) = version.strip_prefix(b"HTTP/") else {
        return Err(Errno::InvalidConstant);
    };
    match rest {
        [major, b'.', minor] if is_digit(*major) && is_digit(*minor) => {
            Ok((digit_value(*major), digit_value(*minor)))
        }
        _ => Err(Errno::InvalidVersion),
    }
}

/// Methods are strict tokens in every mode
pub fn check_method(method: &[u8]) -> Result<()> {
    if method.is_empty() || !method.iter().all(|&b| is_token_strict(b)) {
        return Err(Errno::InvalidMethod);
    }
    Ok(())
}

pub fn check_header_name(name: &[u8], mode: Mode) -> Result<()> {
    if name.is_empty() || !name.iter().all(|&b| mode.is_token_char(b)) {
        return Err(Errno::InvalidHeaderToken);
    }
    Ok(())
}

pub fn check_header_value(value: &[u8]) -> Result<()> {
    if value.iter().all(|&b| is_header_value_char(b)) {
        Ok(())
    } else {
        Err(Errno::InvalidHeaderToken)
    }
}

/// Check a request target.
/// `?` and `#` are accepted here as the query and fragment delimiters even
/// though they are not URL characters.
pub fn check_url(url: &[u8], mode: Mode) -> Result<()> {
    let valid = url
        .iter()
        .all(|&b| mode.is_url_char(b) || b == b'?' || b == b'#');
    if url.is_empty() || !valid {
        return Err(Errno::InvalidUrl);
    }
    Ok(())
}

/// Check the line terminator at the start of `ending`.
/// Returns the number of bytes it occupies.
pub fn check_line_end(ending: &[u8], mode: Mode) -> Result<usize> {
    match ending {
        [b'\r', b'\n', ..] => Ok(2),
        [b'\n', ..] if mode == Mode::Loose => Ok(1),
        [b'\n', ..] => Err(Errno::Strict),
        _ => Err(Errno::LfExpected),
    }
}

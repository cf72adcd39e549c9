use crate::error::ColorFormatError;

/// Parse a 24-bit color in hashed hexadecimal format.
///
/// After trimming leading and trailing white space, the string must consist of
/// `#` followed by exactly six hexadecimal digits, in either case. If
/// successful, this function returns the three coordinates as unsigned bytes.
pub(crate) fn parse(s: &str) -> Result<[u8; 3], ColorFormatError> {
    let s = s.trim();
    let digits = s.strip_prefix('#').ok_or(ColorFormatError::UnknownFormat)?;
    if digits.len() != 6 {
        return Err(ColorFormatError::UnexpectedCharacters);
    }

    fn parse_coordinate(s: &str, index: usize) -> Result<u8, ColorFormatError> {
        let t = s
            .get(2 * index..2 * (index + 1))
            .ok_or(ColorFormatError::UnexpectedCharacters)?;
        if !t.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorFormatError::MalformedHex);
        }
        u8::from_str_radix(t, 16).map_err(|_| ColorFormatError::MalformedHex)
    }

    let c1 = parse_coordinate(digits, 0)?;
    let c2 = parse_coordinate(digits, 1)?;
    let c3 = parse_coordinate(digits, 2)?;
    Ok([c1, c2, c3])
}

/// Normalize a possibly malformed hexadecimal color.
///
/// This function never fails. It drops a single leading `#`, keeps at most
/// the first six characters, replaces characters that are not hexadecimal
/// digits with `0`, and pads the result with `0` up to six digits. Hence `abc`
/// becomes `#abc000` and `#12345678` becomes `#123456`.
pub(crate) fn normalize(s: &str) -> [u8; 3] {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s);

    let mut digits = [0_u8; 6];
    for (slot, c) in digits.iter_mut().zip(s.chars()) {
        // to_digit() returns None for anything not in 0-9a-fA-F
        *slot = c.to_digit(16).unwrap_or(0) as u8;
    }

    [
        16 * digits[0] + digits[1],
        16 * digits[2] + digits[3],
        16 * digits[4] + digits[5],
    ]
}

/// Format the 24-bit color in lowercase hashed hexadecimal format.
pub(crate) fn format(
    coordinates: &[u8; 3],
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    let [r, g, b] = *coordinates;
    write!(f, "#{:02x}{:02x}{:02x}", r, g, b)
}

#[cfg(test)]
mod test {
    use super::{normalize, parse};
    use crate::error::ColorFormatError;

    #[test]
    fn test_parse() {
        assert_eq!(parse("#9b40ea"), Ok([0x9b, 0x40, 0xea]));
        assert_eq!(parse("  #9B40EA\n"), Ok([0x9b, 0x40, 0xea]));
        assert_eq!(parse("9b40ea"), Err(ColorFormatError::UnknownFormat));
        assert_eq!(parse("#12345"), Err(ColorFormatError::UnexpectedCharacters));
        assert_eq!(parse("#1234567"), Err(ColorFormatError::UnexpectedCharacters));
        assert_eq!(parse("#efgefg"), Err(ColorFormatError::MalformedHex));
        assert_eq!(parse("#+1+1+1"), Err(ColorFormatError::MalformedHex));
        // Six bytes but not six characters
        assert_eq!(parse("#ab💩"), Err(ColorFormatError::UnexpectedCharacters));
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("#9b40ea"), [0x9b, 0x40, 0xea]);
        assert_eq!(normalize("9B40EA"), [0x9b, 0x40, 0xea]);
        assert_eq!(normalize("#abc"), [0xab, 0xc0, 0x00]);
        assert_eq!(normalize(""), [0, 0, 0]);
        assert_eq!(normalize("#12345678"), [0x12, 0x34, 0x56]);
        // Characters stay in place, even when they are not hex digits
        assert_eq!(normalize("#zz1122"), [0x00, 0x11, 0x22]);
        assert_eq!(normalize("ab#cd"), [0xab, 0x0c, 0xd0]);
    }
}

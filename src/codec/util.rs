use crate::error::{Bin2TextError, Result};
use crate::types::Mode;

/// Marks a byte that is not part of an alphabet in a reverse lookup table.
pub const INVALID: u8 = 0xFF;

/// Builds an ASCII reverse lookup table for `alphabet` at compile time.
///
/// With `fold_case` set, the lowercase form of every uppercase symbol maps to
/// the same value.
pub const fn build_decode_table(alphabet: &[u8], fold_case: bool) -> [u8; 128] {
    let mut table = [INVALID; 128];
    let mut i = 0;
    while i < alphabet.len() {
        let symbol = alphabet[i];
        table[symbol as usize] = i as u8;
        if fold_case && symbol.is_ascii_uppercase() {
            table[symbol.to_ascii_lowercase() as usize] = i as u8;
        }
        i += 1;
    }
    table
}

pub fn lookup(table: &[u8; 128], ch: char) -> Option<u8> {
    match table.get(ch as usize) {
        Some(&value) if value != INVALID => Some(value),
        _ => None,
    }
}

/// Looks `ch` up in an ASCII reverse table, mapping anything unknown to 0.
pub fn lookup_or_zero(table: &[u8; 128], ch: char) -> u8 {
    lookup(table, ch).unwrap_or(0)
}

pub fn clean_for_mode(input: &str, mode: Mode) -> String {
    match mode {
        Mode::Strict => input.to_string(),
        Mode::Lenient => input.chars().filter(|c| !c.is_ascii_whitespace()).collect(),
    }
}

/// Checks every symbol against `table`, treating `=` as allowed when `allow_padding` is set.
pub fn validate_symbols(input: &str, table: &[u8; 128], allow_padding: bool) -> Result<()> {
    for (pos, ch) in input.chars().enumerate() {
        if allow_padding && ch == '=' {
            continue;
        }
        if lookup(table, ch).is_none() {
            return Err(Bin2TextError::invalid_char(ch, pos));
        }
    }
    Ok(())
}

/// Checks that `=` only appears as one trailing run whose length is in `allowed`.
pub fn validate_trailing_padding(input: &str, allowed: &[usize]) -> Result<()> {
    let data = input.trim_end_matches('=');
    if let Some(pos) = data.find('=') {
        return Err(Bin2TextError::invalid_padding(format!(
            "padding at byte offset {} is followed by data",
            pos
        )));
    }
    let pad_count = input.len() - data.len();
    if !allowed.contains(&pad_count) {
        return Err(Bin2TextError::invalid_padding(format!(
            "{} padding characters is not a valid padding length",
            pad_count
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: [u8; 128] = build_decode_table(b"ABC", true);

    #[test]
    fn test_build_decode_table() {
        assert_eq!(TABLE[b'A' as usize], 0);
        assert_eq!(TABLE[b'c' as usize], 2);
        assert_eq!(TABLE[b'D' as usize], INVALID);
    }

    #[test]
    fn test_lookup_or_zero() {
        assert_eq!(lookup_or_zero(&TABLE, 'B'), 1);
        assert_eq!(lookup_or_zero(&TABLE, '!'), 0);
        assert_eq!(lookup_or_zero(&TABLE, 'é'), 0);
    }

    #[test]
    fn test_clean_for_mode_strict() {
        assert_eq!(clean_for_mode("ab c\td", Mode::Strict), "ab c\td");
    }

    #[test]
    fn test_clean_for_mode_lenient() {
        assert_eq!(clean_for_mode("ab c\td\n", Mode::Lenient), "abcd");
    }

    #[test]
    fn test_validate_symbols_invalid_char() {
        let result = validate_symbols("AB!", &TABLE, false);
        match result {
            Err(Bin2TextError::InvalidCharacter { char: ch, position }) => {
                assert_eq!(ch, '!');
                assert_eq!(position, 2);
            }
            _ => panic!("expected InvalidCharacter error"),
        }
    }

    #[test]
    fn test_validate_symbols_padding() {
        assert!(validate_symbols("AB==", &TABLE, true).is_ok());
        assert!(validate_symbols("AB==", &TABLE, false).is_err());
    }

    #[test]
    fn test_validate_trailing_padding() {
        assert!(validate_trailing_padding("AB==", &[0, 1, 2]).is_ok());
        assert!(validate_trailing_padding("AB===", &[0, 1, 2]).is_err());
        assert!(validate_trailing_padding("A=B=", &[0, 1, 2]).is_err());
    }
}

//! RFC4648 Base64, standard alphabet, `=` padded.

use base64::prelude::{Engine as _, BASE64_STANDARD};

use super::{util, Codec};
use crate::error::{Bin2TextError, LengthConstraint, Result};
use crate::types::{CaseSensitivity, CodecMeta, PaddingRule};

const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
const SYMBOLS: &[u8] = ALPHABET.as_bytes();
static DECODE_TABLE: [u8; 128] = util::build_decode_table(SYMBOLS, false);

const PAD: char = '=';
const GROUP_BYTES: usize = 3;
const GROUP_SYMBOLS: usize = 4;

/// Padding emitted after a final group of 0..=3 bytes.
const PADDING: [usize; GROUP_BYTES + 1] = [0, 2, 1, 0];

pub fn encode(input: impl AsRef<[u8]>) -> String {
    let input = input.as_ref();
    let mut out = String::with_capacity(input.len().div_ceil(GROUP_BYTES) * GROUP_SYMBOLS);
    encode_into(&mut out, input);
    out
}

pub fn encode_into(out: &mut String, input: &[u8]) {
    BASE64_STANDARD.encode_string(input, out);
}

pub fn decode(input: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(input.len() / GROUP_SYMBOLS * GROUP_BYTES + GROUP_BYTES);
    decode_into(&mut out, input);
    out
}

/// Decodes until the first `=`. Unknown symbols decode as `A`.
pub fn decode_into<E: Extend<u8>>(out: &mut E, input: &str) {
    let mut bits = 0u32;
    let mut len = 0;

    for ch in input.chars() {
        if ch == PAD {
            break;
        }
        bits = (bits << 6) | u32::from(util::lookup_or_zero(&DECODE_TABLE, ch));
        len += 1;
        if len == GROUP_SYMBOLS {
            out.extend([(bits >> 16) as u8, (bits >> 8) as u8, bits as u8]);
            bits = 0;
            len = 0;
        }
    }

    if len > 0 {
        let bits = bits << (6 * (GROUP_SYMBOLS - len));
        let count = (len * 6 / 8).max(1);
        out.extend((0..count).map(|i| (bits >> (16 - 8 * i)) as u8));
    }
}

pub fn decode_to_string(input: &str) -> String {
    String::from_utf8_lossy(&decode(input)).into_owned()
}

/// Decodes canonical padded Base64. Non-zero trailing bits are rejected.
pub fn decode_strict(input: &str) -> Result<Vec<u8>> {
    util::validate_symbols(input, &DECODE_TABLE, true)?;
    let len = input.len();
    if len % GROUP_SYMBOLS != 0 {
        return Err(Bin2TextError::invalid_length(LengthConstraint::MultipleOf(GROUP_SYMBOLS), len));
    }
    util::validate_trailing_padding(input, &PADDING)?;
    BASE64_STANDARD
        .decode(input)
        .map_err(|e| Bin2TextError::invalid_input(e.to_string()))
}

pub fn validate(input: &str) -> Result<()> {
    decode_strict(input).map(|_| ())
}

pub struct Base64;

impl Codec for Base64 {
    fn meta(&self) -> CodecMeta {
        CodecMeta {
            name: "base64",
            aliases: &["b64"],
            alphabet: ALPHABET,
            bits_per_symbol: 6,
            padding: PaddingRule::Required,
            case_sensitivity: CaseSensitivity::Sensitive,
            description: "RFC4648 Base64 with padding",
        }
    }

    fn encode(&self, input: &[u8]) -> String {
        encode(input)
    }

    fn decode_lenient(&self, input: &str) -> Vec<u8> {
        decode(input)
    }

    fn decode_strict(&self, input: &str) -> Result<Vec<u8>> {
        decode_strict(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mode;

    #[test]
    fn test_base64_encode() {
        assert_eq!(encode("Hello, World!"), "SGVsbG8sIFdvcmxkIQ==");
        assert_eq!(encode("A"), "QQ==");
        assert_eq!(encode("AB"), "QUI=");
        assert_eq!(encode("ABC"), "QUJD");
    }

    #[test]
    fn test_base64_decode() {
        assert_eq!(decode("SGVsbG8sIFdvcmxkIQ=="), b"Hello, World!");
        assert_eq!(decode_to_string("QUJD"), "ABC");
    }

    #[test]
    fn test_base64_high_symbols() {
        assert_eq!(encode([0xFB_u8, 0xFF, 0xBF]), "+/+/");
        assert_eq!(decode("+/+/"), [0xFB, 0xFF, 0xBF]);
    }

    #[test]
    fn test_base64_missing_padding() {
        assert_eq!(decode("QQ"), b"A");
        assert_eq!(decode("QUI"), b"AB");
    }

    #[test]
    fn test_base64_padding_ends_data() {
        assert_eq!(decode("QQ==QUI="), b"A");
    }

    #[test]
    fn test_base64_lone_symbol() {
        assert_eq!(decode("Q"), [0x40]);
    }

    #[test]
    fn test_base64_invalid_chars_are_zero() {
        assert_eq!(decode("QU*D"), decode("QUAD"));
    }

    #[test]
    fn test_base64_strict() {
        assert_eq!(Base64.decode("QUI=", Mode::Strict).unwrap(), b"AB");
        assert!(matches!(
            Base64.decode("QUI", Mode::Strict),
            Err(Bin2TextError::InvalidLength { actual: 3, .. })
        ));
        assert!(matches!(
            Base64.decode("Q===", Mode::Strict),
            Err(Bin2TextError::InvalidPadding { .. })
        ));
        assert!(matches!(
            Base64.decode("SGVs!G8=", Mode::Strict),
            Err(Bin2TextError::InvalidCharacter { char: '!', position: 4 })
        ));
    }

    #[test]
    fn test_base64_strict_rejects_trailing_bits() {
        assert_eq!(decode("QR=="), b"A");
        assert!(matches!(
            Base64.decode("QR==", Mode::Strict),
            Err(Bin2TextError::InvalidInput { .. })
        ));
        assert!(validate("QUJ=").is_err());
        assert_eq!(decode_strict("QQ==").unwrap(), b"A");
    }

    #[test]
    fn test_base64_lenient_whitespace() {
        assert_eq!(Base64.decode("SGVs\nbG8=", Mode::Lenient).unwrap(), b"Hello");
    }

    #[test]
    fn test_base64_empty() {
        assert_eq!(encode(b""), "");
        assert_eq!(decode(""), Vec::<u8>::new());
    }
}

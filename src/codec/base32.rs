//! RFC4648 Base32 (`A-Z2-7`, `=` padded).
//!
//! Input is packed five bytes at a time into eight 5-bit symbols. A short
//! final group emits only the symbols its bytes reach, then pads to eight.
//!
//! Decoding is lenient. The first `=` ends the data, symbols outside the
//! alphabet count as zero, and lowercase decodes like uppercase. The number
//! of bytes a group yields comes from how many symbols it holds, so a
//! symbol whose value is 31 is always data.

use data_encoding::BASE32;

use super::{util, Codec};
use crate::error::{Bin2TextError, LengthConstraint, Result};
use crate::types::{CaseSensitivity, CodecMeta, PaddingRule};

const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";
const SYMBOLS: &[u8] = ALPHABET.as_bytes();
static DECODE_TABLE: [u8; 128] = util::build_decode_table(SYMBOLS, true);

const PAD: char = '=';
const GROUP_BYTES: usize = 5;
const GROUP_SYMBOLS: usize = 8;

/// Padding emitted after a final group of 0..=5 bytes.
const PADDING: [usize; GROUP_BYTES + 1] = [0, 6, 4, 3, 1, 0];

pub fn encode(input: impl AsRef<[u8]>) -> String {
    let input = input.as_ref();
    let mut out = String::with_capacity(input.len().div_ceil(GROUP_BYTES) * GROUP_SYMBOLS);
    encode_into(&mut out, input);
    out
}

pub fn encode_into(out: &mut String, input: &[u8]) {
    BASE32.encode_append(input, out);
}

pub fn decode(input: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(input.len() * GROUP_BYTES / GROUP_SYMBOLS);
    decode_into(&mut out, input);
    out
}

pub fn decode_into<E: Extend<u8>>(out: &mut E, input: &str) {
    let mut group = [0u8; GROUP_SYMBOLS];
    let mut len = 0;

    for ch in input.chars() {
        if ch == PAD {
            break;
        }
        group[len] = util::lookup_or_zero(&DECODE_TABLE, ch);
        len += 1;
        if len == GROUP_SYMBOLS {
            flush_group(out, &group, len);
            len = 0;
        }
    }

    if len > 0 {
        group[len..].fill(0);
        flush_group(out, &group, len);
    }
}

pub fn decode_to_string(input: &str) -> String {
    String::from_utf8_lossy(&decode(input)).into_owned()
}

/// Emits the bytes covered by the first `len` symbols of `group`.
///
/// A lone symbol still yields one byte.
fn flush_group<E: Extend<u8>>(out: &mut E, group: &[u8; GROUP_SYMBOLS], len: usize) {
    let bits = group.iter().fold(0u64, |acc, &v| (acc << 5) | u64::from(v));
    let count = (len * 5 / 8).max(1);
    out.extend((0..count).map(|i| (bits >> (32 - 8 * i)) as u8));
}

/// Decodes padded Base32 of either case.
///
/// Besides alphabet, length and padding, the unused low bits of the last
/// data symbol must be zero, as the encoder leaves them.
pub fn decode_strict(input: &str) -> Result<Vec<u8>> {
    util::validate_symbols(input, &DECODE_TABLE, true)?;
    let len = input.len();
    if len % GROUP_SYMBOLS != 0 {
        return Err(Bin2TextError::invalid_length(LengthConstraint::MultipleOf(GROUP_SYMBOLS), len));
    }
    util::validate_trailing_padding(input, &PADDING)?;
    BASE32
        .decode(input.to_ascii_uppercase().as_bytes())
        .map_err(|e| Bin2TextError::invalid_input(e.to_string()))
}

pub fn validate(input: &str) -> Result<()> {
    decode_strict(input).map(|_| ())
}

pub struct Base32;

impl Codec for Base32 {
    fn meta(&self) -> CodecMeta {
        CodecMeta {
            name: "base32",
            aliases: &["b32"],
            alphabet: ALPHABET,
            bits_per_symbol: 5,
            padding: PaddingRule::Required,
            case_sensitivity: CaseSensitivity::Insensitive,
            description: "RFC4648 Base32 with padding",
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

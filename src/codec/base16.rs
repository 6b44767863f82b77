//! Base16 (hex) with an uppercase alphabet.
//!
//! Decoding accepts either case. A trailing odd symbol becomes the high
//! nibble of one last byte, and symbols outside `0-9A-Fa-f` count as zero.

use std::iter;

use data_encoding::{HEXUPPER, HEXUPPER_PERMISSIVE};

use super::{util, Codec};
use crate::error::{Bin2TextError, LengthConstraint, Result};
use crate::types::{CaseSensitivity, CodecMeta, PaddingRule};

const ALPHABET: &str = "0123456789ABCDEF";
const SYMBOLS: &[u8] = ALPHABET.as_bytes();
static DECODE_TABLE: [u8; 128] = util::build_decode_table(SYMBOLS, true);

pub fn encode(input: impl AsRef<[u8]>) -> String {
    let input = input.as_ref();
    let mut out = String::with_capacity(input.len() * 2);
    encode_into(&mut out, input);
    out
}

/// Appends the hex form of `input` to `out`.
pub fn encode_into(out: &mut String, input: &[u8]) {
    HEXUPPER.encode_append(input, out);
}

pub fn decode(input: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(input.len().div_ceil(2));
    decode_into(&mut out, input);
    out
}

pub fn decode_into<E: Extend<u8>>(out: &mut E, input: &str) {
    let mut symbols = input.chars().map(nibble);
    while let Some(high) = symbols.next() {
        let low = symbols.next().unwrap_or(0);
        out.extend(iter::once((high << 4) | low));
    }
}

pub fn decode_to_string(input: &str) -> String {
    String::from_utf8_lossy(&decode(input)).into_owned()
}

/// Decodes hex of either case, rejecting odd lengths and foreign symbols.
pub fn decode_strict(input: &str) -> Result<Vec<u8>> {
    util::validate_symbols(input, &DECODE_TABLE, false)?;
    let len = input.chars().count();
    if len % 2 != 0 {
        return Err(Bin2TextError::invalid_length(LengthConstraint::MultipleOf(2), len));
    }
    HEXUPPER_PERMISSIVE
        .decode(input.as_bytes())
        .map_err(|e| Bin2TextError::invalid_input(e.to_string()))
}

pub fn validate(input: &str) -> Result<()> {
    decode_strict(input).map(|_| ())
}

fn nibble(ch: char) -> u8 {
    util::lookup_or_zero(&DECODE_TABLE, ch)
}

pub struct Base16;

impl Codec for Base16 {
    fn meta(&self) -> CodecMeta {
        CodecMeta {
            name: "base16",
            aliases: &["hex", "b16"],
            alphabet: ALPHABET,
            bits_per_symbol: 4,
            padding: PaddingRule::None,
            case_sensitivity: CaseSensitivity::Insensitive,
            description: "RFC4648 Base16 (hex), uppercase output",
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

//! Base128: seven payload bits per symbol.
//!
//! Values 0..=93 map to the printable ASCII range `!`..=`~`. Printable ASCII
//! runs out there, so values 94..=127 continue at U+00C0 (`À`..=`á`).
//! The output is therefore not ASCII: those 34 symbols take two bytes each
//! in UTF-8 and will not survive a 7-bit channel.
//!
//! Bits are packed least significant first: each input byte is shifted in
//! above the bits already buffered, and symbols are taken from the bottom.
//! `n` bytes always encode to `ceil(8n / 7)` symbols.

use super::{util, Codec};
use crate::error::{Bin2TextError, LengthConstraint, Result};
use crate::types::{CaseSensitivity, CodecMeta, PaddingRule};

const ALPHABET: &str = concat!(
    "!\"#$%&'()*+,-./0123456789:;<=>?@ABCDEFGHIJKLMNOPQRSTUVWXYZ[\\]^_`abcdefghijklmnopqrstuvwxyz{|}~",
    "ÀÁÂÃÄÅÆÇÈÉÊËÌÍÎÏÐÑÒÓÔÕÖ×ØÙÚÛÜÝÞßàá",
);

const ASCII_FIRST: u8 = b'!';
const ASCII_COUNT: u8 = 94;
const LATIN1_FIRST: u8 = 0xC0;

static SYMBOLS: [char; 128] = build_symbols();

const fn build_symbols() -> [char; 128] {
    let mut symbols = ['\0'; 128];
    let mut value = 0;
    while value < 128 {
        symbols[value as usize] = if value < ASCII_COUNT {
            (ASCII_FIRST + value) as char
        } else {
            (LATIN1_FIRST + (value - ASCII_COUNT)) as char
        };
        value += 1;
    }
    symbols
}

fn symbol_value(ch: char) -> Option<u8> {
    let code = ch as u32;
    let ascii = u32::from(ASCII_FIRST)..u32::from(ASCII_FIRST + ASCII_COUNT);
    let latin1 = u32::from(LATIN1_FIRST)..u32::from(LATIN1_FIRST) + 128 - u32::from(ASCII_COUNT);
    if ascii.contains(&code) {
        Some((code - ascii.start) as u8)
    } else if latin1.contains(&code) {
        Some((code - latin1.start) as u8 + ASCII_COUNT)
    } else {
        None
    }
}

pub fn encode(input: impl AsRef<[u8]>) -> String {
    let input = input.as_ref();
    let mut out = String::with_capacity(encoded_len(input.len()) * 2);
    encode_into(&mut out, input);
    out
}

/// Number of symbols `len` bytes encode to.
pub fn encoded_len(len: usize) -> usize {
    (len * 8).div_ceil(7)
}

pub fn encode_into(out: &mut String, input: &[u8]) {
    let mut buffer = 0u32;
    let mut bits = 0u32;

    for &byte in input {
        buffer |= u32::from(byte) << bits;
        bits += 8;
        while bits >= 7 {
            out.push(SYMBOLS[(buffer & 0x7F) as usize]);
            buffer >>= 7;
            bits -= 7;
        }
    }

    if bits > 0 {
        out.push(SYMBOLS[(buffer & 0x7F) as usize]);
    }
}

pub fn decode(input: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(input.len() * 7 / 8 + 1);
    decode_into(&mut out, input);
    out
}

/// Symbols outside the alphabet decode as value 0.
///
/// Leftover bits after the last whole byte are flushed as one more byte
/// only when they are not all zero. The encoder pads its final symbol with
/// zero bits, so encoded data never yields a spurious trailing byte.
pub fn decode_into<E: Extend<u8>>(out: &mut E, input: &str) {
    let mut buffer = 0u32;
    let mut bits = 0u32;

    for ch in input.chars() {
        buffer |= u32::from(symbol_value(ch).unwrap_or(0)) << bits;
        bits += 7;
        while bits >= 8 {
            out.extend(std::iter::once(buffer as u8));
            buffer >>= 8;
            bits -= 8;
        }
    }

    if bits > 0 && buffer != 0 {
        out.extend(std::iter::once(buffer as u8));
    }
}

pub fn decode_to_string(input: &str) -> String {
    String::from_utf8_lossy(&decode(input)).into_owned()
}

/// Decodes only canonical input: known symbols, a possible length, and a
/// final symbol whose bits above the last whole byte are zero.
pub fn decode_strict(input: &str) -> Result<Vec<u8>> {
    let mut len = 0;
    for (pos, ch) in input.chars().enumerate() {
        if symbol_value(ch).is_none() {
            return Err(Bin2TextError::invalid_char(ch, pos));
        }
        len += 1;
    }
    if len % 8 == 1 {
        return Err(Bin2TextError::invalid_length(
            LengthConstraint::NotCongruent { modulus: 8, residue: 1 },
            len,
        ));
    }
    let decoded = decode(input);
    if encode(&decoded) != input {
        return Err(Bin2TextError::invalid_input(
            "final symbol carries bits beyond the last byte",
        ));
    }
    Ok(decoded)
}

pub fn validate(input: &str) -> Result<()> {
    decode_strict(input).map(|_| ())
}

pub struct Base128;

impl Codec for Base128 {
    fn meta(&self) -> CodecMeta {
        CodecMeta {
            name: "base128",
            aliases: &["b128"],
            alphabet: ALPHABET,
            bits_per_symbol: 7,
            padding: PaddingRule::None,
            case_sensitivity: CaseSensitivity::Sensitive,
            description: "7 bits per symbol; values 94-127 use Latin-1 letters, so output is not ASCII",
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

//! Literal vectors plus cross-checks against `data-encoding` and `base64`.

use base64::prelude::*;
use bin2text::{base128, base16, base32, base64 as b64, Codec, Mode, Registry};
use data_encoding::{BASE32, BASE64, HEXUPPER};

const HELLO: &str = "Hello, World!";

fn samples() -> Vec<Vec<u8>> {
    let mut out: Vec<Vec<u8>> = (0..=20u8).map(|n| (0..n).map(|i| i.wrapping_mul(37).wrapping_add(n)).collect()).collect();
    out.push((0..=255).collect());
    out.push(vec![0x00; 11]);
    out.push(vec![0xFF; 11]);
    out.push("Multi-byte characters: àáâãäåæçèé".as_bytes().to_vec());
    out.push("Unicode: 🐍🚀🌟🎉".as_bytes().to_vec());
    out
}

#[test]
fn test_base16_vectors() {
    assert_eq!(base16::encode(HELLO), "48656C6C6F2C20576F726C6421");
    assert_eq!(base16::encode([0x00_u8, 0x01, 0x02, 0xFF, 0xFE, 0xFD]), "000102FFFEFD");
    assert_eq!(base16::decode_to_string("48656C6C6F2C20576F726C6421"), HELLO);
}

#[test]
fn test_base64_vectors() {
    assert_eq!(b64::encode(HELLO), "SGVsbG8sIFdvcmxkIQ==");
    assert_eq!(b64::encode("A"), "QQ==");
    assert_eq!(b64::encode("AB"), "QUI=");
    assert_eq!(b64::encode("ABC"), "QUJD");
    assert_eq!(b64::decode("SGVsbG8sIFdvcmxkIQ=="), HELLO.as_bytes());
}

#[test]
fn test_base32_padding_table() {
    let expected = ["", "======", "====", "===", "=", ""];
    for len in 1..=5 {
        let encoded = base32::encode(vec![b'x'; len]);
        assert_eq!(encoded.len(), 8);
        let pad = encoded.len() - encoded.trim_end_matches('=').len();
        assert_eq!(&encoded[8 - pad..], expected[len], "length {}", len);
    }
}

#[test]
fn test_base32_round_trip_lengths() {
    for len in 0..=10 {
        let data: Vec<u8> = (0..len as u8).map(|i| 0xF0 ^ i).collect();
        assert_eq!(base32::decode(&base32::encode(&data)), data, "length {}", len);
    }
}

#[test]
fn test_matches_data_encoding() {
    for data in samples() {
        assert_eq!(base16::encode(&data), HEXUPPER.encode(&data));
        assert_eq!(base32::encode(&data), BASE32.encode(&data));
        assert_eq!(b64::encode(&data), BASE64.encode(&data));
    }
}

#[test]
fn test_matches_base64_crate() {
    for data in samples() {
        let reference = BASE64_STANDARD.encode(&data);
        assert_eq!(b64::encode(&data), reference);
        assert_eq!(b64::decode(&reference), data);
    }
}

#[test]
fn test_strict_accepts_reference_output() {
    let registry = Registry::global();
    for data in samples() {
        let cases = [
            ("base16", HEXUPPER.encode(&data)),
            ("base32", BASE32.encode(&data)),
            ("base64", BASE64.encode(&data)),
            ("base128", base128::encode(&data)),
        ];
        for (name, encoded) in cases {
            let codec = registry.get(name).unwrap();
            assert_eq!(codec.decode(&encoded, Mode::Strict).unwrap(), data, "{}", name);
        }
    }
}

#[test]
fn test_empty_everywhere() {
    for meta in Registry::global().list() {
        let codec = Registry::global().get(meta.name).unwrap();
        assert_eq!(codec.encode(&[]), "", "{}", meta.name);
        assert!(codec.decode("", Mode::Strict).unwrap().is_empty(), "{}", meta.name);
        assert!(codec.decode("", Mode::Lenient).unwrap().is_empty(), "{}", meta.name);
    }
}

#[test]
fn test_garbage_decodes_deterministically() {
    let garbage = "not valid at all! ~\u{1F40D}\0";
    for meta in Registry::global().list() {
        let codec = Registry::global().get(meta.name).unwrap();
        let first = codec.decode(garbage, Mode::Lenient).unwrap();
        let second = codec.decode(garbage, Mode::Lenient).unwrap();
        assert_eq!(first, second, "{}", meta.name);
        assert!(codec.decode(garbage, Mode::Strict).is_err(), "{}", meta.name);
    }
}

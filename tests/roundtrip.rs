use std::thread;

use bin2text::{base128, base16, base32, base64, Codec, Mode, Registry};
use proptest::prelude::*;

proptest! {
    #[test]
    fn base16_round_trip(data in prop::collection::vec(any::<u8>(), 0..64)) {
        let encoded = base16::encode(&data);
        prop_assert_eq!(encoded.len(), data.len() * 2);
        prop_assert_eq!(base16::decode(&encoded), data);
    }

    #[test]
    fn base32_round_trip(data in prop::collection::vec(any::<u8>(), 0..64)) {
        let encoded = base32::encode(&data);
        prop_assert_eq!(encoded.len() % 8, 0);
        prop_assert_eq!(base32::decode(&encoded), data);
    }

    #[test]
    fn base64_round_trip(data in prop::collection::vec(any::<u8>(), 0..64)) {
        let encoded = base64::encode(&data);
        prop_assert_eq!(encoded.len() % 4, 0);
        prop_assert_eq!(base64::decode(&encoded), data);
    }

    #[test]
    fn base128_round_trip(data in prop::collection::vec(any::<u8>(), 0..=32)) {
        let encoded = base128::encode(&data);
        prop_assert_eq!(encoded.chars().count(), (data.len() * 8).div_ceil(7));
        prop_assert_eq!(base128::decode(&encoded), data);
    }

    #[test]
    fn base32_lowercase_decodes_the_same(data in prop::collection::vec(any::<u8>(), 0..32)) {
        let encoded = base32::encode(&data);
        prop_assert_eq!(base32::decode(&encoded.to_lowercase()), data);
    }

    #[test]
    fn lenient_decode_never_panics(text in "\\PC{0,40}") {
        let _ = base16::decode(&text);
        let _ = base32::decode(&text);
        let _ = base64::decode(&text);
        let _ = base128::decode(&text);
    }

    #[test]
    fn decode_into_matches_decode(data in prop::collection::vec(any::<u8>(), 0..32)) {
        let encoded = base64::encode(&data);
        let mut sink = vec![0xEE_u8];
        base64::decode_into(&mut sink, &encoded);
        prop_assert_eq!(&sink[1..], &data[..]);
    }

    #[test]
    fn strict_accepts_only_what_encode_produces(text in "[!-~À-á]{0,12}") {
        if let Ok(bytes) = base128::decode_strict(&text) {
            prop_assert_eq!(base128::encode(&bytes), text);
        }
    }

    #[test]
    fn strict_base64_is_canonical(text in "[A-Za-z0-9+/]{2,3}={0,2}") {
        if let Ok(bytes) = base64::decode_strict(&text) {
            prop_assert_eq!(base64::encode(&bytes), text);
        }
    }
}

#[test]
fn codecs_are_shared_across_threads() {
    let registry = Registry::global();
    let data: Vec<u8> = (0..=255).collect();

    thread::scope(|scope| {
        for worker in 0..8 {
            let data = &data;
            scope.spawn(move || {
                for meta in registry.list() {
                    let codec = registry.get(meta.name).unwrap();
                    let slice = &data[worker..];
                    let encoded = codec.encode(slice);
                    assert_eq!(codec.decode(&encoded, Mode::Strict).unwrap(), slice, "{}", meta.name);
                    assert_eq!(codec.decode_lenient(&encoded), slice, "{}", meta.name);
                }
            });
        }
    });
}

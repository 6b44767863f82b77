pub mod base128;
pub mod base16;
pub mod base32;
pub mod base64;
pub mod registry;
pub(crate) mod util;

pub use registry::Registry;

use crate::error::Result;
use crate::types::{CodecMeta, Mode};

/// A binary-to-text codec usable through the [`Registry`].
///
/// Implementors supply the lenient and strict decoders; the mode dispatch
/// lives in [`Codec::decode`].
pub trait Codec: Send + Sync {
    fn meta(&self) -> CodecMeta;
    fn encode(&self, input: &[u8]) -> String;
    fn decode_lenient(&self, input: &str) -> Vec<u8>;

    /// Decodes only input this codec's encoder could have produced.
    fn decode_strict(&self, input: &str) -> Result<Vec<u8>>;

    fn validate(&self, input: &str) -> Result<()> {
        self.decode_strict(input).map(|_| ())
    }

    fn decode(&self, input: &str, mode: Mode) -> Result<Vec<u8>> {
        let cleaned = util::clean_for_mode(input, mode);
        match mode {
            Mode::Lenient => Ok(self.decode_lenient(&cleaned)),
            Mode::Strict => self.decode_strict(&cleaned).inspect_err(|e| {
                log::debug!("{}: strict decode rejected input: {}", self.name(), e);
            }),
        }
    }

    /// Decodes to text, replacing byte sequences that are not UTF-8.
    fn decode_to_string(&self, input: &str, mode: Mode) -> Result<String> {
        let bytes = self.decode(input, mode)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn name(&self) -> &'static str {
        self.meta().name
    }
}

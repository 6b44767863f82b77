//! Binary-to-text codecs: Base16, Base32, Base64 and a 7-bit Base128 scheme.
//!
//! Every codec is available two ways. The free functions in
//! [`codec::base16`], [`codec::base32`], [`codec::base64`] and
//! [`codec::base128`] are infallible and lenient: any byte sequence encodes,
//! and any text decodes to *something*. The [`codec::Codec`] trait wraps them
//! with metadata and an opt-in [`Mode::Strict`] that rejects malformed input.

pub mod codec;
pub mod error;
pub mod types;

pub use codec::{base128, base16, base32, base64, Codec, Registry};
pub use error::{Bin2TextError, Result};
pub use types::{CaseSensitivity, CodecMeta, Context, InputSource, Mode, OutputDest, PaddingRule};

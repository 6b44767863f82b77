use serde::Serialize;

use crate::io::read_text;
use bin2text::error::Result;
use bin2text::types::{Context, InputSource, Mode};

#[derive(Debug, Serialize)]
pub struct DecodeResult {
    pub codec: String,
    pub mode: Mode,
    pub bytes: usize,
    pub hex: String,
    pub text: Option<String>,
}

pub fn run_decode(ctx: &Context, codec_name: &str, input: &InputSource, mode: Mode) -> Result<Vec<u8>> {
    let codec = ctx.registry.get(codec_name)?;
    let text = read_text(input)?;
    codec.decode(&text, mode)
}

pub fn run_decode_json(ctx: &Context, codec_name: &str, input: &InputSource, mode: Mode) -> Result<DecodeResult> {
    let codec = ctx.registry.get(codec_name)?;
    let text = read_text(input)?;
    let decoded = codec.decode(&text, mode)?;

    Ok(DecodeResult {
        codec: codec.name().to_string(),
        mode,
        bytes: decoded.len(),
        hex: bin2text::base16::encode(&decoded),
        text: String::from_utf8(decoded).ok(),
    })
}

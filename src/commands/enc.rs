use serde::Serialize;

use crate::io::read_input;
use bin2text::error::Result;
use bin2text::types::{Context, InputSource};

#[derive(Debug, Serialize)]
pub struct EncodeResult {
    pub codec: String,
    pub input_bytes: usize,
    pub encoded: String,
}

pub fn run_encode(ctx: &Context, codec_name: &str, input: &InputSource) -> Result<String> {
    let codec = ctx.registry.get(codec_name)?;
    let data = read_input(input)?;
    Ok(codec.encode(&data))
}

pub fn run_encode_json(ctx: &Context, codec_name: &str, input: &InputSource) -> Result<EncodeResult> {
    let codec = ctx.registry.get(codec_name)?;
    let data = read_input(input)?;
    Ok(EncodeResult {
        codec: codec.name().to_string(),
        input_bytes: data.len(),
        encoded: codec.encode(&data),
    })
}

pub fn run_encode_all(ctx: &Context, input: &InputSource) -> Result<Vec<EncodeResult>> {
    let data = read_input(input)?;
    ctx.registry
        .list()
        .into_iter()
        .map(|meta| {
            let codec = ctx.registry.get(meta.name)?;
            Ok(EncodeResult {
                codec: meta.name.to_string(),
                input_bytes: data.len(),
                encoded: codec.encode(&data),
            })
        })
        .collect()
}

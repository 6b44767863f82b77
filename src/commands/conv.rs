use serde::Serialize;

use crate::io::read_text;
use bin2text::error::Result;
use bin2text::types::{Context, InputSource, Mode};

#[derive(Debug, Serialize)]
pub struct ConvertResult {
    pub from_codec: String,
    pub to_codec: String,
    pub input: String,
    pub output: String,
}

pub fn run_conv_json(
    ctx: &Context,
    from_codec: &str,
    to_codec: &str,
    input: &InputSource,
    mode: Mode,
) -> Result<ConvertResult> {
    let decoder = ctx.registry.get(from_codec)?;
    let encoder = ctx.registry.get(to_codec)?;

    let text = read_text(input)?;
    let decoded = decoder.decode(&text, mode)?;
    let output = encoder.encode(&decoded);
    log::debug!("converted {} -> {} ({} bytes)", decoder.name(), encoder.name(), decoded.len());

    Ok(ConvertResult {
        from_codec: decoder.name().to_string(),
        to_codec: encoder.name().to_string(),
        input: text,
        output,
    })
}

pub fn run_conv(ctx: &Context, from_codec: &str, to_codec: &str, input: &InputSource, mode: Mode) -> Result<String> {
    run_conv_json(ctx, from_codec, to_codec, input, mode).map(|r| r.output)
}

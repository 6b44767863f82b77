use serde::Serialize;

use crate::io::read_text;
use bin2text::error::Result;
use bin2text::types::{Context, InputSource};

#[derive(Debug, Serialize)]
pub struct VerifyResult {
    pub valid: bool,
    pub codec: String,
    pub error: Option<String>,
}

pub fn run_verify(ctx: &Context, codec_name: &str, input: &InputSource) -> Result<VerifyResult> {
    let codec = ctx.registry.get(codec_name)?;
    let text = read_text(input)?;

    let error = codec.validate(&text).err().map(|e| e.to_string());
    Ok(VerifyResult {
        valid: error.is_none(),
        codec: codec.name().to_string(),
        error,
    })
}

use serde::Serialize;
use std::path::PathBuf;

use crate::codec::Registry;

pub struct Context {
    pub registry: &'static Registry,
}

impl Context {
    pub fn new(registry: &'static Registry) -> Self {
        Self { registry }
    }
}

impl Default for Context {
    fn default() -> Self {
        Self {
            registry: Registry::global(),
        }
    }
}

/// How [`Codec::decode`](crate::Codec::decode) treats malformed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Strip ASCII whitespace, then decode without ever failing.
    #[default]
    Lenient,
    /// Reject anything the encoder could not have produced.
    Strict,
}

#[derive(Debug, Clone)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
    Literal(Vec<u8>),
}

impl InputSource {
    pub fn parse(s: &str) -> Self {
        match s {
            "-" => InputSource::Stdin,
            s if s.starts_with('@') => InputSource::File(PathBuf::from(&s[1..])),
            s => {
                if Self::looks_like_path(s) {
                    log::warn!("treating '{}' as literal data; use @{} to read from file", s, s);
                }
                InputSource::Literal(s.as_bytes().to_vec())
            }
        }
    }

    fn looks_like_path(s: &str) -> bool {
        if s.contains('/') || s.contains('\\') {
            return true;
        }
        let extensions = [".txt", ".bin", ".dat", ".b64", ".hex"];
        extensions.iter().any(|ext| s.ends_with(ext))
    }
}

#[derive(Debug, Clone)]
pub enum OutputDest {
    Stdout,
    File(PathBuf),
}

impl OutputDest {
    pub fn parse(s: &str) -> Self {
        match s {
            "-" => OutputDest::Stdout,
            s if s.starts_with('@') => OutputDest::File(PathBuf::from(&s[1..])),
            s => OutputDest::File(PathBuf::from(s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PaddingRule {
    None,
    Required,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CaseSensitivity {
    Sensitive,
    Insensitive,
}

#[derive(Debug, Clone, Serialize)]
pub struct CodecMeta {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub alphabet: &'static str,
    pub bits_per_symbol: u8,
    pub padding: PaddingRule,
    pub case_sensitivity: CaseSensitivity,
    pub description: &'static str,
}

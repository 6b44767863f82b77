use std::collections::HashMap;
use std::sync::OnceLock;

use super::Codec;
use crate::error::{Bin2TextError, Result};
use crate::types::CodecMeta;

macro_rules! register_codecs {
    ($($module:ident :: $codec:ident),* $(,)?) => {
        fn build_registry() -> Registry {
            let codecs: Vec<Box<dyn Codec>> = vec![
                $(Box::new(super::$module::$codec)),*
            ];

            let mut name_map = HashMap::new();
            for (idx, codec) in codecs.iter().enumerate() {
                name_map.insert(codec.name(), idx);
                for alias in codec.meta().aliases {
                    if let Some(existing) = name_map.insert(*alias, idx) {
                        panic!(
                            "Duplicate codec alias '{}' for codecs '{}' and '{}'",
                            alias, codecs[existing].name(), codec.name()
                        );
                    }
                }
            }

            log::debug!("registry built with {} codecs", codecs.len());
            Registry { codecs, name_map }
        }

        #[cfg(test)]
        fn expected_codec_names() -> Vec<&'static str> {
            vec![
                $(super::$module::$codec.name(),)*
            ]
        }
    };
}

register_codecs! {
    base16::Base16,
    base32::Base32,
    base64::Base64,
    base128::Base128,
}

static REGISTRY: OnceLock<Registry> = OnceLock::new();

pub struct Registry {
    codecs: Vec<Box<dyn Codec>>,
    name_map: HashMap<&'static str, usize>,
}

impl Registry {
    fn new() -> Self {
        build_registry()
    }

    pub fn global() -> &'static Registry {
        REGISTRY.get_or_init(Registry::new)
    }

    pub fn get(&self, name: &str) -> Result<&dyn Codec> {
        let name_lower = name.to_lowercase();
        let codec = self
            .name_map
            .get(name_lower.as_str())
            .map(|&idx| self.codecs[idx].as_ref())
            .ok_or_else(|| Bin2TextError::unsupported_codec(name))?;
        log::debug!("resolved codec '{}' to {}", name, codec.name());
        Ok(codec)
    }

    pub fn list(&self) -> Vec<CodecMeta> {
        self.codecs.iter().map(|c| c.meta()).collect()
    }
}

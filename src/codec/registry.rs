use std::collections::HashMap;
use std::sync::OnceLock;

use super::Codec;
use crate::error::{BintextError, Result};
use crate::types::{CodecMeta, EncodingKind};

// Registration order must follow the declaration order of `EncodingKind`.
macro_rules! register_codecs {
    ($($codec:ident),* $(,)?) => {
        fn build_registry() -> Registry {
            let codecs: Vec<Box<dyn Codec>> = vec![
                $(Box::new(super::$codec)),*
            ];

            let mut name_map = HashMap::new();
            for (idx, codec) in codecs.iter().enumerate() {
                let meta = codec.meta();
                debug_assert_eq!(meta.kind as usize, idx, "{} registered out of order", meta.name);
                name_map.insert(meta.name, idx);
                for alias in meta.aliases {
                    name_map.insert(*alias, idx);
                }
            }

            tracing::trace!(codecs = codecs.len(), names = name_map.len(), "codec registry built");
            Registry { codecs, name_map }
        }
    };
}

register_codecs! {
    Base02,
    Base08,
    Base10,
    Base16,
    Base32,
    Base64,
    Base85,
    Base91,
}

static REGISTRY: OnceLock<Registry> = OnceLock::new();

/// One shared instance per encoding, addressable by kind, name or alias.
pub struct Registry {
    codecs: Vec<Box<dyn Codec>>,
    name_map: HashMap<&'static str, usize>,
}

impl Registry {
    pub fn global() -> &'static Registry {
        REGISTRY.get_or_init(build_registry)
    }

    /// Looks up a codec by canonical name or alias, ignoring case.
    pub fn get(&self, name: &str) -> Result<&dyn Codec> {
        let name_lower = name.to_lowercase();
        self.name_map
            .get(name_lower.as_str())
            .map(|&idx| self.codecs[idx].as_ref())
            .ok_or_else(|| BintextError::unsupported_codec(name))
    }

    pub fn codec(&self, kind: EncodingKind) -> &dyn Codec {
        self.codecs[kind as usize].as_ref()
    }

    pub fn list(&self) -> Vec<CodecMeta> {
        self.codecs.iter().map(|c| c.meta()).collect()
    }
}

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::codec::{Codec, Registry};
use crate::error::BintextError;

pub struct Context {
    pub registry: &'static Registry,
}

impl Default for Context {
    fn default() -> Self {
        Self {
            registry: Registry::global(),
        }
    }
}

/// The encodings this crate implements, in registry order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EncodingKind {
    Base02,
    Base08,
    Base10,
    Base16,
    Base32,
    #[default]
    Base64,
    Base85,
    Base91,
}

impl EncodingKind {
    pub const ALL: [EncodingKind; 8] = [
        EncodingKind::Base02,
        EncodingKind::Base08,
        EncodingKind::Base10,
        EncodingKind::Base16,
        EncodingKind::Base32,
        EncodingKind::Base64,
        EncodingKind::Base85,
        EncodingKind::Base91,
    ];

    pub fn name(self) -> &'static str {
        match self {
            EncodingKind::Base02 => "base02",
            EncodingKind::Base08 => "base08",
            EncodingKind::Base10 => "base10",
            EncodingKind::Base16 => "base16",
            EncodingKind::Base32 => "base32",
            EncodingKind::Base64 => "base64",
            EncodingKind::Base85 => "base85",
            EncodingKind::Base91 => "base91",
        }
    }

    /// The shared default instance for this encoding.
    pub fn codec(self) -> &'static dyn Codec {
        Registry::global().codec(self)
    }
}

impl fmt::Display for EncodingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EncodingKind {
    type Err = BintextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Registry::global().get(s).map(|codec| codec.meta().kind)
    }
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
                    tracing::warn!(input = s, "treating input as literal data; use @{} to read from file", s);
                }
                InputSource::Literal(s.as_bytes().to_vec())
            }
        }
    }

    fn looks_like_path(s: &str) -> bool {
        if s.contains('/') || s.contains('\\') {
            return true;
        }
        let extensions = [".txt", ".bin", ".dat", ".b32", ".b64", ".b85", ".b91"];
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

#[derive(Debug, Clone, Serialize)]
pub struct CodecMeta {
    pub kind: EncodingKind,
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub alphabet: &'static str,
    /// Characters dropped on decode in addition to NUL, TAB, LF, CR and SPACE.
    pub skippable: &'static str,
    pub description: &'static str,
}

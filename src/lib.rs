pub mod codec;
pub mod error;
pub mod ext;
pub mod files;
pub mod types;

pub use codec::{Base02, Base08, Base10, Base16, Base32, Base64, Base85, Base91, Codec, Registry};
pub use error::{BintextError, ExitCode, Result};
pub use types::{CodecMeta, Context, EncodingKind, InputSource, OutputDest};

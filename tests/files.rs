use std::io::ErrorKind;
use std::path::PathBuf;

use bintext::ext;
use bintext::{BintextError, Codec, EncodingKind};
use rand::Rng;

/// Unique path under the system temp dir, removed on drop.
struct Scratch(PathBuf);

impl Scratch {
    fn new(suffix: &str) -> Self {
        let id: u64 = rand::thread_rng().gen();
        Scratch(std::env::temp_dir().join(format!("bintext-{:016x}{}", id, suffix)))
    }
}

impl Drop for Scratch {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.0);
    }
}

#[test]
fn test_file_roundtrip_every_kind() {
    let src = Scratch::new(".bin");
    let data: Vec<u8> = (0..10_000u32).map(|i| (i * 31 % 251) as u8).collect();
    std::fs::write(&src.0, &data).unwrap();

    for kind in EncodingKind::ALL {
        let encoded = Scratch::new(".txt");
        let decoded = Scratch::new(".bin");
        let codec = kind.codec();

        assert!(codec.encode_file_to(&src.0, &encoded.0, 76, false).unwrap());
        assert!(codec.decode_file_to(&encoded.0, &decoded.0, false).unwrap());
        assert_eq!(std::fs::read(&decoded.0).unwrap(), data, "{}", kind);
    }
}

#[test]
fn test_encode_file_matches_in_memory() {
    let src = Scratch::new(".bin");
    std::fs::write(&src.0, b"Test").unwrap();

    assert_eq!(ext::encode_file(&src.0, EncodingKind::Base32).unwrap(), "KRSXG5A=");
    assert_eq!(EncodingKind::Base85.codec().encode_file(&src.0, 0).unwrap(), "<+U,m");
}

#[test]
fn test_decode_file() {
    let src = Scratch::new(".b64");
    std::fs::write(&src.0, "VGVz\ndA==\n").unwrap();
    assert_eq!(ext::decode_file(&src.0, EncodingKind::Base64).unwrap(), b"Test");
}

#[test]
fn test_missing_source() {
    let src = Scratch::new(".missing");
    let err = EncodingKind::Base16.codec().encode_file(&src.0, 0).unwrap_err();
    assert!(matches!(err, BintextError::FileNotFound { .. }));
}

#[test]
fn test_missing_destination_directory() {
    let src = Scratch::new(".bin");
    std::fs::write(&src.0, b"Test").unwrap();
    let dest = Scratch::new("-dir").0.join("out.txt");

    let err = EncodingKind::Base16
        .codec()
        .encode_file_to(&src.0, &dest, 0, true)
        .unwrap_err();
    assert!(matches!(err, BintextError::DirectoryNotFound { .. }));
}

#[test]
fn test_existing_destination_needs_overwrite() {
    let src = Scratch::new(".bin");
    let dest = Scratch::new(".txt");
    std::fs::write(&src.0, b"Test").unwrap();
    std::fs::write(&dest.0, b"previous").unwrap();
    let codec = EncodingKind::Base16.codec();

    let err = codec.encode_file_to(&src.0, &dest.0, 0, false).unwrap_err();
    assert!(matches!(err, BintextError::Io(ref e) if e.kind() == ErrorKind::AlreadyExists));
    assert_eq!(std::fs::read(&dest.0).unwrap(), b"previous");

    assert!(codec.encode_file_to(&src.0, &dest.0, 0, true).unwrap());
    assert_eq!(std::fs::read_to_string(&dest.0).unwrap(), "54657374");
}

#[test]
fn test_invalid_content_is_decoding_fault() {
    let src = Scratch::new(".txt");
    std::fs::write(&src.0, "KRSX!5A=").unwrap();
    let err = EncodingKind::Base32.codec().decode_file(&src.0).unwrap_err();
    assert!(err.is_decoding_fault());
}

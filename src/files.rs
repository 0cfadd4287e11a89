//! File payloads for [`Codec`]: read the whole source, write the whole
//! destination, with existence checks done before any data moves.

use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use crate::codec::{into_text, Codec};
use crate::codec::framing::buffer_capacity;
use crate::error::{BintextError, Result};

/// Opens `path` for reading with a buffer sized to the file.
pub fn open_source(path: &Path) -> Result<BufReader<File>> {
    if path.as_os_str().is_empty() {
        return Err(BintextError::invalid_argument("source path is empty"));
    }
    if !path.is_file() {
        return Err(BintextError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let file = File::open(path)?;
    let capacity = buffer_capacity(file.metadata()?.len());
    tracing::debug!(path = %path.display(), capacity, "opened source file");
    Ok(BufReader::with_capacity(capacity, file))
}

/// Creates `path` for writing. The parent directory must already exist;
/// an existing file is replaced only when `overwrite` is set.
pub fn create_destination(path: &Path, overwrite: bool) -> Result<File> {
    if path.as_os_str().is_empty() {
        return Err(BintextError::invalid_argument("destination path is empty"));
    }
    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    if !parent.is_dir() {
        return Err(BintextError::DirectoryNotFound {
            path: parent.to_path_buf(),
        });
    }

    let mut options = OpenOptions::new();
    options.write(true);
    if overwrite {
        options.create(true).truncate(true);
    } else {
        options.create_new(true);
    }
    let file = options.open(path)?;
    tracing::debug!(path = %path.display(), overwrite, "created destination file");
    Ok(file)
}

pub fn encode_file<C: Codec + ?Sized>(codec: &C, path: &Path, line_length: usize) -> Result<String> {
    let mut reader = open_source(path)?;
    let mut encoded = Vec::<u8>::new();
    codec.encode_stream(&mut reader, &mut encoded, line_length)?;
    into_text(encoded)
}

/// Encodes `src` into `dest` and reports whether `dest` exists afterwards.
pub fn encode_file_to<C: Codec + ?Sized>(
    codec: &C,
    src: &Path,
    dest: &Path,
    line_length: usize,
    overwrite: bool,
) -> Result<bool> {
    let mut reader = open_source(src)?;
    let mut writer = BufWriter::new(create_destination(dest, overwrite)?);
    codec.encode_stream(&mut reader, &mut writer, line_length)?;
    writer.flush()?;
    let written = writer.get_ref().metadata()?.len();
    tracing::debug!(codec = codec.name(), src = %src.display(), dest = %dest.display(), bytes = written, "encoded file");
    Ok(dest.exists())
}

pub fn decode_file<C: Codec + ?Sized>(codec: &C, path: &Path) -> Result<Vec<u8>> {
    let mut reader = open_source(path)?;
    let mut decoded = Vec::<u8>::new();
    codec.decode_stream(&mut reader, &mut decoded)?;
    Ok(decoded)
}

/// Decodes `src` into `dest` and reports whether `dest` exists afterwards.
pub fn decode_file_to<C: Codec + ?Sized>(codec: &C, src: &Path, dest: &Path, overwrite: bool) -> Result<bool> {
    let mut reader = open_source(src)?;
    let mut writer = BufWriter::new(create_destination(dest, overwrite)?);
    codec.decode_stream(&mut reader, &mut writer)?;
    writer.flush()?;
    let written = writer.get_ref().metadata()?.len();
    tracing::debug!(codec = codec.name(), src = %src.display(), dest = %dest.display(), bytes = written, "decoded file");
    Ok(dest.exists())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("bintext-files-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_open_source_rejects_empty_path() {
        assert!(matches!(
            open_source(Path::new("")).unwrap_err(),
            BintextError::InvalidArgument { .. }
        ));
    }

    #[test]
    fn test_open_source_rejects_directory() {
        let dir = std::env::temp_dir();
        assert!(matches!(
            open_source(&dir).unwrap_err(),
            BintextError::FileNotFound { .. }
        ));
    }

    #[test]
    fn test_create_destination_requires_parent() {
        let path = scratch("missing-dir").join("out.txt");
        assert!(matches!(
            create_destination(&path, true).unwrap_err(),
            BintextError::DirectoryNotFound { .. }
        ));
    }

    #[test]
    fn test_create_destination_respects_overwrite() {
        let path = scratch("existing");
        std::fs::write(&path, b"old").unwrap();

        let err = create_destination(&path, false).unwrap_err();
        assert!(matches!(err, BintextError::Io(ref e) if e.kind() == std::io::ErrorKind::AlreadyExists));

        let mut file = create_destination(&path, true).unwrap();
        file.write_all(b"new").unwrap();
        drop(file);
        assert_eq!(std::fs::read(&path).unwrap(), b"new");
        std::fs::remove_file(&path).unwrap();
    }
}

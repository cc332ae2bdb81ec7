//! Upload ingestion: turns an image file into a gateway-ready payload.
//!
//! The MIME type is sniffed from magic bytes and passed through to the
//! gateway untouched; PNG, JPEG, WEBP, and GIF are recognized.

use std::path::{Path, PathBuf};

use base64::{Engine as _, engine::general_purpose::STANDARD};
use thiserror::Error;

use crate::gateway::ImagePayload;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to read image at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("unrecognized image format at {path} (expected PNG, JPEG, WEBP, or GIF)")]
    UnrecognizedFormat { path: PathBuf },
}

/// Reads an image file and produces a base64 payload with its sniffed MIME
/// type.
pub fn read_image<P: AsRef<Path>>(path: P) -> Result<ImagePayload, IngestError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mime_type = sniff_mime(&bytes).ok_or_else(|| {
        tracing::warn!(path = %path.display(), "upload has no known image signature");
        IngestError::UnrecognizedFormat {
            path: path.to_path_buf(),
        }
    })?;

    Ok(ImagePayload {
        data: STANDARD.encode(&bytes),
        mime_type: mime_type.to_string(),
    })
}

/// Identifies the image format from its leading magic bytes.
fn sniff_mime(bytes: &[u8]) -> Option<&'static str> {
    if bytes.starts_with(b"\x89PNG\r\n\x1a\n") {
        Some("image/png")
    } else if bytes.starts_with(b"\xff\xd8\xff") {
        Some("image/jpeg")
    } else if bytes.len() >= 12 && bytes.starts_with(b"RIFF") && &bytes[8..12] == b"WEBP" {
        Some("image/webp")
    } else if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
        Some("image/gif")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(bytes: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(bytes).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn reads_png_payload() {
        let bytes = b"\x89PNG\r\n\x1a\nrest-of-image".to_vec();
        let file = write_temp(&bytes);

        let payload = read_image(file.path()).unwrap();
        assert_eq!(payload.mime_type, "image/png");
        assert_eq!(STANDARD.decode(&payload.data).unwrap(), bytes);
    }

    #[test]
    fn sniffs_jpeg_and_webp_and_gif() {
        assert_eq!(sniff_mime(b"\xff\xd8\xff\xe0rest"), Some("image/jpeg"));
        assert_eq!(sniff_mime(b"RIFF\x00\x00\x00\x00WEBPVP8 "), Some("image/webp"));
        assert_eq!(sniff_mime(b"GIF89a..."), Some("image/gif"));
    }

    #[test]
    fn rejects_unknown_signature() {
        let file = write_temp(b"not an image");
        assert!(matches!(
            read_image(file.path()),
            Err(IngestError::UnrecognizedFormat { .. })
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.png");
        assert!(matches!(read_image(&path), Err(IngestError::Io { .. })));
    }

    #[test]
    fn truncated_riff_header_is_not_webp() {
        assert_eq!(sniff_mime(b"RIFF"), None);
    }
}

//! Media-kind detection for uploaded files.

use std::path::Path;

/// The kinds of file the document picker accepts.
///
/// Only images get a local preview and the OCR sub-step; PDF and
/// word-processor documents are stored as-is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Pdf,
    WordDocument,
}

impl MediaKind {
    /// Whether this kind is eligible for preview and text recognition.
    pub fn is_image(self) -> bool {
        matches!(self, MediaKind::Image)
    }
}

/// Detects the media kind of a selected file.
///
/// Content sniffing (magic bytes) is preferred; the filename extension is
/// the fallback for formats whose content is not recognised, such as legacy
/// `.doc` containers. Returns `None` for anything outside the accepted set.
pub fn detect(bytes: &[u8], filename: &str) -> Option<MediaKind> {
    if let Some(kind) = infer::get(bytes) {
        let mime = kind.mime_type();
        if mime.starts_with("image/") {
            return Some(MediaKind::Image);
        }
        if mime == "application/pdf" {
            return Some(MediaKind::Pdf);
        }
        if mime == "application/msword"
            || mime == "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        {
            return Some(MediaKind::WordDocument);
        }
        // infer recognises docx containers as generic zip; fall through to
        // the extension check rather than rejecting outright.
    }

    match extension(filename)?.as_str() {
        "png" | "jpg" | "jpeg" | "gif" | "webp" | "bmp" | "tif" | "tiff" => Some(MediaKind::Image),
        "pdf" => Some(MediaKind::Pdf),
        "doc" | "docx" => Some(MediaKind::WordDocument),
        _ => None,
    }
}

/// Best-effort MIME type for a detected image, used for preview URLs.
pub(crate) fn image_mime(bytes: &[u8], filename: &str) -> &'static str {
    if let Some(kind) = infer::get(bytes) {
        if kind.mime_type().starts_with("image/") {
            return match kind.mime_type() {
                "image/png" => "image/png",
                "image/jpeg" => "image/jpeg",
                "image/gif" => "image/gif",
                "image/webp" => "image/webp",
                "image/bmp" => "image/bmp",
                "image/tiff" => "image/tiff",
                _ => "application/octet-stream",
            };
        }
    }
    match extension(filename).as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("bmp") => "image/bmp",
        Some("tif") | Some("tiff") => "image/tiff",
        _ => "application/octet-stream",
    }
}

fn extension(filename: &str) -> Option<String> {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Minimal valid PNG signature.
    const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
    // %PDF-
    const PDF_MAGIC: &[u8] = &[0x25, 0x50, 0x44, 0x46, 0x2D, 0x31, 0x2E, 0x34];

    #[test]
    fn test_detects_png_from_content() {
        assert_eq!(detect(PNG_MAGIC, "scan"), Some(MediaKind::Image));
    }

    #[test]
    fn test_detects_pdf_from_content() {
        assert_eq!(detect(PDF_MAGIC, "report"), Some(MediaKind::Pdf));
    }

    #[test]
    fn test_falls_back_to_extension_for_unrecognised_content() {
        assert_eq!(detect(b"plain bytes", "letter.docx"), Some(MediaKind::WordDocument));
        assert_eq!(detect(b"plain bytes", "photo.JPG"), Some(MediaKind::Image));
    }

    #[test]
    fn test_rejects_unaccepted_kinds() {
        assert_eq!(detect(b"#!/bin/sh", "script.sh"), None);
        assert_eq!(detect(b"plain text", "notes.txt"), None);
        assert_eq!(detect(b"no extension at all", "notes"), None);
    }

    #[test]
    fn test_image_mime_prefers_content_over_extension() {
        assert_eq!(image_mime(PNG_MAGIC, "misleading.jpg"), "image/png");
        assert_eq!(image_mime(b"??", "photo.jpeg"), "image/jpeg");
    }
}

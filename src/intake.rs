//! Image intake: turning an uploaded byte blob into something the vision
//! service can consume.
//!
//! The format is sniffed from the bytes, never trusted from the filename.
//! Accepted encodings are JPEG, PNG and WebP; everything else is rejected
//! before any remote call happens. A successfully-intaken image always
//! carries a JPEG/base64 rendition ready for transmission.

use base64::{engine::general_purpose, Engine as _};
use image::{DynamicImage, GenericImageView, ImageFormat, ImageOutputFormat};

use crate::error::DecodeError;

/// JPEG quality used for the transport rendition sent to the vision service.
const TRANSPORT_JPEG_QUALITY: u8 = 85;

/// Raster encodings accepted at upload.
const SUPPORTED_FORMATS: &[ImageFormat] = &[ImageFormat::Jpeg, ImageFormat::Png, ImageFormat::WebP];

/// One uploaded brand image, decoded and ready for both display metadata
/// and transmission.
///
/// The source bytes are kept untouched; the transport rendition is a
/// re-encoded copy.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    bytes: Vec<u8>,
    bitmap: DynamicImage,
    format: ImageFormat,
    transport_base64: String,
}

impl UploadedImage {
    /// Decode an upload into an [`UploadedImage`].
    ///
    /// Fails with [`DecodeError`] when the bytes are not a valid image of an
    /// accepted encoding.
    pub fn decode(bytes: Vec<u8>) -> Result<Self, DecodeError> {
        let format =
            image::guess_format(&bytes).map_err(|_| DecodeError::UnsupportedFormat)?;

        if !SUPPORTED_FORMATS.contains(&format) {
            return Err(DecodeError::UnsupportedFormat);
        }

        let bitmap = image::load_from_memory_with_format(&bytes, format)
            .map_err(|e| DecodeError::Invalid(e.to_string()))?;

        let mut jpeg_bytes = Vec::new();
        bitmap
            .write_to(
                &mut std::io::Cursor::new(&mut jpeg_bytes),
                ImageOutputFormat::Jpeg(TRANSPORT_JPEG_QUALITY),
            )
            .map_err(|e| DecodeError::Reencode(e.to_string()))?;
        let transport_base64 = general_purpose::STANDARD.encode(&jpeg_bytes);

        Ok(Self {
            bytes,
            bitmap,
            format,
            transport_base64,
        })
    }

    /// Width of the decoded bitmap in pixels.
    pub fn width(&self) -> u32 {
        self.bitmap.width()
    }

    /// Height of the decoded bitmap in pixels.
    pub fn height(&self) -> u32 {
        self.bitmap.height()
    }

    /// Lower-case name of the detected source encoding (`jpeg`, `png`, `webp`).
    pub fn format_name(&self) -> &'static str {
        match self.format {
            ImageFormat::Jpeg => "jpeg",
            ImageFormat::Png => "png",
            ImageFormat::WebP => "webp",
            // decode() only admits the three formats above
            _ => "unknown",
        }
    }

    /// The untouched source bytes.
    pub fn source_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// JPEG/base64 rendition for the vision service's `inline_data` part.
    pub fn transport_base64(&self) -> &str {
        &self.transport_base64
    }
}

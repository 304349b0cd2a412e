use image::codecs::jpeg::JpegEncoder;
use image::ExtendedColorType;

use crate::shared::frame::Frame;

/// JPEG quality for streamed and preview frames.
const JPEG_QUALITY: u8 = 80;

/// Encodes a frame to a JPEG byte buffer for transport.
pub fn encode_jpeg(frame: &Frame) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    let mut buf = Vec::new();
    let mut encoder = JpegEncoder::new_with_quality(&mut buf, JPEG_QUALITY);
    encoder.encode(
        frame.data(),
        frame.width(),
        frame.height(),
        ExtendedColorType::Rgb8,
    )?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_produces_jpeg_magic() {
        let frame = Frame::new(vec![128u8; 8 * 8 * 3], 8, 8, 0);
        let bytes = encode_jpeg(&frame).unwrap();
        assert_eq!(&bytes[..2], &[0xFF, 0xD8], "missing JPEG SOI marker");
        assert_eq!(&bytes[bytes.len() - 2..], &[0xFF, 0xD9], "missing EOI");
    }

    #[test]
    fn test_encode_roundtrips_dimensions() {
        let frame = Frame::new(vec![200u8; 20 * 10 * 3], 20, 10, 0);
        let bytes = encode_jpeg(&frame).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!(decoded.width(), 20);
        assert_eq!(decoded.height(), 10);
    }
}

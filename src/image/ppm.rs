//! Binary pixel-map (`P6`) output: one ASCII header line
//! `"P6 {width} {height} 255\n"` followed by the raw interleaved bytes.
//!
//! The body is the buffer as-is, so a 4-channel image keeps its alpha bytes.
use super::{ImageView, PixelBuffer};
use std::io::{self, Write};

pub const MAX_CHANNEL_VALUE: u8 = 255;

pub fn header(width: usize, height: usize) -> String {
    format!("P6 {width} {height} {MAX_CHANNEL_VALUE}\n")
}

/// Write header and body to `out`.
pub fn write_ppm<W: Write>(out: &mut W, buffer: &PixelBuffer) -> io::Result<()> {
    out.write_all(header(buffer.width(), buffer.height()).as_bytes())?;
    out.write_all(buffer.as_bytes())?;
    out.flush()
}

/// Serialize into a fresh byte vector.
pub fn encode_ppm(buffer: &PixelBuffer) -> Vec<u8> {
    let head = header(buffer.width(), buffer.height());
    let mut out = Vec::with_capacity(head.len() + buffer.as_bytes().len());
    out.extend_from_slice(head.as_bytes());
    out.extend_from_slice(buffer.as_bytes());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_format() {
        assert_eq!(header(4, 2), "P6 4 2 255\n");
        assert_eq!(header(1920, 1080), "P6 1920 1080 255\n");
    }

    #[test]
    fn writer_and_encoder_agree() {
        let img = PixelBuffer::filled(3, 2, &[1, 2, 3]).unwrap();
        let mut written = Vec::new();
        write_ppm(&mut written, &img).unwrap();
        assert_eq!(written, encode_ppm(&img));
        assert_eq!(written.len(), "P6 3 2 255\n".len() + 18);
        assert_eq!(&written[11..14], &[1, 2, 3]);
    }
}

use std::io::Write;

use flate2::{write::ZlibEncoder, Compression};
use tracing::debug;

use crate::{
    chunk::encode_chunk,
    consts::{IDAT, IEND, IHDR, SIGNATURE},
    error::PngError,
    header::PngHeader,
};

/// An encoder for 8bit RGBA PNG images.
///
/// The encoder takes filtered scanline data, each row being one filter type byte followed by
/// `width * 4` bytes of pixel data, and produces a complete PNG file: the signature followed by
/// one IHDR, one IDAT and one IEND chunk. The scanlines are zlib compressed at maximum effort.
#[allow(clippy::module_name_repetitions)]
#[derive(Clone, Copy, Debug)]
pub struct PngEncoder {
    header: PngHeader,
    bitmap_len: usize,
}

impl PngEncoder {
    /// Generates a [`PngEncoder`] for an image of the given dimensions.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the width or height is `0` or the scanline data would not fit in memory.
    pub fn new(width: u32, height: u32) -> Result<Self, PngError> {
        let header = PngHeader::new(width, height);
        header.validate()?;
        let bitmap_len = header.bitmap_len()?;
        Ok(Self {header, bitmap_len})
    }
    /// The header that will be written as the IHDR chunk.
    #[must_use]
    pub const fn header(&self) -> PngHeader {
        self.header
    }
    /// The exact length [`PngEncoder::encode_scanlines`] expects.
    #[must_use]
    pub const fn bitmap_len(&self) -> usize {
        self.bitmap_len
    }
    /// Compresses the scanlines and assembles the PNG byte stream.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the input length does not match the dimensions, compression fails or the
    /// compressed data is too large for a single chunk.
    pub fn encode_scanlines(&self, scanlines: &[u8]) -> Result<Vec<u8>, PngError> {
        if scanlines.len() != self.bitmap_len {
            return Err(PngError::InputHeaderMismatch {expected: self.bitmap_len, actual: scanlines.len()});
        }
        let compressed = compress(scanlines)?;
        debug!(raw = scanlines.len(), compressed = compressed.len(), "compressed scanlines");
        let mut output = Vec::with_capacity(SIGNATURE.len() + 3 * 12 + 13 + compressed.len());
        output.extend_from_slice(&SIGNATURE);
        push_chunk(&mut output, IHDR, &self.header.to_u8())?;
        push_chunk(&mut output, IDAT, &compressed)?;
        push_chunk(&mut output, IEND, &[])?;
        Ok(output)
    }
}

// appends one encoded chunk and returns its length on the wire
fn push_chunk(output: &mut Vec<u8>, tag: [u8; 4], payload: &[u8]) -> Result<usize, PngError> {
    let chunk = encode_chunk(tag, payload)?;
    debug!(tag = %String::from_utf8_lossy(&tag), payload = payload.len(), "assembled chunk");
    output.extend_from_slice(&chunk);
    Ok(chunk.len())
}

fn compress(input: &[u8]) -> Result<Vec<u8>, PngError> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(input)?;
    Ok(encoder.finish()?)
}

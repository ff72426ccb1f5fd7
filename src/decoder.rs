use std::io::Read;

use flate2::read::ZlibDecoder;

use crate::{
    chunk::Chunk,
    consts::{IDAT, IEND, IHDR, NO_FILTER, SIGNATURE},
    error::PngError,
    header::PngHeader,
    pixel::Pixel,
    utils::{array_from_input, is_identical},
};

/// A decoded image: the header and the RGBA pixel data with the filter bytes removed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DecodedPng {
    header: PngHeader,
    pixels: Vec<u8>,
}

impl DecodedPng {
    #[must_use]
    pub const fn header(&self) -> PngHeader {
        self.header
    }
    /// 4 byte pixels (red, green, blue, alpha), row by row.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
    /// The pixel at column `x` of row `y`, or `None` if outside the image.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Pixel> {
        if x >= self.header.width() || y >= self.header.height() {return None;}
        let index = (y as usize * self.header.width() as usize + x as usize) * 4;
        Some(Pixel::from_input(&self.pixels, index))
    }
}

/// A decoder for the subset of PNG this crate writes.
///
/// Accepts 8bit RGBA, non-interlaced images whose scanlines all use filter type `0`. Every chunk CRC
/// is checked. Ancillary chunks are skipped, multiple IDAT chunks are joined in order.
#[allow(clippy::module_name_repetitions)]
pub struct PngDecoder;

impl PngDecoder {
    /// Decodes a complete PNG byte stream.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the following is true:
    ///
    /// 1: The input does not start with the PNG signature.\
    /// 2: A chunk is truncated or has a wrong CRC.\
    /// 3: The first chunk is not a valid IHDR for 8bit non-interlaced RGBA.\
    /// 4: An unknown critical chunk appears, the stream does not end with an empty IEND or bytes follow it.\
    /// 5: The inflated data does not match the dimensions or a scanline uses a filter.
    pub fn decode(input: &[u8]) -> Result<DecodedPng, PngError> {
        if input.len() < SIGNATURE.len() {
            let mut found = [0; 8];
            found[..input.len()].copy_from_slice(input);
            return Err(PngError::InvalidSignature(found));
        }
        let signature: [u8; 8] = array_from_input(input, 0);
        if !is_identical(&signature, &SIGNATURE) {return Err(PngError::InvalidSignature(signature));}
        let (ihdr, mut offset) = Chunk::read(input, SIGNATURE.len())?;
        if ihdr.tag() != IHDR {return Err(PngError::MissingHeader);}
        let header = PngHeader::extract(ihdr.payload())?;
        let mut compressed = Vec::new();
        loop {
            if offset == input.len() {return Err(PngError::MissingEnd);}
            let (chunk, next) = Chunk::read(input, offset)?;
            offset = next;
            match chunk.tag() {
                IDAT => compressed.extend_from_slice(chunk.payload()),
                IEND if !chunk.payload().is_empty() => return Err(PngError::UnexpectedChunk(IEND)),
                IEND => break,
                _ if chunk.is_ancillary() => {},
                tag => return Err(PngError::UnexpectedChunk(tag)),
            }
        }
        if offset != input.len() {return Err(PngError::TrailingData(input.len() - offset));}
        let expected = header.bitmap_len()?;
        // one byte past the expected length is enough to detect oversized data
        let limit = u64::try_from(expected).map_or(u64::MAX, |expected| expected.saturating_add(1));
        let mut scanlines = Vec::new();
        ZlibDecoder::new(compressed.as_slice()).take(limit).read_to_end(&mut scanlines)?;
        if scanlines.len() != expected {
            return Err(PngError::InputHeaderMismatch {expected, actual: scanlines.len()});
        }
        let pixels = unfilter(&scanlines, header.row_len()?)?;
        Ok(DecodedPng {header, pixels})
    }
}

// strips the leading filter byte of every row. only filter type 0 (None) is accepted.
fn unfilter(scanlines: &[u8], row_len: usize) -> Result<Vec<u8>, PngError> {
    let mut pixels = Vec::with_capacity(scanlines.len() - scanlines.len() / row_len);
    for row in scanlines.chunks_exact(row_len) {
        if row[0] != NO_FILTER {return Err(PngError::UnsupportedFilterType(row[0]));}
        pixels.extend_from_slice(&row[1..]);
    }
    Ok(pixels)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use flate2::{write::ZlibEncoder, Compression};

    use crate::{
        chunk::encode_chunk,
        consts::{IDAT, IEND, IHDR, SIGNATURE},
        encoder::PngEncoder,
        error::PngError,
        header::PngHeader,
        pixel::Pixel,
    };
    use super::PngDecoder;
    fn two_by_one() -> Vec<u8> {
        PngEncoder::new(2, 1).unwrap().encode_scanlines(&[0, 255, 0, 0, 255, 0, 0, 255, 128]).unwrap()
    }
    #[test]
    fn good_decode() {
        let decoded = PngDecoder::decode(&two_by_one()).unwrap();
        assert_eq!(decoded.header(), PngHeader::new(2, 1));
        assert_eq!(decoded.pixels(), [255, 0, 0, 255, 0, 0, 255, 128]);
        assert_eq!(decoded.pixel(0, 0), Some(Pixel::new(255, 0, 0, 255)));
        assert_eq!(decoded.pixel(1, 0), Some(Pixel::new(0, 0, 255, 128)));
        assert_eq!(decoded.pixel(2, 0), None);
        assert_eq!(decoded.pixel(0, 1), None);
    }
    #[test]
    fn good_skips_ancillary_chunks() {
        let mut input = two_by_one();
        let iend_start = input.len() - 12;
        let text = encode_chunk(*b"tEXt", b"Title\0placeholder").unwrap();
        input.splice(iend_start..iend_start, text);
        assert!(PngDecoder::decode(&input).is_ok());
    }
    #[test]
    fn bad_signature() {
        let mut input = two_by_one();
        input[1] = b'J';
        assert!(matches!(PngDecoder::decode(&input), Err(PngError::InvalidSignature(_))));
        assert!(matches!(PngDecoder::decode(&[0x89, b'P']), Err(PngError::InvalidSignature(_))));
    }
    #[test]
    fn bad_missing_header() {
        let mut input = SIGNATURE.to_vec();
        input.extend(encode_chunk(IEND, &[]).unwrap());
        assert!(matches!(PngDecoder::decode(&input), Err(PngError::MissingHeader)));
    }
    #[test]
    fn bad_missing_end() {
        let input = two_by_one();
        let without_end = &input[..input.len() - 12];
        assert!(matches!(PngDecoder::decode(without_end), Err(PngError::MissingEnd)));
    }
    #[test]
    fn bad_unexpected_chunk() {
        let mut input = two_by_one();
        let iend_start = input.len() - 12;
        input.splice(iend_start..iend_start, encode_chunk(IHDR, &PngHeader::new(2, 1).to_u8()).unwrap());
        assert!(matches!(PngDecoder::decode(&input), Err(PngError::UnexpectedChunk(IHDR))));
    }
    #[test]
    fn bad_trailing_data() {
        let mut input = two_by_one();
        input.extend_from_slice(b"garbage after end");
        assert!(matches!(PngDecoder::decode(&input), Err(PngError::TrailingData(17))));
    }
    #[test]
    fn bad_non_empty_end() {
        let mut input = two_by_one();
        input.truncate(input.len() - 12);
        input.extend(encode_chunk(IEND, b"junk").unwrap());
        assert!(matches!(PngDecoder::decode(&input), Err(PngError::UnexpectedChunk(IEND))));
    }
    #[test]
    fn bad_oversized_data() {
        let mut input = SIGNATURE.to_vec();
        input.extend(encode_chunk(IHDR, &PngHeader::new(1, 1).to_u8()).unwrap());
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::best());
        encoder.write_all(&vec![0_u8; 1 << 20]).unwrap();
        input.extend(encode_chunk(IDAT, &encoder.finish().unwrap()).unwrap());
        input.extend(encode_chunk(IEND, &[]).unwrap());
        // inflation stops one byte past the 5 bytes a 1x1 image needs
        assert!(matches!(PngDecoder::decode(&input),
                         Err(PngError::InputHeaderMismatch {expected: 5, actual: 6})));
    }
    #[test]
    fn bad_filter_type() {
        let input = PngEncoder::new(1, 2).unwrap().encode_scanlines(&[0, 1, 2, 3, 4, 1, 1, 2, 3, 4]).unwrap();
        assert!(matches!(PngDecoder::decode(&input), Err(PngError::UnsupportedFilterType(1))));
    }
    #[test]
    fn bad_data_length() {
        let mut input = SIGNATURE.to_vec();
        input.extend(encode_chunk(IHDR, &PngHeader::new(2, 2).to_u8()).unwrap());
        let short = PngEncoder::new(2, 1).unwrap().encode_scanlines(&[0; 9]).unwrap();
        let (idat, _) = crate::chunk::Chunk::read(&short, 33).unwrap();
        input.extend(encode_chunk(IDAT, idat.payload()).unwrap());
        input.extend(encode_chunk(IEND, &[]).unwrap());
        assert!(matches!(PngDecoder::decode(&input),
                         Err(PngError::InputHeaderMismatch {expected: 18, actual: 9})));
    }
}

use crate::{
    consts::{BIT_DEPTH, COLOR_TYPE_RGBA, HEADER_SIZE},
    error::PngError,
    utils::array_from_input,
};

/// The IHDR data of a PNG image.
///
/// Only the layout written by this crate is representable: 8bit RGBA, deflate compression,
/// adaptive filtering and no interlacing.
#[allow(clippy::module_name_repetitions)]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PngHeader {
    width: u32,
    height: u32,
    bit_depth: u8,
    color_type: u8,
    compression_method: u8,
    filter_method: u8,
    interlace_method: u8,
}

impl PngHeader {
    /// Creates an 8bit RGBA header. Dimensions are not checked, see [`PngHeader::validate`].
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            bit_depth: BIT_DEPTH,
            color_type: COLOR_TYPE_RGBA,
            compression_method: 0,
            filter_method: 0,
            interlace_method: 0,
        }
    }
    /// The width of a PNG image in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }
    /// The height of a PNG image in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }
    /// Bits per channel. Always `8`.
    #[must_use]
    pub const fn bit_depth(&self) -> u8 {
        self.bit_depth
    }
    /// The colour type. Always `6` (truecolour with alpha).
    #[must_use]
    pub const fn color_type(&self) -> u8 {
        self.color_type
    }
    #[must_use]
    pub const fn compression_method(&self) -> u8 {
        self.compression_method
    }
    #[must_use]
    pub const fn filter_method(&self) -> u8 {
        self.filter_method
    }
    #[must_use]
    pub const fn interlace_method(&self) -> u8 {
        self.interlace_method
    }
    /// Convert the header to the 13 byte IHDR payload.
    #[must_use]
    pub const fn to_u8(self) -> [u8; HEADER_SIZE] {
        let mut output = [0; HEADER_SIZE];
        let width = self.width.to_be_bytes();
        output[0] = width[0];
        output[1] = width[1];
        output[2] = width[2];
        output[3] = width[3];
        let height = self.height.to_be_bytes();
        output[4] = height[0];
        output[5] = height[1];
        output[6] = height[2];
        output[7] = height[3];
        output[8] = self.bit_depth;
        output[9] = self.color_type;
        output[10] = self.compression_method;
        output[11] = self.filter_method;
        output[12] = self.interlace_method;
        output
    }
    /// Parses and validates an IHDR payload.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the payload is not `13` bytes, the width or height is `0`, the image is too
    /// large for this target or any of the remaining fields differ from 8bit non-interlaced RGBA.
    pub fn extract(input: &[u8]) -> Result<Self, PngError> {
        if input.len() != HEADER_SIZE {return Err(PngError::BadHeaderSize(input.len()));}
        let width = u32::from_be_bytes(array_from_input(input, 0));
        let height = u32::from_be_bytes(array_from_input(input, 4));
        let header = Self {
            width,
            height,
            bit_depth: input[8],
            color_type: input[9],
            compression_method: input[10],
            filter_method: input[11],
            interlace_method: input[12],
        };
        header.validate()?;
        Ok(header)
    }
    /// Checks the dimensions and the fixed fields.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the width or height is `0`, the scanline data would overflow `usize` or a
    /// fixed field holds an unsupported value.
    pub fn validate(&self) -> Result<(), PngError> {
        if self.width == 0 || self.height == 0 {return Err(PngError::InvalidWidthHeight(self.width, self.height));}
        if self.bit_depth != BIT_DEPTH {return Err(PngError::InvalidBitDepth(self.bit_depth));}
        if self.color_type != COLOR_TYPE_RGBA {return Err(PngError::InvalidColorType(self.color_type));}
        if self.compression_method != 0 {return Err(PngError::InvalidCompressionMethod(self.compression_method));}
        if self.filter_method != 0 {return Err(PngError::InvalidFilterMethod(self.filter_method));}
        if self.interlace_method != 0 {return Err(PngError::InvalidInterlaceMethod(self.interlace_method));}
        self.bitmap_len().map(|_| ())
    }
    /// Bytes in one scanline including the leading filter byte.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the length does not fit in `usize`.
    pub fn row_len(&self) -> Result<usize, PngError> {
        usize::try_from(self.width)
            .ok()
            .and_then(|width| width.checked_mul(4))
            .and_then(|bytes| bytes.checked_add(1))
            .ok_or(PngError::ImageTooLarge(self.width, self.height))
    }
    /// Bytes of filtered scanline data for the whole image (the IDAT data before compression).
    ///
    /// # Errors
    ///
    /// Will return `Err` if the length does not fit in `usize`.
    pub fn bitmap_len(&self) -> Result<usize, PngError> {
        let row_len = self.row_len()?;
        usize::try_from(self.height)
            .ok()
            .and_then(|height| height.checked_mul(row_len))
            .ok_or(PngError::ImageTooLarge(self.width, self.height))
    }
}

#[cfg(test)]
mod tests {
    use crate::{error::PngError, utils::is_identical};
    use super::PngHeader;
    #[test]
    const fn infallible_new() {
        let header = PngHeader::new(2, 4);
        assert!(header.width() == 2);
        assert!(header.height() == 4);
        assert!(header.bit_depth() == 8);
        assert!(header.color_type() == 6);
        assert!(header.compression_method() == 0);
        assert!(header.filter_method() == 0);
        assert!(header.interlace_method() == 0);
    }
    #[test]
    const fn infallible_to_u8() {
        let header = PngHeader::new(192, 512);
        assert!(is_identical(&header.to_u8(), &[0, 0, 0, 192, // width
                                                0, 0, 2, 0,   // height
                                                8,            // bit depth
                                                6,            // colour type
                                                0,            // compression method
                                                0,            // filter method
                                                0])           // interlace method
        );
    }
    #[test]
    fn good_extract() {
        let input = [0, 0, 0, 2,              // width
                     0, 0, 0, 4,              // height
                     8, 6, 0, 0, 0];          // depth, colour type, methods
        let header = PngHeader::extract(&input).unwrap();
        assert_eq!(header, PngHeader::new(2, 4));
        assert_eq!(header.row_len().unwrap(), 9);
        assert_eq!(header.bitmap_len().unwrap(), 36);
    }
    #[test]
    fn bad_header_size() {
        let header = PngHeader::extract(&[0, 0, 0, 2, 0, 0, 0, 4, 8, 6, 0, 0]);
        assert!(matches!(header, Err(PngError::BadHeaderSize(12))));
    }
    #[test]
    fn bad_width_height() {
        let input = [0, 0, 0, 0,              // width (incorrect)
                     0, 0, 0, 0,              // height (incorrect)
                     8, 6, 0, 0, 0];
        assert!(matches!(PngHeader::extract(&input), Err(PngError::InvalidWidthHeight(0, 0))));
    }
    #[test]
    fn bad_bit_depth() {
        let input = [0, 0, 0, 2, 0, 0, 0, 4,
                     16,                      // bit depth (unsupported)
                     6, 0, 0, 0];
        assert!(matches!(PngHeader::extract(&input), Err(PngError::InvalidBitDepth(16))));
    }
    #[test]
    fn bad_color_type() {
        let input = [0, 0, 0, 2, 0, 0, 0, 4, 8,
                     2,                       // colour type (truecolour without alpha)
                     0, 0, 0];
        assert!(matches!(PngHeader::extract(&input), Err(PngError::InvalidColorType(2))));
    }
    #[test]
    fn bad_methods() {
        let compression = [0, 0, 0, 2, 0, 0, 0, 4, 8, 6, 1, 0, 0];
        assert!(matches!(PngHeader::extract(&compression), Err(PngError::InvalidCompressionMethod(1))));
        let filter = [0, 0, 0, 2, 0, 0, 0, 4, 8, 6, 0, 1, 0];
        assert!(matches!(PngHeader::extract(&filter), Err(PngError::InvalidFilterMethod(1))));
        let interlace = [0, 0, 0, 2, 0, 0, 0, 4, 8, 6, 0, 0, 1];
        assert!(matches!(PngHeader::extract(&interlace), Err(PngError::InvalidInterlaceMethod(1))));
    }
}

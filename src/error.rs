use thiserror::Error;

/// The possible errors when encoding, decoding or writing PNG files.
#[allow(clippy::module_name_repetitions)]
#[derive(Debug, Error)]
pub enum PngError {
    /// Creating the output directory or writing the file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The width or height is `0`. Shows the encountered values.
    #[error("Width or height cannot be 0: detected {0} width and {1} height")]
    InvalidWidthHeight(u32, u32),
    /// The bitmap for the given width and height would not fit in memory. Shows width and height.
    #[error("Image of {0} width and {1} height is too large to encode on this target")]
    ImageTooLarge(u32, u32),
    /// The scanline data does not match the header dimensions. Shows expected and actual size in bytes.
    #[error("Expected {expected} bytes of scanline data but found {actual} bytes")]
    InputHeaderMismatch { expected: usize, actual: usize },
    /// A chunk payload exceeds the largest length a PNG chunk may declare. Shows the payload size.
    #[error("Chunk payload of {0} bytes exceeds the PNG maximum of 2147483647 bytes")]
    ChunkTooLarge(usize),
    /// The first 8 bytes are not the PNG signature. Shows the detected bytes.
    #[error("Invalid PNG signature: {0:?}")]
    InvalidSignature([u8; 8]),
    /// A chunk runs past the end of the input. Shows the offset the chunk starts at.
    #[error("Chunk starting at byte {0} is truncated")]
    TruncatedChunk(usize),
    /// A chunk declares a length above the `2^31 - 1` bytes PNG allows. Shows the chunk offset and the length.
    #[error("Chunk starting at byte {offset} declares an invalid length of {length} bytes")]
    InvalidChunkLength { offset: usize, length: u32 },
    /// The stored CRC of a chunk does not match its tag and payload.
    #[error("CRC mismatch in {} chunk: stored {stored:#010x}, computed {computed:#010x}", String::from_utf8_lossy(.tag))]
    CrcMismatch { tag: [u8; 4], stored: u32, computed: u32 },
    /// The IHDR payload is not `13` bytes. Shows the size of the payload.
    #[error("Header size must be 13 bytes, detected header input of {0} bytes")]
    BadHeaderSize(usize),
    /// Only a bit depth of `8` is supported. Shows the encountered value.
    #[error("Invalid bit depth: {0}")]
    InvalidBitDepth(u8),
    /// Only colour type `6` (truecolour with alpha) is supported. Shows the encountered value.
    #[error("Invalid colour type: {0}")]
    InvalidColorType(u8),
    /// The compression method must be `0` (deflate). Shows the encountered value.
    #[error("Invalid compression method: {0}")]
    InvalidCompressionMethod(u8),
    /// The filter method must be `0` (adaptive). Shows the encountered value.
    #[error("Invalid filter method: {0}")]
    InvalidFilterMethod(u8),
    /// Only non-interlaced images (`0`) are supported. Shows the encountered value.
    #[error("Invalid interlace method: {0}")]
    InvalidInterlaceMethod(u8),
    /// The first chunk is not IHDR.
    #[error("First chunk must be IHDR")]
    MissingHeader,
    /// The stream ended without an IEND chunk.
    #[error("Stream ended without an IEND chunk")]
    MissingEnd,
    /// Bytes follow the IEND chunk. Shows the amount of trailing bytes.
    #[error("Found {0} bytes after the IEND chunk")]
    TrailingData(usize),
    /// An unknown critical chunk, a misplaced IHDR or a non-empty IEND was found. Shows the chunk tag.
    #[error("Unexpected chunk: {}", String::from_utf8_lossy(.0))]
    UnexpectedChunk([u8; 4]),
    /// A scanline uses a filter other than `0` (None). Shows the filter type.
    #[error("Unsupported scanline filter type: {0}")]
    UnsupportedFilterType(u8),
}

use crate::{
    consts::MAX_CHUNK_LEN,
    error::PngError,
    utils::{array_from_input, chunk_crc},
};

/// Wraps a payload in a PNG chunk: big-endian length, tag, payload and the CRC-32 of tag and payload.
///
/// The returned bytes are always `12 + payload.len()` long. An empty payload is valid (IEND).
///
/// # Errors
///
/// Will return `Err` if the payload is longer than the `2^31 - 1` bytes a chunk length may declare.
pub fn encode_chunk(tag: [u8; 4], payload: &[u8]) -> Result<Vec<u8>, PngError> {
    if payload.len() > MAX_CHUNK_LEN {return Err(PngError::ChunkTooLarge(payload.len()));}
    #[allow(clippy::cast_possible_truncation)] // checked against MAX_CHUNK_LEN above
    let length = payload.len() as u32;
    let mut output = Vec::with_capacity(payload.len() + 12);
    output.extend_from_slice(&length.to_be_bytes());
    output.extend_from_slice(&tag);
    output.extend_from_slice(payload);
    output.extend_from_slice(&chunk_crc(tag, payload).to_be_bytes());
    Ok(output)
}

/// A chunk read back from a PNG byte stream. The payload borrows from the input.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Chunk<'a> {
    tag: [u8; 4],
    payload: &'a [u8],
    crc: u32,
}

impl<'a> Chunk<'a> {
    /// Reads the chunk starting at `offset` and returns it with the offset of the following chunk.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the declared length is above `2^31 - 1`, the chunk does not fit in the input
    /// or its stored CRC is wrong.
    pub fn read(input: &'a [u8], offset: usize) -> Result<(Self, usize), PngError> {
        let truncated = PngError::TruncatedChunk(offset);
        if input.len().saturating_sub(offset) < 12 {return Err(truncated);}
        let declared = u32::from_be_bytes(array_from_input(input, offset));
        let length = declared as usize;
        if length > MAX_CHUNK_LEN {return Err(PngError::InvalidChunkLength {offset, length: declared});}
        let tag: [u8; 4] = array_from_input(input, offset + 4);
        let start = offset + 8;
        let end = start + length;
        if input.len() < end + 4 {return Err(truncated);}
        let payload = &input[start..end];
        let crc = u32::from_be_bytes(array_from_input(input, end));
        let computed = chunk_crc(tag, payload);
        if crc != computed {return Err(PngError::CrcMismatch {tag, stored: crc, computed});}
        Ok((Self {tag, payload, crc}, end + 4))
    }
    #[must_use]
    pub const fn tag(&self) -> [u8; 4] {
        self.tag
    }
    #[must_use]
    pub const fn payload(&self) -> &'a [u8] {
        self.payload
    }
    #[must_use]
    pub const fn crc(&self) -> u32 {
        self.crc
    }
    /// Ancillary chunks have a lowercase first letter and may be skipped by a decoder.
    #[must_use]
    pub const fn is_ancillary(&self) -> bool {
        self.tag[0] & 0x20 != 0
    }
}

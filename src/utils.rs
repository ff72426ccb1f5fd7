use flate2::Crc;

pub const fn is_identical(first: &[u8], second: &[u8]) -> bool {
    if first.len() != second.len() {return false;}
    let mut index = 0;
    while index != first.len() {
        if first[index] != second[index] {return false;}
        index += 1;
    }
    true
}

// panics if input_index + N > input.len()
pub const fn array_from_input<const N: usize>(input: &[u8], mut input_index: usize) -> [u8; N] {
    let mut output = [0; N];
    let mut output_index = 0;
    while output_index != N {
        output[output_index] = input[input_index];
        output_index += 1;
        input_index += 1;
    }
    output
}

// CRC-32 (IEEE) over tag followed by payload, as stored at the end of every chunk
pub fn chunk_crc(tag: [u8; 4], payload: &[u8]) -> u32 {
    let mut crc = Crc::new();
    crc.update(&tag);
    crc.update(payload);
    crc.sum()
}

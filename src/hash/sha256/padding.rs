//! Message padding and block parsing
//!
//! Converts an arbitrary byte sequence into the ordered sequence of
//! 512-bit blocks consumed by the compression function. The padded length
//! is computed up front and allocated once; no per-byte growth.
//!
//! Layout of the padded message:
//! - the message bytes
//! - a single `0x80` byte (the appended `1` bit)
//! - zero bytes until the total bit length is 448 mod 512
//! - the original bit length as a 64-bit big-endian integer
//!
//! The bit length is carried as a `u64`; inputs longer than 2^61 bytes are
//! out of scope.

/// Number of bytes in one block.
pub const BLOCK_BYTES: usize = 64;

/// Number of 32-bit words in one block.
pub const BLOCK_WORDS: usize = 16;

/// Pads `message` and splits it into 16-word blocks, big-endian word
/// assembly, in message order.
///
/// Total over all inputs: the empty message yields exactly one block.
pub fn pad_and_split(message: &[u8]) -> Vec<[u32; BLOCK_WORDS]> {
    let bit_len = (message.len() as u64) << 3;

    // Message + 0x80 marker + 8-byte length, rounded up to a block.
    let padded_len = (message.len() + 1 + 8).div_ceil(BLOCK_BYTES) * BLOCK_BYTES;

    let mut padded = vec![0u8; padded_len];
    padded[..message.len()].copy_from_slice(message);
    padded[message.len()] = 0x80;
    padded[padded_len - 8..].copy_from_slice(&bit_len.to_be_bytes());

    padded
        .chunks_exact(BLOCK_BYTES)
        .map(|chunk| {
            let mut block = [0u32; BLOCK_WORDS];

            for (word, bytes) in block.iter_mut().zip(chunk.chunks_exact(4)) {
                *word = u32::from_be_bytes(bytes.try_into().unwrap());
            }

            block
        })
        .collect()
}

use filehash::hash::sha256::padding::{BLOCK_BYTES, BLOCK_WORDS, pad_and_split};

fn padded_bytes(message: &[u8]) -> Vec<u8> {
    pad_and_split(message)
        .into_iter()
        .flat_map(|block| block.into_iter().flat_map(u32::to_be_bytes))
        .collect()
}

// -------------------------------------------------------
// 1. STRUCTURAL INVARIANTS OVER MANY LENGTHS
// -------------------------------------------------------

#[test]
fn padding_bit_length_is_multiple_of_512() {
    for len in 0..=300 {
        let message = vec![0xabu8; len];
        let blocks = pad_and_split(&message);

        assert!(!blocks.is_empty());
        assert_eq!((blocks.len() * BLOCK_WORDS * 32) % 512, 0);
    }
}

#[test]
fn padding_block_count_matches_formula() {
    for len in 0..=300 {
        let message = vec![0u8; len];
        let blocks = pad_and_split(&message);

        let expected = (8 * len as u64 + 65).div_ceil(512) as usize;
        assert_eq!(blocks.len(), expected, "Wrong block count at length {}", len);
    }
}

#[test]
fn padding_layout_marker_zero_fill_and_length_field() {
    for len in 0..=200 {
        let message: Vec<u8> = (0..len).map(|i| i as u8).collect();
        let padded = padded_bytes(&message);

        assert_eq!(&padded[..len], &message[..]);
        assert_eq!(padded[len], 0x80);

        let zero_fill = &padded[len + 1..padded.len() - 8];
        assert!(zero_fill.iter().all(|&b| b == 0));

        let length_field = u64::from_be_bytes(padded[padded.len() - 8..].try_into().unwrap());
        assert_eq!(length_field, 8 * len as u64);
    }
}

// -------------------------------------------------------
// 2. WORD ASSEMBLY
// -------------------------------------------------------

#[test]
fn padding_words_are_big_endian() {
    let blocks = pad_and_split(&[0x01, 0x02, 0x03, 0x04]);

    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0][0], 0x01020304);
    // The marker byte lands in the most significant position of word 1.
    assert_eq!(blocks[0][1], 0x80000000);
}

#[test]
fn padding_empty_message_is_one_block() {
    let blocks = pad_and_split(&[]);

    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0][0], 0x80000000);
    assert_eq!(blocks[0][15], 0);
}

// -------------------------------------------------------
// 3. THE 55/56-BYTE SPILL BOUNDARY
// -------------------------------------------------------

#[test]
fn padding_55_bytes_stays_in_one_block() {
    let blocks = pad_and_split(&[0u8; 55]);

    assert_eq!(blocks.len(), 1);
}

#[test]
fn padding_56_bytes_spills_into_two_blocks() {
    let blocks = pad_and_split(&[0u8; 56]);

    assert_eq!(blocks.len(), 2);

    // The whole length field sits at the end of the second block.
    let padded = padded_bytes(&[0u8; 56]);
    assert_eq!(padded.len(), 2 * BLOCK_BYTES);
    assert_eq!(
        u64::from_be_bytes(padded[padded.len() - 8..].try_into().unwrap()),
        56 * 8
    );
}

use super::H256_INIT;
use super::computations::{all_rounds, expand_schedule};
use super::padding::pad_and_split;
use crate::primitives::U256;

/// Compresses one block into `state` and returns the new state.
///
/// Pure function of its two inputs and the round constants; the caller
/// owns the state threading.
#[inline(always)]
pub fn compress(block: &[u32; 16], state: [u32; 8]) -> [u32; 8] {
    let w = expand_schedule(block);

    all_rounds(state, &w)
}

/// Computes the SHA-256 digest of `input`.
///
/// Initializes the 8-word state, folds every padded block through the
/// compression function in message order, and packs the final state into
/// a big-endian `U256`. Reentrant; no state survives the call.
pub fn sha256(input: &[u8]) -> U256 {
    let mut state = H256_INIT;

    for block in pad_and_split(input) {
        state = compress(&block, state);
    }

    U256::from(state)
}

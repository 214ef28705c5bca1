//! Landmark decoding from the JS side
//!
//! JavaScript hands over a flat Float64Array, four values per landmark:
//! x, y, z, visibility. A NaN visibility means the engine gave none.

use crate::error::FrameError;
use crate::pose::Landmark;

/// Values per landmark in the flat buffer
pub const LANDMARK_STRIDE: usize = 4;

/// Decode a flat buffer into landmarks
///
/// An empty buffer decodes to an empty frame ("no body detected").
pub fn decode_landmarks(data: &[f64]) -> Result<Vec<Landmark>, FrameError> {
    if data.len() % LANDMARK_STRIDE != 0 {
        return Err(FrameError::Misaligned {
            len: data.len(),
            stride: LANDMARK_STRIDE,
        });
    }

    Ok(data
        .chunks_exact(LANDMARK_STRIDE)
        .map(|chunk| Landmark {
            x: chunk[0],
            y: chunk[1],
            z: chunk[2],
            visibility: (!chunk[3].is_nan()).then_some(chunk[3]),
        })
        .collect())
}

use thiserror::Error;

///
/// The ways a rope lookup can fail
///
/// Both conditions are checked before the rope is touched, so a failed call
/// always leaves the structure exactly as it was. Nothing else in the crate
/// can fail: concatenation and construction from valid inputs always succeed.
///
#[derive(Error, Clone, Copy, PartialEq, Eq, Debug)]
pub enum RopeError {
    /// A substring request where the range runs backwards or past the end of the rope
    #[error("invalid range {start}..{end} for a rope of length {len}")]
    InvalidRange { start: usize, end: usize, len: usize },

    /// An index lookup at or past the end of the rope
    #[error("index {index} out of range for a rope of length {len}")]
    OutOfRange { index: usize, len: usize },
}

mod node;
mod branch;
mod error;
mod span;
mod reconstruct;
mod cow_rope;

pub use self::cow_rope::*;
pub use self::error::*;

mod summary;
mod tier;

pub use summary::*;
pub use tier::*;

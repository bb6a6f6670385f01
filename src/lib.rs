mod classifier;
mod literal;
mod signatures;
mod types;

pub use classifier::DeviceClassifier;
pub use types::*;

pub mod amplitude;
pub mod blob;
pub mod constants;
pub mod curve;
pub mod error;
pub mod points;

pub use amplitude::*;
pub use blob::*;
pub use constants::*;
pub use curve::*;
pub use error::BlobError;
pub use points::{lerp, BlobPoint, JitterSource, RadiusBounds};

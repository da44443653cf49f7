//! Authentication schemes and secret wrappers used by resolved configurations.

pub mod scheme;
pub mod secret;

pub use scheme::*;
pub use secret::*;

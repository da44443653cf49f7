//! Provider-facing data: the descriptor passed through setup and the provider config objects
//! that point at credential material.
//!
//! `descriptor` holds the immutable [`ProviderDescriptor`] triple, `config` models provider
//! configs, credential selectors, and usage records, and `id` exposes validated object names.

pub mod config;
pub mod descriptor;
pub mod id;

pub use config::*;
pub use descriptor::*;
pub use id::*;

//! Backend abstraction for matrix products.
//!
//! # Backends
//!
//! - `GenericBackend`: naive loop-based implementation (always available)
//! - `FaerBackend`: faer's cache-aware `matmul` (cargo feature `faer`, on by default)
//!
//! [`DefaultBackend`] names the backend `dot` dispatches to.

#[cfg(feature = "faer")]
mod faer_matmul;
mod generic;
mod matmul;

#[cfg(feature = "faer")]
pub use faer_matmul::FaerBackend;
pub use generic::GenericBackend;
pub use matmul::MatmulBackend;

/// Backend used for rank-2 `dot`.
#[cfg(feature = "faer")]
pub type DefaultBackend = FaerBackend;

/// Backend used for rank-2 `dot`.
#[cfg(not(feature = "faer"))]
pub type DefaultBackend = GenericBackend;

/// Human-readable name of [`DefaultBackend`], for logging.
pub(crate) const DEFAULT_BACKEND_NAME: &str = if cfg!(feature = "faer") {
    "faer"
} else {
    "generic"
};

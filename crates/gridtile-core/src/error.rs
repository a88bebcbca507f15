//! Error types for host volume construction.
//!
//! The geometry computation itself never fails: tile counts and the overlap
//! percentage are clamped into range, and degenerate requests produce
//! degenerate (zero or negative) extents instead of errors. The only fallible
//! operations in this crate are the [`VolumeImage`](crate::VolumeImage)
//! constructors, which validate dimensions and buffer lengths.

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when constructing host volumes.
#[derive(Debug, Error)]
pub enum Error {
    /// A host volume was requested with a non-positive dimension.
    ///
    /// Computed tile geometry may legitimately carry zero or negative
    /// extents, but an actual source image must have at least one pixel
    /// along every axis.
    #[error("invalid volume dimensions: {width}x{height}x{depth}")]
    InvalidDimensions {
        /// Requested width.
        width: i32,
        /// Requested height.
        height: i32,
        /// Requested depth.
        depth: i32,
    },

    /// A pixel buffer does not match the declared volume dimensions.
    #[error("buffer size mismatch: expected {expected} elements, got {actual}")]
    BufferSizeMismatch {
        /// Element count implied by the dimensions.
        expected: usize,
        /// Element count actually supplied.
        actual: usize,
    },
}

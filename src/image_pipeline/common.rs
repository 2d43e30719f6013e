//! Shared error handling
//!
//! Every stage of the pipeline (reading, kernels, writing, benchmarking)
//! reports failures through [`ConversionError`].

pub mod error;

pub use error::{ConversionError, Result};

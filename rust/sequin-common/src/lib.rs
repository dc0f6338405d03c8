//! Core definitions (error taxonomy and result helpers), relied upon by the
//! sequin-* crates.

pub mod error;
pub mod result;

pub use result::Result;

//! Infrastructure layer implementing domain contracts.
//!
//! - [`persistence`] - Repository implementations

pub mod persistence;

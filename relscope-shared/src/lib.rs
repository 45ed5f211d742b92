//! Shared wire models for the ReleaseScope dashboard.
//!
//! Everything in this crate mirrors the JSON shapes exchanged with the
//! ReleaseScope REST backend. The crate is pure data: serde models, the
//! release-source vocabulary, and a [`models::Timestamp`] newtype that knows
//! how to read the backend's datetime encoding.

pub mod models;

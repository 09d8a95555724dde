//! ptsd-provider
//!
//! Model Provider: fetches the serialized scaler and classifier once per
//! process, over HTTP or from disk, and caches the decoded pair.

pub mod error;
pub mod provider;
pub mod source;

//! Internal per-traversal state.
//!
//! This module is intentionally `pub(crate)` so the algorithms can share
//! visited sets and state marks without exposing them as part of the public
//! API surface.

pub(crate) mod marks;

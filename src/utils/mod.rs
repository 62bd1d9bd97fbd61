//! Shared byte helpers used by the block modes.

pub(crate) mod bytes;

//! CLI command implementations.

pub(crate) mod counties;
pub(crate) mod get;
pub(crate) mod month;

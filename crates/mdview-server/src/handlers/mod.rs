//! Request handlers.

pub(crate) mod viewer;

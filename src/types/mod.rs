//! Crate-wide types, foremost among them the [error kinds](err).

pub mod err;

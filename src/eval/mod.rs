//! Frame evaluation: progress in, draw plan out.

pub mod frame;

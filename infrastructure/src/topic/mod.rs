//! Topic source adapters.

pub mod stdin;

pub use stdin::StdinTopicSource;

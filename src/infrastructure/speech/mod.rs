//! Speech capture adapters

pub mod noop;
pub mod stdin;

pub use noop::NoopSpeech;
pub use stdin::StdinSpeech;

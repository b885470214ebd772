//! Writing cleaned tables back to delimited files.

mod writer;

pub use writer::{Writer, WriterConfig};

pub mod block;
pub mod codec;
pub mod encode;
pub mod error;
pub mod format;
pub mod span;

pub use block::DataBlock;
pub use codec::Codec;
pub use encode::BinaryEncoder;
pub use error::{CodecError, Result};
pub use span::ByteSpan;

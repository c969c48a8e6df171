#![warn(missing_debug_implementations)]

pub mod error;
pub use error::{Error, Result};

pub mod codec;
pub use codec::Codec;

pub mod payload;
pub use payload::Payload;

pub mod task;
pub use task::CodecTask;

pub mod serializer_deserializer;
pub use serializer_deserializer::SerializerDeserializer;

pub mod serializer;
pub use serializer::Serializer;

pub use serde;

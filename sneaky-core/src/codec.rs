use crate::{
    Result,
    serde::{Serialize, de::DeserializeOwned},
};

/// The JSON library behind the facade.
///
/// Implementations are shared read-only across worker threads, so they must
/// not keep per-call state. Errors are reported as `Error::Encode` or
/// `Error::Decode` carrying the library's own message.
pub trait Codec: Send + Sync + 'static {
    fn encode<S: Serialize + ?Sized>(&self, obj: &S) -> Result<String>;

    fn decode_slice<D: DeserializeOwned>(&self, data: &[u8]) -> Result<D>;

    fn decode_str<D: DeserializeOwned>(&self, text: &str) -> Result<D> {
        self.decode_slice(text.as_bytes())
    }
}

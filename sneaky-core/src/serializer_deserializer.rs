use crate::{
    CodecTask, Payload, Result,
    serde::{Serialize, de::DeserializeOwned},
};

use std::fmt::Debug;

/// Blocking and non-blocking JSON marshalling.
///
/// The `*_async` variants run the blocking variant unchanged on a worker
/// thread and return a task that is already scheduled. A failure on the
/// worker always resolves the task with an `Err`.
pub trait SerializerDeserializer {
    fn deserialize<D, P>(&self, data: &P) -> Result<D>
    where
        D: DeserializeOwned + Debug,
        P: Payload + ?Sized;

    fn serialize<S: Serialize + ?Sized>(&self, obj: &S) -> Result<String>;

    fn deserialize_async<D, P>(&self, data: P) -> CodecTask<D>
    where
        D: DeserializeOwned + Debug + Send + 'static,
        P: Payload + 'static;

    fn serialize_async<S: Serialize + Send + 'static>(&self, obj: S) -> CodecTask<String>;
}

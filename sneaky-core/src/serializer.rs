use crate::{
    Codec, CodecTask, Error, Payload, Result, SerializerDeserializer,
    serde::{Serialize, de::DeserializeOwned},
};

use std::{
    fmt::Debug,
    sync::{Arc, OnceLock},
};
use tokio::runtime::{Builder, Handle, Runtime};
use tracing::{debug, warn};

static SHARED_RUNTIME: OnceLock<Option<Runtime>> = OnceLock::new();

// Built on first use by callers that have neither a configured nor a current
// runtime. Lives for the rest of the process.
fn shared_runtime() -> Option<Handle> {
    SHARED_RUNTIME
        .get_or_init(|| {
            Builder::new_multi_thread()
                .worker_threads(1)
                .thread_name("sneaky-codec")
                .build()
                .map_err(|e| warn!(error = %e, "failed to start shared codec runtime"))
                .ok()
        })
        .as_ref()
        .map(|runtime| runtime.handle().clone())
}

/// Facade over a [`Codec`] with blocking and non-blocking entry points.
///
/// The codec is injected once and shared by every call, including the ones
/// running on worker threads. Cloning a `Serializer` is cheap.
#[derive(Debug)]
pub struct Serializer<C> {
    codec: Arc<C>,
    runtime: Option<Handle>,
}

impl<C> Clone for Serializer<C> {
    fn clone(&self) -> Self {
        Self {
            codec: self.codec.clone(),
            runtime: self.runtime.clone(),
        }
    }
}

impl<C: Codec + Default> Default for Serializer<C> {
    fn default() -> Self {
        Self::new(C::default())
    }
}

impl<C: Codec> Serializer<C> {
    /// Async calls run on the blocking pool of whatever tokio runtime is
    /// current when they are issued, or of a process-wide runtime started on
    /// demand when there is none.
    pub fn new(codec: C) -> Self {
        Self {
            codec: Arc::new(codec),
            runtime: None,
        }
    }

    /// Async calls always run on the blocking pool of `runtime`, so they can
    /// be issued from threads outside of it.
    pub fn with_runtime(codec: C, runtime: Handle) -> Self {
        Self {
            codec: Arc::new(codec),
            runtime: Some(runtime),
        }
    }

    pub fn codec(&self) -> &C {
        &self.codec
    }

    fn dispatch<T, F>(&self, work: F) -> CodecTask<T>
    where
        T: Send + 'static,
        F: FnOnce(&Self) -> Result<T> + Send + 'static,
    {
        let runtime = self
            .runtime
            .clone()
            .or_else(|| Handle::try_current().ok())
            .or_else(shared_runtime);
        let runtime = match runtime {
            Some(runtime) => runtime,
            None => return CodecTask::failed(Error::NoRuntime),
        };

        let this = self.clone();
        CodecTask::spawn(&runtime, move || work(&this))
    }
}

impl<C: Codec> SerializerDeserializer for Serializer<C> {
    fn deserialize<D, P>(&self, data: &P) -> Result<D>
    where
        D: DeserializeOwned + Debug,
        P: Payload + ?Sized,
    {
        let result: D = data.decode_with(&*self.codec)?;
        debug!(result = ?result, "deserialization result");
        Ok(result)
    }

    fn serialize<S: Serialize + ?Sized>(&self, obj: &S) -> Result<String> {
        let result = self.codec.encode(obj)?;
        debug!(result = %result, "serialization result");
        Ok(result)
    }

    fn deserialize_async<D, P>(&self, data: P) -> CodecTask<D>
    where
        D: DeserializeOwned + Debug + Send + 'static,
        P: Payload + 'static,
    {
        self.dispatch(move |this| this.deserialize::<D, P>(&data))
    }

    fn serialize_async<S: Serialize + Send + 'static>(&self, obj: S) -> CodecTask<String> {
        self.dispatch(move |this| this.serialize(&obj))
    }
}

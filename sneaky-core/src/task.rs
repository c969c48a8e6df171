use crate::{Error, Result};

use std::{
    fmt,
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};
use tokio::{
    runtime::Handle,
    task::{JoinError, JoinHandle},
};

enum TaskState<T> {
    Running(JoinHandle<Result<T>>),
    Failed(Option<Error>),
}

/// A codec call running on the blocking pool.
///
/// The work is scheduled when the task is created, not when it is first
/// polled. Dropping the task detaches it; the call still runs to completion.
pub struct CodecTask<T> {
    state: TaskState<T>,
}

impl<T: Send + 'static> CodecTask<T> {
    pub(crate) fn spawn<F>(runtime: &Handle, work: F) -> Self
    where
        F: FnOnce() -> Result<T> + Send + 'static,
    {
        Self {
            state: TaskState::Running(runtime.spawn_blocking(work)),
        }
    }
}

impl<T> CodecTask<T> {
    pub(crate) fn failed(err: Error) -> Self {
        Self {
            state: TaskState::Failed(Some(err)),
        }
    }

    /// Blocks the current thread until the task resolves.
    ///
    /// Must not be called from an async context.
    pub fn wait(self) -> Result<T> {
        futures::executor::block_on(self)
    }
}

impl<T> Future for CodecTask<T> {
    type Output = Result<T>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        let output = match &mut this.state {
            TaskState::Running(handle) => match Pin::new(handle).poll(cx) {
                Poll::Pending => return Poll::Pending,
                Poll::Ready(Ok(result)) => result,
                Poll::Ready(Err(e)) => Err(worker_failure(e)),
            },
            TaskState::Failed(err) => Err(err
                .take()
                .unwrap_or_else(|| Error::Worker("task polled after completion".into()))),
        };

        this.state = TaskState::Failed(None);
        Poll::Ready(output)
    }
}

impl<T> fmt::Debug for CodecTask<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match &self.state {
            TaskState::Running(handle) if handle.is_finished() => "finished",
            TaskState::Running(_) => "running",
            TaskState::Failed(Some(_)) => "failed",
            TaskState::Failed(None) => "done",
        };
        f.debug_struct("CodecTask").field("state", &state).finish()
    }
}

fn worker_failure(err: JoinError) -> Error {
    if !err.is_panic() {
        return Error::Worker(err.to_string());
    }

    let panic = err.into_panic();
    let message = panic
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| panic.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "worker panicked".to_string());

    Error::Worker(message)
}

use std::{future::Future, thread};

// Runs the future on a dedicated thread with its own single-threaded runtime,
// so it keeps making progress even when the caller's runtime is shut down.
pub(crate) fn spawn_blocking<T: Send + 'static>(
    future: impl Future<Output = T> + Send + 'static,
) -> thread::JoinHandle<T> {
    thread::spawn(move || {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap()
            .block_on(future)
    })
}

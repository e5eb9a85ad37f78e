//! Upload/delete gateway.
//!
//! Fire-and-forget wrappers around [`ApiClient`] calls. Each request runs
//! independently; its completion callback fires once it settles, whether it
//! succeeded or not. Failures are only logged.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use web_sys::Blob;

use super::api::ApiClient;
use crate::utils::log;

// =============================================================================
// Batch completion
// =============================================================================

/// Counts completions of a batch of requests and fires once after the last.
///
/// Completion order does not matter, and neither does success or failure.
/// An empty batch fires immediately on creation.
pub struct BatchCompletion {
    remaining: Cell<usize>,
    on_done: RefCell<Option<Box<dyn FnOnce()>>>,
}

impl BatchCompletion {
    pub fn new(total: usize, on_done: impl FnOnce() + 'static) -> Rc<Self> {
        let batch = Rc::new(Self {
            remaining: Cell::new(total),
            on_done: RefCell::new(Some(Box::new(on_done))),
        });
        if total == 0 {
            batch.fire();
        }
        batch
    }

    /// Record one finished request.
    pub fn complete_one(&self) {
        let remaining = self.remaining.get().saturating_sub(1);
        self.remaining.set(remaining);
        if remaining == 0 {
            self.fire();
        }
    }

    #[cfg(test)]
    pub fn remaining(&self) -> usize {
        self.remaining.get()
    }

    fn fire(&self) {
        // Take first so a re-entrant completion cannot fire twice
        let callback = self.on_done.borrow_mut().take();
        if let Some(callback) = callback {
            callback();
        }
    }
}

// =============================================================================
// Requests
// =============================================================================

/// Upload one blob; `on_complete` runs when the request settles.
pub fn upload_file(
    client: ApiClient,
    path: String,
    body: Blob,
    on_complete: impl FnOnce() + 'static,
) {
    spawn_local(async move {
        match client.upload(&path, &body).await {
            Ok(()) => log::info(&format!("Uploaded {}", path)),
            Err(e) => log::error(&format!("Upload of {} failed: {}", path, e)),
        }
        on_complete();
    });
}

/// Upload several blobs in parallel; `on_all_done` runs once after the last.
pub fn upload_batch(
    client: ApiClient,
    files: Vec<(String, Blob)>,
    on_all_done: impl FnOnce() + 'static,
) {
    let batch = BatchCompletion::new(files.len(), on_all_done);
    for (path, body) in files {
        let batch = Rc::clone(&batch);
        upload_file(client.clone(), path, body, move || batch.complete_one());
    }
}

/// Delete a file or folder; `on_complete` runs when the request settles.
pub fn delete_resource(client: ApiClient, path: String, on_complete: impl FnOnce() + 'static) {
    spawn_local(async move {
        match client.delete(&path).await {
            Ok(()) => log::info(&format!("Deleted {}", path)),
            Err(e) => log::error(&format!("Delete of {} failed: {}", path, e)),
        }
        on_complete();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counter() -> (Rc<Cell<usize>>, impl FnOnce() + 'static) {
        let calls = Rc::new(Cell::new(0));
        let calls_for_callback = Rc::clone(&calls);
        (calls, move || calls_for_callback.set(calls_for_callback.get() + 1))
    }

    #[test]
    fn test_fires_once_after_last_completion() {
        let (calls, on_done) = counter();
        let batch = BatchCompletion::new(3, on_done);

        batch.complete_one();
        batch.complete_one();
        assert_eq!(calls.get(), 0);
        assert_eq!(batch.remaining(), 1);

        batch.complete_one();
        assert_eq!(calls.get(), 1);

        // Extra completions never fire again
        batch.complete_one();
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_empty_batch_fires_immediately() {
        let (calls, on_done) = counter();
        let _batch = BatchCompletion::new(0, on_done);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_upload_batch_without_files_reloads_once() {
        let (calls, on_done) = counter();
        upload_batch(ApiClient::new("t"), Vec::new(), on_done);
        assert_eq!(calls.get(), 1);
    }

    #[tokio::test]
    async fn test_out_of_order_async_completions() {
        let (calls, on_done) = counter();
        let batch = BatchCompletion::new(4, on_done);

        let local = tokio::task::LocalSet::new();
        local
            .run_until(async {
                let mut handles = Vec::new();
                for delay in [3usize, 0, 2, 1] {
                    let batch = Rc::clone(&batch);
                    let calls = Rc::clone(&calls);
                    handles.push(tokio::task::spawn_local(async move {
                        for _ in 0..delay {
                            tokio::task::yield_now().await;
                        }
                        // Reload must not run before the last request settles
                        if batch.remaining() > 1 {
                            assert_eq!(calls.get(), 0);
                        }
                        batch.complete_one();
                    }));
                }
                for handle in handles {
                    handle.await.unwrap();
                }
            })
            .await;

        assert_eq!(calls.get(), 1);
        assert_eq!(batch.remaining(), 0);
    }
}

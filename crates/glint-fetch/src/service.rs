//! Background fetch worker and per-frame completion draining.

use std::fs::File;
use std::io::Read;
use std::path::PathBuf;
use std::thread::{self, JoinHandle};

use crossbeam::channel::{self, Receiver, Sender};
use hashbrown::HashSet;
use tracing::debug;

use glint_core::{Error, Result};

use crate::request::{FetchRequest, RequestId};
use crate::response::{FetchError, FetchResponse};

/// Work sent to the background worker thread.
#[derive(Debug)]
enum WorkRequest {
    /// Load the file at `path` into a buffer of at most `capacity` bytes.
    Load {
        id: RequestId,
        path: PathBuf,
        capacity: usize,
    },
    /// Signal the worker thread to shut down.
    Shutdown,
}

/// Asynchronous file-load service.
///
/// Requests are handed to one named worker thread over a bounded channel;
/// completions come back over a second bounded channel and are drained on
/// the owning thread once per frame. There is no cancellation and no retry:
/// a submitted request runs to success or failure.
pub struct FetchService {
    /// Channel to send work requests to the worker.
    request_tx: Sender<WorkRequest>,
    /// Channel to receive completed responses from the worker.
    result_rx: Receiver<FetchResponse>,
    /// Worker thread handle for joining on shutdown.
    thread: Option<JoinHandle<()>>,
    /// Requests submitted but not yet drained.
    pending: HashSet<RequestId>,
    /// Next request identifier.
    next_id: u64,
}

impl FetchService {
    /// Spawn the service and its worker thread.
    pub fn spawn() -> Result<Self> {
        let (request_tx, request_rx) = channel::bounded::<WorkRequest>(16);
        let (result_tx, result_rx) = channel::bounded::<FetchResponse>(16);

        let thread = thread::Builder::new()
            .name("fetch-worker".to_string())
            .spawn(move || {
                Self::worker_loop(&request_rx, &result_tx);
            })
            .map_err(Error::Io)?;

        Ok(Self {
            request_tx,
            result_rx,
            thread: Some(thread),
            pending: HashSet::new(),
            next_id: 0,
        })
    }

    /// Submit a load request (non-blocking).
    ///
    /// Returns the request's identifier, or [`Error::QueueFull`] when no
    /// request slot is free; the caller may retry on a later frame.
    pub fn submit(&mut self, request: FetchRequest) -> Result<RequestId> {
        let id = RequestId(self.next_id);
        let work = WorkRequest::Load {
            id,
            path: request.path.clone(),
            capacity: request.capacity,
        };

        if self.request_tx.try_send(work).is_err() {
            return Err(Error::QueueFull(request.path.display().to_string()));
        }

        self.next_id += 1;
        self.pending.insert(id);
        debug!("fetch submitted: {} ({:?})", request.path.display(), id);
        Ok(id)
    }

    /// Drain completed responses, invoking `handler` once per completion.
    ///
    /// Must be called on the owning thread; the handler therefore never runs
    /// concurrently with the caller's per-frame update. Returns the number
    /// of completions drained.
    pub fn process_completions<F: FnMut(FetchResponse)>(&mut self, mut handler: F) -> usize {
        let mut drained = 0;
        while let Ok(response) = self.result_rx.try_recv() {
            // A response for an unknown id would mean a duplicate
            // completion; drop it rather than fire the handler twice.
            if !self.pending.remove(&response.id) {
                continue;
            }
            drained += 1;
            handler(response);
        }
        drained
    }

    /// Number of requests submitted but not yet completed.
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.pending.len()
    }

    /// Main worker loop: block on requests, load files, send results back.
    fn worker_loop(request_rx: &Receiver<WorkRequest>, result_tx: &Sender<FetchResponse>) {
        loop {
            match request_rx.recv() {
                Ok(WorkRequest::Load { id, path, capacity }) => {
                    let result = load_file(&path, capacity);
                    let response = FetchResponse { id, path, result };
                    // Blocking send: backpressure if the main thread is slow.
                    if result_tx.send(response).is_err() {
                        return;
                    }
                }
                Ok(WorkRequest::Shutdown) | Err(_) => {
                    return;
                }
            }
        }
    }

    /// Shut the worker down and wait for it to finish.
    fn shutdown(&mut self) {
        let _ = self.request_tx.send(WorkRequest::Shutdown);
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

impl Drop for FetchService {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Read a file into a buffer of at most `capacity` bytes.
fn load_file(path: &std::path::Path, capacity: usize) -> std::result::Result<Vec<u8>, FetchError> {
    let file = File::open(path).map_err(|e| FetchError::Io(e.to_string()))?;

    let mut buffer = Vec::with_capacity(capacity.min(DEFAULT_PROBE));
    let mut limited = file.take(capacity as u64 + 1);
    limited
        .read_to_end(&mut buffer)
        .map_err(|e| FetchError::Io(e.to_string()))?;

    if buffer.len() > capacity {
        return Err(FetchError::BufferTooSmall { capacity });
    }
    Ok(buffer)
}

/// Initial allocation probe so huge capacities don't reserve memory up front.
const DEFAULT_PROBE: usize = 64 * 1024;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::time::Duration;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("glint-fetch-{}-{name}", std::process::id()))
    }

    fn drain_one(service: &mut FetchService) -> FetchResponse {
        // The worker is fast, but give it time on loaded machines.
        for _ in 0..100 {
            let mut got = None;
            service.process_completions(|r| got = Some(r));
            if let Some(response) = got {
                return response;
            }
            thread::sleep(Duration::from_millis(10));
        }
        panic!("no completion within a second");
    }

    #[test]
    fn loads_file_contents() {
        let path = temp_path("ok.txt");
        let mut file = File::create(&path).unwrap();
        file.write_all(b"hello world").unwrap();
        drop(file);

        let mut service = FetchService::spawn().unwrap();
        let id = service.submit(FetchRequest::new(&path)).unwrap();
        assert_eq!(service.in_flight(), 1);

        let response = drain_one(&mut service);
        assert_eq!(response.id, id);
        assert!(response.fetched());
        assert_eq!(response.data(), Some(&b"hello world"[..]));
        assert_eq!(service.in_flight(), 0);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn missing_file_fails() {
        let mut service = FetchService::spawn().unwrap();
        service
            .submit(FetchRequest::new(temp_path("does-not-exist.png")))
            .unwrap();

        let response = drain_one(&mut service);
        assert!(response.failed());
        assert!(matches!(response.result, Err(FetchError::Io(_))));
    }

    #[test]
    fn oversized_file_fails() {
        let path = temp_path("big.bin");
        std::fs::write(&path, vec![0u8; 128]).unwrap();

        let mut service = FetchService::spawn().unwrap();
        service
            .submit(FetchRequest::new(&path).with_capacity(64))
            .unwrap();

        let response = drain_one(&mut service);
        assert_eq!(
            response.result,
            Err(FetchError::BufferTooSmall { capacity: 64 })
        );

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn each_request_completes_once() {
        let path = temp_path("twice.txt");
        std::fs::write(&path, b"x").unwrap();

        let mut service = FetchService::spawn().unwrap();
        service.submit(FetchRequest::new(&path)).unwrap();
        service.submit(FetchRequest::new(&path)).unwrap();

        let mut seen = Vec::new();
        for _ in 0..100 {
            service.process_completions(|r| seen.push(r.id));
            if seen.len() == 2 {
                break;
            }
            thread::sleep(Duration::from_millis(10));
        }

        assert_eq!(seen.len(), 2);
        assert_ne!(seen[0], seen[1]);
        assert_eq!(service.in_flight(), 0);

        let _ = std::fs::remove_file(&path);
    }
}

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Instant;

use log::{debug, trace};

use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::data::render_request::RenderRequest;
use crate::controllers::interactive::events::render_event::RenderEvent;
use crate::controllers::interactive::ports::frame_sink::FrameSink;
use crate::core::actions::render_frame::FrameRenderer;

struct SharedState {
    generation: AtomicU64,
    last_completed_generation: AtomicU64,
    latest_request: Mutex<Option<(u64, RenderRequest)>>,
    wake: Condvar,
    shutdown: AtomicBool,
    renderer: FrameRenderer,
    sink: Arc<dyn FrameSink>,
}

impl SharedState {
    // The slot only ever holds plain data, so a poisoned lock is still usable.
    fn lock_request(&self) -> MutexGuard<'_, Option<(u64, RenderRequest)>> {
        self.latest_request
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

/// Renders on a single background thread, keeping only the newest request.
///
/// Each submission bumps a generation counter. A frame whose generation has
/// been superseded by the time it finishes is thrown away, so the sink only
/// ever sees frames for the latest request.
pub struct RenderWorker {
    shared: Arc<SharedState>,
    worker: Option<JoinHandle<()>>,
}

impl RenderWorker {
    pub fn new(renderer: FrameRenderer, sink: Arc<dyn FrameSink>) -> Self {
        let shared = Arc::new(SharedState {
            generation: AtomicU64::new(0),
            last_completed_generation: AtomicU64::new(0),
            latest_request: Mutex::new(None),
            wake: Condvar::new(),
            shutdown: AtomicBool::new(false),
            renderer,
            sink,
        });

        let worker_shared = Arc::clone(&shared);

        let worker = thread::spawn(move || {
            Self::worker_loop(&worker_shared);
        });

        Self {
            shared,
            worker: Some(worker),
        }
    }

    pub fn submit(&self, request: RenderRequest) -> u64 {
        let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;

        {
            let mut guard = self.shared.lock_request();
            *guard = Some((generation, request));
        }

        self.shared.wake.notify_one();

        generation
    }

    pub fn shutdown(&mut self) {
        // Stored under the slot lock so the worker cannot miss the wakeup
        // between its flag check and its wait.
        {
            let _guard = self.shared.lock_request();
            self.shared.shutdown.store(true, Ordering::Release);
        }
        self.shared.wake.notify_one();

        if let Some(handle) = self.worker.take() {
            let _ = handle.join();
        }
    }

    #[must_use]
    pub fn latest_generation(&self) -> u64 {
        self.shared.generation.load(Ordering::Acquire)
    }

    #[must_use]
    pub fn last_completed_generation(&self) -> u64 {
        self.shared
            .last_completed_generation
            .load(Ordering::Acquire)
    }

    /// True while the newest submitted request has not been delivered yet.
    #[must_use]
    pub fn is_rendering(&self) -> bool {
        !self.shared.shutdown.load(Ordering::Acquire)
            && self.last_completed_generation() < self.latest_generation()
    }

    fn worker_loop(shared: &Arc<SharedState>) {
        loop {
            let (job_generation, request) = {
                let mut guard = shared.lock_request();
                loop {
                    if shared.shutdown.load(Ordering::Acquire) {
                        return;
                    }

                    if let Some(job) = guard.take() {
                        break job;
                    }

                    guard = shared
                        .wake
                        .wait(guard)
                        .unwrap_or_else(PoisonError::into_inner);
                }
            };

            let start = Instant::now();
            let pixel_buffer = shared.renderer.render(&request.viewport, request.canvas);
            let render_duration = start.elapsed();

            let current_gen = shared.generation.load(Ordering::Acquire);
            if job_generation != current_gen {
                debug!(
                    "discarding frame {} superseded by {}",
                    job_generation, current_gen
                );
                continue;
            }

            trace!("frame {} ready in {:?}", job_generation, render_duration);
            shared
                .last_completed_generation
                .store(job_generation, Ordering::Release);

            shared.sink.submit(RenderEvent::Frame(FrameData {
                generation: job_generation,
                viewport: request.viewport,
                pixel_buffer,
                render_duration,
            }));
        }
    }
}

impl Drop for RenderWorker {
    fn drop(&mut self) {
        self.shutdown();
    }
}

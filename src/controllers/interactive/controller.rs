use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::core::actions::render_viewport::render_viewport::render_viewport_cancelable;
use crate::core::data::render_request::{RenderRequest, RequestId};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Instant;
use tracing::{debug, error, info, trace};

struct SharedState {
    latest_request_id: AtomicU64,
    last_completed_request_id: AtomicU64,
    latest_request: Mutex<Option<RenderRequest>>,
    wake: Condvar,
    shutdown: AtomicBool,
    presenter_port: Arc<dyn InteractiveControllerPresenterPort>,
}

impl SharedState {
    fn lock_request(&self) -> MutexGuard<'_, Option<RenderRequest>> {
        self.latest_request
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

/// Renders requests on a background worker. Only the newest submitted
/// request is kept; a render in progress is cancelled as soon as a newer
/// one arrives and its result is never presented.
pub struct InteractiveController {
    shared: Arc<SharedState>,
    worker: Option<JoinHandle<()>>,
}

impl InteractiveController {
    pub fn new(presenter_port: Arc<dyn InteractiveControllerPresenterPort>) -> Self {
        let shared = Arc::new(SharedState {
            latest_request_id: AtomicU64::new(0),
            last_completed_request_id: AtomicU64::new(0),
            latest_request: Mutex::new(None),
            wake: Condvar::new(),
            shutdown: AtomicBool::new(false),
            presenter_port,
        });

        let worker_shared = Arc::clone(&shared);

        let worker = thread::Builder::new()
            .name("render-worker".into())
            .spawn(move || Self::worker_loop(&worker_shared))
            .ok();

        if worker.is_some() {
            info!("render worker started");
        } else {
            error!("failed to spawn render worker");
        }

        Self { shared, worker }
    }

    pub fn submit_request(&self, request: RenderRequest) -> RequestId {
        {
            let mut guard = self.shared.lock_request();
            self.shared
                .latest_request_id
                .store(request.id, Ordering::SeqCst);
            *guard = Some(request);
        }

        self.shared.wake.notify_one();
        trace!(id = request.id, "render request submitted");

        request.id
    }

    pub fn shutdown(&mut self) {
        // Set under the lock so a worker between its flag check and `wait`
        // cannot miss the notification.
        {
            let _guard = self.shared.lock_request();
            self.shared.shutdown.store(true, Ordering::Release);
        }
        self.shared.wake.notify_one();

        if let Some(handle) = self.worker.take() {
            let _ = handle.join();
            info!("render worker stopped");
        }
    }

    #[must_use]
    pub fn last_completed_request_id(&self) -> RequestId {
        self.shared
            .last_completed_request_id
            .load(Ordering::Acquire)
    }

    fn worker_loop(shared: &Arc<SharedState>) {
        loop {
            let request = {
                let mut guard = shared.lock_request();
                loop {
                    if shared.shutdown.load(Ordering::Acquire) {
                        return;
                    }

                    if let Some(request) = guard.take() {
                        break request;
                    }

                    guard = shared
                        .wake
                        .wait(guard)
                        .unwrap_or_else(PoisonError::into_inner);
                }
            };

            let cancel_token = || {
                shared.shutdown.load(Ordering::Relaxed)
                    || request.id != shared.latest_request_id.load(Ordering::Relaxed)
            };

            let start = Instant::now();
            let result = render_viewport_cancelable(&request, &cancel_token);
            let render_duration = start.elapsed();

            let Ok(pixel_buffer) = result else {
                trace!(id = request.id, "render superseded");
                continue;
            };

            if request.id != shared.latest_request_id.load(Ordering::Acquire) {
                trace!(id = request.id, "dropping stale frame");
                continue;
            }

            debug!(
                id = request.id,
                quality = request.quality,
                elapsed_ms = render_duration.as_secs_f64() * 1000.0,
                "frame ready"
            );

            shared
                .last_completed_request_id
                .store(request.id, Ordering::Release);

            shared.presenter_port.present(FrameData {
                request_id: request.id,
                pixel_buffer,
                render_duration,
            });
        }
    }
}

impl Drop for InteractiveController {
    fn drop(&mut self) {
        self.shutdown();
    }
}

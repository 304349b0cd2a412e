use std::sync::Arc;

use dancetrack_core::session::capture_session::CaptureSession;
use parking_lot::Mutex;

/// Shared server state: the single capture session behind a mutex.
///
/// Locking is per-operation only (one handler call, one frame pull);
/// overlapping start/stop/stream requests interleave at that granularity,
/// which is the accepted scope of this demo.
pub struct AppState {
    pub session: Mutex<CaptureSession>,
}

pub type SharedState = Arc<AppState>;

pub fn shared(session: CaptureSession) -> SharedState {
    Arc::new(AppState {
        session: Mutex::new(session),
    })
}

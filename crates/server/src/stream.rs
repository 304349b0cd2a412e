//! MJPEG streaming for the video feed endpoint.
//!
//! The camera, the pose model, and the JPEG encoder are all blocking, so
//! frames are produced on a `spawn_blocking` loop and handed to the async
//! response body through a bounded channel. The channel capacity of 1 makes
//! the stream pull-paced: the next frame is only produced after the
//! previous part was accepted by the transport.

use std::convert::Infallible;
use std::time::Duration;

use axum::body::Body;
use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use bytes::Bytes;
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;

use crate::state::SharedState;

pub const CONTENT_TYPE: &str = "multipart/x-mixed-replace; boundary=frame";

/// Pause between iterations while the session yields no frames (not
/// capturing, camera missing, or transient read failure).
const IDLE_DELAY: Duration = Duration::from_millis(50);

pub async fn video_feed(State(state): State<SharedState>) -> impl IntoResponse {
    let (tx, rx) = mpsc::channel::<Result<Bytes, Infallible>>(1);
    tokio::task::spawn_blocking(move || pump_frames(state, tx));

    (
        [(header::CONTENT_TYPE, CONTENT_TYPE)],
        Body::from_stream(ReceiverStream::new(rx)),
    )
}

/// Pulls frames from the session until the client disconnects.
///
/// A `None` frame skips this iteration and loops again; stopping the
/// session is observed on the next pull, so the stream lags a stop by at
/// most one frame.
fn pump_frames(state: SharedState, tx: mpsc::Sender<Result<Bytes, Infallible>>) {
    loop {
        let jpeg = state.session.lock().next_jpeg();
        match jpeg {
            Some(jpeg) => {
                if tx.blocking_send(Ok(multipart_chunk(&jpeg))).is_err() {
                    log::debug!("video feed client disconnected");
                    return;
                }
            }
            None => {
                if tx.is_closed() {
                    return;
                }
                std::thread::sleep(IDLE_DELAY);
            }
        }
    }
}

fn multipart_chunk(jpeg: &[u8]) -> Bytes {
    let mut part = Vec::with_capacity(jpeg.len() + 64);
    part.extend_from_slice(b"--frame\r\nContent-Type: image/jpeg\r\n\r\n");
    part.extend_from_slice(jpeg);
    part.extend_from_slice(b"\r\n");
    Bytes::from(part)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multipart_chunk_framing() {
        let chunk = multipart_chunk(&[1, 2, 3]);
        assert!(chunk.starts_with(b"--frame\r\nContent-Type: image/jpeg\r\n\r\n"));
        assert!(chunk.ends_with(&[1, 2, 3, b'\r', b'\n']));
    }
}

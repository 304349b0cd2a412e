//! CPU overlay of a detected skeleton onto a frame.
//!
//! Normalized landmark coordinates are scaled to pixel space, connection
//! segments are drawn with Bresenham lines and joints as small filled
//! squares. All writes go through `Frame::put_pixel`, which discards
//! out-of-bounds pixels, so partially off-screen skeletons are safe.

use crate::pose::domain::landmarks::PoseLandmarks;
use crate::pose::domain::skeleton::POSE_CONNECTIONS;
use crate::shared::constants::DRAW_VISIBILITY_THRESHOLD;
use crate::shared::frame::Frame;

const BONE_COLOR: [u8; 3] = [0, 255, 0];
const JOINT_COLOR: [u8; 3] = [255, 0, 0];
const JOINT_RADIUS: i64 = 2;

/// Draws `landmarks` onto `frame` in place.
///
/// Joints (and segments touching them) below the visibility threshold are
/// skipped, matching how low-confidence estimates jitter too much to be
/// worth showing.
pub fn draw_landmarks(frame: &mut Frame, landmarks: &PoseLandmarks) {
    let w = frame.width() as f64;
    let h = frame.height() as f64;

    for &(from, to) in POSE_CONNECTIONS {
        let (Some(a), Some(b)) = (landmarks.get(from), landmarks.get(to)) else {
            continue;
        };
        if a.visibility < DRAW_VISIBILITY_THRESHOLD || b.visibility < DRAW_VISIBILITY_THRESHOLD {
            continue;
        }
        draw_line(
            frame,
            (a.x * w) as i64,
            (a.y * h) as i64,
            (b.x * w) as i64,
            (b.y * h) as i64,
        );
    }

    for lm in landmarks.landmarks() {
        if lm.visibility < DRAW_VISIBILITY_THRESHOLD {
            continue;
        }
        let cx = (lm.x * w) as i64;
        let cy = (lm.y * h) as i64;
        for dy in -JOINT_RADIUS..=JOINT_RADIUS {
            for dx in -JOINT_RADIUS..=JOINT_RADIUS {
                frame.put_pixel(cx + dx, cy + dy, JOINT_COLOR);
            }
        }
    }
}

/// Bresenham line between two pixel coordinates.
fn draw_line(frame: &mut Frame, x0: i64, y0: i64, x1: i64, y1: i64) {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    let (mut x, mut y) = (x0, y0);

    loop {
        frame.put_pixel(x, y, BONE_COLOR);
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pose::domain::landmarks::Landmark;

    fn lm(x: f64, y: f64, visibility: f64) -> Landmark {
        Landmark {
            x,
            y,
            z: 0.0,
            visibility,
        }
    }

    fn blank(size: u32) -> Frame {
        Frame::new(vec![0u8; (size * size * 3) as usize], size, size, 0)
    }

    /// 33 landmarks all at the same spot, fully visible.
    fn full_pose(x: f64, y: f64) -> PoseLandmarks {
        PoseLandmarks::new(vec![lm(x, y, 1.0); 33])
    }

    #[test]
    fn test_visible_pose_marks_pixels() {
        let mut frame = blank(64);
        draw_landmarks(&mut frame, &full_pose(0.5, 0.5));
        assert!(frame.data().iter().any(|&b| b != 0));
    }

    #[test]
    fn test_invisible_pose_draws_nothing() {
        let mut frame = blank(64);
        let pose = PoseLandmarks::new(vec![lm(0.5, 0.5, 0.1); 33]);
        draw_landmarks(&mut frame, &pose);
        assert!(frame.data().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_off_screen_pose_does_not_panic() {
        let mut frame = blank(16);
        draw_landmarks(&mut frame, &full_pose(3.0, -2.0));
    }

    #[test]
    fn test_line_connects_endpoints() {
        let mut frame = blank(16);
        draw_line(&mut frame, 1, 1, 10, 6);
        let at = |x: usize, y: usize| &frame.data()[(y * 16 + x) * 3..(y * 16 + x) * 3 + 3];
        assert_eq!(at(1, 1), &BONE_COLOR);
        assert_eq!(at(10, 6), &BONE_COLOR);
    }

    #[test]
    fn test_short_landmark_set_is_tolerated() {
        // Fewer than 33 landmarks: connections referencing missing joints
        // are skipped instead of panicking.
        let mut frame = blank(16);
        let pose = PoseLandmarks::new(vec![lm(0.5, 0.5, 1.0); 5]);
        draw_landmarks(&mut frame, &pose);
    }
}

/// One estimated body joint in normalized image coordinates.
///
/// `x` and `y` are fractions of frame width/height (roughly [0, 1]; joints
/// outside the frame can exceed that range). `z` is depth relative to the
/// hip midpoint on the same scale. `visibility` is a confidence in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Landmark {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub visibility: f64,
}

impl Landmark {
    /// Euclidean distance to another landmark in (x, y, z).
    pub fn distance_to(&self, other: &Landmark) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

/// An ordered set of body-joint landmarks for one frame, in model order.
///
/// Produced fresh per frame by the estimator; never retained across frames
/// except by the offline landmark table.
#[derive(Clone, Debug, PartialEq)]
pub struct PoseLandmarks {
    landmarks: Vec<Landmark>,
}

impl PoseLandmarks {
    pub fn new(landmarks: Vec<Landmark>) -> Self {
        Self { landmarks }
    }

    pub fn landmarks(&self) -> &[Landmark] {
        &self.landmarks
    }

    pub fn len(&self) -> usize {
        self.landmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Landmark> {
        self.landmarks.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_distance_to_self_is_zero() {
        let lm = Landmark {
            x: 0.3,
            y: 0.7,
            z: -0.1,
            visibility: 0.9,
        };
        assert_relative_eq!(lm.distance_to(&lm), 0.0);
    }

    #[test]
    fn test_distance_is_euclidean() {
        let a = Landmark {
            x: 0.0,
            y: 0.0,
            z: 0.0,
            visibility: 1.0,
        };
        let b = Landmark {
            x: 1.0,
            y: 2.0,
            z: 2.0,
            visibility: 1.0,
        };
        assert_relative_eq!(a.distance_to(&b), 3.0);
    }

    #[test]
    fn test_distance_ignores_visibility() {
        let a = Landmark {
            x: 0.5,
            y: 0.5,
            z: 0.0,
            visibility: 0.1,
        };
        let b = Landmark {
            x: 0.5,
            y: 0.5,
            z: 0.0,
            visibility: 0.95,
        };
        assert_relative_eq!(a.distance_to(&b), 0.0);
    }

    #[test]
    fn test_pose_landmarks_ordered_access() {
        let lms = PoseLandmarks::new(vec![
            Landmark {
                x: 0.1,
                y: 0.2,
                z: 0.0,
                visibility: 1.0,
            },
            Landmark {
                x: 0.3,
                y: 0.4,
                z: 0.0,
                visibility: 1.0,
            },
        ]);
        assert_eq!(lms.len(), 2);
        assert_relative_eq!(lms.get(1).unwrap().x, 0.3);
        assert!(lms.get(2).is_none());
    }
}

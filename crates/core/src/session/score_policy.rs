use rand::Rng;

use crate::pose::domain::landmarks::PoseLandmarks;
use crate::shared::constants::{SCORE_MAX, SCORE_MIN};

/// Turns one detected pose into one dance score.
///
/// This is the seam for real scoring: a genuine implementation would
/// compare the landmarks against a reference choreography (the offline
/// comparison tool shows the distance metric such a policy could use).
pub trait ScorePolicy: Send {
    fn score(&mut self, landmarks: &PoseLandmarks) -> u32;
}

/// Placeholder policy: a uniform random integer in [60, 100).
///
/// Deliberately not a similarity measure. It exists so the capture and
/// HTTP layers are complete while the actual metric is still undefined.
pub struct RandomScorePolicy;

impl ScorePolicy for RandomScorePolicy {
    fn score(&mut self, _landmarks: &PoseLandmarks) -> u32 {
        rand::rng().random_range(SCORE_MIN..SCORE_MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn any_pose() -> PoseLandmarks {
        PoseLandmarks::new(vec![
            crate::pose::domain::landmarks::Landmark {
                x: 0.5,
                y: 0.5,
                z: 0.0,
                visibility: 1.0,
            };
            33
        ])
    }

    #[test]
    fn test_random_scores_stay_in_range() {
        let mut policy = RandomScorePolicy;
        let pose = any_pose();
        for _ in 0..200 {
            let s = policy.score(&pose);
            assert!((SCORE_MIN..SCORE_MAX).contains(&s), "score {s} out of range");
        }
    }
}

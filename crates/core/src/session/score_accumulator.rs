use crate::pose::domain::landmarks::PoseLandmarks;
use crate::session::score_policy::ScorePolicy;

/// Collects one score per processed frame while a dance is active.
///
/// Invariant: the list only grows through `record` calls that had both
/// landmarks and an active dance; `reset` and `finalize` leave it empty.
pub struct ScoreAccumulator {
    policy: Box<dyn ScorePolicy>,
    scores: Vec<u32>,
}

impl ScoreAccumulator {
    pub fn new(policy: Box<dyn ScorePolicy>) -> Self {
        Self {
            policy,
            scores: Vec::new(),
        }
    }

    /// Scores one frame. Returns 0 without recording when no pose was
    /// detected or no dance is active.
    pub fn record(&mut self, landmarks: Option<&PoseLandmarks>, dance_id: Option<&str>) -> u32 {
        let (Some(landmarks), Some(_)) = (landmarks, dance_id) else {
            return 0;
        };
        let score = self.policy.score(landmarks);
        self.scores.push(score);
        score
    }

    /// Integer mean of the recorded scores (0 when none), then clears.
    ///
    /// Truncates toward zero, matching integer-mean display semantics.
    pub fn finalize(&mut self) -> u32 {
        let mean = if self.scores.is_empty() {
            0
        } else {
            let sum: u64 = self.scores.iter().map(|&s| u64::from(s)).sum();
            (sum / self.scores.len() as u64) as u32
        };
        self.scores.clear();
        mean
    }

    pub fn reset(&mut self) {
        self.scores.clear();
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

//! Fixed skeleton connectivity for the 33-landmark BlazePose topology.
//!
//! Indices follow the model's landmark order: 0 nose, 1-10 face, 11/12
//! shoulders, 13-22 arms and hands, 23/24 hips, 25-32 legs and feet.

/// Drawable (from, to) landmark-index pairs.
pub const POSE_CONNECTIONS: &[(usize, usize)] = &[
    // face
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 7),
    (0, 4),
    (4, 5),
    (5, 6),
    (6, 8),
    (9, 10),
    // torso
    (11, 12),
    (11, 23),
    (12, 24),
    (23, 24),
    // left arm
    (11, 13),
    (13, 15),
    (15, 17),
    (15, 19),
    (15, 21),
    (17, 19),
    // right arm
    (12, 14),
    (14, 16),
    (16, 18),
    (16, 20),
    (16, 22),
    (18, 20),
    // left leg
    (23, 25),
    (25, 27),
    (27, 29),
    (27, 31),
    (29, 31),
    // right leg
    (24, 26),
    (26, 28),
    (28, 30),
    (28, 32),
    (30, 32),
];

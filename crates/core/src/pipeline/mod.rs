pub mod compare_poses_use_case;
pub mod extract_landmarks_use_case;
pub mod landmark_table;
pub mod preview_pose_use_case;

#[cfg(test)]
pub(crate) mod test_support;

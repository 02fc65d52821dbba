use bevy::prelude::*;

use crate::engine::population::PhotoId;

/// Screen fraction (origin top-left, y down) to normalised device coordinates.
#[inline]
pub fn pointer_to_ndc(pointer: Vec2) -> Vec2 {
    Vec2::new(pointer.x * 2.0 - 1.0, 1.0 - pointer.y * 2.0)
}

/// Projects a world point through `view_projection`.
///
/// Points behind the camera (`w <= 0`) or outside the `[0, 1]` depth range
/// are rejected.
pub fn project_to_ndc(view_projection: &Mat4, world: Vec3) -> Option<Vec3> {
    let clip = *view_projection * world.extend(1.0);
    if clip.w <= f32::EPSILON {
        return None;
    }
    let ndc = clip.truncate() / clip.w;
    if !ndc.is_finite() || ndc.z < 0.0 || ndc.z > 1.0 {
        return None;
    }
    Some(ndc)
}

/// Panel whose projection is closest to `pointer_ndc`, with that distance.
pub fn nearest_panel(
    panels: impl IntoIterator<Item = (PhotoId, Vec3)>,
    view_projection: &Mat4,
    pointer_ndc: Vec2,
) -> Option<(PhotoId, f32)> {
    let mut best: Option<(PhotoId, f32)> = None;
    for (id, world) in panels {
        let Some(ndc) = project_to_ndc(view_projection, world) else {
            continue;
        };
        let distance = ndc.truncate().distance(pointer_ndc);
        if best.is_none_or(|(_, best_distance)| distance < best_distance) {
            best = Some((id, distance));
        }
    }
    best
}

/// Nearest panel if it lies strictly within `threshold` of the pointer.
pub fn panel_under_pointer(
    panels: impl IntoIterator<Item = (PhotoId, Vec3)>,
    view_projection: &Mat4,
    pointer_ndc: Vec2,
    threshold: f32,
) -> Option<PhotoId> {
    nearest_panel(panels, view_projection, pointer_ndc)
        .filter(|(_, distance)| *distance < threshold)
        .map(|(id, _)| id)
}

#[cfg(test)]
pub(crate) fn test_view_projection() -> Mat4 {
    let view = Mat4::look_at_rh(Vec3::new(0.0, 0.0, 20.0), Vec3::ZERO, Vec3::Y);
    let projection = Mat4::perspective_infinite_reverse_rh(0.8, 1.0, 0.1);
    projection * view
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_centre_is_ndc_origin() {
        assert_eq!(pointer_to_ndc(Vec2::splat(0.5)), Vec2::ZERO);
        assert_eq!(pointer_to_ndc(Vec2::ZERO), Vec2::new(-1.0, 1.0));
        assert_eq!(pointer_to_ndc(Vec2::ONE), Vec2::new(1.0, -1.0));
    }

    #[test]
    fn point_on_view_axis_projects_to_centre() {
        let ndc = project_to_ndc(&test_view_projection(), Vec3::ZERO).expect("visible");
        assert!(ndc.truncate().length() < 1e-6);
        assert!(ndc.z > 0.0 && ndc.z <= 1.0);
    }

    #[test]
    fn points_behind_camera_are_rejected() {
        assert!(project_to_ndc(&test_view_projection(), Vec3::new(0.0, 0.0, 40.0)).is_none());
    }

    #[test]
    fn right_and_up_map_to_positive_ndc() {
        let ndc = project_to_ndc(&test_view_projection(), Vec3::new(2.0, 1.0, 0.0))
            .expect("visible");
        assert!(ndc.x > 0.0 && ndc.y > 0.0);
    }

    #[test]
    fn nearest_panel_wins() {
        let panels = [
            (PhotoId(1), Vec3::new(3.0, 0.0, 0.0)),
            (PhotoId(2), Vec3::new(0.1, 0.0, 0.0)),
            (PhotoId(3), Vec3::new(0.0, 0.0, 40.0)),
        ];
        let (id, distance) =
            nearest_panel(panels, &test_view_projection(), Vec2::ZERO).expect("hit");
        assert_eq!(id, PhotoId(2));
        assert!(distance < 0.05);
    }

    #[test]
    fn threshold_filters_far_panels() {
        let panels = [(PhotoId(1), Vec3::new(3.0, 0.0, 0.0))];
        assert_eq!(
            panel_under_pointer(panels, &test_view_projection(), Vec2::ZERO, 0.05),
            None
        );
    }
}

//! Recorder URL space.
//!
//! Pure builders for the origin-relative paths the console talks to.

use crate::dom;

/// Path of the server-rendered widget fragment for one camera.
///
/// The camera id doubles as the container id, so a `#`-prefixed id is
/// normalized before it lands in the path.
pub fn widget_path(camera: &str) -> String {
    format!("/recorder/{}/view_widget", dom::normalize_id(camera))
}

/// Path of a one-shot control command.
pub fn command_path(camera: &str, target: &str, command: &str) -> String {
    format!("/recorder/{}/{}/{}", camera, target, command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widget_path_shape() {
        assert_eq!(widget_path("cam1"), "/recorder/cam1/view_widget");
    }

    #[test]
    fn widget_path_normalizes_marker_prefixed_ids() {
        assert_eq!(widget_path("#cam1"), "/recorder/cam1/view_widget");
    }

    #[test]
    fn command_path_shape() {
        assert_eq!(
            command_path("cam1", "motion", "enable"),
            "/recorder/cam1/motion/enable"
        );
    }
}

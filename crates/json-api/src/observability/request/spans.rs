//! Route labels for request logs and metrics.

use uuid::Uuid;

/// Collapse identifier segments so one route maps to one label.
///
/// Image paths are folded into a single label to keep metric cardinality
/// bounded.
pub(super) fn route_label(path: &str) -> String {
    if path == "/" {
        return "/".to_owned();
    }

    let mut segments = path.trim_start_matches('/').split('/');

    if segments.next() == Some("images") {
        return "/images/{path}".to_owned();
    }

    let mut label = String::new();

    for segment in path.trim_start_matches('/').split('/') {
        label.push('/');

        if Uuid::parse_str(segment).is_ok() {
            label.push_str("{id}");
        } else {
            label.push_str(segment);
        }
    }

    label
}

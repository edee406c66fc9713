//! Route templates for log fields.

use uuid::Uuid;

/// Replace id segments with `{unit}` so requests for different units group together.
pub(super) fn route_template(path: &str) -> String {
    let segments: Vec<&str> = path
        .trim_start_matches('/')
        .split('/')
        .map(|segment| {
            if Uuid::parse_str(segment).is_ok() {
                "{unit}"
            } else {
                segment
            }
        })
        .collect();

    format!("/{}", segments.join("/"))
}

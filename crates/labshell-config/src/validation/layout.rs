//! Split layout settings validation.

use crate::schema::ShellSettings;

use super::helpers::{validate_non_empty, validate_range, validate_range_f64};

pub(crate) fn validate_layout(errors: &mut Vec<String>, settings: &ShellSettings) {
    let layout = &settings.layout;
    validate_range(errors, "layout.breakpoint_px", layout.breakpoint_px, 320, 4096);
    validate_range(errors, "layout.debounce_ms", layout.debounce_ms, 0, 2000);
    validate_range_f64(errors, "layout.default_left", layout.default_left, 0.0, 100.0);
    validate_range_f64(errors, "layout.default_right", layout.default_right, 0.0, 100.0);
    if layout.default_left + layout.default_right <= 0.0 {
        errors.push("layout.default_left + layout.default_right must be positive".into());
    }
    validate_range(
        errors,
        "layout.min_tool_pane_px",
        layout.min_tool_pane_px,
        0,
        2000,
    );
    validate_range(errors, "layout.gutter_px", layout.gutter_px, 0, 40);
    validate_non_empty(errors, "layout.storage_key", &layout.storage_key);
}

//! Default TOML settings template with inline documentation comments.

/// Generate the default TOML settings content with comments.
pub(crate) fn default_settings_toml() -> String {
    r##"# labshell settings
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[layout]
# breakpoint_px = 768        # 320-4096, split shown at or above this width
# debounce_ms = 100          # 0-2000
# default_left = 25.0        # instructions pane share (percent)
# default_right = 75.0       # tool pane share (percent)
# min_tool_pane_px = 300     # 0-2000
# gutter_px = 8              # 0-40
# storage_key = "labshell.split-layout"

[timer]
# tick_ms = 1000             # 100-60000
# expired_grace_ms = 1000    # 0-10000
# expired_redirect = "/expired.html"

[toolpane]
# frame_sandbox = "allow-same-origin allow-scripts allow-popups allow-forms"
# watch_for_new_tools = true
# watch_debounce_ms = 500    # 50-10000

[logging]
# level = "info"             # trace, debug, info, warn, error
"##
    .to_string()
}

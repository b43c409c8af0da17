//! Lab payload validation (tool names, urls, instructions routing).

use std::collections::HashSet;

use tracing::warn;

use crate::lab::LabConfig;

pub(crate) fn validate_tools(errors: &mut Vec<String>, config: &LabConfig) {
    let mut seen = HashSet::new();
    for (index, tool) in config.tools.iter().enumerate() {
        if tool.name.trim().is_empty() {
            errors.push(format!("tools[{index}].name must not be empty"));
        } else if !seen.insert(tool.name.as_str()) {
            errors.push(format!("tools[{index}].name {:?} is duplicated", tool.name));
        }
        if tool.url.trim().is_empty() {
            errors.push(format!("tools[{index}].url must not be empty"));
        }
    }

    let instructions = config.tools.iter().filter(|t| t.is_instructions()).count();
    if instructions > 1 {
        errors.push(format!(
            "at most one tool may have kind \"instructions\", found {instructions}"
        ));
    }
}

/// A default tool that names no tab is tolerated; the first tab is used.
pub(crate) fn check_default_tool(config: &LabConfig) {
    let default = config.default_tool();
    if !config.tab_tools().any(|t| t.name == default) {
        warn!("defaultTool {default:?} does not name a tab; the first tab will be active");
    }
}

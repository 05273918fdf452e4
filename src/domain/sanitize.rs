//! Script marker escaping for rendered tag content

const SCRIPT_OPEN: &str = "<%";
const SCRIPT_CLOSE: &str = "%>";
const ESCAPED_OPEN: &str = "&lt;%";
const ESCAPED_CLOSE: &str = "%&gt;";

/// Settings that affect how tag content is rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderSettings {
    /// Pass `<%` / `%>` markers through untouched
    pub allow_script: bool,
}

/// Escape script markers unless scripts are allowed or the caller is exempt
pub fn sanitize_script(content: &str, allow_script: bool, exempt: bool) -> String {
    if allow_script || exempt {
        content.to_string()
    } else {
        content
            .replace(SCRIPT_OPEN, ESCAPED_OPEN)
            .replace(SCRIPT_CLOSE, ESCAPED_CLOSE)
    }
}

//! Path translation between the host and the plugin sandbox.

use std::path::PathBuf;

/// Sandbox mount point of the host filesystem.
const HOST_ROOT: &str = "/host";

/// Returns the directory holding Promptfolio's trace output.
///
/// Resolves to `/host/.local/share/zellij/promptfolio`, which is
/// `~/.local/share/zellij/promptfolio` when Zellij was started from the home
/// directory.
///
/// ```
/// use promptfolio::infrastructure::get_data_dir;
///
/// assert_eq!(get_data_dir().to_str(), Some("/host/.local/share/zellij/promptfolio"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from(HOST_ROOT)
        .join(".local/share/zellij")
        .join("promptfolio")
}

/// Maps a `~`-prefixed path onto the sandbox mount.
///
/// ```
/// use promptfolio::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/prompts.json"), "/host/prompts.json");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/data/prompts.json"), "/data/prompts.json");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    match path.strip_prefix('~') {
        Some("") => HOST_ROOT.to_string(),
        Some(rest) if rest.starts_with('/') => format!("{HOST_ROOT}{rest}"),
        _ => path.to_string(),
    }
}

/// Removes the sandbox mount prefix so a path reads as it does on the host.
#[must_use]
pub fn strip_host_prefix(path: &str) -> String {
    match path.strip_prefix(HOST_ROOT) {
        Some("") => "/".to_string(),
        Some(rest) if rest.starts_with('/') => rest.to_string(),
        _ => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tilde_only_expands_as_home_prefix() {
        assert_eq!(expand_tilde("~/.config/promptfolio/prompts.json"), "/host/.config/promptfolio/prompts.json");
        assert_eq!(expand_tilde("~user/prompts.json"), "~user/prompts.json");
        assert_eq!(expand_tilde("prompts~.json"), "prompts~.json");
    }

    #[test]
    fn test_strip_host_prefix_respects_component_boundary() {
        assert_eq!(strip_host_prefix("/host/home/me/prompts.json"), "/home/me/prompts.json");
        assert_eq!(strip_host_prefix("/hostname/prompts.json"), "/hostname/prompts.json");
        assert_eq!(strip_host_prefix("/host"), "/");
        assert_eq!(strip_host_prefix("relative.json"), "relative.json");
    }
}

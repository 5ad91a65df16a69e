//! Path helpers for the Zellij sandbox.

use std::path::PathBuf;

/// Directory holding the plugin's trace files.
///
/// `/host` is where Zellij mounts the directory it was started from, which is
/// usually the user's home, so this normally resolves to
/// `~/.local/share/zellij/mercado-busca` on the host.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("mercado-busca")
}

/// Rewrites a `~`-prefixed path to its `/host` sandbox equivalent.
///
/// # Examples
///
/// ```
/// use mercado_busca::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dark.toml"), "/host/themes/dark.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/etc/theme.toml"), "/etc/theme.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path == "~" {
        "/host".to_string()
    } else if let Some(rest) = path.strip_prefix("~/") {
        format!("/host/{rest}")
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_dir_lives_under_host() {
        assert_eq!(
            get_data_dir(),
            PathBuf::from("/host/.local/share/zellij/mercado-busca")
        );
    }

    #[test]
    fn only_leading_tilde_expands() {
        assert_eq!(expand_tilde("~user/x"), "~user/x");
        assert_eq!(expand_tilde("a/~/b"), "a/~/b");
    }
}

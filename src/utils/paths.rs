use std::path::{MAIN_SEPARATOR, Path};

/// Formats a path for display, replacing the home directory with `~`
///
/// # Examples
///
/// ```no_run
/// use std::path::PathBuf;
/// use base_converter::format_path_with_tilde;
///
/// let path = PathBuf::from("/home/alice/.local/share/base-converter/history.json");
/// // "~/.local/share/base-converter/history.json" when the home directory is /home/alice
/// let formatted = format_path_with_tilde(&path);
/// ```
pub fn format_path_with_tilde(path: &Path) -> String {
    display_relative_to_home(path, dirs::home_dir().as_deref())
}

fn display_relative_to_home(path: &Path, home: Option<&Path>) -> String {
    let rest = home
        .filter(|home| !home.as_os_str().is_empty())
        .and_then(|home| path.strip_prefix(home).ok());

    match rest {
        Some(rest) if rest.as_os_str().is_empty() => "~".to_string(),
        Some(rest) => format!("~{}{}", MAIN_SEPARATOR, rest.display()),
        None => path.display().to_string(),
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn home() -> Option<&'static Path> {
        Some(Path::new("/home/alice"))
    }

    #[test]
    fn test_path_under_home() {
        let path = Path::new("/home/alice/.local/share/base-converter/history.json");
        assert_eq!(display_relative_to_home(path, home()), "~/.local/share/base-converter/history.json");
    }

    #[test]
    fn test_home_itself() {
        assert_eq!(display_relative_to_home(Path::new("/home/alice"), home()), "~");
    }

    #[test]
    fn test_path_outside_home() {
        let path = Path::new("/tmp/history.json");
        assert_eq!(display_relative_to_home(path, home()), "/tmp/history.json");
    }

    #[test]
    fn test_sibling_directory_not_abbreviated() {
        let path = Path::new("/home/alicia/history.json");
        assert_eq!(display_relative_to_home(path, home()), "/home/alicia/history.json");
    }

    #[test]
    fn test_missing_or_empty_home() {
        let path = Path::new("/tmp/history.json");
        assert_eq!(display_relative_to_home(path, None), "/tmp/history.json");
        assert_eq!(display_relative_to_home(path, Some(Path::new(""))), "/tmp/history.json");
    }
}

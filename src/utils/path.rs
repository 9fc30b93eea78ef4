//! Path utilities: expand `~` in user-supplied paths.

use std::path::PathBuf;

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_leading_tilde_is_expanded() {
        assert_eq!(expand_tilde("/tmp/a.sqlite"), PathBuf::from("/tmp/a.sqlite"));
        assert_eq!(expand_tilde("a/~/b"), PathBuf::from("a/~/b"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde("~/x"), home.join("x"));
        }
    }
}

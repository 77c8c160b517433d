use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "actions-demo.yaml";

/// Resolve the config file path.
///
/// Priority:
/// 1. `--config` flag / `ACTIONS_DEMO_CONFIG` env var (passed in as `explicit`)
/// 2. Walk upward from `cwd` looking for `actions-demo.yaml`
/// 3. Fall back to `cwd/actions-demo.yaml`, which need not exist
pub fn resolve_config_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(p) = explicit {
        return p.to_path_buf();
    }

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    find_upward(&cwd).unwrap_or_else(|| cwd.join(CONFIG_FILE))
}

fn find_upward(start: &Path) -> Option<PathBuf> {
    let mut dir = start.to_path_buf();
    loop {
        let candidate = dir.join(CONFIG_FILE);
        if candidate.is_file() {
            return Some(candidate);
        }
        match dir.parent() {
            Some(p) => dir = p.to_path_buf(),
            None => return None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn explicit_path_wins() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.yaml");
        assert_eq!(resolve_config_path(Some(&path)), path);
    }

    #[test]
    fn finds_config_in_ancestor() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "combo:\n  count: 1\n").unwrap();
        let subdir = dir.path().join("src/deep");
        std::fs::create_dir_all(&subdir).unwrap();

        assert_eq!(find_upward(&subdir), Some(dir.path().join(CONFIG_FILE)));
    }

    #[test]
    fn skips_directory_named_like_config() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "").unwrap();
        let nested = dir.path().join("nested");
        std::fs::create_dir_all(nested.join(CONFIG_FILE)).unwrap();

        assert_eq!(find_upward(&nested), Some(dir.path().join(CONFIG_FILE)));
    }
}

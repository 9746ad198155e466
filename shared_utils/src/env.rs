use std::path::PathBuf;

/// Reads an optional environment variable.
///
/// Unset and blank values are both treated as absent; set values are trimmed.
pub fn get_env_var_opt(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Reads an optional environment variable holding a filesystem path.
pub fn env_path(name: &str) -> Option<PathBuf> {
    get_env_var_opt(name).map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Each test owns a distinct variable name so parallel runs don't interfere.

    #[test]
    fn unset_var_is_absent() {
        assert!(get_env_var_opt("SHARED_UTILS_TEST_DEFINITELY_UNSET").is_none());
    }

    #[test]
    fn blank_var_is_absent() {
        unsafe { std::env::set_var("SHARED_UTILS_TEST_BLANK", "   ") };
        assert!(get_env_var_opt("SHARED_UTILS_TEST_BLANK").is_none());
        assert!(env_path("SHARED_UTILS_TEST_BLANK").is_none());
    }

    #[test]
    fn value_is_trimmed() {
        unsafe { std::env::set_var("SHARED_UTILS_TEST_PADDED", "  prices  ") };
        assert_eq!(
            get_env_var_opt("SHARED_UTILS_TEST_PADDED").as_deref(),
            Some("prices")
        );
    }

    #[test]
    fn path_override_is_read() {
        unsafe { std::env::set_var("SHARED_UTILS_TEST_PATH", "/tmp/prices") };
        assert_eq!(
            env_path("SHARED_UTILS_TEST_PATH"),
            Some(PathBuf::from("/tmp/prices"))
        );
    }
}

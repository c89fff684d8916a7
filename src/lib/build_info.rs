//! Build metadata embedded by `build.rs`.

/// Full commit hash of this build, or `unknown` outside a git checkout.
pub fn git_commit_hash() -> &'static str {
    match option_env!("FLEGI_WEB_GIT_SHA") {
        Some(value) if !value.is_empty() => value,
        _ => "unknown",
    }
}

/// Abbreviated hash for the footer.
pub fn short_commit_hash() -> String {
    git_commit_hash().chars().take(7).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commit_hash_is_never_empty() {
        assert!(!git_commit_hash().is_empty());
    }

    #[test]
    fn short_hash_is_at_most_seven_chars() {
        assert!(short_commit_hash().len() <= 7);
    }
}

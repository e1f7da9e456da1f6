pub const APP_NAME: &str = "Card Flip Scanner";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GIT_TAG: Option<&str> = option_env!("GIT_TAG");

/// Release tag when built from a tagged checkout, otherwise the crate version.
pub fn version_label() -> String {
    version_label_from(GIT_TAG, APP_VERSION)
}

fn version_label_from(tag: Option<&str>, version: &str) -> String {
    match tag {
        Some(tag) => tag.to_string(),
        None => format!("v{version}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_label_prefers_git_tag() {
        assert_eq!(version_label_from(Some("v1.2.0"), "1.0.0"), "v1.2.0");
        assert_eq!(version_label_from(None, "1.0.0"), "v1.0.0");
    }
}

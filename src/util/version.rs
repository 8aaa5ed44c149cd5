pub const APP_NAME: &str = "Seller Trust Scanner";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GIT_TAG: Option<&str> = option_env!("GIT_TAG");

/// Version shown in the footer: the release tag when built from one,
/// otherwise the crate version.
pub fn version_label() -> String {
    label_for(GIT_TAG, APP_VERSION)
}

fn label_for(tag: Option<&str>, crate_version: &str) -> String {
    match tag {
        Some(tag) => tag.to_string(),
        None => format!("v{crate_version}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_git_tag() {
        assert_eq!(label_for(Some("v1.2.0"), "0.1.0"), "v1.2.0");
        assert_eq!(label_for(None, "0.1.0"), "v0.1.0");
    }
}

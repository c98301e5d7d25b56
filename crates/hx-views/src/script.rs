//! htmx script-tag helper.
//!
//! Registered as the `htmx_script` template global by [`JinjaEngine`]
//! (crate::JinjaEngine) so bootstrap pages can pull in the client library
//! without hard-coding CDN URLs.

/// Build the htmx `<script>` tag for the given version.
///
/// `"latest"` loads the unpinned CDN build; anything else pins the version.
#[must_use]
pub fn htmx_script(version: &str) -> String {
    let src = if version == "latest" {
        "https://unpkg.com/htmx.org".to_owned()
    } else {
        format!("https://unpkg.com/htmx.org@{version}")
    };

    format!("<script src=\"{src}\"></script>")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_latest_is_unpinned() {
        assert_eq!(
            htmx_script("latest"),
            "<script src=\"https://unpkg.com/htmx.org\"></script>"
        );
    }

    #[test]
    fn test_version_is_pinned() {
        assert_eq!(
            htmx_script("2.0.4"),
            "<script src=\"https://unpkg.com/htmx.org@2.0.4\"></script>"
        );
    }
}

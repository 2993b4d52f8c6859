//! Page-level behavior shared by the secondary pages: scroll reset on load,
//! smooth in-page anchors and the `loaded` body class.

/// Class added to `<body>` once the window `load` event fired.
pub const LOADED_CLASS: &str = "loaded";
/// Links handled by the smooth anchor scroll.
pub const IN_PAGE_LINKS: &str = "a[href^=\"#\"]";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PageChrome {
    /// Start at the top of the page instead of a restored position.
    pub reset_scroll: bool,
    pub smooth_anchors: bool,
    pub mark_loaded: bool,
}

impl PageChrome {
    pub const fn contact() -> Self {
        Self {
            reset_scroll: true,
            smooth_anchors: true,
            mark_loaded: true,
        }
    }

    pub const fn project_details() -> Self {
        Self {
            reset_scroll: true,
            smooth_anchors: false,
            mark_loaded: false,
        }
    }
}

/// Element id an in-page link points at. A bare `#` and links to other
/// documents have none.
pub fn fragment_target(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some(id) if !id.is_empty() => Some(id),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_links_name_their_target() {
        assert_eq!(fragment_target("#contact"), Some("contact"));
        assert_eq!(fragment_target("#"), None);
        assert_eq!(fragment_target(""), None);
        assert_eq!(fragment_target("index.html#work"), None);
    }

    #[test]
    fn contact_page_gets_every_behavior() {
        let contact = PageChrome::contact();
        assert!(contact.reset_scroll && contact.smooth_anchors && contact.mark_loaded);

        let details = PageChrome::project_details();
        assert!(details.reset_scroll);
        assert!(!details.smooth_anchors && !details.mark_loaded);
    }
}

/// Page scroll offset, in pixels, past which the navbar turns opaque.
pub const SCROLL_THRESHOLD: f64 = 50.0;

pub mod anchors {
    pub const HOME: &str = "home";
    pub const ABOUT: &str = "about";
    pub const TIMELINE: &str = "timeline";
    pub const PROJECTS: &str = "projects";
    pub const CONTACT: &str = "contact";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub anchor: &'static str,
}

impl NavItem {
    pub fn href(&self) -> String {
        format!("#{}", self.anchor)
    }
}

pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem {
        label: "Home",
        anchor: anchors::HOME,
    },
    NavItem {
        label: "About",
        anchor: anchors::ABOUT,
    },
    NavItem {
        label: "Timeline",
        anchor: anchors::TIMELINE,
    },
    NavItem {
        label: "Projects",
        anchor: anchors::PROJECTS,
    },
    NavItem {
        label: "Contact",
        anchor: anchors::CONTACT,
    },
];

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLL_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_exclusive() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
    }

    #[test]
    fn items_link_to_sections_in_page_order() {
        let hrefs = NAV_ITEMS.iter().map(NavItem::href).collect::<Vec<_>>();
        assert_eq!(
            hrefs,
            vec!["#home", "#about", "#timeline", "#projects", "#contact"]
        );
    }
}

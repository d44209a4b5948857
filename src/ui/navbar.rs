// SPDX-License-Identifier: MPL-2.0
//! Navigation chrome driven by scroll position and clicks.
//!
//! - [`Navbar`]: `#navbar` styling, hide-on-scroll and active link highlighting
//! - [`SiteHeader`]: the lighter `.site-header` used by the multi-page layout
//! - [`MobileMenu`]: the hamburger-driven `#nav-menu`

use crate::dom::{Document, NodeId};
use crate::domain::scroll::{self, ScrollState, ScrollThresholds, ScrollTracker, SectionAnchor};

/// Class added once the page is scrolled past the threshold.
pub const SCROLLED_CLASS: &str = "scrolled";
/// Class marking the highlighted link and the open mobile menu.
pub const ACTIVE_CLASS: &str = "active";

const HIDDEN_TRANSFORM: &str = "translateY(-100%)";
const SHOWN_TRANSFORM: &str = "translateY(0)";

/// The fixed top navigation bar plus the in-page section links.
#[derive(Debug, Clone)]
pub struct Navbar {
    element: Option<NodeId>,
    links: Vec<NodeId>,
    sections: Vec<NodeId>,
    tracker: ScrollTracker,
    state: ScrollState,
}

impl Navbar {
    /// Resolves `#navbar`, `.nav-link` and `section[id]` in `document`.
    #[must_use]
    pub fn bind(document: &Document, thresholds: ScrollThresholds) -> Self {
        let element = document.get_element_by_id("navbar");
        if element.is_none() {
            tracing::debug!("page has no #navbar");
        }
        Self {
            element,
            links: document.query_selector_all(".nav-link"),
            sections: document.query_selector_all("section[id]"),
            tracker: ScrollTracker::new(thresholds),
            state: ScrollState::default(),
        }
    }

    /// Section anchors in document order, with their current offsets.
    #[must_use]
    pub fn section_anchors(&self, document: &Document) -> Vec<SectionAnchor> {
        self.sections
            .iter()
            .filter_map(|section| {
                let id = document.id(*section)?;
                Some(SectionAnchor::new(id, document.offset_top(*section)))
            })
            .collect()
    }

    /// Recomputes the scroll state for `offset` and applies it to the page.
    pub fn on_scroll(&mut self, document: &mut Document, offset: f64) -> &ScrollState {
        let anchors = self.section_anchors(document);
        self.state = self.tracker.observe(offset, &anchors);

        if let Some(navbar) = self.element {
            document.toggle_class(navbar, SCROLLED_CLASS, Some(self.state.is_scrolled_past_threshold));
            let transform = if self.state.is_scrolling_down {
                HIDDEN_TRANSFORM
            } else {
                SHOWN_TRANSFORM
            };
            document.set_style(navbar, "transform", transform);
        }

        let target = self
            .state
            .active_section_id
            .as_ref()
            .map(|id| format!("#{id}"));
        for link in &self.links {
            let is_active = target.is_some() && document.attribute(*link, "href") == target;
            document.toggle_class(*link, ACTIVE_CLASS, Some(is_active));
        }
        &self.state
    }

    /// State computed by the last scroll event.
    #[must_use]
    pub fn state(&self) -> &ScrollState {
        &self.state
    }

    #[must_use]
    pub fn element(&self) -> Option<NodeId> {
        self.element
    }
}

/// `.site-header`, which only toggles its `scrolled` class.
#[derive(Debug, Clone, Copy)]
pub struct SiteHeader {
    element: Option<NodeId>,
    threshold: f64,
}

impl SiteHeader {
    #[must_use]
    pub fn bind(document: &Document, thresholds: ScrollThresholds) -> Self {
        Self {
            element: document.query_selector(".site-header"),
            threshold: thresholds.scrolled_px,
        }
    }

    pub fn on_scroll(&self, document: &mut Document, offset: f64) {
        if let Some(header) = self.element {
            document.toggle_class(header, SCROLLED_CLASS, Some(scroll::is_past(offset, self.threshold)));
        }
    }
}

/// Messages handled by the mobile menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Toggle,
    Close,
}

/// The collapsible menu shown on narrow screens.
#[derive(Debug, Clone, Copy)]
pub struct MobileMenu {
    hamburger: Option<NodeId>,
    menu: Option<NodeId>,
}

impl MobileMenu {
    #[must_use]
    pub fn bind(document: &Document) -> Self {
        Self {
            hamburger: document.get_element_by_id("hamburger"),
            menu: document.get_element_by_id("nav-menu"),
        }
    }

    /// Maps a click to a menu message.
    ///
    /// The hamburger toggles. A `.nav-link` or anything outside both the
    /// hamburger and the menu closes.
    #[must_use]
    pub fn route_click(&self, document: &Document, target: NodeId) -> Option<Message> {
        let (Some(hamburger), Some(menu)) = (self.hamburger, self.menu) else {
            return None;
        };
        if document.contains(hamburger, target) {
            return Some(Message::Toggle);
        }
        if document.closest(target, ".nav-link").is_some() || !document.contains(menu, target) {
            return Some(Message::Close);
        }
        None
    }

    pub fn update(&self, document: &mut Document, message: Message) {
        let force = match message {
            Message::Toggle => None,
            Message::Close => Some(false),
        };
        for node in [self.hamburger, self.menu].into_iter().flatten() {
            document.toggle_class(node, ACTIVE_CLASS, force);
        }
    }

    #[must_use]
    pub fn is_open(&self, document: &Document) -> bool {
        self.menu.is_some_and(|menu| document.has_class(menu, ACTIVE_CLASS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Page {
        doc: Document,
        navbar: NodeId,
        hamburger: NodeId,
        menu: NodeId,
        links: Vec<NodeId>,
    }

    fn page() -> Page {
        let mut doc = Document::new();
        let body = doc.body();
        let navbar = doc.build("nav").id("navbar").append_to(body);
        let hamburger = doc.build("div").id("hamburger").append_to(navbar);
        doc.build("span").class("bar").append_to(hamburger);
        let menu = doc.build("ul").id("nav-menu").append_to(navbar);
        let mut links = Vec::new();
        for (id, top) in [("home", 0.0), ("services", 300.0), ("contact", 700.0)] {
            let item = doc.build("li").append_to(menu);
            links.push(
                doc.build("a")
                    .class("nav-link")
                    .attr("href", &format!("#{id}"))
                    .append_to(item),
            );
            doc.build("section").id(id).layout(top, 400.0).append_to(body);
        }
        Page {
            doc,
            navbar,
            hamburger,
            menu,
            links,
        }
    }

    #[test]
    fn navbar_gets_scrolled_class_past_fifty_pixels() {
        let mut page = page();
        let mut navbar = Navbar::bind(&page.doc, ScrollThresholds::default());

        navbar.on_scroll(&mut page.doc, 50.0);
        assert!(!page.doc.has_class(page.navbar, SCROLLED_CLASS));
        navbar.on_scroll(&mut page.doc, 51.0);
        assert!(page.doc.has_class(page.navbar, SCROLLED_CLASS));
        navbar.on_scroll(&mut page.doc, 10.0);
        assert!(!page.doc.has_class(page.navbar, SCROLLED_CLASS));
    }

    #[test]
    fn navbar_hides_only_when_scrolling_down_past_the_guard() {
        let mut page = page();
        let mut navbar = Navbar::bind(&page.doc, ScrollThresholds::default());

        navbar.on_scroll(&mut page.doc, 90.0);
        assert_eq!(page.doc.style(page.navbar, "transform"), Some(SHOWN_TRANSFORM));
        navbar.on_scroll(&mut page.doc, 150.0);
        assert_eq!(page.doc.style(page.navbar, "transform"), Some(HIDDEN_TRANSFORM));
        navbar.on_scroll(&mut page.doc, 120.0);
        assert_eq!(page.doc.style(page.navbar, "transform"), Some(SHOWN_TRANSFORM));
    }

    #[test]
    fn exactly_one_link_is_active() {
        let mut page = page();
        let mut navbar = Navbar::bind(&page.doc, ScrollThresholds::default());

        let state = navbar.on_scroll(&mut page.doc, 650.0).clone();
        assert_eq!(state.active_section_id.as_deref(), Some("contact"));
        let active: Vec<bool> = page
            .links
            .iter()
            .map(|link| page.doc.has_class(*link, ACTIVE_CLASS))
            .collect();
        assert_eq!(active, vec![false, false, true]);

        navbar.on_scroll(&mut page.doc, 250.0);
        assert!(page.doc.has_class(page.links[1], ACTIVE_CLASS));
        assert!(!page.doc.has_class(page.links[2], ACTIVE_CLASS));
    }

    #[test]
    fn no_sections_means_no_active_link() {
        let mut doc = Document::new();
        let body = doc.body();
        let link = doc.build("a").class("nav-link").attr("href", "#about").append_to(body);
        let mut navbar = Navbar::bind(&doc, ScrollThresholds::default());

        let state = navbar.on_scroll(&mut doc, 500.0);
        assert!(state.active_section_id.is_none());
        assert!(!doc.has_class(link, ACTIVE_CLASS));
    }

    #[test]
    fn site_header_uses_its_own_threshold() {
        let mut doc = Document::new();
        let body = doc.body();
        let header = doc.build("header").class("site-header").append_to(body);
        let thresholds = ScrollThresholds {
            scrolled_px: 20.0,
            ..ScrollThresholds::default()
        };
        let site_header = SiteHeader::bind(&doc, thresholds);

        site_header.on_scroll(&mut doc, 20.0);
        assert!(!doc.has_class(header, SCROLLED_CLASS));
        site_header.on_scroll(&mut doc, 21.0);
        assert!(doc.has_class(header, SCROLLED_CLASS));
    }

    #[test]
    fn hamburger_toggles_and_outside_click_closes() {
        let mut page = page();
        let menu = MobileMenu::bind(&page.doc);
        let bar = page.doc.query_selector(".bar").unwrap();

        let message = menu.route_click(&page.doc, bar).unwrap();
        assert_eq!(message, Message::Toggle);
        menu.update(&mut page.doc, message);
        assert!(menu.is_open(&page.doc));
        assert!(page.doc.has_class(page.hamburger, ACTIVE_CLASS));

        let body = page.doc.body();
        assert_eq!(menu.route_click(&page.doc, body), Some(Message::Close));
        menu.update(&mut page.doc, Message::Close);
        assert!(!menu.is_open(&page.doc));
        assert!(!page.doc.has_class(page.hamburger, ACTIVE_CLASS));
    }

    #[test]
    fn nav_link_click_closes_but_menu_padding_does_not() {
        let page = page();
        let menu = MobileMenu::bind(&page.doc);
        assert_eq!(menu.route_click(&page.doc, page.links[0]), Some(Message::Close));
        assert_eq!(menu.route_click(&page.doc, page.menu), None);
    }

    #[test]
    fn menu_without_elements_ignores_clicks() {
        let doc = Document::new();
        let menu = MobileMenu::bind(&doc);
        assert_eq!(menu.route_click(&doc, doc.body()), None);
    }
}

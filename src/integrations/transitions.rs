// SPDX-License-Identifier: MPL-2.0
//! Client-side page transitions.
//!
//! A transition fades the current `[data-barba="container"]` out, swaps the
//! content, then fades the new container in and re-initializes the libraries
//! for the view named by its `data-barba-namespace`.

use super::presets::PAGE_FADE;
use super::Bindings;
use crate::dom::{Document, NodeId};
use std::fmt;
use std::str::FromStr;

/// Body class present between `leave` and `enter`.
pub const TRANSITIONING_CLASS: &str = "is-transitioning";

const CONTAINER_SELECTOR: &str = "[data-barba=\"container\"]";
const NAMESPACE_ATTRIBUTE: &str = "data-barba-namespace";

/// The views a transition can land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewNamespace {
    Home,
    Work,
    About,
    Services,
    Contact,
}

impl ViewNamespace {
    pub const ALL: [ViewNamespace; 5] = [
        ViewNamespace::Home,
        ViewNamespace::Work,
        ViewNamespace::About,
        ViewNamespace::Services,
        ViewNamespace::Contact,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ViewNamespace::Home => "home",
            ViewNamespace::Work => "work",
            ViewNamespace::About => "about",
            ViewNamespace::Services => "services",
            ViewNamespace::Contact => "contact",
        }
    }

    /// Namespace declared by the page container, if any.
    #[must_use]
    pub fn of_document(document: &Document) -> Option<Self> {
        let container = container(document)?;
        document.attribute(container, NAMESPACE_ATTRIBUTE)?.parse().ok()
    }
}

impl fmt::Display for ViewNamespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned for a namespace outside [`ViewNamespace::ALL`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownNamespace(pub String);

impl fmt::Display for UnknownNamespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown view namespace '{}'", self.0)
    }
}

impl std::error::Error for UnknownNamespace {}

impl FromStr for ViewNamespace {
    type Err = UnknownNamespace;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ViewNamespace::ALL
            .into_iter()
            .find(|namespace| namespace.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownNamespace(s.to_string()))
    }
}

/// The transition container of the current page.
#[must_use]
pub fn container(document: &Document) -> Option<NodeId> {
    document.query_selector(CONTAINER_SELECTOR)
}

/// Starts leaving the current view.
pub fn leave(document: &mut Document, bindings: &mut Bindings) {
    let body = document.body();
    document.add_class(body, TRANSITIONING_CLASS);
    if let (Some(animator), Some(current)) = (bindings.animator.as_mut(), container(document)) {
        animator.fade_out(current, PAGE_FADE);
    }
    tracing::info!("page leave");
}

/// Finishes the transition onto `namespace`.
///
/// Runs the view hook, then the hook shared by every view.
pub fn enter(document: &mut Document, bindings: &mut Bindings, namespace: Option<ViewNamespace>) {
    let body = document.body();
    document.remove_class(body, TRANSITIONING_CLASS);
    if let (Some(animator), Some(next)) = (bindings.animator.as_mut(), container(document)) {
        animator.fade_in(next, PAGE_FADE);
    }

    match namespace {
        Some(ViewNamespace::Home) => {
            bindings.init_carousels(document);
            bindings.init_lightbox();
        }
        Some(ViewNamespace::Work) => {
            bindings.init_grid_filter(document);
            bindings.init_lightbox();
        }
        Some(ViewNamespace::About) => {
            bindings.init_lightbox();
        }
        Some(ViewNamespace::Services | ViewNamespace::Contact) | None => {}
    }

    bindings.init_all(document);
    tracing::info!(namespace = namespace.map(ViewNamespace::as_str), "page enter");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integrations::testing::{recording, Call};

    fn page(namespace: &str) -> (Document, NodeId) {
        let mut doc = Document::new();
        let body = doc.body();
        let container = doc
            .build("main")
            .attr("data-barba", "container")
            .attr("data-barba-namespace", namespace)
            .append_to(body);
        (doc, container)
    }

    #[test]
    fn namespaces_parse_case_insensitively() {
        assert_eq!("Work".parse::<ViewNamespace>(), Ok(ViewNamespace::Work));
        assert_eq!(
            "blog".parse::<ViewNamespace>(),
            Err(UnknownNamespace("blog".into()))
        );
        for namespace in ViewNamespace::ALL {
            assert_eq!(namespace.as_str().parse::<ViewNamespace>(), Ok(namespace));
        }
    }

    #[test]
    fn namespace_is_read_from_the_container() {
        let (doc, _) = page("about");
        assert_eq!(ViewNamespace::of_document(&doc), Some(ViewNamespace::About));
        assert_eq!(ViewNamespace::of_document(&Document::new()), None);
    }

    #[test]
    fn leave_marks_the_body_and_fades_the_container() {
        let (mut doc, container) = page("home");
        let (mut bindings, log) = recording();

        leave(&mut doc, &mut bindings);
        assert!(doc.has_class(doc.body(), TRANSITIONING_CLASS));
        assert_eq!(log.borrow().as_slice(), &[Call::FadeOut(container)]);
    }

    #[test]
    fn work_view_mounts_the_grid_before_the_shared_hook() {
        let (mut doc, container) = page("work");
        let grid = doc.build("div").id("work-grid").append_to(container);
        let (mut bindings, log) = recording();

        leave(&mut doc, &mut bindings);
        enter(&mut doc, &mut bindings, Some(ViewNamespace::Work));

        assert!(!doc.has_class(doc.body(), TRANSITIONING_CLASS));
        assert_eq!(
            log.borrow().as_slice(),
            &[
                Call::FadeOut(container),
                Call::FadeIn(container),
                Call::Grid(grid),
                Call::LightboxInit(".glightbox".into()),
                Call::LightboxDestroy,
                Call::LightboxInit(".glightbox".into()),
                Call::Grid(grid),
            ]
        );
    }

    #[test]
    fn contact_view_only_runs_the_shared_hook() {
        let (mut doc, container) = page("contact");
        let (mut bindings, log) = recording();

        enter(&mut doc, &mut bindings, Some(ViewNamespace::Contact));
        assert_eq!(
            log.borrow().as_slice(),
            &[Call::FadeIn(container), Call::LightboxInit(".glightbox".into())]
        );
    }

    #[test]
    fn transitions_without_libraries_only_toggle_the_class() {
        let (mut doc, _) = page("home");
        let mut bindings = Bindings::none();
        leave(&mut doc, &mut bindings);
        enter(&mut doc, &mut bindings, Some(ViewNamespace::Home));
        assert!(!doc.has_class(doc.body(), TRANSITIONING_CLASS));
    }
}

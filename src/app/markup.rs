// SPDX-License-Identifier: MPL-2.0
//! The bundled showcase page.
//!
//! A single-page layout with every element the components look for, laid out
//! as a column of full-width sections. Used by the binary, the integration
//! tests and the benchmarks.

use crate::dom::{Document, NodeId};
use crate::integrations::ViewNamespace;

/// Sections of the home view: id, top offset and height in pixels.
pub const HOME_SECTIONS: [(&str, f64, f64); 5] = [
    ("home", 0.0, 700.0),
    ("services", 700.0, 800.0),
    ("portfolio", 1500.0, 700.0),
    ("about", 2200.0, 600.0),
    ("contact", 2800.0, 700.0),
];

const CONTAINER_TOP: f64 = 0.0;

/// Builds the full showcase document.
#[must_use]
pub fn showcase_page() -> Document {
    let mut doc = Document::new();
    let body = doc.body();

    build_navbar(&mut doc, body);
    doc.build("div").class("custom-cursor").append_to(body);
    doc.build("div").class("custom-cursor-outline").append_to(body);

    let container = doc
        .build("main")
        .attr("data-barba", "container")
        .attr("data-barba-namespace", ViewNamespace::Home.as_str())
        .layout(CONTAINER_TOP, 3500.0)
        .append_to(body);
    fill_view(&mut doc, container, ViewNamespace::Home);

    doc.build("div").id("notifications").append_to(body);
    let footer = doc.build("footer").layout(3500.0, 200.0).append_to(body);
    doc.build("span").id("year").append_to(footer);
    doc
}

fn build_navbar(doc: &mut Document, body: NodeId) {
    let navbar = doc.build("nav").id("navbar").layout(0.0, 70.0).append_to(body);
    let hamburger = doc.build("div").id("hamburger").append_to(navbar);
    for _ in 0..3 {
        doc.build("span").class("bar").append_to(hamburger);
    }
    let menu = doc.build("ul").id("nav-menu").append_to(navbar);
    for (id, _, _) in HOME_SECTIONS {
        let item = doc.build("li").append_to(menu);
        doc.build("a")
            .class("nav-link")
            .attr("href", &format!("#{id}"))
            .text(id)
            .append_to(item);
    }
    let toggle = doc.build("button").id("theme-toggle").append_to(navbar);
    doc.build("i").class("fas fa-moon").append_to(toggle);
}

/// Replaces the transition container's content with the given view.
///
/// Returns `false` when the page has no container.
pub fn swap_view(doc: &mut Document, namespace: ViewNamespace) -> bool {
    let Some(container) = crate::integrations::transitions::container(doc) else {
        return false;
    };
    doc.clear_children(container);
    doc.set_attribute(container, "data-barba-namespace", namespace.as_str());
    fill_view(doc, container, namespace);
    true
}

fn fill_view(doc: &mut Document, container: NodeId, namespace: ViewNamespace) {
    match namespace {
        ViewNamespace::Home => fill_home(doc, container),
        ViewNamespace::Work => fill_work(doc, container),
        ViewNamespace::About => {
            let about = section(doc, container, "about", 0.0, 900.0);
            doc.build("h2").class("section-header slide-up").layout(80.0, 60.0).append_to(about);
            gallery_link(doc, about, 300.0);
        }
        ViewNamespace::Services => {
            let services = section(doc, container, "services", 0.0, 1200.0);
            service_cards(doc, services, 100.0);
        }
        ViewNamespace::Contact => {
            let contact = section(doc, container, "contact", 0.0, 900.0);
            contact_form(doc, contact, 100.0);
        }
    }
}

fn fill_home(doc: &mut Document, container: NodeId) {
    let [home, services, portfolio, about, contact] =
        HOME_SECTIONS.map(|(id, top, height)| section(doc, container, id, top, height));

    doc.build("div").class("hero-shape").append_to(home);
    doc.build("div").class("hero-shape-2").append_to(home);
    doc.build("div").class("hero-shape-3").append_to(home);
    doc.build("a")
        .class("cta")
        .attr("href", "#contact")
        .text("Get in touch")
        .layout(400.0, 48.0)
        .append_to(home);

    doc.build("h2").class("section-header slide-up").layout(760.0, 60.0).append_to(services);
    service_cards(doc, services, 860.0);

    doc.build("div").class("portfolio-swiper").layout(1600.0, 400.0).append_to(portfolio);
    gallery_link(doc, portfolio, 1700.0);

    doc.build("div").class("testimonials-swiper").layout(2300.0, 300.0).append_to(about);

    contact_form(doc, contact, 2900.0);
}

fn fill_work(doc: &mut Document, container: NodeId) {
    let work = section(doc, container, "work", 0.0, 1400.0);
    let grid = doc.build("div").id("work-grid").layout(100.0, 1200.0).append_to(work);
    for index in 0..4 {
        let card = doc
            .build("article")
            .class("work-card mix slide-up")
            .layout(100.0 + 300.0 * f64::from(index), 280.0)
            .append_to(grid);
        gallery_link(doc, card, 120.0 + 300.0 * f64::from(index));
    }
}

fn section(doc: &mut Document, container: NodeId, id: &str, top: f64, height: f64) -> NodeId {
    doc.build("section").id(id).layout(top, height).append_to(container)
}

fn service_cards(doc: &mut Document, parent: NodeId, top: f64) {
    for index in 0..3 {
        doc.build("div")
            .class("service-card slide-up")
            .layout(top + 200.0 * f64::from(index), 180.0)
            .append_to(parent);
    }
}

fn gallery_link(doc: &mut Document, parent: NodeId, top: f64) {
    let link = doc
        .build("a")
        .class("glightbox")
        .attr("href", "/media/project.jpg")
        .layout(top, 200.0)
        .append_to(parent);
    doc.build("img")
        .class("lazy")
        .attr("data-src", "/media/project-thumb.jpg")
        .layout(top, 200.0)
        .append_to(link);
}

fn contact_form(doc: &mut Document, parent: NodeId, top: f64) {
    let form = doc.build("form").id("contact-form").layout(top, 500.0).append_to(parent);
    doc.build("input").attr("name", "name").append_to(form);
    doc.build("input").attr("name", "email").attr("type", "email").append_to(form);
    doc.build("input").attr("name", "phone").append_to(form);
    doc.build("textarea").attr("name", "message").append_to(form);
    doc.build("button")
        .attr("type", "submit")
        .text("Send Message")
        .append_to(form);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn showcase_has_every_hook_element() {
        let doc = showcase_page();
        for selector in [
            "#navbar",
            "#hamburger",
            "#nav-menu",
            "#theme-toggle i",
            ".custom-cursor",
            ".custom-cursor-outline",
            "#contact-form button[type=\"submit\"]",
            "#notifications",
            "#year",
            ".portfolio-swiper",
            ".testimonials-swiper",
            "img[data-src]",
        ] {
            assert!(doc.query_selector(selector).is_some(), "missing {selector}");
        }
        assert_eq!(doc.query_selector_all("section[id]").len(), HOME_SECTIONS.len());
        assert_eq!(doc.query_selector_all(".nav-link").len(), HOME_SECTIONS.len());
    }

    #[test]
    fn swapping_replaces_the_container_content() {
        let mut doc = showcase_page();
        assert!(swap_view(&mut doc, ViewNamespace::Work));

        assert_eq!(ViewNamespace::of_document(&doc), Some(ViewNamespace::Work));
        assert!(doc.query_selector("#work-grid").is_some());
        assert!(doc.query_selector("#contact-form").is_none());
        assert!(doc.query_selector("#navbar").is_some());
    }

    #[test]
    fn swapping_without_container_fails() {
        let mut doc = Document::new();
        assert!(!swap_view(&mut doc, ViewNamespace::About));
    }
}

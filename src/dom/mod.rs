// SPDX-License-Identifier: MPL-2.0
//! In-memory document model.
//!
//! The interactive behavior of the site is written against this element tree
//! rather than a browser. It covers exactly what the controllers need:
//! selector queries, attributes, class lists, inline styles, text, form
//! control state and a simple layout box per element.
//!
//! Nodes live in an arena and are addressed by [`NodeId`]. Removing a node
//! detaches it from its parent; the id stays valid so stale references can
//! be detected with [`Document::is_connected`].

mod selector;

pub use selector::{AttributeMatch, Complex, Compound, Selector};

use std::collections::BTreeMap;

/// Handle to an element in a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// Vertical layout box of an element, in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutBox {
    pub top: f64,
    pub height: f64,
}

#[derive(Debug, Clone)]
struct Node {
    tag: String,
    attributes: BTreeMap<String, String>,
    classes: Vec<String>,
    styles: BTreeMap<String, String>,
    text: String,
    value: String,
    disabled: bool,
    layout: LayoutBox,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attributes: BTreeMap::new(),
            classes: Vec::new(),
            styles: BTreeMap::new(),
            text: String::new(),
            value: String::new(),
            disabled: false,
            layout: LayoutBox::default(),
            parent: None,
            children: Vec::new(),
        }
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

/// An element tree with `html`, `head` and `body` created up front.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
    root: NodeId,
    head: NodeId,
    body: NodeId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Creates an empty document (`<html><head></head><body></body></html>`).
    #[must_use]
    pub fn new() -> Self {
        let mut document = Self {
            nodes: vec![Node::new("html")],
            root: NodeId(0),
            head: NodeId(0),
            body: NodeId(0),
        };
        let head = document.create_element("head");
        let body = document.create_element("body");
        document.append_child(document.root, head);
        document.append_child(document.root, body);
        document.head = head;
        document.body = body;
        document
    }

    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    #[must_use]
    pub fn head(&self) -> NodeId {
        self.head
    }

    #[must_use]
    pub fn body(&self) -> NodeId {
        self.body
    }

    /// Creates a detached element.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.nodes.push(Node::new(tag));
        NodeId(self.nodes.len() - 1)
    }

    /// Starts building a detached element.
    pub fn build(&mut self, tag: &str) -> ElementBuilder<'_> {
        let node = self.create_element(tag);
        ElementBuilder {
            document: self,
            node,
        }
    }

    /// Appends `child` to `parent`, detaching it from any previous parent.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if parent == child || self.contains(child, parent) {
            tracing::warn!(?parent, ?child, "refusing to create a cycle in the document");
            return;
        }
        self.detach(child);
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    /// Detaches a node from its parent.
    ///
    /// Returns `false` when the node had no parent, so removing twice is harmless.
    pub fn remove(&mut self, node: NodeId) -> bool {
        self.detach(node)
    }

    fn detach(&mut self, node: NodeId) -> bool {
        let Some(parent) = self.nodes[node.0].parent.take() else {
            return false;
        };
        self.nodes[parent.0].children.retain(|child| *child != node);
        true
    }

    /// Removes every child of `node`.
    pub fn clear_children(&mut self, node: NodeId) {
        let children = std::mem::take(&mut self.nodes[node.0].children);
        for child in children {
            self.nodes[child.0].parent = None;
        }
    }

    #[must_use]
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.0].parent
    }

    #[must_use]
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node.0].children
    }

    /// Whether the node is reachable from the document root.
    #[must_use]
    pub fn is_connected(&self, node: NodeId) -> bool {
        self.contains(self.root, node)
    }

    /// Whether `node` is `ancestor` itself or one of its descendants.
    #[must_use]
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.nodes[id.0].parent;
        }
        false
    }

    #[must_use]
    pub fn tag_name(&self, node: NodeId) -> &str {
        &self.nodes[node.0].tag
    }

    // -------------------------------------------------------------------
    // Attributes
    // -------------------------------------------------------------------

    /// Returns an attribute value. `class` is reported from the class list.
    #[must_use]
    pub fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
        if name == "class" {
            let classes = &self.nodes[node.0].classes;
            return (!classes.is_empty()).then(|| classes.join(" "));
        }
        self.nodes[node.0].attribute(name).map(str::to_string)
    }

    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        if name == "class" {
            self.set_class_name(node, value);
            return;
        }
        self.nodes[node.0]
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    pub fn remove_attribute(&mut self, node: NodeId, name: &str) {
        if name == "class" {
            self.nodes[node.0].classes.clear();
            return;
        }
        self.nodes[node.0].attributes.remove(name);
    }

    #[must_use]
    pub fn id(&self, node: NodeId) -> Option<&str> {
        self.nodes[node.0].attribute("id")
    }

    // -------------------------------------------------------------------
    // Class list
    // -------------------------------------------------------------------

    /// Replaces the whole class list from a space separated string.
    pub fn set_class_name(&mut self, node: NodeId, class_name: &str) {
        let classes = &mut self.nodes[node.0].classes;
        classes.clear();
        for class in class_name.split_whitespace() {
            if !classes.iter().any(|existing| existing == class) {
                classes.push(class.to_string());
            }
        }
    }

    #[must_use]
    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.nodes[node.0].classes.iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, node: NodeId, class: &str) {
        if !self.has_class(node, class) {
            self.nodes[node.0].classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, node: NodeId, class: &str) {
        self.nodes[node.0].classes.retain(|c| c != class);
    }

    /// Toggles a class, or forces it on/off when `force` is given.
    /// Returns whether the class is present afterwards.
    pub fn toggle_class(&mut self, node: NodeId, class: &str, force: Option<bool>) -> bool {
        let present = force.unwrap_or(!self.has_class(node, class));
        if present {
            self.add_class(node, class);
        } else {
            self.remove_class(node, class);
        }
        present
    }

    #[must_use]
    pub fn classes(&self, node: NodeId) -> &[String] {
        &self.nodes[node.0].classes
    }

    // -------------------------------------------------------------------
    // Styles, text, form controls, layout
    // -------------------------------------------------------------------

    pub fn set_style(&mut self, node: NodeId, property: &str, value: &str) {
        self.nodes[node.0]
            .styles
            .insert(property.to_string(), value.to_string());
    }

    #[must_use]
    pub fn style(&self, node: NodeId, property: &str) -> Option<&str> {
        self.nodes[node.0].styles.get(property).map(String::as_str)
    }

    #[must_use]
    pub fn text(&self, node: NodeId) -> &str {
        &self.nodes[node.0].text
    }

    pub fn set_text(&mut self, node: NodeId, text: &str) {
        text.clone_into(&mut self.nodes[node.0].text);
    }

    #[must_use]
    pub fn value(&self, node: NodeId) -> &str {
        &self.nodes[node.0].value
    }

    pub fn set_value(&mut self, node: NodeId, value: &str) {
        value.clone_into(&mut self.nodes[node.0].value);
    }

    #[must_use]
    pub fn is_disabled(&self, node: NodeId) -> bool {
        self.nodes[node.0].disabled
    }

    pub fn set_disabled(&mut self, node: NodeId, disabled: bool) {
        self.nodes[node.0].disabled = disabled;
    }

    #[must_use]
    pub fn layout(&self, node: NodeId) -> LayoutBox {
        self.nodes[node.0].layout
    }

    pub fn set_layout(&mut self, node: NodeId, top: f64, height: f64) {
        self.nodes[node.0].layout = LayoutBox { top, height };
    }

    /// Offset of the element's top edge from the top of the document.
    #[must_use]
    pub fn offset_top(&self, node: NodeId) -> f64 {
        self.nodes[node.0].layout.top
    }

    /// Height of the scrollable content (bottom of the lowest element).
    #[must_use]
    pub fn scroll_height(&self) -> f64 {
        self.descendants(self.root)
            .map(|node| {
                let layout = self.layout(node);
                layout.top + layout.height
            })
            .fold(0.0, f64::max)
    }

    // -------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------

    /// Iterates over `scope`'s descendants in document order (excluding `scope`).
    pub fn descendants(&self, scope: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        let mut stack: Vec<NodeId> = self.nodes[scope.0].children.iter().rev().copied().collect();
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(self.nodes[node.0].children.iter().rev().copied());
            Some(node)
        })
    }

    #[must_use]
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.descendants(self.root)
            .find(|node| self.nodes[node.0].attribute("id") == Some(id))
    }

    /// All connected elements matching `selector`, in document order.
    ///
    /// An invalid selector matches nothing.
    #[must_use]
    pub fn query_selector_all(&self, selector: &str) -> Vec<NodeId> {
        self.query_selector_all_within(self.root, selector)
    }

    #[must_use]
    pub fn query_selector(&self, selector: &str) -> Option<NodeId> {
        self.query_selector_all(selector).into_iter().next()
    }

    /// Matching descendants of `scope`, in document order.
    #[must_use]
    pub fn query_selector_all_within(&self, scope: NodeId, selector: &str) -> Vec<NodeId> {
        match Selector::parse(selector) {
            Ok(parsed) => self.select_within(scope, &parsed),
            Err(error) => {
                tracing::warn!(%selector, %error, "ignoring invalid selector");
                Vec::new()
            }
        }
    }

    #[must_use]
    pub fn query_selector_within(&self, scope: NodeId, selector: &str) -> Option<NodeId> {
        self.query_selector_all_within(scope, selector)
            .into_iter()
            .next()
    }

    /// Matching descendants of `scope` for an already parsed selector.
    #[must_use]
    pub fn select_within(&self, scope: NodeId, selector: &Selector) -> Vec<NodeId> {
        self.descendants(scope)
            .filter(|node| self.matches_parsed(*node, selector))
            .collect()
    }

    /// Whether `node` matches `selector`. Invalid selectors never match.
    #[must_use]
    pub fn matches(&self, node: NodeId, selector: &str) -> bool {
        Selector::parse(selector).is_ok_and(|parsed| self.matches_parsed(node, &parsed))
    }

    /// Nearest inclusive ancestor of `node` matching `selector`.
    #[must_use]
    pub fn closest(&self, node: NodeId, selector: &str) -> Option<NodeId> {
        let parsed = Selector::parse(selector).ok()?;
        let mut current = Some(node);
        while let Some(id) = current {
            if self.matches_parsed(id, &parsed) {
                return Some(id);
            }
            current = self.nodes[id.0].parent;
        }
        None
    }

    fn matches_parsed(&self, node: NodeId, selector: &Selector) -> bool {
        selector
            .alternatives
            .iter()
            .any(|complex| self.matches_complex(node, complex))
    }

    fn matches_compound(&self, node: NodeId, compound: &Compound) -> bool {
        let data = &self.nodes[node.0];
        compound.matches(&data.tag, &data.classes, |name| data.attribute(name))
    }

    fn matches_complex(&self, node: NodeId, complex: &Complex) -> bool {
        let Some((last, ancestors)) = complex.compounds.split_last() else {
            return false;
        };
        if !self.matches_compound(node, last) {
            return false;
        }
        // Walk up greedily, matching the remaining compounds right to left.
        let mut remaining = ancestors.iter().rev().peekable();
        let mut current = self.nodes[node.0].parent;
        while let Some(compound) = remaining.peek() {
            let Some(id) = current else {
                return false;
            };
            if self.matches_compound(id, compound) {
                remaining.next();
            }
            current = self.nodes[id.0].parent;
        }
        true
    }
}

/// Fluent element construction, mostly for assembling pages.
pub struct ElementBuilder<'a> {
    document: &'a mut Document,
    node: NodeId,
}

impl ElementBuilder<'_> {
    #[must_use]
    pub fn id(self, id: &str) -> Self {
        self.document.set_attribute(self.node, "id", id);
        self
    }

    #[must_use]
    pub fn class(self, class_name: &str) -> Self {
        for class in class_name.split_whitespace() {
            self.document.add_class(self.node, class);
        }
        self
    }

    #[must_use]
    pub fn attr(self, name: &str, value: &str) -> Self {
        self.document.set_attribute(self.node, name, value);
        self
    }

    #[must_use]
    pub fn text(self, text: &str) -> Self {
        self.document.set_text(self.node, text);
        self
    }

    /// Sets both the `value` attribute (reset default) and the live value.
    #[must_use]
    pub fn value(self, value: &str) -> Self {
        self.document.set_attribute(self.node, "value", value);
        self.document.set_value(self.node, value);
        self
    }

    #[must_use]
    pub fn layout(self, top: f64, height: f64) -> Self {
        self.document.set_layout(self.node, top, height);
        self
    }

    /// Appends the element to `parent` and returns its id.
    pub fn append_to(self, parent: NodeId) -> NodeId {
        self.document.append_child(parent, self.node);
        self.node
    }

    /// Returns the id without attaching the element.
    #[must_use]
    pub fn finish(self) -> NodeId {
        self.node
    }
}

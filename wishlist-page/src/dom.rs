//! Rendered element tree
//!
//! A small arena the page renders into. Hosts draw it and report clicks by
//! [`ElementId`]; the fail-mode interceptor walks it from the click target
//! towards the root.

use crate::types::Message;

/// Index of an element in its [`ElementTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(usize);

/// Kind of rendered element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Container,
    Text,
    Button,
    Link,
    Checkbox,
}

impl ElementKind {
    /// Button-like and link-like elements
    pub fn is_actionable(&self) -> bool {
        matches!(self, Self::Button | Self::Link | Self::Checkbox)
    }
}

/// A rendered element
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub kind: ElementKind,
    pub parent: Option<ElementId>,
    pub aria_label: Option<String>,
    pub text: Option<String>,
    /// Opted out of fail-mode interception
    pub exempt: bool,
    /// Message dispatched when this element is activated
    pub action: Option<Message>,
}

impl Element {
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            parent: None,
            aria_label: None,
            text: None,
            exempt: false,
            action: None,
        }
    }

    pub fn container() -> Self {
        Self::new(ElementKind::Container)
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::new(ElementKind::Text).with_text(text)
    }

    pub fn button(action: Message) -> Self {
        Self::new(ElementKind::Button).with_action(action)
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria_label = Some(label.into());
        self
    }

    pub fn with_action(mut self, action: Message) -> Self {
        self.action = Some(action);
        self
    }

    pub fn exempt(mut self) -> Self {
        self.exempt = true;
        self
    }

    pub fn under(mut self, parent: ElementId) -> Self {
        self.parent = Some(parent);
        self
    }
}

/// Arena of rendered elements
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementTree {
    elements: Vec<Element>,
    children: Vec<Vec<ElementId>>,
}

impl ElementTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element; its parent must already be in the tree
    pub fn push(&mut self, element: Element) -> ElementId {
        let id = ElementId(self.elements.len());
        if let Some(parent) = element.parent
            && let Some(siblings) = self.children.get_mut(parent.0)
        {
            siblings.push(id);
        }
        self.elements.push(element);
        self.children.push(Vec::new());
        id
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id.0)
    }

    /// Closest actionable element at or above `id`
    ///
    /// The walk visits at most one element per tree entry, so a parent link
    /// that loops back gives `None`.
    pub fn nearest_actionable(&self, id: ElementId) -> Option<ElementId> {
        let mut current = Some(id);
        for _ in 0..self.elements.len() {
            let cur = current?;
            let element = self.get(cur)?;
            if element.kind.is_actionable() {
                return Some(cur);
            }
            current = element.parent;
        }
        None
    }

    /// First element that dispatches `action`
    pub fn find_action(&self, action: &Message) -> Option<ElementId> {
        self.elements
            .iter()
            .position(|e| e.action.as_ref() == Some(action))
            .map(ElementId)
    }

    /// Text of `id` and its descendants with whitespace collapsed
    pub fn text_content(&self, id: ElementId) -> String {
        let mut parts = Vec::new();
        self.collect_text(id, &mut parts);
        parts
            .iter()
            .flat_map(|p| p.split_whitespace())
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn collect_text<'a>(&'a self, id: ElementId, parts: &mut Vec<&'a str>) {
        let Some(element) = self.get(id) else {
            return;
        };
        if let Some(text) = &element.text {
            parts.push(text);
        }
        for child in &self.children[id.0] {
            self.collect_text(*child, parts);
        }
    }

    /// Accessible label of `id`: aria label, else trimmed text, capped at
    /// `max_chars` characters
    pub fn accessible_label(&self, id: ElementId, max_chars: usize) -> String {
        let label = self
            .get(id)
            .and_then(|e| e.aria_label.as_deref())
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| self.text_content(id));
        label.chars().take(max_chars).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (ElementTree, ElementId, ElementId, ElementId) {
        let mut tree = ElementTree::new();
        let root = tree.push(Element::container());
        let button = tree.push(Element::button(Message::ClearAll).under(root));
        let span = tree.push(Element::text("  Clear   all ").under(button));
        (tree, root, button, span)
    }

    #[test]
    fn test_nearest_actionable_from_child() {
        let (tree, _, button, span) = sample();
        assert_eq!(tree.nearest_actionable(span), Some(button));
        assert_eq!(tree.nearest_actionable(button), Some(button));
    }

    #[test]
    fn test_nearest_actionable_none() {
        let (tree, root, _, _) = sample();
        assert_eq!(tree.nearest_actionable(root), None);
    }

    #[test]
    fn test_nearest_actionable_parent_cycle() {
        let mut tree = ElementTree::new();
        // Parent ids that point forward form a loop once both are pushed
        let first = tree.push(Element::text("a").under(ElementId(1)));
        let second = tree.push(Element::container().under(first));
        assert_eq!(tree.nearest_actionable(first), None);
        assert_eq!(tree.nearest_actionable(second), None);
        assert_eq!(tree.nearest_actionable(ElementId(99)), None);
    }

    #[test]
    fn test_find_action() {
        let (tree, _, button, _) = sample();
        assert_eq!(tree.find_action(&Message::ClearAll), Some(button));
        assert_eq!(tree.find_action(&Message::SetFailMode(true)), None);
    }

    #[test]
    fn test_label_from_text() {
        let (tree, _, button, _) = sample();
        assert_eq!(tree.accessible_label(button, 80), "Clear all");
    }

    #[test]
    fn test_label_prefers_aria() {
        let mut tree = ElementTree::new();
        let link = tree.push(
            Element::new(ElementKind::Link)
                .with_aria_label(" View product ")
                .with_text("→"),
        );
        assert_eq!(tree.accessible_label(link, 80), "View product");
    }

    #[test]
    fn test_label_blank_aria_falls_back() {
        let mut tree = ElementTree::new();
        let button = tree.push(
            Element::button(Message::ClearAll)
                .with_aria_label("  ")
                .with_text("Clear"),
        );
        assert_eq!(tree.accessible_label(button, 80), "Clear");
    }

    #[test]
    fn test_label_truncated_by_chars() {
        let mut tree = ElementTree::new();
        let button = tree.push(Element::button(Message::ClearAll).with_text("ñandú ñandú"));
        assert_eq!(tree.accessible_label(button, 4), "ñand");
    }

    #[test]
    fn test_checkbox_and_link_actionable() {
        assert!(ElementKind::Checkbox.is_actionable());
        assert!(ElementKind::Link.is_actionable());
        assert!(!ElementKind::Text.is_actionable());
        assert!(!ElementKind::Container.is_actionable());
    }
}

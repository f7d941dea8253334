#![forbid(unsafe_code)]

//! An in-memory element tree implementing [`Host`].

use popform_core::geometry::{Point, Rect};
use popform_dom::{ElementId, Host, Node};

#[derive(Debug, Clone)]
struct StoredElement {
    tag: String,
    dom_id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<(String, String)>,
    styles: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<usize>,
    value: Option<String>,
    checked: bool,
    visible: bool,
    rect: Rect,
    removed: bool,
}

/// A fake document: a flat element arena with live field state.
///
/// Layout does not exist here, so bounding boxes are whatever the test sets
/// them to (via [`MemoryHost::seed_element`], [`MemoryHost::place`], or
/// [`MemoryHost::next_mount_box`]); `set_position` moves a box's origin the
/// way absolute positioning would.
#[derive(Debug, Default)]
pub struct MemoryHost {
    elements: Vec<StoredElement>,
    roots: Vec<usize>,
    next_mount_box: Option<Rect>,
    mounted_fragments: usize,
}

impl MemoryHost {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pre-existing page element (e.g. a trigger) with the given
    /// identifier and bounding box.
    pub fn seed_element(&mut self, id: &str, rect: Rect) -> ElementId {
        let index = self.elements.len();
        self.elements.push(StoredElement {
            tag: "div".into(),
            dom_id: Some(id.to_string()),
            classes: Vec::new(),
            attrs: Vec::new(),
            styles: Vec::new(),
            text: None,
            children: Vec::new(),
            value: None,
            checked: false,
            visible: true,
            rect,
            removed: false,
        });
        self.roots.push(index);
        ElementId::new(index as u64)
    }

    /// Use this bounding box for the root of the next mounted fragment.
    pub fn next_mount_box(&mut self, rect: Rect) {
        self.next_mount_box = Some(rect);
    }

    /// Set the bounding box of an element by identifier. Returns `false` if
    /// no live element has that identifier.
    pub fn place(&mut self, id: &str, rect: Rect) -> bool {
        match self.index_by_id(id) {
            Some(index) => {
                self.elements[index].rect = rect;
                true
            }
            None => false,
        }
    }

    /// Set the bounding box of an element by handle.
    pub fn place_element(&mut self, element: ElementId, rect: Rect) {
        if let Some(stored) = self.stored_mut(element) {
            stored.rect = rect;
        }
    }

    /// Set a field's live value by identifier. Returns `false` on a miss.
    pub fn set_value(&mut self, id: &str, value: &str) -> bool {
        match self.index_by_id(id) {
            Some(index) => {
                self.elements[index].value = Some(value.to_string());
                true
            }
            None => false,
        }
    }

    /// Set a checkbox's live state by identifier. Returns `false` on a miss.
    pub fn set_checked(&mut self, id: &str, checked: bool) -> bool {
        match self.index_by_id(id) {
            Some(index) => {
                self.elements[index].checked = checked;
                true
            }
            None => false,
        }
    }

    /// Remove an element (and subtree) by identifier, simulating outside
    /// interference with the page. Returns `false` on a miss.
    pub fn remove_by_id(&mut self, id: &str) -> bool {
        match self.index_by_id(id) {
            Some(index) => {
                self.remove_subtree(index);
                true
            }
            None => false,
        }
    }

    /// Whether an element is currently shown.
    pub fn is_visible(&self, element: ElementId) -> bool {
        self.stored(element).is_some_and(|s| s.visible)
    }

    /// Number of fragments mounted over the host's lifetime.
    pub fn mounted_fragments(&self) -> usize {
        self.mounted_fragments
    }

    /// Number of live (non-removed) elements.
    pub fn live_elements(&self) -> usize {
        self.elements.iter().filter(|e| !e.removed).count()
    }

    /// The tag of an element, for structural assertions.
    pub fn tag_of(&self, element: ElementId) -> Option<&str> {
        self.stored(element).map(|s| s.tag.as_str())
    }

    /// The classes of an element, for structural assertions.
    pub fn classes_of(&self, element: ElementId) -> Vec<String> {
        self.stored(element)
            .map(|s| s.classes.clone())
            .unwrap_or_default()
    }

    /// An attribute of an element, for structural assertions.
    pub fn attr_of(&self, element: ElementId, name: &str) -> Option<String> {
        self.stored(element)?
            .attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.clone())
    }

    fn mount_node(&mut self, node: &Node, depth: usize) -> usize {
        let index = self.elements.len();
        let is_input = node.tag_name() == "input";
        self.elements.push(StoredElement {
            tag: node.tag_name().to_string(),
            dom_id: node.id_value().map(str::to_string),
            classes: node.class_list().to_vec(),
            attrs: node.attr_list().to_vec(),
            styles: node.style_list().to_vec(),
            text: node.text_value().map(str::to_string),
            children: Vec::new(),
            value: is_input.then(|| node.attr_value("value").unwrap_or("").to_string()),
            checked: is_input && node.attr_value("checked").is_some(),
            visible: true,
            rect: if depth == 0 {
                self.next_mount_box.take().unwrap_or_default()
            } else {
                Rect::default()
            },
            removed: false,
        });
        let children: Vec<usize> = node
            .child_list()
            .iter()
            .map(|child| self.mount_node(child, depth + 1))
            .collect();
        self.elements[index].children = children;
        index
    }

    fn remove_subtree(&mut self, index: usize) {
        self.elements[index].removed = true;
        let children = self.elements[index].children.clone();
        for child in children {
            self.remove_subtree(child);
        }
    }

    fn index_by_id(&self, id: &str) -> Option<usize> {
        self.elements
            .iter()
            .position(|e| !e.removed && e.dom_id.as_deref() == Some(id))
    }

    fn stored(&self, element: ElementId) -> Option<&StoredElement> {
        let stored = self.elements.get(element.0 as usize)?;
        (!stored.removed).then_some(stored)
    }

    fn stored_mut(&mut self, element: ElementId) -> Option<&mut StoredElement> {
        let stored = self.elements.get_mut(element.0 as usize)?;
        (!stored.removed).then_some(stored)
    }
}

impl Host for MemoryHost {
    fn mount(&mut self, fragment: &Node) -> ElementId {
        let index = self.mount_node(fragment, 0);
        self.roots.push(index);
        self.mounted_fragments += 1;
        ElementId::new(index as u64)
    }

    fn remove(&mut self, element: ElementId) {
        let index = element.0 as usize;
        if index < self.elements.len() {
            self.remove_subtree(index);
        }
    }

    fn element_by_id(&self, id: &str) -> Option<ElementId> {
        self.index_by_id(id).map(|i| ElementId::new(i as u64))
    }

    fn set_position(&mut self, element: ElementId, position: Point) {
        if let Some(stored) = self.stored_mut(element) {
            stored.rect.x = position.x;
            stored.rect.y = position.y;
        }
    }

    fn set_visible(&mut self, element: ElementId, visible: bool) {
        if let Some(stored) = self.stored_mut(element) {
            stored.visible = visible;
        }
    }

    fn bounding_box(&self, element: ElementId) -> Rect {
        self.stored(element).map(|s| s.rect).unwrap_or_default()
    }

    fn value(&self, element: ElementId) -> Option<String> {
        self.stored(element)?.value.clone()
    }

    fn is_checked(&self, element: ElementId) -> bool {
        self.stored(element).is_some_and(|s| s.checked)
    }
}

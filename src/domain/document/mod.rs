// SPDX-License-Identifier: MPL-2.0
//! Headless page model.
//!
//! A [`Document`] is a flat list of elements carrying attributes, standing in
//! for the markup a preview widget binds to: file inputs with their native
//! file list, clickable buttons, and containers whose children are preview
//! images. Elements are never removed, so an [`ElementId`] stays valid for the
//! lifetime of the document.

mod selector;

pub use selector::{Selector, SelectorError};

use crate::domain::selection::{DataUrl, FileHandle, FileSource};
use std::collections::BTreeMap;
use std::fmt;

/// Stable handle to an element of a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(usize);

impl ElementId {
    /// Position of the element in document order.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "element-{}", self.0)
    }
}

/// An `<img>` placed inside a preview container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageElement {
    pub src: DataUrl,
}

/// Native state of a file input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileInputState {
    files: Vec<FileHandle>,
    value: String,
}

/// What an element is, beyond its tag and attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementKind {
    FileInput(FileInputState),
    Button { label: String },
    Container { children: Vec<ImageElement> },
}

/// A single element: tag, attributes, and role-specific state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attributes: BTreeMap<String, String>,
    kind: ElementKind,
}

impl Element {
    /// `<input type="file">`
    #[must_use]
    pub fn file_input() -> Self {
        Self {
            tag: "input".to_string(),
            attributes: BTreeMap::from([("type".to_string(), "file".to_string())]),
            kind: ElementKind::FileInput(FileInputState::default()),
        }
    }

    /// `<button>` with a text label.
    pub fn button(label: impl Into<String>) -> Self {
        Self {
            tag: "button".to_string(),
            attributes: BTreeMap::new(),
            kind: ElementKind::Button {
                label: label.into(),
            },
        }
    }

    /// Empty `<div>`.
    #[must_use]
    pub fn container() -> Self {
        Self {
            tag: "div".to_string(),
            attributes: BTreeMap::new(),
            kind: ElementKind::Container {
                children: Vec::new(),
            },
        }
    }

    /// Sets an attribute, replacing any previous value.
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    #[must_use]
    pub fn kind(&self) -> &ElementKind {
        &self.kind
    }

    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Returns `true` if the whitespace-separated `class` attribute contains `class`.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.attribute("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }
}

/// Value a file input reports for its current selection.
fn input_value(files: &[FileHandle]) -> String {
    match files.first() {
        Some(file) => match file.source() {
            FileSource::Path(path) => path.to_string_lossy().into_owned(),
            FileSource::Memory(_) => file.name().to_string(),
        },
        None => String::new(),
    }
}

/// Flat, append-only collection of elements.
#[derive(Debug, Clone, Default)]
pub struct Document {
    elements: Vec<Element>,
}

impl Document {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an element and returns its handle.
    pub fn insert(&mut self, element: Element) -> ElementId {
        self.elements.push(element);
        ElementId(self.elements.len() - 1)
    }

    #[must_use]
    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id.0)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the ids of all elements matching `selector`, in document order.
    #[must_use]
    pub fn select(&self, selector: &Selector) -> Vec<ElementId> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, element)| selector.matches(element))
            .map(|(index, _)| ElementId(index))
            .collect()
    }

    /// Parses `selector` and returns the matching ids.
    pub fn query(&self, selector: &str) -> Result<Vec<ElementId>, SelectorError> {
        Ok(self.select(&Selector::parse(selector)?))
    }

    #[must_use]
    pub fn attribute(&self, id: ElementId, name: &str) -> Option<&str> {
        self.get(id)?.attribute(name)
    }

    /// Files currently reported by a file input. Empty for other elements.
    #[must_use]
    pub fn files(&self, id: ElementId) -> &[FileHandle] {
        match self.get(id).map(Element::kind) {
            Some(ElementKind::FileInput(state)) => state.files.as_slice(),
            _ => &[],
        }
    }

    /// Value of a file input (empty when nothing is selected).
    #[must_use]
    pub fn value(&self, id: ElementId) -> Option<&str> {
        match self.get(id).map(Element::kind) {
            Some(ElementKind::FileInput(state)) => Some(state.value.as_str()),
            _ => None,
        }
    }

    /// Replaces the file list of a file input, as the native picker does.
    ///
    /// Returns `true` if a change signal fires. Like a browser, the input
    /// stays silent when the new value equals the current one, which is why
    /// reselecting the same file only notifies after the value was cleared.
    pub fn set_files(&mut self, id: ElementId, files: Vec<FileHandle>) -> bool {
        let Some(ElementKind::FileInput(state)) = self.kind_mut(id) else {
            return false;
        };
        let value = input_value(&files);
        let changed = value != state.value;
        state.files = files;
        state.value = value;
        changed
    }

    /// Clears the value and file list of a file input.
    pub fn clear_input(&mut self, id: ElementId) {
        if let Some(ElementKind::FileInput(state)) = self.kind_mut(id) {
            state.files.clear();
            state.value.clear();
        }
    }

    /// Label of a button.
    #[must_use]
    pub fn label(&self, id: ElementId) -> Option<&str> {
        match self.get(id).map(Element::kind) {
            Some(ElementKind::Button { label }) => Some(label.as_str()),
            _ => None,
        }
    }

    /// Image children of a container. Empty for other elements.
    #[must_use]
    pub fn children(&self, id: ElementId) -> &[ImageElement] {
        match self.get(id).map(Element::kind) {
            Some(ElementKind::Container { children }) => children.as_slice(),
            _ => &[],
        }
    }

    /// Replaces the contents of a container with a single image.
    pub fn replace_children(&mut self, id: ElementId, image: ImageElement) {
        if let Some(ElementKind::Container { children }) = self.kind_mut(id) {
            children.clear();
            children.push(image);
        }
    }

    /// Removes all children of a container.
    pub fn empty(&mut self, id: ElementId) {
        if let Some(ElementKind::Container { children }) = self.kind_mut(id) {
            children.clear();
        }
    }

    fn kind_mut(&mut self, id: ElementId) -> Option<&mut ElementKind> {
        self.elements.get_mut(id.0).map(|element| &mut element.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload_page() -> (Document, ElementId, ElementId, ElementId) {
        let mut doc = Document::new();
        let input = doc.insert(Element::file_input().with_attribute("name", "testimage1"));
        let reset = doc.insert(Element::button("reset1").with_attribute("id", "reset1"));
        let preview = doc.insert(Element::container().with_attribute("id", "preview1"));
        (doc, input, reset, preview)
    }

    #[test]
    fn query_returns_matches_in_document_order() {
        let (mut doc, input, _, _) = upload_page();
        let second = doc.insert(Element::file_input().with_attribute("name", "testimage2"));

        assert_eq!(doc.query("input").unwrap(), vec![input, second]);
        assert_eq!(doc.query(r#"[name="testimage2"]"#).unwrap(), vec![second]);
        assert!(doc.query("#missing").unwrap().is_empty());
    }

    #[test]
    fn set_files_reports_change_only_when_value_differs() {
        let (mut doc, input, _, _) = upload_page();
        let photo = FileHandle::from_path("/home/user/photo.png");

        assert!(doc.set_files(input, vec![photo.clone()]));
        assert_eq!(doc.value(input), Some("/home/user/photo.png"));
        assert!(!doc.set_files(input, vec![photo.clone()]));

        doc.clear_input(input);
        assert!(doc.files(input).is_empty());
        assert_eq!(doc.value(input), Some(""));
        assert!(doc.set_files(input, vec![photo]));
    }

    #[test]
    fn cancelling_an_empty_picker_is_silent() {
        let (mut doc, input, _, _) = upload_page();
        assert!(!doc.set_files(input, Vec::new()));
    }

    #[test]
    fn role_specific_mutations_ignore_other_elements() {
        let (mut doc, input, reset, preview) = upload_page();
        let image = ImageElement {
            src: DataUrl::new("image/png", "AAAA"),
        };

        assert!(!doc.set_files(reset, vec![FileHandle::from_path("a.png")]));
        doc.replace_children(input, image.clone());
        assert!(doc.children(input).is_empty());

        doc.replace_children(preview, image.clone());
        doc.replace_children(preview, image.clone());
        assert_eq!(doc.children(preview), &[image]);

        doc.empty(preview);
        assert!(doc.children(preview).is_empty());
    }

    #[test]
    fn element_ids_display_stably() {
        let (_, input, reset, _) = upload_page();
        assert_eq!(input.to_string(), "element-0");
        assert_eq!(reset.index(), 1);
    }
}

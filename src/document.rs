use std::path::Path;

use anyhow::Context as _;
use kuchiki::traits::TendrilSink as _;
use kuchiki::{ElementData, NodeDataRef, NodeRef};
use maud::html;

use crate::theme::{CONTROL_ACTIVE_CLASS, CONTROL_SELECTOR};

/// The element whose classes carry the applied theme marker.
pub trait ThemeTarget {
    fn root_classes(&self) -> Vec<String>;

    /// Drops every class on the root element and leaves exactly `class`.
    fn replace_root_classes(&mut self, class: &str);
}

impl<T: ThemeTarget + ?Sized> ThemeTarget for &mut T {
    fn root_classes(&self) -> Vec<String> {
        (**self).root_classes()
    }

    fn replace_root_classes(&mut self, class: &str) {
        (**self).replace_root_classes(class)
    }
}

pub trait DocumentHead {
    fn append_link(&mut self, rel: &str, href: &str);
}

/// One theme-selector button.
pub trait ThemeControl {
    fn classes(&self) -> Vec<String>;
    fn set_active(&self, active: bool);
    fn set_disabled(&self, disabled: bool);
    fn is_active(&self) -> bool;
    fn is_disabled(&self) -> bool;

    fn has_class(&self, class: &str) -> bool {
        self.classes().iter().any(|c| c == class)
    }
}

/// A parsed HTML page acting as the browser document.
///
/// Cloning is cheap and shares the underlying tree, so a clone handed to a
/// controller observes and mutates the same nodes.
#[derive(Clone)]
pub struct Page {
    document: NodeRef,
}

impl Page {
    pub fn parse(html: &str) -> Self {
        Self {
            document: kuchiki::parse_html().one(html),
        }
    }

    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let html =
            std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
        Ok(Self::parse(&html))
    }

    /// Every theme-selector control, in document order.
    pub fn theme_controls(&self) -> Vec<PageControl> {
        match self.document.select(CONTROL_SELECTOR) {
            Ok(nodes) => nodes.map(|element| PageControl { element }).collect(),
            Err(()) => Vec::new(),
        }
    }

    pub fn manifest_links(&self) -> Vec<String> {
        let Ok(nodes) = self.document.select("link[rel=\"manifest\"]") else {
            return Vec::new();
        };
        nodes
            .filter_map(|n| n.attributes.borrow().get("href").map(|s| s.to_string()))
            .collect()
    }

    pub fn to_html(&self) -> anyhow::Result<String> {
        let mut out = Vec::new();
        self.document
            .serialize(&mut out)
            .context("serialize page")?;
        String::from_utf8(out).context("page html not utf-8")
    }

    fn root(&self) -> Option<NodeDataRef<ElementData>> {
        self.document.select_first("html").ok()
    }
}

impl ThemeTarget for Page {
    fn root_classes(&self) -> Vec<String> {
        self.root().map(|root| classes_of(&root)).unwrap_or_default()
    }

    fn replace_root_classes(&mut self, class: &str) {
        match self.root() {
            Some(root) => {
                root.attributes
                    .borrow_mut()
                    .insert("class", class.to_string());
            }
            None => tracing::warn!("page has no root element; theme marker not set"),
        }
    }
}

impl DocumentHead for Page {
    fn append_link(&mut self, rel: &str, href: &str) {
        let Some(link) = make_link_node(rel, href) else {
            tracing::warn!(rel, href, "could not build link element");
            return;
        };
        let parent = self
            .document
            .select_first("head")
            .map(|n| n.as_node().clone())
            .or_else(|()| self.document.select_first("html").map(|n| n.as_node().clone()))
            .unwrap_or_else(|()| self.document.clone());
        parent.append(link);
    }
}

#[derive(Clone)]
pub struct PageControl {
    element: NodeDataRef<ElementData>,
}

impl ThemeControl for PageControl {
    fn classes(&self) -> Vec<String> {
        classes_of(&self.element)
    }

    fn set_active(&self, active: bool) {
        let mut classes = self.classes();
        classes.retain(|c| c != CONTROL_ACTIVE_CLASS);
        if active {
            classes.push(CONTROL_ACTIVE_CLASS.to_string());
        }
        self.element
            .attributes
            .borrow_mut()
            .insert("class", classes.join(" "));
    }

    fn set_disabled(&self, disabled: bool) {
        let mut attrs = self.element.attributes.borrow_mut();
        if disabled {
            attrs.insert("disabled", String::new());
        } else {
            attrs.remove("disabled");
        }
    }

    fn is_active(&self) -> bool {
        self.has_class(CONTROL_ACTIVE_CLASS)
    }

    fn is_disabled(&self) -> bool {
        self.element.attributes.borrow().contains("disabled")
    }
}

fn classes_of(element: &NodeDataRef<ElementData>) -> Vec<String> {
    element
        .attributes
        .borrow()
        .get("class")
        .map(|s| s.split_whitespace().map(str::to_string).collect())
        .unwrap_or_default()
}

fn make_link_node(rel: &str, href: &str) -> Option<NodeRef> {
    let markup = html! { link rel=(rel) href=(href); };
    let doc = kuchiki::parse_html().one(markup.into_string());
    doc.select_first("link").ok().map(|n| n.as_node().clone())
}

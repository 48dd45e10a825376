use std::mem;
use std::rc::Rc;

use html5ever::serialize::{serialize, SerializeOpts, TraversalScope};
use html5ever::tendril::TendrilSink;
use html5ever::{local_name, namespace_url, ns, parse_fragment, ParseOpts, QualName};
use markup5ever_rcdom::{Handle, NodeData, RcDom, SerializableHandle};

use crate::error::PostProcessError;

/// An HTML snippet parsed in a `<body>` context, as produced by the Markdown converter.
pub struct HtmlFragment {
    dom: RcDom,
}

impl HtmlFragment {
    pub fn parse(html: &[u8]) -> Result<HtmlFragment, PostProcessError> {
        let html = std::str::from_utf8(html)?;
        let context = QualName::new(None, ns!(html), local_name!("body"));
        let dom = parse_fragment(RcDom::default(), ParseOpts::default(), context, vec![]).one(html);
        inline_template_contents(&dom.document);
        Ok(HtmlFragment { dom })
    }

    /// The synthetic `<html>` element holding the fragment nodes.
    fn root(&self) -> Handle {
        let root = self.dom.document.children.borrow().first().cloned();
        root.unwrap_or_else(|| self.dom.document.clone())
    }

    /// All nodes below the root, in document (pre-)order.
    pub fn descendants(&self) -> Vec<Handle> {
        let mut nodes = vec![];
        let mut stack: Vec<Handle> = self.root().children.borrow().iter().rev().cloned().collect();

        while let Some(node) = stack.pop() {
            stack.extend(node.children.borrow().iter().rev().cloned());
            nodes.push(node);
        }

        nodes
    }

    pub fn to_html(&self) -> Result<String, PostProcessError> {
        let mut buf: Vec<u8> = vec![];
        let root: SerializableHandle = self.root().into();
        let opts = SerializeOpts {
            traversal_scope: TraversalScope::ChildrenOnly(None),
            ..Default::default()
        };
        serialize(&mut buf, &root, opts)?;

        match String::from_utf8(buf) {
            Ok(html) => Ok(html),
            Err(e) => Err(PostProcessError::InvalidUtf8(e.utf8_error())),
        }
    }
}

/// html5ever keeps `<template>` contents in a side fragment that neither the walk
/// nor the serializer reaches. Moves them under the element itself.
fn inline_template_contents(document: &Handle) {
    let mut stack = vec![document.clone()];

    while let Some(node) = stack.pop() {
        if let NodeData::Element { ref template_contents, .. } = node.data {
            if let Some(contents) = template_contents.borrow_mut().take() {
                let moved = mem::take(&mut *contents.children.borrow_mut());
                for child in moved.iter() {
                    child.parent.set(Some(Rc::downgrade(&node)));
                }
                node.children.borrow_mut().extend(moved);
            }
        }
        stack.extend(node.children.borrow().iter().cloned());
    }
}

pub fn is_element(node: &Handle, tag: &str) -> bool {
    match node.data {
        NodeData::Element { ref name, .. } => &*name.local == tag,
        _ => false,
    }
}

/// Concatenated text of the node and everything below it.
pub fn text_content(node: &Handle) -> String {
    let mut text = String::new();
    let mut stack = vec![node.clone()];

    while let Some(node) = stack.pop() {
        if let NodeData::Text { ref contents } = node.data {
            text.push_str(&contents.borrow());
        }
        stack.extend(node.children.borrow().iter().rev().cloned());
    }

    text
}

//! Input and output data types.
//!
//! The engine reads caller trees through [`TreeSource`], a handle-based view that does not care
//! how the tree is stored. [`Node`] is an owned tree that implements it, mostly for fixtures and
//! callers that build their trees from JSON.

use crate::orientation::Orientation;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;

/// Smallest extent a node can have along either axis. Zero, negative and non-finite sizes are
/// clamped to this value.
pub const MIN_EXTENT: f64 = 1e-3;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Top-left anchored rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point {
            x: self.x + self.width / 2.0,
            y: self.y + self.height / 2.0,
        }
    }

    pub fn union(&self, other: &Rect) -> Rect {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        Rect {
            x,
            y,
            width: self.right().max(other.right()) - x,
            height: self.bottom().max(other.bottom()) - y,
        }
    }
}

/// A bracket over the children `start..=end` of one parent (zero-based, inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AbstractRange {
    pub start: usize,
    pub end: usize,
}

impl AbstractRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

impl fmt::Display for AbstractRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}..={}]", self.start, self.end)
    }
}

/// Read-only view over a caller tree.
///
/// `Node` is a cheap handle (an index, a reference, a key). Handles may form cycles: the mirror
/// builder enforces `LayoutOptions::max_depth` instead of trusting the source to be acyclic.
pub trait TreeSource {
    type Node: Copy;

    fn child_count(&self, node: Self::Node) -> usize;

    /// `index` is always below `child_count(node)`.
    fn child(&self, node: Self::Node, index: usize) -> Self::Node;

    /// Collapsed nodes are laid out as leaves.
    fn is_collapsed(&self, _node: Self::Node) -> bool {
        false
    }

    fn abstract_ranges(&self, _node: Self::Node) -> &[AbstractRange] {
        &[]
    }

    /// Layout requested for the subtree at `node`. Nodes without one inherit from their nearest
    /// ancestor that has one. On the root it replaces `LayoutOptions::orientation`.
    fn layout(&self, _node: Self::Node) -> Option<Orientation> {
        None
    }
}

/// Owned tree node.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub id: String,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub collapsed: bool,
    #[serde(default)]
    pub abstracts: Vec<AbstractRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<Orientation>,
    #[serde(default)]
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(id: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            width,
            height,
            ..Default::default()
        }
    }

    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    pub fn with_abstract(mut self, start: usize, end: usize) -> Self {
        self.abstracts.push(AbstractRange::new(start, end));
        self
    }

    pub fn with_layout(mut self, layout: Orientation) -> Self {
        self.layout = Some(layout);
        self
    }

    pub fn collapsed(mut self) -> Self {
        self.collapsed = true;
        self
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// [`TreeSource`] over `&Node` handles.
#[derive(Debug, Clone, Copy, Default)]
pub struct NodeTree<'a> {
    _nodes: PhantomData<&'a Node>,
}

impl NodeTree<'_> {
    pub fn new() -> Self {
        Self {
            _nodes: PhantomData,
        }
    }
}

impl<'a> TreeSource for NodeTree<'a> {
    type Node = &'a Node;

    fn child_count(&self, node: &'a Node) -> usize {
        node.children.len()
    }

    fn child(&self, node: &'a Node, index: usize) -> &'a Node {
        &node.children[index]
    }

    fn is_collapsed(&self, node: &'a Node) -> bool {
        node.collapsed
    }

    fn abstract_ranges(&self, node: &'a Node) -> &[AbstractRange] {
        &node.abstracts
    }

    fn layout(&self, node: &'a Node) -> Option<Orientation> {
        node.layout
    }
}

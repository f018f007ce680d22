#![forbid(unsafe_code)]

//! Headless tidy tree layout for mind maps and org charts.
//!
//! `narwhal` positions the nodes of a tree whose nodes have arbitrary, fixed sizes. It is a
//! linear-time non-layered variant of the Reingold–Tilford/Walker family: sibling subtrees never
//! overlap, parents are centred over their children, and the output depends only on the tree
//! shape, the node sizes and the options.
//!
//! Supported on top of the core passes:
//!
//! - right, left, downward and upward growth, plus the two-sided `standard` orientations where
//!   the root's children are split into two independently laid out groups;
//! - per-node layout requests, inherited by descendants, which switch a subtree to another growth
//!   direction on its side of the root;
//! - collapsed nodes, laid out as leaves;
//! - abstract ranges, which reserve bracket space after a run of siblings.
//!
//! Rendering, hit testing and editing are left to callers: they supply node sizes and consume one
//! rectangle per visible node.

pub mod config;
pub mod error;
pub mod model;
pub mod orientation;

mod abstracts;
mod contour;
mod engine;
mod first_pass;
mod mirror;
mod region;
mod second_pass;

pub use config::{LayoutOptions, ParentAlignment, RowMode};
pub use engine::{Layout, LayoutResult, Placement, layout, layout_source};
pub use error::{ConfigurationError, Error, Result, StructuralError};
pub use model::{AbstractRange, MIN_EXTENT, Node, NodeTree, Point, Rect, Size, TreeSource};
pub use orientation::{Direction, Orientation};

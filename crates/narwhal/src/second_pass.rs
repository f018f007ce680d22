//! Second pass: modifier resolution.

use crate::mirror::LayoutNode;

/// A node's real rectangle in the canonical frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct CanonicalBox {
    pub(crate) node: usize,
    /// Near edge along the sibling axis.
    pub(crate) breadth: f64,
    /// Near edge along the growth axis.
    pub(crate) depth: f64,
    pub(crate) breadth_size: f64,
    pub(crate) depth_size: f64,
}

/// Resolves absolute positions for the subtree at `root`, in pre-order (root first).
///
/// The absolute coordinate of a node is its preliminary coordinate plus the modifiers of every
/// node on the path from `root` down to it, itself included. Nothing is written back.
pub(crate) fn resolve(nodes: &[LayoutNode], root: usize) -> Vec<CanonicalBox> {
    let mut out = Vec::new();
    let mut stack = vec![(root, 0.0)];
    while let Some((v, parent_modsum)) = stack.pop() {
        let n = &nodes[v];
        let modsum = parent_modsum + n.modifier;
        let x = n.prelim + modsum;
        out.push(CanonicalBox {
            node: v,
            // The real box sits centred inside the contour box.
            breadth: x + (n.w - n.breadth) / 2.0,
            depth: n.y,
            breadth_size: n.breadth,
            depth_size: n.extent,
        });
        for &c in n.children.iter().rev() {
            stack.push((c, modsum));
        }
    }
    out
}

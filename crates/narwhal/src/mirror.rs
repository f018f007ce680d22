//! Tree mirror builder.
//!
//! Copies the visible part of a caller tree into an arena of [`MirrorNode`]s laid out in
//! pre-order, so a parent index is always smaller than its descendants' indices. The passes do not
//! run on the mirror directly: every region of nodes that grow in one direction gets its own
//! arena of [`LayoutNode`]s (see `region`). Children, threads and extremes are all arena indices;
//! the arena is the only owner.

use crate::abstracts;
use crate::error::{Result, StructuralError};
use crate::model::{AbstractRange, MIN_EXTENT, Size, TreeSource};
use crate::orientation::Orientation;

pub(crate) const ROOT: usize = 0;

/// One visible caller node.
#[derive(Debug, Clone)]
pub(crate) struct MirrorNode {
    pub(crate) parent: Option<usize>,
    pub(crate) children: Vec<usize>,
    pub(crate) depth: usize,
    /// Screen size, clamped to `MIN_EXTENT`.
    pub(crate) size: Size,
    /// Sorted, validated, and empty for collapsed nodes.
    pub(crate) abstracts: Vec<AbstractRange>,
    /// Layout the caller asked for on this node, if any.
    pub(crate) layout: Option<Orientation>,
}

/// Working node of the first and second passes.
#[derive(Debug, Clone)]
pub(crate) struct LayoutNode {
    pub(crate) parent: Option<usize>,
    pub(crate) children: Vec<usize>,
    pub(crate) depth: usize,
    /// Real size along the sibling axis.
    pub(crate) breadth: f64,
    /// Real size along the growth axis.
    pub(crate) extent: f64,
    /// Contour box: `breadth` plus sibling spacing.
    pub(crate) w: f64,
    /// Contour box: row extent plus row gap.
    pub(crate) h: f64,
    /// Depth coordinate of the contour box's near edge.
    pub(crate) y: f64,
    pub(crate) prelim: f64,
    pub(crate) modifier: f64,
    pub(crate) shift: f64,
    pub(crate) change: f64,
    pub(crate) thread_left: Option<usize>,
    pub(crate) thread_right: Option<usize>,
    pub(crate) extreme_left: usize,
    pub(crate) extreme_right: usize,
    pub(crate) modsum_extreme_left: f64,
    pub(crate) modsum_extreme_right: f64,
    pub(crate) abstracts: Vec<AbstractRange>,
}

impl LayoutNode {
    pub(crate) fn new(
        parent: Option<usize>,
        depth: usize,
        breadth: f64,
        extent: f64,
        abstracts: Vec<AbstractRange>,
    ) -> Self {
        Self {
            parent,
            children: Vec::new(),
            depth,
            breadth,
            extent,
            w: breadth,
            h: extent,
            y: 0.0,
            prelim: 0.0,
            modifier: 0.0,
            shift: 0.0,
            change: 0.0,
            thread_left: None,
            thread_right: None,
            extreme_left: 0,
            extreme_right: 0,
            modsum_extreme_left: 0.0,
            modsum_extreme_right: 0.0,
            abstracts,
        }
    }

    /// Clears everything a first pass writes.
    pub(crate) fn reset_working_state(&mut self, index: usize) {
        self.prelim = 0.0;
        self.modifier = 0.0;
        self.shift = 0.0;
        self.change = 0.0;
        self.thread_left = None;
        self.thread_right = None;
        self.extreme_left = index;
        self.extreme_right = index;
        self.modsum_extreme_left = 0.0;
        self.modsum_extreme_right = 0.0;
    }
}

/// Arena of mirror nodes plus the caller handle each one mirrors.
#[derive(Debug)]
pub(crate) struct MirrorTree<N> {
    pub(crate) nodes: Vec<MirrorNode>,
    pub(crate) origins: Vec<N>,
}

/// Builds the mirror of the tree rooted at `root`.
pub(crate) fn build<S, F>(
    source: &S,
    root: S::Node,
    size: &F,
    max_depth: usize,
) -> Result<MirrorTree<S::Node>>
where
    S: TreeSource,
    F: Fn(S::Node) -> Size,
{
    let mut tree = MirrorTree {
        nodes: Vec::new(),
        origins: Vec::new(),
    };

    // Depth-first, so a cyclic source trips the depth limit before it can blow up the arena.
    let mut stack: Vec<(S::Node, Option<usize>, usize)> = vec![(root, None, 0)];
    while let Some((handle, parent, depth)) = stack.pop() {
        if depth > max_depth {
            return Err(StructuralError::MaxDepthExceeded { limit: max_depth }.into());
        }

        let Size { width, height } = size(handle);
        let size = Size::new(clamp_extent(width), clamp_extent(height));

        let child_count = if source.is_collapsed(handle) {
            0
        } else {
            source.child_count(handle)
        };
        let ranges = if child_count == 0 {
            Vec::new()
        } else {
            abstracts::normalize(source.abstract_ranges(handle), child_count)?
        };

        let index = tree.nodes.len();
        tree.nodes.push(MirrorNode {
            parent,
            children: Vec::new(),
            depth,
            size,
            abstracts: ranges,
            layout: source.layout(handle),
        });
        tree.origins.push(handle);
        if let Some(p) = parent {
            tree.nodes[p].children.push(index);
        }

        for i in (0..child_count).rev() {
            stack.push((source.child(handle, i), Some(index), depth + 1));
        }
    }

    Ok(tree)
}

fn clamp_extent(v: f64) -> f64 {
    if v.is_finite() && v >= MIN_EXTENT {
        v
    } else {
        tracing::debug!(value = v, "clamping node extent to MIN_EXTENT");
        MIN_EXTENT
    }
}

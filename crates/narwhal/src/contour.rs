//! Contour tracker.
//!
//! A subtree's left (right) contour is walked by following its first (last) child, and through a
//! thread once a leaf is reached. Threads are installed by `set_left_thread`/`set_right_thread`
//! when two merged subtrees have different depths, which makes every contour step O(1).
//!
//! Each subtree also tracks its extreme nodes: the leftmost and rightmost nodes on its deepest
//! level, together with the modifier sum from the subtree root down to them.

use crate::mirror::LayoutNode;

/// Far edge of the node's contour box along the growth axis.
pub(crate) fn bottom(nodes: &[LayoutNode], v: usize) -> f64 {
    nodes[v].y + nodes[v].h
}

pub(crate) fn next_left_contour(nodes: &[LayoutNode], v: usize) -> Option<usize> {
    match nodes[v].children.first() {
        Some(&c) => Some(c),
        None => nodes[v].thread_left,
    }
}

pub(crate) fn next_right_contour(nodes: &[LayoutNode], v: usize) -> Option<usize> {
    match nodes[v].children.last() {
        Some(&c) => Some(c),
        None => nodes[v].thread_right,
    }
}

pub(crate) fn set_extremes(nodes: &mut [LayoutNode], v: usize) {
    let (first, last) = match (nodes[v].children.first(), nodes[v].children.last()) {
        (Some(&first), Some(&last)) => (first, last),
        _ => {
            let n = &mut nodes[v];
            n.extreme_left = v;
            n.extreme_right = v;
            n.modsum_extreme_left = 0.0;
            n.modsum_extreme_right = 0.0;
            return;
        }
    };
    let (el, msel) = (nodes[first].extreme_left, nodes[first].modsum_extreme_left);
    let (er, mser) = (nodes[last].extreme_right, nodes[last].modsum_extreme_right);
    let n = &mut nodes[v];
    n.extreme_left = el;
    n.modsum_extreme_left = msel;
    n.extreme_right = er;
    n.modsum_extreme_right = mser;
}

/// The subtree `current` reaches deeper than its left siblings: thread the left contour of the
/// merged block (rooted at `first`) into `cl`, keeping every node where it is.
pub(crate) fn set_left_thread(
    nodes: &mut [LayoutNode],
    first: usize,
    current: usize,
    cl: usize,
    modsum_cl: f64,
) {
    let li = nodes[first].extreme_left;
    nodes[li].thread_left = Some(cl);
    // After following the thread the modifier sum must equal `modsum_cl`.
    let diff = (modsum_cl - nodes[cl].modifier) - nodes[first].modsum_extreme_left;
    nodes[li].modifier += diff;
    nodes[li].prelim -= diff;
    nodes[first].extreme_left = nodes[current].extreme_left;
    nodes[first].modsum_extreme_left = nodes[current].modsum_extreme_left;
}

/// Mirror image of [`set_left_thread`]: the left siblings reach deeper than `current`.
pub(crate) fn set_right_thread(
    nodes: &mut [LayoutNode],
    previous: usize,
    current: usize,
    sr: usize,
    modsum_sr: f64,
) {
    let ri = nodes[current].extreme_right;
    nodes[ri].thread_right = Some(sr);
    let diff = (modsum_sr - nodes[sr].modifier) - nodes[current].modsum_extreme_right;
    nodes[ri].modifier += diff;
    nodes[ri].prelim -= diff;
    nodes[current].extreme_right = nodes[previous].extreme_right;
    nodes[current].modsum_extreme_right = nodes[previous].modsum_extreme_right;
}

#[derive(Debug, Clone, Copy)]
struct Floor {
    low_y: f64,
    index: usize,
}

/// Left siblings that are still visible from the right, each with the deepest coordinate it
/// reaches. The most recent sibling is on top and reaches the least deep; going down the stack,
/// siblings get older and deeper.
#[derive(Debug, Default)]
pub(crate) struct SiblingFloors {
    floors: Vec<Floor>,
}

impl SiblingFloors {
    /// Records sibling `index`, hiding every older sibling that does not reach deeper than it.
    pub(crate) fn push(&mut self, low_y: f64, index: usize) {
        while self.floors.last().is_some_and(|f| low_y >= f.low_y) {
            self.floors.pop();
        }
        self.floors.push(Floor { low_y, index });
    }

    pub(crate) fn cursor(&self) -> FloorCursor<'_> {
        FloorCursor {
            floors: &self.floors,
            pos: self.floors.len().saturating_sub(1),
        }
    }
}

/// Read position inside [`SiblingFloors`], moving from the top of the stack towards deeper
/// siblings as a contour walk descends.
#[derive(Debug)]
pub(crate) struct FloorCursor<'a> {
    floors: &'a [Floor],
    pos: usize,
}

impl FloorCursor<'_> {
    /// Steps to the next deeper sibling once the walk has gone past the current one's floor.
    pub(crate) fn advance_past(&mut self, y: f64) {
        if self.pos > 0 && y > self.floors[self.pos].low_y {
            self.pos -= 1;
        }
    }

    /// Sibling index whose subtree holds the right contour at the current depth.
    pub(crate) fn index(&self) -> usize {
        self.floors.get(self.pos).map_or(0, |f| f.index)
    }
}

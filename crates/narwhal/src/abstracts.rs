//! Abstract-range post-processor.
//!
//! An abstract range brackets a run of siblings. One bracket thickness is reserved after the end
//! of every range: later siblings of that parent move along the sibling axis together with their
//! subtrees. The parent's subtree grows by the same amount, so later siblings of each ancestor
//! move too. Every offset is monotone in sibling order, which keeps the no-overlap guarantee of
//! the passes intact.

use crate::error::ConfigurationError;
use crate::mirror::LayoutNode;
use crate::model::{AbstractRange, Rect};

/// Sorts and validates the ranges of one parent.
pub(crate) fn normalize(
    ranges: &[AbstractRange],
    child_count: usize,
) -> Result<Vec<AbstractRange>, ConfigurationError> {
    let mut sorted = ranges.to_vec();
    sorted.sort_by_key(|r| (r.start, r.end));
    for &range in &sorted {
        if range.start > range.end || range.end >= child_count {
            return Err(ConfigurationError::AbstractRangeOutOfBounds { range, child_count });
        }
    }
    for pair in sorted.windows(2) {
        if pair[1].start <= pair[0].end {
            return Err(ConfigurationError::OverlappingAbstractRanges {
                first: pair[0],
                second: pair[1],
            });
        }
    }
    Ok(sorted)
}

/// Splits the root's ranges between the two groups of a standard orientation. Ranges of the
/// second group are re-indexed from zero.
pub(crate) fn split_at(
    ranges: &[AbstractRange],
    split: usize,
) -> Result<(Vec<AbstractRange>, Vec<AbstractRange>), ConfigurationError> {
    let mut first = Vec::new();
    let mut second = Vec::new();
    for &range in ranges {
        if range.end < split {
            first.push(range);
        } else if range.start >= split {
            second.push(AbstractRange::new(range.start - split, range.end - split));
        } else {
            return Err(ConfigurationError::AbstractRangeStraddlesSplit { range, split });
        }
    }
    Ok((first, second))
}

/// Applies the reserved space to the rectangles of one layout arena.
///
/// `root_ranges` replaces the root's own ranges, since the root's children may be a single group
/// of a standard orientation. The arena must be in pre-order with `root` first.
pub(crate) fn apply(
    nodes: &[LayoutNode],
    root: usize,
    root_ranges: &[AbstractRange],
    thickness: f64,
    horizontal: bool,
    rects: &mut [Option<Rect>],
) {
    if thickness == 0.0 {
        return;
    }
    // `bracket[c]`: space reserved by the ranges of c's parent that end before c.
    // `growth[v]`: space reserved anywhere inside v's subtree, which every later sibling of v
    // has to make room for.
    let mut bracket = vec![0.0; nodes.len()];
    let mut growth = vec![0.0; nodes.len()];
    let mut any = false;
    for (p, node) in nodes.iter().enumerate() {
        let ranges = if p == root {
            root_ranges
        } else {
            node.abstracts.as_slice()
        };
        // Ranges are sorted and disjoint, so their ends ascend too.
        let mut ended = 0;
        for (k, &c) in node.children.iter().enumerate() {
            while ended < ranges.len() && ranges[ended].end < k {
                ended += 1;
            }
            bracket[c] = thickness * ended as f64;
        }
        any |= ended > 0;
        growth[p] = thickness * ended as f64;
    }
    if !any {
        return;
    }

    // Descendants have larger indices, so a reverse sweep folds every subtree into its root.
    for v in (0..nodes.len()).rev() {
        if let Some(p) = nodes[v].parent {
            growth[p] += growth[v];
        }
    }

    let mut offsets = vec![0.0; nodes.len()];
    for v in 0..nodes.len() {
        let mut before = 0.0;
        for &c in &nodes[v].children {
            offsets[c] = offsets[v] + bracket[c] + before;
            before += growth[c];
        }
        let offset = offsets[v];
        if offset == 0.0 {
            continue;
        }
        if let Some(rect) = rects[v].as_mut() {
            if horizontal {
                rect.y += offset;
            } else {
                rect.x += offset;
            }
        }
    }
}

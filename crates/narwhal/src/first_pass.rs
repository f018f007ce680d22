//! First pass: bottom-up placement.
//!
//! Non-layered tidy tree placement (van der Ploeg, "Drawing non-layered tidy trees in linear
//! time"). Every node gets a preliminary coordinate relative to its parent and a modifier that
//! moves its whole subtree. Siblings are merged left to right; each new sibling is pushed clear of
//! the block merged so far by walking the two facing contours.

use crate::config::{LayoutOptions, ParentAlignment, RowMode};
use crate::contour::{
    SiblingFloors, bottom, next_left_contour, next_right_contour, set_extremes, set_left_thread,
    set_right_thread,
};
use crate::mirror::LayoutNode;

/// Sizes every contour box and assigns depth coordinates.
///
/// Relies on the arena being in pre-order, so parents are visited before their children.
pub(crate) fn assign_rows(nodes: &mut [LayoutNode], options: &LayoutOptions) {
    let spacing = options.minimum_sibling_spacing;
    for n in nodes.iter_mut() {
        n.w = n.breadth + spacing;
    }

    match options.row_mode {
        RowMode::NonLayered => {
            for i in 0..nodes.len() {
                let y = nodes[i].parent.map_or(0.0, |p| bottom(nodes, p));
                let n = &mut nodes[i];
                n.y = y;
                n.h = n.extent + options.row_gap(n.depth);
            }
        }
        RowMode::Layered => {
            // Rows are local to the arena; its first node is the shallowest.
            let base = nodes.first().map_or(0, |n| n.depth);
            let mut rows: Vec<f64> = Vec::new();
            for n in nodes.iter() {
                let row = n.depth - base;
                if rows.len() <= row {
                    rows.resize(row + 1, 0.0);
                }
                rows[row] = rows[row].max(n.extent);
            }
            let mut starts = Vec::with_capacity(rows.len());
            let mut y = 0.0;
            for (row, extent) in rows.iter().enumerate() {
                starts.push(y);
                y += extent + options.row_gap(base + row);
            }
            for n in nodes.iter_mut() {
                let row = n.depth - base;
                n.y = starts[row];
                n.h = rows[row] + options.row_gap(n.depth);
            }
        }
    }
}

/// Runs the pass over the subtree reachable from `root` through `children` links.
pub(crate) fn run(nodes: &mut [LayoutNode], root: usize, alignment: ParentAlignment) {
    let order = post_order(nodes, root);
    for &v in &order {
        nodes[v].reset_working_state(v);
    }
    for &v in &order {
        place(nodes, v, alignment);
    }
}

/// Every node appears after all of its descendants.
fn post_order(nodes: &[LayoutNode], root: usize) -> Vec<usize> {
    let mut order = Vec::new();
    let mut stack = vec![root];
    while let Some(v) = stack.pop() {
        order.push(v);
        stack.extend(nodes[v].children.iter().copied());
    }
    order.reverse();
    order
}

fn place(nodes: &mut [LayoutNode], v: usize, alignment: ParentAlignment) {
    let children = nodes[v].children.clone();
    let Some(&first) = children.first() else {
        set_extremes(nodes, v);
        return;
    };

    let mut floors = SiblingFloors::default();
    floors.push(bottom(nodes, nodes[first].extreme_left), 0);
    for i in 1..children.len() {
        // Read before `separate` can redirect the extreme to a left sibling.
        let low_y = bottom(nodes, nodes[children[i]].extreme_right);
        separate(nodes, &children, i, &floors);
        floors.push(low_y, i);
    }

    position_root(nodes, v, &children, alignment);
    add_child_spacing(nodes, &children);
    set_extremes(nodes, v);
}

/// Apportion: pushes `children[i]` clear of `children[..i]`.
fn separate(nodes: &mut [LayoutNode], children: &[usize], i: usize, floors: &SiblingFloors) {
    let mut cursor = floors.cursor();

    // Right contour of the left block and left contour of the current subtree, each with the
    // modifier sum along the walk.
    let mut sr = Some(children[i - 1]);
    let mut mssr = nodes[children[i - 1]].modifier;
    let mut cl = Some(children[i]);
    let mut mscl = nodes[children[i]].modifier;

    while let (Some(r), Some(l)) = (sr, cl) {
        let sy = bottom(nodes, r);
        cursor.advance_past(sy);

        let dist = (mssr + nodes[r].prelim + nodes[r].w) - (mscl + nodes[l].prelim);
        if dist > 0.0 {
            mscl += dist;
            let si = cursor.index();
            tracing::trace!(child = i, against = si, dist, "apportion shift");
            move_subtree(nodes, children, i, si, dist);
        }

        let cy = bottom(nodes, l);
        if sy <= cy {
            sr = next_right_contour(nodes, r);
            if let Some(r) = sr {
                mssr += nodes[r].modifier;
            }
        }
        if sy >= cy {
            cl = next_left_contour(nodes, l);
            if let Some(l) = cl {
                mscl += nodes[l].modifier;
            }
        }
    }

    match (sr, cl) {
        (None, Some(l)) => set_left_thread(nodes, children[0], children[i], l, mscl),
        (Some(r), None) => set_right_thread(nodes, children[i - 1], children[i], r, mssr),
        _ => {}
    }
}

fn move_subtree(nodes: &mut [LayoutNode], children: &[usize], i: usize, si: usize, dist: f64) {
    let c = &mut nodes[children[i]];
    c.modifier += dist;
    c.modsum_extreme_left += dist;
    c.modsum_extreme_right += dist;
    distribute_extra(nodes, children, i, si, dist);
}

/// Spreads `dist` over the siblings strictly between `si` and `i` so they end up evenly spaced
/// instead of hugging `si`.
fn distribute_extra(nodes: &mut [LayoutNode], children: &[usize], i: usize, si: usize, dist: f64) {
    if si + 1 >= i {
        return;
    }
    let nr = (i - si) as f64;
    nodes[children[si + 1]].shift += dist / nr;
    nodes[children[i]].shift -= dist / nr;
    nodes[children[i]].change -= dist - dist / nr;
}

/// Folds the `shift`/`change` bookkeeping into the children's modifiers. The first and last
/// child never move here, so `position_root` may run before or after.
fn add_child_spacing(nodes: &mut [LayoutNode], children: &[usize]) {
    let mut d = 0.0;
    let mut modsum_delta = 0.0;
    for &c in children {
        d += nodes[c].shift;
        modsum_delta += d + nodes[c].change;
        nodes[c].modifier += modsum_delta;
    }
}

fn position_root(
    nodes: &mut [LayoutNode],
    v: usize,
    children: &[usize],
    alignment: ParentAlignment,
) {
    let (Some(&first), Some(&last)) = (children.first(), children.last()) else {
        return;
    };
    let f = &nodes[first];
    let l = &nodes[last];
    let near = f.prelim + f.modifier;
    let far = l.prelim + l.modifier + l.w;
    let center = match alignment {
        ParentAlignment::ChildCenters => ((near + f.w / 2.0) + (far - l.w / 2.0)) / 2.0,
        ParentAlignment::ChildExtents => (near + far) / 2.0,
    };
    nodes[v].prelim = center - nodes[v].w / 2.0;
}

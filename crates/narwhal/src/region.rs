//! Direction regions.
//!
//! Every node resolves a growth direction. A maximal connected group of nodes that share one is a
//! region, laid out by its own run of the passes. Nested regions are finished first and take part
//! in the enclosing run as a single rigid leaf covering their bounding box, the same way the two
//! groups of a standard orientation are composed around the root.

use crate::abstracts;
use crate::config::LayoutOptions;
use crate::first_pass;
use crate::mirror::{LayoutNode, MirrorNode, ROOT};
use crate::model::{AbstractRange, Point, Rect, Size};
use crate::orientation::{self, Direction, Orientation};
use crate::second_pass;

/// One independent layout run over the root and a group of its children.
#[derive(Debug)]
pub(crate) struct Side {
    pub(crate) direction: Direction,
    pub(crate) children: Vec<usize>,
    pub(crate) ranges: Vec<AbstractRange>,
}

/// Resolved directions of a mirror tree.
#[derive(Debug)]
pub(crate) struct Plan {
    /// Growth direction of every node. The root's entry is the first side's direction.
    pub(crate) directions: Vec<Direction>,
    /// Roots of nested regions, deepest-first (descending arena index).
    pub(crate) nested: Vec<usize>,
}

pub(crate) fn plan(mirror: &[MirrorNode], sides: &[Side]) -> Plan {
    let first = sides.first().map_or(Direction::Right, |s| s.direction);
    let mut directions = vec![first; mirror.len()];
    let mut side_of = vec![first; mirror.len()];
    let mut requested: Vec<Option<Orientation>> = vec![None; mirror.len()];
    for side in sides {
        for &c in &side.children {
            side_of[c] = side.direction;
        }
    }

    let mut nested = Vec::new();
    // Pre-order: parents are resolved before their children.
    for v in 0..mirror.len() {
        let Some(p) = mirror[v].parent else {
            continue;
        };
        // The root's own layout is the orientation; it is not inherited as a request.
        let (side, parent_direction, inherited) = if p == ROOT {
            (side_of[v], side_of[v], None)
        } else {
            (side_of[p], directions[p], requested[p])
        };
        side_of[v] = side;
        requested[v] = mirror[v].layout.or(inherited);
        directions[v] = orientation::resolve_direction(requested[v], side, parent_direction);
        if directions[v] != parent_direction {
            tracing::trace!(node = v, direction = ?directions[v], "nested direction region");
            nested.push(v);
        }
    }
    nested.reverse();
    Plan { directions, nested }
}

/// A finished region, in coordinates where its root's top-left corner is the origin.
#[derive(Debug, Clone)]
pub(crate) struct Block {
    /// Every node of the region and of the regions nested in it, by mirror index.
    pub(crate) rects: Vec<(usize, Rect)>,
    pub(crate) bounds: Rect,
}

impl Block {
    pub(crate) fn new(rects: Vec<(usize, Rect)>) -> Self {
        let bounds = rects
            .iter()
            .map(|(_, r)| *r)
            .reduce(|acc, r| acc.union(&r))
            .unwrap_or_default();
        Self { rects, bounds }
    }
}

fn breadth_and_extent(size: Size, direction: Direction) -> (f64, f64) {
    if direction.is_horizontal() {
        (size.height, size.width)
    } else {
        (size.width, size.height)
    }
}

/// Working arena of one run. `globals[i]` is the mirror index behind `nodes[i]`.
#[derive(Debug)]
pub(crate) struct Arena {
    pub(crate) nodes: Vec<LayoutNode>,
    pub(crate) globals: Vec<usize>,
}

/// Copies `root` and the subtrees of `top` into a pre-order arena, stopping at finished nested
/// regions, which become leaves the size of their bounds. The root's ranges are left out; the
/// caller passes them to the post-processor directly.
pub(crate) fn build_arena(
    mirror: &[MirrorNode],
    root: usize,
    top: &[usize],
    direction: Direction,
    blocks: &[Option<Block>],
) -> Arena {
    let (breadth, extent) = breadth_and_extent(mirror[root].size, direction);
    let mut nodes = vec![LayoutNode::new(
        None,
        mirror[root].depth,
        breadth,
        extent,
        Vec::new(),
    )];
    let mut globals = vec![root];

    let mut stack: Vec<(usize, usize)> = top.iter().rev().map(|&c| (c, 0)).collect();
    while let Some((g, parent)) = stack.pop() {
        let index = nodes.len();
        let m = &mirror[g];
        let node = match &blocks[g] {
            Some(block) => {
                let bounds = Size::new(block.bounds.width, block.bounds.height);
                let (breadth, extent) = breadth_and_extent(bounds, direction);
                LayoutNode::new(Some(parent), m.depth, breadth, extent, Vec::new())
            }
            None => {
                stack.extend(m.children.iter().rev().map(|&c| (c, index)));
                let (breadth, extent) = breadth_and_extent(m.size, direction);
                LayoutNode::new(Some(parent), m.depth, breadth, extent, m.abstracts.clone())
            }
        };
        nodes.push(node);
        globals.push(g);
        nodes[parent].children.push(index);
    }
    Arena { nodes, globals }
}

/// Lays out one region and composes the nested blocks it reaches. The returned rectangles put
/// `root`'s top-left corner at the origin.
pub(crate) fn run(
    mirror: &[MirrorNode],
    root: usize,
    top: &[usize],
    direction: Direction,
    root_ranges: &[AbstractRange],
    blocks: &mut [Option<Block>],
    options: &LayoutOptions,
) -> Vec<(usize, Rect)> {
    let Arena { mut nodes, globals } = build_arena(mirror, root, top, direction, blocks);
    first_pass::assign_rows(&mut nodes, options);
    first_pass::run(&mut nodes, ROOT, options.parent_alignment);
    let boxes = second_pass::resolve(&nodes, ROOT);

    let mut rects: Vec<Option<Rect>> = vec![None; nodes.len()];
    orientation::project(&boxes, direction, Point::default(), &mut rects);
    abstracts::apply(
        &nodes,
        ROOT,
        root_ranges,
        options.abstract_bracket_thickness,
        direction.is_horizontal(),
        &mut rects,
    );

    let mut out = Vec::with_capacity(nodes.len());
    for (g, rect) in globals.into_iter().zip(rects) {
        let Some(rect) = rect else {
            continue;
        };
        match blocks[g].take() {
            Some(block) => {
                let dx = rect.x - block.bounds.x;
                let dy = rect.y - block.bounds.y;
                out.extend(block.rects.into_iter().map(|(n, r)| {
                    let moved = Rect {
                        x: r.x + dx,
                        y: r.y + dy,
                        ..r
                    };
                    (n, moved)
                }));
            }
            None => out.push((g, rect)),
        }
    }
    out
}

/// Arena over the whole tree of `root`, with no nested regions.
#[cfg(test)]
pub(crate) fn arena_of(root: &crate::model::Node, direction: Direction) -> Vec<LayoutNode> {
    use crate::model::{Node, NodeTree};
    let tree = crate::mirror::build(&NodeTree::new(), root, &Node::size, 64).unwrap();
    let blocks = vec![None; tree.nodes.len()];
    build_arena(&tree.nodes, ROOT, &tree.nodes[ROOT].children, direction, &blocks).nodes
}

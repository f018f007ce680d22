use crate::abstracts;
use crate::config::LayoutOptions;
use crate::error::{Result, StructuralError};
use crate::mirror::{self, ROOT};
use crate::model::{AbstractRange, Node, NodeTree, Rect, Size, TreeSource};
use crate::orientation::Orientation;
use crate::region::{self, Block, Side};
use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use serde::Serialize;

/// One positioned node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement<N> {
    pub node: N,
    pub rect: Rect,
}

/// Output of [`layout_source`]: one placement per visible node, in pre-order (root first).
#[derive(Debug, Clone, PartialEq)]
pub struct Layout<N> {
    pub placements: Vec<Placement<N>>,
}

impl<N> Layout<N> {
    pub fn root(&self) -> Option<&Placement<N>> {
        self.placements.first()
    }

    pub fn bounds(&self) -> Option<Rect> {
        bounds_of(self.placements.iter().map(|p| &p.rect))
    }
}

/// Output of [`layout`], keyed by node id in pre-order.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct LayoutResult {
    pub positions: IndexMap<String, Rect>,
}

impl LayoutResult {
    pub fn get(&self, id: &str) -> Option<&Rect> {
        self.positions.get(id)
    }

    pub fn bounds(&self) -> Option<Rect> {
        bounds_of(self.positions.values())
    }
}

fn bounds_of<'a>(mut rects: impl Iterator<Item = &'a Rect>) -> Option<Rect> {
    let first = *rects.next()?;
    Some(rects.fold(first, |acc, r| acc.union(r)))
}

/// Lays out the tree rooted at `root`, reading node sizes from `size`.
///
/// A layout requested on a node through [`TreeSource::layout`] is inherited by its descendants.
/// The root's request replaces `options.orientation`.
pub fn layout_source<S, F>(
    source: &S,
    root: S::Node,
    size: F,
    options: &LayoutOptions,
) -> Result<Layout<S::Node>>
where
    S: TreeSource,
    F: Fn(S::Node) -> Size,
{
    options.validate()?;

    let tree = mirror::build(source, root, &size, options.max_depth)?;
    let orientation = tree.nodes[ROOT].layout.unwrap_or(options.orientation);
    let sides = plan_sides(
        orientation,
        options.root_split_index,
        tree.nodes[ROOT].children.clone(),
        &tree.nodes[ROOT].abstracts,
    )?;
    let plan = region::plan(&tree.nodes, &sides);

    tracing::debug!(
        nodes = tree.nodes.len(),
        sides = sides.len(),
        nested = plan.nested.len(),
        ?orientation,
        "tidy tree layout"
    );

    let mut blocks: Vec<Option<Block>> = vec![None; tree.nodes.len()];
    for &v in &plan.nested {
        let node = &tree.nodes[v];
        let rects = region::run(
            &tree.nodes,
            v,
            &node.children,
            plan.directions[v],
            &node.abstracts,
            &mut blocks,
            options,
        );
        blocks[v] = Some(Block::new(rects));
    }

    let origin = options.origin;
    let mut rects: Vec<Option<Rect>> = vec![None; tree.nodes.len()];
    for side in &sides {
        let placed = region::run(
            &tree.nodes,
            ROOT,
            &side.children,
            side.direction,
            &side.ranges,
            &mut blocks,
            options,
        );
        for (g, r) in placed {
            rects[g] = Some(Rect {
                x: r.x + origin.x,
                y: r.y + origin.y,
                ..r
            });
        }
    }

    let placements = tree
        .origins
        .into_iter()
        .zip(rects)
        .filter_map(|(node, rect)| rect.map(|rect| Placement { node, rect }))
        .collect();
    Ok(Layout { placements })
}

fn plan_sides(
    orientation: Orientation,
    root_split_index: Option<usize>,
    root_children: Vec<usize>,
    root_ranges: &[AbstractRange],
) -> Result<Vec<Side>> {
    let (first, second) = orientation.directions();
    let second = match second {
        Some(second) if orientation.is_standard() => second,
        _ => {
            return Ok(vec![Side {
                direction: first,
                children: root_children,
                ranges: root_ranges.to_vec(),
            }]);
        }
    };

    let n = root_children.len();
    let split = match root_split_index {
        Some(k) if k > n => {
            tracing::warn!(
                root_split_index = k,
                children = n,
                "root split index beyond child count; clamping"
            );
            n
        }
        Some(k) => k,
        None => n.div_ceil(2),
    };
    let (first_ranges, second_ranges) = abstracts::split_at(root_ranges, split)?;
    let mut first_children = root_children;
    let second_children = first_children.split_off(split);
    Ok(vec![
        Side {
            direction: first,
            children: first_children,
            ranges: first_ranges,
        },
        Side {
            direction: second,
            children: second_children,
            ranges: second_ranges,
        },
    ])
}

/// Lays out an owned [`Node`] tree using each node's own width and height.
pub fn layout(root: &Node, options: &LayoutOptions) -> Result<LayoutResult> {
    let placed = layout_source(&NodeTree::new(), root, Node::size, options)?;

    let mut seen: FxHashSet<&str> = FxHashSet::default();
    let mut positions = IndexMap::with_capacity(placed.placements.len());
    for Placement { node, rect } in placed.placements {
        if !seen.insert(node.id.as_str()) {
            return Err(StructuralError::DuplicateNodeId {
                id: node.id.clone(),
            }
            .into());
        }
        positions.insert(node.id.clone(), rect);
    }
    Ok(LayoutResult { positions })
}

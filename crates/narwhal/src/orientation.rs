//! Orientation adapter.
//!
//! The passes work in a canonical frame: `breadth` runs along the sibling axis and `depth` along
//! the growth axis, with the root at depth 0. Projection maps that frame onto screen axes. Only
//! the depth axis is ever mirrored, so sibling order always reads top-to-bottom for horizontal
//! layouts and left-to-right for vertical ones.

use crate::model::{Point, Rect};
use crate::second_pass::CanonicalBox;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Orientation {
    /// Children grow to the right of their parent.
    #[default]
    Right,
    Left,
    /// The root's children are split into a right-growing and a left-growing group.
    Standard,
    Downward,
    Upward,
    /// `Standard` rotated: a downward group and an upward group.
    StandardVertical,
}

impl Orientation {
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Right | Self::Left | Self::Standard)
    }

    pub fn is_standard(self) -> bool {
        matches!(self, Self::Standard | Self::StandardVertical)
    }

    /// Growth directions of the first and (for standard orientations) second root group.
    pub fn directions(self) -> (Direction, Option<Direction>) {
        match self {
            Self::Right => (Direction::Right, None),
            Self::Left => (Direction::Left, None),
            Self::Downward => (Direction::Downward, None),
            Self::Upward => (Direction::Upward, None),
            Self::Standard => (Direction::Right, Some(Direction::Left)),
            Self::StandardVertical => (Direction::Downward, Some(Direction::Upward)),
        }
    }
}

/// Growth direction of one layout run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Right,
    Left,
    Downward,
    Upward,
}

impl Direction {
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Right | Self::Left)
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::Right => Self::Left,
            Self::Left => Self::Right,
            Self::Downward => Self::Upward,
            Self::Upward => Self::Downward,
        }
    }

    fn mirrors_depth(self) -> bool {
        matches!(self, Self::Left | Self::Upward)
    }
}

/// Growth direction of a non-root node.
///
/// `requested` is the node's own layout or, failing that, the nearest non-root ancestor's. `side`
/// is the direction of the root group the node belongs to and `parent` its parent's resolved
/// direction. Below the root a two-sided orientation acts as its first group. A direction that
/// points back against the side or against the parent is flipped.
pub(crate) fn resolve_direction(
    requested: Option<Orientation>,
    side: Direction,
    parent: Direction,
) -> Direction {
    let Some(requested) = requested else {
        return side;
    };
    let mut direction = requested.directions().0;
    if direction == side.opposite() {
        direction = side;
    }
    if direction == parent.opposite() {
        direction = parent;
    }
    direction
}

/// Maps boxes produced by the second pass onto screen rectangles.
///
/// `boxes[0]` must be the root. The root's rectangle lands at `origin` whatever the direction, so
/// runs for the two groups of a standard orientation compose around the same root.
pub(crate) fn project(
    boxes: &[CanonicalBox],
    direction: Direction,
    origin: Point,
    out: &mut [Option<Rect>],
) {
    let Some(root) = boxes.first() else {
        return;
    };
    for b in boxes {
        let breadth = b.breadth - root.breadth;
        let mut depth = b.depth - root.depth;
        if direction.mirrors_depth() {
            depth = root.depth_size - depth - b.depth_size;
        }
        let rect = if direction.is_horizontal() {
            Rect {
                x: origin.x + depth,
                y: origin.y + breadth,
                width: b.depth_size,
                height: b.breadth_size,
            }
        } else {
            Rect {
                x: origin.x + breadth,
                y: origin.y + depth,
                width: b.breadth_size,
                height: b.depth_size,
            }
        };
        out[b.node] = Some(rect);
    }
}

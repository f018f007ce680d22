#![allow(dead_code)]

use narwhal::{LayoutResult, Node, Orientation, Rect};

pub const EPS: f64 = 1e-6;

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < EPS
}

#[track_caller]
pub fn assert_approx(actual: f64, expected: f64) {
    assert!(
        approx(actual, expected),
        "expected {expected}, got {actual} (diff {})",
        actual - expected
    );
}

#[track_caller]
pub fn assert_rect(actual: &Rect, x: f64, y: f64, width: f64, height: f64) {
    assert!(
        approx(actual.x, x)
            && approx(actual.y, y)
            && approx(actual.width, width)
            && approx(actual.height, height),
        "expected ({x}, {y}, {width}, {height}), got {actual:?}"
    );
}

pub fn leaf(id: &str, width: f64, height: f64) -> Node {
    Node::new(id, width, height)
}

/// Deterministic xorshift64*, so sweeps are reproducible.
pub struct XorShift64Star {
    state: u64,
}

impl XorShift64Star {
    pub fn new(seed: u64) -> Self {
        Self { state: seed.max(1) }
    }

    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D_u64)
    }

    pub fn next_f64_unit(&mut self) -> f64 {
        let u = self.next_u64() >> 11;
        (u as f64) / ((1u64 << 53) as f64)
    }

    pub fn next_usize(&mut self, upper: usize) -> usize {
        (self.next_f64_unit() * upper as f64).floor() as usize
    }

    pub fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64_unit()
    }
}

/// Random tree with ids `n0`, `n1`, ... in pre-order.
pub fn random_tree(rng: &mut XorShift64Star, max_nodes: usize, max_depth: usize) -> Node {
    let mut counter = 0;
    random_subtree(rng, &mut counter, max_nodes, max_depth)
}

fn random_subtree(
    rng: &mut XorShift64Star,
    counter: &mut usize,
    max_nodes: usize,
    depth_left: usize,
) -> Node {
    let id = format!("n{}", *counter);
    *counter += 1;
    let mut node = Node::new(id, rng.range(5.0, 120.0), rng.range(5.0, 80.0));
    if depth_left == 0 {
        return node;
    }
    let fanout = rng.next_usize(5);
    for _ in 0..fanout {
        if *counter >= max_nodes {
            break;
        }
        node.children
            .push(random_subtree(rng, counter, max_nodes, depth_left - 1));
    }
    if !node.children.is_empty() && rng.next_usize(10) == 0 {
        node.collapsed = true;
    }
    node
}

/// Visits every node that is laid out (descendants of collapsed nodes are skipped).
pub fn visible_ids(root: &Node) -> Vec<String> {
    let mut out = Vec::new();
    let mut stack = vec![root];
    while let Some(n) = stack.pop() {
        out.push(n.id.clone());
        if !n.collapsed {
            stack.extend(n.children.iter().rev());
        }
    }
    out
}

/// Splits a rectangle into (breadth start, breadth end, depth start, depth end).
pub fn axes(rect: &Rect, orientation: Orientation) -> (f64, f64, f64, f64) {
    if orientation.is_horizontal() {
        (rect.y, rect.bottom(), rect.x, rect.right())
    } else {
        (rect.x, rect.right(), rect.y, rect.bottom())
    }
}

/// Any two nodes that share part of the growth axis are at least `spacing` apart along the
/// sibling axis.
#[track_caller]
pub fn assert_no_overlap(result: &LayoutResult, orientation: Orientation, spacing: f64) {
    let rects: Vec<(&String, &Rect)> = result.positions.iter().collect();
    for (i, (a_id, a)) in rects.iter().enumerate() {
        let (ab0, ab1, ad0, ad1) = axes(a, orientation);
        for (b_id, b) in &rects[i + 1..] {
            let (bb0, bb1, bd0, bd1) = axes(b, orientation);
            let depth_overlap = ad0 < bd1 - EPS && bd0 < ad1 - EPS;
            if !depth_overlap {
                continue;
            }
            let gap = (bb0 - ab1).max(ab0 - bb1);
            assert!(
                gap >= spacing - EPS,
                "{a_id} {a:?} and {b_id} {b:?} are only {gap} apart (spacing {spacing})"
            );
        }
    }
}

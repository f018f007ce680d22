mod common;

use common::{assert_approx, assert_no_overlap, leaf};
use narwhal::{LayoutOptions, LayoutResult, Node, Orientation, layout};

fn branch(id: &str) -> Node {
    leaf(id, 60.0, 30.0).with_children(vec![
        leaf(&format!("{id}1"), 50.0, 24.0),
        leaf(&format!("{id}2"), 50.0, 24.0),
    ])
}

fn mind_map() -> Node {
    leaf("root", 100.0, 40.0).with_children(vec![
        branch("a"),
        branch("b"),
        branch("c"),
        branch("d"),
    ])
}

fn run(root: &Node, orientation: Orientation) -> LayoutResult {
    let opts = LayoutOptions {
        orientation,
        ..Default::default()
    };
    layout(root, &opts).unwrap()
}

#[test]
fn standard_layout_of_a_symmetric_tree_is_mirror_symmetric() {
    let opts = LayoutOptions {
        orientation: Orientation::Standard,
        root_split_index: Some(2),
        ..Default::default()
    };
    let result = layout(&mind_map(), &opts).unwrap();
    let root = result.get("root").unwrap();
    assert_approx(root.x, 0.0);
    assert_approx(root.y, 0.0);
    let axis = root.center().x;

    for (right, left) in [("a", "c"), ("b", "d"), ("a1", "c1"), ("b2", "d2")] {
        let r = result.get(right).unwrap();
        let l = result.get(left).unwrap();
        assert!(r.x > root.right());
        assert!(l.right() < root.x);
        assert_approx(r.y, l.y);
        assert_approx(r.center().x - axis, axis - l.center().x);
    }

    // Each side is centred on the root.
    let mid = |a: &str, b: &str| {
        (result.get(a).unwrap().center().y + result.get(b).unwrap().center().y) / 2.0
    };
    assert_approx(mid("a", "b"), root.center().y);
    assert_approx(mid("c", "d"), root.center().y);
}

#[test]
fn standard_split_defaults_to_the_larger_half_on_the_first_side() {
    let root = leaf("root", 100.0, 40.0).with_children(vec![
        leaf("a", 40.0, 20.0),
        leaf("b", 40.0, 20.0),
        leaf("c", 40.0, 20.0),
    ]);
    let result = run(&root, Orientation::Standard);
    let r = result.get("root").unwrap();
    assert!(result.get("a").unwrap().x > r.right());
    assert!(result.get("b").unwrap().x > r.right());
    assert!(result.get("c").unwrap().right() < r.x);
    // A lone child on the left is level with the root.
    assert_approx(result.get("c").unwrap().center().y, r.center().y);
}

#[test]
fn standard_split_beyond_child_count_puts_everything_on_the_first_side() {
    let opts = LayoutOptions {
        orientation: Orientation::Standard,
        root_split_index: Some(99),
        ..Default::default()
    };
    let result = layout(&mind_map(), &opts).unwrap();
    let root = result.get("root").unwrap();
    for rect in result.positions.values().skip(1) {
        assert!(rect.x > root.right());
    }
    assert_eq!(result, run(&mind_map(), Orientation::Right));
}

#[test]
fn left_is_the_mirror_image_of_right() {
    let right = run(&mind_map(), Orientation::Right);
    let left = run(&mind_map(), Orientation::Left);
    let root_w = right.get("root").unwrap().width;
    for (id, r) in &right.positions {
        let l = left.get(id).unwrap();
        assert_approx(l.y, r.y);
        assert_approx(l.x, root_w - r.right());
        assert_approx(l.width, r.width);
    }
}

fn transposed(node: &Node) -> Node {
    Node {
        width: node.height,
        height: node.width,
        children: node.children.iter().map(transposed).collect(),
        ..node.clone()
    }
}

#[test]
fn downward_is_right_with_axes_swapped() {
    let right = run(&mind_map(), Orientation::Right);
    let down = run(&transposed(&mind_map()), Orientation::Downward);
    for (id, r) in &right.positions {
        let d = down.get(id).unwrap();
        assert_approx(d.x, r.y);
        assert_approx(d.y, r.x);
        assert_approx(d.width, r.height);
        assert_approx(d.height, r.width);
    }
}

#[test]
fn upward_is_the_mirror_image_of_downward() {
    let down = run(&mind_map(), Orientation::Downward);
    let up = run(&mind_map(), Orientation::Upward);
    let root_h = down.get("root").unwrap().height;
    for (id, d) in &down.positions {
        let u = up.get(id).unwrap();
        assert_approx(u.x, d.x);
        assert_approx(u.y, root_h - d.bottom());
    }
    assert!(up.get("a1").unwrap().bottom() < up.get("a").unwrap().y);
}

#[test]
fn standard_vertical_grows_both_ways_from_the_root() {
    let opts = LayoutOptions {
        orientation: Orientation::StandardVertical,
        root_split_index: Some(1),
        ..Default::default()
    };
    let result = layout(&mind_map(), &opts).unwrap();
    let root = result.get("root").unwrap();
    assert!(result.get("a").unwrap().y > root.bottom());
    for id in ["b", "c", "d", "d2"] {
        assert!(result.get(id).unwrap().bottom() < root.y, "{id}");
    }
    assert_no_overlap(&result, Orientation::StandardVertical, 10.0);
}

#[test]
fn root_row_spacing_widens_only_the_first_gap() {
    let opts = LayoutOptions {
        row_spacing: 30.0,
        root_row_spacing: Some(90.0),
        ..Default::default()
    };
    let result = layout(&mind_map(), &opts).unwrap();
    let root = result.get("root").unwrap();
    let a = result.get("a").unwrap();
    let a1 = result.get("a1").unwrap();
    assert_approx(a.x - root.right(), 90.0);
    assert_approx(a1.x - a.right(), 30.0);
}

use super::{
    affordances, apply, ascend, descend, jump_to_id, linear_backward, linear_forward, shift_zoom,
    step, toggle_zoom, Command, Cursor, Direction, Mode, Overlay, Position,
};
use crate::node::Forest;
use crate::tests_support::{deep, find, forest, scenario_one};

fn at(forest: &Forest, title: &str, mode: Mode) -> Cursor {
    let node = find(forest, title);
    Cursor {
        presentation: forest.presentation_of(node).unwrap(),
        node,
        mode,
        ..Cursor::start(forest).unwrap()
    }
}

fn zoomed(index: usize) -> Mode {
    Mode::Zoomed { index }
}

#[test]
fn test_descend_then_linear_forward_reaches_sibling_leaf() {
    let forest = scenario_one();
    let a = Cursor::start(&forest).unwrap();

    let b = descend(&forest, a);
    assert_eq!(b.node, find(&forest, "B"));
    assert_eq!(b.mode, Mode::Hierarchical);

    // B has no container to its right.
    assert_eq!(step(&forest, b, Direction::Right), b);

    let c = linear_forward(&forest, b);
    assert_eq!(c.node, find(&forest, "C"));
    assert_eq!(
        c.previous,
        Some(Position {
            node: b.node,
            zoom: None
        })
    );
}

#[test]
fn test_jump_to_id_keeps_presentation_and_modes() {
    let forest = scenario_one();
    let b = at(&forest, "B", zoomed(0));

    let c = jump_to_id(&forest, b, "c");
    assert_eq!(c.node, find(&forest, "C"));
    assert_eq!(c.presentation, 0);
    assert_eq!(c.mode, zoomed(0));

    assert_eq!(jump_to_id(&forest, b, "nowhere"), b);
}

#[test]
fn test_jump_to_id_drops_zoom_past_target_content() {
    let forest = scenario_one();
    let c = at(&forest, "C", zoomed(0));

    let a = jump_to_id(&forest, c, "a");
    assert_eq!(a.node, find(&forest, "A"));
    assert_eq!(a.mode, Mode::Hierarchical);
    assert!(affordances(&forest, a).down);
    assert_eq!(descend(&forest, a).node, find(&forest, "B"));
}

#[test]
fn test_jump_to_id_clamps_zoom_in_linear_mode() {
    let forest = deep();
    let leaf = at(&forest, "Leaf", Mode::Linear { zoom: Some(1) });

    let p = jump_to_id(&forest, leaf, "p");
    assert_eq!(p.mode, Mode::Linear { zoom: Some(1) });

    let p2 = jump_to_id(&forest, leaf, "p2");
    assert_eq!(p2.mode, Mode::Linear { zoom: None });
}

#[test]
fn test_jump_to_id_switches_presentation() {
    let forest = forest(&[(1, "One", 0), (1, "Two", 0), (2, "Deep", 1)]);
    let start = Cursor::start(&forest).unwrap();

    let deep = jump_to_id(&forest, start, "deep");
    assert_eq!(deep.presentation, 1);
    assert_eq!(deep.node, find(&forest, "Deep"));
}

#[test]
fn test_toggle_zoom_without_content_is_noop() {
    let forest = scenario_one();
    let a = Cursor::start(&forest).unwrap();
    assert_eq!(toggle_zoom(&forest, a), a);
}

#[test]
fn test_toggle_zoom_twice_restores_derivation_view() {
    let forest = deep();
    let root = Cursor::start(&forest).unwrap();

    let inside = toggle_zoom(&forest, root);
    assert_eq!(inside.mode, zoomed(0));
    assert_eq!(toggle_zoom(&forest, inside), root);
}

#[test]
fn test_zoomed_leaf_cannot_zoom_out() {
    let forest = deep();
    let leaf = at(&forest, "Leaf", zoomed(1));
    assert_eq!(toggle_zoom(&forest, leaf), leaf);
}

#[test]
fn test_step_right_at_last_container_is_noop() {
    let forest = deep();
    let q1 = at(&forest, "Q1", Mode::Hierarchical);
    assert_eq!(step(&forest, q1, Direction::Right), q1);
}

#[test]
fn test_hierarchical_steps_skip_leaves() {
    let forest = deep();
    let p = at(&forest, "P", Mode::Hierarchical);

    let q = step(&forest, p, Direction::Right);
    assert_eq!(q.node, find(&forest, "Q"));
    assert_eq!(step(&forest, q, Direction::Left).node, p.node);
}

#[test]
fn test_descend_is_blocked_by_zoom_and_leaves() {
    let forest = deep();
    let zoomed_root = at(&forest, "Root", zoomed(0));
    assert_eq!(descend(&forest, zoomed_root), zoomed_root);

    let leaf = at(&forest, "Leaf", Mode::Hierarchical);
    assert_eq!(descend(&forest, leaf), leaf);
}

#[test]
fn test_ascend_leaves_zoom_before_moving() {
    let forest = deep();
    let p = at(&forest, "P", zoomed(1));

    let unzoomed = ascend(&forest, p);
    assert_eq!(unzoomed.node, p.node);
    assert_eq!(unzoomed.mode, Mode::Hierarchical);

    let root = ascend(&forest, unzoomed);
    assert_eq!(Some(root.node), forest.root(0));
    assert_eq!(ascend(&forest, root), root);
}

#[test]
fn test_ascend_from_zoomed_leaf_goes_to_parent() {
    let forest = deep();
    let leaf = at(&forest, "P1", zoomed(0));

    let parent = ascend(&forest, leaf);
    assert_eq!(parent.node, find(&forest, "P"));
    assert_eq!(parent.mode, Mode::Hierarchical);
}

#[test]
fn test_shift_zoom_spills_into_leaf_siblings() {
    let forest = forest(&[(1, "A", 0), (2, "B", 2), (2, "C", 3)]);
    let b = at(&forest, "B", zoomed(1));

    let c = shift_zoom(&forest, b, Direction::Right);
    assert_eq!(c.node, find(&forest, "C"));
    assert_eq!(c.mode, zoomed(0));

    let back = shift_zoom(&forest, c, Direction::Left);
    assert_eq!(back, b, "lands on the last item of the left sibling");

    let first = at(&forest, "B", zoomed(0));
    assert_eq!(shift_zoom(&forest, first, Direction::Left), first);
}

#[test]
fn test_shift_zoom_into_container_shows_derivation() {
    let forest = deep();
    let leaf = at(&forest, "Leaf", zoomed(2));

    let q = shift_zoom(&forest, leaf, Direction::Right);
    assert_eq!(q.node, find(&forest, "Q"));
    assert_eq!(q.mode, Mode::Hierarchical);

    let first = at(&forest, "Leaf", zoomed(0));
    let p = shift_zoom(&forest, first, Direction::Left);
    assert_eq!(p.node, find(&forest, "P"));
    assert_eq!(p.mode, Mode::Hierarchical);
}

#[test]
fn test_shift_zoom_stops_at_end_of_container_content() {
    let forest = deep();
    let p = at(&forest, "P", zoomed(1));
    assert_eq!(shift_zoom(&forest, p, Direction::Right), p);
}

#[test]
fn test_zoomed_step_walks_content() {
    let forest = deep();
    let leaf = at(&forest, "Leaf", zoomed(0));

    let next = step(&forest, leaf, Direction::Right);
    assert_eq!(next.node, leaf.node);
    assert_eq!(next.mode, zoomed(1));
}

#[test]
fn test_minimap_step_at_row_end_falls_back_to_linear() {
    let forest = scenario_one();
    let mut c = at(&forest, "C", Mode::Hierarchical);
    c.overlay = Overlay::Minimap;

    let next = step(&forest, c, Direction::Right);
    assert_eq!(Some(next.node), forest.root(0));
    assert_eq!(next.overlay, Overlay::Minimap);
}

#[test]
fn test_linear_mode_steps_through_every_node() {
    let forest = scenario_one();
    let mut cursor = Cursor::start(&forest).unwrap();
    cursor.mode = Mode::Linear { zoom: None };

    let mut visited = vec![cursor.node];
    for _ in 0..3 {
        cursor = step(&forest, cursor, Direction::Right);
        visited.push(cursor.node);
    }

    let names: Vec<&str> = visited
        .iter()
        .map(|id| forest.node(*id).heading.text.as_str())
        .collect();
    assert_eq!(names, vec!["A", "B", "C", "A"]);
}

#[test]
fn test_linear_backward_replays_previous_then_searches() {
    let forest = scenario_one();
    let a = Cursor::start(&forest).unwrap();

    let b = linear_forward(&forest, a);
    let replayed = linear_backward(&forest, b);
    assert_eq!(replayed.node, a.node);
    assert_eq!(replayed.previous, Some(replayed.position()));

    // Nothing left to replay: structural predecessor of A is its last child.
    let structural = linear_backward(&forest, replayed);
    assert_eq!(structural.node, find(&forest, "C"));
}

#[test]
fn test_linear_backward_at_start_is_noop() {
    let forest = forest(&[(1, "Solo", 1)]);
    let solo = Cursor::start(&forest).unwrap();

    assert_eq!(linear_backward(&forest, solo), solo);
    assert_eq!(apply(&forest, solo, &Command::LinearBackward), solo);
    let linear = Cursor {
        mode: Mode::Linear { zoom: None },
        ..solo
    };
    assert_eq!(linear_backward(&forest, linear).previous, None);
    assert!(!affordances(&forest, linear).left);
}

#[test]
fn test_linear_backward_retraces_zoom_excursion() {
    let forest = forest(&[(1, "A", 0), (2, "B", 2), (2, "C", 1)]);
    let b = toggle_zoom(&forest, at(&forest, "B", Mode::Hierarchical));

    let b1 = linear_forward(&forest, b);
    assert_eq!(b1.mode, zoomed(1));
    let c = linear_forward(&forest, b1);
    assert_eq!(c.node, find(&forest, "C"));
    assert_eq!(c.mode, zoomed(0));

    let back = linear_backward(&forest, c);
    assert_eq!(back.node, b.node);
    assert_eq!(back.mode, zoomed(1), "content index is replayed exactly");

    // Memory is one step deep: B is first in its row, so the search climbs out.
    let climbed = linear_backward(&forest, back);
    assert_eq!(Some(climbed.node), forest.root(0));
    assert_eq!(climbed.mode, Mode::Hierarchical);
}

#[test]
fn test_linear_backward_steps_back_through_content() {
    let forest = deep();
    let leaf = at(&forest, "Leaf", zoomed(2));

    let back = linear_backward(&forest, leaf);
    assert_eq!(back.node, leaf.node);
    assert_eq!(back.mode, zoomed(1));
}

#[test]
fn test_linear_forward_from_last_zoomed_leaf_climbs() {
    let forest = forest(&[
        (1, "R", 0),
        (2, "X", 0),
        (3, "X1", 1),
        (2, "Y", 0),
        (3, "Y1", 0),
    ]);
    let x1 = at(&forest, "X1", zoomed(0));

    let y = linear_forward(&forest, x1);
    assert_eq!(y.node, find(&forest, "Y"));
    assert_eq!(y.mode, Mode::Hierarchical);
    assert_eq!(y.previous, Some(x1.position()));
}

#[test]
fn test_linear_forward_past_container_content_enters_children() {
    let forest = deep();
    let p = at(&forest, "P", zoomed(1));

    let p1 = linear_forward(&forest, p);
    assert_eq!(p1.node, find(&forest, "P1"));
    assert_eq!(p1.mode, Mode::Hierarchical);
}

#[test]
fn test_linear_backward_structural_order() {
    let forest = deep();

    let q = at(&forest, "Q", Mode::Hierarchical);
    assert_eq!(linear_backward(&forest, q).node, find(&forest, "Q2"));

    let leaf = at(&forest, "Leaf", Mode::Hierarchical);
    assert_eq!(linear_backward(&forest, leaf).node, find(&forest, "P"));

    let p1 = at(&forest, "P1", Mode::Hierarchical);
    assert_eq!(linear_backward(&forest, p1).node, find(&forest, "P"));
}

#[test]
fn test_linear_mode_keeps_zoom_state() {
    let forest = deep();
    let root = Cursor {
        mode: Mode::Linear { zoom: None },
        ..Cursor::start(&forest).unwrap()
    };

    let inside = toggle_zoom(&forest, root);
    assert_eq!(inside.mode, Mode::Linear { zoom: Some(0) });
    assert!(inside.mode.is_linear());
    assert_eq!(inside.mode.linear(false), zoomed(0));
    assert_eq!(zoomed(3).linear(true), Mode::Linear { zoom: Some(3) });
}

#[test]
fn test_overlays_are_exclusive() {
    let forest = scenario_one();
    let start = Cursor::start(&forest).unwrap();

    let help = apply(&forest, start, &Command::ToggleOverlay(Overlay::Help));
    assert_eq!(help.overlay, Overlay::Help);
    assert_eq!(
        apply(&forest, help, &Command::ToggleOverlay(Overlay::Settings)),
        help
    );
    assert_eq!(
        apply(&forest, help, &Command::ToggleOverlay(Overlay::Help)).overlay,
        Overlay::None
    );
    assert_eq!(
        apply(&forest, help, &Command::CloseOverlay).overlay,
        Overlay::None
    );
}

#[test]
fn test_blocking_overlays_suppress_navigation() {
    let forest = deep();
    let start = Cursor::start(&forest).unwrap();

    for overlay in [Overlay::Settings, Overlay::Help, Overlay::Download] {
        let blocked = Cursor { overlay, ..start };
        for command in [
            Command::Descend,
            Command::StepRight,
            Command::ToggleZoom,
            Command::LinearForward,
            Command::FollowLink,
        ] {
            assert_eq!(apply(&forest, blocked, &command), blocked, "{command:?}");
        }
        let jumped = apply(&forest, blocked, &Command::JumpTo("q".to_string()));
        assert_eq!(jumped.node, find(&forest, "Q"));
    }

    let help = Cursor {
        overlay: Overlay::Help,
        ..start
    };
    assert_eq!(apply(&forest, help, &Command::SetLinear(true)), help);
    let settings = Cursor {
        overlay: Overlay::Settings,
        ..start
    };
    assert!(apply(&forest, settings, &Command::SetLinear(true))
        .mode
        .is_linear());
}

#[test]
fn test_minimap_vertical_moves_close_it() {
    let forest = scenario_one();
    let map = Cursor {
        overlay: Overlay::Minimap,
        ..Cursor::start(&forest).unwrap()
    };

    let down = apply(&forest, map, &Command::Descend);
    assert_eq!(down.node, find(&forest, "B"));
    assert_eq!(down.overlay, Overlay::None);

    let zoom = apply(&forest, map, &Command::ToggleZoom);
    assert_eq!(zoom, map);
}

#[test]
fn test_minimap_selection() {
    let forest = forest(&[(1, "One", 0), (1, "Two", 0), (2, "Deep", 1)]);
    let start = Cursor::start(&forest).unwrap();
    let target = find(&forest, "Deep");

    assert_eq!(apply(&forest, start, &Command::SelectNode(target)), start);

    let map = Cursor {
        overlay: Overlay::Minimap,
        ..start
    };
    let picked = apply(&forest, map, &Command::SelectNode(target));
    assert_eq!(picked.node, target);
    assert_eq!(picked.presentation, 1);
    assert_eq!(picked.overlay, Overlay::None);
}

#[test]
fn test_derivation_links() {
    let forest = scenario_one();
    let a = Cursor::start(&forest).unwrap();

    assert_eq!(apply(&forest, a, &Command::LinkPrev), a);
    let second = apply(&forest, a, &Command::LinkNext);
    assert_eq!(second.link, 1);
    assert_eq!(apply(&forest, second, &Command::LinkNext), second);

    let c = apply(&forest, second, &Command::FollowLink);
    assert_eq!(c.node, find(&forest, "C"));
    assert_eq!(c.link, 0);
    assert_eq!(c.previous, Some(a.position()));

    // Back retraces the followed link.
    assert_eq!(apply(&forest, c, &Command::LinearBackward).node, a.node);
}

#[test]
fn test_affordances_reflect_noops() {
    let forest = scenario_one();
    let a = Cursor::start(&forest).unwrap();

    let live = affordances(&forest, a);
    assert!(!live.left && !live.right && !live.up);
    assert!(live.down);
    assert!(!live.zoom_in && !live.zoom_out);

    let deep = deep();
    let root = affordances(&deep, Cursor::start(&deep).unwrap());
    assert!(root.zoom_in);
}

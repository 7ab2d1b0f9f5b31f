use super::{follower, next_sibling, predecessor, prev_sibling, search_by_id};
use crate::node::NodeId;
use crate::tests_support::{deep, find, forest, scenario_one};
use proptest::prelude::*;

#[test]
fn test_sibling_steps_skip_leaves() {
    let forest = deep();
    let p = find(&forest, "P");
    let q = find(&forest, "Q");
    let leaf = find(&forest, "Leaf");

    assert_eq!(next_sibling(&forest, p), Some(q));
    assert_eq!(prev_sibling(&forest, q), Some(p));
    assert_eq!(next_sibling(&forest, leaf), Some(q));
    assert_eq!(prev_sibling(&forest, leaf), Some(p));
    assert_eq!(next_sibling(&forest, q), None);
    assert_eq!(prev_sibling(&forest, p), None);
}

#[test]
fn test_leaf_siblings_have_no_container_neighbour() {
    let forest = scenario_one();
    let b = find(&forest, "B");
    let c = find(&forest, "C");

    assert_eq!(next_sibling(&forest, b), None);
    assert_eq!(prev_sibling(&forest, c), None);
}

#[test]
fn test_follower_visits_containers_depth_first() {
    let forest = deep();
    let mut order = Vec::new();
    let mut position = forest.root(0);
    while let Some(id) = position {
        order.push(forest.node(id).heading.text.as_str());
        position = follower(&forest, id);
    }

    assert_eq!(order, vec!["Root", "P", "Q", "Q1"]);
}

#[test]
fn test_follower_climbs_to_ancestor_sibling() {
    let forest = forest(&[
        (1, "R", 0),
        (2, "X", 0),
        (3, "X1", 0),
        (4, "X1a", 0),
        (2, "Y", 0),
        (3, "Y1", 0),
    ]);
    let x1 = find(&forest, "X1");
    let y = find(&forest, "Y");

    assert_eq!(follower(&forest, x1), Some(y));
}

#[test]
fn test_predecessor_prefers_sibling_then_parent() {
    let forest = deep();
    let root = forest.root(0).unwrap();
    let p = find(&forest, "P");
    let q = find(&forest, "Q");
    let q1 = find(&forest, "Q1");

    assert_eq!(predecessor(&forest, q), Some(p));
    assert_eq!(predecessor(&forest, p), Some(root));
    assert_eq!(predecessor(&forest, q1), Some(q));
    assert_eq!(predecessor(&forest, root), None);

    for id in [p, q, q1] {
        let before = predecessor(&forest, id).unwrap();
        assert_eq!(follower(&forest, before), Some(id));
    }
}

#[test]
fn test_search_by_id_reports_presentation() {
    let forest = forest(&[
        (1, "One", 0),
        (2, "Intro", 1),
        (1, "Two", 0),
        (2, "Intro", 1),
        (2, "Outro", 1),
    ]);

    let (index, found) = search_by_id(&forest, "outro").unwrap();
    assert_eq!(index, 1);
    assert_eq!(forest.node(found).heading.text, "Outro");

    // Duplicate ids resolve to the first depth-first match.
    let (index, found) = search_by_id(&forest, "intro").unwrap();
    assert_eq!(index, 0);
    assert_eq!(found, NodeId(1));

    assert_eq!(search_by_id(&forest, "missing"), None);
}

proptest! {
    #[test]
    fn prop_follower_is_container_preorder(
        shape in prop::collection::vec(1usize..=4, 1..24)
    ) {
        let titles: Vec<String> = (0..shape.len()).map(|i| format!("S{i}")).collect();
        let headings: Vec<(usize, &str, usize)> = shape
            .iter()
            .zip(&titles)
            .map(|(level, title)| (*level, title.as_str(), 0))
            .collect();
        let forest = forest(&headings);

        for (index, root) in forest.roots().iter().enumerate() {
            let containers: Vec<NodeId> = forest
                .nodes()
                .filter(|node| node.is_container())
                .filter(|node| forest.presentation_of(node.id) == Some(index))
                .map(|node| node.id)
                .collect();
            if !forest.node(*root).is_container() {
                prop_assert!(containers.is_empty());
                continue;
            }

            let mut walked = vec![*root];
            while let Some(next) = follower(&forest, *walked.last().unwrap()) {
                walked.push(next);
            }
            prop_assert_eq!(&walked, &containers);

            // Every predecessor precedes its node in that order.
            for id in containers.iter().skip(1) {
                let before = predecessor(&forest, *id).unwrap();
                let before_pos = walked.iter().position(|n| *n == before).unwrap();
                let pos = walked.iter().position(|n| n == id).unwrap();
                prop_assert!(before_pos < pos);
            }
        }
    }
}

use symdex_core::*;
use symdex_test_utils::{
    COLLIDING_PAIR, assert_well_formed, collide_with, depth_bound, synthetic_vocabulary,
};

// ---------------------------------------------------------------------------
// Shape
// ---------------------------------------------------------------------------

#[test]
fn every_size_builds_a_balanced_search_tree() {
    for n in 0..=MAX_SYMBOLS {
        let names = synthetic_vocabulary(n);
        let table = IndexBuilder::from_iter(&names).build().unwrap();

        assert_eq!(table.len(), n);
        assert_well_formed(&table);
        assert!(
            table.max_depth() <= depth_bound(n),
            "n = {n}: depth {} exceeds {}",
            table.max_depth(),
            depth_bound(n)
        );
        for name in &names {
            let position = table.find(name).unwrap();
            assert_eq!(table[position].text(), name);
        }
    }
}

#[test]
fn each_symbol_appears_once() {
    let names = synthetic_vocabulary(150);
    let table = IndexBuilder::from_iter(&names).build().unwrap();

    let mut stored: Vec<_> = table.iter().map(|node| node.text().to_string()).collect();
    let mut expected = names.clone();
    stored.sort();
    expected.sort();
    assert_eq!(stored, expected);
}

#[test]
fn root_is_the_only_node_at_position_zero() {
    let table = IndexBuilder::from_iter(synthetic_vocabulary(31))
        .build()
        .unwrap();
    for node in &table {
        assert_ne!(node.left.get(), Some(0));
        assert_ne!(node.right.get(), Some(0));
    }
}

#[test]
fn stored_hash_matches_text() {
    let table = IndexBuilder::from_iter(synthetic_vocabulary(64))
        .build()
        .unwrap();
    for node in &table {
        assert_eq!(node.hash, hash_str(node.text()));
    }
}

// ---------------------------------------------------------------------------
// Determinism
// ---------------------------------------------------------------------------

#[test]
fn rebuilding_is_identical() {
    let names = synthetic_vocabulary(100);
    let first = IndexBuilder::from_iter(&names).build().unwrap();
    let second = IndexBuilder::from_iter(&names).build().unwrap();
    assert_eq!(first, second);
    assert_eq!(first.to_string(), second.to_string());
}

// ---------------------------------------------------------------------------
// Collisions
// ---------------------------------------------------------------------------

#[test]
fn engineered_collision_is_rejected() {
    let (first, second) = COLLIDING_PAIR;
    let mut names = synthetic_vocabulary(20);
    names.insert(3, first.to_string());
    names.push(second.to_string());

    let err = IndexBuilder::from_iter(&names).build().unwrap_err();
    assert_eq!(
        err,
        IndexError::HashCollision {
            first: first.to_string(),
            second: second.to_string(),
            hash: hash_str(first),
        }
    );
}

#[test]
fn derived_collision_is_rejected() {
    let twin = collide_with("each_with_index").unwrap();
    let err = check_collisions(&["each_with_index", "map", twin.as_str()]).unwrap_err();
    match err {
        IndexError::HashCollision { first, second, .. } => {
            assert_eq!(first, "each_with_index");
            assert_eq!(second, twin);
        }
        other => panic!("expected a collision, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Runtime search over embedded data
// ---------------------------------------------------------------------------

#[test]
fn static_copy_searches_like_the_table() {
    let names = synthetic_vocabulary(40);
    let table = IndexBuilder::from_iter(&names).build().unwrap();

    let embedded: Vec<IndexNode<&str>> = table
        .iter()
        .map(|node| IndexNode::new(node.hash, node.left.raw(), node.right.raw(), node.text()))
        .collect();

    for name in &names {
        assert_eq!(lookup(&embedded, name), table.find(name));
    }
    assert_eq!(lookup(&embedded, "not_a_symbol"), None);
}

#[test]
fn three_symbol_scenario() {
    let table = IndexBuilder::from_iter(["new", "class", "to_s"])
        .build()
        .unwrap();
    assert_well_formed(&table);

    let position = table.find("class").unwrap();
    assert_eq!(table[position].text(), "class");
    assert_eq!(table[position].hash, 0xb966);

    insta::assert_snapshot!(table.to_string(), @r#"
    [0] 0x835a left=1 right=2 "new"
    [1] 0x3645 left=0 right=0 "to_s"
    [2] 0xb966 left=0 right=0 "class"
    "#);
}

//! Property tests for path round-trips and index consistency

use dirnode::{DirnodeIndex, NodeId, ROOT_ID};
use proptest::prelude::*;
use std::collections::HashSet;

#[derive(Debug, Clone)]
enum Op {
    Set(NodeId, String, NodeId),
    Delete(NodeId),
    Clear(NodeId),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    let id = 1u64..12;
    let parent = 0u64..12;
    let name = "[a-c]{1,2}";
    prop_oneof![
        4 => (id.clone(), name, parent).prop_map(|(id, name, parent)| Op::Set(id, name, parent)),
        1 => id.clone().prop_map(Op::Delete),
        1 => (0u64..12).prop_map(Op::Clear),
    ]
}

fn assert_bidirectional(index: &DirnodeIndex) {
    for (id, record) in index.iter() {
        assert_eq!(
            index.resolve_child(record.parent_id, record.name()).unwrap(),
            id
        );
    }
    for (parent_id, name, id) in index.children().entries() {
        let record = index.get(id).unwrap();
        assert_eq!(record.parent_id, parent_id);
        assert_eq!(record.name(), name);
    }
}

/// Build a forest where every parent precedes its children.
fn forest_strategy() -> impl Strategy<Value = Vec<(NodeId, String, NodeId)>> {
    prop::collection::vec(("[a-z]{1,6}", any::<prop::sample::Index>()), 1..40).prop_map(
        |entries| {
            let mut out: Vec<(NodeId, String, NodeId)> = Vec::new();
            for (i, (name, pick)) in entries.into_iter().enumerate() {
                let id = i as NodeId + 1;
                let parent = if out.is_empty() {
                    ROOT_ID
                } else {
                    // Choose among root and every id inserted so far
                    pick.index(out.len() + 1) as NodeId
                };
                // Suffix with the id so siblings never collide
                out.push((id, format!("{}-{}", name, id), parent));
            }
            out
        },
    )
}

proptest! {
    #[test]
    fn path_round_trip(forest in forest_strategy()) {
        let mut index = DirnodeIndex::new();
        for (id, name, parent) in &forest {
            index.set(*id, name.as_str(), *parent).unwrap();
        }
        prop_assert_eq!(index.len(), forest.len());
        for id in index.ids() {
            let patht = index.get_patht(id).unwrap();
            prop_assert_eq!(index.get_id(&patht).unwrap(), id);

            let ancestors = index.get_ancestors(id).unwrap();
            prop_assert_eq!(ancestors[0].id, ROOT_ID);
            prop_assert_eq!(ancestors.last().unwrap().id, id);
            prop_assert_eq!(ancestors.len(), patht.len());
        }
    }

    #[test]
    fn mutations_keep_both_stores_consistent(ops in prop::collection::vec(op_strategy(), 0..60)) {
        let mut index = DirnodeIndex::new();
        for op in ops {
            match op {
                Op::Set(id, name, parent) => {
                    index.set(id, name, parent).unwrap();
                }
                Op::Delete(id) => {
                    let _ = index.remove(id);
                }
                Op::Clear(id) => {
                    index.clear(id);
                }
            }
            assert_bidirectional(&index);
        }
    }

    #[test]
    fn sibling_names_stay_unique(names in prop::collection::vec("[xy]", 1..20)) {
        let mut index = DirnodeIndex::new();
        for (i, name) in names.iter().enumerate() {
            index.set(i as NodeId + 1, name.as_str(), ROOT_ID).unwrap();
        }
        let distinct: HashSet<&String> = names.iter().collect();
        prop_assert_eq!(index.len(), distinct.len());
        prop_assert_eq!(index.iter_children(ROOT_ID).count(), distinct.len());
        // The last writer of each name wins
        for name in distinct {
            let last = names.iter().rposition(|n| n == name).unwrap() as NodeId + 1;
            prop_assert_eq!(index.resolve_child(ROOT_ID, name).unwrap(), last);
        }
    }
}

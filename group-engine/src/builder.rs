//! FILENAME: group-engine/src/builder.rs
//! Tree Builder - partitions a flat row set into the multi-level group
//! tree with per-group aggregates.
//!
//! Algorithm per level:
//! 1. No descriptors left: emit one leaf-row node per row, input order.
//! 2. Otherwise bucket rows by the first descriptor's raw field value
//!    (stable partition: rows keep their relative order inside a bucket).
//! 3. Sort the distinct bucket keys by the descriptor's direction.
//! 4. Per key, compute aggregates over the full bucket, recurse with the
//!    remaining descriptors, and emit the group node immediately followed
//!    by its footer node.
//!
//! The tree is ephemeral: rebuilt from scratch whenever rows, descriptors
//! or the aggregate spec change, and immutable once built.

use rustc_hash::FxHashMap;

use grid_core::{Record, RowId, SortDirection, Value};

use crate::aggregate::compute_aggregates;
use crate::descriptor::{AggregateSpec, GroupDescriptor};
use crate::node::{footer_key, group_key, leaf_key, GridNode};

/// Builds the group tree over all rows of the slice.
pub fn build_group_tree(
    rows: &[Record],
    descriptors: &[GroupDescriptor],
    spec: &AggregateSpec,
) -> Vec<GridNode> {
    let ids: Vec<RowId> = (0..rows.len() as RowId).collect();
    build_level(rows, &ids, descriptors, spec, 0)
}

/// Builds the group tree over a subset of rows, given as ids in the order
/// the upstream sort/filter produced. Node `RowId`s always reference the
/// original `rows` slice.
pub fn build_group_tree_for(
    rows: &[Record],
    ids: &[RowId],
    descriptors: &[GroupDescriptor],
    spec: &AggregateSpec,
) -> Vec<GridNode> {
    build_level(rows, ids, descriptors, spec, 0)
}

fn build_level(
    rows: &[Record],
    ids: &[RowId],
    descriptors: &[GroupDescriptor],
    spec: &AggregateSpec,
    level: usize,
) -> Vec<GridNode> {
    let Some((descriptor, rest)) = descriptors.split_first() else {
        return leaf_nodes(ids, level, None);
    };

    // Stable partition: buckets in first-appearance order, members in
    // input order.
    let mut bucket_index: FxHashMap<Value, usize> = FxHashMap::default();
    let mut buckets: Vec<(Value, Vec<RowId>)> = Vec::new();

    for &id in ids {
        let value = rows[id as usize].get(&descriptor.field);
        let slot = match bucket_index.get(value) {
            Some(&slot) => slot,
            None => {
                let slot = buckets.len();
                bucket_index.insert(value.clone(), slot);
                buckets.push((value.clone(), Vec::new()));
                slot
            }
        };
        buckets[slot].1.push(id);
    }

    // Order buckets by the raw key. Keys are distinct, so there are no
    // ties to break.
    match descriptor.direction {
        SortDirection::Ascending => buckets.sort_by(|a, b| a.0.cmp(&b.0)),
        SortDirection::Descending => buckets.sort_by(|a, b| b.0.cmp(&a.0)),
    }

    let mut nodes = Vec::with_capacity(buckets.len() * 2);

    for (value, members) in buckets {
        let aggregates = compute_aggregates(rows, &members, spec);

        let children = if rest.is_empty() {
            leaf_nodes(&members, level + 1, Some(&value))
        } else {
            build_level(rows, &members, rest, spec, level + 1)
        };

        let key = group_key(&descriptor.field, &value);
        nodes.push(GridNode::Group {
            key: key.clone(),
            level,
            field: descriptor.field.clone(),
            value: value.clone(),
            member_rows: members,
            aggregates: aggregates.clone(),
            children,
        });
        nodes.push(GridNode::Footer {
            key: footer_key(&key),
            level,
            field: descriptor.field.clone(),
            value,
            aggregates,
        });
    }

    nodes
}

fn leaf_nodes(ids: &[RowId], level: usize, group_value: Option<&Value>) -> Vec<GridNode> {
    ids.iter()
        .enumerate()
        .map(|(index, &id)| GridNode::Row {
            key: leaf_key(level, group_value, index),
            level,
            row: id,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::AggregateKind;

    fn sales_rows() -> Vec<Record> {
        vec![
            Record::new().with_field("g", "a").with_field("v", 10.0),
            Record::new().with_field("g", "a").with_field("v", 20.0),
            Record::new().with_field("g", "b").with_field("v", 5.0),
        ]
    }

    fn sum_avg_count_spec() -> AggregateSpec {
        AggregateSpec::new().with_field(
            "v",
            [AggregateKind::Sum, AggregateKind::Avg, AggregateKind::Count],
        )
    }

    /// Walks the tree asserting every group node is immediately followed
    /// by a footer with identical field/value/aggregates.
    fn assert_footer_pairing(nodes: &[GridNode]) {
        for (i, node) in nodes.iter().enumerate() {
            if let GridNode::Group {
                field,
                value,
                aggregates,
                children,
                ..
            } = node
            {
                match &nodes[i + 1] {
                    GridNode::Footer {
                        field: ffield,
                        value: fvalue,
                        aggregates: faggs,
                        ..
                    } => {
                        assert_eq!(ffield, field);
                        assert_eq!(fvalue, value);
                        assert_eq!(faggs, aggregates);
                    }
                    other => panic!("group not followed by footer: {:?}", other),
                }
                assert_footer_pairing(children);
            }
        }
    }

    #[test]
    fn test_no_grouping_identity() {
        let rows = sales_rows();
        let tree = build_group_tree(&rows, &[], &sum_avg_count_spec());
        assert_eq!(tree.len(), 3);
        for (i, node) in tree.iter().enumerate() {
            match node {
                GridNode::Row { level, row, .. } => {
                    assert_eq!(*level, 0);
                    assert_eq!(*row, i as RowId);
                }
                other => panic!("expected leaf row, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_bucket_completeness() {
        let rows = sales_rows();
        let tree = build_group_tree(
            &rows,
            &[GroupDescriptor::ascending("g")],
            &AggregateSpec::new(),
        );

        let mut all_members: Vec<RowId> = tree
            .iter()
            .filter_map(|node| match node {
                GridNode::Group { member_rows, .. } => Some(member_rows.clone()),
                _ => None,
            })
            .flatten()
            .collect();
        all_members.sort_unstable();
        assert_eq!(all_members, vec![0, 1, 2]);
    }

    #[test]
    fn test_aggregate_correctness() {
        let rows = sales_rows();
        let tree = build_group_tree(
            &rows,
            &[GroupDescriptor::ascending("g")],
            &sum_avg_count_spec(),
        );

        // Groups at even positions, footers at odd
        let GridNode::Group { value, aggregates, .. } = &tree[0] else {
            panic!("expected group");
        };
        assert_eq!(value, &Value::text("a"));
        assert_eq!(aggregates["v:sum"], 30.0);
        assert_eq!(aggregates["v:avg"], 15.0);
        assert_eq!(aggregates["v:count"], 2.0);
        assert_eq!(aggregates["count"], 2.0);

        let GridNode::Group { value, aggregates, .. } = &tree[2] else {
            panic!("expected group");
        };
        assert_eq!(value, &Value::text("b"));
        assert_eq!(aggregates["v:sum"], 5.0);
        assert_eq!(aggregates["v:avg"], 5.0);
        assert_eq!(aggregates["v:count"], 1.0);
        assert_eq!(aggregates["count"], 1.0);
    }

    #[test]
    fn test_footer_pairing_invariant() {
        let rows = vec![
            Record::new().with_field("a", "x").with_field("b", 1.0).with_field("v", 1.0),
            Record::new().with_field("a", "x").with_field("b", 2.0).with_field("v", 2.0),
            Record::new().with_field("a", "y").with_field("b", 1.0).with_field("v", 3.0),
            Record::new().with_field("a", "y").with_field("b", 2.0).with_field("v", 4.0),
        ];
        let tree = build_group_tree(
            &rows,
            &[GroupDescriptor::ascending("a"), GroupDescriptor::ascending("b")],
            &sum_avg_count_spec(),
        );
        assert_footer_pairing(&tree);
    }

    #[test]
    fn test_descending_order() {
        let rows = vec![
            Record::new().with_field("g", 3.0),
            Record::new().with_field("g", 1.0),
            Record::new().with_field("g", 2.0),
        ];
        let tree = build_group_tree(
            &rows,
            &[GroupDescriptor::descending("g")],
            &AggregateSpec::new(),
        );

        let keys: Vec<f64> = tree
            .iter()
            .filter_map(|node| match node {
                GridNode::Group { value, .. } => value.as_number(),
                _ => None,
            })
            .collect();
        assert_eq!(keys, vec![3.0, 2.0, 1.0]);
    }

    #[test]
    fn test_multi_level_nesting() {
        let rows = vec![
            Record::new().with_field("g1", "x").with_field("g2", "p").with_field("v", 1.0),
            Record::new().with_field("g1", "x").with_field("g2", "q").with_field("v", 2.0),
            Record::new().with_field("g1", "y").with_field("g2", "p").with_field("v", 3.0),
            Record::new().with_field("g1", "y").with_field("g2", "q").with_field("v", 4.0),
        ];
        let tree = build_group_tree(
            &rows,
            &[GroupDescriptor::ascending("g1"), GroupDescriptor::ascending("g2")],
            &sum_avg_count_spec(),
        );

        // 2 groups + 2 footers at the top
        assert_eq!(tree.len(), 4);

        for node in &tree {
            let GridNode::Group { level, children, .. } = node else {
                continue;
            };
            assert_eq!(*level, 0);
            // 2 inner groups + 2 inner footers
            assert_eq!(children.len(), 4);
            for child in children {
                let GridNode::Group { level, children, member_rows, aggregates, .. } = child
                else {
                    continue;
                };
                assert_eq!(*level, 1);
                assert_eq!(member_rows.len(), 1);
                // Inner aggregates read the inner bucket directly
                assert_eq!(aggregates["count"], 1.0);
                for leaf in children {
                    match leaf {
                        GridNode::Row { level, .. } => assert_eq!(*level, 2),
                        other => panic!("expected leaf at level 2, got {:?}", other),
                    }
                }
            }
        }
    }

    #[test]
    fn test_group_aggregates_read_full_bucket_not_children() {
        let rows = vec![
            Record::new().with_field("g1", "x").with_field("g2", "p").with_field("v", 1.0),
            Record::new().with_field("g1", "x").with_field("g2", "q").with_field("v", 2.0),
        ];
        let tree = build_group_tree(
            &rows,
            &[GroupDescriptor::ascending("g1"), GroupDescriptor::ascending("g2")],
            &sum_avg_count_spec(),
        );
        let GridNode::Group { aggregates, member_rows, .. } = &tree[0] else {
            panic!("expected group");
        };
        assert_eq!(member_rows.len(), 2);
        assert_eq!(aggregates["v:sum"], 3.0);
        assert_eq!(aggregates["count"], 2.0);
    }

    #[test]
    fn test_group_keys_stable_across_rebuild() {
        let rows = sales_rows();
        let descriptors = [GroupDescriptor::ascending("g")];
        let first = build_group_tree(&rows, &descriptors, &AggregateSpec::new());
        let second = build_group_tree(&rows, &descriptors, &AggregateSpec::new());
        let keys = |tree: &[GridNode]| -> Vec<String> {
            tree.iter().map(|n| n.key().to_string()).collect()
        };
        assert_eq!(keys(&first), keys(&second));
    }

    #[test]
    fn test_blank_group_value_is_ordinary_bucket() {
        let rows = vec![
            Record::new().with_field("g", "a"),
            Record::new(), // "g" blank
            Record::new().with_field("g", "a"),
        ];
        let tree = build_group_tree(
            &rows,
            &[GroupDescriptor::ascending("g")],
            &AggregateSpec::new(),
        );
        // Blank sorts first: blank group+footer, then "a" group+footer
        assert_eq!(tree.len(), 4);
        let GridNode::Group { value, member_rows, .. } = &tree[0] else {
            panic!("expected group");
        };
        assert_eq!(value, &Value::Empty);
        assert_eq!(member_rows, &vec![1]);
    }

    #[test]
    fn test_subset_build_keeps_original_ids() {
        let rows = sales_rows();
        // Pretend upstream filtering dropped row 1
        let tree = build_group_tree_for(
            &rows,
            &[2, 0],
            &[GroupDescriptor::ascending("g")],
            &AggregateSpec::new(),
        );
        let GridNode::Group { member_rows, .. } = &tree[0] else {
            panic!("expected group");
        };
        assert_eq!(member_rows, &vec![0]); // bucket "a"
        let GridNode::Group { member_rows, .. } = &tree[2] else {
            panic!("expected group");
        };
        assert_eq!(member_rows, &vec![2]); // bucket "b"
    }

    #[test]
    fn test_empty_rows_build_empty_tree() {
        let rows: Vec<Record> = Vec::new();
        let tree = build_group_tree(
            &rows,
            &[GroupDescriptor::ascending("g")],
            &sum_avg_count_spec(),
        );
        assert!(tree.is_empty());
    }
}

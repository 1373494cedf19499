use googletest::prelude::*;

use super::{MergeOptions, merge};
use crate::extraction::RowGroup;
use crate::table::{Row, Table};

fn header_group(header: [&str; 2], rows: Vec<Row>) -> RowGroup {
    RowGroup {
        header: Some(Row::from(header)),
        rows,
    }
}

#[gtest]
fn test_merge_concatenates_groups_with_padding() {
    // First group has a header and two data rows, second is a single
    // headerless row wider than the first group.
    let groups = vec![
        header_group(["h1", "h2"], vec![Row::from(["a", "b"]), Row::from(["c", "d"])]),
        RowGroup {
            header: None,
            rows: vec![Row::from(["x", "y", "z"])],
        },
    ];

    let merged = merge(groups, &MergeOptions::default());

    expect_that!(merged.has_header, eq(true));
    expect_that!(
        merged.table,
        eq(&Table::from([
            vec!["h1", "h2", ""],
            vec!["a", "b", ""],
            vec!["c", "d", ""],
            vec!["x", "y", "z"],
        ]))
    );
}

#[gtest]
fn test_merge_is_deterministic() {
    let groups = || {
        vec![
            header_group(["h1", "h2"], vec![Row::from(["a", "b"])]),
            RowGroup {
                header: None,
                rows: vec![Row::from(["x"])],
            },
        ]
    };
    let options = MergeOptions {
        group_separators: true,
    };

    expect_that!(merge(groups(), &options), eq(&merge(groups(), &options)));
}

#[gtest]
fn test_merge_drops_blank_rows_including_separators() {
    let groups = vec![
        header_group(["h1", "h2"], vec![Row::from(["", ""]), Row::from(["a", "b"])]),
        RowGroup {
            header: None,
            rows: vec![Row::from(["x", "y"])],
        },
    ];

    let merged = merge(
        groups,
        &MergeOptions {
            group_separators: true,
        },
    );

    expect_that!(
        merged.table,
        eq(&Table::from([
            vec!["h1", "h2"],
            vec!["a", "b"],
            vec!["x", "y"],
        ]))
    );
}

#[gtest]
fn test_merge_headerless_first_group_is_not_a_header() {
    let groups = vec![
        RowGroup {
            header: None,
            rows: vec![Row::from(["x", "y"])],
        },
        header_group(["h1", "h2"], vec![Row::from(["a", "b"])]),
    ];

    let merged = merge(groups, &MergeOptions::default());

    expect_that!(merged.has_header, eq(false));
    expect_that!(
        merged.table,
        eq(&Table::from([
            vec!["x", "y"],
            vec!["h1", "h2"],
            vec!["a", "b"],
        ]))
    );
}

#[gtest]
fn test_merge_of_nothing_is_empty() {
    let merged = merge(Vec::new(), &MergeOptions::default());
    expect_that!(merged.table.is_empty(), eq(true));
    expect_that!(merged.has_header, eq(false));
}

#[gtest]
fn test_merge_header_counts_towards_target_width() {
    let groups = vec![header_group(["h1", "h2"], vec![Row::from(["a"])])];

    let merged = merge(groups, &MergeOptions::default());

    expect_that!(
        merged.table,
        eq(&Table::from([vec!["h1", "h2"], vec!["a", ""]]))
    );
}

//! Concatenation of per-region row groups into one output table.

#[cfg(test)]
mod tests;

use crate::extraction::RowGroup;
use crate::table::{Row, Table};

/// Options controlling [merge].
#[derive(Clone, Copy, Debug, Default)]
pub struct MergeOptions {
    /// Emit a row of empty cells between consecutive row groups. Such rows
    /// are removed again by the final blank-row sweep; the separator only
    /// survives if a sink-side sweep toggle is ever added.
    pub group_separators: bool,
}

/// The merged output table. `has_header` designates the first row as a header
/// row, for sinks that style headers.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MergedTable {
    pub table: Table,
    pub has_header: bool,
}

/// Concatenates `groups` in order into a single table.
///
/// Every emitted row is right-padded with empty cells to the widest row
/// across all groups, headers included. Rows whose cells are all empty are
/// dropped after concatenation. The output is deterministic for identical
/// ordered input.
pub fn merge(groups: Vec<RowGroup>, options: &MergeOptions) -> MergedTable {
    let target_width = groups
        .iter()
        .flat_map(|group| group.header.iter().chain(group.rows.iter()))
        .map(|row| row.len())
        .max()
        .unwrap_or(0);

    // Each row is tagged with whether it is a group's header, so that the
    // output header flag can be decided after the blank-row sweep.
    let mut rows: Vec<(Row, bool)> = Vec::new();
    for (group_index, group) in groups.into_iter().enumerate() {
        if options.group_separators && group_index > 0 {
            rows.push((Row(vec![String::new(); target_width]), false));
        }
        if let Some(header) = group.header {
            rows.push((pad_row(header, target_width), true));
        }
        for row in group.rows {
            rows.push((pad_row(row, target_width), false));
        }
    }

    rows.retain(|(row, _)| !row.is_blank());

    let has_header = rows.first().is_some_and(|(_, is_header)| *is_header);
    MergedTable {
        table: Table(rows.into_iter().map(|(row, _)| row).collect()),
        has_header,
    }
}

fn pad_row(mut row: Row, target_width: usize) -> Row {
    while row.len() < target_width {
        row.push(String::new());
    }
    row
}

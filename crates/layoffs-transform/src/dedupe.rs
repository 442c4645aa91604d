use std::collections::HashMap;

use layoffs_model::StagingTable;

/// Rank every row within the partition of rows identical on all business attributes.
///
/// Ranks are 1-based and follow table order, so the first occurrence gets 1.
pub fn assign_ranks(mut table: StagingTable) -> StagingTable {
    let mut seen: HashMap<Vec<Option<String>>, u32> = HashMap::with_capacity(table.len());
    for row in &mut table.rows {
        let rank = seen.entry(row.partition_key()).or_insert(0);
        *rank += 1;
        row.row_num = Some(*rank);
    }
    table
}

/// Drop every row ranked above 1. Leaves `row_num` set on the survivors.
pub fn deduplicate(table: StagingTable) -> StagingTable {
    let mut table = assign_ranks(table);
    table.rows.retain(|row| row.row_num == Some(1));
    table
}

/// Clear the helper rank attribute.
pub fn drop_rank(mut table: StagingTable) -> StagingTable {
    for row in &mut table.rows {
        row.row_num = None;
    }
    table
}

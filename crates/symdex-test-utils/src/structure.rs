use symdex_core::IndexTable;

/// Worst-case comparisons for a median-split tree over `n` symbols:
/// `ceil(log2(n + 1))`.
pub fn depth_bound(n: usize) -> usize {
    (usize::BITS - n.leading_zeros()) as usize
}

/// Panic unless `table` is a search tree rooted at position 0 that reaches
/// every node exactly once, with left subtrees strictly smaller and right
/// subtrees strictly greater than their parent.
pub fn assert_well_formed(table: &IndexTable) {
    if table.is_empty() {
        return;
    }

    let mut visited = vec![false; table.len()];
    let mut stack = vec![(0usize, u32::MIN, u32::MAX)];
    while let Some((position, low, high)) = stack.pop() {
        assert!(
            position < table.len(),
            "link to position {position} past the end of the table"
        );
        assert!(!visited[position], "position {position} reached twice");
        visited[position] = true;

        let node = &table[position];
        let hash = node.hash as u32;
        assert!(
            low <= hash && hash < high,
            "node {position} ({:?}) breaks the ordering",
            node.text
        );

        if let Some(child) = node.left.get() {
            stack.push((child, low, hash));
        }
        if let Some(child) = node.right.get() {
            stack.push((child, hash + 1, high));
        }
    }

    let unreached: Vec<_> = visited
        .iter()
        .enumerate()
        .filter(|(_, seen)| !**seen)
        .map(|(position, _)| position)
        .collect();
    assert!(unreached.is_empty(), "unreachable positions: {unreached:?}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_bound() {
        assert_eq!(depth_bound(0), 0);
        assert_eq!(depth_bound(1), 1);
        assert_eq!(depth_bound(2), 2);
        assert_eq!(depth_bound(3), 2);
        assert_eq!(depth_bound(7), 3);
        assert_eq!(depth_bound(8), 4);
        assert_eq!(depth_bound(134), 8);
    }
}

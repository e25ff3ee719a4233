//! Helpers for inspecting and comparing cluster labelings.
//!
//! Labelings are `cluster_index` arrays: ids `0..k` for members, `-1` for
//! outliers. Ids carry no meaning beyond grouping, so comparisons look at
//! cluster sizes only.

/// `max(id) + 1`, or 0 when no point is assigned.
pub fn count_clusters(ids: &[i32]) -> usize {
    ids.iter()
        .copied()
        .filter(|&id| id >= 0)
        .max()
        .map_or(0, |max| max as usize + 1)
}

/// Point indices of every cluster, indexed by cluster id.
pub fn cluster_members(ids: &[i32]) -> Vec<Vec<usize>> {
    let mut members = vec![Vec::new(); count_clusters(ids)];
    for (i, &id) in ids.iter().enumerate() {
        if id >= 0 {
            members[id as usize].push(i);
        }
    }
    members
}

/// Member count of every cluster, indexed by cluster id.
pub fn cluster_sizes(ids: &[i32]) -> Vec<usize> {
    let mut sizes = vec![0usize; count_clusters(ids)];
    for &id in ids {
        if id >= 0 {
            sizes[id as usize] += 1;
        }
    }
    sizes
}

pub fn count_outliers(ids: &[i32]) -> usize {
    ids.iter().filter(|&&id| id < 0).count()
}

/// True when both labelings have the same number of clusters and the same
/// multiset of cluster sizes.
pub fn validate_results(ids: &[i32], truth: &[i32]) -> bool {
    if count_clusters(ids) != count_clusters(truth) {
        return false;
    }
    let mut a = cluster_sizes(ids);
    let mut b = cluster_sizes(truth);
    a.sort_unstable();
    b.sort_unstable();
    a == b
}

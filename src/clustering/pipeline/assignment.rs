use crate::points::PointSet;
use log::warn;

/// Counts produced while classifying points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(super) struct AssignmentCounts {
    pub seeds: usize,
    pub outliers: usize,
    pub followers: usize,
    /// Neither seed nor outlier, yet without a nearest higher point.
    pub unassigned: usize,
}

/// Classify every point, then propagate seed ids down the follower links.
///
/// - seed: `delta > dc && rho >= rhoc`, ids assigned in index order;
/// - outlier: `delta > dm && rho < rhoc`, never receives an id;
/// - otherwise a follower of its nearest higher point.
pub(super) fn assign_clusters<const N: usize>(
    points: &mut PointSet<N>,
    dc: f32,
    rhoc: f32,
    dm: f32,
) -> AssignmentCounts {
    let mut counts = AssignmentCounts::default();
    let mut stack: Vec<usize> = Vec::new();
    let mut next_id = 0i32;

    for i in 0..points.len() {
        let rho = points.rho[i];
        let delta = points.delta[i];
        let is_seed = delta > dc && rho >= rhoc;
        let is_outlier = delta > dm && rho < rhoc;

        if is_seed {
            points.is_seed[i] = true;
            points.cluster_index[i] = next_id;
            next_id += 1;
            counts.seeds += 1;
            stack.push(i);
        } else if is_outlier {
            counts.outliers += 1;
        } else if let Some(higher) = points.nearest_higher[i] {
            points.followers[higher].push(i);
            counts.followers += 1;
        } else {
            counts.unassigned += 1;
        }
    }

    while let Some(i) = stack.pop() {
        let id = points.cluster_index[i];
        for &j in &points.followers[i] {
            points.cluster_index[j] = id;
            stack.push(j);
        }
    }

    if counts.unassigned > 0 {
        warn!(
            "assign_clusters: {} points left without a cluster",
            counts.unassigned
        );
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::points::NO_CLUSTER;

    fn chain() -> PointSet<1> {
        // 0 <- 1 <- 2, 3 is isolated and sparse.
        let mut points = PointSet::new();
        points.set([vec![0.0, 0.5, 1.0, 9.0]], vec![1.0; 4]);
        points.rho = vec![5.0, 4.0, 3.0, 1.0];
        points.delta = vec![f32::INFINITY, 0.5, 0.5, f32::INFINITY];
        points.nearest_higher = vec![None, Some(0), Some(1), None];
        points
    }

    #[test]
    fn ids_flow_down_follower_chains() {
        let mut points = chain();
        let counts = assign_clusters(&mut points, 1.0, 2.0, 2.0);
        assert_eq!(
            counts,
            AssignmentCounts {
                seeds: 1,
                outliers: 1,
                followers: 2,
                unassigned: 0
            }
        );
        assert_eq!(points.cluster_index, vec![0, 0, 0, NO_CLUSTER]);
        assert_eq!(points.is_seed, vec![true, false, false, false]);
        assert_eq!(points.followers[0], vec![1]);
        assert_eq!(points.followers[1], vec![2]);
    }

    #[test]
    fn follower_without_nearest_higher_stays_unassigned() {
        let mut points = chain();
        // Sparse with dc < delta <= dm: neither seed nor outlier.
        points.delta[3] = 1.5;
        let counts = assign_clusters(&mut points, 1.0, 2.0, 2.0);
        assert_eq!(counts.unassigned, 1);
        assert_eq!(points.cluster_index[3], NO_CLUSTER);
    }

    #[test]
    fn seed_ids_follow_index_order() {
        let mut points = PointSet::<1>::new();
        points.set([vec![0.0, 10.0, 20.0]], vec![1.0; 3]);
        points.rho = vec![3.0; 3];
        let counts = assign_clusters(&mut points, 1.0, 2.0, 2.0);
        assert_eq!(counts.seeds, 3);
        assert_eq!(points.cluster_index, vec![0, 1, 2]);
    }
}

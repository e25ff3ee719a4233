mod common;

use clue_clustering::{
    ClusteringError, ClusteringParams, Clusterer, Domain, ExponentialKernel, FlatKernel,
    KernelOptions, PointsStatus, NO_CLUSTER,
};
use common::synthetic_points::{concat, lattice_clump};
use std::f32::consts::PI;

#[test]
fn coincident_points_on_bounded_line() {
    let _ = env_logger::builder().is_test(true).try_init();
    let params = ClusteringParams::new(0.5, 2.0, 2.0, 1).with_domains(vec![Domain::new(0.0, 10.0)]);
    let mut clusterer = Clusterer::<1>::new(params);
    let status = clusterer
        .set_points([vec![1.0, 1.0, 1.0, 8.0]], vec![1.0; 4])
        .expect("valid points");
    assert_eq!(status, PointsStatus::Ready { n: 4 });

    let result = clusterer
        .make_clusters(&FlatKernel::new(0.5))
        .expect("clustering");
    assert_eq!(result.n_clusters, 1);
    assert_eq!(result.cluster_index, vec![0, 0, 0, NO_CLUSTER]);
    assert_eq!(result.is_seed.iter().filter(|&&s| s).count(), 1);
    assert!(!result.is_seed[3]);
}

#[test]
fn two_separated_clumps_give_two_clusters() {
    let _ = env_logger::builder().is_test(true).try_init();
    let coords = concat(vec![
        lattice_clump([0.0, 0.0], 5, 4, 0.1),
        lattice_clump([10.0, 10.0], 5, 4, 0.1),
    ]);
    let mut clusterer = Clusterer::<2>::new(ClusteringParams::new(1.0, 5.0, 2.0, 10));
    clusterer.set_points(coords, vec![1.0; 40]).expect("valid points");

    let result = clusterer
        .make_clusters(&ExponentialKernel::new(1.0, 1.0))
        .expect("clustering");
    assert_eq!(result.n_clusters, 2);
    assert!(result.cluster_index.iter().all(|&id| id == 0 || id == 1));
    let first = result.cluster_index[0];
    assert!(result.cluster_index[..20].iter().all(|&id| id == first));
    assert!(result.cluster_index[20..].iter().all(|&id| id == 1 - first));
    assert_eq!(result.is_seed.iter().filter(|&&s| s).count(), 2);
}

#[test]
fn lone_point_below_rhoc_is_an_outlier() {
    let mut clusterer = Clusterer::<3>::new(ClusteringParams::new(1.0, 1.5, 2.0, 1));
    clusterer
        .set_points([vec![0.3], vec![-2.0], vec![7.5]], vec![1.0])
        .expect("valid points");
    let result = clusterer
        .make_clusters(&KernelOptions::default())
        .expect("clustering");
    assert_eq!(result.cluster_index, vec![NO_CLUSTER]);
    assert_eq!(result.is_seed, vec![false]);
    assert_eq!(result.n_clusters, 0);
    assert_eq!(clusterer.points().rho, vec![1.0]);
}

/// Six points around the ±π seam and one point far from it.
fn seam_points() -> [Vec<f32>; 1] {
    [vec![3.0, 3.05, 3.1, -3.1, -3.05, -3.0, 0.0]]
}

#[test]
fn cluster_straddling_the_angular_seam_stays_whole() {
    let _ = env_logger::builder().is_test(true).try_init();
    let params = ClusteringParams::new(0.3, 2.0, 2.0, 1).with_domains(vec![Domain::new(-PI, PI)]);
    let mut clusterer = Clusterer::<1>::new(params);
    clusterer.set_points(seam_points(), vec![1.0; 7]).expect("valid points");

    let result = clusterer
        .make_clusters(&FlatKernel::new(0.5))
        .expect("clustering");
    assert_eq!(result.n_clusters, 1);
    assert_eq!(result.cluster_index, vec![0, 0, 0, 0, 0, 0, NO_CLUSTER]);
    assert_eq!(clusterer.points().rho[0], 3.5);
}

#[test]
fn same_points_split_at_the_seam_without_wraparound() {
    let mut clusterer = Clusterer::<1>::new(ClusteringParams::new(0.3, 2.0, 2.0, 1));
    clusterer.set_points(seam_points(), vec![1.0; 7]).expect("valid points");

    let result = clusterer
        .make_clusters(&FlatKernel::new(0.5))
        .expect("clustering");
    assert_eq!(result.n_clusters, 2);
    assert_eq!(result.cluster_index, vec![0, 0, 0, 1, 1, 1, NO_CLUSTER]);
}

#[test]
fn points_per_tile_above_point_count_is_rejected() {
    let mut clusterer = Clusterer::<2>::new(ClusteringParams::new(1.0, 2.0, 2.0, 50));
    clusterer
        .set_points(lattice_clump([0.0, 0.0], 7, 7, 0.1), vec![1.0; 49])
        .expect("valid points");
    let err = clusterer
        .make_clusters(&FlatKernel::default())
        .unwrap_err();
    assert_eq!(
        err,
        ClusteringError::NotEnoughPointsForTiles {
            points: 49,
            points_per_tile: 50
        }
    );
    assert!(err.to_string().contains("points_per_tile"));

    clusterer.set_points_per_tile(49);
    let result = clusterer
        .make_clusters(&FlatKernel::default())
        .expect("one tile is enough");
    assert_eq!(result.n_clusters, 1);
}

#[test]
fn mismatched_domain_count_is_rejected() {
    let params = ClusteringParams::new(1.0, 2.0, 2.0, 1).with_domains(vec![Domain::angular()]);
    let mut clusterer = Clusterer::<2>::new(params);
    clusterer
        .set_points([vec![0.0], vec![0.0]], vec![1.0])
        .expect("valid points");
    assert_eq!(
        clusterer.make_clusters(&FlatKernel::default()),
        Err(ClusteringError::DimensionMismatch {
            expected: 2,
            found: 1
        })
    );
}

#[test]
fn coordinates_outside_a_bounded_domain_are_rejected_until_wrapped() {
    let domain = Domain::new(0.0, 10.0);
    let params = ClusteringParams::new(0.5, 2.0, 2.0, 1).with_domains(vec![domain]);
    let mut clusterer = Clusterer::<1>::new(params);
    let xs = vec![-0.8, 9.5, 3.0, 5.0, 7.0];
    clusterer
        .set_points([xs.clone()], vec![1.0; 5])
        .expect("finite points");
    let err = clusterer
        .make_clusters(&FlatKernel::new(1.0))
        .unwrap_err();
    assert_eq!(
        err,
        ClusteringError::CoordinateOutsideDomain {
            point: 0,
            dim: 0,
            value: -0.8
        }
    );
    assert!(err.to_string().contains("outside the domain"));

    // Folded into the domain, -0.8 sits 0.3 from 9.5 and both count each other.
    let wrapped: Vec<f32> = xs.iter().map(|&x| domain.wrap(x)).collect();
    clusterer
        .set_points([wrapped], vec![1.0; 5])
        .expect("finite points");
    clusterer
        .make_clusters(&FlatKernel::new(1.0))
        .expect("clustering");
    assert!(clusterer.distance(0, 1).expect("indices in range") <= 0.5);
    assert_eq!(clusterer.points().rho, vec![2.0, 2.0, 1.0, 1.0, 1.0]);
}

mod common;

use clue_clustering::synthetic::{generate_blobs, SyntheticOptions};
use clue_clustering::tiles::ParallelBinningOptions;
use clue_clustering::validation::{cluster_sizes, count_clusters};
use clue_clustering::{
    ClusterAssignment, ClusteringParams, Clusterer, Domain, GaussianKernel, NO_CLUSTER,
};
use common::synthetic_points::walk_to_seed;

fn blob_dataset() -> clue_clustering::synthetic::SyntheticPoints<2> {
    generate_blobs::<2>(&SyntheticOptions {
        points: 3000,
        blobs: 6,
        sigma: 1.0,
        noise_fraction: 0.1,
        low: 0.0,
        high: 60.0,
        seed: 11,
    })
}

fn params() -> ClusteringParams {
    ClusteringParams::new(1.0, 5.0, 2.0, 10)
}

fn run(params: ClusteringParams) -> (Clusterer<2>, ClusterAssignment) {
    let mut data = blob_dataset();
    data.wrap_into(&params.resolve_domains::<2>().expect("two domains"));
    let mut clusterer = Clusterer::<2>::new(params);
    clusterer
        .set_points(data.coordinates, data.weights)
        .expect("valid points");
    let result = clusterer
        .make_clusters(&GaussianKernel::new(0.0, 1.0, 1.0))
        .expect("clustering");
    (clusterer, result)
}

#[test]
fn outputs_cover_every_point() {
    let _ = env_logger::builder().is_test(true).try_init();
    let (clusterer, result) = run(params());
    let n = clusterer.points().len();
    assert_eq!(n, 3000);
    assert_eq!(result.cluster_index.len(), n);
    assert_eq!(result.is_seed.len(), n);
    assert!(result.n_clusters > 0);
    assert_eq!(count_clusters(&result.cluster_index), result.n_clusters);
    assert!(cluster_sizes(&result.cluster_index).iter().all(|&s| s > 0));
}

#[test]
fn seed_ids_are_sequential_in_index_order() {
    let (_, result) = run(params());
    let seed_ids: Vec<i32> = result
        .is_seed
        .iter()
        .zip(&result.cluster_index)
        .filter(|(seed, _)| **seed)
        .map(|(_, &id)| id)
        .collect();
    let expected: Vec<i32> = (0..seed_ids.len() as i32).collect();
    assert_eq!(seed_ids, expected);
    assert_eq!(seed_ids.len(), result.n_clusters);
}

#[test]
fn members_reach_their_seed_and_unlabelled_points_do_not() {
    let p = params();
    let (dc, dm, rhoc) = (p.dc, p.dm(), p.rhoc);
    let (clusterer, result) = run(p);
    let points = clusterer.points();

    for i in 0..points.len() {
        let end = walk_to_seed(&points.nearest_higher, &points.is_seed, i);
        let id = result.cluster_index[i];
        if id == NO_CLUSTER {
            assert!(!result.is_seed[i]);
            assert!(!points.is_seed[end], "point {i} reaches seed {end} but has no id");
            // The walk stopped at an outlier.
            assert!(points.delta[end] > dm && points.rho[end] < rhoc);
        } else {
            assert!(points.is_seed[end], "point {i} does not reach a seed");
            assert_eq!(result.cluster_index[end], id);
        }

        let is_outlier = points.delta[i] > dm && points.rho[i] < rhoc;
        if is_outlier {
            assert_eq!(id, NO_CLUSTER);
        }
        if result.is_seed[i] {
            assert!(points.delta[i] > dc && points.rho[i] >= rhoc);
        }
    }
}

#[test]
fn nearest_higher_links_point_uphill_within_dm() {
    let p = params();
    let dm = p.dm();
    let (clusterer, _) = run(p);
    let points = clusterer.points();
    for (i, higher) in points.nearest_higher.iter().enumerate() {
        match *higher {
            Some(j) => {
                assert!(points.rho[j] > points.rho[i] || (points.rho[j] == points.rho[i] && j > i));
                assert!(points.delta[i] <= dm);
                let d = clusterer.distance(i, j).expect("valid indices");
                assert_eq!(d, points.delta[i]);
            }
            None => assert!(points.delta[i].is_infinite()),
        }
    }
}

#[test]
fn repeated_runs_match() {
    let (mut clusterer, first) = run(params());
    let kernel = GaussianKernel::new(0.0, 1.0, 1.0);
    let second = clusterer.make_clusters(&kernel).expect("second run");
    assert_eq!(first.cluster_index, second.cluster_index);
    assert_eq!(first.is_seed, second.is_seed);
    assert_eq!(first.n_clusters, second.n_clusters);
}

#[test]
fn binning_mode_does_not_change_the_result() {
    let (_, sequential) = run(params().with_binning(ParallelBinningOptions::disabled()));
    let (_, parallel) = run(params().with_binning(ParallelBinningOptions::new(true, 1)));
    assert_eq!(sequential.cluster_index, parallel.cluster_index);
    assert_eq!(sequential.is_seed, parallel.is_seed);
}

#[test]
fn distance_is_symmetric() {
    let params = params().with_domains(vec![Domain::UNBOUNDED, Domain::new(0.0, 60.0)]);
    let (clusterer, _) = run(params);
    let n = clusterer.points().len();
    for step in 0..200 {
        let i = (step * 7919) % n;
        let j = (step * 104_729 + 13) % n;
        let a = clusterer.distance(i, j).expect("valid indices");
        let b = clusterer.distance(j, i).expect("valid indices");
        assert_eq!(a, b);
        assert!(a >= 0.0);
    }
}

#[test]
fn weights_scale_density() {
    let data = blob_dataset();
    let mut unit = Clusterer::<2>::new(params());
    unit.set_points(data.coordinates.clone(), data.weights.clone())
        .expect("valid points");
    unit.make_clusters(&GaussianKernel::new(0.0, 1.0, 1.0))
        .expect("clustering");

    let mut doubled = Clusterer::<2>::new(params());
    doubled
        .set_points(data.coordinates, vec![2.0; data.weights.len()])
        .expect("valid points");
    doubled
        .make_clusters(&GaussianKernel::new(0.0, 1.0, 1.0))
        .expect("clustering");

    for (a, b) in unit.points().rho.iter().zip(&doubled.points().rho) {
        assert!((2.0 * a - b).abs() <= 1e-4 * b.max(1.0));
    }
}

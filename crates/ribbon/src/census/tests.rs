//! End-to-end census checks against hand counts and known tables.

use super::*;
use crate::bounds::matching_count;
use crate::pairing::PairingEnumerator;
use std::time::Duration;

fn counts(report: &CensusReport) -> Vec<u64> {
    report
        .histogram
        .iter()
        .map(|(_, c)| u64::try_from(c).expect("small count"))
        .collect()
}

fn census(vertex_count: usize, valence: usize) -> CensusReport {
    Census::new(RibbonCfg::new(vertex_count, valence))
        .unwrap()
        .run(SearchCfg::default())
        .unwrap()
}

#[test]
fn one_tetravalent_vertex() {
    // (0 1)(2 3) and (0 3)(1 2) are planar, (0 2)(1 3) is the torus
    let r = census(1, 4);
    assert_eq!(r.matchings, BigUint::from(3u32));
    assert_eq!(r.disconnected, BigUint::default());
    assert_eq!(counts(&r), vec![2, 1]);
}

#[test]
fn two_bivalent_vertices() {
    // (0 1)(2 3) is two separate loops; the other two matchings are spheres
    let r = census(2, 2);
    assert_eq!(r.matchings, BigUint::from(3u32));
    assert_eq!(r.disconnected, BigUint::from(1u32));
    assert_eq!(counts(&r), vec![2]);
    assert_eq!(r.connected(), BigUint::from(2u32));
}

#[test]
fn one_vertex_family_matches_harer_zagier() {
    assert_eq!(counts(&census(1, 2)), vec![1]);
    assert_eq!(counts(&census(1, 6)), vec![5, 10]);
    assert_eq!(counts(&census(1, 8)), vec![14, 70, 21]);
}

#[test]
fn multi_vertex_tables() {
    let cases: [(usize, usize, u64, Vec<u64>); 7] = [
        (2, 1, 0, vec![1]),
        (4, 1, 3, vec![0]),
        (2, 3, 0, vec![12, 3]),
        (2, 4, 9, vec![36, 60]),
        (3, 2, 7, vec![8]),
        (4, 2, 57, vec![48]),
        (3, 4, 891, vec![1728, 6336, 1440]),
    ];
    for (v, d, disconnected, bins) in cases {
        let r = census(v, d);
        assert_eq!(r.matchings, matching_count(v * d), "({v},{d})");
        assert_eq!(r.disconnected, BigUint::from(disconnected), "({v},{d})");
        assert_eq!(counts(&r), bins, "({v},{d})");
    }
}

#[test]
fn histogram_sum_matches_independent_recount() {
    let c = Census::new(RibbonCfg::new(3, 2)).unwrap();
    let r = c.run(SearchCfg::default()).unwrap();
    // recount connected matchings with a plain enumerator + genus_of
    let mut connected = 0u32;
    let mut e = PairingEnumerator::new(c.arrow_count()).unwrap();
    e.run(&mut |p: &Permutation| -> Result<(), RibbonError> {
        if c.genus_of(p)?.is_some() {
            connected += 1;
        }
        Ok(())
    })
    .unwrap();
    assert_eq!(r.connected(), BigUint::from(connected));
    assert_eq!(
        r.connected() + &r.disconnected,
        matching_count(c.arrow_count())
    );
}

#[test]
fn parallel_matches_sequential_and_reruns_are_identical() {
    let c = Census::new(RibbonCfg::new(2, 6)).unwrap();
    let seq = c.run(SearchCfg::default()).unwrap();
    let par = c
        .run(SearchCfg {
            execution: Execution::Parallel,
            deadline: None,
        })
        .unwrap();
    assert_eq!(seq.histogram, par.histogram);
    assert_eq!(seq.matchings, par.matchings);
    assert_eq!(seq.disconnected, par.disconnected);
    assert_eq!(counts(&seq), vec![600, 4800, 4770]);
    assert_eq!(c.run(SearchCfg::default()).unwrap(), seq);
}

#[test]
fn small_max_genus_fails_loudly() {
    let c = Census::new(RibbonCfg::new(1, 4).with_max_genus(0)).unwrap();
    match c.run(SearchCfg::default()) {
        Err(RibbonError::GenusOutOfRange {
            genus,
            max_genus,
            edge,
        }) => {
            assert_eq!((genus, max_genus), (1, 0));
            assert_eq!(edge, vec![2, 3, 0, 1]);
        }
        other => panic!("expected GenusOutOfRange, got {other:?}"),
    }
}

#[test]
fn wider_max_genus_keeps_empty_bins() {
    let c = Census::new(RibbonCfg::new(1, 4).with_max_genus(4)).unwrap();
    let r = c.run(SearchCfg::default()).unwrap();
    assert_eq!(r.max_genus(), 4);
    assert_eq!(counts(&r), vec![2, 1, 0, 0, 0]);
}

#[test]
fn oversized_max_genus_is_a_config_error() {
    for max_genus in [5, 1 << 40, usize::MAX] {
        let err = Census::new(RibbonCfg::new(1, 4).with_max_genus(max_genus)).unwrap_err();
        assert!(matches!(err, RibbonError::InvalidConfig { .. }), "{err:?}");
        assert!(!err.is_internal());
    }
}

#[test]
fn zero_deadline_stops_before_first_branch() {
    let c = Census::new(RibbonCfg::new(2, 4)).unwrap();
    for execution in [Execution::Sequential, Execution::Parallel] {
        let res = c.run(SearchCfg {
            execution,
            deadline: Some(Duration::ZERO),
        });
        assert!(matches!(res, Err(RibbonError::DeadlineExceeded { .. })));
    }
}

#[test]
fn invalid_shapes_fail_before_enumeration() {
    for (v, d) in [(3, 3), (0, 4), (2, 0), (1, 5)] {
        let err = Census::new(RibbonCfg::new(v, d)).unwrap_err();
        assert!(matches!(err, RibbonError::InvalidConfig { .. }));
        assert!(!err.is_internal());
    }
}

#[test]
fn genus_of_single_matchings() {
    let c = Census::new(RibbonCfg::new(2, 2)).unwrap();
    let loops = Permutation::from_images(vec![1, 0, 3, 2]).unwrap();
    let cross = Permutation::from_images(vec![2, 3, 0, 1]).unwrap();
    assert_eq!(c.genus_of(&loops).unwrap(), None);
    assert_eq!(c.genus_of(&cross).unwrap(), Some(0));
    assert!(c.genus_of(&Permutation::identity(4)).is_err());
    assert!(c.genus_of(&Permutation::from_images(vec![1, 0]).unwrap()).is_err());
}

#[test]
fn default_max_genus_is_tight_bound() {
    let c = Census::new(RibbonCfg::new(3, 4)).unwrap();
    assert_eq!(c.max_genus(), 2);
    let r = c.run(SearchCfg::default()).unwrap();
    assert_eq!(r.histogram.top_genus(), Some(2));
}

mod props {
    use super::*;
    use crate::bounds::max_connected_genus;
    use proptest::prelude::*;

    fn even_shape() -> impl Strategy<Value = (usize, usize)> {
        (1usize..=4, 1usize..=4)
            .prop_filter("even arrow count, at most 12 arrows", |(v, d)| {
                (v * d) % 2 == 0 && v * d <= 12
            })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(24))]

        #[test]
        fn census_invariants_hold((v, d) in even_shape()) {
            let c = Census::new(RibbonCfg::new(v, d)).unwrap();
            let seq = c.run(SearchCfg::default()).unwrap();
            prop_assert_eq!(&seq.matchings, &matching_count(v * d));
            prop_assert_eq!(seq.connected() + &seq.disconnected, matching_count(v * d));
            if let Some(top) = seq.histogram.top_genus() {
                prop_assert!(top <= max_connected_genus(v, v * d));
            }
            if v == 1 {
                prop_assert_eq!(seq.disconnected.clone(), BigUint::default());
            }
            let par = c.run(SearchCfg { execution: Execution::Parallel, deadline: None }).unwrap();
            prop_assert_eq!(seq.histogram, par.histogram);
            prop_assert_eq!(seq.disconnected, par.disconnected);
        }
    }
}

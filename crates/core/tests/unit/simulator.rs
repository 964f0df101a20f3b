//! # Simulation Driver Tests
//!
//! Phase transitions, hit/fault/eviction accounting, end-to-end runs from
//! files, and run-to-run determinism.

use pagesim_core::common::PageRef;
use pagesim_core::policy::EvictionPolicy;
use pagesim_core::config::{Algorithm, PreloadMode, SimConfig};
use pagesim_core::report::{OutputFormat, write_report};
use pagesim_core::sim::{AccessOutcome, Phase, Simulator};
use pagesim_core::{SimError, run};
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::{init_tracing, page_file, replayed, report_for, temp_file};

/// Classic reference string used in operating-systems textbooks.
const BELADY: [u64; 12] = [1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5];

#[test]
fn phases_advance_in_order() {
    let mut sim = Simulator::new(2, Algorithm::Lru, PreloadMode::Preload).unwrap();
    assert_eq!(sim.phase(), Phase::Init);
    sim.preload(&[1]).unwrap();
    assert_eq!(sim.phase(), Phase::Preloading);
    let _ = sim.access(1).unwrap();
    assert_eq!(sim.phase(), Phase::Replaying);
    let _ = sim.finish();
    assert_eq!(sim.phase(), Phase::Done);
}

#[test]
fn access_after_done_is_rejected() {
    let mut sim = Simulator::new(1, Algorithm::Fifo, PreloadMode::Demand).unwrap();
    let _ = sim.finish();
    let err = sim.access(1).unwrap_err();
    assert!(matches!(err, SimError::InvalidPhase { phase: "done", .. }));
}

#[test]
fn zero_frames_rejected() {
    assert!(matches!(
        Simulator::new(0, Algorithm::Clock, PreloadMode::Demand),
        Err(SimError::InvalidArgument(_))
    ));
}

#[test]
fn first_touch_faults_then_hits() {
    let mut sim = Simulator::new(2, Algorithm::Fifo, PreloadMode::Demand).unwrap();
    assert_eq!(
        sim.access(7).unwrap(),
        AccessOutcome::Fault { evicted: None }
    );
    assert_eq!(sim.access(7).unwrap(), AccessOutcome::Hit);
    assert_eq!(sim.stats().hits, 1);
    assert_eq!(sim.stats().faults, 1);
}

#[rstest]
#[case(Algorithm::Fifo, 3, 9)]
#[case(Algorithm::Fifo, 4, 10)]
#[case(Algorithm::Lru, 3, 10)]
#[case(Algorithm::Lru, 4, 8)]
#[case(Algorithm::Clock, 3, 9)]
#[case(Algorithm::Clock, 4, 10)]
fn textbook_fault_counts(
    #[case] algorithm: Algorithm,
    #[case] frames: usize,
    #[case] expected_faults: u64,
) {
    let report = report_for(frames, algorithm, &BELADY);
    assert_eq!(report.faults(), expected_faults);
    assert_eq!(report.hits() + report.faults(), BELADY.len() as u64);
    assert_eq!(report.evictions(), expected_faults - frames as u64);
}

#[test]
fn fifo_shows_beladys_anomaly() {
    let three = report_for(3, Algorithm::Fifo, &BELADY);
    let four = report_for(4, Algorithm::Fifo, &BELADY);
    assert!(four.faults() > three.faults());
}

#[test]
fn no_evictions_while_trace_fits() {
    for algorithm in Algorithm::ALL {
        let report = report_for(32, algorithm, &BELADY);
        assert_eq!(report.faults(), 5, "{algorithm}");
        assert_eq!(report.evictions(), 0, "{algorithm}");
    }
}

#[test]
fn single_frame_faults_on_every_change() {
    let report = report_for(1, Algorithm::Lru, &[1, 1, 2, 2, 1, 3]);
    assert_eq!(report.hits(), 2);
    assert_eq!(report.faults(), 4);
    assert_eq!(report.evictions(), 3);
}

#[test]
fn empty_trace_reports_zeroes() {
    let report = report_for(4, Algorithm::Clock, &[]);
    assert_eq!(report.references, 0);
    assert_eq!(report.hits(), 0);
    assert_eq!(report.faults(), 0);
    assert!(report.fault_rate.abs() < f64::EPSILON);
}

#[test]
fn report_echoes_parameters() {
    let report = report_for(16, Algorithm::Clock, &[1, 2, 3]);
    assert_eq!(report.frames, 16);
    assert_eq!(report.algorithm, Algorithm::Clock);
    assert_eq!(report.preload, PreloadMode::Demand);
    assert_eq!(report.references, 3);
}

#[test]
fn policy_stays_consistent_after_every_reference() {
    for algorithm in Algorithm::ALL {
        let mut sim = Simulator::new(3, algorithm, PreloadMode::Demand).unwrap();
        for reference in PageRef::sequence(&BELADY) {
            let _ = sim.access(reference.page).unwrap();
            assert!(sim.is_consistent(), "{algorithm} after {reference}");
        }
    }
}

#[test]
fn run_reads_trace_from_disk() {
    init_tracing();
    let trace = page_file(&BELADY);
    let report = run(&SimConfig::new(trace.path(), 3, Algorithm::Lru)).unwrap();
    assert_eq!(report.faults(), 10);
    assert_eq!(report.hits(), 2);
}

#[test]
fn largest_frame_count_runs_without_reserving_frames() {
    let trace = page_file(&[4, 1, 4, 2]);
    let frames = usize::MAX.to_string();
    let config = SimConfig::from_args("unused", trace.path(), &frames, "LRU", "-").unwrap();
    let report = run(&config).unwrap();
    assert_eq!(report.frames, usize::MAX);
    assert_eq!(report.hits(), 1);
    assert_eq!(report.faults(), 3);
    assert_eq!(report.evictions(), 0);
}

#[test]
fn clock_hand_visible_through_driver() {
    let sim = replayed(3, Algorithm::Clock, &[1, 2, 3, 4]);
    let EvictionPolicy::Clock(clock) = sim.policy() else {
        panic!("expected Clock state, got {:?}", sim.policy());
    };
    // The sweep for 4 took page 1 from slot 0 and stopped on slot 1.
    assert_eq!(clock.hand(), 1);
    assert_eq!(clock.ring().collect::<Vec<_>>(), vec![4, 2, 3]);
    assert_eq!(sim.policy().algorithm(), Algorithm::Clock);
}

#[test]
fn run_fails_fast_on_malformed_trace() {
    let trace = temp_file("1\n2\nthree\n4\n");
    let err = run(&SimConfig::new(trace.path(), 3, Algorithm::Fifo)).unwrap_err();
    assert!(matches!(err, SimError::MalformedTrace { line: 3, .. }));
}

#[test]
fn run_rejects_invalid_config() {
    let trace = page_file(&[1]);
    let err = run(&SimConfig::new(trace.path(), 0, Algorithm::Fifo)).unwrap_err();
    assert!(matches!(err, SimError::InvalidArgument(_)));
}

#[test]
fn repeated_runs_are_byte_identical() {
    let trace = page_file(&[9, 4, 9, 1, 7, 4, 4, 2, 9, 8, 1, 3, 7, 7, 0, 2]);
    let plist = page_file(&[1, 2, 3]);
    for algorithm in Algorithm::ALL {
        for preload in [PreloadMode::Demand, PreloadMode::Preload] {
            let mut config = SimConfig::new(trace.path(), 4, algorithm);
            if preload.is_preload() {
                config = config.with_preload(plist.path());
            }
            let render = |format| {
                let mut out = Vec::new();
                write_report(&mut out, &run(&config).unwrap(), format).unwrap();
                out
            };
            assert_eq!(render(OutputFormat::Text), render(OutputFormat::Text));
            assert_eq!(render(OutputFormat::Json), render(OutputFormat::Json));
        }
    }
}

#[test]
fn independent_simulators_do_not_interact() {
    let mut a = Simulator::new(2, Algorithm::Lru, PreloadMode::Demand).unwrap();
    let mut b = Simulator::new(2, Algorithm::Lru, PreloadMode::Demand).unwrap();
    let _ = a.access(1).unwrap();
    let _ = a.access(2).unwrap();
    assert_eq!(b.access(1).unwrap(), AccessOutcome::Fault { evicted: None });
    assert_eq!(a.stats().faults, 2);
    assert_eq!(b.stats().faults, 1);
}

#[test]
fn parallel_runs_agree_with_sequential() {
    let trace: Vec<u64> = (0..500u64).map(|i| (i * 7 + i / 3) % 11).collect();
    let expected: Vec<_> = Algorithm::ALL
        .iter()
        .map(|&alg| report_for(4, alg, &trace))
        .collect();
    let handles: Vec<_> = Algorithm::ALL
        .iter()
        .map(|&alg| {
            let trace = trace.clone();
            std::thread::spawn(move || replayed(4, alg, &trace).finish())
        })
        .collect();
    let actual: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(actual, expected);
}

//! GShare Predictor Tests.
//!
//! Checks the `(pc ^ ghr) & mask` indexing, that training uses the history
//! from before the shift, and full predict/train sequences against a
//! hand-stepped reference.

use bpsim_core::Outcome::{self, NotTaken, Taken};
use bpsim_core::bru::BranchPredictor;
use bpsim_core::bru::counter::CounterState::{self, StrongNotTaken, WeakNotTaken, WeakTaken};
use bpsim_core::bru::gshare::GSharePredictor;
use bpsim_core::common::ConfigError;
use pretty_assertions::assert_eq;

fn gshare(bits: i32, init: CounterState) -> GSharePredictor {
    GSharePredictor::new(bits, init).unwrap()
}

#[test]
fn allocates_two_to_the_g_counters() {
    let bp = gshare(13, WeakNotTaken);
    assert_eq!(bp.table().len(), 8192);
    assert!(bp.table().iter().all(|&c| c == WeakNotTaken));
    assert_eq!(bp.ghr(), 0);
}

#[test]
fn rejects_non_positive_history() {
    assert!(matches!(
        GSharePredictor::new(0, WeakNotTaken),
        Err(ConfigError::NonPositiveSize { field: "ghistory_bits", value: 0, .. })
    ));
    assert!(GSharePredictor::new(-2, WeakNotTaken).is_err());
}

#[test]
fn initial_prediction_follows_start_state() {
    assert_eq!(gshare(4, WeakNotTaken).predict(0x1000), NotTaken);
    assert_eq!(gshare(4, WeakTaken).predict(0x1000), Taken);
}

/// Train T, T, N at one PC with G = 13 and check each counter the three steps touched.
#[test]
fn round_trip_thirteen_bits() {
    let pc = 0x1234;
    let mut bp = gshare(13, WeakNotTaken);

    // GHR before each step: 0, 1, 3.
    assert_eq!(bp.index(pc), 0x1234);
    bp.train(pc, Taken);
    assert_eq!(bp.ghr(), 0b1);
    assert_eq!(bp.index(pc), 0x1235);
    bp.train(pc, Taken);
    assert_eq!(bp.ghr(), 0b11);
    assert_eq!(bp.index(pc), 0x1237);
    bp.train(pc, NotTaken);
    assert_eq!(bp.ghr(), 0b110);

    let expected_0 = WeakNotTaken.next(Taken);
    let expected_1 = WeakNotTaken.next(Taken);
    let expected_3 = WeakNotTaken.next(NotTaken);
    assert_eq!(bp.table()[0x1234], expected_0);
    assert_eq!(bp.table()[0x1235], expected_1);
    assert_eq!(bp.table()[0x1237], expected_3);

    // Next lookup lands on 0x1234 ^ 0b110, still untouched.
    assert_eq!(bp.index(pc), 0x1232);
    assert_eq!(bp.predict(pc), WeakNotTaken.prediction());

    let touched = bp.table().iter().filter(|&&c| c != WeakNotTaken).count();
    assert_eq!(touched, 3);
}

/// G = 2, all-zero table and GHR, PC = 0: indices visited are 0, 1, 3, 2.
#[test]
fn end_to_end_two_bit_history() {
    let outcomes = [Taken, Taken, NotTaken, Taken];
    let mut bp = gshare(2, StrongNotTaken);
    let mut reference = [StrongNotTaken; 4];
    let mut visited = Vec::new();

    for outcome in outcomes {
        let idx = bp.index(0);
        visited.push(idx);
        assert_eq!(bp.predict(0), reference[idx].prediction());
        reference[idx] = reference[idx].next(outcome);
        bp.train(0, outcome);
        assert_eq!(bp.table(), &reference[..]);
    }

    assert_eq!(visited, vec![0, 1, 3, 2]);
    assert_eq!(bp.ghr(), 0b01);
}

#[test]
fn ghr_stays_within_width() {
    let mut bp = gshare(3, WeakNotTaken);
    for _ in 0..10 {
        bp.train(0xFFFF_FFFF, Taken);
        assert!(bp.ghr() <= 0b111);
    }
    assert_eq!(bp.ghr(), 0b111);
}

#[test]
fn high_pc_bits_alias_into_table() {
    let bp = gshare(4, WeakNotTaken);
    assert_eq!(bp.index(0xABCD_0005), 5);
    assert_eq!(bp.index(0x0000_0005), 5);
}

#[test]
fn learns_always_taken() {
    let mut bp = gshare(6, WeakNotTaken);
    for _ in 0..20 {
        bp.train(0x40, Taken);
    }
    assert_eq!(bp.predict(0x40), Taken);
}

#[test]
fn learns_alternating_pattern() {
    let mut bp = gshare(4, WeakNotTaken);
    let pc = 0x80;
    let pattern = |i: usize| Outcome::from(i % 2 == 0);

    for i in 0..64 {
        bp.train(pc, pattern(i));
    }
    let mut misses = 0;
    for i in 64..96 {
        if bp.predict(pc) != pattern(i) {
            misses += 1;
        }
        bp.train(pc, pattern(i));
    }
    assert_eq!(misses, 0, "history disambiguates an alternating branch");
}

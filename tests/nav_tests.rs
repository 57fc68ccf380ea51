// Host-side tests for scroll-position section resolution.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod nav {
        include!("../src/core/nav.rs");
    }
}

use crate::core::nav::active_section;

const LOOKAHEAD: f64 = 100.0;

#[test]
fn picks_the_last_section_above_the_lookahead_line() {
    let tops = [0.0, 600.0, 1200.0];
    assert_eq!(active_section(0.0, &tops, LOOKAHEAD), Some(0));
    assert_eq!(active_section(250.0, &tops, LOOKAHEAD), Some(0));
    assert_eq!(active_section(499.0, &tops, LOOKAHEAD), Some(0));
    assert_eq!(active_section(500.0, &tops, LOOKAHEAD), Some(1));
    assert_eq!(active_section(1099.0, &tops, LOOKAHEAD), Some(1));
    assert_eq!(active_section(1100.0, &tops, LOOKAHEAD), Some(2));
    assert_eq!(active_section(99_999.0, &tops, LOOKAHEAD), Some(2));
}

#[test]
fn no_section_qualifies_above_the_first() {
    // First section starts below the fold: nothing is active until the
    // scroll position reaches its lookahead line.
    let tops = [200.0, 900.0];
    assert_eq!(active_section(0.0, &tops, LOOKAHEAD), None);
    assert_eq!(active_section(99.0, &tops, LOOKAHEAD), None);
    assert_eq!(active_section(100.0, &tops, LOOKAHEAD), Some(0));
}

#[test]
fn empty_section_list_yields_none() {
    assert_eq!(active_section(500.0, &[], LOOKAHEAD), None);
}

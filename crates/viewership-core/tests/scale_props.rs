// File: crates/viewership-core/tests/scale_props.rs
// Purpose: Property tests for range finding and linear scales.

use proptest::prelude::*;
use viewership_core::{min_max, LinearScale};

proptest! {
    #[test]
    fn min_max_matches_fold(values in prop::collection::vec(-1e6f64..1e6, 1..64)) {
        let (lo, hi) = min_max("v", values.iter().copied()).unwrap();
        let want_lo = values.iter().copied().fold(f64::INFINITY, f64::min);
        let want_hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        prop_assert_eq!(lo, want_lo);
        prop_assert_eq!(hi, want_hi);
    }

    #[test]
    fn vertical_scale_is_decreasing(
        view_min in 0.0f64..100.0,
        spread in 0.0f64..100.0,
        a in 0.0f64..1.0,
        b in 0.0f64..1.0,
    ) {
        let view_max = view_min + spread;
        let s = LinearScale::new((view_max + 5.0, view_min - 5.0), (50.0, 450.0));
        let (lo, hi) = (view_min - 5.0, view_max + 5.0);
        let va = lo + a * (hi - lo);
        let vb = lo + b * (hi - lo);
        if va < vb {
            prop_assert!(s.map(va) >= s.map(vb));
        }
        prop_assert!((s.map(view_max + 5.0) - 50.0).abs() < 1e-9);
        prop_assert!((s.map(view_min - 5.0) - 450.0).abs() < 1e-9);
    }

    #[test]
    fn horizontal_scale_is_increasing_and_invertible(
        year_min in 1950i32..2030,
        seasons in 0i32..40,
        pick in 0.0f64..1.0,
    ) {
        let (d0, d1) = (year_min as f64 - 1.0, (year_min + seasons) as f64 + 1.0);
        let s = LinearScale::new((d0, d1), (50.0, 750.0));
        let v = d0 + pick * (d1 - d0);
        let px = s.map(v);
        prop_assert!((50.0 - 1e-9..=750.0 + 1e-9).contains(&px));
        prop_assert!(s.map(v + 0.5) > px);
        prop_assert!((s.invert(px) - v).abs() < 1e-6);
    }

    #[test]
    fn ticks_stay_inside_domain(lo in -1e4f64..1e4, span in 0.001f64..1e4, count in 5usize..20) {
        let s = LinearScale::new((lo, lo + span), (0.0, 100.0));
        let ticks = s.ticks(count);
        prop_assert!(!ticks.is_empty());
        for w in ticks.windows(2) {
            prop_assert!(w[0] < w[1]);
        }
        for t in ticks {
            prop_assert!(t >= lo - 1e-9 && t <= lo + span + 1e-9);
        }
    }
}

use proptest::prelude::*;

use inertia_core::{AgentParameters, ContinuousParameters};
use inertia_score::{compute_inertia_score, weighted};

fn arb_params() -> impl Strategy<Value = AgentParameters> {
    let levels = prop::array::uniform7(0i32..=10);
    let visibility = prop::option::of(0i32..=10);
    (levels, visibility).prop_map(|(l, vis)| {
        let builder = AgentParameters::builder()
            .procrastination(l[0])
            .pessimism(l[1])
            .loss_aversion(l[2])
            .scarcity(l[3])
            .avoidance(l[4])
            .pressure(l[5])
            .invisibilisation(l[6]);
        match vis {
            Some(v) => builder.visibility_of_backstage(v),
            None => builder,
        }
        .build()
        .unwrap()
    })
}

fn arb_continuous() -> impl Strategy<Value = ContinuousParameters> {
    prop::array::uniform6(0.0f64..=1.0).prop_map(|v| {
        ContinuousParameters::builder()
            .pessimism(v[0])
            .procrastination(v[1])
            .loss_aversion(v[2])
            .scarcity(v[3])
            .pressure(v[4])
            .invisibilisation(v[5])
            .build()
            .unwrap()
    })
}

proptest! {
    #[test]
    fn corrected_total_is_raw_times_amplifier(params in arb_params()) {
        let s = compute_inertia_score(&params);
        prop_assert_eq!(s.corrected_total, s.raw_total * s.visibility_amplifier);
        prop_assert_eq!(s.raw_total, s.cognitive + s.circumstantial + s.structural);
    }

    #[test]
    fn sub_scores_stay_in_range(params in arb_params()) {
        let s = compute_inertia_score(&params);
        prop_assert!((0.0..=100.0).contains(&s.cognitive));
        prop_assert!((0.0..=100.0).contains(&s.circumstantial));
        prop_assert!((0.0..=100.0).contains(&s.structural));
        prop_assert!((1.0..=1.5).contains(&s.visibility_amplifier));
        prop_assert!(s.corrected_total >= s.raw_total);
        prop_assert!(s.corrected_total <= 450.0);
    }

    #[test]
    fn scaled_scoring_is_deterministic(params in arb_params()) {
        let a = compute_inertia_score(&params);
        let b = compute_inertia_score(&params);
        prop_assert_eq!(a.corrected_total.to_bits(), b.corrected_total.to_bits());
    }

    #[test]
    fn weighted_score_stays_in_range(params in arb_continuous()) {
        let s = weighted::compute(&params);
        prop_assert!(s.inertia_score >= 0.0);
        prop_assert!(s.inertia_score <= 100.0 + 1e-9);
    }
}

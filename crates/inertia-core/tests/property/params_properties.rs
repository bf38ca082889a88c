use proptest::prelude::*;

use inertia_core::errors::InertiaError;
use inertia_core::{AgentParameters, ContinuousParameters};

proptest! {
    #[test]
    fn in_range_levels_always_build(
        levels in prop::array::uniform7(0i32..=10),
        vis in prop::option::of(0i32..=10),
    ) {
        let builder = AgentParameters::builder()
            .procrastination(levels[0])
            .pessimism(levels[1])
            .loss_aversion(levels[2])
            .scarcity(levels[3])
            .avoidance(levels[4])
            .pressure(levels[5])
            .invisibilisation(levels[6]);
        let builder = match vis {
            Some(v) => builder.visibility_of_backstage(v),
            None => builder,
        };
        let params = builder.build().unwrap();
        prop_assert_eq!(i32::from(params.pessimism()), levels[1]);
        prop_assert_eq!(params.visibility_of_backstage().map(i32::from), vis);
    }

    #[test]
    fn out_of_range_level_is_rejected(level in prop_oneof![-1000i32..0, 11i32..1000]) {
        let err = AgentParameters::builder().scarcity(level).build().unwrap_err();
        let is_scarcity = matches!(err, InertiaError::InvalidParameter { field: "scarcity", .. });
        prop_assert!(is_scarcity);
    }

    #[test]
    fn continuous_mapping_stays_in_unit_range(level in 0i32..=10) {
        let params = AgentParameters::uniform(level).unwrap();
        let c = params.to_continuous();
        let values = [
            c.pessimism(),
            c.procrastination(),
            c.loss_aversion(),
            c.scarcity(),
            c.pressure(),
            c.invisibilisation(),
        ];
        for v in values {
            prop_assert!((0.0..=1.0).contains(&v));
        }
    }

    #[test]
    fn continuous_out_of_range_is_rejected(
        value in prop_oneof![-10.0f64..-1e-6, 1.000_001f64..10.0],
    ) {
        prop_assert!(ContinuousParameters::builder().pressure(value).build().is_err());
    }
}

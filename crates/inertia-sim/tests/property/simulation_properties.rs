use inertia_core::models::{MonthEvent, Outcome};
use inertia_core::AgentParameters;
use inertia_sim::simulate_seeded;
use proptest::prelude::*;

fn arb_params() -> impl Strategy<Value = AgentParameters> {
    (
        prop::array::uniform7(0i32..=10),
        prop::option::of(0i32..=10),
    )
        .prop_map(|(levels, visibility)| {
            let mut builder = AgentParameters::builder()
                .procrastination(levels[0])
                .pessimism(levels[1])
                .loss_aversion(levels[2])
                .scarcity(levels[3])
                .avoidance(levels[4])
                .pressure(levels[5])
                .invisibilisation(levels[6]);
            if let Some(v) = visibility {
                builder = builder.visibility_of_backstage(v);
            }
            builder.build().unwrap()
        })
}

proptest! {
    #[test]
    fn runs_are_bounded_and_aligned(params in arb_params(), seed in any::<u64>()) {
        let result = simulate_seeded(&params, seed);
        prop_assert!(!result.entries.is_empty());
        prop_assert!(result.months_elapsed() <= 12);
        prop_assert_eq!(result.steps.len(), result.entries.len());
        prop_assert_eq!(result.progress_history.len(), result.entries.len());
        prop_assert!(result.outcome.is_terminal());
        for (i, entry) in result.entries.iter().enumerate() {
            prop_assert_eq!(entry.month as usize, i + 1);
            prop_assert_eq!(entry.progress, result.progress_history[i]);
        }
    }

    #[test]
    fn outcome_matches_final_progress(params in arb_params(), seed in any::<u64>()) {
        let result = simulate_seeded(&params, seed);
        let last = result.entries.last().unwrap();
        let final_progress = result.final_progress();

        prop_assert_eq!(result.outcome == Outcome::Success, final_progress >= 8);
        match result.outcome {
            Outcome::Success => prop_assert!(last.event.is_action()),
            Outcome::Failure => {
                prop_assert!(final_progress <= -5);
                prop_assert!(last.event.is_action());
            }
            Outcome::IndefinitePostponement => prop_assert_eq!(result.months_elapsed(), 12),
            Outcome::InDecision => prop_assert!(false, "run ended undecided"),
        }
        if result.months_elapsed() < 12 {
            prop_assert!(matches!(result.outcome, Outcome::Success | Outcome::Failure));
        }
    }

    #[test]
    fn progress_moves_only_by_event_deltas(params in arb_params(), seed in any::<u64>()) {
        let result = simulate_seeded(&params, seed);
        let mut previous = 0;
        for entry in &result.entries {
            let expected = entry.event.progress_delta() - i32::from(entry.post_action_doubt);
            prop_assert_eq!(entry.progress - previous, expected);
            if entry.post_action_doubt {
                prop_assert!(entry.event.is_action());
            }
            if params.invisibilisation() <= 8 {
                prop_assert_ne!(entry.event, MonthEvent::SelfErasure);
            }
            previous = entry.progress;
        }
    }

    #[test]
    fn seeded_runs_are_reproducible(params in arb_params(), seed in any::<u64>()) {
        prop_assert_eq!(
            simulate_seeded(&params, seed),
            simulate_seeded(&params, seed)
        );
    }
}

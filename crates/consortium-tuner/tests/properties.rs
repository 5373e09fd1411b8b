use consortium_common::{KpiSnapshot, TuningState};
use consortium_tuner::{ParameterTuner, TunerConfig};
use proptest::prelude::*;

fn any_ratio() -> impl Strategy<Value = f64> {
    prop_oneof![
        8 => -1.0f64..2.0,
        1 => Just(f64::NAN),
        1 => Just(f64::INFINITY),
        1 => Just(f64::NEG_INFINITY),
    ]
}

fn kpi_strategy() -> impl Strategy<Value = KpiSnapshot> {
    (
        any_ratio(),
        any_ratio(),
        any_ratio(),
        0u64..50,
        any_ratio(),
        any_ratio(),
        prop::option::of(any_ratio()),
    )
        .prop_map(|(entropy, v, v_prev, events, mint, burn, corr)| KpiSnapshot {
            entropy_ratio: entropy,
            coin_velocity: v,
            coin_velocity_prev: v_prev,
            events_count: events,
            indirect_mint_ratio: mint,
            indirect_burn_ratio: burn,
            corr_team_to_net: corr,
        })
}

proptest! {
    #[test]
    fn adjusted_values_stay_in_bounds(
        kpi in kpi_strategy(),
        alpha in -5.0f64..5.0,
        lambda in -5.0f64..5.0,
        gamma in -5.0f64..5.0,
    ) {
        prop_assume!(kpi.events_count >= 5);
        let config = TunerConfig::default();
        let tuner = ParameterTuner::new(config.clone()).unwrap();
        let next = tuner.tune(&TuningState::new(alpha, lambda, gamma), &kpi).state;

        prop_assert!(next.alpha >= config.alpha.min && next.alpha <= config.alpha.max);
        prop_assert!(next.lambda >= config.lambda.min && next.lambda <= config.lambda.max);
        prop_assert!(next.gamma >= config.gamma.min && next.gamma <= config.gamma.max);
    }

    #[test]
    fn in_bounds_state_stays_in_bounds(
        kpi in kpi_strategy(),
        alpha in 0.01f64..=0.50,
        lambda in 0.0f64..=0.20,
        gamma in 0.0f64..=0.60,
    ) {
        let config = TunerConfig::default();
        let tuner = ParameterTuner::new(config.clone()).unwrap();
        let next = tuner.tune(&TuningState::new(alpha, lambda, gamma), &kpi).state;

        prop_assert!(next.alpha >= config.alpha.min && next.alpha <= config.alpha.max);
        prop_assert!(next.lambda >= config.lambda.min && next.lambda <= config.lambda.max);
        prop_assert!(next.gamma >= config.gamma.min && next.gamma <= config.gamma.max);
    }

    #[test]
    fn low_data_returns_identical_bits(
        kpi in kpi_strategy(),
        alpha in any::<f64>(),
        lambda in any::<f64>(),
        gamma in any::<f64>(),
    ) {
        let kpi = KpiSnapshot { events_count: kpi.events_count % 5, ..kpi };
        let prev = TuningState::new(alpha, lambda, gamma);
        let decision = ParameterTuner::default().tune(&prev, &kpi);

        prop_assert!(decision.is_frozen());
        prop_assert_eq!(decision.state.alpha.to_bits(), alpha.to_bits());
        prop_assert_eq!(decision.state.lambda.to_bits(), lambda.to_bits());
        prop_assert_eq!(decision.state.gamma.to_bits(), gamma.to_bits());
        prop_assert_eq!(decision.reason.to_string(), "FROZEN_LOW_DATA");
    }

    #[test]
    fn reason_always_has_four_codes(kpi in kpi_strategy()) {
        prop_assume!(kpi.events_count >= 5);
        let reason = ParameterTuner::default()
            .tune(&TuningState::default(), &kpi)
            .reason
            .to_string();
        let codes: Vec<&str> = reason.split('|').collect();
        prop_assert_eq!(codes.len(), 4);
        prop_assert!(codes[0].starts_with("ALPHA_"));
        prop_assert!(codes[1].starts_with("LAMBDA_"));
        prop_assert!(codes[2].starts_with("GAMMA_"));
        prop_assert!(codes[3] == "STABILIZE" || codes[3] == "NO_STABILIZE");
    }
}

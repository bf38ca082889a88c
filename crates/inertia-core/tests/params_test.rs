use inertia_core::errors::InertiaError;
use inertia_core::{AgentParameters, ContinuousParameters};

#[test]
fn builder_defaults_every_bias_to_five() {
    let params = AgentParameters::builder().build().unwrap();
    assert_eq!(params.procrastination(), 5);
    assert_eq!(params.pessimism(), 5);
    assert_eq!(params.loss_aversion(), 5);
    assert_eq!(params.scarcity(), 5);
    assert_eq!(params.avoidance(), 5);
    assert_eq!(params.pressure(), 5);
    assert_eq!(params.invisibilisation(), 5);
    assert_eq!(params.visibility_of_backstage(), None);
    assert_eq!(params, AgentParameters::default());
}

#[test]
fn builder_accepts_bounds() {
    let params = AgentParameters::builder()
        .procrastination(0)
        .pressure(10)
        .visibility_of_backstage(0)
        .build()
        .unwrap();
    assert_eq!(params.procrastination(), 0);
    assert_eq!(params.pressure(), 10);
    assert_eq!(params.visibility_of_backstage(), Some(0));
}

#[test]
fn out_of_range_field_is_named_in_error() {
    let err = AgentParameters::builder().scarcity(11).build().unwrap_err();
    match err {
        InertiaError::InvalidParameter {
            field,
            value,
            min,
            max,
        } => {
            assert_eq!(field, "scarcity");
            assert_eq!(value, 11.0);
            assert_eq!(min, 0.0);
            assert_eq!(max, 10.0);
        }
        other => panic!("expected InvalidParameter, got {other:?}"),
    }
}

#[test]
fn negative_values_are_rejected() {
    let err = AgentParameters::builder().loss_aversion(-1).build().unwrap_err();
    assert!(err.to_string().contains("loss_aversion"));
}

#[test]
fn visibility_is_validated_when_present() {
    let err = AgentParameters::builder()
        .visibility_of_backstage(12)
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        InertiaError::InvalidParameter { field: "visibility_of_backstage", .. }
    ));
}

#[test]
fn uniform_sets_every_bias() {
    let params = AgentParameters::uniform(10).unwrap();
    assert_eq!(params.procrastination(), 10);
    assert_eq!(params.invisibilisation(), 10);
    assert!(AgentParameters::uniform(11).is_err());
}

#[test]
fn deserialize_validates_ranges() {
    let ok: AgentParameters = serde_json::from_str(
        r#"{"procrastination":1,"pessimism":2,"loss_aversion":3,"scarcity":4,
            "avoidance":5,"pressure":6,"invisibilisation":7}"#,
    )
    .unwrap();
    assert_eq!(ok.invisibilisation(), 7);
    assert_eq!(ok.visibility_of_backstage(), None);

    let bad = serde_json::from_str::<AgentParameters>(
        r#"{"procrastination":1,"pessimism":2,"loss_aversion":3,"scarcity":4,
            "avoidance":5,"pressure":60,"invisibilisation":7}"#,
    );
    let msg = bad.unwrap_err().to_string();
    assert!(msg.contains("pressure"), "unexpected message: {msg}");
}

#[test]
fn deserialize_requires_all_seven_biases() {
    let missing = serde_json::from_str::<AgentParameters>(
        r#"{"procrastination":1,"pessimism":2,"loss_aversion":3}"#,
    );
    assert!(missing.is_err());
}

#[test]
fn to_continuous_scales_by_ten() {
    let params = AgentParameters::builder()
        .pessimism(10)
        .procrastination(3)
        .loss_aversion(0)
        .scarcity(7)
        .pressure(5)
        .invisibilisation(9)
        .build()
        .unwrap();
    let c = params.to_continuous();
    assert_eq!(c.pessimism(), 1.0);
    assert!((c.procrastination() - 0.3).abs() < 1e-12);
    assert_eq!(c.loss_aversion(), 0.0);
    assert!((c.scarcity() - 0.7).abs() < 1e-12);
    assert_eq!(c.pressure(), 0.5);
    assert!((c.invisibilisation() - 0.9).abs() < 1e-12);
}

#[test]
fn avoidance_is_dropped_on_the_continuous_scale() {
    let low = AgentParameters::builder().avoidance(0).build().unwrap();
    let high = AgentParameters::builder().avoidance(10).build().unwrap();
    assert_eq!(low.to_continuous(), high.to_continuous());
}

#[test]
fn continuous_builder_rejects_out_of_range_and_nan() {
    let err = ContinuousParameters::builder().pressure(1.2).build().unwrap_err();
    assert!(matches!(
        err,
        InertiaError::InvalidParameter { field: "pressure", .. }
    ));

    let err = ContinuousParameters::builder()
        .invisibilisation(f64::NAN)
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        InertiaError::InvalidParameter { field: "invisibilisation", .. }
    ));
}

#[test]
fn continuous_builder_defaults_to_half() {
    let c = ContinuousParameters::builder().build().unwrap();
    assert_eq!(c.pessimism(), 0.5);
    assert_eq!(c.scarcity(), 0.5);
}

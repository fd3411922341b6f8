//! Integration test: loop parameters embedded in a host configuration document.

use serde::Deserialize;
use tl_controls::{
    ControlError, FraConfig, FraGenerator, IntegrationMethod, Integrator, LimitedPi, PiGains,
    SampleConfig, StairsConfig,
};

#[derive(Debug, Deserialize)]
struct LoopParameters {
    sample: SampleConfig,
    gains: PiGains,
    limit: f32,
    integrator: IntegrationMethod,
    fra: FraConfig,
    stairs: StairsConfig,
}

const DOCUMENT: &str = r#"{
    "sample": { "ts": 0.001 },
    "gains": { "kp": 0.8, "ki": 12.0 },
    "limit": 3.0,
    "integrator": "trapezoidal",
    "fra": {
        "fmin": 10.0,
        "fmax": 200.0,
        "fstep": 10.0,
        "cycles": 20.0,
        "amplitude": 0.2,
        "bias": 0.0,
        "start_time": 1.0
    },
    "stairs": { "tini": 0.5, "ystp": 0.1, "tstp": 0.25, "nstp": 8.0 }
}"#;

#[test]
fn parameters_load_and_validate() {
    let params: LoopParameters = serde_json::from_str(DOCUMENT).unwrap();

    let sample = SampleConfig::new(params.sample.ts).unwrap();
    params.gains.validate().unwrap();
    params.fra.validate().unwrap();
    params.stairs.validate().unwrap();

    assert_eq!(params.integrator, IntegrationMethod::Trapezoidal);
    assert!((sample.frequency() - 1000.0).abs() < 1e-2);

    let mut integ = Integrator::new(sample.ts, params.integrator);
    assert!((integ.step(2.0) - 0.001).abs() < 1e-7);

    let mut pi = LimitedPi::new(sample.ts, params.limit).unwrap();
    assert!(pi.step(100.0, params.gains).abs() <= 3.0);

    let mut fra = FraGenerator::new(params.fra);
    assert_eq!(fra.step(0.0).signal, 0.0);
    assert_eq!(params.stairs.sample(0.8), 0.1);
}

#[test]
fn invalid_parameters_are_reported() {
    let mut params: LoopParameters = serde_json::from_str(DOCUMENT).unwrap();
    params.fra.fmin = -1.0;
    assert_eq!(
        params.fra.validate(),
        Err(ControlError::InvalidArg {
            what: "fmin must be positive"
        })
    );

    let err = SampleConfig::new(0.0).unwrap_err();
    assert_eq!(err.to_string(), "Invalid argument: ts must be positive");
}

#[test]
fn unknown_integrator_name_is_rejected_by_serde() {
    let doc = DOCUMENT.replace("\"trapezoidal\"", "\"runge_kutta\"");
    assert!(serde_json::from_str::<LoopParameters>(&doc).is_err());
}

// tests/integration_test.rs
use fd_boundary::boundary::{lower_boundary, terminal_condition, upper_boundary, PARALLEL_THRESHOLD};
use fd_boundary::{BoundaryConditions, BoundaryPayoff, ContractParams, OptionKind, VanillaOption};
use ndarray::Array1;
use std::sync::Arc;
use std::thread;

#[test]
fn test_solver_setup_from_config() {
    // contract as a solver application would load it from its own config
    let json = r#"{ "k": 100.0, "t": 1.0, "l": 300.0, "r": 0.05, "sigma": 0.2 }"#;
    let params: ContractParams = serde_json::from_str(json).expect("Valid contract json");
    assert!(params.validate().is_ok());
    assert_eq!(params, ContractParams::default());

    let kind: OptionKind = serde_json::from_str("\"call\"").expect("Valid kind json");
    let option = VanillaOption::from_params(kind, params);
    assert_eq!(option.kind(), OptionKind::Call);

    let m = 300;
    let n = 100;
    let spots = Array1::linspace(0.0, params.truncation(), m + 1);
    let times = Array1::linspace(0.0, params.maturity(), n + 1);

    let bc = BoundaryConditions::evaluate(&option, spots.view(), times.view());

    assert_eq!(bc.lower.len(), n + 1);
    assert_eq!(bc.upper.len(), n + 1);
    assert_eq!(bc.terminal.len(), m + 1);

    for (j, &t) in times.iter().enumerate() {
        assert_eq!(bc.lower[j], option.payoff(0.0, t));
        assert_eq!(bc.upper[j], option.payoff(params.truncation(), t));
    }
    for (i, &s) in spots.iter().enumerate() {
        assert_eq!(bc.terminal[i], option.payoff(s, params.maturity()));
    }

    // discounted strike grows towards K as t approaches T
    assert!(bc.upper.windows(2).into_iter().all(|w| w[0] >= w[1]));
}

#[test]
fn test_large_grid_put() {
    let put = VanillaOption::make(OptionKind::Put, 100.0, 1.0, 300.0, 0.05, 0.2);
    let m = PARALLEL_THRESHOLD * 4;
    let spots = Array1::from_iter((0..=m).map(|i| 300.0 * i as f64 / m as f64));
    let times = Array1::from_iter((0..=m).map(|j| j as f64 / m as f64));

    let terminal = terminal_condition(&put, spots.view());
    let lower = lower_boundary(&put, times.view());
    let upper = upper_boundary(&put, times.view());

    assert_eq!(terminal[0], 100.0);
    assert_eq!(terminal[m], 0.0);
    for (i, &s) in spots.iter().enumerate().skip(1).take(m - 1) {
        assert_eq!(terminal[i], (100.0 - s).max(0.0));
    }
    assert_eq!(lower[m], 100.0);
    assert!(upper.iter().all(|&v| v == 0.0));
}

#[test]
fn test_shared_across_threads() {
    let option = Arc::new(VanillaOption::make(OptionKind::Call, 100.0, 1.0, 300.0, 0.05, 0.2));
    let expected = option.payoff(300.0, 0.5);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let option = Arc::clone(&option);
            thread::spawn(move || {
                (0..1000)
                    .map(|_| option.payoff(300.0, 0.5))
                    .all(|v| v == expected)
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().expect("thread panicked"));
    }
}

#[test]
fn test_params_serialize_round_trip_through_config() {
    let params = ContractParams::new(95.0, 0.5, 250.0, 0.03, 0.25);
    let json = serde_json::to_string(&params).expect("Serializable params");
    let back: ContractParams = serde_json::from_str(&json).expect("Valid contract json");
    assert_eq!(back, params);
    assert!(serde_json::from_str::<OptionKind>("\"swaption\"").is_err());
}

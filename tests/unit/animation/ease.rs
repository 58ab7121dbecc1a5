use super::*;

#[test]
fn power_curve_fixed_points() {
    for gamma in [0.5, 1.0, 2.0, 3.0, 10.0] {
        assert_eq!(ease_in_out_pow(0.0, gamma), 0.0);
        assert_eq!(ease_in_out_pow(0.5, gamma), 0.5);
        assert_eq!(ease_in_out_pow(1.0, gamma), 1.0);
    }
}

#[test]
fn power_curve_is_monotonic_for_gamma_ge_one() {
    for gamma in [1.0, 2.0, 3.0, 8.0] {
        let mut prev = 0.0;
        for i in 0..=1000 {
            let v = ease_in_out_pow(i as f64 / 1000.0, gamma);
            assert!(v >= prev, "gamma {gamma} decreased at step {i}");
            prev = v;
        }
    }
}

#[test]
fn power_curve_is_symmetric() {
    for gamma in [1.0, 2.5, 3.0, 7.0] {
        for i in 0..=100 {
            let p = i as f64 / 100.0;
            let sum = ease_in_out_pow(p, gamma) + ease_in_out_pow(1.0 - p, gamma);
            assert!((sum - 1.0).abs() < 1e-12, "gamma {gamma}, p {p}");
        }
    }
}

#[test]
fn power_curve_clamps_input() {
    assert_eq!(ease_in_out_pow(-1.0, 3.0), 0.0);
    assert_eq!(ease_in_out_pow(2.0, 3.0), 1.0);
}

#[test]
fn gamma_three_matches_cubic_in_out() {
    for i in 0..=100 {
        let t = i as f64 / 100.0;
        let pow = Ease::InOutPow { gamma: 3.0 }.apply(t);
        let cubic = Ease::InOutCubic.apply(t);
        assert!((pow - cubic).abs() < 1e-12, "diverged at t {t}");
    }
}

#[test]
fn linear_is_identity_on_unit_interval() {
    assert_eq!(Ease::Linear.apply(0.25), 0.25);
    assert_eq!(Ease::Linear.apply(-3.0), 0.0);
    assert_eq!(Ease::Linear.apply(9.0), 1.0);
}

#[test]
fn validate_rejects_bad_gamma() {
    assert!(Ease::InOutPow { gamma: 3.0 }.validate().is_ok());
    assert!(Ease::Linear.validate().is_ok());
    assert!(Ease::InOutPow { gamma: 0.0 }.validate().is_err());
    assert!(Ease::InOutPow { gamma: -2.0 }.validate().is_err());
    assert!(Ease::InOutPow { gamma: f64::NAN }.validate().is_err());
    assert!(
        Ease::InOutPow {
            gamma: f64::INFINITY
        }
        .validate()
        .is_err()
    );
}

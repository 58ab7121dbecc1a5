use super::*;

#[test]
fn default_scene_is_valid() {
    let scene = Scene::default();
    assert!(scene.validate().is_ok());
    assert_eq!(scene.period_ms, 2500.0);
    assert_eq!(scene.figure.quadrant_rgba8, [0, 0, 0, 255]);
    assert_eq!(scene.figure.square_rgba8, [255, 255, 255, 255]);
    assert_eq!(scene.background_rgba8, [255, 255, 255, 255]);
    assert_eq!(scene.figure.ease, Ease::InOutPow { gamma: 3.0 });
}

#[test]
fn empty_json_yields_default_scene() {
    let scene = Scene::from_json_str("{}").unwrap();
    assert_eq!(scene, Scene::default());
}

#[test]
fn partial_json_fills_remaining_defaults() {
    let scene = Scene::from_json_str(
        r#"{
            "canvas": { "width": 64, "height": 48 },
            "figure": { "inset_px": 4.0 }
        }"#,
    )
    .unwrap();
    assert_eq!(
        scene.canvas,
        Canvas {
            width: 64,
            height: 48
        }
    );
    assert_eq!(scene.figure.inset_px, 4.0);
    assert_eq!(scene.figure.ease, Ease::InOutPow { gamma: 3.0 });
    assert_eq!(scene.period_ms, 2500.0);
}

#[test]
fn json_round_trip_preserves_scene() {
    let mut scene = Scene::default();
    scene.canvas = Canvas {
        width: 320,
        height: 200,
    };
    scene.figure.inset_px = 16.0;
    scene.period_ms = 1000.0;

    let text = serde_json::to_string(&scene).unwrap();
    let back = Scene::from_json_str(&text).unwrap();
    assert_eq!(back, scene);
}

#[test]
fn zero_canvas_is_valid_but_degenerate() {
    let mut scene = Scene::default();
    scene.canvas = Canvas {
        width: 0,
        height: 0,
    };
    assert!(scene.validate().is_ok());
}

#[test]
fn validate_rejects_bad_parameters() {
    let mut scene = Scene::default();
    scene.figure.inset_px = -1.0;
    assert!(scene.validate().is_err());

    let mut scene = Scene::default();
    scene.figure.inset_px = f64::NAN;
    assert!(scene.validate().is_err());

    let mut scene = Scene::default();
    scene.period_ms = 0.0;
    assert!(scene.validate().is_err());

    let mut scene = Scene::default();
    scene.figure.ease = Ease::InOutPow { gamma: 0.0 };
    assert!(scene.validate().is_err());
}

#[test]
fn invalid_json_is_a_serde_error() {
    let err = Scene::from_json_str("not json").unwrap_err();
    assert!(matches!(err, QuadmorphError::Serde(_)));
}

#[test]
fn bad_period_in_json_fails_validation() {
    let err = Scene::from_json_str(r#"{ "period_ms": -1.0 }"#).unwrap_err();
    assert!(matches!(err, QuadmorphError::Animation(_)));
}

#[test]
fn timeline_uses_scene_period() {
    let mut scene = Scene::default();
    scene.period_ms = 1000.0;
    let tl = scene.timeline().unwrap();
    assert_eq!(tl.period_ms(), 1000.0);
}

use super::*;
use crate::{
    composition::model::Scene,
    eval::frame::Evaluator,
    foundation::core::{Affine, Canvas, Point, Vec2},
};

fn rect(x: f64) -> DrawOp {
    DrawOp::Rect {
        top_left: Point::new(x, 0.0),
        size: Vec2::new(1.0, 1.0),
        transform: Affine::IDENTITY,
        color: Rgba8Premul::from_straight_rgba(255, 255, 255, 255),
    }
}

fn plan_with(ops: Vec<DrawOp>, background: Rgba8Premul) -> FramePlan {
    FramePlan {
        canvas: Canvas {
            width: 8,
            height: 8,
        },
        background,
        ops,
    }
}

#[test]
fn identical_evaluations_fingerprint_equal() {
    let scene = Scene::default();
    let a = fingerprint_plan(&Evaluator::eval_frame(&scene, 0.3));
    let b = fingerprint_plan(&Evaluator::eval_frame(&scene, 0.3));
    assert_eq!(a, b);
}

#[test]
fn phases_fingerprint_differently() {
    let scene = Scene::default();
    let circles = fingerprint_plan(&Evaluator::eval_frame(&scene, 0.25));
    let square = fingerprint_plan(&Evaluator::eval_frame(&scene, 0.75));
    assert_ne!(circles, square);
}

#[test]
fn op_order_is_significant() {
    let white = Rgba8Premul::from_straight_rgba(255, 255, 255, 255);
    let ab = fingerprint_plan(&plan_with(vec![rect(0.0), rect(1.0)], white));
    let ba = fingerprint_plan(&plan_with(vec![rect(1.0), rect(0.0)], white));
    assert_ne!(ab, ba);
}

#[test]
fn background_is_part_of_the_fingerprint() {
    let opaque = fingerprint_plan(&plan_with(
        vec![rect(0.0)],
        Rgba8Premul::from_straight_rgba(255, 255, 255, 255),
    ));
    let clear = fingerprint_plan(&plan_with(vec![rect(0.0)], Rgba8Premul::transparent()));
    assert_ne!(opaque, clear);
}

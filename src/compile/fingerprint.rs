use crate::{
    compile::plan::{DrawOp, FramePlan},
    foundation::core::Rgba8Premul,
    foundation::math::Fnv1a64,
};

/// Order-sensitive digest of a [`FramePlan`].
///
/// Two plans fingerprint equal iff every field of every op matches bit for
/// bit, making this suitable for golden/snapshot comparisons without
/// rasterizing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameFingerprint {
    /// High half (FNV-1a 64, default offset basis).
    pub hi: u64,
    /// Low half (FNV-1a 64, alternate seed).
    pub lo: u64,
}

/// Fingerprint a frame plan.
pub fn fingerprint_plan(plan: &FramePlan) -> FrameFingerprint {
    let mut a = Fnv1a64::new(0xcbf29ce484222325);
    let mut b = Fnv1a64::new(0x9ae16a3b2f90404f);

    write_u64_pair(&mut a, &mut b, u64::from(plan.canvas.width));
    write_u64_pair(&mut a, &mut b, u64::from(plan.canvas.height));
    write_color_pair(&mut a, &mut b, plan.background);

    write_u64_pair(&mut a, &mut b, plan.ops.len() as u64);
    for op in &plan.ops {
        match *op {
            DrawOp::Arc {
                top_left,
                size,
                start_angle_deg,
                sweep_angle_deg,
                use_center,
                transform,
                color,
            } => {
                write_u8_pair(&mut a, &mut b, 0);
                write_f64_pair(&mut a, &mut b, top_left.x);
                write_f64_pair(&mut a, &mut b, top_left.y);
                write_f64_pair(&mut a, &mut b, size);
                write_f64_pair(&mut a, &mut b, start_angle_deg);
                write_f64_pair(&mut a, &mut b, sweep_angle_deg);
                write_u8_pair(&mut a, &mut b, u8::from(use_center));
                for c in transform.as_coeffs() {
                    write_f64_pair(&mut a, &mut b, c);
                }
                write_color_pair(&mut a, &mut b, color);
            }
            DrawOp::Rect {
                top_left,
                size,
                transform,
                color,
            } => {
                write_u8_pair(&mut a, &mut b, 1);
                write_f64_pair(&mut a, &mut b, top_left.x);
                write_f64_pair(&mut a, &mut b, top_left.y);
                write_f64_pair(&mut a, &mut b, size.x);
                write_f64_pair(&mut a, &mut b, size.y);
                for c in transform.as_coeffs() {
                    write_f64_pair(&mut a, &mut b, c);
                }
                write_color_pair(&mut a, &mut b, color);
            }
        }
    }

    FrameFingerprint {
        hi: a.finish(),
        lo: b.finish(),
    }
}

fn write_u8_pair(a: &mut Fnv1a64, b: &mut Fnv1a64, v: u8) {
    a.write_u8(v);
    b.write_u8(v);
}

fn write_u64_pair(a: &mut Fnv1a64, b: &mut Fnv1a64, v: u64) {
    a.write_u64(v);
    b.write_u64(v);
}

fn write_f64_pair(a: &mut Fnv1a64, b: &mut Fnv1a64, v: f64) {
    write_u64_pair(a, b, v.to_bits());
}

fn write_color_pair(a: &mut Fnv1a64, b: &mut Fnv1a64, c: Rgba8Premul) {
    for v in [c.r, c.g, c.b, c.a] {
        write_u8_pair(a, b, v);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compile/fingerprint.rs"]
mod tests;

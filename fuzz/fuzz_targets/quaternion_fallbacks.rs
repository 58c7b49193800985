#![no_main]

use libfuzzer_sys::fuzz_target;
use vector_extensions::{AxisSet, Quaternion, QuaternionOps, Vector, Vector3, Vector3Ops};

const MAX_ABS: f32 = 1e6;

fn is_moderate<V: Vector<Scalar = f32>>(v: &V) -> bool {
    V::Axis::ALL
        .iter()
        .all(|&axis| v.get(axis).is_finite() && v.get(axis).abs() < MAX_ABS)
}

fn is_finite<V: Vector<Scalar = f32>>(v: &V) -> bool {
    V::Axis::ALL.iter().all(|&axis| v.get(axis).is_finite())
}

fuzz_target!(|input: (Quaternion<f32>, Quaternion<f32>, Vector3<f32>, Vector3<f32>, f32)| {
    let (a, b, from, to, t) = input;

    if !(is_moderate(&a) && is_moderate(&b) && is_moderate(&from) && is_moderate(&to)) {
        return;
    }
    if !(0.0..=1.0).contains(&t) {
        return;
    }

    let a = a.normalized();
    let b = b.normalized();
    assert!(is_finite(&a) && is_finite(&b));

    assert!(is_finite(&a.slerped(&b, t)));
    assert!(a.angle_to(&b).is_finite());

    let (from, to) = (from.normalized(), to.normalized());
    if from.length() > 0.5 && to.length() > 0.5 {
        let rotation = Quaternion::from_unit_vectors(&from, &to);
        assert!(is_finite(&rotation));
        assert!(is_finite(&from.rotated_by_quaternion(&rotation)));
    }

    assert!(is_finite(&from.projected(&to)));
    assert!(from.angle_to(&to).is_finite());
});

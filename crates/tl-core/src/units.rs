// tl-core/src/units.rs

use uom::si::f32::{Angle as UomAngle, Frequency as UomFrequency, Time as UomTime};

// Public canonical unit types (SI, f32)
pub type Angle = UomAngle;
pub type Frequency = UomFrequency;
pub type Time = UomTime;

#[inline]
pub fn s(v: f32) -> Time {
    use uom::si::time::second;
    Time::new::<second>(v)
}

#[inline]
pub fn ms(v: f32) -> Time {
    use uom::si::time::millisecond;
    Time::new::<millisecond>(v)
}

#[inline]
pub fn hz(v: f32) -> Frequency {
    use uom::si::frequency::hertz;
    Frequency::new::<hertz>(v)
}

#[inline]
pub fn rad(v: f32) -> Angle {
    use uom::si::angle::radian;
    Angle::new::<radian>(v)
}

/// Raw seconds, as taken by every step function.
#[inline]
pub fn seconds(t: Time) -> f32 {
    use uom::si::time::second;
    t.get::<second>()
}

/// Raw hertz.
#[inline]
pub fn hertz(f: Frequency) -> f32 {
    use uom::si::frequency::hertz;
    f.get::<hertz>()
}

/// Raw radians.
#[inline]
pub fn radians(a: Angle) -> f32 {
    use uom::si::angle::radian;
    a.get::<radian>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_smoke() {
        let _t = s(0.001);
        let _f = hz(50.0);
        let _a = rad(1.5);
    }

    #[test]
    fn millisecond_period_reads_back_in_seconds() {
        assert!((seconds(ms(1.0)) - 0.001).abs() < 1e-9);
        assert!((hertz(hz(20.0)) - 20.0).abs() < 1e-6);
        assert!((radians(rad(0.25)) - 0.25).abs() < 1e-7);
    }
}

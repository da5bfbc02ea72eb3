//! Linear ramps and taper curves used by gradient masks

use num_traits::Float;

/// Evenly spaced samples over `[start, end]`, endpoints included
///
/// A single sample yields `start`, mirroring the usual `linspace` behavior.
pub fn linspace<T: Float>(start: T, end: T, count: usize) -> Vec<T> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let last = T::from(count - 1).unwrap_or_else(T::one);
            (0..count)
                .map(|i| {
                    let step = T::from(i).unwrap_or_else(T::zero) / last;
                    start + (end - start) * step
                })
                .collect()
        }
    }
}

/// Raise a unit-range value to the taper exponent
///
/// `0^0` is treated as 1 so a zero taper gives a constant field.
pub fn taper<T: Float>(value: T, rate: T) -> T {
    if rate == T::zero() {
        T::one()
    } else {
        value.powf(rate)
    }
}

/// Position of `value` inside `[start, start + width]`, clamped to `[0, 1]`
///
/// A zero-width band becomes a hard step at `start`.
pub fn clamped_ramp<T: Float>(value: T, start: T, width: T) -> T {
    if width <= T::zero() {
        return if value < start { T::zero() } else { T::one() };
    }
    ((value - start) / width).max(T::zero()).min(T::one())
}

/// Scale a unit-range value to an 8-bit intensity, rounding to nearest
pub fn to_intensity<T: Float>(value: T) -> u8 {
    let scaled = (value.max(T::zero()).min(T::one()) * T::from(255.0).unwrap_or_else(T::one))
        .round();
    scaled.to_u8().unwrap_or(u8::MAX)
}

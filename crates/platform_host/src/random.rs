//! Uniform randomness for cosmetic simulation (fake stats, snake food).
//!
//! On WASM this defers to `Math.random()`. Off WASM a thread-local xorshift
//! keeps the same call sites deterministic enough for tests without pulling
//! in an RNG crate for throwaway cosmetic values.

#[cfg(not(target_arch = "wasm32"))]
use std::cell::Cell;

#[cfg(not(target_arch = "wasm32"))]
thread_local! {
    static RNG_STATE: Cell<u64> = const { Cell::new(0x9E37_79B9_7F4A_7C15) };
}

/// Uniform sample in `[0, 1)`.
pub fn random_unit() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Math::random()
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        RNG_STATE.with(|state| {
            let mut x = state.get();
            x ^= x << 13;
            x ^= x >> 7;
            x ^= x << 17;
            state.set(x);
            (x >> 11) as f64 / (1u64 << 53) as f64
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_unit_stays_in_half_open_range() {
        for _ in 0..1_000 {
            let sample = random_unit();
            assert!((0.0..1.0).contains(&sample), "sample out of range: {sample}");
        }
    }
}

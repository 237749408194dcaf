#![warn(missing_docs)]
//! Q8 fixed-point softmax post-processor.
//!
//! The inference core produces one raw Q8 logit per class; this crate
//! converts that vector into Q8 probabilities summing to roughly the
//! fixed-point representation of 1.0. It runs once per classification
//! call, invoked synchronously by the surrounding pipeline. Pure and
//! reentrant: no I/O, no shared state, safe to call concurrently.
//!
//! The documented input domain is the 16-bit Q8 range. Inputs outside it
//! are computed with standard floating-point semantics; a degenerate
//! result (`NaN`, saturated zero) propagates to the caller rather than
//! raising. The function never panics.

use hexmem_model::q8;

/// Output cardinality of the classifier.
pub const NUM_CLASSES: usize = 10;

/// Converts a raw Q8 logit vector into a Q8 probability vector.
///
/// De-quantizes each logit by the Q8 scale, exponentiates, normalizes,
/// and re-quantizes by truncation. The accumulator is explicitly
/// zero-initialized: the reference routine this reimplements read an
/// uninitialized sum, which made its output depend on ambient stack
/// contents; that defect is fixed here, not carried forward.
pub fn softmax(raw: &[i32; NUM_CLASSES]) -> [i32; NUM_CLASSES] {
    let scale = q8::SCALE as f32;

    let mut exps = [0.0f32; NUM_CLASSES];
    let mut exp_sum = 0.0f32;
    for (e, &logit) in exps.iter_mut().zip(raw) {
        *e = (logit as f32 / scale).exp();
        exp_sum += *e;
    }

    let mut out = [0i32; NUM_CLASSES];
    for (o, &e) in out.iter_mut().zip(&exps) {
        *o = (e / exp_sum * scale) as i32;
    }
    out
}

/// C-ABI entry point for the simulation environment's foreign-call
/// boundary.
///
/// `raw` and `out` must each point to [`NUM_CLASSES`] contiguous `i32`
/// values; `out` is fully overwritten.
///
/// # Safety
///
/// Both pointers must be non-null, properly aligned, and valid for
/// [`NUM_CLASSES`] reads (`raw`) respectively writes (`out`).
#[no_mangle]
pub unsafe extern "C" fn hexmem_softmax(raw: *const i32, out: *mut i32) {
    let raw = unsafe { &*(raw as *const [i32; NUM_CLASSES]) };
    let result = softmax(raw);
    unsafe {
        std::ptr::copy_nonoverlapping(result.as_ptr(), out, NUM_CLASSES);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_logits_split_evenly() {
        let out = softmax(&[0; NUM_CLASSES]);
        // Each probability is 1/10; re-quantized: 256 / 10 truncates to 25.
        for &p in &out {
            assert_eq!(p, 25);
        }
    }

    #[test]
    fn probabilities_sum_to_about_one() {
        let raw = [256, -128, 0, 512, 64, -256, 32, 0, 128, -64];
        let out = softmax(&raw);
        let total: i32 = out.iter().sum();
        // Truncation loses at most 1/256 per class.
        assert!(
            (total - q8::SCALE).unsigned_abs() as usize <= NUM_CLASSES,
            "probabilities summed to {total}"
        );
        assert!(out.iter().all(|&p| (0..=q8::SCALE).contains(&p)));
    }

    #[test]
    fn dominant_logit_takes_nearly_all_mass() {
        // Real value 10.0 against nine 0.0 logits.
        let mut raw = [0i32; NUM_CLASSES];
        raw[0] = 2560;
        let out = softmax(&raw);
        assert!(out[0] >= 255, "dominant probability was {}", out[0]);
        for &p in &out[1..] {
            assert_eq!(p, 0);
        }
    }

    #[test]
    fn ordering_follows_logits() {
        let raw = [10, 700, 320, -40, 0, 150, 640, 90, -300, 512];
        let out = softmax(&raw);
        let best = (0..NUM_CLASSES).max_by_key(|&i| out[i]).unwrap();
        assert_eq!(best, 1);
    }

    #[test]
    fn extreme_inputs_do_not_panic() {
        let out = softmax(&[i32::MAX; NUM_CLASSES]);
        // exp overflows to infinity; inf/inf is NaN, which truncates to 0.
        // Degenerate, but defined and deterministic.
        assert_eq!(out, [0; NUM_CLASSES]);

        let out = softmax(&[i32::MIN; NUM_CLASSES]);
        assert_eq!(out, [0; NUM_CLASSES]);
    }

    #[test]
    fn c_abi_shim_matches_pure_function() {
        let raw = [2560, 0, 0, 0, 0, 0, 0, 0, 0, 0];
        let mut out = [0i32; NUM_CLASSES];
        unsafe { hexmem_softmax(raw.as_ptr(), out.as_mut_ptr()) };
        assert_eq!(out, softmax(&raw));
    }
}

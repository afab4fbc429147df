//! Linear-interpolation resampler.
//!
//! No anti-aliasing filter: good enough for speech going to a phone line,
//! not for music.

/// Resample mono `samples` from `in_rate` to `out_rate`.
///
/// Equal rates, a zero rate or an empty input hand the vector back untouched.
pub fn resample_linear(samples: Vec<f32>, in_rate: u32, out_rate: u32) -> Vec<f32> {
    if in_rate == out_rate || in_rate == 0 || out_rate == 0 || samples.is_empty() {
        return samples;
    }

    let len = samples.len();
    let last = len - 1;
    // floor(len / (in/out)) without the float round-off
    let out_len = ((len as u64 * out_rate as u64) / in_rate as u64).max(1) as usize;
    let ratio = in_rate as f64 / out_rate as f64;

    let mut out = Vec::with_capacity(out_len);
    for i in 0..out_len {
        let x = i as f64 * ratio;
        let x0 = (x.floor() as usize).min(last);
        let x1 = (x0 + 1).min(last);
        let t = (x - x0 as f64) as f32;
        out.push(samples[x0] * (1.0 - t) + samples[x1] * t);
    }
    out
}

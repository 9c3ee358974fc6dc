//! # Easing Curves
//!
//! Maps a normalized parameter in `[0, 1]` onto an interpolation weight in
//! `[0, 1]`. Branch radii blend between their base and top values through one
//! of these.

/// Interpolation weight as a function of normalized height.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum EasingCurve {
    /// `t`
    #[default]
    Linear,
    /// `t²`
    EaseIn,
    /// `1 - (1 - t)²`
    EaseOut,
    /// Smoothstep, `3t² - 2t³`.
    EaseInOut,
    /// Piecewise linear through `(t, weight)` keys sorted by `t`. Outside the
    /// key range the nearest key's weight is held.
    Keyframes(Vec<(f64, f64)>),
}

impl EasingCurve {
    /// Builds a keyframe curve, sorting the keys by `t` and dropping any with a
    /// non-finite component.
    ///
    /// # Examples
    /// ```
    /// use trunk_profile::EasingCurve;
    ///
    /// let curve = EasingCurve::keyframes(vec![(1.0, 0.0), (0.0, 1.0)]);
    /// assert_eq!(curve.evaluate(0.25), 0.75);
    /// ```
    pub fn keyframes(mut keys: Vec<(f64, f64)>) -> Self {
        keys.retain(|(t, w)| t.is_finite() && w.is_finite());
        keys.sort_by(|a, b| a.0.total_cmp(&b.0));
        Self::Keyframes(keys)
    }

    /// Evaluates the curve at `t`, clamped to `[0, 1]`.
    ///
    /// # Examples
    /// ```
    /// use trunk_profile::EasingCurve;
    ///
    /// assert_eq!(EasingCurve::Linear.evaluate(0.5), 0.5);
    /// assert_eq!(EasingCurve::EaseIn.evaluate(0.5), 0.25);
    /// assert_eq!(EasingCurve::EaseOut.evaluate(2.0), 1.0);
    /// ```
    pub fn evaluate(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingCurve::Linear => t,
            EasingCurve::EaseIn => t * t,
            EasingCurve::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            EasingCurve::EaseInOut => t * t * (3.0 - 2.0 * t),
            EasingCurve::Keyframes(keys) => sample_keys(keys, t),
        }
    }
}

fn sample_keys(keys: &[(f64, f64)], t: f64) -> f64 {
    let (Some(&first), Some(&last)) = (keys.first(), keys.last()) else {
        return t;
    };
    if t <= first.0 {
        return first.1;
    }
    if t >= last.0 {
        return last.1;
    }
    // First key strictly after t; bounded to 1..len by the checks above.
    let k = keys.partition_point(|&(kt, _)| kt <= t);
    let (t0, w0) = keys[k - 1];
    let (t1, w1) = keys[k];
    let span = t1 - t0;
    if span <= 0.0 {
        return w1;
    }
    w0 + (w1 - w0) * (t - t0) / span
}

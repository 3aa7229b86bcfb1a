//! Generation slider: range, current value and tick spacing.

/// Mantissas of the "nice" tick steps: `{1, 2, 5} x 10^k`.
const NICE_MANTISSAS: [f64; 3] = [1.0, 2.0, 5.0];

/// Tick spacing for a slider covering `count` generations.
///
/// Up to `mark_budget` generations every generation gets a mark. Beyond that
/// the ideal step `count / mark_budget` is rounded to the nearest nice number;
/// ties go to the larger step.
#[must_use]
pub fn tick_step(count: usize, mark_budget: usize) -> usize {
    if mark_budget == 0 || count <= mark_budget {
        return 1;
    }
    #[allow(clippy::cast_precision_loss)]
    let ideal = count as f64 / mark_budget as f64;
    nice_number(ideal).max(1)
}

/// Nearest value of the form `{1, 2, 5} x 10^k` to `value` (ties round up).
///
/// Only those three mantissas are candidates, so steps such as 25 are never
/// produced: an ideal step of 25 becomes 20.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn nice_number(value: f64) -> usize {
    if !value.is_finite() || value <= 1.0 {
        return 1;
    }

    let exponent = value.log10().floor() as i32;
    let mut best = 1.0_f64;
    let mut best_distance = f64::INFINITY;
    for k in exponent..=exponent + 1 {
        let scale = 10f64.powi(k);
        for mantissa in NICE_MANTISSAS {
            let candidate = mantissa * scale;
            let distance = (candidate - value).abs();
            if distance <= best_distance {
                best = candidate;
                best_distance = distance;
            }
        }
    }

    best.round() as usize
}

/// Everything the page needs to draw the slider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliderSpec {
    pub max: usize,
    pub step: usize,
    pub value: usize,
}

impl SliderSpec {
    /// Slider over `0..=generation_count` with `requested` clamped into range.
    #[must_use]
    pub fn new(generation_count: usize, mark_budget: usize, requested: Option<usize>) -> Self {
        Self {
            max: generation_count,
            step: tick_step(generation_count, mark_budget),
            value: requested.unwrap_or(0).min(generation_count),
        }
    }

    /// Generation shown for the current value.
    ///
    /// The range ends at the generation count, one past the last recorded
    /// generation, so the top position maps onto the last generation.
    #[must_use]
    pub fn generation(&self) -> usize {
        self.value.min(self.max.saturating_sub(1))
    }

    /// Positions of labelled tick marks.
    #[must_use]
    pub fn marks(&self) -> Vec<usize> {
        (0..=self.max).step_by(self.step).collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(15, 1)]
    #[case(20, 1)]
    #[case(21, 1)]
    #[case(47, 2)]
    #[case(60, 2)]
    #[case(70, 5)]
    #[case(100, 5)]
    #[case(150, 10)]
    #[case(500, 20)]
    #[case(1000, 50)]
    #[case(4000, 200)]
    fn step_rounds_to_nice_numbers(#[case] count: usize, #[case] expected: usize) {
        assert_eq!(tick_step(count, 20), expected);
    }

    #[rstest]
    #[case(0.4, 1)]
    #[case(1.4, 1)]
    #[case(2.35, 2)]
    #[case(3.5, 5)]
    #[case(7.4, 5)]
    #[case(7.6, 10)]
    #[case(16.0, 20)]
    #[case(34.0, 20)]
    #[case(25.0, 20)]
    #[case(36.0, 50)]
    fn nice_number_picks_nearest(#[case] value: f64, #[case] expected: usize) {
        assert_eq!(nice_number(value), expected);
    }

    #[test]
    fn small_counts_mark_every_generation() {
        let slider = SliderSpec::new(15, 20, None);
        assert_eq!(slider.step, 1);
        assert_eq!(slider.marks(), (0..=15).collect::<Vec<_>>());
    }

    #[test]
    fn marks_use_step() {
        let slider = SliderSpec::new(47, 20, Some(3));
        assert_eq!(slider.max, 47);
        assert_eq!(slider.value, 3);
        assert_eq!(slider.marks().len(), 24);
        assert_eq!(slider.marks().last(), Some(&46));
    }

    #[test]
    fn top_position_shows_last_generation() {
        let slider = SliderSpec::new(10, 20, Some(10));
        assert_eq!(slider.value, 10);
        assert_eq!(slider.generation(), 9);

        assert_eq!(SliderSpec::new(10, 20, Some(4)).generation(), 4);
        assert_eq!(SliderSpec::new(0, 20, None).generation(), 0);
    }

    #[test]
    fn requested_value_is_clamped() {
        let slider = SliderSpec::new(10, 20, Some(99));
        assert_eq!(slider.value, 10);

        let empty = SliderSpec::new(0, 20, Some(4));
        assert_eq!(empty.value, 0);
        assert_eq!(empty.marks(), vec![0]);
    }
}

//! Linear count-up tween for the stats section.
//!
//! The tween is driven one step at a time by the caller (see
//! `crate::utils::ticker::StepTicker`), so everything here is plain
//! arithmetic that can be exercised without a browser.

use serde::Deserialize;

/// Values the counters animate towards.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct CounterTargets {
    pub user_count: u64,
    pub total_blocks: u64,
    pub focus_hours: u64,
    pub rating_score: f64,
}

impl Default for CounterTargets {
    fn default() -> Self {
        Self {
            user_count: 10_000,
            total_blocks: 2_500_000,
            focus_hours: 150_000,
            rating_score: 4.9,
        }
    }
}

/// What the stats tiles currently display.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CounterState {
    pub user_count: u64,
    pub total_blocks: u64,
    pub focus_hours: u64,
    pub rating_score: f64,
}

impl From<CounterTargets> for CounterState {
    fn from(targets: CounterTargets) -> Self {
        Self {
            user_count: targets.user_count,
            total_blocks: targets.total_blocks,
            focus_hours: targets.focus_hours,
            rating_score: targets.rating_score,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CounterTween {
    targets: CounterTargets,
    steps: u32,
    step: u32,
}

impl CounterTween {
    pub fn new(targets: CounterTargets, steps: u32) -> Self {
        Self {
            targets,
            steps: steps.max(1),
            step: 0,
        }
    }

    /// Timer period for spreading `steps` ticks over `duration_ms`.
    /// Host timers take whole milliseconds, so the fraction is dropped.
    pub fn period_ms(duration_ms: u32, steps: u32) -> u32 {
        (duration_ms / steps.max(1)).max(1)
    }

    pub fn step(&self) -> u32 {
        self.step
    }

    pub fn is_complete(&self) -> bool {
        self.step >= self.steps
    }

    /// Moves one step forward and returns the values to display, or
    /// `None` once the final step has already been produced.
    pub fn advance(&mut self) -> Option<CounterState> {
        if self.is_complete() {
            return None;
        }
        self.step += 1;
        Some(self.state_at(self.step))
    }

    /// Values shown at `step`. The last step snaps to the exact targets.
    pub fn state_at(&self, step: u32) -> CounterState {
        if step >= self.steps {
            return self.targets.into();
        }
        let step = u64::from(step);
        let steps = u64::from(self.steps);
        let progress = step as f64 / steps as f64;
        CounterState {
            user_count: self.targets.user_count * step / steps,
            total_blocks: self.targets.total_blocks * step / steps,
            focus_hours: self.targets.focus_hours * step / steps,
            rating_score: round_to(self.targets.rating_score * progress, 1)
                .min(self.targets.rating_score),
        }
    }
}

/// Every finite f64 has an exact decimal expansion of at most this many
/// fractional digits.
const EXACT_FRACTION_DIGITS: usize = 1074;

/// Rounds to `decimals` places the way the page formats decimals: from the
/// exact binary value, with exact ties going away from zero.
pub fn round_to(value: f64, decimals: usize) -> f64 {
    to_fixed(value, decimals).parse().unwrap_or(value)
}

fn to_fixed(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value.abs());
    let (int_part, fraction) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(fraction.bytes().take(decimals))
        .map(|b| b - b'0')
        .collect();
    let round_up = fraction.as_bytes().get(decimals).map_or(false, |&b| b >= b'5');
    let mut int_len = int_part.len();
    if round_up {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == 9 {
                *digit = 0;
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, 1);
            int_len += 1;
        }
    }

    let mut out = String::with_capacity(digits.len() + 2);
    if value < 0.0 {
        out.push('-');
    }
    for (i, digit) in digits.iter().enumerate() {
        if i == int_len {
            out.push('.');
        }
        out.push(char::from(b'0' + digit));
    }
    out
}

/// Hands out the count-up tween the first time the stats section comes
/// into view, and never again.
#[derive(Clone, Debug, PartialEq)]
pub struct CounterTrigger {
    targets: CounterTargets,
    steps: u32,
    fired: bool,
}

impl CounterTrigger {
    pub fn new(targets: CounterTargets, steps: u32) -> Self {
        Self {
            targets,
            steps,
            fired: false,
        }
    }

    /// Called on every viewport entry. Only the first call starts a tween.
    pub fn enter(&mut self) -> Option<CounterTween> {
        if self.fired {
            return None;
        }
        self.fired = true;
        Some(CounterTween::new(self.targets, self.steps))
    }
}

/// Compact display for the integer counters: `2.5M+`, `15K+`, `5.0K+`, `999`.
pub fn format_number(value: u64) -> String {
    if value >= 1_000_000 {
        format!("{}M+", to_fixed(value as f64 / 1_000_000.0, 1))
    } else if value >= 1_000 {
        let decimals = if value >= 10_000 { 0 } else { 1 };
        format!("{}K+", to_fixed(value as f64 / 1_000.0, decimals))
    } else {
        value.to_string()
    }
}

pub fn format_rating(value: f64) -> String {
    if value > 0.0 {
        format!("{}/5", to_fixed(value, 1))
    } else {
        "0.0/5".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_midpoint_values() {
        let tween = CounterTween::new(CounterTargets::default(), 60);
        let state = tween.state_at(30);
        assert_eq!(state.user_count, 5_000);
        assert_eq!(state.total_blocks, 1_250_000);
        assert_eq!(state.focus_hours, 75_000);
        assert_eq!(state.rating_score, 2.5);
    }

    #[test]
    fn test_integer_fields_floor_partial_steps() {
        let tween = CounterTween::new(CounterTargets::default(), 60);
        let cases = [(1, 166), (7, 1_166), (29, 4_833), (45, 7_500), (59, 9_833)];
        for (step, expected) in cases {
            assert_eq!(tween.state_at(step).user_count, expected, "step {step}");
        }
        assert_eq!(tween.state_at(7).focus_hours, 17_500);
        assert_eq!(tween.state_at(59).total_blocks, 2_458_333);
    }

    #[test]
    fn test_final_step_is_exact() {
        let targets = CounterTargets::default();
        let mut tween = CounterTween::new(targets, 60);
        let mut last = None;
        while let Some(state) = tween.advance() {
            last = Some(state);
        }
        assert_eq!(tween.step(), 60);
        assert!(tween.is_complete());
        assert_eq!(last, Some(CounterState::from(targets)));
        assert_eq!(tween.advance(), None);
    }

    #[test]
    fn test_advance_counts_up_in_order() {
        let mut tween = CounterTween::new(CounterTargets::default(), 60);
        assert_eq!(tween.step(), 0);
        let first = tween.advance().unwrap();
        assert_eq!(tween.step(), 1);
        assert_eq!(first.user_count, 166);
        assert_eq!(first.rating_score, 0.1);
    }

    #[test]
    fn test_period_ms() {
        assert_eq!(CounterTween::period_ms(2000, 60), 33);
        assert_eq!(CounterTween::period_ms(2000, 0), 2000);
        assert_eq!(CounterTween::period_ms(10, 60), 1);
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(10_000), "10K+");
        assert_eq!(format_number(2_500_000), "2.5M+");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(15_000), "15K+");
        assert_eq!(format_number(5_000), "5.0K+");
        assert_eq!(format_number(150_000), "150K+");
        assert_eq!(format_number(0), "0");
    }

    #[test]
    fn test_format_number_rounds_half_up() {
        assert_eq!(format_number(12_500), "13K+");
        assert_eq!(format_number(1_250), "1.3K+");
    }

    #[test]
    fn test_format_rounds_exact_binary_value() {
        // 1.15 and 4.35 are stored just below the tie
        assert_eq!(format_number(1_150), "1.1K+");
        assert_eq!(format_rating(4.35), "4.3/5");
        assert_eq!(round_to(4.35, 1), 4.3);
        // 2.45 is stored just above it
        assert_eq!(round_to(4.9 * 0.5, 1), 2.5);
    }

    #[test]
    fn test_to_fixed_carries_and_ties() {
        assert_eq!(to_fixed(9.96, 1), "10.0");
        assert_eq!(to_fixed(99.5, 0), "100");
        assert_eq!(to_fixed(2.5, 0), "3");
        assert_eq!(to_fixed(0.125, 2), "0.13");
        assert_eq!(to_fixed(0.0, 1), "0.0");
        assert_eq!(to_fixed(1_000_000.0, 0), "1000000");
    }

    #[test]
    fn test_trigger_starts_only_once() {
        let mut trigger = CounterTrigger::new(CounterTargets::default(), 60);

        let mut tween = trigger.enter().expect("first entry starts the animation");
        assert_eq!(tween.step(), 0);

        // Leaving and re-entering mid-animation does not restart it.
        tween.advance();
        assert!(trigger.enter().is_none());

        while tween.advance().is_some() {}
        assert!(tween.is_complete());
        assert!(trigger.enter().is_none());
    }

    #[test]
    fn test_format_rating() {
        assert_eq!(format_rating(0.0), "0.0/5");
        assert_eq!(format_rating(4.9), "4.9/5");
        assert_eq!(format_rating(2.0), "2.0/5");
    }

    #[test]
    fn test_targets_default_from_partial_json() {
        let targets: CounterTargets = serde_json::from_str(r#"{"user_count": 42}"#).unwrap();
        assert_eq!(targets.user_count, 42);
        assert_eq!(targets.total_blocks, 2_500_000);
        assert_eq!(targets.rating_score, 4.9);
    }

    proptest! {
        #[test]
        fn test_tween_never_decreases(
            users in 0u64..10_000_000,
            blocks in 0u64..10_000_000,
            rating in 0.0f64..5.0,
            steps in 1u32..240,
        ) {
            let targets = CounterTargets {
                user_count: users,
                total_blocks: blocks,
                focus_hours: users / 3,
                rating_score: rating,
            };
            let mut tween = CounterTween::new(targets, steps);
            let mut previous = CounterState::default();
            while let Some(state) = tween.advance() {
                prop_assert!(state.user_count >= previous.user_count);
                prop_assert!(state.total_blocks >= previous.total_blocks);
                prop_assert!(state.focus_hours >= previous.focus_hours);
                prop_assert!(state.rating_score >= previous.rating_score);
                previous = state;
            }
            prop_assert_eq!(previous, CounterState::from(targets));
        }
    }
}

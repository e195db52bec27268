//! One-shot entrance transition used for the footer.
//!
//! The state machine has two states and a single forward edge. The frames
//! in between are a linear interpolation over a fixed duration; in the
//! browser the interpolation itself is left to a CSS transition built from
//! the same numbers.

use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Hidden,
    Visible,
}

impl RevealState {
    /// `Visible` is terminal.
    pub fn advance(self) -> Self {
        RevealState::Visible
    }
}

/// Visual properties of the revealed element at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub opacity: f64,
    /// Vertical offset in px, positive is downwards.
    pub offset_y: f64,
}

impl Frame {
    pub fn to_style(&self) -> String {
        format!(
            "opacity: {}; transform: translateY({}px);",
            self.opacity, self.offset_y
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reveal {
    pub hidden: Frame,
    pub visible: Frame,
    pub duration: Duration,
}

impl Reveal {
    /// Fade in while sliding up 40px over 600ms.
    pub const fn fade_up() -> Self {
        Self {
            hidden: Frame {
                opacity: 0.0,
                offset_y: 40.0,
            },
            visible: Frame {
                opacity: 1.0,
                offset_y: 0.0,
            },
            duration: Duration::from_millis(600),
        }
    }

    pub fn frame(&self, state: RevealState) -> Frame {
        match state {
            RevealState::Hidden => self.hidden,
            RevealState::Visible => self.visible,
        }
    }

    /// Fraction of the transition completed after `elapsed`, in `[0, 1]`.
    ///
    /// This and [`Reveal::sample`] model the `linear` timing function that
    /// [`Reveal::transition_css`] hands to the browser; the page itself never
    /// steps frames in Rust.
    pub fn progress(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    /// The frame the browser shows `elapsed` after the transition starts.
    pub fn sample(&self, elapsed: Duration) -> Frame {
        let t = self.progress(elapsed);
        if t >= 1.0 {
            return self.visible;
        }
        let lerp = |from: f64, to: f64| from + (to - from) * t;
        Frame {
            opacity: lerp(self.hidden.opacity, self.visible.opacity),
            offset_y: lerp(self.hidden.offset_y, self.visible.offset_y),
        }
    }

    pub fn transition_css(&self) -> String {
        let ms = self.duration.as_millis();
        format!("opacity {ms}ms linear, transform {ms}ms linear")
    }

    /// Inline style for `state`, including the transition declaration so a
    /// later state change animates.
    pub fn style(&self, state: RevealState) -> String {
        format!(
            "{} transition: {};",
            self.frame(state).to_style(),
            self.transition_css()
        )
    }
}

//! Motion math: scroll-linked values, entrance poses, staggering and hover.
//!
//! Components never animate frame by frame themselves. They compute a
//! [`Pose`] from their state (revealed, hovered, scroll progress) and hand the
//! browser a CSS `transition`, so everything here is pure and unit-tested.

use crate::config::{FadeConfig, RevealConfig};

/// Linear map of `value` from `input` onto `output`, clamped at both ends.
///
/// Degenerate input ranges snap to the output start below the range and the
/// output end at or above it.
pub fn interpolate(value: f64, input: (f64, f64), output: (f64, f64)) -> f64 {
    let (in_lo, in_hi) = input;
    let (out_lo, out_hi) = output;
    if in_hi <= in_lo {
        return if value < in_lo { out_lo } else { out_hi };
    }
    let t = ((value - in_lo) / (in_hi - in_lo)).clamp(0.0, 1.0);
    out_lo + (out_hi - out_lo) * t
}

/// Normalized document scroll position in `[0, 1]`.
///
/// Returns 0 when the document is not taller than the viewport.
pub fn scroll_progress(scroll_top: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 || !scrollable.is_finite() {
        return 0.0;
    }
    (scroll_top / scrollable).clamp(0.0, 1.0)
}

/// Opacity and scale of the hero content block.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroFade {
    pub opacity: f64,
    pub scale: f64,
}

impl HeroFade {
    /// Fully opaque, full size.
    pub const REST: HeroFade = HeroFade {
        opacity: 1.0,
        scale: 1.0,
    };

    pub fn at(progress: f64, fade: &FadeConfig) -> Self {
        let range = (fade.start, fade.end);
        Self {
            opacity: interpolate(progress, range, (1.0, fade.end_opacity)),
            scale: interpolate(progress, range, (1.0, fade.end_scale)),
        }
    }

    /// Inline `style` value.
    pub fn css(&self) -> String {
        format!(
            "opacity: {}; transform: scale({})",
            round4(self.opacity),
            round4(self.scale)
        )
    }
}

/// Visual state of a block: opacity plus a 2D offset and uniform scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    /// Horizontal offset, px
    pub x: f64,
    /// Vertical offset, px (positive is down)
    pub y: f64,
    pub scale: f64,
}

impl Pose {
    /// Fully visible, no offset, natural size.
    pub const IDENTITY: Pose = Pose {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
    };

    /// CSS `transform` value.
    pub fn transform(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            round4(self.x),
            round4(self.y),
            round4(self.scale)
        )
    }

    /// Inline `style` for this pose, with a transition applied when it
    /// changes.
    pub fn css(&self, transition: &Transition) -> String {
        format!(
            "opacity: {}; transform: {}; {}",
            round4(self.opacity),
            self.transform(),
            transition.css()
        )
    }
}

/// Where a block starts before its entrance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Entrance {
    /// Fade in while moving from `dy` px below (negative: above)
    FadeUp { dy: f64 },
    /// Fade in while moving from `dx` px to the side
    SlideIn { dx: f64 },
    /// Fade in while growing from `from`
    ZoomIn { from: f64 },
}

impl Entrance {
    /// Section headers, service cards and the CTA block.
    pub const RISE: Entrance = Entrance::FadeUp { dy: 30.0 };
    /// Nav links drop in from above.
    pub const DROP: Entrance = Entrance::FadeUp { dy: -20.0 };

    /// Pose before the block has been revealed.
    pub fn initial(self) -> Pose {
        match self {
            Entrance::FadeUp { dy } => Pose {
                opacity: 0.0,
                y: dy,
                ..Pose::IDENTITY
            },
            Entrance::SlideIn { dx } => Pose {
                opacity: 0.0,
                x: dx,
                ..Pose::IDENTITY
            },
            Entrance::ZoomIn { from } => Pose {
                opacity: 0.0,
                scale: from,
                ..Pose::IDENTITY
            },
        }
    }

    /// Pose for the current reveal state.
    pub fn pose(self, revealed: bool) -> Pose {
        if revealed {
            Pose::IDENTITY
        } else {
            self.initial()
        }
    }
}

/// Pointer-hover adjustment applied on top of the entrance pose.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Hover {
    /// Move up by this many px
    Lift(f64),
    /// Multiply the scale
    Grow(f64),
}

impl Hover {
    /// Service cards.
    pub const CARD_LIFT: Hover = Hover::Lift(10.0);
    /// Project cards.
    pub const CARD_GROW: Hover = Hover::Grow(1.05);

    pub fn apply(self, pose: Pose, hovered: bool) -> Pose {
        if !hovered {
            return pose;
        }
        match self {
            Hover::Lift(px) => Pose {
                y: pose.y - px,
                ..pose
            },
            Hover::Grow(factor) => Pose {
                scale: pose.scale * factor,
                ..pose
            },
        }
    }
}

/// CSS transition timing for opacity and transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub duration_secs: f64,
    pub delay_secs: f64,
}

impl Transition {
    /// Hover feedback must not wait for a stagger delay.
    pub const HOVER: Transition = Transition {
        duration_secs: 0.2,
        delay_secs: 0.0,
    };

    pub fn new(duration_secs: f64, delay_secs: f64) -> Self {
        Self {
            duration_secs,
            delay_secs,
        }
    }

    /// Entrance timing for item `index` of a list.
    pub fn staggered(reveal: &RevealConfig, index: usize) -> Self {
        Self::new(reveal.duration_secs, stagger_delay(index, reveal.stagger_secs))
    }

    pub fn css(&self) -> String {
        let d = round4(self.duration_secs);
        let delay = round4(self.delay_secs);
        format!(
            "transition: opacity {d}s ease-out {delay}s, transform {d}s ease-out {delay}s"
        )
    }
}

/// Delay for item `index`, relative to its list becoming visible.
pub fn stagger_delay(index: usize, step_secs: f64) -> f64 {
    index as f64 * step_secs
}

/// One-shot reveal latch.
///
/// Becomes revealed on the first visible observation and stays revealed;
/// later visibility changes are ignored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    /// Feed one visibility observation. Returns `true` only for the
    /// observation that flips the latch.
    pub fn observe(&mut self, visible: bool) -> bool {
        if visible && !self.revealed {
            self.revealed = true;
            return true;
        }
        false
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}

/// Pointer history of a hoverable block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PointerState {
    /// Never hovered; the entrance transition still owns the timing
    #[default]
    Untouched,
    Over,
    Out,
}

/// Style for a block that enters once and may react to hover.
///
/// Once the pointer has touched a revealed block, both hovering and leaving
/// use the hover transition, so the card responds immediately even if its
/// stagger delay is still pending.
pub fn block_style(
    entrance: Entrance,
    revealed: bool,
    hover: Option<(Hover, PointerState)>,
    entrance_timing: Transition,
) -> String {
    let pose = entrance.pose(revealed);
    match hover {
        Some((hover, pointer)) if revealed => {
            let timing = match pointer {
                PointerState::Untouched => entrance_timing,
                PointerState::Over | PointerState::Out => Transition::HOVER,
            };
            hover.apply(pose, pointer == PointerState::Over).css(&timing)
        }
        _ => pose.css(&entrance_timing),
    }
}

/// Round to 4 decimals for stable CSS output (no `0.30000000000000004`).
fn round4(v: f64) -> f64 {
    let r = (v * 10_000.0).round() / 10_000.0;
    if r == 0.0 { 0.0 } else { r }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn hero_fade_matches_reference_points() {
        let fade = FadeConfig::default();
        let cases = [
            (0.0, 1.0, 1.0),
            (0.1, 0.5, 0.9),
            (0.2, 0.0, 0.8),
            (0.5, 0.0, 0.8),
        ];
        for (progress, opacity, scale) in cases {
            let f = HeroFade::at(progress, &fade);
            assert!(close(f.opacity, opacity), "opacity at {progress}: {}", f.opacity);
            assert!(close(f.scale, scale), "scale at {progress}: {}", f.scale);
        }
    }

    #[test]
    fn hero_fade_clamps_below_range() {
        let f = HeroFade::at(-0.3, &FadeConfig::default());
        assert_eq!(f, HeroFade::REST);
    }

    #[test]
    fn hero_fade_css_is_rounded() {
        let f = HeroFade::at(0.1, &FadeConfig::default());
        assert_eq!(f.css(), "opacity: 0.5; transform: scale(0.9)");
        assert_eq!(HeroFade::REST.css(), "opacity: 1; transform: scale(1)");
    }

    #[test]
    fn interpolate_handles_degenerate_range() {
        assert_eq!(interpolate(0.1, (0.2, 0.2), (1.0, 0.0)), 1.0);
        assert_eq!(interpolate(0.2, (0.2, 0.2), (1.0, 0.0)), 0.0);
    }

    #[test]
    fn scroll_progress_is_normalized() {
        assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
        assert!(close(scroll_progress(1000.0, 3000.0, 1000.0), 0.5));
        assert_eq!(scroll_progress(2500.0, 3000.0, 1000.0), 1.0);
    }

    #[test]
    fn scroll_progress_of_short_document_is_zero() {
        assert_eq!(scroll_progress(0.0, 800.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(50.0, 1000.0, 1000.0), 0.0);
    }

    #[test]
    fn stagger_is_index_times_step() {
        let delays: Vec<f64> = (0..4).map(|i| stagger_delay(i, 0.1)).collect();
        for (i, d) in delays.iter().enumerate() {
            assert!(close(*d, i as f64 * 0.1));
        }
    }

    #[test]
    fn latch_fires_once() {
        let mut latch = RevealLatch::default();
        assert!(!latch.observe(false));
        assert!(latch.observe(true));
        assert!(!latch.observe(false));
        assert!(!latch.observe(true));
        assert!(latch.is_revealed());
    }

    #[test]
    fn entrance_poses() {
        assert_eq!(Entrance::RISE.initial().y, 30.0);
        assert_eq!(Entrance::RISE.initial().opacity, 0.0);
        assert_eq!(Entrance::ZoomIn { from: 0.5 }.initial().scale, 0.5);
        assert_eq!(Entrance::SlideIn { dx: -20.0 }.initial().x, -20.0);
        assert_eq!(Entrance::RISE.pose(true), Pose::IDENTITY);
    }

    #[test]
    fn hover_reverts_when_pointer_leaves() {
        let base = Pose::IDENTITY;
        assert_eq!(Hover::CARD_LIFT.apply(base, true).y, -10.0);
        assert_eq!(Hover::CARD_LIFT.apply(base, false), base);
        assert!(close(Hover::CARD_GROW.apply(base, true).scale, 1.05));
    }

    #[test]
    fn transition_css_uses_stagger() {
        let reveal = RevealConfig::default();
        let t = Transition::staggered(&reveal, 3);
        assert_eq!(
            t.css(),
            "transition: opacity 0.5s ease-out 0.3s, transform 0.5s ease-out 0.3s"
        );
    }

    #[test]
    fn block_style_ignores_hover_before_reveal() {
        let timing = Transition::new(0.5, 0.0);
        let hidden = block_style(
            Entrance::RISE,
            false,
            Some((Hover::CARD_LIFT, PointerState::Over)),
            timing,
        );
        assert!(hidden.starts_with("opacity: 0; transform: translate(0px, 30px)"));

        let lifted = block_style(
            Entrance::RISE,
            true,
            Some((Hover::CARD_LIFT, PointerState::Over)),
            timing,
        );
        assert!(lifted.starts_with("opacity: 1; transform: translate(0px, -10px) scale(1)"));
        assert!(lifted.contains("0.2s"));
    }

    #[test]
    fn untouched_card_keeps_its_stagger() {
        let timing = Transition::staggered(&RevealConfig::default(), 3);
        let entering = block_style(
            Entrance::RISE,
            true,
            Some((Hover::CARD_LIFT, PointerState::Untouched)),
            timing,
        );
        assert!(entering.ends_with(&timing.css()));
    }

    #[test]
    fn leaving_a_staggered_card_reverts_without_delay() {
        let timing = Transition::staggered(&RevealConfig::default(), 3);
        let left = block_style(
            Entrance::RISE,
            true,
            Some((Hover::CARD_LIFT, PointerState::Out)),
            timing,
        );
        assert!(left.starts_with("opacity: 1; transform: translate(0px, 0px) scale(1)"));
        assert!(left.ends_with(&Transition::HOVER.css()));
        assert!(!left.contains("0.3s"));
    }
}

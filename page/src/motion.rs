//! Entrance motion for elements that animate on first paint.
//!
//! Each animated element is described by an [`Entrance`]: an initial
//! [`Pose`], a resting [`Pose`], and a [`Timing`]. The descriptor compiles
//! to a `@keyframes` block plus an inline `animation` shorthand with `both`
//! fill, so the browser holds the initial pose through the delay,
//! interpolates once, and pins the resting pose afterwards. No timers, no
//! callbacks, no re-trigger: an element plays its entrance exactly once,
//! when it enters the tree.

use std::fmt::Write as _;

/// Soft ease used by every entrance on the page.
pub const EASE_SOFT: &str = "cubic-bezier(0.2, 0.9, 0.2, 1)";

/// Visual state of an element at one end of an entrance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    /// Vertical offset in pixels, rendered as `translateY`.
    pub offset_y: f32,
    /// Uniform scale factor.
    pub scale: f32,
    /// Opacity in `[0, 1]`.
    pub opacity: f32,
}

impl Pose {
    /// Resting pose shared by fully revealed elements.
    pub const REST: Pose = Pose { offset_y: 0.0, scale: 1.0, opacity: 1.0 };

    fn css(&self) -> String {
        format!(
            "transform: translateY({}px) scale({}); opacity: {};",
            self.offset_y, self.scale, self.opacity
        )
    }
}

/// Timing curve for one entrance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timing {
    /// Milliseconds before the transition starts.
    pub delay_ms: u32,
    /// Transition length in milliseconds.
    pub duration_ms: u32,
    /// CSS timing function.
    pub easing: &'static str,
}

/// A one-way entrance, played once when the element first enters the tree.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Entrance {
    /// Keyframe name; must be unique across the page.
    pub name: &'static str,
    /// State at first paint.
    pub from: Pose,
    /// State after the transition settles.
    pub to: Pose,
    /// When and how fast the transition runs.
    pub timing: Timing,
}

impl Entrance {
    /// Inline style that plays this entrance on an element.
    ///
    /// `both` fill keeps the element at [`Entrance::from`] while the delay
    /// elapses and at [`Entrance::to`] once the transition finishes.
    pub fn style(&self) -> String {
        format!(
            "animation: {} {}ms {} {}ms both;",
            self.name, self.timing.duration_ms, self.timing.easing, self.timing.delay_ms
        )
    }

    fn keyframes(&self) -> String {
        format!(
            "@keyframes {} {{ from {{ {} }} to {{ {} }} }}",
            self.name,
            self.from.css(),
            self.to.css()
        )
    }
}

/// Hero headline: rises 20px into place, first of the staggered pair.
pub const HERO_HEADING: Entrance = Entrance {
    name: "rise-heading",
    from: Pose { offset_y: 20.0, scale: 1.0, opacity: 0.0 },
    to: Pose::REST,
    timing: Timing { delay_ms: 100, duration_ms: 600, easing: EASE_SOFT },
};

/// Hero lede paragraph: shorter rise, delayed past the headline.
pub const HERO_LEDE: Entrance = Entrance {
    name: "rise-lede",
    from: Pose { offset_y: 10.0, scale: 1.0, opacity: 0.0 },
    to: Pose::REST,
    timing: Timing { delay_ms: 200, duration_ms: 600, easing: EASE_SOFT },
};

/// Demo photo: settles from slightly enlarged and transparent.
pub const DEMO_PHOTO: Entrance = Entrance {
    name: "settle-photo",
    from: Pose { offset_y: 0.0, scale: 1.08, opacity: 0.0 },
    to: Pose::REST,
    timing: Timing { delay_ms: 0, duration_ms: 600, easing: EASE_SOFT },
};

/// Darkening shade over the photo: fades to a low fixed opacity.
pub const DEMO_SHADE: Entrance = Entrance {
    name: "dim-shade",
    from: Pose { offset_y: 0.0, scale: 1.0, opacity: 0.0 },
    to: Pose { offset_y: 0.0, scale: 1.0, opacity: 0.12 },
    timing: Timing { delay_ms: 100, duration_ms: 500, easing: EASE_SOFT },
};

/// Memory card panel: rises into place, unstaggered.
pub const DEMO_CARD: Entrance = Entrance {
    name: "rise-card",
    from: Pose { offset_y: 20.0, scale: 1.0, opacity: 0.0 },
    to: Pose::REST,
    timing: Timing { delay_ms: 0, duration_ms: 500, easing: EASE_SOFT },
};

/// Every entrance on the page, in paint order.
pub const ENTRANCES: [Entrance; 5] =
    [HERO_HEADING, HERO_LEDE, DEMO_PHOTO, DEMO_SHADE, DEMO_CARD];

/// `@keyframes` blocks for the whole page, appended to the stylesheet.
pub fn entrance_css() -> String {
    let mut css = String::new();
    for entrance in ENTRANCES {
        let _ = writeln!(css, "{}", entrance.keyframes());
    }
    css
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_entrance_starts_transparent() {
        for entrance in ENTRANCES {
            assert_eq!(entrance.from.opacity, 0.0, "{} starts visible", entrance.name);
        }
    }

    #[test]
    fn resting_poses_have_no_offset_or_scale() {
        for entrance in ENTRANCES {
            assert_eq!(entrance.to.offset_y, 0.0, "{} rests offset", entrance.name);
            assert_eq!(entrance.to.scale, 1.0, "{} rests scaled", entrance.name);
        }
    }

    #[test]
    fn resting_opacity_is_full_except_the_shade() {
        for entrance in ENTRANCES {
            let expected = if entrance.name == DEMO_SHADE.name { 0.12 } else { 1.0 };
            assert_eq!(entrance.to.opacity, expected, "{}", entrance.name);
        }
    }

    #[test]
    fn hero_pair_is_staggered() {
        assert!(HERO_HEADING.timing.delay_ms < HERO_LEDE.timing.delay_ms);
    }

    #[test]
    fn shade_trails_the_photo() {
        assert_eq!(DEMO_PHOTO.timing.delay_ms, 0);
        assert_eq!(DEMO_SHADE.timing.delay_ms, 100);
    }

    #[test]
    fn durations_stay_inside_the_stated_band() {
        // The design-details copy promises 180-600ms.
        for entrance in ENTRANCES {
            let d = entrance.timing.duration_ms;
            assert!((180..=600).contains(&d), "{} runs {}ms", entrance.name, d);
        }
    }

    #[test]
    fn keyframe_names_are_unique() {
        for (i, a) in ENTRANCES.iter().enumerate() {
            for b in &ENTRANCES[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn style_declares_duration_delay_and_fill() {
        let style = HERO_LEDE.style();
        assert_eq!(style, format!("animation: rise-lede 600ms {EASE_SOFT} 200ms both;"));
    }

    #[test]
    fn keyframes_carry_both_poses() {
        let css = entrance_css();
        assert!(css.contains("@keyframes settle-photo"));
        assert!(css.contains("scale(1.08)"));
        assert!(css.contains("translateY(20px)"));
        assert!(css.contains("opacity: 0.12;"));
    }
}

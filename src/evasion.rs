//! Positioning for the button that runs away from the pointer.
//!
//! Each dodge is one step of a random walk: start from where the button is,
//! move a random distance in a random direction, and clamp the result so the
//! whole button stays `EDGE_PAD` away from every viewport edge.

use std::f64::consts::TAU;

use rand::Rng;

use crate::config::{DODGE_MAX_RADIUS, DODGE_MIN_RADIUS, EDGE_PAD};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// On-screen box of the button, as reported by `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// Clamp into `[pad, max]`. When the viewport is too small for that range
/// `max` wins, keeping the button's far edge `pad` inside the viewport.
fn clamp_axis(value: f64, max: f64) -> f64 {
    value.max(EDGE_PAD).min(max)
}

/// Next top-left corner for the button.
///
/// `current` is the last position handed out; when `None` the walk starts
/// from the button's laid-out position. An unmeasurable button goes to the
/// origin.
pub fn next_position<R: Rng + ?Sized>(
    rng: &mut R,
    button: Option<BoundingBox>,
    current: Option<Point>,
    viewport: Viewport,
) -> Point {
    let Some(button) = button else {
        return Point::default();
    };

    let max_x = viewport.width - button.width - EDGE_PAD;
    let max_y = viewport.height - button.height - EDGE_PAD;

    let base = current.unwrap_or(Point {
        x: button.left,
        y: button.top,
    });
    let base_x = clamp_axis(base.x, max_x);
    let base_y = clamp_axis(base.y, max_y);

    let angle = rng.random_range(0.0..TAU);
    let radius = rng.random_range(DODGE_MIN_RADIUS..DODGE_MAX_RADIUS);

    Point {
        x: clamp_axis((base_x + angle.cos() * radius).round(), max_x),
        y: clamp_axis((base_y + angle.sin() * radius).round(), max_y),
    }
}

/// Whether the button has started running, and where it currently is.
/// Once evasive it stays evasive.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Evasion {
    evasive: bool,
    position: Point,
}

impl Evasion {
    pub fn is_evasive(&self) -> bool {
        self.evasive
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn dodge<R: Rng + ?Sized>(
        self,
        rng: &mut R,
        button: Option<BoundingBox>,
        viewport: Viewport,
    ) -> Self {
        let current = self.evasive.then_some(self.position);
        Self {
            evasive: true,
            position: next_position(rng, button, current, viewport),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const VIEWPORT: Viewport = Viewport {
        width: 1280.0,
        height: 720.0,
    };

    fn button_at(left: f64, top: f64) -> BoundingBox {
        BoundingBox {
            left,
            top,
            width: 100.0,
            height: 40.0,
        }
    }

    fn in_bounds(p: Point, button: BoundingBox, viewport: Viewport) -> bool {
        p.x >= EDGE_PAD
            && p.x <= viewport.width - button.width - EDGE_PAD
            && p.y >= EDGE_PAD
            && p.y <= viewport.height - button.height - EDGE_PAD
    }

    #[test]
    fn first_dodge_moves_away_from_layout_position() {
        let mut rng = StdRng::seed_from_u64(7);
        let button = button_at(600.0, 400.0);

        let p = next_position(&mut rng, Some(button), None, VIEWPORT);
        let moved = ((p.x - 600.0).powi(2) + (p.y - 400.0).powi(2)).sqrt();

        // Rounding can shave up to half a pixel per axis
        assert!(moved >= DODGE_MIN_RADIUS - 1.0, "moved only {moved}");
        assert!(moved <= DODGE_MAX_RADIUS + 1.0, "moved {moved}");
        assert!(in_bounds(p, button, VIEWPORT));
    }

    #[test]
    fn positions_are_whole_pixels_away_from_edges() {
        let mut rng = StdRng::seed_from_u64(11);
        let p = next_position(&mut rng, Some(button_at(600.0, 300.0)), None, VIEWPORT);
        assert_eq!(p.x, p.x.round());
        assert_eq!(p.y, p.y.round());
    }

    #[test]
    fn unmeasured_button_goes_to_origin() {
        let mut rng = StdRng::seed_from_u64(3);
        let p = next_position(&mut rng, None, Some(Point { x: 50.0, y: 50.0 }), VIEWPORT);
        assert_eq!(p, Point::default());
    }

    #[test]
    fn offscreen_start_is_pulled_back_in() {
        let mut rng = StdRng::seed_from_u64(5);
        let button = button_at(-400.0, 5000.0);
        let p = next_position(&mut rng, Some(button), None, VIEWPORT);
        assert!(in_bounds(p, button, VIEWPORT));
    }

    #[test]
    fn tiny_viewport_keeps_far_edge_inside() {
        let mut rng = StdRng::seed_from_u64(9);
        let viewport = Viewport {
            width: 120.0,
            height: 60.0,
        };
        // 120 - 100 - 20 and 60 - 40 - 20 both fall below the pad
        let p = next_position(&mut rng, Some(button_at(10.0, 10.0)), None, viewport);
        assert_eq!(p, Point { x: 0.0, y: 0.0 });
    }

    #[test]
    fn narrow_viewport_clamps_each_axis_separately() {
        let mut rng = StdRng::seed_from_u64(13);
        let viewport = Viewport {
            width: 130.0,
            height: 720.0,
        };
        let button = button_at(10.0, 300.0);
        let p = next_position(&mut rng, Some(button), None, viewport);
        assert_eq!(p.x, 10.0);
        assert!(p.y >= EDGE_PAD && p.y <= 720.0 - 40.0 - EDGE_PAD);
    }

    #[test]
    fn evasion_is_one_way_and_walks_from_last_position() {
        let mut rng = StdRng::seed_from_u64(21);
        let button = button_at(600.0, 400.0);

        let idle = Evasion::default();
        assert!(!idle.is_evasive());

        let first = idle.dodge(&mut rng, Some(button), VIEWPORT);
        assert!(first.is_evasive());

        let second = first.dodge(&mut rng, Some(button), VIEWPORT);
        assert!(second.is_evasive());
        let step = ((second.position().x - first.position().x).powi(2)
            + (second.position().y - first.position().y).powi(2))
        .sqrt();
        assert!(step <= DODGE_MAX_RADIUS + 1.0);
    }

    proptest! {
        #[test]
        fn dodges_stay_inside_viewport(
            seed: u64,
            vw in 200.0f64..3000.0,
            vh in 200.0f64..3000.0,
            w in 10.0f64..150.0,
            h in 10.0f64..80.0,
            left in -500.0f64..3500.0,
            top in -500.0f64..3500.0,
            dodges in 1usize..30,
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            let viewport = Viewport { width: vw, height: vh };
            let button = BoundingBox { left, top, width: w, height: h };

            let mut state = Evasion::default();
            for _ in 0..dodges {
                state = state.dodge(&mut rng, Some(button), viewport);
                prop_assert!(in_bounds(state.position(), button, viewport));
            }
        }
    }
}

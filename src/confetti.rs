use rand::Rng;

pub const CONFETTI_COLORS: [&str; 8] = [
    "#f48bb0", "#f9a8c9", "#ffc8d8", "#ff85a1", "#e8608f", "#c63a73", "#ffb3cc", "#ff5c8d",
];

// Sway never runs faster than this, however short the fall.
const MIN_SWAY_MS: f64 = 1_500.0;

/// One piece of confetti. Only its position in the batch identifies it.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Horizontal start, percent of the overlay width.
    pub left: f64,
    pub delay_ms: u32,
    pub duration_ms: u32,
    pub width_px: u32,
    pub height_px: u32,
    pub color: &'static str,
    pub rotate_deg: u32,
}

impl Particle {
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            left: rng.random_range(0.0..100.0),
            delay_ms: rng.random_range(0..1_400),
            duration_ms: rng.random_range(4_000..7_000),
            width_px: rng.random_range(6..14),
            height_px: rng.random_range(4..10),
            color: CONFETTI_COLORS[rng.random_range(0..CONFETTI_COLORS.len())],
            rotate_deg: rng.random_range(0..360),
        }
    }

    /// Half the fall duration, fractional ms allowed.
    pub fn sway_ms(&self) -> f64 {
        (f64::from(self.duration_ms) * 0.5).max(MIN_SWAY_MS)
    }

    /// Inline style; the fall and sway keyframes live in the overlay CSS.
    pub fn style(&self) -> String {
        format!(
            "left: {left}%; width: {w}px; height: {h}px; background-color: {color}; \
             animation-duration: {fall}ms, {sway}ms; animation-delay: {delay}ms, {delay}ms; \
             transform: rotate({rot}deg);",
            left = self.left,
            w = self.width_px,
            h = self.height_px,
            color = self.color,
            fall = self.duration_ms,
            sway = self.sway_ms(),
            delay = self.delay_ms,
            rot = self.rotate_deg,
        )
    }
}

pub fn make_confetti<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Particle> {
    (0..count).map(|_| Particle::random(rng)).collect()
}

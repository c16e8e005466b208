//! Floating score labels shown where an item was clicked.

/// Height gained per frame.
const RISE_PER_FRAME: f64 = 1.;
/// Opacity lost per frame.
const FADE_PER_FRAME: f64 = 0.02;

/// Colour family of a particle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Tone {
    /// Points were gained.
    Gain,
    /// Wildlife was hit.
    Harm,
    /// Polluted water was hit.
    Pollution,
}

/// Label rising and fading over the play field.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Particle {
    /// Horizontal position.
    pub(crate) x: f64,
    /// Vertical position.
    pub(crate) y: f64,
    /// Text shown, such as `+10`.
    pub(crate) label: String,
    /// Colour family.
    pub(crate) tone: Tone,
    /// Remaining opacity, starting at one.
    pub(crate) opacity: f64,
}

impl Particle {
    /// Creates a fully opaque particle.
    pub(crate) const fn new(x: f64, y: f64, label: String, tone: Tone) -> Self {
        Self {
            x,
            y,
            label,
            tone,
            opacity: 1.,
        }
    }

    /// Advances the particle by one frame.
    pub(crate) fn fade(&mut self) {
        self.y -= RISE_PER_FRAME;
        self.opacity -= FADE_PER_FRAME;
    }

    /// Returns whether the particle should still be drawn.
    pub(crate) fn is_visible(&self) -> bool {
        self.opacity > 0.
    }
}

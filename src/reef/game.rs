//! State machine of the reef game.

use std::time::Duration;

use log::{debug, info};
use rand::Rng;

use super::{
    item::{Category, Item, ItemKind},
    particle::{Particle, Tone},
};

/// Health at the start of a run.
pub(crate) const MAX_HEALTH: u32 = 100;
/// Score needed to climb one level.
pub(crate) const POINTS_PER_LEVEL: u32 = 50;
/// Highest level; reaching its score threshold wins the run.
pub(crate) const MAX_LEVEL: u32 = 5;
/// Frames during which the level-up banner stays visible, about three seconds.
const LEVEL_UP_BANNER_FRAMES: u32 = 180;
/// Leftmost spawn column.
const SPAWN_MARGIN: f64 = 5.;
/// Width of the band items spawn in.
const SPAWN_SPREAD: f64 = 80.;
/// Largest random addition to the fall speed of a new item.
const SPEED_JITTER: f64 = 0.3;

/// Phase of a reef run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ReefPhase {
    /// Briefing screen.
    Menu,
    /// Items fall and clicks count.
    Playing,
    /// Health ran out.
    GameOver,
    /// The final score threshold was reached.
    Victory,
}

/// Whole state of a reef run.
#[derive(Debug)]
pub(crate) struct ReefGame {
    /// Current phase.
    phase: ReefPhase,
    /// Current score; never negative.
    score: u32,
    /// Remaining reef health, from zero to [`MAX_HEALTH`].
    health: u32,
    /// Current level, from one to [`MAX_LEVEL`].
    level: u32,
    /// Items currently falling.
    items: Vec<Item>,
    /// Score labels currently floating.
    particles: Vec<Particle>,
    /// Identifier handed to the next spawned item.
    next_id: u64,
    /// Frames left for the level-up banner.
    banner_frames: u32,
}

impl Default for ReefGame {
    fn default() -> Self {
        Self::new()
    }
}

impl ReefGame {
    /// Creates a run sitting on the briefing screen.
    pub(crate) const fn new() -> Self {
        Self {
            phase: ReefPhase::Menu,
            score: 0,
            health: MAX_HEALTH,
            level: 1,
            items: Vec::new(),
            particles: Vec::new(),
            next_id: 0,
            banner_frames: 0,
        }
    }

    /// Returns the current phase.
    pub(crate) const fn phase(&self) -> ReefPhase {
        self.phase
    }

    /// Returns whether the frame loop and the spawner should be running.
    pub(crate) const fn is_playing(&self) -> bool {
        matches!(self.phase, ReefPhase::Playing)
    }

    /// Returns the current score.
    pub(crate) const fn score(&self) -> u32 {
        self.score
    }

    /// Returns the remaining reef health.
    pub(crate) const fn health(&self) -> u32 {
        self.health
    }

    /// Returns the current level.
    pub(crate) const fn level(&self) -> u32 {
        self.level
    }

    /// Returns the falling items.
    pub(crate) fn items(&self) -> &[Item] {
        &self.items
    }

    /// Returns the floating score labels.
    pub(crate) fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Returns whether the level-up banner should be shown.
    pub(crate) const fn shows_level_up(&self) -> bool {
        self.banner_frames > 0
    }

    /// Returns the score still missing to climb a level, or zero on the last level.
    pub(crate) const fn points_to_next_level(&self) -> u32 {
        if self.level < MAX_LEVEL {
            POINTS_PER_LEVEL - self.score % POINTS_PER_LEVEL
        } else {
            0
        }
    }

    /// Returns the time between two spawns at the current level.
    pub(crate) fn spawn_interval(&self) -> Duration {
        let millis = 1400_u64.saturating_sub(u64::from(self.level) * 150).max(600);
        Duration::from_millis(millis)
    }

    /// Returns the base fall speed at the current level.
    const fn speed_multiplier(&self) -> f64 {
        match self.level {
            2 => 0.6,
            3 => 0.8,
            4 => 1.,
            5 => 1.3,
            _ => 0.4,
        }
    }

    /// Starts a fresh run from any phase.
    pub(crate) fn start(&mut self) {
        *self = Self {
            phase: ReefPhase::Playing,
            ..Self::new()
        };
        info!("reef run started");
    }

    /// Returns to the briefing screen with fresh values.
    pub(crate) fn reset(&mut self) {
        *self = Self::new();
    }

    /// Drops a random item at the top of the field.
    pub(crate) fn spawn<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if !self.is_playing() {
            return;
        }

        let kind = ItemKind::random(rng);
        let x = SPAWN_MARGIN + rng.gen::<f64>() * SPAWN_SPREAD;
        let speed = self.speed_multiplier() + rng.gen::<f64>() * SPEED_JITTER;
        let _ = self.push_item(kind, x, speed);
    }

    /// Adds an item of `kind` at column `x` and returns its identifier.
    pub(crate) fn push_item(&mut self, kind: ItemKind, x: f64, speed: f64) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Item::new(id, kind, x, speed));
        id
    }

    /// Advances falling items, particles and the banner by one frame.
    ///
    /// Items that fall past the reef floor are removed and deal their damage.
    pub(crate) fn frame(&mut self) {
        if !self.is_playing() {
            return;
        }

        for item in &mut self.items {
            item.fall();
        }
        let damage: u32 = self
            .items
            .iter()
            .filter(|item| item.has_landed())
            .map(|item| item.attributes.damage)
            .sum();
        self.items.retain(|item| !item.has_landed());
        if damage > 0 {
            self.health = self.health.saturating_sub(damage);
            debug!("litter reached the reef: -{damage} health, {} left", self.health);
        }

        for particle in &mut self.particles {
            particle.fade();
        }
        self.particles.retain(Particle::is_visible);
        self.banner_frames = self.banner_frames.saturating_sub(1);

        self.check_health();
    }

    /// Handles a click at `(x, y)` in field coordinates.
    ///
    /// The first item under the pointer is removed and its effect applied. Returns the kind of the
    /// item hit, if any.
    pub(crate) fn click(&mut self, x: f64, y: f64) -> Option<ItemKind> {
        if !self.is_playing() {
            return None;
        }

        let index = self.items.iter().position(|item| item.is_hit(x, y))?;
        let item = self.items.remove(index);
        let attributes = item.attributes;

        let (label, tone) = match attributes.category {
            Category::Litter => {
                self.score += attributes.points;
                (format!("+{}", attributes.points), Tone::Gain)
            }
            Category::MarineLife => {
                self.score = self.score.saturating_sub(attributes.penalty);
                (format!("-{}", attributes.penalty), Tone::Harm)
            }
            Category::Pollution => {
                self.score = self.score.saturating_sub(attributes.penalty);
                (format!("-{}", attributes.penalty), Tone::Pollution)
            }
        };
        self.health = self
            .health
            .saturating_sub(attributes.category.click_harm());
        self.particles
            .push(Particle::new(item.x, item.y, label, tone));
        debug!(
            "clicked {:?} #{}: score {}, health {}",
            item.kind, item.id, self.score, self.health
        );

        self.check_progress();
        self.check_health();

        Some(item.kind)
    }

    /// Raises the level when the score crossed a threshold and detects the win.
    fn check_progress(&mut self) {
        let reached = self.score / POINTS_PER_LEVEL + 1;
        if reached > self.level && reached <= MAX_LEVEL && self.score > 0 {
            self.level = reached;
            self.banner_frames = LEVEL_UP_BANNER_FRAMES;
            info!("reef level {} reached with {} points", self.level, self.score);
        }

        if self.score >= POINTS_PER_LEVEL * MAX_LEVEL && self.is_playing() {
            self.phase = ReefPhase::Victory;
            info!("reef run won with {} points", self.score);
        }
    }

    /// Ends the run when the reef health is gone.
    fn check_health(&mut self) {
        if self.health == 0 && self.is_playing() {
            self.phase = ReefPhase::GameOver;
            info!("reef run lost with {} points", self.score);
        }
    }
}

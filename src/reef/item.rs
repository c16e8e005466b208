//! Falling items and their fixed attributes.

use rand::{seq::SliceRandom as _, Rng};

/// Vertical position at which new items appear, just above the visible field.
const SPAWN_Y: f64 = -10.;
/// Extent of the play field on both axes.
pub(crate) const FIELD_EXTENT: f64 = 100.;
/// Half-width of the square around an item that registers a click.
const HIT_RADIUS: f64 = 8.;

/// Broad family an item belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Category {
    /// Rubbish to be clicked away.
    Litter,
    /// Polluted water; clicking it hurts.
    Pollution,
    /// Reef wildlife; clicking it hurts.
    MarineLife,
}

impl Category {
    /// Returns the health lost when the player clicks an item of this category.
    pub(crate) const fn click_harm(self) -> u32 {
        match self {
            Self::Litter => 0,
            Self::Pollution => 3,
            Self::MarineLife => 5,
        }
    }
}

/// Fixed attributes of an item kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Attributes {
    /// Family of the item.
    pub(crate) category: Category,
    /// Score gained when clicked.
    pub(crate) points: u32,
    /// Score lost when clicked.
    pub(crate) penalty: u32,
    /// Health lost when the item reaches the reef floor.
    pub(crate) damage: u32,
    /// Text drawn for the item.
    pub(crate) glyph: &'static str,
}

/// Every kind of falling item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ItemKind {
    /// Generic rubbish.
    Trash,
    /// Glass bottle.
    Bottle,
    /// Plastic bag.
    Bag,
    /// Tin can.
    Can,
    /// Plastic straw.
    Straw,
    /// Patch of polluted water.
    Pollution,
    /// Colourful reef fish.
    TropicalFish,
    /// Plain fish.
    Fish,
    /// Pufferfish.
    Pufferfish,
    /// Sea turtle.
    Turtle,
}

impl ItemKind {
    /// Every kind, grouped by category.
    pub(crate) const ALL: [Self; 10] = [
        Self::Trash,
        Self::Bottle,
        Self::Bag,
        Self::Can,
        Self::Straw,
        Self::Pollution,
        Self::TropicalFish,
        Self::Fish,
        Self::Pufferfish,
        Self::Turtle,
    ];
    /// Kinds in the litter category.
    const LITTER: [Self; 5] = [Self::Trash, Self::Bottle, Self::Bag, Self::Can, Self::Straw];
    /// Kinds in the marine life category.
    const MARINE_LIFE: [Self; 4] = [Self::TropicalFish, Self::Fish, Self::Pufferfish, Self::Turtle];

    /// Returns the fixed attributes of the kind.
    pub(crate) const fn attributes(self) -> Attributes {
        let (category, points, penalty, damage, glyph) = match self {
            Self::Trash => (Category::Litter, 10, 0, 5, "[#]"),
            Self::Bottle => (Category::Litter, 15, 0, 7, "[b]"),
            Self::Bag => (Category::Litter, 12, 0, 6, "[&]"),
            Self::Can => (Category::Litter, 10, 0, 5, "[u]"),
            Self::Straw => (Category::Litter, 8, 0, 4, "[/]"),
            Self::Pollution => (Category::Pollution, 0, 5, 3, "~*~"),
            Self::TropicalFish => (Category::MarineLife, 0, 10, 0, "><>"),
            Self::Fish => (Category::MarineLife, 0, 10, 0, "<><"),
            Self::Pufferfish => (Category::MarineLife, 0, 15, 0, "(o)"),
            Self::Turtle => (Category::MarineLife, 0, 20, 0, "{@}"),
        };

        Attributes {
            category,
            points,
            penalty,
            damage,
            glyph,
        }
    }

    /// Draws a kind: litter 65% of the time, marine life 20%, pollution the rest.
    pub(crate) fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let roll: f64 = rng.gen();
        let pool: &[Self] = if roll < 0.65 {
            &Self::LITTER
        } else if roll < 0.85 {
            &Self::MARINE_LIFE
        } else {
            &[Self::Pollution]
        };

        pool.choose(rng).copied().unwrap_or(Self::Pollution)
    }
}

/// Item falling through the play field.
///
/// Coordinates live in a normalised `0..=100` field with `y` growing downwards.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Item {
    /// Identifier, unique within a run.
    pub(crate) id: u64,
    /// Kind of the item.
    pub(crate) kind: ItemKind,
    /// Attributes resolved from [`kind`](Item::kind) when the item was built.
    pub(crate) attributes: Attributes,
    /// Horizontal position.
    pub(crate) x: f64,
    /// Vertical position.
    pub(crate) y: f64,
    /// Distance fallen per frame.
    pub(crate) speed: f64,
}

impl Item {
    /// Builds an item entering the field from above at column `x`.
    pub(crate) const fn new(id: u64, kind: ItemKind, x: f64, speed: f64) -> Self {
        Self {
            id,
            kind,
            attributes: kind.attributes(),
            x,
            y: SPAWN_Y,
            speed,
        }
    }

    /// Returns whether a click at `(x, y)` lands on the item.
    pub(crate) fn is_hit(&self, x: f64, y: f64) -> bool {
        (self.x - x).abs() < HIT_RADIUS && (self.y - y).abs() < HIT_RADIUS
    }

    /// Moves the item down by its speed.
    pub(crate) fn fall(&mut self) {
        self.y += self.speed;
    }

    /// Returns whether the item went past the bottom of the field.
    pub(crate) fn has_landed(&self) -> bool {
        self.y > FIELD_EXTENT
    }
}

//! Static level table for the maze game.

/// Read-only configuration of a single maze level.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct LevelDescriptor {
    /// Side length of the generated board.
    pub(crate) size: usize,
    /// Countdown budget in seconds.
    pub(crate) time_limit: u32,
    /// Number of dirt cells the generator aims for.
    pub(crate) dirt_count: usize,
    /// Number of seed cells the generator aims for.
    pub(crate) seed_count: usize,
    /// Short text shown before the level starts.
    pub(crate) briefing: &'static str,
    /// Optional illustration reference shown alongside the briefing.
    pub(crate) illustration: Option<&'static str>,
}

/// Levels of the maze game, in play order.
pub(crate) static LEVELS: [LevelDescriptor; 4] = [
    LevelDescriptor {
        size: 9,
        time_limit: 40,
        dirt_count: 5,
        seed_count: 3,
        briefing: "In 2015 the Fundao tailings dam near Mariana collapsed and released millions of \
                   cubic metres of mud over rivers, homes and villages. Cleaning it up is the first \
                   step towards giving the region back its life.",
        illustration: Some(
            "https://images.unsplash.com/photo-1611273426858-450d8e3c9fce?w=600&h=400&fit=crop",
        ),
    },
    LevelDescriptor {
        size: 11,
        time_limit: 40,
        dirt_count: 8,
        seed_count: 5,
        briefing: "The mud reached the Doce river, harming its water, its fish and everyone living \
                   off them. Removing waste and replanting native vegetation restores the balance.",
        illustration: Some(
            "https://images.unsplash.com/photo-1621451537084-482c73073a0f?w=600&h=400&fit=crop",
        ),
    },
    LevelDescriptor {
        size: 13,
        time_limit: 40,
        dirt_count: 12,
        seed_count: 7,
        briefing: "Contaminated soil keeps hurting animals and people for years. Every patch you \
                   clean lets nature recover a little faster.",
        illustration: Some(
            "https://images.unsplash.com/photo-1470071459604-3b5ec3a7fe05?w=600&h=400&fit=crop",
        ),
    },
    LevelDescriptor {
        size: 15,
        time_limit: 50,
        dirt_count: 15,
        seed_count: 10,
        briefing: "Bringing the river back takes sustained effort. Awareness, clean-up work and \
                   reforestation are what prevent the next disaster.",
        illustration: Some(
            "https://images.unsplash.com/photo-1542601906990-b4d3fb778b09?w=600&h=400&fit=crop",
        ),
    },
];

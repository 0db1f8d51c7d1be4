use crate::types::TeamConfig;

/// The built-in roster: five fantasy teams, each with a motto and an image
/// under `assets/`.
pub fn default_teams() -> Vec<TeamConfig> {
    vec![
        TeamConfig::new("Elves", "Eternity behind us, victory within us!")
            .with_image("assets/elves.jpg"),
        TeamConfig::new("Orcs", "The stronger one is the righter one!")
            .with_image("assets/orcs.jpg"),
        TeamConfig::new("Dwarves", "Stone is our fortress, steel is our song!")
            .with_image("assets/dwarves.jpg"),
        TeamConfig::new("Halflings", "Small but bold, and luck is great!")
            .with_image("assets/halfings.jpg"),
        TeamConfig::new("Dragonborn", "Fire in the blood, glory in deeds!")
            .with_image("assets/dragons.jpg"),
    ]
}

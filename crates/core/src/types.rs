use slotmap::new_key_type;

new_key_type! {
    pub struct EntityId;
    pub struct ItemId;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ActorKind {
    Player,
    Orc,
    Troll,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ItemKind {
    HealthPotion,
    FireballScroll,
    ConfusionScroll,
    LightningScroll,
}

/// Fatal configuration errors caught before generation starts.
/// Generation itself assumes a validated config and never re-checks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    RoomMinBelowShapeFloor,
    RoomMinAboveMax,
    RoomMaxExceedsMap,
    MapTooSmall,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            ConfigError::RoomMinBelowShapeFloor => "room_min_size must be at least 3",
            ConfigError::RoomMinAboveMax => "room_min_size must not exceed room_max_size",
            ConfigError::RoomMaxExceedsMap => {
                "room_max_size (plus column-room growth) must fit inside the map"
            }
            ConfigError::MapTooSmall => "map dimensions are too small to hold any room",
        };
        f.write_str(text)
    }
}

impl std::error::Error for ConfigError {}

/// A single player-facing action failed; state is unchanged and the
/// message belongs in the log, not a crash.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionError {
    Impossible(String),
}

impl std::fmt::Display for ActionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionError::Impossible(text) => f.write_str(text),
        }
    }
}

impl std::error::Error for ActionError {}

/// Query value meaning "no constraint" for a filter dimension.
pub const FILTER_ANY: &str = "all";

/// Colors offered by the filter panel. Stored colors are free text, so this list is advisory.
pub const COLOR_PALETTE: &[&str] = &[
    "orange", "black", "white", "gray", "calico", "tabby", "siamese",
];

pub const PERSONALITY_TRAITS: &[&str] = &["playful", "calm", "affectionate", "independent"];

pub const GOOD_WITH_OPTIONS: &[&str] = &["children", "dogs", "other-cats"];

pub const FAVORITES_KEY_PREFIX: &str = "favorites";

//! Traditional names for the full moon of each calendar month.

/// Month-indexed full moon names (January first), following the common
/// North American almanac list.
pub const FULL_MOON_NAMES: [&str; 12] = [
    "Wolf Moon",
    "Snow Moon",
    "Worm Moon",
    "Pink Moon",
    "Flower Moon",
    "Strawberry Moon",
    "Buck Moon",
    "Sturgeon Moon",
    "Harvest Moon",
    "Hunter's Moon",
    "Beaver Moon",
    "Cold Moon",
];

/// Looks up the traditional name for a full moon in the given calendar
/// month (1-12). Returns `None` for out-of-range months.
pub fn full_moon_name(month: u8) -> Option<&'static str> {
    let index = month.checked_sub(1)? as usize;
    FULL_MOON_NAMES.get(index).copied()
}

//! Countries and the stable country index.
//!
//! ## CountryId
//!
//! Type-safe 0-based country index. This is the cross-entity join key used
//! by players, attack targets, and AI bindings. It is **not** a position in
//! any transient array: a match with fewer than three opponents plays with a
//! subset of the canonical roster, and lookups go through
//! [`Game::country`](crate::state::Game::country)-style searches by id.
//!
//! ## Country
//!
//! A country owns a fixed, ordered list of regions created at init time.
//! Regions are never added or removed afterward, only mutated in place
//! through the guarded operations here.

use serde::{Deserialize, Serialize};

use super::region::Region;

/// Number of regions every country starts with.
pub const REGIONS_PER_COUNTRY: usize = 5;

/// Stable 0-based country index.
///
/// Canonical roster order: USA(0), Iran(1), China(2), North Korea(3).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CountryId(pub u8);

impl CountryId {
    /// Create a new country id.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for CountryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Country {}", self.0)
    }
}

/// A simulated nation: a name, a stable id, and a fixed set of regions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Country {
    /// Stable country index (the join key).
    pub id: CountryId,

    /// Display name.
    pub name: String,

    /// Ordered regions; the position in this list is the region index and is
    /// stable for the whole match.
    regions: Vec<Region>,
}

impl Country {
    /// Create a country with its full complement of regions.
    ///
    /// Region positions follow the fixed 2x2-grid-of-rows layout: countries
    /// occupy grid cells by id, regions line up horizontally within a cell.
    #[must_use]
    pub fn new(name: impl Into<String>, id: CountryId) -> Self {
        let regions = (0..REGIONS_PER_COUNTRY)
            .map(|region_index| Region::new(region_position(id, region_index)))
            .collect();

        Self {
            id,
            name: name.into(),
            regions,
        }
    }

    /// All regions, in stable index order.
    #[must_use]
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Look up one region by index.
    #[must_use]
    pub fn region(&self, index: usize) -> Option<&Region> {
        self.regions.get(index)
    }

    /// Sum of alive regions' income.
    #[must_use]
    pub fn total_income(&self) -> u32 {
        self.regions.iter().map(Region::income).sum()
    }

    /// Number of regions still alive.
    #[must_use]
    pub fn alive_region_count(&self) -> usize {
        self.regions.iter().filter(|r| r.is_alive()).count()
    }

    /// A country is destroyed once every region is destroyed.
    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.alive_region_count() == 0
    }

    /// Destroy a region in place. Returns `false` for an out-of-range index
    /// or a region that was already destroyed.
    pub fn destroy_region(&mut self, index: usize) -> bool {
        match self.regions.get_mut(index) {
            Some(region) if region.is_alive() => {
                region.destroy();
                true
            }
            _ => false,
        }
    }

    /// Whether an air defense purchase would be accepted for this region.
    #[must_use]
    pub fn can_add_air_defense(&self, index: usize) -> bool {
        self.regions
            .get(index)
            .is_some_and(Region::can_add_air_defense)
    }

    /// Install an air defense on a region. Guarded and idempotent: returns
    /// `false` (no state change) for out-of-range, destroyed, or
    /// already-defended regions.
    pub fn add_air_defense(&mut self, index: usize) -> bool {
        match self.regions.get_mut(index) {
            Some(region) => region.add_air_defense(),
            None => false,
        }
    }

    /// Atomic check-and-clear of a region's air defense during resolution.
    /// Returns `true` if a defense was consumed (the attack is blocked).
    pub fn consume_air_defense(&mut self, index: usize) -> bool {
        match self.regions.get_mut(index) {
            Some(region) => region.consume_air_defense(),
            None => false,
        }
    }
}

/// Build the roster for a match with the given opponent count.
///
/// The human's country (USA, id 0) and North Korea (id 3) always
/// participate; extra opponents fill in from the remaining roster in fixed
/// priority order. Counts outside 1..=3 fall back to the full roster.
#[must_use]
pub fn roster(opponent_count: u8) -> Vec<Country> {
    let ids: &[(&str, u8)] = match opponent_count {
        1 => &[("USA", 0), ("North Korea", 3)],
        2 => &[("USA", 0), ("Iran", 1), ("North Korea", 3)],
        _ => &[("USA", 0), ("Iran", 1), ("China", 2), ("North Korea", 3)],
    };

    ids.iter()
        .map(|&(name, id)| Country::new(name, CountryId::new(id)))
        .collect()
}

fn region_position(country: CountryId, region_index: usize) -> (f32, f32) {
    const REGION_SIZE: f32 = 60.0;
    const COUNTRY_SPACING: f32 = 100.0;

    let country_row = country.index() / 2;
    let country_col = country.index() % 2;

    let x = country_col as f32 * (REGION_SIZE * REGIONS_PER_COUNTRY as f32 + COUNTRY_SPACING)
        + region_index as f32 * REGION_SIZE;
    let y = country_row as f32 * (REGION_SIZE + COUNTRY_SPACING);

    (x, y)
}

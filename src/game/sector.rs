//! Sector generation
//!
//! Sectors are not part of a persistent galaxy graph. Every move rolls a
//! fresh record for the destination.

use rand::Rng;

use crate::model::{sector_number, Sector};

/// Regions a generated sector can land in
pub const REGIONS: [&str; 2] = ["Inner Belt", "Core Ring"];

/// Highest sector number a generated connection can point at
pub const MAX_SECTOR_NUMBER: u32 = 100;

const PORT_CHANCE: f64 = 0.3;
const PLANET_CHANCE: f64 = 0.1;
const CONNECTION_COUNT: usize = 2;
const MAX_OTHER_PLAYERS: u32 = 2;

/// Roll a sector record for `sector_id`
pub fn generate_sector<R: Rng + ?Sized>(sector_id: &str, rng: &mut R) -> Sector {
    let region = if rng.gen_bool(0.5) { REGIONS[0] } else { REGIONS[1] };

    let connected_sectors = (0..CONNECTION_COUNT)
        .map(|_| format!("sector_{}", rng.gen_range(1..=MAX_SECTOR_NUMBER)))
        .collect();

    Sector {
        id: sector_id.to_string(),
        region: region.to_string(),
        name: format!("Sector {}", sector_number(sector_id)),
        has_port: rng.gen_bool(PORT_CHANCE),
        has_planet: rng.gen_bool(PLANET_CHANCE),
        connected_sectors,
        players: rng.gen_range(0..=MAX_OTHER_PLAYERS),
    }
}

/// Home sector every new game starts in
pub fn starting_sector() -> Sector {
    Sector {
        id: "sector_1".to_string(),
        region: "FedSpace".to_string(),
        name: "Stardock Alpha".to_string(),
        has_port: true,
        has_planet: false,
        connected_sectors: vec!["sector_2".to_string(), "sector_3".to_string()],
        players: 1,
    }
}

//! Ship catalogue and the garage shop

use thiserror::Error;

use crate::profile::Profile;

/// Hull silhouette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HullShape {
    Interceptor,
    Cruiser,
    Scout,
    Dreadnought,
    Vanguard,
}

/// A purchasable ship
#[derive(Debug, Clone, PartialEq)]
pub struct ShipDesign {
    pub id: u32,
    pub name: &'static str,
    pub price: u64,
    /// 0xRRGGBB
    pub primary_color: u32,
    /// 0xRRGGBB
    pub secondary_color: u32,
    pub shape: HullShape,
    pub features: &'static [&'static str],
}

pub const SHIP_DESIGNS: &[ShipDesign] = &[
    ShipDesign {
        id: 0,
        name: "Sputnik-Prime",
        price: 0,
        primary_color: 0x94a3b8,
        secondary_color: 0xef4444,
        shape: HullShape::Scout,
        features: &["Standard Navigation", "Basic Hull"],
    },
    ShipDesign {
        id: 1,
        name: "Neon Drifter",
        price: 400,
        primary_color: 0x3b82f6,
        secondary_color: 0x60a5fa,
        shape: HullShape::Interceptor,
        features: &["Adaptive Shield v1", "Turbo Thrusters"],
    },
    ShipDesign {
        id: 2,
        name: "Cosmic Flare",
        price: 900,
        primary_color: 0xf59e0b,
        secondary_color: 0xfbbf24,
        shape: HullShape::Cruiser,
        features: &["Magnetic Coil v1", "Solar Sails"],
    },
    ShipDesign {
        id: 3,
        name: "Void Stalker",
        price: 1800,
        primary_color: 0x1e293b,
        secondary_color: 0xa855f7,
        shape: HullShape::Vanguard,
        features: &["Titanium Plating", "Dual-Layer Shielding"],
    },
    ShipDesign {
        id: 4,
        name: "Solar Zenith",
        price: 3500,
        primary_color: 0xef4444,
        secondary_color: 0xf97316,
        shape: HullShape::Dreadnought,
        features: &["Tri-Phase Shield", "Advanced Magnetics"],
    },
    ShipDesign {
        id: 5,
        name: "Quantum Ghost",
        price: 7000,
        primary_color: 0x10b981,
        secondary_color: 0x34d399,
        shape: HullShape::Scout,
        features: &["Hyper-Shield v3", "Infinite Magnetron"],
    },
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GarageError {
    #[error("no ship with id {0}")]
    UnknownShip(u32),

    #[error("ship {0} is already owned")]
    AlreadyOwned(u32),

    #[error("ship {0} is not owned")]
    NotOwned(u32),

    #[error("need {price} coins, have {balance}")]
    InsufficientCoins { price: u64, balance: u64 },
}

pub fn design(id: u32) -> Option<&'static ShipDesign> {
    SHIP_DESIGNS.iter().find(|d| d.id == id)
}

/// Selected design, falling back to the starter ship for unknown ids
pub fn selected_design(profile: &Profile) -> &'static ShipDesign {
    design(profile.selected_ship).unwrap_or(&SHIP_DESIGNS[0])
}

/// Buy a ship and fly it straight away
pub fn purchase(profile: &mut Profile, id: u32) -> Result<(), GarageError> {
    let ship = design(id).ok_or(GarageError::UnknownShip(id))?;
    if profile.owns(id) {
        return Err(GarageError::AlreadyOwned(id));
    }
    if profile.coins < ship.price {
        return Err(GarageError::InsufficientCoins {
            price: ship.price,
            balance: profile.coins,
        });
    }

    profile.coins -= ship.price;
    profile.owned_ships.push(id);
    profile.selected_ship = id;
    log::info!("Purchased {} for {} coins", ship.name, ship.price);
    Ok(())
}

/// Switch to an owned ship
pub fn select(profile: &mut Profile, id: u32) -> Result<(), GarageError> {
    design(id).ok_or(GarageError::UnknownShip(id))?;
    if !profile.owns(id) {
        return Err(GarageError::NotOwned(id));
    }
    profile.selected_ship = id;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogue_ids_are_unique_and_sorted_by_price() {
        for (i, d) in SHIP_DESIGNS.iter().enumerate() {
            assert_eq!(d.id as usize, i);
        }
        assert!(SHIP_DESIGNS.windows(2).all(|w| w[0].price <= w[1].price));
        assert_eq!(SHIP_DESIGNS[0].price, 0);
    }

    #[test]
    fn purchase_deducts_and_selects() {
        let mut profile = Profile {
            coins: 1000,
            ..Profile::default()
        };
        purchase(&mut profile, 2).unwrap();
        assert_eq!(profile.coins, 100);
        assert_eq!(profile.owned_ships, vec![0, 2]);
        assert_eq!(profile.selected_ship, 2);
        assert_eq!(selected_design(&profile).name, "Cosmic Flare");
    }

    #[test]
    fn purchase_rejects_poor_owned_and_unknown() {
        let mut profile = Profile {
            coins: 399,
            ..Profile::default()
        };
        assert_eq!(
            purchase(&mut profile, 1),
            Err(GarageError::InsufficientCoins {
                price: 400,
                balance: 399
            })
        );
        assert_eq!(purchase(&mut profile, 0), Err(GarageError::AlreadyOwned(0)));
        assert_eq!(purchase(&mut profile, 42), Err(GarageError::UnknownShip(42)));
        assert_eq!(profile.coins, 399);
        assert_eq!(profile.owned_ships, vec![0]);
    }

    #[test]
    fn select_requires_ownership() {
        let mut profile = Profile::default();
        assert_eq!(select(&mut profile, 3), Err(GarageError::NotOwned(3)));
        profile.owned_ships.push(3);
        select(&mut profile, 3).unwrap();
        assert_eq!(profile.selected_ship, 3);
    }

    #[test]
    fn unknown_selection_falls_back_to_starter() {
        let profile = Profile {
            selected_ship: 99,
            ..Profile::default()
        };
        assert_eq!(selected_design(&profile).id, 0);
    }
}

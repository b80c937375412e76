//! Gacha banner definitions: costs, rarity weights and hero pools.
//!
//! Weights in each table sum to 1.0 and are walked in declaration order
//! (lowest tier first) by the summon roll.

use crate::heroes::Rarity;

#[derive(Debug, Clone, Copy)]
pub struct Banner {
    pub id: &'static str,
    pub name: &'static str,
    pub cost: f64,
    /// Fraction of the banner cost refunded per duplicate pull.
    pub refund_rate: f64,
    /// Rarity weights in cumulative-walk order.
    pub rates: &'static [(Rarity, f64)],
    pub pools: &'static [(Rarity, &'static [&'static str])],
}

impl Banner {
    pub fn pool_for(&self, rarity: Rarity) -> &'static [&'static str] {
        self.pools
            .iter()
            .find(|(r, _)| *r == rarity)
            .map(|(_, pool)| *pool)
            .unwrap_or(&[])
    }
}

const STANDARD_RATES: &[(Rarity, f64)] = &[
    (Rarity::Common, 0.66),
    (Rarity::Rare, 0.22),
    (Rarity::Epic, 0.078),
    (Rarity::Legend, 0.03),
    (Rarity::Mythic, 0.01),
    (Rarity::Secret, 0.002),
];

const ULTIMATE_RATES: &[(Rarity, f64)] = &[
    (Rarity::Common, 0.656),
    (Rarity::Rare, 0.22),
    (Rarity::Epic, 0.08),
    (Rarity::Legend, 0.03),
    (Rarity::Mythic, 0.012),
    (Rarity::Secret, 0.002),
];

const TITAN_RATES: &[(Rarity, f64)] = &[
    (Rarity::Common, 0.60),
    (Rarity::Rare, 0.25),
    (Rarity::Epic, 0.09),
    (Rarity::Legend, 0.04),
    (Rarity::Mythic, 0.015),
    (Rarity::Secret, 0.005),
];

pub fn all_banners() -> &'static [Banner] {
    &[
        Banner {
            id: "emberfall",
            name: "Banner 1: Emberfall",
            cost: 1_000.0,
            refund_rate: 0.2,
            rates: STANDARD_RATES,
            pools: &[
                (Rarity::Common, &["flint", "sable"]),
                (Rarity::Rare, &["garnet", "orin"]),
                (Rarity::Epic, &["thorne"]),
                (Rarity::Legend, &["isolde"]),
                (Rarity::Mythic, &["aurelius"]),
                (Rarity::Secret, &["nyx"]),
            ],
        },
        Banner {
            id: "allstars",
            name: "Banner 2: All Stars",
            cost: 50_000.0,
            refund_rate: 0.2,
            rates: STANDARD_RATES,
            pools: &[
                (Rarity::Common, &["borin", "tessa"]),
                (Rarity::Rare, &["ragnar", "mira"]),
                (Rarity::Epic, &["kael"]),
                (Rarity::Legend, &["sylas"]),
                (Rarity::Mythic, &["ignatius"]),
                (Rarity::Secret, &["vesper"]),
            ],
        },
        Banner {
            id: "ultimate",
            name: "Banner 3: Ultimate Saga",
            cost: 250_000.0,
            refund_rate: 0.2,
            rates: ULTIMATE_RATES,
            pools: &[
                (Rarity::Common, &["durga", "hollis"]),
                (Rarity::Rare, &["lazlo"]),
                (Rarity::Epic, &["seraphine"]),
                (Rarity::Legend, &["aldric", "morwen"]),
                (Rarity::Mythic, &["pyrrhus"]),
                (Rarity::Secret, &["umbra"]),
            ],
        },
        Banner {
            id: "titan",
            name: "Banner 4: Titan Era",
            cost: 500_000.0,
            refund_rate: 0.2,
            rates: TITAN_RATES,
            pools: &[
                (Rarity::Common, &["petra", "galen"]),
                (Rarity::Rare, &["rook", "wren", "castor"]),
                (Rarity::Epic, &["onyxia"]),
                (Rarity::Legend, &["stellan", "branwen"]),
                (Rarity::Mythic, &["titania"]),
                (Rarity::Secret, &["erebus", "nocturne"]),
            ],
        },
    ]
}

pub fn banner_by_id(id: &str) -> Option<&'static Banner> {
    all_banners().iter().find(|b| b.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heroes::hero_by_id;

    #[test]
    fn test_rates_sum_to_one() {
        for banner in all_banners() {
            let total: f64 = banner.rates.iter().map(|(_, w)| w).sum();
            assert!(
                (total - 1.0).abs() < 1e-9,
                "banner {} rates sum to {total}",
                banner.id
            );
        }
    }

    #[test]
    fn test_every_pool_hero_exists_with_matching_rarity() {
        for banner in all_banners() {
            for (rarity, pool) in banner.pools {
                assert!(!pool.is_empty(), "{}: empty {rarity} pool", banner.id);
                for id in *pool {
                    let hero = hero_by_id(id)
                        .unwrap_or_else(|| panic!("{}: unknown hero {id}", banner.id));
                    assert_eq!(hero.rarity, *rarity, "{id} rarity mismatch");
                }
            }
        }
    }

    #[test]
    fn test_every_rated_tier_has_a_pool() {
        for banner in all_banners() {
            for (rarity, _) in banner.rates {
                assert!(
                    !banner.pool_for(*rarity).is_empty(),
                    "{}: tier {rarity} can be rolled but has no pool",
                    banner.id
                );
            }
        }
    }
}

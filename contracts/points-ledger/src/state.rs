use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use cosmwasm_std::{Addr, Timestamp, Uint128};
use cw_controllers::Admin;
use cw_storage_plus::{Item, Map};

/// The only account allowed to grant points and curate the reward catalog.
/// Set once at instantiation, never updated.
pub const ADMIN: Admin = Admin::new("admin");

#[derive(Serialize, Deserialize, Clone, PartialEq, JsonSchema, Debug)]
pub struct Config {
    /// Minimal number of seconds a member has to wait between two self-earns.
    /// If set to None there's no rate limit on earning.
    pub earn_cooldown: Option<u64>,
}

pub const CONFIG: Item<Config> = Item::new("config");

#[derive(Serialize, Deserialize, Clone, PartialEq, JsonSchema, Debug)]
pub struct MemberInfo {
    pub joined_at: Timestamp,
    /// Timestamp of the last successful self-earn, None before the first one
    pub last_earn: Option<Timestamp>,
}

impl MemberInfo {
    pub fn new(joined_at: Timestamp) -> Self {
        Self {
            joined_at,
            last_earn: None,
        }
    }

    /// When this member may self-earn again, if the cooldown still blocks them.
    /// The first earn is never blocked.
    pub fn earn_ready_at(&self, cooldown: Option<u64>, now: Timestamp) -> Option<Timestamp> {
        match (cooldown, self.last_earn) {
            (Some(secs), Some(last_earn)) => {
                let ready_at = last_earn.plus_seconds(secs);
                if now < ready_at {
                    Some(ready_at)
                } else {
                    None
                }
            }
            _ => None,
        }
    }
}

/// Membership is permanent - entries are only ever added, never removed.
pub const MEMBERS: Map<&Addr, MemberInfo> = Map::new("members");

/// Point balances; a missing entry means zero.
pub const BALANCES: Map<&Addr, Uint128> = Map::new("balances");

/// Sum of all balances, mutated in lockstep with every credit and debit.
pub const TOTAL: Item<Uint128> = Item::new("total");

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, JsonSchema, Debug)]
#[serde(rename_all = "snake_case")]
pub enum RewardKind {
    Tshirt,
    Massage,
    ClinicVisit,
    Vip,
    Other,
}

impl RewardKind {
    /// All catalog entries, in the order they are seeded at instantiation
    pub const ALL: [RewardKind; 5] = [
        RewardKind::Tshirt,
        RewardKind::Massage,
        RewardKind::ClinicVisit,
        RewardKind::Vip,
        RewardKind::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RewardKind::Tshirt => "tshirt",
            RewardKind::Massage => "massage",
            RewardKind::ClinicVisit => "clinic_visit",
            RewardKind::Vip => "vip",
            RewardKind::Other => "other",
        }
    }
}

impl fmt::Display for RewardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize, Clone, PartialEq, JsonSchema, Debug)]
pub struct Reward {
    pub cost: Uint128,
    pub active: bool,
}

/// Catalog entries, keyed by `RewardKind::as_str`. The key space is closed:
/// every kind is written at instantiation and `SetReward` can only overwrite.
pub const REWARDS: Map<&str, Reward> = Map::new("rewards");

/// Catalog contents written at instantiation. "Other" is a catch-all slot the
/// admin may price and activate later.
pub fn default_rewards() -> [(RewardKind, Reward); 5] {
    let reward = |cost: u128, active| Reward {
        cost: Uint128::new(cost),
        active,
    };
    [
        (RewardKind::Tshirt, reward(1_000, true)),
        (RewardKind::Massage, reward(3_000, true)),
        (RewardKind::ClinicVisit, reward(5_000, true)),
        (RewardKind::Vip, reward(10_000, true)),
        (RewardKind::Other, reward(0, false)),
    ]
}

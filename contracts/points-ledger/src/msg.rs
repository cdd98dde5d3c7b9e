use cosmwasm_std::Uint128;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::state::{MemberInfo, RewardKind};

#[derive(Serialize, Deserialize, Clone, PartialEq, JsonSchema, Debug)]
#[serde(rename_all = "snake_case")]
pub struct InstantiateMsg {
    /// Seconds a member has to wait between self-earns. Omit to disable the
    /// rate limit.
    #[serde(default)]
    pub earn_cooldown: Option<u64>,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, JsonSchema, Debug)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    /// Register the sender as a member. Membership is permanent.
    JoinAsMember {},
    /// Credit the sender's own balance. Subject to the configured cooldown;
    /// the first earn is always allowed.
    EarnPoints { amount: Uint128, reason: String },
    /// Credit an arbitrary address, enrolling it as a member first if needed.
    /// Must be called by the admin.
    GrantPoints {
        recipient: String,
        amount: Uint128,
        reason: String,
    },
    /// Move points from the sender to another member.
    TransferPoints { recipient: String, amount: Uint128 },
    /// Overwrite one catalog entry entirely. Must be called by the admin.
    /// An active reward has to carry a non-zero cost.
    SetReward {
        kind: RewardKind,
        cost: Uint128,
        active: bool,
    },
    /// Burn the sender's points against an active catalog entry.
    RedeemReward { kind: RewardKind },
}

#[derive(Serialize, Deserialize, Clone, PartialEq, JsonSchema, Debug)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    /// Return AdminResponse
    Admin {},
    /// Returns IsMemberResponse
    IsMember { addr: String },
    /// Returns MemberResponse with join and last-earn timestamps
    Member { addr: String },
    /// Returns PointsResponse; zero for unknown addresses
    Points { addr: String },
    /// Returns TotalPointsResponse
    TotalPoints {},
    /// Returns RewardResponse
    Reward { kind: RewardKind },
    /// Returns the whole catalog as RewardListResponse
    ListRewards {},
    /// Returns MemberListResponse, sorted by address
    ListMembers {
        start_after: Option<String>,
        limit: Option<u32>,
    },
}

#[derive(Serialize, Deserialize, Clone, PartialEq, JsonSchema, Debug)]
pub struct IsMemberResponse {
    pub is_member: bool,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, JsonSchema, Debug)]
pub struct MemberResponse {
    /// None if the address never joined
    pub info: Option<MemberInfo>,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, JsonSchema, Debug)]
pub struct PointsResponse {
    pub points: Uint128,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, JsonSchema, Debug)]
pub struct TotalPointsResponse {
    pub total: Uint128,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, JsonSchema, Debug)]
pub struct RewardResponse {
    pub cost: Uint128,
    pub active: bool,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, JsonSchema, Debug)]
pub struct RewardEntry {
    pub kind: RewardKind,
    pub cost: Uint128,
    pub active: bool,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, JsonSchema, Debug)]
pub struct RewardListResponse {
    pub rewards: Vec<RewardEntry>,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, JsonSchema, Debug)]
pub struct MemberEntry {
    pub addr: String,
    pub points: Uint128,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, JsonSchema, Debug)]
pub struct MemberListResponse {
    pub members: Vec<MemberEntry>,
}

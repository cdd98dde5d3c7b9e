use cosmwasm_std::{OverflowError, StdError, Timestamp, Uint128};
use thiserror::Error;

use cw_controllers::AdminError;
use cw_utils::PaymentError;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Admin(#[from] AdminError),

    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Payment(#[from] PaymentError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("Address {addr} is not a member")]
    NotMember { addr: String },

    #[error("Sender is already a member")]
    AlreadyMember {},

    #[error("Amount must be non-zero")]
    ZeroAmount {},

    #[error("Not enough points: balance is {balance}, required {required}")]
    NotEnoughPoints {
        balance: Uint128,
        required: Uint128,
    },

    #[error("Reward {reward} is not active")]
    RewardInactive { reward: String },

    #[error("Earning is on cooldown until {ready_at}")]
    EarnCooldown { ready_at: Timestamp },
}

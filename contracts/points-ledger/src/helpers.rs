use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use cosmwasm_std::{to_binary, Addr, CosmosMsg, StdResult, Uint128, WasmMsg};

use crate::msg::ExecuteMsg;
use crate::state::RewardKind;

/// PointsLedgerContract is a wrapper around Addr that provides helpers
/// for working with points-ledger contracts from other contracts.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct PointsLedgerContract(pub Addr);

impl PointsLedgerContract {
    pub fn new(addr: Addr) -> Self {
        PointsLedgerContract(addr)
    }

    pub fn addr(&self) -> Addr {
        self.0.clone()
    }

    fn encode_msg(&self, msg: ExecuteMsg) -> StdResult<CosmosMsg> {
        Ok(WasmMsg::Execute {
            contract_addr: self.0.to_string(),
            msg: to_binary(&msg)?,
            funds: vec![],
        }
        .into())
    }

    pub fn join_as_member(&self) -> StdResult<CosmosMsg> {
        self.encode_msg(ExecuteMsg::JoinAsMember {})
    }

    pub fn grant_points(
        &self,
        recipient: String,
        amount: Uint128,
        reason: String,
    ) -> StdResult<CosmosMsg> {
        self.encode_msg(ExecuteMsg::GrantPoints {
            recipient,
            amount,
            reason,
        })
    }

    pub fn transfer_points(&self, recipient: String, amount: Uint128) -> StdResult<CosmosMsg> {
        self.encode_msg(ExecuteMsg::TransferPoints { recipient, amount })
    }

    pub fn redeem_reward(&self, kind: RewardKind) -> StdResult<CosmosMsg> {
        self.encode_msg(ExecuteMsg::RedeemReward { kind })
    }
}

#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_binary, Addr, Binary, Deps, DepsMut, Env, Event, MessageInfo, Order, Response, StdResult,
    Storage, Timestamp, Uint128,
};
use cw2::set_contract_version;
use cw_storage_plus::Bound;
use cw_utils::{maybe_addr, nonpayable};

use crate::error::ContractError;
use crate::msg::{
    ExecuteMsg, InstantiateMsg, IsMemberResponse, MemberEntry, MemberListResponse, MemberResponse,
    PointsResponse, QueryMsg, RewardEntry, RewardListResponse, RewardResponse, TotalPointsResponse,
};
use crate::state::{
    default_rewards, Config, MemberInfo, Reward, RewardKind, ADMIN, BALANCES, CONFIG, MEMBERS,
    REWARDS, TOTAL,
};

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:points-ledger";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    create(deps, info.sender.clone(), msg.earn_cooldown, env.block.time)?;

    let res = Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("admin", info.sender);
    Ok(res)
}

// create is the instantiation logic with set_contract_version removed so it can more
// easily be imported in other contracts
pub fn create(
    mut deps: DepsMut,
    admin: Addr,
    earn_cooldown: Option<u64>,
    time: Timestamp,
) -> Result<(), ContractError> {
    ADMIN.set(deps.branch(), Some(admin.clone()))?;
    CONFIG.save(deps.storage, &Config { earn_cooldown })?;

    // the admin is a member from the very beginning
    MEMBERS.save(deps.storage, &admin, &MemberInfo::new(time))?;
    TOTAL.save(deps.storage, &Uint128::zero())?;

    for (kind, reward) in default_rewards() {
        REWARDS.save(deps.storage, kind.as_str(), &reward)?;
    }

    Ok(())
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    use ExecuteMsg::*;

    // the ledger never holds funds; any coins attached to a call abort it
    nonpayable(&info)?;

    match msg {
        JoinAsMember {} => execute_join_as_member(deps, env, info),
        EarnPoints { amount, reason } => execute_earn_points(deps, env, info, amount, reason),
        GrantPoints {
            recipient,
            amount,
            reason,
        } => execute_grant_points(deps, env, info, recipient, amount, reason),
        TransferPoints { recipient, amount } => {
            execute_transfer_points(deps, info, recipient, amount)
        }
        SetReward { kind, cost, active } => execute_set_reward(deps, info, kind, cost, active),
        RedeemReward { kind } => execute_redeem_reward(deps, info, kind),
    }
}

pub fn execute_join_as_member(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    if MEMBERS.may_load(deps.storage, &info.sender)?.is_some() {
        return Err(ContractError::AlreadyMember {});
    }
    MEMBERS.save(deps.storage, &info.sender, &MemberInfo::new(env.block.time))?;

    let res = Response::new()
        .add_attribute("action", "join_as_member")
        .add_attribute("member", info.sender);
    Ok(res)
}

pub fn execute_earn_points(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amount: Uint128,
    reason: String,
) -> Result<Response, ContractError> {
    if amount.is_zero() {
        return Err(ContractError::ZeroAmount {});
    }

    let mut member = MEMBERS
        .may_load(deps.storage, &info.sender)?
        .ok_or_else(|| ContractError::NotMember {
            addr: info.sender.to_string(),
        })?;

    let cooldown = CONFIG.load(deps.storage)?.earn_cooldown;
    if let Some(ready_at) = member.earn_ready_at(cooldown, env.block.time) {
        return Err(ContractError::EarnCooldown { ready_at });
    }

    credit(deps.storage, &info.sender, amount)?;

    member.last_earn = Some(env.block.time);
    MEMBERS.save(deps.storage, &info.sender, &member)?;

    let res = Response::new()
        .add_attribute("action", "earn_points")
        .add_attribute("member", info.sender)
        .add_attribute("amount", amount.to_string())
        .add_attribute("reason", reason);
    Ok(res)
}

pub fn execute_grant_points(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
    reason: String,
) -> Result<Response, ContractError> {
    ADMIN.assert_admin(deps.as_ref(), &info.sender)?;

    let recipient = deps.api.addr_validate(&recipient)?;
    if amount.is_zero() {
        return Err(ContractError::ZeroAmount {});
    }

    let mut res = Response::new()
        .add_attribute("action", "grant_points")
        .add_attribute("recipient", &recipient)
        .add_attribute("amount", amount.to_string())
        .add_attribute("reason", reason)
        .add_attribute("sender", info.sender);

    // recipients unknown to the ledger are enrolled on the fly
    if MEMBERS.may_load(deps.storage, &recipient)?.is_none() {
        MEMBERS.save(deps.storage, &recipient, &MemberInfo::new(env.block.time))?;
        res = res.add_event(Event::new("member_joined").add_attribute("member", &recipient));
    }

    credit(deps.storage, &recipient, amount)?;

    Ok(res)
}

pub fn execute_transfer_points(
    deps: DepsMut,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    if MEMBERS.may_load(deps.storage, &info.sender)?.is_none() {
        return Err(ContractError::NotMember {
            addr: info.sender.to_string(),
        });
    }

    let recipient = deps.api.addr_validate(&recipient)?;
    if amount.is_zero() {
        return Err(ContractError::ZeroAmount {});
    }
    if MEMBERS.may_load(deps.storage, &recipient)?.is_none() {
        return Err(ContractError::NotMember {
            addr: recipient.to_string(),
        });
    }

    let balance = BALANCES
        .may_load(deps.storage, &info.sender)?
        .unwrap_or_default();
    if balance < amount {
        return Err(ContractError::NotEnoughPoints {
            balance,
            required: amount,
        });
    }

    // both sides move in the same invocation; the total is untouched
    BALANCES.save(deps.storage, &info.sender, &balance.checked_sub(amount)?)?;
    let recipient_balance = BALANCES
        .may_load(deps.storage, &recipient)?
        .unwrap_or_default();
    BALANCES.save(
        deps.storage,
        &recipient,
        &recipient_balance.checked_add(amount)?,
    )?;

    let res = Response::new()
        .add_attribute("action", "transfer_points")
        .add_attribute("sender", info.sender)
        .add_attribute("recipient", &recipient)
        .add_attribute("amount", amount.to_string());
    Ok(res)
}

pub fn execute_set_reward(
    deps: DepsMut,
    info: MessageInfo,
    kind: RewardKind,
    cost: Uint128,
    active: bool,
) -> Result<Response, ContractError> {
    ADMIN.assert_admin(deps.as_ref(), &info.sender)?;

    // an active reward must carry a non-zero cost
    if active && cost.is_zero() {
        return Err(ContractError::ZeroAmount {});
    }

    REWARDS.save(deps.storage, kind.as_str(), &Reward { cost, active })?;

    let res = Response::new()
        .add_attribute("action", "set_reward")
        .add_attribute("reward", kind.as_str())
        .add_attribute("cost", cost.to_string())
        .add_attribute("active", active.to_string())
        .add_attribute("sender", info.sender);
    Ok(res)
}

pub fn execute_redeem_reward(
    deps: DepsMut,
    info: MessageInfo,
    kind: RewardKind,
) -> Result<Response, ContractError> {
    if MEMBERS.may_load(deps.storage, &info.sender)?.is_none() {
        return Err(ContractError::NotMember {
            addr: info.sender.to_string(),
        });
    }

    let reward = REWARDS.load(deps.storage, kind.as_str())?;
    if !reward.active {
        return Err(ContractError::RewardInactive {
            reward: kind.to_string(),
        });
    }
    if reward.cost.is_zero() {
        return Err(ContractError::ZeroAmount {});
    }

    let balance = BALANCES
        .may_load(deps.storage, &info.sender)?
        .unwrap_or_default();
    if balance < reward.cost {
        return Err(ContractError::NotEnoughPoints {
            balance,
            required: reward.cost,
        });
    }

    debit(deps.storage, &info.sender, reward.cost)?;

    let res = Response::new()
        .add_attribute("action", "redeem_reward")
        .add_attribute("member", info.sender)
        .add_attribute("reward", kind.as_str())
        .add_attribute("cost", reward.cost.to_string());
    Ok(res)
}

/// Adds points to the address and the running total.
fn credit(storage: &mut dyn Storage, addr: &Addr, amount: Uint128) -> Result<(), ContractError> {
    let balance = BALANCES.may_load(storage, addr)?.unwrap_or_default();
    BALANCES.save(storage, addr, &balance.checked_add(amount)?)?;

    let total = TOTAL.load(storage)?;
    TOTAL.save(storage, &total.checked_add(amount)?)?;
    Ok(())
}

/// Removes points from the address and the running total.
fn debit(storage: &mut dyn Storage, addr: &Addr, amount: Uint128) -> Result<(), ContractError> {
    let balance = BALANCES.may_load(storage, addr)?.unwrap_or_default();
    BALANCES.save(storage, addr, &balance.checked_sub(amount)?)?;

    let total = TOTAL.load(storage)?;
    TOTAL.save(storage, &total.checked_sub(amount)?)?;
    Ok(())
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    use QueryMsg::*;
    match msg {
        Admin {} => to_binary(&ADMIN.query_admin(deps)?),
        IsMember { addr } => to_binary(&query_is_member(deps, addr)?),
        Member { addr } => to_binary(&query_member(deps, addr)?),
        Points { addr } => to_binary(&query_points(deps, addr)?),
        TotalPoints {} => to_binary(&query_total_points(deps)?),
        Reward { kind } => to_binary(&query_reward(deps, kind)?),
        ListRewards {} => to_binary(&list_rewards(deps)?),
        ListMembers { start_after, limit } => to_binary(&list_members(deps, start_after, limit)?),
    }
}

fn query_is_member(deps: Deps, addr: String) -> StdResult<IsMemberResponse> {
    // Not validating the address - an invalid one is guaranteed not to appear
    // in the map, so the lookup itself never fails.
    let addr = Addr::unchecked(addr);
    let is_member = MEMBERS.may_load(deps.storage, &addr)?.is_some();
    Ok(IsMemberResponse { is_member })
}

fn query_member(deps: Deps, addr: String) -> StdResult<MemberResponse> {
    let addr = deps.api.addr_validate(&addr)?;
    let info = MEMBERS.may_load(deps.storage, &addr)?;
    Ok(MemberResponse { info })
}

fn query_points(deps: Deps, addr: String) -> StdResult<PointsResponse> {
    let addr = Addr::unchecked(addr);
    let points = BALANCES.may_load(deps.storage, &addr)?.unwrap_or_default();
    Ok(PointsResponse { points })
}

fn query_total_points(deps: Deps) -> StdResult<TotalPointsResponse> {
    let total = TOTAL.load(deps.storage)?;
    Ok(TotalPointsResponse { total })
}

fn query_reward(deps: Deps, kind: RewardKind) -> StdResult<RewardResponse> {
    let reward = REWARDS.load(deps.storage, kind.as_str())?;
    Ok(RewardResponse {
        cost: reward.cost,
        active: reward.active,
    })
}

fn list_rewards(deps: Deps) -> StdResult<RewardListResponse> {
    let rewards: StdResult<Vec<_>> = RewardKind::ALL
        .iter()
        .map(|&kind| {
            let reward = REWARDS.load(deps.storage, kind.as_str())?;
            Ok(RewardEntry {
                kind,
                cost: reward.cost,
                active: reward.active,
            })
        })
        .collect();

    Ok(RewardListResponse { rewards: rewards? })
}

// settings for pagination
const MAX_LIMIT: u32 = 30;
const DEFAULT_LIMIT: u32 = 10;

fn list_members(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<MemberListResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let addr = maybe_addr(deps.api, start_after)?;
    let start = addr.as_ref().map(Bound::exclusive);

    let members: StdResult<Vec<_>> = MEMBERS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            let (addr, _) = item?;
            let points = BALANCES.may_load(deps.storage, &addr)?.unwrap_or_default();
            Ok(MemberEntry {
                addr: addr.into(),
                points,
            })
        })
        .collect();

    Ok(MemberListResponse { members: members? })
}

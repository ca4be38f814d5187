use soroban_sdk::{Address, BytesN, Env, IntoVal};

use crate::events::{self, PlanCreatedEvent};
use crate::identity;
use crate::storage_types::{extend_persistent, log_failure, DataKey, Plan, RecurrError};

/// Register a plan under the digest of its charge terms.
///
/// A second registration of the same terms is rejected even when the token or
/// trial period differ, so subscriptions already issued against the key keep
/// pointing at the terms they were created under.
pub fn create_plan(
    env: &Env,
    creator: Address,
    charge_amount: u128,
    interval_period: u64,
    expiration_period: u64,
    payment_token: Option<Address>,
    free_trial_period: Option<u64>,
) -> Result<BytesN<32>, RecurrError> {
    creator.require_auth();

    let plan_id = identity::plan_id(
        env,
        &creator,
        charge_amount,
        interval_period,
        expiration_period,
    );
    let key = DataKey::Plan(plan_id.clone());

    if env.storage().persistent().has(&key) {
        return Err(log_failure(
            env,
            RecurrError::PlanAlreadyExists,
            &[plan_id.into_val(env)],
        ));
    }

    let plan = Plan {
        creator: creator.clone(),
        charge_amount,
        interval_period,
        expiration_period,
        payment_token,
        free_trial_period: free_trial_period.unwrap_or(0),
        created_at: env.ledger().timestamp(),
    };

    env.storage().persistent().set(&key, &plan);
    extend_persistent(env, &key);

    events::emit_plan_created(
        env,
        plan_id.clone(),
        PlanCreatedEvent {
            creator,
            charge_amount,
            interval_period,
            expiration_period,
        },
    );

    Ok(plan_id)
}

pub fn get_plan(env: &Env, plan_id: &BytesN<32>) -> Option<Plan> {
    env.storage()
        .persistent()
        .get(&DataKey::Plan(plan_id.clone()))
}

pub fn plan_exists(env: &Env, plan_id: &BytesN<32>) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Plan(plan_id.clone()))
}

/// Number of subscriptions ever issued for the plan; 0 for unknown plans.
pub fn subscriber_count(env: &Env, plan_id: &BytesN<32>) -> u64 {
    env.storage()
        .persistent()
        .get(&DataKey::PlanSubscribers(plan_id.clone()))
        .unwrap_or(0)
}

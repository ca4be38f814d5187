use soroban_sdk::{Address, BytesN, Env, IntoVal};

use crate::events::{self, FanSubscriptionCreatedEvent, FanSubscriptionEndedEvent};
use crate::identity;
use crate::plan;
use crate::storage_types::{
    extend_persistent, log_failure, DataKey, FanSubscription, RecurrError, SubscriptionStatus,
};

/// Enroll `fan` in an existing plan.
///
/// Bumps the plan's subscriber counter and keys the new record by
/// `(plan_id, new counter value)`. Every check runs before the first write,
/// so a rejected call leaves the counter, the records and the event stream
/// untouched.
pub fn create_fan_subscription(
    env: &Env,
    fan: Address,
    plan_id: BytesN<32>,
) -> Result<BytesN<32>, RecurrError> {
    fan.require_auth();

    if !plan::plan_exists(env, &plan_id) {
        return Err(log_failure(
            env,
            RecurrError::PlanNotFound,
            &[plan_id.into_val(env)],
        ));
    }

    let sequence_number = plan::subscriber_count(env, &plan_id)
        .checked_add(1)
        .ok_or_else(|| log_failure(env, RecurrError::CounterOverflow, &[plan_id.into_val(env)]))?;
    let subscription_id = identity::subscription_id(env, &plan_id, sequence_number);

    let subscription = FanSubscription {
        plan_id: plan_id.clone(),
        sequence_number,
        status: SubscriptionStatus::Active,
        fan: fan.clone(),
        started_at: env.ledger().timestamp(),
        ended_at: None,
    };

    let counter_key = DataKey::PlanSubscribers(plan_id.clone());
    let subscription_key = DataKey::FanSubscription(subscription_id.clone());
    env.storage().persistent().set(&counter_key, &sequence_number);
    env.storage().persistent().set(&subscription_key, &subscription);
    extend_persistent(env, &DataKey::Plan(plan_id.clone()));
    extend_persistent(env, &counter_key);
    extend_persistent(env, &subscription_key);

    events::emit_fan_subscription_created(
        env,
        plan_id,
        FanSubscriptionCreatedEvent {
            subscription_id: subscription_id.clone(),
            fan,
            sequence_number,
        },
    );

    Ok(subscription_id)
}

/// End an active subscription on behalf of `caller`.
///
/// The fan, the plan's creator and the contract owner may stop it.
pub fn stop_fan_subscription(
    env: &Env,
    caller: Address,
    subscription_id: BytesN<32>,
) -> Result<(), RecurrError> {
    caller.require_auth();

    let key = DataKey::FanSubscription(subscription_id.clone());
    let mut subscription: FanSubscription = match env.storage().persistent().get(&key) {
        Some(subscription) => subscription,
        None => {
            return Err(log_failure(
                env,
                RecurrError::SubscriptionNotFound,
                &[subscription_id.into_val(env)],
            ));
        }
    };

    if !may_stop(env, &caller, &subscription) {
        return Err(log_failure(
            env,
            RecurrError::Unauthorized,
            &[caller.into_val(env), subscription_id.into_val(env)],
        ));
    }

    validate_status_transition(subscription.status, SubscriptionStatus::Ended)
        .map_err(|error| log_failure(env, error, &[subscription_id.into_val(env)]))?;

    let ended_at = env.ledger().timestamp();
    subscription.status = SubscriptionStatus::Ended;
    subscription.ended_at = Some(ended_at);

    env.storage().persistent().set(&key, &subscription);
    extend_persistent(env, &key);

    events::emit_fan_subscription_ended(
        env,
        subscription.plan_id,
        FanSubscriptionEndedEvent {
            subscription_id,
            actor: caller,
            ended_at,
        },
    );

    Ok(())
}

pub fn get_subscription(env: &Env, subscription_id: &BytesN<32>) -> Option<FanSubscription> {
    env.storage()
        .persistent()
        .get(&DataKey::FanSubscription(subscription_id.clone()))
}

/// Check a lifecycle move against `Active -> Ended`.
///
/// `Ended` is terminal: leaving it, or ending it again, fails with
/// [`RecurrError::SubscriptionAlreadyEnded`]. Staying `Active` is a no-op.
pub fn validate_status_transition(
    from: SubscriptionStatus,
    to: SubscriptionStatus,
) -> Result<(), RecurrError> {
    match (from, to) {
        (SubscriptionStatus::Active, _) => Ok(()),
        (SubscriptionStatus::Ended, _) => Err(RecurrError::SubscriptionAlreadyEnded),
    }
}

fn may_stop(env: &Env, caller: &Address, subscription: &FanSubscription) -> bool {
    if *caller == subscription.fan {
        return true;
    }

    let is_creator = plan::get_plan(env, &subscription.plan_id)
        .map(|plan| plan.creator == *caller)
        .unwrap_or(false);
    if is_creator {
        return true;
    }

    env.storage()
        .instance()
        .get::<DataKey, Address>(&DataKey::Owner)
        .map(|owner| owner == *caller)
        .unwrap_or(false)
}

#![no_std]

mod events;
mod identity;
mod plan;
mod storage_types;
mod subscription;


use soroban_sdk::{contract, contractimpl, Address, BytesN, Env};
use storage_types::{extend_instance, DataKey};

pub use events::{FanSubscriptionCreatedEvent, FanSubscriptionEndedEvent, PlanCreatedEvent};
pub use storage_types::{FanSubscription, Plan, RecurrError, SubscriptionStatus};
pub use subscription::validate_status_transition;

#[contract]
pub struct RecurrContract;

#[contractimpl]
impl RecurrContract {
    /// Record the owner. Runs once, at deployment.
    pub fn __constructor(env: Env, owner: Address) {
        env.storage().instance().set(&DataKey::Owner, &owner);
        extend_instance(&env);
    }

    /// Address recorded at deployment.
    pub fn owner(env: Env) -> Address {
        env.storage()
            .instance()
            .get(&DataKey::Owner)
            .expect("owner is set at construction")
    }

    /// Register a recurring plan and return its id.
    ///
    /// The id is the digest of `(creator, charge_amount, interval_period,
    /// expiration_period)`. `free_trial_period` defaults to 0.
    ///
    /// # Errors
    /// [`RecurrError::PlanAlreadyExists`] if those four terms are already
    /// registered.
    pub fn create_plan(
        env: Env,
        creator: Address,
        charge_amount: u128,
        interval_period: u64,
        expiration_period: u64,
        payment_token: Option<Address>,
        free_trial_period: Option<u64>,
    ) -> Result<BytesN<32>, RecurrError> {
        extend_instance(&env);
        plan::create_plan(
            &env,
            creator,
            charge_amount,
            interval_period,
            expiration_period,
            payment_token,
            free_trial_period,
        )
    }

    /// Stored plan, or `None` if nothing is registered under `plan_id`.
    pub fn get_plan(env: Env, plan_id: BytesN<32>) -> Option<Plan> {
        plan::get_plan(&env, &plan_id)
    }

    /// Subscriptions ever issued for the plan; 0 for unknown plans.
    pub fn subscriber_count(env: Env, plan_id: BytesN<32>) -> u64 {
        plan::subscriber_count(&env, &plan_id)
    }

    /// Enroll `fan` in a plan and return the new subscription id.
    ///
    /// # Errors
    /// [`RecurrError::PlanNotFound`] if no plan is stored under `plan_id`.
    pub fn create_fan_subscription(
        env: Env,
        fan: Address,
        plan_id: BytesN<32>,
    ) -> Result<BytesN<32>, RecurrError> {
        extend_instance(&env);
        subscription::create_fan_subscription(&env, fan, plan_id)
    }

    /// Move a subscription to `Ended`.
    ///
    /// # Errors
    /// * [`RecurrError::SubscriptionNotFound`] for an unknown id.
    /// * [`RecurrError::Unauthorized`] unless `caller` is the fan, the plan's
    ///   creator or the owner.
    /// * [`RecurrError::SubscriptionAlreadyEnded`] if it was already stopped.
    pub fn stop_fan_subscription(
        env: Env,
        caller: Address,
        subscription_id: BytesN<32>,
    ) -> Result<(), RecurrError> {
        extend_instance(&env);
        subscription::stop_fan_subscription(&env, caller, subscription_id)
    }

    /// Stored subscription in whatever state it is in, or `None`.
    pub fn get_subscription(env: Env, subscription_id: BytesN<32>) -> Option<FanSubscription> {
        subscription::get_subscription(&env, &subscription_id)
    }

    /// Plan id for the given terms, whether or not the plan is registered.
    pub fn compute_plan_id(
        env: Env,
        creator: Address,
        charge_amount: u128,
        interval_period: u64,
        expiration_period: u64,
    ) -> BytesN<32> {
        identity::plan_id(
            &env,
            &creator,
            charge_amount,
            interval_period,
            expiration_period,
        )
    }

    /// Subscription id for the `sequence_number`-th enrollment in a plan.
    pub fn compute_subscription_id(
        env: Env,
        plan_id: BytesN<32>,
        sequence_number: u64,
    ) -> BytesN<32> {
        identity::subscription_id(&env, &plan_id, sequence_number)
    }
}

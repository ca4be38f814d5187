use soroban_sdk::{contracterror, contracttype, Address, BytesN, Env, Val};

pub(crate) const DAY_IN_LEDGERS: u32 = 17280;

// Instance entries hold the owner only; keep them alive for 30 days and
// bump once less than a week remains.
pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - 7 * DAY_IN_LEDGERS;

// Plans, subscriptions and counters must outlive any realistic billing cycle.
pub(crate) const PERSISTENT_BUMP_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;
pub(crate) const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - 30 * DAY_IN_LEDGERS;

// Plan and subscription keys are content addressed, see `identity`.
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    // instance
    Owner,
    // persistent
    Plan(BytesN<32>),
    FanSubscription(BytesN<32>),
    PlanSubscribers(BytesN<32>),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[contracttype]
pub enum SubscriptionStatus {
    Active,
    Ended,
}

/// Recurring charge terms registered by a creator.
///
/// Only `creator`, `charge_amount`, `interval_period` and `expiration_period`
/// take part in the plan id; the token and trial period are carried along
/// but two plans differing only in those map to the same key.
#[derive(Clone, Debug, PartialEq, Eq)]
#[contracttype]
pub struct Plan {
    pub creator: Address,
    pub charge_amount: u128,
    pub interval_period: u64,
    pub expiration_period: u64,
    pub payment_token: Option<Address>,
    pub free_trial_period: u64,
    pub created_at: u64,
}

/// A single fan's enrollment against a plan.
#[derive(Clone, Debug, PartialEq, Eq)]
#[contracttype]
pub struct FanSubscription {
    pub plan_id: BytesN<32>,
    /// Value of the plan's subscriber counter right after this enrollment.
    pub sequence_number: u64,
    pub status: SubscriptionStatus,
    pub fan: Address,
    pub started_at: u64,
    pub ended_at: Option<u64>,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RecurrError {
    PlanNotFound = 1,
    SubscriptionNotFound = 2,
    PlanAlreadyExists = 3,
    SubscriptionAlreadyEnded = 4,
    Unauthorized = 5,
    CounterOverflow = 6,
}

impl RecurrError {
    /// Failure text reported to external callers. The not-found wordings are
    /// kept exactly as integrators already match on them.
    pub const fn message(&self) -> &'static str {
        match self {
            RecurrError::PlanNotFound => "Recurring plan does not exist",
            RecurrError::SubscriptionNotFound => "Subcription does not exist",
            RecurrError::PlanAlreadyExists => "Recurring plan already exists",
            RecurrError::SubscriptionAlreadyEnded => "Subcription already ended",
            RecurrError::Unauthorized => "Caller may not stop this subcription",
            RecurrError::CounterOverflow => "Plan subscriber count overflow",
        }
    }
}

/// Write the error's message to the diagnostic log and hand the error back.
pub(crate) fn log_failure(env: &Env, error: RecurrError, args: &[Val]) -> RecurrError {
    env.logs().add(error.message(), args);
    error
}

pub(crate) fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub(crate) fn extend_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

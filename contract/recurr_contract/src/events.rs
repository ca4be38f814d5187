use soroban_sdk::{contracttype, Address, BytesN, Env, Symbol};

#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlanCreatedEvent {
    pub creator: Address,
    pub charge_amount: u128,
    pub interval_period: u64,
    pub expiration_period: u64,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FanSubscriptionCreatedEvent {
    pub subscription_id: BytesN<32>,
    pub fan: Address,
    pub sequence_number: u64,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FanSubscriptionEndedEvent {
    pub subscription_id: BytesN<32>,
    pub actor: Address,
    pub ended_at: u64,
}

pub fn emit_plan_created(env: &Env, plan_id: BytesN<32>, event: PlanCreatedEvent) {
    env.events()
        .publish((Symbol::new(env, "plan_created"), plan_id), event);
}

pub fn emit_fan_subscription_created(
    env: &Env,
    plan_id: BytesN<32>,
    event: FanSubscriptionCreatedEvent,
) {
    env.events().publish(
        (Symbol::new(env, "fan_subscription_created"), plan_id),
        event,
    );
}

pub fn emit_fan_subscription_ended(
    env: &Env,
    plan_id: BytesN<32>,
    event: FanSubscriptionEndedEvent,
) {
    env.events().publish(
        (Symbol::new(env, "fan_subscription_ended"), plan_id),
        event,
    );
}

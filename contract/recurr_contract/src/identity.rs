use soroban_sdk::{xdr::ToXdr, Address, BytesN, Env, IntoVal, Val};

/// Hash an ordered tuple of typed fields into a 32 byte key.
///
/// The tuple is turned into an `ScVal::Vec` and serialized as XDR before
/// hashing. Every element carries its type discriminant and variable-width
/// data is length prefixed, so an address can never encode the same as an
/// integer and tuples of different arity never share an encoding.
pub fn derive<T: IntoVal<Env, Val>>(env: &Env, fields: T) -> BytesN<32> {
    let encoded = fields.to_xdr(env);
    env.crypto().keccak256(&encoded).to_bytes()
}

pub fn plan_id(
    env: &Env,
    creator: &Address,
    charge_amount: u128,
    interval_period: u64,
    expiration_period: u64,
) -> BytesN<32> {
    derive(
        env,
        (creator.clone(), charge_amount, interval_period, expiration_period),
    )
}

pub fn subscription_id(env: &Env, plan_id: &BytesN<32>, sequence_number: u64) -> BytesN<32> {
    derive(env, (plan_id.clone(), sequence_number))
}

// PDA seeds
pub const CONFIG_SEED: &[u8] = b"config";
pub const PLEDGE_SEED: &[u8] = b"pledge";
pub const VAULT_SEED: &[u8] = b"vault";

// Basis points scale: 10000 bps = 100%
pub const BPS_DENOMINATOR: u64 = 10_000;

// Upper bounds enforced on config values
pub const MAX_TREASURY_SPLIT_BPS: u16 = 10_000;
pub const MAX_FEE_BPS: u16 = 1_000; // 10%

// How far a client-supplied created_at may deviate from the ledger clock.
// The timestamp is a PDA seed, so clients pick it before submission; the
// tolerance covers signing and confirmation latency.
pub const CLOCK_DRIFT_TOLERANCE: i64 = 300;

use anchor_lang::prelude::*;

use crate::constants::{MAX_FEE_BPS, MAX_TREASURY_SPLIT_BPS};
use crate::errors::PledgeError;

// Singleton program config, PDA of ["config"]. Created once by `initialize`;
// only the admin may mutate it afterwards.
#[account]
pub struct ProgramConfig {
    /// Authority allowed to update this config (including pausing).
    pub admin: Pubkey,
    /// Receives the treasury share of forfeitures and fees.
    pub treasury: Pubkey,
    /// Receives the remainder of forfeitures and fees.
    pub charity: Pubkey,
    /// Treasury fraction of every forfeiture/fee split, in bps (<= 10000).
    pub treasury_split_bps: u16,
    /// Fee on the refunded portion of a partial completion, in bps (<= 1000).
    pub partial_fee_bps: u16,
    /// Penalty on remaining stake when a pledge is edited, in bps (<= 1000).
    pub edit_penalty_bps: u16,
    /// Self-report window after the deadline, in seconds.
    pub grace_period_seconds: i64,
    /// When set, new pledges cannot be created.
    pub paused: bool,
    pub bump: u8,
}

impl ProgramConfig {
    pub const SPACE: usize = 8 +  // discriminator
        32 +    // admin
        32 +    // treasury
        32 +    // charity
        2 +     // treasury_split_bps
        2 +     // partial_fee_bps
        2 +     // edit_penalty_bps
        8 +     // grace_period_seconds
        1 +     // paused
        1; // bump

    pub fn validate_treasury_split(bps: u16) -> Result<()> {
        require!(bps <= MAX_TREASURY_SPLIT_BPS, PledgeError::InvalidTreasurySplit);
        Ok(())
    }

    pub fn validate_fee(bps: u16) -> Result<()> {
        require!(bps <= MAX_FEE_BPS, PledgeError::InvalidFee);
        Ok(())
    }
}

#[event]
pub struct ConfigInitialized {
    pub admin: Pubkey,
    pub treasury: Pubkey,
    pub charity: Pubkey,
}

#[event]
pub struct ConfigUpdated {
    pub admin: Pubkey,
    pub paused: bool,
}

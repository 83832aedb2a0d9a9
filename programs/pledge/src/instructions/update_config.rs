use anchor_lang::prelude::*;

use crate::constants::CONFIG_SEED;
use crate::errors::PledgeError;
use crate::state::{ConfigUpdated, ProgramConfig};

// Update Config Instruction
//
// Admin-only. Every field is optional; bps fields are re-validated against
// the same bounds as at initialization. Pausing only blocks new pledges and
// edits; in-flight pledges can still be reported and settled.

#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    #[account(
        constraint = admin.key() == config.admin @ PledgeError::Unauthorized
    )]
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, ProgramConfig>,
}

impl<'info> UpdateConfig<'info> {
    #[allow(clippy::too_many_arguments)]
    pub fn update_config(
        &mut self,
        new_admin: Option<Pubkey>,
        new_treasury: Option<Pubkey>,
        new_charity: Option<Pubkey>,
        new_treasury_split_bps: Option<u16>,
        new_partial_fee_bps: Option<u16>,
        new_edit_penalty_bps: Option<u16>,
        new_grace_period_seconds: Option<i64>,
        paused: Option<bool>,
    ) -> Result<()> {
        let config = &mut self.config;

        if let Some(admin) = new_admin {
            config.admin = admin;
        }
        if let Some(treasury) = new_treasury {
            config.treasury = treasury;
        }
        if let Some(charity) = new_charity {
            config.charity = charity;
        }
        if let Some(split_bps) = new_treasury_split_bps {
            ProgramConfig::validate_treasury_split(split_bps)?;
            config.treasury_split_bps = split_bps;
        }
        if let Some(fee_bps) = new_partial_fee_bps {
            ProgramConfig::validate_fee(fee_bps)?;
            config.partial_fee_bps = fee_bps;
        }
        if let Some(penalty_bps) = new_edit_penalty_bps {
            ProgramConfig::validate_fee(penalty_bps)?;
            config.edit_penalty_bps = penalty_bps;
        }
        if let Some(grace_period) = new_grace_period_seconds {
            config.grace_period_seconds = grace_period;
        }
        if let Some(pause_state) = paused {
            config.paused = pause_state;
        }

        emit!(ConfigUpdated {
            admin: config.admin,
            paused: config.paused,
        });

        Ok(())
    }
}

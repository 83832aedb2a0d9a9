use anchor_lang::prelude::*;

use crate::constants::CONFIG_SEED;
use crate::state::{ConfigInitialized, ProgramConfig};

// Initialize Instruction
//
// Creates the singleton config PDA. Permissionless first call: whoever signs
// it becomes the admin. A second call fails inside the runtime because the
// config account already exists.

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        init,
        payer = admin,
        space = ProgramConfig::SPACE,
        seeds = [CONFIG_SEED],
        bump
    )]
    pub config: Account<'info, ProgramConfig>,

    pub system_program: Program<'info, System>,
}

impl<'info> Initialize<'info> {
    #[allow(clippy::too_many_arguments)]
    pub fn initialize(
        &mut self,
        treasury: Pubkey,
        charity: Pubkey,
        treasury_split_bps: u16,
        partial_fee_bps: u16,
        edit_penalty_bps: u16,
        grace_period_seconds: i64,
        bumps: &InitializeBumps,
    ) -> Result<()> {
        ProgramConfig::validate_treasury_split(treasury_split_bps)?;
        ProgramConfig::validate_fee(partial_fee_bps)?;
        ProgramConfig::validate_fee(edit_penalty_bps)?;

        self.config.set_inner(ProgramConfig {
            admin: self.admin.key(),
            treasury,
            charity,
            treasury_split_bps,
            partial_fee_bps,
            edit_penalty_bps,
            grace_period_seconds,
            paused: false,
            bump: bumps.config,
        });

        emit!(ConfigInitialized {
            admin: self.admin.key(),
            treasury,
            charity,
        });

        Ok(())
    }
}

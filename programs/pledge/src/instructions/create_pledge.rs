use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{transfer, Mint, Token, TokenAccount, Transfer},
};

use crate::constants::{CLOCK_DRIFT_TOLERANCE, CONFIG_SEED, PLEDGE_SEED, VAULT_SEED};
use crate::errors::PledgeError;
use crate::state::{Pledge, PledgeCreated, PledgeStatus, ProgramConfig};

// Create Pledge Instruction
//
// Locks the user's stake against a goal with a deadline. The client picks
// created_at (it is a PDA seed, so the address must be derivable before the
// transaction is built) and the program holds it to the ledger clock within
// a drift tolerance. Creates the pledge account and its vault, then moves
// the stake user -> vault.

#[derive(Accounts)]
#[instruction(stake_amount: u64, deadline: i64, created_at: i64)]
pub struct CreatePledge<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump,
        constraint = !config.paused @ PledgeError::ProgramPaused
    )]
    pub config: Account<'info, ProgramConfig>,

    #[account(
        init,
        payer = user,
        space = Pledge::SPACE,
        seeds = [PLEDGE_SEED, user.key().as_ref(), &created_at.to_le_bytes()],
        bump
    )]
    pub pledge: Account<'info, Pledge>,

    // Token vault owned by the pledge PDA; holds the stake until settlement
    #[account(
        init,
        payer = user,
        token::mint = mint,
        token::authority = pledge,
        seeds = [VAULT_SEED, pledge.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = user
    )]
    pub user_token_account: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> CreatePledge<'info> {
    pub fn create_pledge(
        &mut self,
        stake_amount: u64,
        deadline: i64,
        created_at: i64,
        bumps: &CreatePledgeBumps,
    ) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;

        require!(stake_amount > 0, PledgeError::InvalidStakeAmount);
        let drift = created_at
            .checked_sub(now)
            .ok_or(PledgeError::InvalidTimestamp)?;
        require!(
            drift.abs() <= CLOCK_DRIFT_TOLERANCE,
            PledgeError::InvalidTimestamp
        );
        require!(deadline > created_at, PledgeError::InvalidDeadline);

        // Move the stake into escrow before writing any state
        let transfer_ctx = CpiContext::new(
            self.token_program.to_account_info(),
            Transfer {
                from: self.user_token_account.to_account_info(),
                to: self.vault.to_account_info(),
                authority: self.user.to_account_info(),
            },
        );
        transfer(transfer_ctx, stake_amount)?;

        self.pledge.set_inner(Pledge {
            user: self.user.key(),
            mint: self.mint.key(),
            stake_amount,
            deadline,
            created_at,
            status: PledgeStatus::Active,
            bump: bumps.pledge,
            vault_bump: bumps.vault,
        });

        emit!(PledgeCreated {
            pledge: self.pledge.key(),
            user: self.user.key(),
            stake_amount,
            deadline,
        });

        Ok(())
    }
}

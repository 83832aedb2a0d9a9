use anchor_lang::prelude::*;
use anchor_spl::token::{transfer, Token, TokenAccount, Transfer};

use crate::constants::{CONFIG_SEED, PLEDGE_SEED, VAULT_SEED};
use crate::errors::PledgeError;
use crate::fees::{bps_fee, split};
use crate::state::{Pledge, PledgeEdited, PledgeStatus, ProgramConfig};

// Edit Pledge Instruction
//
// Owner-only, before the deadline. Charges the edit penalty on the
// remaining stake and pays it straight out of the vault to treasury and
// charity, then optionally moves the deadline (forward into the future
// only). Editing gets strictly more expensive the more often it is done,
// since each penalty shrinks the base for the next.

#[derive(Accounts)]
pub struct EditPledge<'info> {
    #[account(
        constraint = user.key() == pledge.user @ PledgeError::NotPledgeOwner
    )]
    pub user: Signer<'info>,

    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump,
        constraint = !config.paused @ PledgeError::ProgramPaused
    )]
    pub config: Account<'info, ProgramConfig>,

    #[account(
        mut,
        seeds = [PLEDGE_SEED, pledge.user.as_ref(), &pledge.created_at.to_le_bytes()],
        bump = pledge.bump,
        constraint = pledge.status == PledgeStatus::Active @ PledgeError::PledgeNotActive
    )]
    pub pledge: Account<'info, Pledge>,

    #[account(
        mut,
        seeds = [VAULT_SEED, pledge.key().as_ref()],
        bump = pledge.vault_bump
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        token::mint = pledge.mint,
        token::authority = config.treasury
    )]
    pub treasury_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        token::mint = pledge.mint,
        token::authority = config.charity
    )]
    pub charity_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

impl<'info> EditPledge<'info> {
    pub fn edit_pledge(&mut self, new_deadline: Option<i64>) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;

        require!(now < self.pledge.deadline, PledgeError::DeadlineAlreadyPassed);

        let penalty = bps_fee(self.pledge.stake_amount, self.config.edit_penalty_bps)?;
        let (treasury_amount, charity_amount) = split(penalty, self.config.treasury_split_bps)?;

        // The pledge PDA signs for its vault
        let user_key = self.pledge.user;
        let created_at_bytes = self.pledge.created_at.to_le_bytes();
        let pledge_seeds = &[
            PLEDGE_SEED,
            user_key.as_ref(),
            created_at_bytes.as_ref(),
            &[self.pledge.bump],
        ];
        let signer_seeds = &[&pledge_seeds[..]];

        if treasury_amount > 0 {
            let transfer_ctx = CpiContext::new_with_signer(
                self.token_program.to_account_info(),
                Transfer {
                    from: self.vault.to_account_info(),
                    to: self.treasury_token_account.to_account_info(),
                    authority: self.pledge.to_account_info(),
                },
                signer_seeds,
            );
            transfer(transfer_ctx, treasury_amount)?;
        }

        if charity_amount > 0 {
            let transfer_ctx = CpiContext::new_with_signer(
                self.token_program.to_account_info(),
                Transfer {
                    from: self.vault.to_account_info(),
                    to: self.charity_token_account.to_account_info(),
                    authority: self.pledge.to_account_info(),
                },
                signer_seeds,
            );
            transfer(transfer_ctx, charity_amount)?;
        }

        self.pledge.stake_amount = self
            .pledge
            .stake_amount
            .checked_sub(penalty)
            .ok_or(PledgeError::Underflow)?;

        if let Some(deadline) = new_deadline {
            require!(deadline > now, PledgeError::InvalidDeadline);
            self.pledge.deadline = deadline;
        }

        emit!(PledgeEdited {
            pledge: self.pledge.key(),
            penalty_paid: penalty,
            new_deadline: self.pledge.deadline,
        });

        Ok(())
    }
}

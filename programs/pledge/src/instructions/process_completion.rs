use anchor_lang::prelude::*;
use anchor_spl::token::{close_account, transfer, CloseAccount, Token, TokenAccount, Transfer};

use crate::constants::{CONFIG_SEED, PLEDGE_SEED, VAULT_SEED};
use crate::errors::PledgeError;
use crate::fees::settle;
use crate::state::{Pledge, PledgeCompleted, PledgeForfeited, PledgeStatus, ProgramConfig};

// Process Completion Instruction
//
// Permissionless crank that settles a pledge the owner already reported.
// Uses the percentage stored at report time: refund to the user, the rest
// split treasury/charity, vault closed with its rent back to the user.
// The status leaves Reported here, so a replay fails the status constraint.

#[derive(Accounts)]
pub struct ProcessCompletion<'info> {
    // Any signer may crank
    pub crank: Signer<'info>,

    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, ProgramConfig>,

    #[account(
        mut,
        seeds = [PLEDGE_SEED, pledge.user.as_ref(), &pledge.created_at.to_le_bytes()],
        bump = pledge.bump,
        constraint = pledge.is_reported() @ PledgeError::PledgeNotReported
    )]
    pub pledge: Account<'info, Pledge>,

    #[account(
        mut,
        seeds = [VAULT_SEED, pledge.key().as_ref()],
        bump = pledge.vault_bump
    )]
    pub vault: Account<'info, TokenAccount>,

    /// CHECK: pledge owner, receives the vault rent on close
    #[account(mut, address = pledge.user)]
    pub user: AccountInfo<'info>,

    #[account(
        mut,
        token::mint = pledge.mint,
        token::authority = pledge.user
    )]
    pub user_token_account: Account<'info, TokenAccount>,

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

impl<'info> ProcessCompletion<'info> {
    pub fn process_completion(&mut self) -> Result<()> {
        let completion_percentage = self
            .pledge
            .completion_percentage()
            .ok_or(PledgeError::PledgeNotReported)?;

        let amounts = settle(
            self.pledge.stake_amount,
            completion_percentage,
            self.config.partial_fee_bps,
            self.config.treasury_split_bps,
        )?;

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

        if amounts.refund > 0 {
            let transfer_ctx = CpiContext::new_with_signer(
                self.token_program.to_account_info(),
                Transfer {
                    from: self.vault.to_account_info(),
                    to: self.user_token_account.to_account_info(),
                    authority: self.pledge.to_account_info(),
                },
                signer_seeds,
            );
            transfer(transfer_ctx, amounts.refund)?;
        }

        if amounts.treasury > 0 {
            let transfer_ctx = CpiContext::new_with_signer(
                self.token_program.to_account_info(),
                Transfer {
                    from: self.vault.to_account_info(),
                    to: self.treasury_token_account.to_account_info(),
                    authority: self.pledge.to_account_info(),
                },
                signer_seeds,
            );
            transfer(transfer_ctx, amounts.treasury)?;
        }

        if amounts.charity > 0 {
            let transfer_ctx = CpiContext::new_with_signer(
                self.token_program.to_account_info(),
                Transfer {
                    from: self.vault.to_account_info(),
                    to: self.charity_token_account.to_account_info(),
                    authority: self.pledge.to_account_info(),
                },
                signer_seeds,
            );
            transfer(transfer_ctx, amounts.charity)?;
        }

        // Vault is drained; close it and return the rent to the user
        let close_ctx = CpiContext::new_with_signer(
            self.token_program.to_account_info(),
            CloseAccount {
                account: self.vault.to_account_info(),
                destination: self.user.to_account_info(),
                authority: self.pledge.to_account_info(),
            },
            signer_seeds,
        );
        close_account(close_ctx)?;

        if completion_percentage > 0 {
            self.pledge.status = PledgeStatus::Completed {
                completion_percentage,
            };
            emit!(PledgeCompleted {
                pledge: self.pledge.key(),
                completion_percentage,
                refund_amount: amounts.refund,
                fee_amount: amounts.fee,
            });
        } else {
            self.pledge.status = PledgeStatus::Forfeited;
            emit!(PledgeForfeited {
                pledge: self.pledge.key(),
                treasury_amount: amounts.treasury,
                charity_amount: amounts.charity,
            });
        }

        Ok(())
    }
}

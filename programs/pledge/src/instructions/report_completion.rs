use anchor_lang::prelude::*;

use crate::constants::{CONFIG_SEED, PLEDGE_SEED};
use crate::errors::PledgeError;
use crate::state::{CompletionReported, Pledge, PledgeStatus, ProgramConfig};

// Report Completion Instruction
//
// Owner self-attests a completion percentage once the deadline has passed
// and before the grace period runs out. Reporting only records the claim;
// funds move later when a crank settles the pledge. Reporting carries no
// fee advantage over letting the crank resolve it.

#[derive(Accounts)]
pub struct ReportCompletion<'info> {
    #[account(
        constraint = user.key() == pledge.user @ PledgeError::NotPledgeOwner
    )]
    pub user: Signer<'info>,

    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, ProgramConfig>,

    #[account(
        mut,
        seeds = [PLEDGE_SEED, pledge.user.as_ref(), &pledge.created_at.to_le_bytes()],
        bump = pledge.bump,
        constraint = pledge.status == PledgeStatus::Active @ PledgeError::PledgeNotActive
    )]
    pub pledge: Account<'info, Pledge>,
}

impl<'info> ReportCompletion<'info> {
    pub fn report_completion(&mut self, completion_percentage: u8) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;

        require!(
            completion_percentage <= 100,
            PledgeError::InvalidCompletionPercentage
        );
        self.pledge
            .check_reportable(now, self.config.grace_period_seconds)?;

        self.pledge.status = PledgeStatus::Reported {
            completion_percentage,
            reported_at: now,
        };

        emit!(CompletionReported {
            pledge: self.pledge.key(),
            completion_percentage,
        });

        Ok(())
    }
}

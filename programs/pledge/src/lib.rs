// Pledge - goal-staking escrow program
//
// A user locks a token stake against a self-declared goal with a deadline.
// After the deadline the owner has a grace period to self-report a
// completion percentage; a permissionless crank then settles the pledge,
// refunding the completed share (minus a fee on partial completions) and
// splitting the rest between a treasury and a charity. Pledges the owner
// never reports are settled by the crank after the grace period with an
// externally aggregated percentage.
//
// Instructions:
// - initialize / update_config: admin config lifecycle
// - create_pledge: lock stake into a per-pledge vault
// - edit_pledge: move the deadline for a penalty
// - report_completion: owner self-attestation inside the grace window
// - process_completion / process_expired: permissionless settlement

use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod fees;
pub mod instructions;
pub mod state;

use instructions::*;

declare_id!("C8rKxSHRihYaPRfc8S81TexwD36LU5rFK134miYAgrjp");

#[program]
pub mod pledge {
    use super::*;

    pub fn initialize(
        ctx: Context<Initialize>,
        treasury: Pubkey,
        charity: Pubkey,
        treasury_split_bps: u16,
        partial_fee_bps: u16,
        edit_penalty_bps: u16,
        grace_period_seconds: i64,
    ) -> Result<()> {
        ctx.accounts.initialize(
            treasury,
            charity,
            treasury_split_bps,
            partial_fee_bps,
            edit_penalty_bps,
            grace_period_seconds,
            &ctx.bumps,
        )
    }

    pub fn update_config(
        ctx: Context<UpdateConfig>,
        new_admin: Option<Pubkey>,
        new_treasury: Option<Pubkey>,
        new_charity: Option<Pubkey>,
        new_treasury_split_bps: Option<u16>,
        new_partial_fee_bps: Option<u16>,
        new_edit_penalty_bps: Option<u16>,
        new_grace_period_seconds: Option<i64>,
        paused: Option<bool>,
    ) -> Result<()> {
        ctx.accounts.update_config(
            new_admin,
            new_treasury,
            new_charity,
            new_treasury_split_bps,
            new_partial_fee_bps,
            new_edit_penalty_bps,
            new_grace_period_seconds,
            paused,
        )
    }

    pub fn create_pledge(
        ctx: Context<CreatePledge>,
        stake_amount: u64,
        deadline: i64,
        created_at: i64,
    ) -> Result<()> {
        ctx.accounts
            .create_pledge(stake_amount, deadline, created_at, &ctx.bumps)
    }

    pub fn edit_pledge(ctx: Context<EditPledge>, new_deadline: Option<i64>) -> Result<()> {
        ctx.accounts.edit_pledge(new_deadline)
    }

    pub fn report_completion(
        ctx: Context<ReportCompletion>,
        completion_percentage: u8,
    ) -> Result<()> {
        ctx.accounts.report_completion(completion_percentage)
    }

    pub fn process_completion(ctx: Context<ProcessCompletion>) -> Result<()> {
        ctx.accounts.process_completion()
    }

    pub fn process_expired(ctx: Context<ProcessExpired>, completion_percentage: u8) -> Result<()> {
        ctx.accounts.process_expired(completion_percentage)
    }
}

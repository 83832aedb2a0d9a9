use anchor_lang::prelude::*;

use crate::errors::PledgeError;

// A single staked goal. PDA of ["pledge", user, created_at_le]; created_at
// in the seeds lets one user hold any number of concurrent pledges. The
// pledge PDA is also the transfer authority for its vault
// (["vault", pledge]), which holds exactly `stake_amount` tokens until
// settlement drains and closes it.
#[account]
pub struct Pledge {
    /// Owner; authorization reference for edit/report.
    pub user: Pubkey,
    /// Mint of the staked token.
    pub mint: Pubkey,
    /// Remaining stake. Decreases on edit, fixed otherwise.
    pub stake_amount: u64,
    /// Unix timestamp the goal is due; strictly after created_at.
    pub deadline: i64,
    /// Creation timestamp, part of the PDA seeds.
    pub created_at: i64,
    pub status: PledgeStatus,
    pub bump: u8,
    pub vault_bump: u8,
}

/// Lifecycle: Active -> Reported -> Completed | Forfeited, with the crank
/// path Active -> Completed | Forfeited once the grace period lapses.
/// Completed and Forfeited are terminal. The completion data rides on the
/// variants that have it rather than as nullable fields.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum PledgeStatus {
    /// Ongoing; funds locked in the vault.
    Active,
    /// Owner self-reported within the grace window; awaiting settlement.
    Reported {
        completion_percentage: u8,
        reported_at: i64,
    },
    /// Settled with a refund (percentage was nonzero).
    Completed { completion_percentage: u8 },
    /// Settled at zero completion; whole stake split to treasury/charity.
    Forfeited,
}

impl Pledge {
    pub const SPACE: usize = 8 +  // discriminator
        32 +    // user
        32 +    // mint
        8 +     // stake_amount
        8 +     // deadline
        8 +     // created_at
        10 +    // status (tag + largest payload: Reported { u8, i64 })
        1 +     // bump
        1; // vault_bump

    pub fn is_active(&self) -> bool {
        self.status == PledgeStatus::Active
    }

    pub fn is_reported(&self) -> bool {
        matches!(self.status, PledgeStatus::Reported { .. })
    }

    pub fn completion_percentage(&self) -> Option<u8> {
        match self.status {
            PledgeStatus::Active | PledgeStatus::Forfeited => None,
            PledgeStatus::Reported {
                completion_percentage,
                ..
            }
            | PledgeStatus::Completed {
                completion_percentage,
            } => Some(completion_percentage),
        }
    }

    pub fn reported_at(&self) -> Option<i64> {
        match self.status {
            PledgeStatus::Reported { reported_at, .. } => Some(reported_at),
            _ => None,
        }
    }

    pub fn grace_period_end(&self, grace_period_seconds: i64) -> Result<i64> {
        self.deadline
            .checked_add(grace_period_seconds)
            .ok_or_else(|| error!(PledgeError::Overflow))
    }

    /// Owner self-report window: active pledge, deadline passed, grace
    /// period not yet over.
    pub fn check_reportable(&self, now: i64, grace_period_seconds: i64) -> Result<()> {
        require!(self.is_active(), PledgeError::PledgeNotActive);
        require!(now >= self.deadline, PledgeError::DeadlineNotPassed);
        require!(
            now <= self.grace_period_end(grace_period_seconds)?,
            PledgeError::GracePeriodEnded
        );
        Ok(())
    }

    /// Crank window: active pledge whose grace period has fully lapsed.
    /// Strict complement of the report window, so no instant satisfies both.
    pub fn check_expired(&self, now: i64, grace_period_seconds: i64) -> Result<()> {
        require!(self.is_active(), PledgeError::PledgeNotActive);
        require!(
            now > self.grace_period_end(grace_period_seconds)?,
            PledgeError::GracePeriodNotEnded
        );
        Ok(())
    }
}

#[event]
pub struct PledgeCreated {
    pub pledge: Pubkey,
    pub user: Pubkey,
    pub stake_amount: u64,
    pub deadline: i64,
}

#[event]
pub struct PledgeEdited {
    pub pledge: Pubkey,
    pub penalty_paid: u64,
    pub new_deadline: i64,
}

#[event]
pub struct CompletionReported {
    pub pledge: Pubkey,
    pub completion_percentage: u8,
}

#[event]
pub struct PledgeCompleted {
    pub pledge: Pubkey,
    pub completion_percentage: u8,
    pub refund_amount: u64,
    pub fee_amount: u64,
}

#[event]
pub struct PledgeForfeited {
    pub pledge: Pubkey,
    pub treasury_amount: u64,
    pub charity_amount: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRACE: i64 = 86_400;

    fn active_pledge(deadline: i64) -> Pledge {
        Pledge {
            user: Pubkey::new_unique(),
            mint: Pubkey::new_unique(),
            stake_amount: 10_000_000,
            deadline,
            created_at: deadline - 3_600,
            status: PledgeStatus::Active,
            bump: 254,
            vault_bump: 253,
        }
    }

    #[test]
    fn report_window_boundaries() {
        let p = active_pledge(1_000_000);

        // before the deadline: too early
        assert!(p.check_reportable(999_999, GRACE).is_err());
        // at the deadline and up to the end of grace: allowed
        assert!(p.check_reportable(1_000_000, GRACE).is_ok());
        assert!(p.check_reportable(1_000_000 + GRACE, GRACE).is_ok());
        // one second past grace: closed
        assert!(p.check_reportable(1_000_000 + GRACE + 1, GRACE).is_err());
    }

    #[test]
    fn expiry_window_is_the_complement() {
        let p = active_pledge(1_000_000);

        assert!(p.check_expired(1_000_000, GRACE).is_err());
        assert!(p.check_expired(1_000_000 + GRACE, GRACE).is_err());
        assert!(p.check_expired(1_000_000 + GRACE + 1, GRACE).is_ok());

        // every instant around the boundary belongs to exactly one path
        for now in (1_000_000 - 2)..(1_000_000 + GRACE + 3) {
            let report = p.check_reportable(now, GRACE).is_ok();
            let expire = p.check_expired(now, GRACE).is_ok();
            assert!(!(report && expire), "both windows open at {now}");
        }
    }

    #[test]
    fn terminal_and_reported_states_are_not_crankable_as_active() {
        let mut p = active_pledge(1_000_000);
        let late = 1_000_000 + GRACE + 100;

        for status in [
            PledgeStatus::Reported {
                completion_percentage: 50,
                reported_at: 1_000_100,
            },
            PledgeStatus::Completed {
                completion_percentage: 100,
            },
            PledgeStatus::Forfeited,
        ] {
            p.status = status;
            assert!(p.check_expired(late, GRACE).is_err());
            assert!(p.check_reportable(1_000_000, GRACE).is_err());
        }
    }

    #[test]
    fn completion_data_rides_on_the_variant() {
        let mut p = active_pledge(1_000_000);
        assert_eq!(p.completion_percentage(), None);
        assert_eq!(p.reported_at(), None);

        p.status = PledgeStatus::Reported {
            completion_percentage: 75,
            reported_at: 1_000_500,
        };
        assert_eq!(p.completion_percentage(), Some(75));
        assert_eq!(p.reported_at(), Some(1_000_500));

        p.status = PledgeStatus::Completed {
            completion_percentage: 75,
        };
        assert_eq!(p.completion_percentage(), Some(75));
        assert_eq!(p.reported_at(), None);

        p.status = PledgeStatus::Forfeited;
        assert_eq!(p.completion_percentage(), None);
    }

    #[test]
    fn grace_end_overflow_is_caught() {
        let p = active_pledge(i64::MAX - 10);
        assert!(p.grace_period_end(GRACE).is_err());
    }

    #[test]
    fn status_serialized_size_fits_reserved_space() {
        let largest = PledgeStatus::Reported {
            completion_percentage: 100,
            reported_at: i64::MAX,
        };
        let bytes = largest.try_to_vec().unwrap();
        assert!(bytes.len() <= 10, "status needs {} bytes", bytes.len());
    }
}

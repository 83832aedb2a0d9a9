// Basis-point arithmetic for refunds, fees and the treasury/charity split.
//
// Pure and integer-only: token amounts are u64 (6-decimal fixed point for
// USDC-like mints), rates are u16 basis points. Every multiplication is
// checked; division floors.

use anchor_lang::prelude::*;

use crate::constants::BPS_DENOMINATOR;
use crate::errors::PledgeError;

/// All amounts produced by settling a pledge at a given completion
/// percentage. Invariant: `refund + treasury + charity == stake`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settlement {
    /// Returned to the user.
    pub refund: u64,
    /// Fee charged on the refunded portion (0 at 100% completion).
    pub fee: u64,
    /// Stake not covered by the completion percentage.
    pub forfeited: u64,
    /// Treasury's share of `fee + forfeited`.
    pub treasury: u64,
    /// Charity's share of `fee + forfeited` (absorbs rounding).
    pub charity: u64,
}

/// `floor(amount * bps / 10000)`.
pub fn bps_fee(amount: u64, bps: u16) -> Result<u64> {
    Ok(amount
        .checked_mul(bps as u64)
        .ok_or(PledgeError::Overflow)?
        / BPS_DENOMINATOR)
}

/// Split `total` between treasury and charity. The treasury share is
/// floored and charity takes the remainder, so the two always sum to
/// `total` exactly.
pub fn split(total: u64, treasury_split_bps: u16) -> Result<(u64, u64)> {
    let treasury = bps_fee(total, treasury_split_bps)?;
    let charity = total.checked_sub(treasury).ok_or(PledgeError::Underflow)?;
    Ok((treasury, charity))
}

/// Refund and fee for a completion percentage in [0, 100].
///
/// The proportional share of the stake is refunded minus a fee; a full
/// completion is refunded in whole with no fee.
pub fn partial_refund(
    stake_amount: u64,
    completion_percentage: u8,
    fee_bps: u16,
) -> Result<(u64, u64)> {
    require!(
        completion_percentage <= 100,
        PledgeError::InvalidCompletionPercentage
    );

    let proportional = stake_amount
        .checked_mul(completion_percentage as u64)
        .ok_or(PledgeError::Overflow)?
        / 100;

    let fee = if completion_percentage == 100 {
        0
    } else {
        bps_fee(proportional, fee_bps)?
    };

    let refund = proportional.checked_sub(fee).ok_or(PledgeError::Underflow)?;

    Ok((refund, fee))
}

/// Full settlement breakdown for a pledge: refund to the user, and the
/// forfeited remainder plus the partial-completion fee split between
/// treasury and charity.
pub fn settle(
    stake_amount: u64,
    completion_percentage: u8,
    partial_fee_bps: u16,
    treasury_split_bps: u16,
) -> Result<Settlement> {
    let (refund, fee) = partial_refund(stake_amount, completion_percentage, partial_fee_bps)?;

    let forfeited = stake_amount
        .checked_sub(refund)
        .ok_or(PledgeError::Underflow)?
        .checked_sub(fee)
        .ok_or(PledgeError::Underflow)?;

    let to_split = fee.checked_add(forfeited).ok_or(PledgeError::Overflow)?;
    let (treasury, charity) = split(to_split, treasury_split_bps)?;

    Ok(Settlement {
        refund,
        fee,
        forfeited,
        treasury,
        charity,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const STAKE: u64 = 10_000_000; // 10 units at 6 decimals

    #[test]
    fn full_completion_refunds_everything() {
        // Scenario A: pct=100 refunds the stake, nothing to split
        let s = settle(STAKE, 100, 100, 7000).unwrap();
        assert_eq!(s.refund, STAKE);
        assert_eq!(s.fee, 0);
        assert_eq!(s.forfeited, 0);
        assert_eq!(s.treasury, 0);
        assert_eq!(s.charity, 0);
    }

    #[test]
    fn half_completion_with_fee() {
        // Scenario B: 50% of 10_000_000 = 5_000_000, 1% fee = 50_000,
        // refund 4_950_000, split 5_050_000 at 70/30
        let s = settle(STAKE, 50, 100, 7000).unwrap();
        assert_eq!(s.refund, 4_950_000);
        assert_eq!(s.fee, 50_000);
        assert_eq!(s.forfeited, 5_000_000);
        assert_eq!(s.treasury, 3_535_000);
        assert_eq!(s.charity, 1_515_000);
    }

    #[test]
    fn zero_completion_forfeits_everything() {
        // Scenario C: full forfeiture, 70/30 split of the whole stake
        let s = settle(STAKE, 0, 100, 7000).unwrap();
        assert_eq!(s.refund, 0);
        assert_eq!(s.fee, 0);
        assert_eq!(s.treasury, 7_000_000);
        assert_eq!(s.charity, 3_000_000);
    }

    #[test]
    fn edit_penalty_scenario() {
        // Scenario D: 10% penalty on 10_000_000, split 70/30
        let penalty = bps_fee(STAKE, 1000).unwrap();
        assert_eq!(penalty, 1_000_000);
        let (treasury, charity) = split(penalty, 7000).unwrap();
        assert_eq!(treasury, 700_000);
        assert_eq!(charity, 300_000);
    }

    #[test]
    fn settlement_conserves_stake() {
        // refund + treasury + charity == stake for every percentage,
        // including amounts that do not divide evenly
        for stake in [1u64, 99, 10_000_000, 123_456_789] {
            for pct in 0..=100u8 {
                let s = settle(stake, pct, 100, 7000).unwrap();
                assert_eq!(
                    s.refund + s.treasury + s.charity,
                    stake,
                    "leak at stake={stake} pct={pct}"
                );
                assert_eq!(s.fee + s.forfeited, s.treasury + s.charity);
            }
        }
    }

    #[test]
    fn split_never_leaks() {
        for total in [0u64, 1, 3, 9_999, 10_001, 1_000_000] {
            for bps in (0..=10_000u16).step_by(37) {
                let (treasury, charity) = split(total, bps).unwrap();
                assert_eq!(treasury + charity, total);
            }
            let (treasury, charity) = split(total, 10_000).unwrap();
            assert_eq!(treasury, total);
            assert_eq!(charity, 0);
        }
    }

    #[test]
    fn partial_refund_floors() {
        // 33% of 100 = 33, 1% fee of 33 floors to 0
        let (refund, fee) = partial_refund(100, 33, 100).unwrap();
        assert_eq!(refund, 33);
        assert_eq!(fee, 0);
    }

    #[test]
    fn percentage_over_100_rejected() {
        assert!(partial_refund(STAKE, 101, 100).is_err());
        assert!(settle(STAKE, 255, 100, 7000).is_err());
    }

    #[test]
    fn large_stake_does_not_overflow() {
        // Near the 64-bit ceiling the intermediate product must be caught
        assert!(partial_refund(u64::MAX, 50, 100).is_err());
        assert!(settle(u64::MAX / 200, 50, 100, 7000).is_err());
        // But any stake whose bps products fit in u64 settles fine
        let stake = u64::MAX / 20_000;
        let s = settle(stake, 50, 100, 7000).unwrap();
        assert_eq!(s.refund + s.treasury + s.charity, stake);
    }
}

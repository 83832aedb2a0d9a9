use anchor_lang::prelude::*;

#[error_code]
pub enum PledgeError {
    // Authorization
    #[msg("Only the config admin can perform this action")]
    Unauthorized,

    #[msg("Only the pledge owner can perform this action")]
    NotPledgeOwner,

    // Config
    #[msg("Program is paused")]
    ProgramPaused,

    #[msg("Treasury split must be <= 10000 bps")]
    InvalidTreasurySplit,

    #[msg("Fee must be <= 1000 bps (10%)")]
    InvalidFee,

    // Validation
    #[msg("Timestamp exceeds clock drift tolerance")]
    InvalidTimestamp,

    #[msg("Deadline must be in the future")]
    InvalidDeadline,

    #[msg("Stake amount must be greater than 0")]
    InvalidStakeAmount,

    #[msg("Completion percentage must be 0-100")]
    InvalidCompletionPercentage,

    // State
    #[msg("Pledge is not active")]
    PledgeNotActive,

    #[msg("Pledge has not been reported")]
    PledgeNotReported,

    // Timing
    #[msg("Deadline has not passed yet")]
    DeadlineNotPassed,

    #[msg("Deadline has already passed")]
    DeadlineAlreadyPassed,

    #[msg("Grace period has not ended")]
    GracePeriodNotEnded,

    #[msg("Grace period has ended - report window closed")]
    GracePeriodEnded,

    // Math
    #[msg("Arithmetic overflow")]
    Overflow,

    #[msg("Arithmetic underflow")]
    Underflow,
}

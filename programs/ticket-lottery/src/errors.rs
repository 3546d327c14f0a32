//! Error definitions for the Ticket Lottery program
//!
//! Every failure aborts the whole transaction, so none of these are recoverable in-call.
use anchor_lang::prelude::*;

/// Custom error codes for the ticket lottery program
#[error_code]
pub enum LotteryError {
    #[msg("The attached payment does not cover the requested tickets.")]
    InsufficientPayment,
    #[msg("Only the lottery admin can perform this action.")]
    Unauthorized,
    #[msg("The round cannot be closed while tickets remain unsold.")]
    RoundNotFinished,
    #[msg("The lottery cannot be reconfigured while a round has sold tickets.")]
    RoundInProgress,
    #[msg("This program does not accept unknown instructions or bare transfers.")]
    NotAllowed,
    #[msg("Tickets per round must be between 1 and MAX_TICKETS.")]
    InvalidMaxTickets,
    #[msg("The winner account does not hold the drawn ticket.")]
    WinnerMismatch,
    #[msg("Lamport arithmetic overflowed.")]
    ArithmeticOverflow,
    #[msg("The lottery holds fewer lamports than the tickets sold.")]
    PotShortfall,
}

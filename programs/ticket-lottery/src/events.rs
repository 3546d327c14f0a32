//! Events module for the Ticket Lottery program
//! Contains all event structures that are emitted by the program instructions
//! for off-chain tracking and monitoring.
use anchor_lang::prelude::*;

/// Emitted when the lottery account is created
#[event]
pub struct LotteryInitialized {
    pub admin: Pubkey,
    pub ticket_cost: u64,
    pub max_tickets: u32,
    pub lottery: Pubkey,
}

/// Emitted on every successful ticket purchase, including capped zero-ticket purchases
#[event]
pub struct TicketsPurchased {
    pub buyer: Pubkey,
    /// Index of the first ticket assigned in this purchase
    pub first_ticket: u32,
    pub amount: u32,
    pub cost: u64,
    pub refund: u64,
    pub tickets_available: u32,
    pub lottery: Pubkey,
}

/// Emitted when the admin closes a round and the pot is paid out
#[event]
pub struct RoundClosed {
    pub random_seed: u64,
    pub winner_index: u32,
    pub winner: Pubkey,
    pub payout: u64,
    pub lottery: Pubkey,
}

/// Emitted when ticket price or round size changes
#[event]
pub struct LotteryConfigured {
    pub admin: Pubkey,
    pub ticket_cost: u64,
    pub max_tickets: u32,
    pub lottery: Pubkey,
}

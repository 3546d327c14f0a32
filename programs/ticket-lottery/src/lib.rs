//! Ticket Lottery Program
//!
//! A Solana program that runs one ticket lottery round at a time:
//! - Anyone buys numbered tickets with lamports; overpayment is refunded in the same call
//! - The admin closes a sold-out round with a seed and the whole pot goes to the drawn ticket
//!
//! Price and round size can only be changed by the admin between rounds.

#![allow(deprecated)]
#![allow(unexpected_cfgs)]
use anchor_lang::prelude::*;

pub mod constants;
pub mod contexts;
pub mod errors;
pub mod events;
pub mod helpers;
pub mod instructions;
pub mod states;


pub use contexts::*;

declare_id!("7fY6gC8VLY5RXSVCKeer7r1q7NFyUvxQgCAwdTHzrbGK");

#[program]
pub mod ticket_lottery {
    use super::*;

    // ========================================
    // Admin Instructions
    // ========================================

    /// Create the lottery; only the upgrade authority may call this
    pub fn initialize(ctx: Context<Initialize>, admin: Pubkey) -> Result<()> {
        instructions::admin::initialize(ctx, admin)
    }

    /// Close a sold-out round and pay the pot to `players[random_seed % max_tickets]`
    pub fn end_game(ctx: Context<EndGame>, random_seed: u64) -> Result<()> {
        instructions::admin::end_game(ctx, random_seed)
    }

    /// Set ticket price and round size between rounds
    pub fn change_variables(
        ctx: Context<ChangeVariables>,
        ticket_cost: u64,
        max_tickets: u32,
    ) -> Result<()> {
        instructions::admin::change_variables(ctx, ticket_cost, max_tickets)
    }

    /// Set ticket price between rounds
    pub fn change_ticket_cost(ctx: Context<AdminAction>, ticket_cost: u64) -> Result<()> {
        instructions::admin::change_ticket_cost(ctx, ticket_cost)
    }

    /// Set round size between rounds
    pub fn change_max_tickets(ctx: Context<ChangeMaxTickets>, max_tickets: u32) -> Result<()> {
        instructions::admin::change_max_tickets(ctx, max_tickets)
    }

    // ========================================
    // User Instructions
    // ========================================

    /// Buy up to `amount` tickets, attaching `payment` lamports
    pub fn buy_ticket(ctx: Context<BuyTicket>, amount: u32, payment: u64) -> Result<()> {
        instructions::user::buy_ticket(ctx, amount, payment)
    }

    /// Catch-all for unknown instructions
    pub fn fallback<'info>(
        _program_id: &Pubkey,
        _accounts: &'info [AccountInfo<'info>],
        _data: &[u8],
    ) -> Result<()> {
        instructions::user::reject_unknown_instruction()
    }
}

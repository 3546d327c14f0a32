use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, states::*};

/// ========================================
/// Account Structs
/// ========================================

/// Accounts required for creating the lottery
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// The lottery state account (PDA)
    #[account(
        init,
        payer = authority,
        space = 8 + Lottery::space(DEFAULT_MAX_TICKETS),
        seeds = [LOTTERY_SEED],
        bump
    )]
    pub lottery: Account<'info, Lottery>,
    /// Upgrade authority of this program, paying for the lottery account
    #[account(mut)]
    pub authority: Signer<'info>,
    /// This program, to locate its program data account
    #[account(constraint = program.programdata_address()? == Some(program_data.key()))]
    pub program: Program<'info, crate::program::TicketLottery>,
    /// Program data holding the upgrade authority
    #[account(
        constraint = program_data.upgrade_authority_address == Some(authority.key())
            @ LotteryError::Unauthorized
    )]
    pub program_data: Account<'info, ProgramData>,
    /// System program for account creation
    pub system_program: Program<'info, System>,
}

/// Accounts required for buying tickets
#[derive(Accounts)]
pub struct BuyTicket<'info> {
    /// The lottery state, also holding the pot
    #[account(
        mut,
        seeds = [LOTTERY_SEED],
        bump = lottery.bump,
    )]
    pub lottery: Account<'info, Lottery>,
    /// Buyer paying for the tickets and receiving any refund
    #[account(mut)]
    pub buyer: Signer<'info>,
    /// System program for the payment transfer
    pub system_program: Program<'info, System>,
}

/// Accounts required for closing a round
#[derive(Accounts)]
pub struct EndGame<'info> {
    /// The lottery state, also holding the pot
    #[account(
        mut,
        seeds = [LOTTERY_SEED],
        bump = lottery.bump,
        has_one = admin @ LotteryError::Unauthorized,
    )]
    pub lottery: Account<'info, Lottery>,
    /// Admin account (must match lottery.admin)
    pub admin: Signer<'info>,
    /// Holder of the drawn ticket
    /// CHECK: Compared against the drawn ticket holder in the instruction
    #[account(mut)]
    pub winner: UncheckedAccount<'info>,
}

/// Accounts required for changing the ticket price and round size together
#[derive(Accounts)]
#[instruction(ticket_cost: u64, max_tickets: u32)]
pub struct ChangeVariables<'info> {
    /// The lottery state to reconfigure
    #[account(
        mut,
        seeds = [LOTTERY_SEED],
        bump = lottery.bump,
        has_one = admin @ LotteryError::Unauthorized,
        // Resize to hold one pubkey per ticket of the new round size
        realloc = 8 + Lottery::space(max_tickets.min(MAX_TICKETS)),
        realloc::payer = admin,
        realloc::zero = false,
    )]
    pub lottery: Account<'info, Lottery>,
    /// Admin account (must match lottery.admin)
    #[account(mut)]
    pub admin: Signer<'info>,
    /// System program for reallocation
    pub system_program: Program<'info, System>,
}

/// Accounts required for changing the round size
#[derive(Accounts)]
#[instruction(max_tickets: u32)]
pub struct ChangeMaxTickets<'info> {
    /// The lottery state to reconfigure
    #[account(
        mut,
        seeds = [LOTTERY_SEED],
        bump = lottery.bump,
        has_one = admin @ LotteryError::Unauthorized,
        realloc = 8 + Lottery::space(max_tickets.min(MAX_TICKETS)),
        realloc::payer = admin,
        realloc::zero = false,
    )]
    pub lottery: Account<'info, Lottery>,
    /// Admin account (must match lottery.admin)
    #[account(mut)]
    pub admin: Signer<'info>,
    /// System program for reallocation
    pub system_program: Program<'info, System>,
}

/// Accounts required for admin actions that do not resize the lottery
#[derive(Accounts)]
pub struct AdminAction<'info> {
    /// The lottery state to modify
    #[account(
        mut,
        seeds = [LOTTERY_SEED],
        bump = lottery.bump,
        has_one = admin @ LotteryError::Unauthorized,
    )]
    pub lottery: Account<'info, Lottery>,
    /// Admin account (must match lottery.admin)
    pub admin: Signer<'info>,
}

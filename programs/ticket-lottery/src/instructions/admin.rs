use anchor_lang::prelude::*;

use crate::{contexts::*, events::*, helpers::*, states::Lottery};

/// ========================================
/// Admin Instructions
/// ========================================

/// Create the lottery
///
/// Only the program's upgrade authority may create it, so nobody can claim
/// the admin role by initializing first. The first round starts fresh with
/// the default price and size.
///
/// Args:
/// - ctx: Context containing the lottery PDA, the upgrade authority and program data
/// - admin: Account that administers the lottery for the lifetime of the program
///
/// Returns: Result indicating success or failure
pub fn initialize(ctx: Context<Initialize>, admin: Pubkey) -> Result<()> {
    let lottery = &mut ctx.accounts.lottery;
    lottery.set_inner(Lottery::new(admin, ctx.bumps.lottery));

    msg!("Lottery created by {} for admin {}", ctx.accounts.authority.key(), admin);

    emit!(LotteryInitialized {
        admin,
        ticket_cost: lottery.ticket_cost,
        max_tickets: lottery.max_tickets,
        lottery: lottery.key(),
    });
    Ok(())
}

/// Close a sold-out round and pay the whole pot to the drawn ticket holder
///
/// Process:
/// 1. Measure the pot (lamports above the rent-exempt floor) and check it
///    covers the tickets sold
/// 2. Draw `players[random_seed % max_tickets]`, check the supplied winner
///    account against it and reset the round
/// 3. Move the pot to the winner
///
/// Args:
/// - ctx: Context containing the lottery, admin and winner accounts
/// - random_seed: Externally supplied seed, trusted as is
///
/// Returns: Result indicating success or failure
pub fn end_game(ctx: Context<EndGame>, random_seed: u64) -> Result<()> {
    let lottery_info = ctx.accounts.lottery.to_account_info();
    let rent_floor = Rent::get()?.minimum_balance(lottery_info.data_len());
    let payout = pot_balance(lottery_info.lamports(), rent_floor);

    let lottery = &mut ctx.accounts.lottery;
    lottery.ensure_pot_covered(payout)?;

    // ============ DRAW & RESET ============
    let draw = lottery.close_round(
        &ctx.accounts.admin.key(),
        random_seed,
        &ctx.accounts.winner.key(),
    )?;

    msg!("Seed {} drew ticket {}", random_seed, draw.winner_index);
    msg!("Paying {} lamports to {}", payout, draw.winner);

    // ============ PAYOUT ============
    pay_out(&lottery_info, &ctx.accounts.winner.to_account_info(), payout)?;

    emit!(RoundClosed {
        random_seed,
        winner_index: draw.winner_index,
        winner: draw.winner,
        payout,
        lottery: lottery.key(),
    });
    Ok(())
}

/// Change ticket price and round size between rounds
///
/// Args:
/// - ctx: Context containing the lottery (resized to the new round) and admin
/// - ticket_cost: New price per ticket in lamports
/// - max_tickets: New number of tickets per round
///
/// Constraints:
/// - No tickets sold in the current round
/// - 1 <= max_tickets <= MAX_TICKETS
pub fn change_variables(
    ctx: Context<ChangeVariables>,
    ticket_cost: u64,
    max_tickets: u32,
) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    let lottery = &mut ctx.accounts.lottery;
    lottery.set_variables(&admin, ticket_cost, max_tickets)?;

    emit_configured(lottery, admin);
    Ok(())
}

/// Change the ticket price between rounds
pub fn change_ticket_cost(ctx: Context<AdminAction>, ticket_cost: u64) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    let lottery = &mut ctx.accounts.lottery;
    lottery.set_ticket_cost(&admin, ticket_cost)?;

    emit_configured(lottery, admin);
    Ok(())
}

/// Change the round size between rounds
///
/// The lottery account is resized so every ticket of the new round has a slot.
pub fn change_max_tickets(ctx: Context<ChangeMaxTickets>, max_tickets: u32) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    let lottery = &mut ctx.accounts.lottery;
    lottery.set_max_tickets(&admin, max_tickets)?;

    emit_configured(lottery, admin);
    Ok(())
}

fn emit_configured(lottery: &Account<Lottery>, admin: Pubkey) {
    emit!(LotteryConfigured {
        admin,
        ticket_cost: lottery.ticket_cost,
        max_tickets: lottery.max_tickets,
        lottery: lottery.key(),
    });
}

use anchor_lang::prelude::*;

use crate::{contexts::*, errors::LotteryError, events::*, helpers::*};

/// ========================================
/// User Instructions
/// ========================================

/// Buy tickets in the current round
///
/// The sale is capped at the tickets left, so over-asking never fails; the
/// part of the payment not needed for the capped amount goes straight back
/// to the buyer.
///
/// Process:
/// 1. Cap the amount and check the payment covers it
/// 2. Record the buyer against the next ticket indices
/// 3. Collect the attached payment
/// 4. Refund any excess
///
/// Args:
/// - ctx: Context containing the lottery and buyer accounts
/// - amount: Tickets requested
/// - payment: Lamports attached to the purchase
///
/// Returns: Result indicating success or failure
pub fn buy_ticket(ctx: Context<BuyTicket>, amount: u32, payment: u64) -> Result<()> {
    let buyer = ctx.accounts.buyer.key();
    let lottery = &mut ctx.accounts.lottery;

    // ============ TICKET ASSIGNMENT ============
    let purchase = lottery.purchase(buyer, amount, payment)?;
    if purchase.amount < amount {
        msg!(
            "Requested {} tickets, {} left; selling {}",
            amount,
            purchase.amount + lottery.tickets_available,
            purchase.amount
        );
    }

    // ============ PAYMENT & REFUND ============
    let lottery_info = lottery.to_account_info();
    let buyer_info = ctx.accounts.buyer.to_account_info();
    collect_payment(
        ctx.accounts.system_program.to_account_info(),
        buyer_info.clone(),
        lottery_info.clone(),
        payment,
    )?;
    if purchase.refund > 0 {
        msg!("Refunding {} lamports", purchase.refund);
        pay_out(&lottery_info, &buyer_info, purchase.refund)?;
    }

    emit!(TicketsPurchased {
        buyer,
        first_ticket: purchase.first_ticket,
        amount: purchase.amount,
        cost: purchase.cost,
        refund: purchase.refund,
        tickets_available: lottery.tickets_available,
        lottery: lottery.key(),
    });
    Ok(())
}

/// Reject any instruction the program does not define
///
/// Bare transfers and unknown selectors land here and always fail.
pub fn reject_unknown_instruction() -> Result<()> {
    msg!("Unknown instruction");
    err!(LotteryError::NotAllowed)
}

use anchor_lang::prelude::*;

use crate::errors::LotteryError;

/// ========================================
/// Lamport Helper Functions
/// ========================================

/// Moves the payment attached to a purchase into the lottery account
///
/// Uses the System Program so the buyer's signature authorizes the debit.
/// A zero payment is a no-op.
///
/// Args:
/// - system_program: System program account info
/// - buyer: Signer paying for the tickets
/// - lottery: Lottery account receiving the payment
/// - payment: Lamports attached by the buyer
pub fn collect_payment<'info>(
    system_program: AccountInfo<'info>,
    buyer: AccountInfo<'info>,
    lottery: AccountInfo<'info>,
    payment: u64,
) -> Result<()> {
    if payment == 0 {
        return Ok(());
    }

    let cpi_context = CpiContext::new(
        system_program,
        anchor_lang::system_program::Transfer {
            from: buyer,
            to: lottery,
        },
    );
    anchor_lang::system_program::transfer(cpi_context, payment)
}

/// Pays lamports out of the program-owned lottery account
///
/// The lottery account is owned by this program, so it is debited directly
/// rather than through a CPI. Must run after any CPI touching the same
/// accounts in the instruction.
pub fn pay_out(lottery: &AccountInfo, recipient: &AccountInfo, amount: u64) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    let lottery_balance = lottery
        .lamports()
        .checked_sub(amount)
        .ok_or_else(|| error!(LotteryError::ArithmeticOverflow))?;
    let recipient_balance = recipient
        .lamports()
        .checked_add(amount)
        .ok_or_else(|| error!(LotteryError::ArithmeticOverflow))?;

    **lottery.try_borrow_mut_lamports()? = lottery_balance;
    **recipient.try_borrow_mut_lamports()? = recipient_balance;

    Ok(())
}

/// Lamports held by the lottery above its rent-exempt floor
pub fn pot_balance(lamports: u64, rent_floor: u64) -> u64 {
    lamports.saturating_sub(rent_floor)
}

//! States module for the Ticket Lottery program
//!
//! Holds the singleton lottery account and every state transition the
//! instructions apply to it. Transitions validate first and mutate last, so
//! a failed call never leaves a half-applied round behind.
use anchor_lang::prelude::*;

use crate::{
    constants::{DEFAULT_MAX_TICKETS, DEFAULT_TICKET_COST, MAX_TICKETS},
    errors::LotteryError,
};

/// Main state account for the lottery
///
/// `players[i]` is the holder of ticket `i`. The vector only grows during a
/// round and is cleared when the round closes.
#[account]
#[derive(Debug, PartialEq, Eq)]
pub struct Lottery {
    /// Public key of the admin; set once at initialization
    pub admin: Pubkey,
    /// PDA bump seed for this account
    pub bump: u8,
    /// Price of one ticket in lamports
    pub ticket_cost: u64,
    /// Tickets sold per round
    pub max_tickets: u32,
    /// Tickets still unsold in the current round
    pub tickets_available: u32,
    /// Ticket holders, indexed by ticket number
    pub players: Vec<Pubkey>,
}

/// Outcome of a ticket purchase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicketPurchase {
    /// Index of the first ticket assigned to the buyer
    pub first_ticket: u32,
    /// Tickets actually sold, after capping at availability
    pub amount: u32,
    /// Lamports kept by the lottery
    pub cost: u64,
    /// Lamports owed back to the buyer
    pub refund: u64,
}

/// Outcome of closing a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Draw {
    pub winner_index: u32,
    pub winner: Pubkey,
}

impl Lottery {
    /// Account size (without discriminator) for a round of `max_tickets`
    pub const fn space(max_tickets: u32) -> usize {
        32 // admin pubkey
        + 1 // bump
        + 8 // ticket_cost
        + 4 // max_tickets
        + 4 // tickets_available
        + 4 // players vector length prefix
        + 32 * max_tickets as usize // one pubkey per ticket
    }

    pub fn new(admin: Pubkey, bump: u8) -> Self {
        Self {
            admin,
            bump,
            ticket_cost: DEFAULT_TICKET_COST,
            max_tickets: DEFAULT_MAX_TICKETS,
            tickets_available: DEFAULT_MAX_TICKETS,
            players: Vec::with_capacity(DEFAULT_MAX_TICKETS as usize),
        }
    }

    /// Lamports the pot must hold for the tickets sold so far
    pub fn pot_owed(&self) -> Result<u64> {
        self.ticket_cost
            .checked_mul(self.players.len() as u64)
            .ok_or_else(|| error!(LotteryError::ArithmeticOverflow))
    }

    /// The measured pot must cover every ticket sold this round
    pub fn ensure_pot_covered(&self, pot: u64) -> Result<()> {
        require!(pot >= self.pot_owed()?, LotteryError::PotShortfall);
        Ok(())
    }

    pub fn ensure_admin(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.admin, LotteryError::Unauthorized);
        Ok(())
    }

    /// Configuration is only allowed on an untouched round
    pub fn ensure_round_idle(&self) -> Result<()> {
        require!(
            self.tickets_available == self.max_tickets,
            LotteryError::RoundInProgress
        );
        require!(self.players.is_empty(), LotteryError::RoundInProgress);
        Ok(())
    }

    /// Sell up to `requested` tickets to `buyer` against `payment` lamports.
    ///
    /// Asking for more than is left never fails: the sale is capped at
    /// `tickets_available` and the remainder of the payment is refunded.
    pub fn purchase(
        &mut self,
        buyer: Pubkey,
        requested: u32,
        payment: u64,
    ) -> Result<TicketPurchase> {
        let amount = requested.min(self.tickets_available);
        let cost = self
            .ticket_cost
            .checked_mul(amount as u64)
            .ok_or_else(|| error!(LotteryError::ArithmeticOverflow))?;
        require!(payment >= cost, LotteryError::InsufficientPayment);

        let first_ticket = self.players.len() as u32;
        self.players
            .extend(std::iter::repeat(buyer).take(amount as usize));
        self.tickets_available -= amount;

        Ok(TicketPurchase {
            first_ticket,
            amount,
            cost,
            refund: payment - cost,
        })
    }

    /// Draw the winner for `random_seed` and reset to a fresh round.
    ///
    /// The winner is `players[random_seed % max_tickets]`; `winner` is the
    /// account the caller supplied to receive the pot and must match it.
    pub fn close_round(
        &mut self,
        caller: &Pubkey,
        random_seed: u64,
        winner: &Pubkey,
    ) -> Result<Draw> {
        self.ensure_admin(caller)?;
        require!(self.tickets_available == 0, LotteryError::RoundNotFinished);

        let winner_index = self.drawn_index(random_seed);
        let holder = *self
            .players
            .get(winner_index as usize)
            .ok_or_else(|| error!(LotteryError::RoundNotFinished))?;
        require_keys_eq!(*winner, holder, LotteryError::WinnerMismatch);

        self.players.clear();
        self.tickets_available = self.max_tickets;

        Ok(Draw {
            winner_index,
            winner: holder,
        })
    }

    /// Ticket index drawn by `random_seed`
    pub fn drawn_index(&self, random_seed: u64) -> u32 {
        (random_seed % self.max_tickets as u64) as u32
    }

    pub fn set_variables(
        &mut self,
        caller: &Pubkey,
        ticket_cost: u64,
        max_tickets: u32,
    ) -> Result<()> {
        self.ensure_admin(caller)?;
        self.ensure_round_idle()?;
        validate_max_tickets(max_tickets)?;

        self.ticket_cost = ticket_cost;
        self.max_tickets = max_tickets;
        self.tickets_available = max_tickets;
        Ok(())
    }

    pub fn set_ticket_cost(&mut self, caller: &Pubkey, ticket_cost: u64) -> Result<()> {
        self.ensure_admin(caller)?;
        self.ensure_round_idle()?;

        self.ticket_cost = ticket_cost;
        Ok(())
    }

    pub fn set_max_tickets(&mut self, caller: &Pubkey, max_tickets: u32) -> Result<()> {
        self.ensure_admin(caller)?;
        self.ensure_round_idle()?;
        validate_max_tickets(max_tickets)?;

        self.max_tickets = max_tickets;
        self.tickets_available = max_tickets;
        Ok(())
    }
}

fn validate_max_tickets(max_tickets: u32) -> Result<()> {
    require!(
        max_tickets > 0 && max_tickets <= MAX_TICKETS,
        LotteryError::InvalidMaxTickets
    );
    Ok(())
}

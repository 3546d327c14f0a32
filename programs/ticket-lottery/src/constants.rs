//! Constants module for the Ticket Lottery program
//!
//! Contains all program-wide constants and configuration values.
use anchor_lang::prelude::*;

/// Seed for the lottery state PDA
#[constant]
pub const LOTTERY_SEED: &[u8] = b"lottery";

/// Upper bound on tickets per round.
/// Keeps every resize of the lottery account inside the per-instruction realloc limit.
#[constant]
pub const MAX_TICKETS: u32 = 300;

/// Ticket price set at initialization, in lamports (1 SOL)
#[constant]
pub const DEFAULT_TICKET_COST: u64 = 1_000_000_000;

/// Tickets per round set at initialization
#[constant]
pub const DEFAULT_MAX_TICKETS: u32 = 3;

use anchor_lang::prelude::*;

use crate::state::Raffle;

/// Accounts required to evaluate the upkeep predicate. Read-only.
#[derive(Accounts)]
pub struct CheckUpkeep<'info> {
    #[account(
        seeds = [b"raffle"],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,
}

/// Report whether a draw should start now.
///
/// Callable by anyone, mutates nothing, and returns false rather than
/// erroring when conditions are unmet, so the automation agent can poll it
/// cheaply on every tick. `check_data` is accepted for the automation
/// calling convention and ignored.
pub fn handler(ctx: Context<CheckUpkeep>, _check_data: Vec<u8>) -> Result<bool> {
    let now = Clock::get()?.unix_timestamp;
    Ok(ctx.accounts.raffle.upkeep_needed(now))
}

use anchor_lang::prelude::*;

use crate::events::RequestedDraw;
use crate::state::{Raffle, NUM_WORDS};

/// Accounts required to start a draw.
#[derive(Accounts)]
pub struct PerformUpkeep<'info> {
    /// The automation agent (or anyone) triggering the draw.
    pub caller: Signer<'info>,

    #[account(
        mut,
        seeds = [b"raffle"],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,
}

/// Start a draw and issue a randomness request.
///
/// The upkeep predicate is recomputed here rather than trusted from the
/// caller; if it does not hold the call fails with `UpkeepNotNeeded`.
/// On success the round flips to `Calculating` and the emitted
/// [`RequestedDraw`] event carries the oracle routing parameters, which
/// the off-chain oracle answers with `fulfill_random_words`.
/// `perform_data` is accepted for the automation calling convention and
/// ignored.
pub fn handler(ctx: Context<PerformUpkeep>, _perform_data: Vec<u8>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let raffle = &mut ctx.accounts.raffle;

    let request_id = raffle.begin_draw(now)?;

    emit!(RequestedDraw {
        request_id,
        key_hash: raffle.key_hash,
        subscription_id: raffle.subscription_id,
        request_confirmations: raffle.request_confirmations,
        callback_gas_limit: raffle.callback_gas_limit,
        num_words: NUM_WORDS,
    });

    msg!("Draw requested, request_id={}", request_id);
    Ok(())
}

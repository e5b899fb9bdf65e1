use anchor_lang::prelude::*;

use crate::state::Raffle;

/// Accounts required to look up a player by ticket index. Read-only.
#[derive(Accounts)]
pub struct GetPlayer<'info> {
    #[account(
        seeds = [b"raffle"],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,
}

/// Return the player holding the ticket at `index`.
///
/// Fails with `IndexOutOfRange` for indices at or beyond the ticket
/// count; after a round resets, every previous index is out of range.
pub fn handler(ctx: Context<GetPlayer>, index: u64) -> Result<Pubkey> {
    ctx.accounts.raffle.player_at(index)
}

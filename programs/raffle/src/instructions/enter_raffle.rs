use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::events::Entered;
use crate::state::Raffle;

/// Accounts required to buy a ticket.
#[derive(Accounts)]
pub struct EnterRaffle<'info> {
    /// The player buying the ticket; pays the entry deposit.
    #[account(mut)]
    pub player: Signer<'info>,

    /// The raffle PDA, which also holds the pot.
    #[account(
        mut,
        seeds = [b"raffle"],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,

    pub system_program: Program<'info, System>,
}

/// Buy a ticket by depositing `amount` lamports into the raffle vault.
///
/// The deposit must meet the entry fee and the round must be open.
/// Anything above the fee is accepted and goes into the pot. The same
/// player may enter repeatedly; each entry is a separate ticket.
pub fn handler(ctx: Context<EnterRaffle>, amount: u64) -> Result<()> {
    let player = ctx.accounts.player.key();
    ctx.accounts.raffle.enter(player, amount)?;

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.player.to_account_info(),
                to: ctx.accounts.raffle.to_account_info(),
            },
        ),
        amount,
    )?;

    emit!(Entered { player, amount });
    Ok(())
}

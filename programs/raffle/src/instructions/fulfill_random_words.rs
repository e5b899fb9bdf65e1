use anchor_lang::prelude::*;
use anchor_lang::solana_program::sysvar::instructions as sysvar_instructions;

use crate::ed25519::verify_ed25519_instruction;
use crate::errors::RaffleError;
use crate::events::WinnerPicked;
use crate::state::Raffle;

/// Accounts required to deliver a randomness fulfillment.
///
/// The transaction **must** include a native Ed25519 signature-verify
/// instruction at index 0 that proves the oracle authority signed the
/// message `request_id (8 LE) || random word (32)`. This is validated
/// on-chain by inspecting the Instructions sysvar.
#[derive(Accounts)]
pub struct FulfillRandomWords<'info> {
    /// The oracle delivering the randomness. Must match
    /// `raffle.oracle_authority`.
    pub oracle_authority: Signer<'info>,

    #[account(
        mut,
        seeds = [b"raffle"],
        bump = raffle.bump,
        constraint = raffle.oracle_authority == oracle_authority.key() @ RaffleError::CallerNotOracle,
    )]
    pub raffle: Account<'info, Raffle>,

    /// The account receiving the pot. Must be the player selected by the
    /// random word; the oracle derives it from the on-chain ticket list.
    /// CHECK: Validated in the handler against the selected player.
    #[account(mut)]
    pub winner: UncheckedAccount<'info>,

    /// Native Instructions sysvar used to introspect the Ed25519 instruction.
    /// CHECK: Validated by the address constraint.
    #[account(address = sysvar_instructions::ID)]
    pub instructions_sysvar: UncheckedAccount<'info>,
}

/// Deliver the random words for the pending request, pay the winner and
/// reset the round.
///
/// 1. Verifies the Ed25519 signature proof in the preceding instruction.
/// 2. Matches `request_id` against the single outstanding request; stale,
///    forged or repeated fulfillments fail with `UnknownRequest`.
/// 3. Selects the winner from the first word and moves the entire pot to
///    the winner account by direct lamport transfer.
/// 4. Clears the ticket list and the pot, reopens the round and stamps
///    `last_draw_timestamp`.
///
/// Payout and reset are atomic: any failure aborts the whole transaction,
/// leaving the round in `Calculating` with funds intact so the oracle can
/// retry the delivery.
pub fn handler(
    ctx: Context<FulfillRandomWords>,
    request_id: u64,
    random_words: Vec<[u8; 32]>,
) -> Result<()> {
    require!(!random_words.is_empty(), RaffleError::NoRandomWords);

    verify_ed25519_instruction(
        &ctx.accounts.instructions_sysvar,
        &ctx.accounts.raffle.oracle_authority,
        request_id,
        &random_words[0],
    )?;

    let now = Clock::get()?.unix_timestamp;
    let (winner, payout) = ctx
        .accounts
        .raffle
        .select_winner(request_id, &random_words[0])?;
    require_keys_eq!(
        ctx.accounts.winner.key(),
        winner,
        RaffleError::WinnerAccountMismatch
    );

    // Move the pot out of the raffle PDA. The PDA carries data, so the
    // lamports are adjusted directly rather than via the system program.
    // The rent-exempt reserve is untouched: `payout` only ever counts
    // deposits made through `enter_raffle`.
    let raffle_info = ctx.accounts.raffle.to_account_info();
    let winner_info = ctx.accounts.winner.to_account_info();
    let raffle_lamports = raffle_info
        .lamports()
        .checked_sub(payout)
        .ok_or(RaffleError::TransferFailed)?;
    let winner_lamports = winner_info
        .lamports()
        .checked_add(payout)
        .ok_or(RaffleError::TransferFailed)?;
    **raffle_info.try_borrow_mut_lamports()? = raffle_lamports;
    **winner_info.try_borrow_mut_lamports()? = winner_lamports;

    ctx.accounts.raffle.complete_draw(winner, now);

    emit!(WinnerPicked {
        request_id,
        winner,
        payout,
    });

    msg!("Winner picked: {} payout={} lamports", winner, payout);
    Ok(())
}

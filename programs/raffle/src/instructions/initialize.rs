use anchor_lang::prelude::*;

use crate::errors::RaffleError;
use crate::state::{Raffle, RaffleState};

/// Accounts required to initialize the raffle singleton.
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// The deployer who pays for account creation.
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The oracle key that will sign randomness fulfillments.
    /// CHECK: Stored as configuration; validated to be non-zero.
    pub oracle_authority: UncheckedAccount<'info>,

    /// Singleton raffle PDA. Seeds: `["raffle"]`.
    #[account(
        init,
        payer = payer,
        space = 8 + Raffle::INIT_SPACE,
        seeds = [b"raffle"],
        bump,
    )]
    pub raffle: Account<'info, Raffle>,

    pub system_program: Program<'info, System>,
}

/// Initialize the raffle with its immutable configuration.
///
/// There is no update instruction: parameters are fixed for the lifetime
/// of the deployment. The interval clock starts at initialization, so the
/// first draw becomes possible `interval` seconds from now.
pub fn handler(
    ctx: Context<Initialize>,
    entry_fee: u64,
    interval: i64,
    key_hash: [u8; 32],
    subscription_id: u64,
    request_confirmations: u16,
    callback_gas_limit: u32,
) -> Result<()> {
    require!(
        ctx.accounts.oracle_authority.key() != Pubkey::default(),
        RaffleError::ZeroAddressNotAllowed
    );
    require!(entry_fee > 0, RaffleError::InvalidEntryFee);
    require!(interval > 0, RaffleError::InvalidInterval);

    let raffle = &mut ctx.accounts.raffle;
    raffle.oracle_authority = ctx.accounts.oracle_authority.key();
    raffle.entry_fee = entry_fee;
    raffle.interval = interval;
    raffle.key_hash = key_hash;
    raffle.subscription_id = subscription_id;
    raffle.request_confirmations = request_confirmations;
    raffle.callback_gas_limit = callback_gas_limit;
    raffle.state = RaffleState::Open;
    raffle.pot_amount = 0;
    raffle.pending_request_id = 0;
    raffle.has_pending_request = false;
    raffle.request_counter = 0;
    raffle.last_draw_timestamp = Clock::get()?.unix_timestamp;
    raffle.recent_winner = Pubkey::default();
    raffle.bump = ctx.bumps.raffle;
    raffle.players = Vec::new();
    Ok(())
}

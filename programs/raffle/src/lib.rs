use anchor_lang::prelude::*;

pub mod ed25519;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;

use instructions::*;

declare_id!("DUzZbKPFw3dgLJAb5QDe9czg34GR7Q8U9cnY4kvJxagq");

/// Autonomous raffle program.
///
/// Players deposit a fixed entry fee into a program-owned vault. Once the
/// configured interval has elapsed with at least one ticket and a nonzero
/// pot, an off-chain automation agent (polling [`check_upkeep`]) calls
/// [`perform_upkeep`], which closes the round and issues a verifiable
/// randomness request. The oracle answers with [`fulfill_random_words`],
/// which selects a winner, pays out the entire pot and reopens the round.
///
/// ## Round lifecycle
///
/// 1. **Open** — `enter_raffle` accepts ticket deposits.
/// 2. **Calculating** — a draw has started; exactly one randomness request
///    is outstanding, entries and further draws are rejected. There is no
///    cancel or timeout path: if the oracle never responds, the round stays
///    in this state with funds intact.
/// 3. **Open** again — fulfillment paid the winner and reset the ledger.
///
/// Configuration (fee, interval, oracle routing) is immutable after
/// [`initialize`]; there is no admin surface.
#[program]
pub mod raffle {
    use super::*;

    /// Create the singleton raffle PDA with its immutable configuration.
    ///
    /// Must be called exactly once. Starts the interval clock.
    pub fn initialize(
        ctx: Context<Initialize>,
        entry_fee: u64,
        interval: i64,
        key_hash: [u8; 32],
        subscription_id: u64,
        request_confirmations: u16,
        callback_gas_limit: u32,
    ) -> Result<()> {
        instructions::initialize::handler(
            ctx,
            entry_fee,
            interval,
            key_hash,
            subscription_id,
            request_confirmations,
            callback_gas_limit,
        )
    }

    /// Buy a ticket by depositing at least the entry fee.
    pub fn enter_raffle(ctx: Context<EnterRaffle>, amount: u64) -> Result<()> {
        instructions::enter_raffle::handler(ctx, amount)
    }

    /// Evaluate the upkeep predicate. Read-only; never errors for unmet
    /// conditions. The `check_data` argument is ignored.
    pub fn check_upkeep(ctx: Context<CheckUpkeep>, check_data: Vec<u8>) -> Result<bool> {
        instructions::check_upkeep::handler(ctx, check_data)
    }

    /// Start a draw if the upkeep predicate holds, issuing a randomness
    /// request and emitting [`events::RequestedDraw`]. Permissionless; the
    /// `perform_data` argument is ignored.
    pub fn perform_upkeep(ctx: Context<PerformUpkeep>, perform_data: Vec<u8>) -> Result<()> {
        instructions::perform_upkeep::handler(ctx, perform_data)
    }

    /// Deliver randomness for the pending request, pay the winner and
    /// reset the round.
    ///
    /// Only callable by the configured oracle authority, with a preceding
    /// Ed25519 signature-verify instruction in the same transaction. Only
    /// the first random word is used.
    pub fn fulfill_random_words(
        ctx: Context<FulfillRandomWords>,
        request_id: u64,
        random_words: Vec<[u8; 32]>,
    ) -> Result<()> {
        instructions::fulfill_random_words::handler(ctx, request_id, random_words)
    }

    /// Look up the player holding the ticket at `index`.
    pub fn get_player(ctx: Context<GetPlayer>, index: u64) -> Result<Pubkey> {
        instructions::get_player::handler(ctx, index)
    }
}

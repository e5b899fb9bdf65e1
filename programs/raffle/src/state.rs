use anchor_lang::prelude::*;

use crate::errors::RaffleError;

/// Maximum number of ticket entries per round. Bounds the size of the
/// raffle PDA, which must be allocated up front.
pub const MAX_PLAYERS: usize = 128;

/// Number of random words requested per draw. Only the first word is
/// consumed for winner selection.
pub const NUM_WORDS: u32 = 1;

/// Round lifecycle state.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, InitSpace)]
pub enum RaffleState {
    /// Accepting entries; a draw may start once upkeep conditions hold.
    Open,
    /// A randomness request is outstanding; entries and further draw
    /// starts are rejected until the oracle fulfills.
    Calculating,
}

/// The raffle singleton, stored as a PDA.
///
/// Seeds: `["raffle"]`
///
/// The account doubles as the vault: entry deposits are lamports held by
/// this PDA on top of its rent-exempt reserve, tracked by `pot_amount`.
/// Configuration fields are written once at initialization and never
/// updated afterwards.
#[account]
#[derive(InitSpace)]
pub struct Raffle {
    /// The oracle key that is allowed to deliver randomness fulfillments.
    pub oracle_authority: Pubkey,
    /// Minimum deposit (in lamports) required per entry.
    pub entry_fee: u64,
    /// Seconds that must elapse since `last_draw_timestamp` before a draw
    /// may start.
    pub interval: i64,
    /// Randomness key identifier forwarded to the oracle with each request.
    pub key_hash: [u8; 32],
    /// Oracle subscription that is billed for requests.
    pub subscription_id: u64,
    /// Confirmations the oracle should wait for before responding.
    pub request_confirmations: u16,
    /// Compute budget the oracle should allot to the fulfillment call.
    pub callback_gas_limit: u32,
    /// Current lifecycle state.
    pub state: RaffleState,
    /// Lamports deposited by players since the last reset.
    pub pot_amount: u64,
    /// Identifier of the outstanding randomness request, valid only while
    /// `has_pending_request` is set.
    pub pending_request_id: u64,
    /// Whether a randomness request is outstanding. At most one request
    /// may be pending at a time.
    pub has_pending_request: bool,
    /// Monotonically increasing counter used to assign request identifiers.
    pub request_counter: u64,
    /// Unix timestamp of the last completed draw (or of initialization).
    pub last_draw_timestamp: i64,
    /// Winner of the most recent completed draw.
    pub recent_winner: Pubkey,
    /// PDA bump seed cached for efficient re-derivation.
    pub bump: u8,
    /// Ticket entries for the current round, in insertion order. The same
    /// player may appear multiple times, once per ticket bought.
    #[max_len(MAX_PLAYERS)]
    pub players: Vec<Pubkey>,
}

impl Raffle {
    pub fn player_count(&self) -> u64 {
        self.players.len() as u64
    }

    /// Look up the player holding the ticket at `index`.
    pub fn player_at(&self, index: u64) -> Result<Pubkey> {
        self.players
            .get(index as usize)
            .copied()
            .ok_or_else(|| error!(RaffleError::IndexOutOfRange))
    }

    /// Whether a draw should start now. Pure and side-effect free; returns
    /// false (never errors) when any condition is unmet.
    ///
    /// All four must hold: the round is open, the configured interval has
    /// elapsed since the last draw, at least one ticket was bought, and
    /// the pot is nonzero. The boundary `elapsed == interval` counts as
    /// elapsed.
    pub fn upkeep_needed(&self, now: i64) -> bool {
        self.state == RaffleState::Open
            && now.saturating_sub(self.last_draw_timestamp) >= self.interval
            && !self.players.is_empty()
            && self.pot_amount > 0
    }

    /// Record an entry: validates the fee and the round state, appends the
    /// ticket and adds the deposit to the pot.
    pub fn enter(&mut self, player: Pubkey, amount: u64) -> Result<()> {
        require!(amount >= self.entry_fee, RaffleError::InsufficientFee);
        require!(self.state == RaffleState::Open, RaffleError::RoundNotOpen);
        require!(self.players.len() < MAX_PLAYERS, RaffleError::RaffleFull);

        self.players.push(player);
        self.pot_amount = self
            .pot_amount
            .checked_add(amount)
            .ok_or(RaffleError::AmountOverflow)?;
        Ok(())
    }

    /// Start a draw: re-checks the upkeep predicate, flips the state to
    /// `Calculating` and assigns a fresh request identifier.
    ///
    /// Because the predicate is false while `Calculating`, a second call
    /// before fulfillment fails and no duplicate request can be issued.
    pub fn begin_draw(&mut self, now: i64) -> Result<u64> {
        require!(self.upkeep_needed(now), RaffleError::UpkeepNotNeeded);

        let request_id = self.request_counter;
        self.request_counter = self
            .request_counter
            .checked_add(1)
            .ok_or(RaffleError::CounterOverflow)?;
        self.state = RaffleState::Calculating;
        self.pending_request_id = request_id;
        self.has_pending_request = true;
        Ok(request_id)
    }

    /// Resolve the winner for a fulfillment without mutating state.
    ///
    /// Fails with `UnknownRequest` unless `request_id` matches the single
    /// outstanding request; this rejects stale, forged and duplicate
    /// callbacks alike. The winner index is the first eight bytes of the
    /// random word interpreted as a little-endian u64, modulo the ticket
    /// count (the modulo bias is negligible at 2^64 range).
    pub fn select_winner(&self, request_id: u64, word: &[u8; 32]) -> Result<(Pubkey, u64)> {
        require!(
            self.has_pending_request && self.pending_request_id == request_id,
            RaffleError::UnknownRequest
        );

        let value = u64::from_le_bytes(word[0..8].try_into().unwrap());
        let index = value
            .checked_rem(self.player_count())
            .ok_or(RaffleError::IndexOutOfRange)?;
        let winner = self.player_at(index)?;
        Ok((winner, self.pot_amount))
    }

    /// Reset the round after a successful payout: clears the ticket list
    /// and the pot, retires the pending request and reopens for entries.
    /// Must only be called once the pot has actually been transferred.
    pub fn complete_draw(&mut self, winner: Pubkey, now: i64) {
        self.players.clear();
        self.pot_amount = 0;
        self.has_pending_request = false;
        self.recent_winner = winner;
        self.last_draw_timestamp = now;
        self.state = RaffleState::Open;
    }
}

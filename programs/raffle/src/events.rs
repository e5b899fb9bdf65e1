use anchor_lang::prelude::*;

/// Emitted when a player buys a ticket.
#[event]
pub struct Entered {
    pub player: Pubkey,
    pub amount: u64,
}

/// Emitted when a draw starts and a randomness request is issued.
///
/// The off-chain oracle subscribes to these events via log monitoring and
/// responds with a `fulfill_random_words` transaction. The routing fields
/// tell it which key, subscription and compute budget to use.
#[event]
pub struct RequestedDraw {
    pub request_id: u64,
    pub key_hash: [u8; 32],
    pub subscription_id: u64,
    pub request_confirmations: u16,
    pub callback_gas_limit: u32,
    pub num_words: u32,
}

/// Emitted when a winner has been selected and paid the full pot.
#[event]
pub struct WinnerPicked {
    pub request_id: u64,
    pub winner: Pubkey,
    pub payout: u64,
}

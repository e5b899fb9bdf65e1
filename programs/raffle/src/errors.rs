use anchor_lang::prelude::*;

/// Error codes for the raffle program.
///
/// Anchor encodes these as `6000 + variant index` in on-chain error responses.
#[error_code]
pub enum RaffleError {
    /// The entry deposit is below the configured entry fee.
    #[msg("Entry deposit is below the entry fee")]
    InsufficientFee,
    /// A player lookup used an index at or beyond the ticket count.
    #[msg("Player index out of range")]
    IndexOutOfRange,
    /// An entry was attempted while a draw is in progress.
    #[msg("Raffle is not open to entries")]
    RoundNotOpen,
    /// The upkeep predicate is false (round closed, interval not elapsed,
    /// no players or empty pot).
    #[msg("Upkeep conditions are not met")]
    UpkeepNotNeeded,
    /// The fulfillment's request id does not match the pending request
    /// (stale, forged or duplicate callback).
    #[msg("Request id does not match the pending request")]
    UnknownRequest,
    /// The fulfillment signer is not the configured oracle authority.
    #[msg("Caller is not the oracle authority")]
    CallerNotOracle,
    /// Moving the pot to the winner failed; the draw is aborted intact.
    #[msg("Payout transfer failed")]
    TransferFailed,
    /// The winner account supplied with the fulfillment is not the player
    /// selected by the random word.
    #[msg("Winner account does not match the selected player")]
    WinnerAccountMismatch,
    /// The fulfillment carried no random words.
    #[msg("Fulfillment must supply at least one random word")]
    NoRandomWords,
    /// The ticket list is at capacity for this round.
    #[msg("Player list is at capacity")]
    RaffleFull,
    /// The entry fee must be a positive lamport amount.
    #[msg("Entry fee must be positive")]
    InvalidEntryFee,
    /// The draw interval must be a positive number of seconds.
    #[msg("Draw interval must be positive")]
    InvalidInterval,
    /// A public key argument was the zero address (`11111111111111111111111111111111`).
    #[msg("Zero address not allowed")]
    ZeroAddressNotAllowed,
    /// The request counter would overflow u64 (practically unreachable).
    #[msg("Request counter overflow")]
    CounterOverflow,
    /// Adding the deposit to the pot would overflow u64.
    #[msg("Pot amount overflow")]
    AmountOverflow,
    /// The Ed25519 instruction at index 0 could not be loaded or is malformed.
    #[msg("Invalid Ed25519 instruction")]
    InvalidEd25519Instruction,
    /// The instruction at index 0 does not target the native Ed25519 program.
    #[msg("Invalid Ed25519 program")]
    InvalidEd25519Program,
    /// Expected exactly one signature in the Ed25519 instruction.
    #[msg("Invalid signature count")]
    InvalidSignatureCount,
    /// The public key in the Ed25519 instruction does not match the oracle authority.
    #[msg("Invalid Ed25519 pubkey")]
    InvalidEd25519Pubkey,
    /// The signed message does not match `request_id || random word`.
    #[msg("Invalid Ed25519 message")]
    InvalidEd25519Message,
    /// Ed25519 instruction offset indices must be self-referencing (0xFFFF).
    #[msg("Invalid Ed25519 instruction index references")]
    InvalidEd25519InstructionIndex,
}

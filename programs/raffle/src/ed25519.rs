use anchor_lang::prelude::*;
use anchor_lang::solana_program::sysvar::instructions as sysvar_instructions;
use solana_sdk_ids::ed25519_program;

use crate::errors::RaffleError;

/// Byte length of the Ed25519 instruction header: count byte, padding byte
/// and seven u16 offset fields.
const HEADER_LEN: usize = 16;

/// Offset indices set to 0xFFFF refer to the Ed25519 instruction itself.
const SELF_REFERENCING: u16 = 0xFFFF;

/// The message the oracle must sign for a fulfillment:
/// `request_id (8 LE) || random word (32)`.
pub fn fulfillment_message(request_id: u64, word: &[u8; 32]) -> [u8; 40] {
    let mut message = [0u8; 40];
    message[0..8].copy_from_slice(&request_id.to_le_bytes());
    message[8..40].copy_from_slice(word);
    message
}

/// Introspect the Instructions sysvar and verify that instruction 0 is a
/// native Ed25519 signature verification binding the oracle authority to
/// this fulfillment's request id and random word.
///
/// The runtime has already checked the signature itself by the time this
/// program executes; what remains is to check that the verified signature
/// is by the expected key over the expected message.
pub fn verify_ed25519_instruction(
    instructions_sysvar: &UncheckedAccount,
    oracle_authority: &Pubkey,
    request_id: u64,
    word: &[u8; 32],
) -> Result<()> {
    let ix = sysvar_instructions::load_instruction_at_checked(
        0,
        &instructions_sysvar.to_account_info(),
    )
    .map_err(|_| RaffleError::InvalidEd25519Instruction)?;

    require_keys_eq!(
        ix.program_id,
        ed25519_program::ID,
        RaffleError::InvalidEd25519Program
    );

    validate_ed25519_ix_data(&ix.data, oracle_authority, request_id, word)
}

/// Validate the raw data of an Ed25519 verify instruction.
///
/// ## Data layout
///
/// ```text
/// [0]       num_signatures (u8) — must be 1
/// [1]       padding (u8)
/// [2..16]   Ed25519SignatureOffsets (7 x u16 LE):
///             signature_offset, signature_instruction_index,
///             public_key_offset, public_key_instruction_index,
///             message_data_offset, message_data_size,
///             message_instruction_index
/// [16..]    payload: public key (32) + signature (64) + message
/// ```
fn validate_ed25519_ix_data(
    data: &[u8],
    oracle_authority: &Pubkey,
    request_id: u64,
    word: &[u8; 32],
) -> Result<()> {
    require!(data.len() >= HEADER_LEN, RaffleError::InvalidEd25519Instruction);
    require!(data[0] == 1, RaffleError::InvalidSignatureCount);

    let offset_at = |i: usize| u16::from_le_bytes([data[i], data[i + 1]]);
    let sig_ix_index = offset_at(4);
    let pubkey_offset = offset_at(6);
    let pubkey_ix_index = offset_at(8);
    let msg_offset = offset_at(10);
    let msg_size = offset_at(12);
    let msg_ix_index = offset_at(14);

    // The signature, public key and message must all be embedded in this
    // same instruction, not referenced from another one.
    require!(
        sig_ix_index == SELF_REFERENCING
            && pubkey_ix_index == SELF_REFERENCING
            && msg_ix_index == SELF_REFERENCING,
        RaffleError::InvalidEd25519InstructionIndex
    );

    let pubkey_start = pubkey_offset as usize;
    let pubkey_end = pubkey_start + 32;
    require!(data.len() >= pubkey_end, RaffleError::InvalidEd25519Instruction);
    require!(
        data[pubkey_start..pubkey_end] == oracle_authority.to_bytes(),
        RaffleError::InvalidEd25519Pubkey
    );

    let msg_start = msg_offset as usize;
    let msg_end = msg_start + msg_size as usize;
    require!(data.len() >= msg_end, RaffleError::InvalidEd25519Instruction);
    require!(
        data[msg_start..msg_end] == fulfillment_message(request_id, word),
        RaffleError::InvalidEd25519Message
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build Ed25519 instruction data the way the oracle's fulfillment
    /// transaction does: header, then pubkey (16), signature (48) and
    /// message (112).
    fn ix_data(pubkey: &Pubkey, request_id: u64, word: &[u8; 32]) -> Vec<u8> {
        let message = fulfillment_message(request_id, word);
        let mut data = vec![1u8, 0u8];
        data.extend_from_slice(&48u16.to_le_bytes()); // signature_offset
        data.extend_from_slice(&SELF_REFERENCING.to_le_bytes());
        data.extend_from_slice(&16u16.to_le_bytes()); // public_key_offset
        data.extend_from_slice(&SELF_REFERENCING.to_le_bytes());
        data.extend_from_slice(&112u16.to_le_bytes()); // message_data_offset
        data.extend_from_slice(&(message.len() as u16).to_le_bytes());
        data.extend_from_slice(&SELF_REFERENCING.to_le_bytes());
        data.extend_from_slice(&pubkey.to_bytes());
        data.extend_from_slice(&[0u8; 64]);
        data.extend_from_slice(&message);
        data
    }

    #[test]
    fn accepts_well_formed_proof_data() {
        let authority = Pubkey::new_unique();
        let word = [9u8; 32];
        let data = ix_data(&authority, 7, &word);

        validate_ed25519_ix_data(&data, &authority, 7, &word).unwrap();
    }

    #[test]
    fn rejects_wrong_authority_key() {
        let authority = Pubkey::new_unique();
        let word = [9u8; 32];
        let data = ix_data(&Pubkey::new_unique(), 7, &word);

        let err = validate_ed25519_ix_data(&data, &authority, 7, &word).unwrap_err();
        assert_eq!(err, RaffleError::InvalidEd25519Pubkey.into());
    }

    #[test]
    fn rejects_message_for_a_different_request() {
        let authority = Pubkey::new_unique();
        let word = [9u8; 32];
        let data = ix_data(&authority, 7, &word);

        let err = validate_ed25519_ix_data(&data, &authority, 8, &word).unwrap_err();
        assert_eq!(err, RaffleError::InvalidEd25519Message.into());
    }

    #[test]
    fn rejects_multiple_signatures() {
        let authority = Pubkey::new_unique();
        let word = [9u8; 32];
        let mut data = ix_data(&authority, 7, &word);
        data[0] = 2;

        let err = validate_ed25519_ix_data(&data, &authority, 7, &word).unwrap_err();
        assert_eq!(err, RaffleError::InvalidSignatureCount.into());
    }

    #[test]
    fn rejects_cross_instruction_references() {
        let authority = Pubkey::new_unique();
        let word = [9u8; 32];
        let mut data = ix_data(&authority, 7, &word);
        // Point the message reference at instruction 1.
        data[14] = 1;
        data[15] = 0;

        let err = validate_ed25519_ix_data(&data, &authority, 7, &word).unwrap_err();
        assert_eq!(err, RaffleError::InvalidEd25519InstructionIndex.into());
    }

    #[test]
    fn rejects_truncated_data() {
        let authority = Pubkey::new_unique();
        let word = [9u8; 32];
        let data = ix_data(&authority, 7, &word);

        let err =
            validate_ed25519_ix_data(&data[..40], &authority, 7, &word).unwrap_err();
        assert_eq!(err, RaffleError::InvalidEd25519Instruction.into());
    }

    #[test]
    fn fulfillment_message_layout() {
        let word = [0xABu8; 32];
        let message = fulfillment_message(7, &word);
        assert_eq!(&message[0..8], &7u64.to_le_bytes());
        assert_eq!(&message[8..40], &word);
    }
}

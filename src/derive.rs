use bip32::{DerivationPath, XPrv};
use k256::ecdsa::SigningKey;
use zeroize::Zeroizing;

use crate::constants::*;
use crate::error::Result;
use crate::types::*;
use crate::utils::keccak256;

/// Derives the account at `m/44'/60'/0'/0/0` from a BIP-39 seed.
pub fn derive_ethereum_account(seed: &SecureSeed) -> Result<EthereumAccount> {
    let path: DerivationPath = ETHEREUM_DERIVATION_PATH.parse()?;
    let xprv = XPrv::derive_from_path(seed.as_bytes(), &path)?;
    let secret_bytes = Zeroizing::new(xprv.to_bytes());
    let signing_key: &SigningKey = xprv.private_key();
    // Uncompressed SEC1 point: 0x04 || X || Y.
    let public_bytes = signing_key.verifying_key().to_encoded_point(false);
    let hash = keccak256(&public_bytes.as_bytes()[1..]);
    let mut address = [0u8; ADDRESS_SIZE];
    address.copy_from_slice(&hash[32 - ADDRESS_SIZE..]);
    tracing::debug!(path = ETHEREUM_DERIVATION_PATH, "derived account key");
    Ok(EthereumAccount::new(address, *secret_bytes))
}

/// Parses `phrase`, expands it to a seed with an empty passphrase and derives
/// the default account.
pub fn derive_from_mnemonic(phrase: &str) -> Result<EthereumAccount> {
    let mnemonic = SecureMnemonic::parse(phrase)?;
    tracing::debug!(words = mnemonic.word_count(), language = ?mnemonic.language(), "mnemonic validated");
    let seed = mnemonic.to_seed("");
    derive_ethereum_account(&seed)
}

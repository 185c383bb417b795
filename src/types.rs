use std::fmt;

use bip39::{Language, Mnemonic, Seed};
use zeroize::{Zeroize, Zeroizing};

use crate::constants::*;
use crate::error::{DeriveError, Result};
use crate::utils::to_checksum_address;

/// Wordlists tried in order when parsing a phrase.
pub const WORDLISTS: [Language; 8] = [
    Language::English,
    Language::ChineseSimplified,
    Language::ChineseTraditional,
    Language::French,
    Language::Italian,
    Language::Japanese,
    Language::Korean,
    Language::Spanish,
];

/// A validated BIP-39 phrase, wiped from memory on drop.
pub struct SecureMnemonic {
    mnemonic: Mnemonic,
}

impl SecureMnemonic {
    /// Checks words and checksum against each BIP-39 wordlist in turn and
    /// keeps the first match. The stored phrase is NFKD-normalized with
    /// single-space separators.
    pub fn parse(phrase: &str) -> Result<Self> {
        let mut first_error = None;
        for lang in WORDLISTS {
            match Mnemonic::from_phrase(phrase, lang) {
                Ok(mnemonic) => return Ok(Self { mnemonic }),
                Err(err) => {
                    first_error.get_or_insert_with(|| err.to_string());
                }
            }
        }
        Err(DeriveError::InvalidMnemonic(first_error.unwrap_or_else(|| "empty phrase".to_string())))
    }

    pub fn phrase(&self) -> &str {
        self.mnemonic.phrase()
    }

    pub fn language(&self) -> Language {
        self.mnemonic.language()
    }

    pub fn word_count(&self) -> usize {
        self.phrase().split(' ').count()
    }

    /// BIP-39 seed, with `passphrase` NFKD-normalized into the salt.
    pub fn to_seed(&self, passphrase: &str) -> SecureSeed {
        let seed = Seed::new(&self.mnemonic, passphrase);
        let mut bytes = [0u8; SEED_SIZE];
        bytes.copy_from_slice(seed.as_bytes());
        let secure = SecureSeed::new(bytes);
        bytes.zeroize();
        secure
    }
}

impl fmt::Debug for SecureMnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecureMnemonic({} words, redacted)", self.word_count())
    }
}

pub struct SecureSeed {
    seed: Zeroizing<[u8; SEED_SIZE]>,
}

impl SecureSeed {
    pub fn new(seed: [u8; SEED_SIZE]) -> Self {
        Self {
            seed: Zeroizing::new(seed),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.seed[..]
    }
}

impl Zeroize for SecureSeed {
    fn zeroize(&mut self) {
        self.seed.zeroize();
    }
}

/// Account derived at the default Ethereum path.
pub struct EthereumAccount {
    address: [u8; ADDRESS_SIZE],
    private_key: Zeroizing<[u8; PRIVATE_KEY_SIZE]>,
}

impl EthereumAccount {
    pub fn new(address: [u8; ADDRESS_SIZE], private_key: [u8; PRIVATE_KEY_SIZE]) -> Self {
        Self {
            address,
            private_key: Zeroizing::new(private_key),
        }
    }

    pub fn address(&self) -> &[u8; ADDRESS_SIZE] {
        &self.address
    }

    pub fn private_key(&self) -> &[u8; PRIVATE_KEY_SIZE] {
        &self.private_key
    }

    /// EIP-55 mixed-case address with `0x` prefix.
    pub fn checksum_address(&self) -> String {
        to_checksum_address(&self.address)
    }

    /// `0x` followed by 64 lowercase hex digits.
    pub fn private_key_hex(&self) -> Zeroizing<String> {
        Zeroizing::new(format!("0x{}", hex::encode(&self.private_key[..])))
    }
}

impl fmt::Debug for EthereumAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EthereumAccount")
            .field("address", &self.checksum_address())
            .field("private_key", &"<redacted>")
            .finish()
    }
}

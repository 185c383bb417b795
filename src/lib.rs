//! # derive-eth-account
//!
//! Derives an Ethereum account from a BIP-39 mnemonic phrase and prints it.
//!
//! ## Usage
//!
//! The mnemonic is taken from the `ETH_MNEMONIC` environment variable:
//!
//! ```bash
//! # Using cargo
//! ETH_MNEMONIC="test test test test test test test test test test test junk" cargo run
//!
//! # Using the compiled binary
//! ETH_MNEMONIC="..." ./target/release/derive-eth-account
//! ```
//!
//! Output is two lines, the EIP-55 checksummed address then the private key:
//!
//! ```text
//! 0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266
//! 0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80
//! ```
//!
//! A `.env` file in the working directory (not its parents) is loaded first, so
//! the variable can live there instead:
//!
//! ```bash
//! echo 'ETH_MNEMONIC="..."' > .env
//! cargo run
//! ```
//!
//! **Flags:**
//! - `--env-file <path>` (Optional): Load variables from this file instead of `./.env`
//! - `--log-level <filter>` (Optional): Log filter when `RUST_LOG` is unset (default = `warn`, env = `DERIVE_ETH_LOG`)
//!
//! **Exit codes:**
//! - `0`: account printed
//! - `1`: `ETH_MNEMONIC` missing or empty (stderr: `ETH_MNEMONIC not set.`)
//! - `1`: any other failure, such as a malformed mnemonic (stderr: `error: ...`)
//!
//! **Warning:** the private key is printed in plain text. Run this only on a
//! machine you trust and keep the output out of shell history and logs.
//!
//! ## Derivation
//!
//! ```text
//! mnemonic (any BIP-39 wordlist, NFKD) --(PBKDF2-HMAC-SHA512, salt "mnemonic")--> 64-byte seed
//! seed --(BIP-32)--> m/44'/60'/0'/0/0 --(secp256k1)--> public key
//! address = keccak256(public key)[12..]
//! ```
//!
//! Only the first account of the default path is derived. The same mnemonic
//! always yields the same account.

pub mod commands;
pub mod config;
pub mod constants;
pub mod derive;
pub mod error;
pub mod ops;
pub mod types;
pub mod utils;

pub use derive::derive_from_mnemonic;
pub use error::DeriveError;
pub use types::EthereumAccount;

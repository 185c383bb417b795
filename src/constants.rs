pub const MNEMONIC_ENV: &str = "ETH_MNEMONIC";
pub const MISSING_MNEMONIC_MESSAGE: &str = "ETH_MNEMONIC not set.";
pub const LOG_LEVEL_ENV: &str = "DERIVE_ETH_LOG";
pub const DEFAULT_LOG_LEVEL: &str = "warn";
pub const DOTENV_FILE: &str = ".env";

// BIP-44: m / purpose' / coin_type' / account' / change / address_index
pub const ETHEREUM_DERIVATION_PATH: &str = "m/44'/60'/0'/0/0";

pub const SEED_SIZE: usize = 64;
pub const PRIVATE_KEY_SIZE: usize = 32;
pub const ADDRESS_SIZE: usize = 20;

pub const EXIT_MISSING_MNEMONIC: u8 = 1;
pub const EXIT_FAILURE: u8 = 1;

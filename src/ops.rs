use std::io::Write;

use crate::config::Config;
use crate::derive::*;
use crate::error::Result;
use crate::utils::*;

/// Derives the account for the configured mnemonic and writes it to `out`.
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<()> {
    let account = derive_from_mnemonic(config.mnemonic())?;
    tracing::info!(address = %account.checksum_address(), "account derived");
    write_account(out, &account)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DeriveError;

    #[test]
    fn test_run_writes_reference_pair() {
        let config = Config::from_value(Some("test test test test test test test test test test test junk".to_string())).unwrap();
        let mut out = Vec::new();
        run(&config, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266\n0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80\n"
        );
    }

    #[test]
    fn test_run_writes_nothing_on_invalid_mnemonic() {
        let config = Config::from_value(Some("not a real mnemonic".to_string())).unwrap();
        let mut out = Vec::new();
        let result = run(&config, &mut out);
        assert!(matches!(result, Err(DeriveError::InvalidMnemonic(_))));
        assert!(out.is_empty());
    }
}

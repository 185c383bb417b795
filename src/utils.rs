use std::io::Write;

use tiny_keccak::{Hasher, Keccak};

use crate::constants::*;
use crate::types::EthereumAccount;

pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut hash = [0u8; 32];
    hasher.finalize(&mut hash);
    hash
}

/// EIP-55: a hex letter is uppercased when the matching nibble of
/// keccak256(lowercase hex address) is 8 or higher.
pub fn to_checksum_address(address: &[u8; ADDRESS_SIZE]) -> String {
    let lower = hex::encode(address);
    let hash = keccak256(lower.as_bytes());
    let mut out = String::with_capacity(2 + lower.len());
    out.push_str("0x");
    for (i, c) in lower.chars().enumerate() {
        let byte = hash[i / 2];
        let nibble = if i % 2 == 0 { byte >> 4 } else { byte & 0x0f };
        if c.is_ascii_alphabetic() && nibble >= 8 {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Writes the address line followed by the private key line.
pub fn write_account<W: Write>(out: &mut W, account: &EthereumAccount) -> std::io::Result<()> {
    writeln!(out, "{}", account.checksum_address())?;
    writeln!(out, "{}", account.private_key_hex().as_str())?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checksum_of(expected: &str) -> String {
        let bytes = hex::decode(expected.trim_start_matches("0x")).unwrap();
        let address: [u8; ADDRESS_SIZE] = bytes.as_slice().try_into().unwrap();
        to_checksum_address(&address)
    }

    #[test]
    fn test_checksum_address_eip55_vectors() {
        let vectors = [
            // all caps
            "0x52908400098527886E0F7030069857D2E4169EE7",
            "0x8617E340B3D01FA5F11F306F4090FD50E238070D",
            // all lower
            "0xde709f2102306220921060314715629080e2fb77",
            "0x27b1fdb04752bbc536007a920d24acb045561c26",
            // normal
            "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
            "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359",
            "0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB",
            "0xD1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDb",
        ];
        for expected in vectors {
            assert_eq!(checksum_of(expected), expected);
        }
    }

    #[test]
    fn test_keccak256_empty_input() {
        assert_eq!(
            hex::encode(keccak256(&[])),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }

    #[test]
    fn test_write_account_emits_two_lines() {
        let account = EthereumAccount::new([0u8; ADDRESS_SIZE], [1u8; PRIVATE_KEY_SIZE]);
        let mut out = Vec::new();
        write_account(&mut out, &account).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "0x0000000000000000000000000000000000000000");
        assert_eq!(lines[1], format!("0x{}", "01".repeat(PRIVATE_KEY_SIZE)));
        assert!(text.ends_with('\n'));
    }
}

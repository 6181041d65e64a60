use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Shared behaviour of the per-family address shapes.
pub trait AddressFamily {
    /// Whether `raw` has this family's shape (prefix only, not checksum).
    fn has_shape(raw: &str) -> bool;

    fn as_str(&self) -> &str;

    /// Family-aware equality: EVM hex compares case-insensitively,
    /// base-58 and bech32 compare exactly.
    fn same_as(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

/// Hex-prefixed 20-byte address (`0x...`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EvmAddress(Cow<'static, str>);

impl EvmAddress {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(Cow::Owned(raw.into()))
    }

    /// Address usable in `static` tables.
    pub const fn from_static(raw: &'static str) -> Self {
        Self(Cow::Borrowed(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AddressFamily for EvmAddress {
    fn has_shape(raw: &str) -> bool {
        raw.starts_with("0x")
    }

    fn as_str(&self) -> &str {
        EvmAddress::as_str(self)
    }

    fn same_as(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

macro_rules! string_newtype {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(raw: impl Into<String>) -> Self {
                Self(raw.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                Self::new(raw)
            }
        }
    };
}

string_newtype!(
    /// Base-58 Solana address.
    SolAddress
);
string_newtype!(
    /// Bech32 Terra address (`terra1...`).
    TerraAddress
);
string_newtype!(
    /// Transaction hash (`0x...`).
    TxHash
);
string_newtype!(
    /// Logo or asset URL, expected to be `https://`.
    HttpsUrl
);

impl AddressFamily for SolAddress {
    fn has_shape(raw: &str) -> bool {
        !EvmAddress::has_shape(raw) && !TerraAddress::has_shape(raw)
    }

    fn as_str(&self) -> &str {
        SolAddress::as_str(self)
    }
}

impl AddressFamily for TerraAddress {
    fn has_shape(raw: &str) -> bool {
        raw.starts_with("terra1")
    }

    fn as_str(&self) -> &str {
        TerraAddress::as_str(self)
    }
}

impl fmt::Display for EvmAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EvmAddress {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

/// Address tagged by the family whose shape it satisfies.
///
/// Serialized as the bare address string; the family is recovered from
/// the prefix on the way back in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Address {
    Evm(EvmAddress),
    Sol(SolAddress),
    Terra(TerraAddress),
}

impl Address {
    pub fn classify(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        if EvmAddress::has_shape(&raw) {
            Address::Evm(EvmAddress::new(raw))
        } else if TerraAddress::has_shape(&raw) {
            Address::Terra(TerraAddress::new(raw))
        } else {
            Address::Sol(SolAddress::new(raw))
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Address::Evm(addr) => addr.as_str(),
            Address::Sol(addr) => addr.as_str(),
            Address::Terra(addr) => addr.as_str(),
        }
    }

    pub fn as_evm(&self) -> Option<&EvmAddress> {
        match self {
            Address::Evm(addr) => Some(addr),
            _ => None,
        }
    }
}

impl From<String> for Address {
    fn from(raw: String) -> Self {
        Address::classify(raw)
    }
}

impl From<&str> for Address {
    fn from(raw: &str) -> Self {
        Address::classify(raw)
    }
}

impl From<Address> for String {
    fn from(addr: Address) -> Self {
        addr.as_str().to_string()
    }
}

impl From<EvmAddress> for Address {
    fn from(addr: EvmAddress) -> Self {
        Address::Evm(addr)
    }
}

impl From<SolAddress> for Address {
    fn from(addr: SolAddress) -> Self {
        Address::Sol(addr)
    }
}

impl From<TerraAddress> for Address {
    fn from(addr: TerraAddress) -> Self {
        Address::Terra(addr)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

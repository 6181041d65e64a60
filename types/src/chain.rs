use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use strum::{Display, EnumCount, EnumIter, EnumString, IntoStaticStr};
use tracing::debug;

use crate::error::{Result, TypesError};

/// Supported networks, keyed by their short wire key (`eth`, `sol`, ...).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    EnumCount,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Chain {
    Eth,
    Bsc,
    Poly,
    Ftm,
    Avax,
    One,
    Sol,
    Terra,
    Cronos,
    Pulsechain,
}

/// Numeric EIP-155 style chain id. Only EVM networks carry one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChainId(pub u64);

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Chain {
    /// Every chain, in declaration order.
    pub const ALL: [Chain; Chain::COUNT] = [
        Chain::Eth,
        Chain::Bsc,
        Chain::Poly,
        Chain::Ftm,
        Chain::Avax,
        Chain::One,
        Chain::Sol,
        Chain::Terra,
        Chain::Cronos,
        Chain::Pulsechain,
    ];

    /// Short wire key, identical to the serde representation.
    pub fn key(self) -> &'static str {
        self.into()
    }

    /// Canonical lowercase name used by collaborators as a stable chain key.
    pub const fn endpoint(self) -> &'static str {
        match self {
            Chain::Eth => "ethereum",
            Chain::Bsc => "bsc",
            Chain::Poly => "polygon",
            Chain::Ftm => "fantom",
            Chain::Avax => "avalanche",
            Chain::One => "harmony",
            Chain::Sol => "solana",
            Chain::Terra => "terra",
            Chain::Cronos => "cronos",
            Chain::Pulsechain => "pulsechain",
        }
    }

    pub const fn chain_id(self) -> Option<ChainId> {
        match self {
            Chain::Eth => Some(ChainId(1)),
            Chain::Bsc => Some(ChainId(56)),
            Chain::Poly => Some(ChainId(137)),
            Chain::Ftm => Some(ChainId(250)),
            Chain::Avax => Some(ChainId(43114)),
            Chain::One => Some(ChainId(1666600000)),
            Chain::Cronos => Some(ChainId(25)),
            Chain::Pulsechain => Some(ChainId(369)),
            Chain::Sol | Chain::Terra => None,
        }
    }

    pub const fn is_evm(self) -> bool {
        self.chain_id().is_some()
    }

    pub fn from_chain_id(id: u64) -> Option<Chain> {
        Chain::ALL
            .into_iter()
            .find(|chain| matches!(chain.chain_id(), Some(ChainId(n)) if n == id))
    }

    /// Parse a wire key, reporting unknown keys as [`TypesError::UnknownChain`].
    pub fn from_key(key: &str) -> Result<Chain> {
        key.parse::<Chain>().map_err(|_| {
            debug!("Unresolved chain key: {}", key);
            TypesError::UnknownChain(key.to_string())
        })
    }
}

impl TryFrom<ChainId> for Chain {
    type Error = TypesError;

    fn try_from(id: ChainId) -> Result<Self> {
        Chain::from_chain_id(id.0).ok_or_else(|| {
            debug!("Unresolved numeric chain id: {}", id);
            TypesError::UnknownChainId(id.0)
        })
    }
}

/// The whole chain registry as a record keyed by chain, as put on the wire.
pub fn chain_endpoints() -> BTreeMap<Chain, &'static str> {
    Chain::ALL
        .into_iter()
        .map(|chain| (chain, chain.endpoint()))
        .collect()
}

const fn all_listed_in_order() -> bool {
    let mut i = 0;
    while i < Chain::COUNT {
        if Chain::ALL[i] as usize != i {
            return false;
        }
        i += 1;
    }
    true
}

const fn endpoints_present() -> bool {
    let mut i = 0;
    while i < Chain::COUNT {
        if Chain::ALL[i].endpoint().is_empty() {
            return false;
        }
        i += 1;
    }
    true
}

const fn numeric_ids_unique() -> bool {
    let mut i = 0;
    while i < Chain::COUNT {
        let mut j = i + 1;
        while j < Chain::COUNT {
            if let (Some(a), Some(b)) = (Chain::ALL[i].chain_id(), Chain::ALL[j].chain_id()) {
                if a.0 == b.0 {
                    return false;
                }
            }
            j += 1;
        }
        i += 1;
    }
    true
}

const _: () = assert!(all_listed_in_order(), "Chain::ALL must list every chain once, in order");
const _: () = assert!(endpoints_present(), "every chain needs a registry name");
const _: () = assert!(numeric_ids_unique(), "two chains share a numeric id");

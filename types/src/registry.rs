use serde::{Deserialize, Serialize};

use crate::address::{AddressFamily, EvmAddress, HttpsUrl, SolAddress, TerraAddress};

/// Known token metadata for one chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenData<A> {
    pub address: A,
    pub symbol: String,
    pub logo: HttpsUrl,
    pub decimals: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoData {
    pub symbol: String,
    pub logo: HttpsUrl,
}

/// Token list of one chain: known tokens, addresses to exclude, and the
/// shared logo table keyed by symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainTokenData<A> {
    pub logos: Vec<LogoData>,
    pub tokens: Vec<TokenData<A>>,
    pub blacklist: Vec<A>,
}

pub type EvmChainTokenData = ChainTokenData<EvmAddress>;
pub type SolChainTokenData = ChainTokenData<SolAddress>;
pub type TerraChainTokenData = ChainTokenData<TerraAddress>;

impl<A: AddressFamily> ChainTokenData<A> {
    pub fn token(&self, address: &A) -> Option<&TokenData<A>> {
        self.tokens.iter().find(|token| token.address.same_as(address))
    }

    pub fn is_blacklisted(&self, address: &A) -> bool {
        self.blacklist.iter().any(|listed| listed.same_as(address))
    }

    /// Logo for a symbol; the first matching entry wins.
    pub fn logo(&self, symbol: &str) -> Option<&HttpsUrl> {
        self.logos
            .iter()
            .find(|entry| entry.symbol == symbol)
            .map(|entry| &entry.logo)
    }
}

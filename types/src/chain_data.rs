use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use crate::address::EvmAddress;
use crate::chain::{Chain, ChainId};

/// Per-chain constants used by pricing and indexing collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainData {
    pub id: ChainId,
    /// Native token symbol.
    pub token: Cow<'static, str>,
    /// CoinGecko asset platform id.
    #[serde(rename = "cgID")]
    pub cg_id: Cow<'static, str>,
    /// CoinGecko coin id of the native asset.
    #[serde(rename = "nativeID")]
    pub native_id: Cow<'static, str>,
    pub wrapped_token: EvmAddress,
    pub usdc: EvmAddress,
    pub usdc_decimals: u8,
    /// 1inch aggregator available on this chain.
    pub inch: bool,
    /// ParaSwap aggregator available on this chain.
    pub paraswap: bool,
}

static ETH: ChainData = ChainData {
    id: ChainId(1),
    token: Cow::Borrowed("ETH"),
    cg_id: Cow::Borrowed("ethereum"),
    native_id: Cow::Borrowed("ethereum"),
    wrapped_token: EvmAddress::from_static("0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2"),
    usdc: EvmAddress::from_static("0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48"),
    usdc_decimals: 6,
    inch: true,
    paraswap: true,
};

static BSC: ChainData = ChainData {
    id: ChainId(56),
    token: Cow::Borrowed("BNB"),
    cg_id: Cow::Borrowed("binance-smart-chain"),
    native_id: Cow::Borrowed("binancecoin"),
    wrapped_token: EvmAddress::from_static("0xbb4CdB9CBd36B01bD1cBaEBF2De08d9173bc095c"),
    usdc: EvmAddress::from_static("0x8AC76a51cc950d9822D68b83fE1Ad97B32Cd580d"),
    usdc_decimals: 18,
    inch: true,
    paraswap: true,
};

static POLY: ChainData = ChainData {
    id: ChainId(137),
    token: Cow::Borrowed("MATIC"),
    cg_id: Cow::Borrowed("polygon-pos"),
    native_id: Cow::Borrowed("matic-network"),
    wrapped_token: EvmAddress::from_static("0x0d500B1d8E8eF31E21C99d1Db9A6444d3ADf1270"),
    usdc: EvmAddress::from_static("0x2791Bca1f2de4661ED88A30C99A7a9449Aa84174"),
    usdc_decimals: 6,
    inch: true,
    paraswap: true,
};

static FTM: ChainData = ChainData {
    id: ChainId(250),
    token: Cow::Borrowed("FTM"),
    cg_id: Cow::Borrowed("fantom"),
    native_id: Cow::Borrowed("fantom"),
    wrapped_token: EvmAddress::from_static("0x21be370D5312f44cB42ce377BC9b8a0cEF1A4C83"),
    usdc: EvmAddress::from_static("0x04068DA6C83AFCFA0e13ba15A6696662335D5B75"),
    usdc_decimals: 6,
    inch: true,
    paraswap: true,
};

static AVAX: ChainData = ChainData {
    id: ChainId(43114),
    token: Cow::Borrowed("AVAX"),
    cg_id: Cow::Borrowed("avalanche"),
    native_id: Cow::Borrowed("avalanche-2"),
    wrapped_token: EvmAddress::from_static("0xB31f66AA3C1e785363F0875A1B74E27b85FD66c7"),
    usdc: EvmAddress::from_static("0xB97EF9Ef8734C71904D8002F8b6Bc66Dd9c48a6E"),
    usdc_decimals: 6,
    inch: true,
    paraswap: true,
};

static ONE: ChainData = ChainData {
    id: ChainId(1666600000),
    token: Cow::Borrowed("ONE"),
    cg_id: Cow::Borrowed("harmony-shard-0"),
    native_id: Cow::Borrowed("harmony"),
    wrapped_token: EvmAddress::from_static("0xcF664087a5bB0237a0BAd6742852ec6c8d69A27a"),
    usdc: EvmAddress::from_static("0x985458E523dB3d53125813eD68c274899e9DfAb4"),
    usdc_decimals: 6,
    inch: false,
    paraswap: false,
};

static CRONOS: ChainData = ChainData {
    id: ChainId(25),
    token: Cow::Borrowed("CRO"),
    cg_id: Cow::Borrowed("cronos"),
    native_id: Cow::Borrowed("crypto-com-chain"),
    wrapped_token: EvmAddress::from_static("0x5C7F8A570d578ED84E63fdFA7b1eE72dEae1AE23"),
    usdc: EvmAddress::from_static("0xc21223249CA28397B4B6541dfFaEcC539BfF0c59"),
    usdc_decimals: 6,
    inch: false,
    paraswap: false,
};

static PULSECHAIN: ChainData = ChainData {
    id: ChainId(369),
    token: Cow::Borrowed("PLS"),
    cg_id: Cow::Borrowed("pulsechain"),
    native_id: Cow::Borrowed("pulsechain"),
    wrapped_token: EvmAddress::from_static("0xA1077a294dDE1B09bB078844df40758a5D0f9a27"),
    usdc: EvmAddress::from_static("0x15D38573d2feeb82e7ad5187aB8c1D52810B1f07"),
    usdc_decimals: 6,
    inch: false,
    paraswap: false,
};

impl Chain {
    /// Built-in metadata; present exactly for chains with a numeric id.
    pub fn data(self) -> Option<&'static ChainData> {
        match self {
            Chain::Eth => Some(&ETH),
            Chain::Bsc => Some(&BSC),
            Chain::Poly => Some(&POLY),
            Chain::Ftm => Some(&FTM),
            Chain::Avax => Some(&AVAX),
            Chain::One => Some(&ONE),
            Chain::Cronos => Some(&CRONOS),
            Chain::Pulsechain => Some(&PULSECHAIN),
            Chain::Sol | Chain::Terra => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::AddressFamily;
    use serde_json::json;

    #[test]
    fn test_metadata_ids_match_chain_ids() {
        for chain in Chain::ALL {
            match (chain.chain_id(), chain.data()) {
                (Some(id), Some(data)) => assert_eq!(data.id, id, "{}", chain),
                (None, None) => {}
                (id, data) => panic!("{}: id {:?} but metadata {:?}", chain, id, data),
            }
        }
    }

    #[test]
    fn test_metadata_addresses_are_evm_shaped() {
        for data in Chain::ALL.into_iter().filter_map(Chain::data) {
            for addr in [&data.wrapped_token, &data.usdc] {
                assert!(EvmAddress::has_shape(addr.as_str()));
                assert_eq!(addr.as_str().len(), 42);
            }
        }
    }

    #[test]
    fn test_wire_field_names() {
        let value = serde_json::to_value(Chain::Avax.data().unwrap()).unwrap();
        assert_eq!(value["id"], json!(43114));
        assert_eq!(value["cgID"], json!("avalanche"));
        assert_eq!(value["nativeID"], json!("avalanche-2"));
        assert_eq!(value["usdcDecimals"], json!(6));
        assert_eq!(value["wrappedToken"], json!("0xB31f66AA3C1e785363F0875A1B74E27b85FD66c7"));

        let owned: ChainData = serde_json::from_value(value).unwrap();
        assert_eq!(&owned, Chain::Avax.data().unwrap());
    }
}

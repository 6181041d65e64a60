//! Shared data vocabulary for the multi-chain portfolio services.
//!
//! Shapes for wallet-owned tokens, wallet transactions, chain metadata,
//! contract-interface descriptors and API envelopes, plus the predicates
//! that narrow a general token or transaction to its concrete variant.
//! Nothing here fetches, prices or stores data.

pub mod abi;
pub mod address;
pub mod chain;
pub mod chain_data;
pub mod error;
pub mod registry;
pub mod response;
pub mod token;
pub mod transaction;

pub use abi::{AbiFunction, AbiIo, AbiItemType, AbiParam, AbiTupleIo, TupleArray};
pub use address::{Address, AddressFamily, EvmAddress, HttpsUrl, SolAddress, TerraAddress, TxHash};
pub use chain::{chain_endpoints, Chain, ChainId};
pub use chain_data::ChainData;
pub use error::{Result, TypesError};
pub use registry::{
    ChainTokenData, EvmChainTokenData, LogoData, SolChainTokenData, TerraChainTokenData, TokenData,
};
pub use response::{ApiResponse, ApiStatus};
pub use token::{
    is_debt_token, is_lp_token, is_native_token, is_token, is_x_token, BaseFacet, DebtToken,
    Facets, LpToken, NativeToken, OwnedFacet, OwnedToken, PricedFacet, PricedToken, Token,
    TokenKind, TokenStatus, TokenVariant, UnrecognizedToken, XToken,
};
pub use transaction::{
    is_approval_tx, is_transfer_tx, ApprovalTx, DetailedTx, Direction, SimpleTx, TransferTx,
    TxToken, TxType, UnrecognizedTx,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

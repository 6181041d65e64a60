use chrono::{DateTime, Utc};
use serde::de::{self, Deserializer};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};
use tracing::{debug, warn};

use crate::address::{EvmAddress, HttpsUrl, TxHash};
use crate::chain::Chain;
use crate::error::{Result, TypesError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    In,
    Out,
}

/// Transaction type discriminant, the `type` field of a detailed transaction.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TxType {
    Transfer,
    Approve,
    Revoke,
}

impl TxType {
    pub fn from_literal(literal: &str) -> Result<TxType> {
        literal.parse().map_err(|_| {
            debug!("Unresolved transaction type: {}", literal);
            TypesError::UnknownTxType(literal.to_string())
        })
    }
}

/// Wallet transaction as seen from the tracked wallet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleTx {
    pub wallet: EvmAddress,
    pub chain: Chain,
    pub hash: TxHash,
    /// Unix seconds; producers may send fractional seconds.
    pub time: f64,
    pub direction: Direction,
    /// Fee paid, in native token units.
    pub fee: f64,
}

impl SimpleTx {
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        if !self.time.is_finite() {
            return None;
        }
        let secs = self.time.floor();
        let nanos = ((self.time - secs) * 1e9) as u32;
        DateTime::from_timestamp(secs as i64, nanos.min(999_999_999))
    }
}

/// Token touched by a transaction. `price` is only set on tax-enriched transfers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxToken {
    pub address: EvmAddress,
    pub symbol: String,
    pub logo: HttpsUrl,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

/// Approve or revoke; the variant of [`DetailedTx`] carries which one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalTx {
    #[serde(flatten)]
    pub tx: SimpleTx,
    pub token: TxToken,
    /// Symbol of the chain's native token.
    pub native_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub native_token_price: Option<f64>,
}

impl ApprovalTx {
    pub fn with_tax_pricing(mut self, native_token_price: f64) -> Self {
        self.native_token_price = Some(native_token_price);
        self
    }

    pub fn is_tax_enriched(&self) -> bool {
        self.native_token_price.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferTx {
    #[serde(flatten)]
    pub tx: SimpleTx,
    pub token: TxToken,
    pub native_token: String,
    pub from: EvmAddress,
    pub to: EvmAddress,
    pub value: f64,
    /// Whether the counterparty is a contract.
    pub contract: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub native_token_price: Option<f64>,
}

impl TransferTx {
    pub fn with_tax_pricing(mut self, native_token_price: f64, token_price: f64) -> Self {
        self.native_token_price = Some(native_token_price);
        self.token.price = Some(token_price);
        self
    }

    pub fn is_tax_enriched(&self) -> bool {
        self.native_token_price.is_some() && self.token.price.is_some()
    }
}

/// A transaction whose `type` is not a known kind. Kept verbatim so it can
/// be passed along; it matches no classification predicate.
#[derive(Debug, Clone, PartialEq)]
pub struct UnrecognizedTx {
    pub kind: String,
    pub fields: Map<String, Value>,
}

/// Detailed transaction, tagged by its `type`.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailedTx {
    Transfer(TransferTx),
    Approve(ApprovalTx),
    Revoke(ApprovalTx),
    Unrecognized(UnrecognizedTx),
}

impl DetailedTx {
    /// Type of a recognized transaction; `None` for [`DetailedTx::Unrecognized`].
    pub fn tx_type(&self) -> Option<TxType> {
        match self {
            DetailedTx::Transfer(_) => Some(TxType::Transfer),
            DetailedTx::Approve(_) => Some(TxType::Approve),
            DetailedTx::Revoke(_) => Some(TxType::Revoke),
            DetailedTx::Unrecognized(_) => None,
        }
    }

    /// The `type` literal as it appears on the wire.
    pub fn raw_type(&self) -> &str {
        match self {
            DetailedTx::Unrecognized(tx) => &tx.kind,
            _ => self.tx_type().map_or("", <&'static str>::from),
        }
    }

    pub fn simple(&self) -> Option<&SimpleTx> {
        match self {
            DetailedTx::Transfer(tx) => Some(&tx.tx),
            DetailedTx::Approve(tx) | DetailedTx::Revoke(tx) => Some(&tx.tx),
            DetailedTx::Unrecognized(_) => None,
        }
    }

    pub fn token(&self) -> Option<&TxToken> {
        match self {
            DetailedTx::Transfer(tx) => Some(&tx.token),
            DetailedTx::Approve(tx) | DetailedTx::Revoke(tx) => Some(&tx.token),
            DetailedTx::Unrecognized(_) => None,
        }
    }

    pub fn native_token(&self) -> Option<&str> {
        match self {
            DetailedTx::Transfer(tx) => Some(&tx.native_token),
            DetailedTx::Approve(tx) | DetailedTx::Revoke(tx) => Some(&tx.native_token),
            DetailedTx::Unrecognized(_) => None,
        }
    }

    pub fn is_tax_enriched(&self) -> bool {
        match self {
            DetailedTx::Transfer(tx) => tx.is_tax_enriched(),
            DetailedTx::Approve(tx) | DetailedTx::Revoke(tx) => tx.is_tax_enriched(),
            DetailedTx::Unrecognized(_) => false,
        }
    }

    pub fn as_transfer(&self) -> Option<&TransferTx> {
        match self {
            DetailedTx::Transfer(tx) => Some(tx),
            _ => None,
        }
    }

    pub fn as_approval(&self) -> Option<&ApprovalTx> {
        match self {
            DetailedTx::Approve(tx) | DetailedTx::Revoke(tx) => Some(tx),
            _ => None,
        }
    }
}

pub fn is_approval_tx(tx: &DetailedTx) -> bool {
    matches!(tx.tx_type(), Some(TxType::Approve | TxType::Revoke))
}

pub fn is_transfer_tx(tx: &DetailedTx) -> bool {
    tx.tx_type() == Some(TxType::Transfer)
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum TaggedRef<'a> {
    Transfer(&'a TransferTx),
    Approve(&'a ApprovalTx),
    Revoke(&'a ApprovalTx),
}

impl Serialize for DetailedTx {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            DetailedTx::Transfer(tx) => TaggedRef::Transfer(tx).serialize(serializer),
            DetailedTx::Approve(tx) => TaggedRef::Approve(tx).serialize(serializer),
            DetailedTx::Revoke(tx) => TaggedRef::Revoke(tx).serialize(serializer),
            DetailedTx::Unrecognized(tx) => {
                let rest: Vec<_> = tx.fields.iter().filter(|(key, _)| key.as_str() != "type").collect();
                let mut map = serializer.serialize_map(Some(rest.len() + 1))?;
                map.serialize_entry("type", &tx.kind)?;
                for (key, value) in rest {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for DetailedTx {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut fields = Map::<String, Value>::deserialize(deserializer)?;
        let kind = match fields.remove("type") {
            Some(Value::String(kind)) => kind,
            Some(other) => {
                return Err(de::Error::custom(format!(
                    "transaction `type` must be a string, got {}",
                    other
                )))
            }
            None => return Err(de::Error::missing_field("type")),
        };

        let Ok(known) = kind.parse::<TxType>() else {
            warn!("⚠️ Unrecognized transaction type {:?}; it will match no transaction predicate", kind);
            return Ok(DetailedTx::Unrecognized(UnrecognizedTx { kind, fields }));
        };

        let body = Value::Object(fields);
        let tx = match known {
            TxType::Transfer => serde_json::from_value(body).map(DetailedTx::Transfer),
            TxType::Approve => serde_json::from_value(body).map(DetailedTx::Approve),
            TxType::Revoke => serde_json::from_value(body).map(DetailedTx::Revoke),
        };
        tx.map_err(de::Error::custom)
    }
}

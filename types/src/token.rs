//! Wallet-owned token entities.
//!
//! A token is built from facets: the base facet (symbol, address, balance),
//! the priced facet (unit price, logo) and the owned facet (chain, location,
//! status, owner). Each token kind is its own struct embedding exactly the
//! facets of its kind, and [`OwnedToken`] is the union tagged by the `type`
//! field on the wire.

use serde::de::{self, Deserializer};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use strum::{Display, EnumCount, EnumIter, EnumString, IntoStaticStr};
use tracing::warn;

use crate::address::{Address, HttpsUrl};
use crate::chain::Chain;
use crate::error::{Result, TypesError};

/// Token kind discriminant, the `type` field of an owned token.
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
    EnumCount,
    IntoStaticStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum TokenKind {
    NativeToken,
    Token,
    LpToken,
    Debt,
    XToken,
}

/// Where an owned token sits relative to the protocol holding it.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
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
pub enum TokenStatus {
    /// Sitting free in the wallet.
    #[default]
    #[serde(rename = "none")]
    #[strum(serialize = "none")]
    Free,
    Staked,
    Liquidity,
    /// Supplied as lending collateral.
    Lent,
    Borrowed,
    Unclaimed,
}

/// Optional facets populated for a token kind. The owned facet is always present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Facets {
    pub priced: bool,
    /// A logo without a price (xToken).
    pub own_logo: bool,
    /// Two nested priced legs, `token0` and `token1`.
    pub paired: bool,
    /// One nested priced `underlyingToken`.
    pub underlying: bool,
}

impl TokenKind {
    /// The facet combination legal for this kind.
    pub const fn facets(self) -> Facets {
        match self {
            TokenKind::NativeToken | TokenKind::Token | TokenKind::Debt => Facets {
                priced: true,
                own_logo: false,
                paired: false,
                underlying: false,
            },
            TokenKind::LpToken => Facets {
                priced: false,
                own_logo: false,
                paired: true,
                underlying: false,
            },
            TokenKind::XToken => Facets {
                priced: false,
                own_logo: true,
                paired: false,
                underlying: true,
            },
        }
    }

    pub fn as_str(self) -> &'static str {
        self.into()
    }

    pub fn from_literal(literal: &str) -> Result<TokenKind> {
        literal
            .parse()
            .map_err(|_| TypesError::UnknownTokenKind(literal.to_string()))
    }
}

pub trait BaseFacet {
    fn symbol(&self) -> &str;
    fn address(&self) -> &Address;
    fn balance(&self) -> f64;
}

pub trait PricedFacet: BaseFacet {
    fn price(&self) -> f64;
    fn logo(&self) -> &HttpsUrl;
}

pub trait OwnedFacet: BaseFacet {
    fn chain(&self) -> Chain;
    /// Protocol or contract label the token sits in (e.g. "Wallet", "Aave").
    fn location(&self) -> &str;
    fn status(&self) -> TokenStatus;
    fn owner(&self) -> &Address;
}

/// A concrete token variant, bound to exactly one kind.
pub trait TokenVariant: OwnedFacet + Into<OwnedToken> {
    const KIND: TokenKind;
}

/// Base + priced facets. Used standalone for the legs of LP positions and
/// the underlying asset of receipt tokens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricedToken {
    pub symbol: String,
    pub address: Address,
    pub balance: f64,
    pub price: f64,
    pub logo: HttpsUrl,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeToken {
    pub symbol: String,
    pub address: Address,
    pub balance: f64,
    pub price: f64,
    pub logo: HttpsUrl,
    pub chain: Chain,
    pub location: String,
    pub status: TokenStatus,
    pub owner: Address,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    pub symbol: String,
    pub address: Address,
    pub balance: f64,
    pub price: f64,
    pub logo: HttpsUrl,
    pub chain: Chain,
    pub location: String,
    pub status: TokenStatus,
    pub owner: Address,
}

/// Liquidity-pool position; the pool token itself carries no price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LpToken {
    pub symbol: String,
    pub address: Address,
    pub balance: f64,
    pub chain: Chain,
    pub location: String,
    pub status: TokenStatus,
    pub owner: Address,
    pub token0: PricedToken,
    pub token1: PricedToken,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtToken {
    pub symbol: String,
    pub address: Address,
    pub balance: f64,
    pub price: f64,
    pub logo: HttpsUrl,
    pub chain: Chain,
    pub location: String,
    pub status: TokenStatus,
    pub owner: Address,
}

/// Wrapped or staked-receipt token, priced through its underlying asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct XToken {
    pub symbol: String,
    pub address: Address,
    pub balance: f64,
    pub chain: Chain,
    pub location: String,
    pub status: TokenStatus,
    pub owner: Address,
    pub logo: HttpsUrl,
    pub underlying_token: PricedToken,
}

/// A token whose `type` is not a known kind. Kept verbatim so it can be
/// passed along; it matches no classification predicate.
#[derive(Debug, Clone, PartialEq)]
pub struct UnrecognizedToken {
    pub kind: String,
    pub fields: Map<String, Value>,
}

macro_rules! impl_base_facet {
    ($($ty:ty),+) => {$(
        impl BaseFacet for $ty {
            fn symbol(&self) -> &str {
                &self.symbol
            }

            fn address(&self) -> &Address {
                &self.address
            }

            fn balance(&self) -> f64 {
                self.balance
            }
        }
    )+};
}

macro_rules! impl_priced_facet {
    ($($ty:ty),+) => {$(
        impl PricedFacet for $ty {
            fn price(&self) -> f64 {
                self.price
            }

            fn logo(&self) -> &HttpsUrl {
                &self.logo
            }
        }
    )+};
}

macro_rules! impl_owned_variant {
    ($($ty:ident => $kind:ident),+) => {$(
        impl OwnedFacet for $ty {
            fn chain(&self) -> Chain {
                self.chain
            }

            fn location(&self) -> &str {
                &self.location
            }

            fn status(&self) -> TokenStatus {
                self.status
            }

            fn owner(&self) -> &Address {
                &self.owner
            }
        }

        impl TokenVariant for $ty {
            const KIND: TokenKind = TokenKind::$kind;
        }

        impl From<$ty> for OwnedToken {
            fn from(token: $ty) -> Self {
                OwnedToken::$kind(token)
            }
        }
    )+};
}

impl_base_facet!(PricedToken, NativeToken, Token, LpToken, DebtToken, XToken);
impl_priced_facet!(PricedToken, NativeToken, Token, DebtToken);
impl_owned_variant!(
    NativeToken => NativeToken,
    Token => Token,
    LpToken => LpToken,
    DebtToken => Debt,
    XToken => XToken
);

/// Any wallet-owned token, tagged by its kind.
#[derive(Debug, Clone, PartialEq)]
pub enum OwnedToken {
    NativeToken(NativeToken),
    Token(Token),
    LpToken(LpToken),
    Debt(DebtToken),
    XToken(XToken),
    Unrecognized(UnrecognizedToken),
}

impl OwnedToken {
    /// Kind of a recognized token; `None` for [`OwnedToken::Unrecognized`].
    pub fn kind(&self) -> Option<TokenKind> {
        match self {
            OwnedToken::NativeToken(_) => Some(TokenKind::NativeToken),
            OwnedToken::Token(_) => Some(TokenKind::Token),
            OwnedToken::LpToken(_) => Some(TokenKind::LpToken),
            OwnedToken::Debt(_) => Some(TokenKind::Debt),
            OwnedToken::XToken(_) => Some(TokenKind::XToken),
            OwnedToken::Unrecognized(_) => None,
        }
    }

    /// The `type` literal as it appears on the wire.
    pub fn raw_kind(&self) -> &str {
        match self {
            OwnedToken::Unrecognized(token) => &token.kind,
            _ => self.kind().map_or("", TokenKind::as_str),
        }
    }

    pub fn facets(&self) -> Option<Facets> {
        self.kind().map(TokenKind::facets)
    }

    /// Owned-facet view of a recognized token.
    pub fn as_owned(&self) -> Option<&dyn OwnedFacet> {
        match self {
            OwnedToken::NativeToken(token) => Some(token),
            OwnedToken::Token(token) => Some(token),
            OwnedToken::LpToken(token) => Some(token),
            OwnedToken::Debt(token) => Some(token),
            OwnedToken::XToken(token) => Some(token),
            OwnedToken::Unrecognized(_) => None,
        }
    }

    /// Priced-facet view, present only for kinds carrying the priced facet.
    pub fn as_priced(&self) -> Option<&dyn PricedFacet> {
        match self {
            OwnedToken::NativeToken(token) => Some(token),
            OwnedToken::Token(token) => Some(token),
            OwnedToken::Debt(token) => Some(token),
            _ => None,
        }
    }

    pub fn as_native_token(&self) -> Option<&NativeToken> {
        match self {
            OwnedToken::NativeToken(token) => Some(token),
            _ => None,
        }
    }

    pub fn as_token(&self) -> Option<&Token> {
        match self {
            OwnedToken::Token(token) => Some(token),
            _ => None,
        }
    }

    pub fn as_lp_token(&self) -> Option<&LpToken> {
        match self {
            OwnedToken::LpToken(token) => Some(token),
            _ => None,
        }
    }

    pub fn as_debt_token(&self) -> Option<&DebtToken> {
        match self {
            OwnedToken::Debt(token) => Some(token),
            _ => None,
        }
    }

    pub fn as_x_token(&self) -> Option<&XToken> {
        match self {
            OwnedToken::XToken(token) => Some(token),
            _ => None,
        }
    }
}

pub fn is_native_token(token: &OwnedToken) -> bool {
    matches!(token, OwnedToken::NativeToken(_))
}

pub fn is_token(token: &OwnedToken) -> bool {
    matches!(token, OwnedToken::Token(_))
}

pub fn is_lp_token(token: &OwnedToken) -> bool {
    matches!(token, OwnedToken::LpToken(_))
}

pub fn is_debt_token(token: &OwnedToken) -> bool {
    matches!(token, OwnedToken::Debt(_))
}

pub fn is_x_token(token: &OwnedToken) -> bool {
    matches!(token, OwnedToken::XToken(_))
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
enum TaggedRef<'a> {
    NativeToken(&'a NativeToken),
    Token(&'a Token),
    LpToken(&'a LpToken),
    Debt(&'a DebtToken),
    XToken(&'a XToken),
}

impl Serialize for OwnedToken {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            OwnedToken::NativeToken(token) => TaggedRef::NativeToken(token).serialize(serializer),
            OwnedToken::Token(token) => TaggedRef::Token(token).serialize(serializer),
            OwnedToken::LpToken(token) => TaggedRef::LpToken(token).serialize(serializer),
            OwnedToken::Debt(token) => TaggedRef::Debt(token).serialize(serializer),
            OwnedToken::XToken(token) => TaggedRef::XToken(token).serialize(serializer),
            OwnedToken::Unrecognized(token) => {
                let rest: Vec<_> = token.fields.iter().filter(|(key, _)| key.as_str() != "type").collect();
                let mut map = serializer.serialize_map(Some(rest.len() + 1))?;
                map.serialize_entry("type", &token.kind)?;
                for (key, value) in rest {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for OwnedToken {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut fields = Map::<String, Value>::deserialize(deserializer)?;
        let kind = match fields.remove("type") {
            Some(Value::String(kind)) => kind,
            Some(other) => {
                return Err(de::Error::custom(format!(
                    "token `type` must be a string, got {}",
                    other
                )))
            }
            None => return Err(de::Error::missing_field("type")),
        };

        let Ok(known) = kind.parse::<TokenKind>() else {
            warn!("⚠️ Unrecognized token kind {:?}; it will match no token predicate", kind);
            return Ok(OwnedToken::Unrecognized(UnrecognizedToken { kind, fields }));
        };

        let body = Value::Object(fields);
        let token = match known {
            TokenKind::NativeToken => serde_json::from_value(body).map(OwnedToken::NativeToken),
            TokenKind::Token => serde_json::from_value(body).map(OwnedToken::Token),
            TokenKind::LpToken => serde_json::from_value(body).map(OwnedToken::LpToken),
            TokenKind::Debt => serde_json::from_value(body).map(OwnedToken::Debt),
            TokenKind::XToken => serde_json::from_value(body).map(OwnedToken::XToken),
        };
        token.map_err(de::Error::custom)
    }
}

//! # Wallet Registry: Mobile-Money Services
//!
//! Mobile-money wallets known to this crate. Three are the primary wallet
//! of an operator in [`crate::operator`]; the others (eDahab, Jeeb) run
//! across several networks and are only reachable by name, never through
//! an operator lookup.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::operator::Operator;

/// A mobile-money wallet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Wallet {
    #[serde(rename = "EVC")]
    Evc,
    #[serde(rename = "Sahal")]
    Sahal,
    #[serde(rename = "ZAAD")]
    Zaad,
    #[serde(rename = "eDahab")]
    EDahab,
    #[serde(rename = "Jeeb")]
    Jeeb,
}

/// Static metadata for a [`Wallet`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletInfo {
    /// Short name, identical to [`Wallet::as_str`].
    pub name: &'static str,
    pub full_name: &'static str,
    /// Operator running the service. Not necessarily an entry of
    /// [`Operator`]: multi-network wallets name their own operator.
    pub operating_operator: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub website: Option<&'static str>,
    /// Dial code opening the wallet menu, e.g. `*770#`.
    pub ussd_code: Option<&'static str>,
}

static EVC: WalletInfo = WalletInfo {
    name: "EVC",
    full_name: "EVC Plus",
    operating_operator: "Hormuud",
    description: "Mobile money service of Hormuud Telecom",
    features: &[
        "Send and receive money",
        "Merchant payments",
        "Bill payments",
        "Airtime top-up",
    ],
    website: Some("https://hormuud.com"),
    ussd_code: Some("*770#"),
};

static SAHAL: WalletInfo = WalletInfo {
    name: "Sahal",
    full_name: "Sahal",
    operating_operator: "Somtel",
    description: "Mobile money service of Somtel Network",
    features: &["Send and receive money", "Merchant payments", "Airtime top-up"],
    website: Some("https://somtel.com"),
    ussd_code: None,
};

static ZAAD: WalletInfo = WalletInfo {
    name: "ZAAD",
    full_name: "ZAAD Service",
    operating_operator: "Telesom",
    description: "Mobile money service of Telesom",
    features: &[
        "Send and receive money",
        "Merchant payments",
        "Bill payments",
        "Airtime top-up",
    ],
    website: Some("https://telesom.net"),
    ussd_code: None,
};

static EDAHAB: WalletInfo = WalletInfo {
    name: "eDahab",
    full_name: "eDahab",
    operating_operator: "Dahabshiil",
    description: "Dahabshiil mobile wallet available across several networks",
    features: &["Send and receive money", "Merchant payments", "Remittances"],
    website: None,
    ussd_code: None,
};

static JEEB: WalletInfo = WalletInfo {
    name: "Jeeb",
    full_name: "Jeeb",
    operating_operator: "Multiple",
    description: "Mobile wallet available across several networks",
    features: &["Send and receive money", "Merchant payments"],
    website: None,
    ussd_code: None,
};

impl Wallet {
    /// All wallets in registry order.
    pub fn all() -> &'static [Wallet] {
        &[Self::Evc, Self::Sahal, Self::Zaad, Self::EDahab, Self::Jeeb]
    }

    /// Short wallet name, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Evc => "EVC",
            Self::Sahal => "Sahal",
            Self::Zaad => "ZAAD",
            Self::EDahab => "eDahab",
            Self::Jeeb => "Jeeb",
        }
    }

    pub fn info(&self) -> &'static WalletInfo {
        match self {
            Self::Evc => &EVC,
            Self::Sahal => &SAHAL,
            Self::Zaad => &ZAAD,
            Self::EDahab => &EDAHAB,
            Self::Jeeb => &JEEB,
        }
    }
}

impl std::fmt::Display for Wallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognized wallet name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown wallet: {0:?}")]
pub struct UnknownWallet(pub String);

impl FromStr for Wallet {
    type Err = UnknownWallet;

    /// Parse a short wallet name, ignoring ASCII case (`"evc"`, `"EDAHAB"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|w| w.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownWallet(s.to_string()))
    }
}

/// A wallet together with its metadata, as listed by [`all_wallets`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WalletEntry {
    pub wallet: Wallet,
    #[serde(flatten)]
    pub info: &'static WalletInfo,
}

/// Every wallet with its metadata, including multi-network wallets.
pub fn all_wallets() -> Vec<WalletEntry> {
    Wallet::all()
        .iter()
        .map(|&wallet| WalletEntry {
            wallet,
            info: wallet.info(),
        })
        .collect()
}

/// Short names of every wallet, in registry order.
pub fn supported_wallets() -> Vec<&'static str> {
    Wallet::all().iter().map(Wallet::as_str).collect()
}

/// Wallet metadata by short name, ignoring ASCII case.
pub fn wallet_by_name(name: &str) -> Option<&'static WalletInfo> {
    name.parse::<Wallet>().ok().map(|w| w.info())
}

/// The primary wallet of the operator called `name`.
///
/// Only resolves operator → wallet. Wallets whose operating operator is
/// not in the operator registry (eDahab, Jeeb) are never returned.
pub fn wallet_by_operator(name: &str) -> Option<&'static WalletInfo> {
    name.parse::<Operator>()
        .ok()
        .and_then(|op| op.wallet())
        .map(|w| w.info())
}

//! # Operator Registry: Prefix to Mobile Network
//!
//! The [`Operator`] enum is the single definition of every Somali mobile
//! network this crate knows about. Prefix ownership, display metadata, and
//! the primary mobile-money wallet all hang off exhaustive `match`es on it,
//! so adding an operator forces every table to be updated.
//!
//! ## Invariants
//!
//! - Every mobile prefix belongs to exactly one operator.
//! - The union of all operators' prefixes equals [`MOBILE_PREFIXES`].
//! - An operator has at most one primary wallet.
//!
//! The data is a snapshot of public information and will drift from
//! reality; update the tables, not the algorithms.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::wallet::Wallet;

/// Every accepted 2-digit mobile prefix, sorted ascending.
pub const MOBILE_PREFIXES: &[&str] = &[
    "61", "62", "63", "64", "65", "66", "68", "69", "71", "77", "90",
];

/// The accepted mobile prefixes, sorted ascending.
pub fn mobile_prefixes() -> &'static [&'static str] {
    MOBILE_PREFIXES
}

/// Whether `prefix` is one of [`MOBILE_PREFIXES`].
pub fn is_mobile_prefix(prefix: &str) -> bool {
    MOBILE_PREFIXES.contains(&prefix)
}

/// A Somali mobile network operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Hormuud,
    Somtel,
    Telesom,
    SomLink,
    SomNet,
    NationLink,
    Amtel,
    Golis,
}

/// Static metadata for an [`Operator`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperatorInfo {
    /// Full display name.
    pub name: &'static str,
    /// Mobile prefixes owned by this operator.
    pub prefixes: &'static [&'static str],
    pub website: Option<&'static str>,
    /// Radio technology family.
    #[serde(rename = "type")]
    pub network_type: &'static str,
    /// Primary mobile-money wallet.
    pub wallet: Option<Wallet>,
}

static HORMUUD: OperatorInfo = OperatorInfo {
    name: "Hormuud Telecom Somalia",
    prefixes: &["61", "77"],
    website: Some("https://hormuud.com"),
    network_type: "GSM",
    wallet: Some(Wallet::Evc),
};

static SOMTEL: OperatorInfo = OperatorInfo {
    name: "Somtel Network",
    prefixes: &["62", "65", "66"],
    website: Some("https://somtel.com"),
    network_type: "GSM",
    wallet: Some(Wallet::Sahal),
};

static TELESOM: OperatorInfo = OperatorInfo {
    name: "Telesom",
    prefixes: &["63"],
    website: Some("https://telesom.net"),
    network_type: "GSM",
    wallet: Some(Wallet::Zaad),
};

static SOMLINK: OperatorInfo = OperatorInfo {
    name: "SomLink",
    prefixes: &["64"],
    website: None,
    network_type: "GSM",
    wallet: None,
};

static SOMNET: OperatorInfo = OperatorInfo {
    name: "SomNet",
    prefixes: &["68"],
    website: None,
    network_type: "GSM",
    wallet: None,
};

static NATIONLINK: OperatorInfo = OperatorInfo {
    name: "NationLink Telecom",
    prefixes: &["69"],
    website: None,
    network_type: "GSM",
    wallet: None,
};

static AMTEL: OperatorInfo = OperatorInfo {
    name: "Amtel",
    prefixes: &["71"],
    website: None,
    network_type: "GSM",
    wallet: None,
};

static GOLIS: OperatorInfo = OperatorInfo {
    name: "Golis Telecom",
    prefixes: &["90"],
    website: Some("https://golistelecom.com"),
    network_type: "GSM",
    wallet: None,
};

impl Operator {
    /// All operators in registry order.
    pub fn all() -> &'static [Operator] {
        &[
            Self::Hormuud,
            Self::Somtel,
            Self::Telesom,
            Self::SomLink,
            Self::SomNet,
            Self::NationLink,
            Self::Amtel,
            Self::Golis,
        ]
    }

    /// Short operator name, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hormuud => "Hormuud",
            Self::Somtel => "Somtel",
            Self::Telesom => "Telesom",
            Self::SomLink => "SomLink",
            Self::SomNet => "SomNet",
            Self::NationLink => "NationLink",
            Self::Amtel => "Amtel",
            Self::Golis => "Golis",
        }
    }

    /// The operator that owns a 2-digit prefix, if any.
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix {
            "61" | "77" => Some(Self::Hormuud),
            "62" | "65" | "66" => Some(Self::Somtel),
            "63" => Some(Self::Telesom),
            "64" => Some(Self::SomLink),
            "68" => Some(Self::SomNet),
            "69" => Some(Self::NationLink),
            "71" => Some(Self::Amtel),
            "90" => Some(Self::Golis),
            _ => None,
        }
    }

    pub fn info(&self) -> &'static OperatorInfo {
        match self {
            Self::Hormuud => &HORMUUD,
            Self::Somtel => &SOMTEL,
            Self::Telesom => &TELESOM,
            Self::SomLink => &SOMLINK,
            Self::SomNet => &SOMNET,
            Self::NationLink => &NATIONLINK,
            Self::Amtel => &AMTEL,
            Self::Golis => &GOLIS,
        }
    }

    /// The operator's primary wallet.
    pub fn wallet(&self) -> Option<Wallet> {
        self.info().wallet
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognized operator name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown operator: {0:?}")]
pub struct UnknownOperator(pub String);

impl FromStr for Operator {
    type Err = UnknownOperator;

    /// Parse a short operator name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|op| op.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownOperator(s.to_string()))
    }
}

/// An operator together with its metadata, as listed by [`all_operators`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OperatorEntry {
    pub operator: Operator,
    #[serde(flatten)]
    pub info: &'static OperatorInfo,
}

/// Every operator with its metadata, in registry order.
pub fn all_operators() -> Vec<OperatorEntry> {
    Operator::all()
        .iter()
        .map(|&operator| OperatorEntry {
            operator,
            info: operator.info(),
        })
        .collect()
}

/// The operator owning `prefix`, e.g. `"61"` → Hormuud.
pub fn operator_by_prefix(prefix: &str) -> Option<Operator> {
    Operator::from_prefix(prefix)
}

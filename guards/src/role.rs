//! Closed role set and the role → landing path resolver.

#[cfg(test)]
#[path = "role_test.rs"]
mod role_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::path::SIGN_IN_PATH;

/// One of the roles that selects a portal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleTag {
    Admin,
    CooperativeMember,
    LargeScaleFarmer,
    WholesaleTrader,
    RetailClient,
}

impl RoleTag {
    /// Every role tag, in portal menu order.
    pub const ALL: [Self; 5] = [
        Self::Admin,
        Self::CooperativeMember,
        Self::LargeScaleFarmer,
        Self::WholesaleTrader,
        Self::RetailClient,
    ];

    /// Canonical lower snake case tag, as stored in the session slot.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::CooperativeMember => "cooperative_member",
            Self::LargeScaleFarmer => "large_scale_farmer",
            Self::WholesaleTrader => "wholesale_trader",
            Self::RetailClient => "retail_client",
        }
    }

    /// Default landing path after sign-in.
    #[must_use]
    pub fn landing_path(self) -> &'static str {
        match self {
            Self::Admin => "/admin-portal/dashboard",
            Self::CooperativeMember => "/alliance-portal/dashboard",
            Self::LargeScaleFarmer => "/farmer-portal/dashboard",
            Self::WholesaleTrader => "/trader-portal/dashboard",
            Self::RetailClient => "/retail-portal/dashboard",
        }
    }

    /// Human-readable portal title.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Admin => "Administration",
            Self::CooperativeMember => "Alliance Cooperative",
            Self::LargeScaleFarmer => "Farmer",
            Self::WholesaleTrader => "Wholesale Trader",
            Self::RetailClient => "Retail Client",
        }
    }

    /// Parse a raw role string, trimming and lower-casing first.
    ///
    /// Returns `None` for anything outside the closed set, including empty input.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|role| role.as_str() == normalized)
    }
}

impl fmt::Display for RoleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve a raw role string to its landing path.
///
/// Unmapped roles, including the empty string, land on the sign-in page.
#[must_use]
pub fn resolve(role: &str) -> &'static str {
    RoleTag::parse(role).map_or(SIGN_IN_PATH, RoleTag::landing_path)
}

//! Directory of the endpoint groups mounted alongside this service.
//!
//! The groups themselves are served by other modules of the backend; only
//! their path prefixes and one-line descriptions are known here. Both
//! directory tables are assembled once on first use and shared by reference
//! for the lifetime of the process.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use strum::{Display, EnumIter, IntoEnumIterator, IntoStaticStr};

/// Path of the liveness probe.
pub const HEALTH_PATH: &str = "/health";
/// Path of the API description document.
pub const API_INFO_PATH: &str = "/api";

/// An endpoint group served by a sibling module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum EndpointGroup {
    /// Admin management.
    Admin,
    /// Buyer/customer management.
    Buyer,
    /// Seller management.
    Seller,
    /// Product catalog.
    Products,
    /// Order management.
    Orders,
    /// Shopping cart.
    Cart,
    /// Payment processing.
    Payments,
    /// Address management.
    Address,
}

impl EndpointGroup {
    /// Lowercase group name, e.g. `products`.
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Wildcard path prefix, e.g. `/admin/*`.
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Admin => "/admin/*",
            Self::Buyer => "/buyer/*",
            Self::Seller => "/seller/*",
            Self::Products => "/products/*",
            Self::Orders => "/orders/*",
            Self::Cart => "/cart/*",
            Self::Payments => "/payments/*",
            Self::Address => "/address/*",
        }
    }

    /// Label used as the key in the `/api` directory.
    pub fn api_label(self) -> &'static str {
        match self {
            Self::Admin => "Admin APIs",
            Self::Buyer => "Buyer APIs",
            Self::Seller => "Seller APIs",
            Self::Products => "Product APIs",
            Self::Orders => "Order APIs",
            Self::Cart => "Cart APIs",
            Self::Payments => "Payment APIs",
            Self::Address => "Address APIs",
        }
    }

    /// Human-readable summary of what the group serves.
    pub fn summary(self) -> &'static str {
        match self {
            Self::Admin => "Admin management endpoints",
            Self::Buyer => "Buyer/Customer management endpoints",
            Self::Seller => "Seller management endpoints",
            Self::Products => "Product catalog endpoints",
            Self::Orders => "Order management endpoints",
            Self::Cart => "Shopping cart endpoints",
            Self::Payments => "Payment processing endpoints",
            Self::Address => "Address management endpoints",
        }
    }

    /// Whether the group is advertised by the welcome endpoint.
    ///
    /// The welcome map has never listed `address`, although `/api` does.
    /// Kept that way until product confirms the intended listing.
    pub fn on_welcome(self) -> bool {
        !matches!(self, Self::Address)
    }

    /// `/api` directory value, e.g. `/admin/* - Admin management endpoints`.
    pub fn api_description(self) -> String {
        format!("{} - {}", self.prefix(), self.summary())
    }
}

/// Endpoint map returned by `GET /`.
pub static WELCOME_ENDPOINTS: Lazy<BTreeMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut endpoints = BTreeMap::new();
    endpoints.insert("health", HEALTH_PATH);
    endpoints.insert("api_docs", API_INFO_PATH);
    for group in EndpointGroup::iter().filter(|g| g.on_welcome()) {
        endpoints.insert(group.name(), group.prefix());
    }
    endpoints
});

/// Endpoint map returned by `GET /api`.
pub static API_ENDPOINTS: Lazy<BTreeMap<&'static str, String>> = Lazy::new(|| {
    EndpointGroup::iter()
        .map(|group| (group.api_label(), group.api_description()))
        .collect()
});

/// Force both tables so the first request doesn't pay for building them.
pub fn warm_up() {
    Lazy::force(&WELCOME_ENDPOINTS);
    Lazy::force(&API_ENDPOINTS);
}

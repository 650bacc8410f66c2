use std::fmt;

use serde::Serialize;

use super::model::{LaunchRecord, PayloadBounds};

/// Selector value meaning "no site restriction".
pub const ALL_SITES: &str = "ALL";

// ---------------------------------------------------------------------------
// Site filter
// ---------------------------------------------------------------------------

/// Which launch site the charts are restricted to.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub enum SiteFilter {
    #[default]
    All,
    Site(String),
}

impl SiteFilter {
    /// Interpret a raw selector value; `"ALL"` is the sentinel, anything else
    /// names a site.
    pub fn from_selector(value: &str) -> Self {
        if value == ALL_SITES {
            SiteFilter::All
        } else {
            SiteFilter::Site(value.to_string())
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, SiteFilter::All)
    }

    /// A record passes when the filter is `All` or the sites match exactly.
    pub fn matches(&self, record: &LaunchRecord) -> bool {
        match self {
            SiteFilter::All => true,
            SiteFilter::Site(site) => record.site == *site,
        }
    }
}

impl fmt::Display for SiteFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteFilter::All => write!(f, "{ALL_SITES}"),
            SiteFilter::Site(site) => write!(f, "{site}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Payload interval
// ---------------------------------------------------------------------------

/// Closed payload-mass range `[low, high]` in kilograms.
///
/// No ordering is enforced: an inverted interval simply contains nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PayloadInterval {
    pub low: f64,
    pub high: f64,
}

impl PayloadInterval {
    pub fn new(low: f64, high: f64) -> Self {
        PayloadInterval { low, high }
    }

    /// Inclusive at both ends.
    pub fn contains(&self, payload_mass: f64) -> bool {
        self.low <= payload_mass && payload_mass <= self.high
    }

    pub fn is_inverted(&self) -> bool {
        self.low > self.high
    }
}

impl From<PayloadBounds> for PayloadInterval {
    fn from(bounds: PayloadBounds) -> Self {
        PayloadInterval::new(bounds.min, bounds.max)
    }
}

impl fmt::Display for PayloadInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} kg, {} kg]", self.low, self.high)
    }
}

// ---------------------------------------------------------------------------
// Selection – the two user inputs together
// ---------------------------------------------------------------------------

/// Transient view parameters, rebuilt on every interaction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Selection {
    pub site_filter: SiteFilter,
    pub payload_interval: PayloadInterval,
}

impl Selection {
    pub fn new(site_filter: SiteFilter, payload_interval: PayloadInterval) -> Self {
        Selection {
            site_filter,
            payload_interval,
        }
    }

    /// Site and payload predicates combined; the correlation view keeps
    /// exactly the records this accepts.
    pub fn matches(&self, record: &LaunchRecord) -> bool {
        self.payload_interval.contains(record.payload_mass) && self.site_filter.matches(record)
    }
}

use std::fmt;

use serde::{Deserialize, Serialize};

/// Currencies offered by the estimate form.
///
/// The set is fixed. A selection changes display formatting only; amounts are
/// never converted between currencies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    #[default]
    Ghs,
    Usd,
    Eur,
    Gbp,
}

impl Currency {
    /// Every currency the form offers, in menu order.
    pub const ALL: [Currency; 4] = [Currency::Ghs, Currency::Usd, Currency::Eur, Currency::Gbp];

    /// ISO 4217 code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Ghs => "GHS",
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Gbp => "GBP",
        }
    }

    /// Symbol prefixed to formatted amounts.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Ghs => "₵",
            Self::Usd => "$",
            Self::Eur => "€",
            Self::Gbp => "£",
        }
    }

    /// Full name shown in document headers.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ghs => "Ghanaian Cedi",
            Self::Usd => "US Dollar",
            Self::Eur => "Euro",
            Self::Gbp => "British Pound",
        }
    }

    /// Looks a currency up by its ISO code, case-insensitively.
    pub fn parse(code: &str) -> Option<Self> {
        match code.to_ascii_uppercase().as_str() {
            "GHS" => Some(Self::Ghs),
            "USD" => Some(Self::Usd),
            "EUR" => Some(Self::Eur),
            "GBP" => Some(Self::Gbp),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

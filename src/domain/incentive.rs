use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// The kind of rule a rebate follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncentiveType {
    FixedCashAmount,
    FixedRateRebate,
    AmountPerUnit,
}

impl IncentiveType {
    pub const ALL: [IncentiveType; 3] = [
        IncentiveType::FixedCashAmount,
        IncentiveType::FixedRateRebate,
        IncentiveType::AmountPerUnit,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IncentiveType::FixedCashAmount => "fixed_cash_amount",
            IncentiveType::FixedRateRebate => "fixed_rate_rebate",
            IncentiveType::AmountPerUnit => "amount_per_unit",
        }
    }

    fn flag(self) -> u8 {
        match self {
            IncentiveType::FixedCashAmount => 0b001,
            IncentiveType::FixedRateRebate => 0b010,
            IncentiveType::AmountPerUnit => 0b100,
        }
    }
}

impl fmt::Display for IncentiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IncentiveType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IncentiveType::ALL
            .into_iter()
            .find(|incentive| incentive.as_str() == s)
            .ok_or_else(|| format!("unknown incentive type: {s}"))
    }
}

/// The set of incentive types a product accepts.
///
/// Backed by a bitmask so a product can support several incentives at once.
/// Textual form joins the members with `|` (e.g. `fixed_cash_amount|amount_per_unit`);
/// the empty string is the empty set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SupportedIncentives(u8);

impl SupportedIncentives {
    pub const NONE: Self = Self(0);

    pub fn all() -> Self {
        IncentiveType::ALL.into_iter().collect()
    }

    pub fn contains(&self, incentive: IncentiveType) -> bool {
        self.0 & incentive.flag() != 0
    }

    pub fn insert(&mut self, incentive: IncentiveType) {
        self.0 |= incentive.flag();
    }

    /// Returns a copy of the set with `incentive` added.
    pub fn with(mut self, incentive: IncentiveType) -> Self {
        self.insert(incentive);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = IncentiveType> + '_ {
        IncentiveType::ALL
            .into_iter()
            .filter(|incentive| self.contains(*incentive))
    }
}

impl From<IncentiveType> for SupportedIncentives {
    fn from(incentive: IncentiveType) -> Self {
        Self(incentive.flag())
    }
}

impl FromIterator<IncentiveType> for SupportedIncentives {
    fn from_iter<I: IntoIterator<Item = IncentiveType>>(iter: I) -> Self {
        let mut set = Self::NONE;
        for incentive in iter {
            set.insert(incentive);
        }
        set
    }
}

impl fmt::Display for SupportedIncentives {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.iter().map(|incentive| incentive.as_str()).collect();
        f.write_str(&names.join("|"))
    }
}

impl FromStr for SupportedIncentives {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split('|')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(IncentiveType::from_str)
            .collect()
    }
}

impl Serialize for SupportedIncentives {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SupportedIncentives {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

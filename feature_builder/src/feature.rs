//! Names of derived columns and of the features that can be charted.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Derived columns a [`FeatureFrame`](crate::FeatureFrame) can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureColumn {
    NormalizedPrice,
    Return,
    LogVolatility20,
}

impl FeatureColumn {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NormalizedPrice => "normalized_price",
            Self::Return => "return",
            Self::LogVolatility20 => "log_volatility_20",
        }
    }
}

impl fmt::Display for FeatureColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A feature that can be plotted across tickers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Feature {
    /// Price rebased so the first observation equals 1.0.
    #[serde(rename = "normalized_price", alias = "norm_close_price")]
    NormalizedPrice,
    /// Natural log of the trailing 20-return sample standard deviation.
    #[serde(rename = "log_volatility_20", alias = "logvol20")]
    LogVolatility20,
}

impl Feature {
    pub const ALL: [Feature; 2] = [Feature::NormalizedPrice, Feature::LogVolatility20];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NormalizedPrice => "normalized_price",
            Self::LogVolatility20 => "log_volatility_20",
        }
    }

    /// Semantic name used for the value axis.
    pub fn axis_label(&self) -> &'static str {
        match self {
            Self::NormalizedPrice => "normalized close price",
            Self::LogVolatility20 => "20-day log-volatility",
        }
    }

    /// Legend entry for one ticker's line.
    pub fn line_label(&self, ticker: &str) -> String {
        format!("{} of {ticker}", self.axis_label())
    }

    pub fn column(&self) -> FeatureColumn {
        match self {
            Self::NormalizedPrice => FeatureColumn::NormalizedPrice,
            Self::LogVolatility20 => FeatureColumn::LogVolatility20,
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown feature {0:?} (expected normalized_price or log_volatility_20)")]
pub struct UnknownFeature(pub String);

impl FromStr for Feature {
    type Err = UnknownFeature;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "normalized_price" | "norm_close_price" => Ok(Self::NormalizedPrice),
            "log_volatility_20" | "logvol20" => Ok(Self::LogVolatility20),
            _ => Err(UnknownFeature(s.to_string())),
        }
    }
}

// SPDX-License-Identifier: Apache-2.0

use crate::ids::BatteryId;
use crate::validation::{require_text, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BatteryType {
    Primary,
    Secondary,
    #[serde(rename = "Fuel Cell")]
    FuelCell,
}

impl BatteryType {
    pub const ALL: [Self; 3] = [Self::Primary, Self::Secondary, Self::FuelCell];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "Primary",
            Self::Secondary => "Secondary",
            Self::FuelCell => "Fuel Cell",
        }
    }

    /// Lowercase filter key: `primary`, `secondary` or `fuel-cell`.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::FuelCell => "fuel-cell",
        }
    }

    /// Accepts the filter key or the display name, ignoring ascii case.
    #[must_use]
    pub fn from_slug(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.slug().eq_ignore_ascii_case(raw) || t.as_str().eq_ignore_ascii_case(raw))
    }

    #[must_use]
    pub const fn is_rechargeable(self) -> bool {
        matches!(self, Self::Secondary)
    }
}

impl Display for BatteryType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Chemistry {
    pub anode: String,
    pub cathode: String,
    pub electrolyte: String,
    pub reactions: String,
}

/// Operating temperature window in °C, carried on the wire as `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct TemperatureRange {
    pub min: f64,
    pub max: f64,
}

impl TemperatureRange {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub fn contains(&self, celsius: f64) -> bool {
        celsius >= self.min && celsius <= self.max
    }
}

impl From<[f64; 2]> for TemperatureRange {
    fn from(value: [f64; 2]) -> Self {
        Self::new(value[0], value[1])
    }
}

impl From<TemperatureRange> for [f64; 2] {
    fn from(value: TemperatureRange) -> Self {
        [value.min, value.max]
    }
}

/// Units: Wh/kg, W/kg, V, cycles (hours for fuel cells), hours, C, %,
/// % per month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Performance {
    pub energy_density: u32,
    pub power_density: u32,
    pub voltage: f64,
    pub lifespan: u32,
    pub charging_time: f64,
    pub discharging_rate: f64,
    pub efficiency: f64,
    pub self_discharge: f64,
    pub operating_temperature: TemperatureRange,
}

impl Performance {
    fn validate(&self, record: &str) -> Result<(), ValidationError> {
        for (field, value) in [
            ("voltage", self.voltage),
            ("chargingTime", self.charging_time),
            ("dischargingRate", self.discharging_rate),
            ("efficiency", self.efficiency),
            ("selfDischarge", self.self_discharge),
        ] {
            if !value.is_finite() {
                return Err(ValidationError::NonFiniteMetric {
                    record: record.to_string(),
                    field,
                });
            }
            if value < 0.0 {
                return Err(ValidationError::NegativeMetric {
                    record: record.to_string(),
                    field,
                    value,
                });
            }
        }
        let range = self.operating_temperature;
        if !range.min.is_finite() || !range.max.is_finite() {
            return Err(ValidationError::NonFiniteMetric {
                record: record.to_string(),
                field: "operatingTemperature",
            });
        }
        if range.min > range.max {
            return Err(ValidationError::TemperatureRange {
                record: record.to_string(),
                min: range.min,
                max: range.max,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BatteryRecord {
    pub id: BatteryId,
    pub name: String,
    #[serde(rename = "type")]
    pub battery_type: BatteryType,
    pub description: String,
    pub chemistry: Chemistry,
    pub performance: Performance,
    pub applications: Vec<String>,
    pub advantages: Vec<String>,
    pub disadvantages: Vec<String>,
    pub construction: String,
}

impl BatteryRecord {
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.id.validate()?;
        let record = self.id.as_str();
        require_text(record, "name", &self.name)?;
        require_text(record, "description", &self.description)?;
        require_text(record, "chemistry.anode", &self.chemistry.anode)?;
        require_text(record, "chemistry.cathode", &self.chemistry.cathode)?;
        require_text(record, "chemistry.electrolyte", &self.chemistry.electrolyte)?;
        require_text(record, "construction", &self.construction)?;
        self.performance.validate(record)
    }
}

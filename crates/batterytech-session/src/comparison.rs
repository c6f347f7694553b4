// SPDX-License-Identifier: Apache-2.0

use crate::error::SessionError;
use batterytech_model::{BatteryId, BatteryRecord, Performance};
use serde::Serialize;
use std::collections::BTreeMap;

pub const SLOT_COUNT: usize = 3;

/// Performance fields that can be put side by side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ComparisonMetric {
    EnergyDensity,
    PowerDensity,
    Voltage,
    Lifespan,
    ChargingTime,
    DischargingRate,
    Efficiency,
    SelfDischarge,
}

impl ComparisonMetric {
    pub const ALL: [Self; 8] = [
        Self::EnergyDensity,
        Self::PowerDensity,
        Self::Voltage,
        Self::Lifespan,
        Self::ChargingTime,
        Self::DischargingRate,
        Self::Efficiency,
        Self::SelfDischarge,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::EnergyDensity => "Energy Density (Wh/kg)",
            Self::PowerDensity => "Power Density (W/kg)",
            Self::Voltage => "Nominal Voltage (V)",
            Self::Lifespan => "Lifespan (cycles)",
            Self::ChargingTime => "Charging Time (hours)",
            Self::DischargingRate => "Discharge Rate (C)",
            Self::Efficiency => "Efficiency (%)",
            Self::SelfDischarge => "Self-Discharge (%/month)",
        }
    }

    #[must_use]
    pub fn value(self, performance: &Performance) -> f64 {
        match self {
            Self::EnergyDensity => f64::from(performance.energy_density),
            Self::PowerDensity => f64::from(performance.power_density),
            Self::Voltage => performance.voltage,
            Self::Lifespan => f64::from(performance.lifespan),
            Self::ChargingTime => performance.charging_time,
            Self::DischargingRate => performance.discharging_rate,
            Self::Efficiency => performance.efficiency,
            Self::SelfDischarge => performance.self_discharge,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonCell {
    pub slot: usize,
    pub battery_id: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub metric: ComparisonMetric,
    pub label: &'static str,
    pub values: Vec<ComparisonCell>,
}

/// Legend entry for one populated slot: `key` is `battery1`..`battery3`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartSeries {
    pub key: String,
    pub name: String,
}

/// One bar group: the metric label plus a value per series key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartDatum {
    pub name: &'static str,
    #[serde(flatten)]
    pub values: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonChart {
    pub series: Vec<ChartSeries>,
    pub data: Vec<ChartDatum>,
}

/// What one selected battery is used for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplicationsColumn {
    pub slot: usize,
    pub battery_id: String,
    pub name: String,
    pub applications: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProsConsColumn {
    pub slot: usize,
    pub battery_id: String,
    pub name: String,
    pub advantages: Vec<String>,
    pub disadvantages: Vec<String>,
}

/// Up to three batteries chosen for side-by-side comparison.
///
/// No identifier is ever held by two slots at once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComparisonSelection {
    slots: [Option<BatteryId>; SLOT_COUNT],
}

impl ComparisonSelection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn slots(&self) -> &[Option<BatteryId>; SLOT_COUNT] {
        &self.slots
    }

    pub fn select_battery(&mut self, id: BatteryId, slot: usize) -> Result<(), SessionError> {
        check_slot(slot)?;
        if let Some(other) = self.occupied_elsewhere(id.as_str(), slot) {
            return Err(SessionError::AlreadySelected {
                id: id.as_str().to_string(),
                slot: other,
            });
        }
        self.slots[slot] = Some(id);
        Ok(())
    }

    /// Clears `slot`, returning what it held.
    pub fn remove_battery(&mut self, slot: usize) -> Result<Option<BatteryId>, SessionError> {
        check_slot(slot)?;
        Ok(self.slots[slot].take())
    }

    /// Whether the picker for `slot` should offer `id`.
    #[must_use]
    pub fn is_available(&self, id: &str, slot: usize) -> bool {
        slot < SLOT_COUNT && self.occupied_elsewhere(id, slot).is_none()
    }

    #[must_use]
    pub fn selected_ids(&self) -> Vec<&BatteryId> {
        self.slots.iter().flatten().collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// One row per metric; a cell per populated slot, in slot order. Slots
    /// whose battery is missing from `batteries` are skipped.
    #[must_use]
    pub fn derive_comparison_rows(
        &self,
        metrics: &[ComparisonMetric],
        batteries: &[BatteryRecord],
    ) -> Vec<ComparisonRow> {
        let selected = self.resolve(batteries);
        metrics
            .iter()
            .map(|&metric| ComparisonRow {
                metric,
                label: metric.label(),
                values: selected
                    .iter()
                    .map(|(slot, battery)| ComparisonCell {
                        slot: *slot,
                        battery_id: battery.id.as_str().to_string(),
                        value: metric.value(&battery.performance),
                    })
                    .collect(),
            })
            .collect()
    }

    #[must_use]
    pub fn derive_chart_series(
        &self,
        metrics: &[ComparisonMetric],
        batteries: &[BatteryRecord],
    ) -> ComparisonChart {
        let selected = self.resolve(batteries);
        let series = selected
            .iter()
            .map(|(slot, battery)| ChartSeries {
                key: series_key(*slot),
                name: battery.name.clone(),
            })
            .collect();
        let data = metrics
            .iter()
            .map(|&metric| ChartDatum {
                name: metric.label(),
                values: selected
                    .iter()
                    .map(|(slot, battery)| (series_key(*slot), metric.value(&battery.performance)))
                    .collect(),
            })
            .collect();
        ComparisonChart { series, data }
    }

    /// One column per populated slot, in slot order.
    #[must_use]
    pub fn derive_applications(&self, batteries: &[BatteryRecord]) -> Vec<ApplicationsColumn> {
        self.resolve(batteries)
            .into_iter()
            .map(|(slot, battery)| ApplicationsColumn {
                slot,
                battery_id: battery.id.as_str().to_string(),
                name: battery.name.clone(),
                applications: battery.applications.clone(),
            })
            .collect()
    }

    #[must_use]
    pub fn derive_pros_cons(&self, batteries: &[BatteryRecord]) -> Vec<ProsConsColumn> {
        self.resolve(batteries)
            .into_iter()
            .map(|(slot, battery)| ProsConsColumn {
                slot,
                battery_id: battery.id.as_str().to_string(),
                name: battery.name.clone(),
                advantages: battery.advantages.clone(),
                disadvantages: battery.disadvantages.clone(),
            })
            .collect()
    }

    fn resolve<'a>(&self, batteries: &'a [BatteryRecord]) -> Vec<(usize, &'a BatteryRecord)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(slot, id)| {
                let id = id.as_ref()?;
                batteries
                    .iter()
                    .find(|b| b.id == *id)
                    .map(|battery| (slot, battery))
            })
            .collect()
    }

    fn occupied_elsewhere(&self, id: &str, slot: usize) -> Option<usize> {
        (0..SLOT_COUNT).find(|&other| {
            other != slot && self.slots[other].as_ref().is_some_and(|held| held == id)
        })
    }
}

fn check_slot(slot: usize) -> Result<(), SessionError> {
    if slot < SLOT_COUNT {
        Ok(())
    } else {
        Err(SessionError::SlotOutOfRange { slot })
    }
}

fn series_key(slot: usize) -> String {
    format!("battery{}", slot + 1)
}

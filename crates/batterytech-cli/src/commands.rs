// SPDX-License-Identifier: Apache-2.0

use crate::output::{emit, OutputMode};
use crate::quiz_runner::run_quiz;
use crate::CliError;
use batterytech_api::{parse_battery_type, parse_compare_ids, parse_quiz_unit, ApiError};
use batterytech_model::BatteryRecord;
use batterytech_query::QueryService;
use batterytech_session::{ComparisonMetric, ComparisonSelection};
use batterytech_store::{validate_content, ContentStore};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::io::{BufRead, Write};

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<serde_json::Value, CliError> {
    serde_json::to_value(value).map_err(|e| CliError::internal(e.to_string()))
}

fn emit_cli(
    out: &mut impl Write,
    mode: OutputMode,
    payload: &serde_json::Value,
    text: &str,
) -> Result<(), CliError> {
    emit(out, mode, payload, text).map_err(CliError::internal)
}

pub(crate) fn list_batteries(
    out: &mut impl Write,
    mode: OutputMode,
    query: &QueryService,
    raw_type: Option<&str>,
) -> Result<(), CliError> {
    let mut params = BTreeMap::new();
    if let Some(raw) = raw_type {
        params.insert("type".to_string(), raw.to_string());
    }
    let filter = parse_battery_type(&params).map_err(|e| CliError::usage(e.message))?;
    let batteries: Vec<&BatteryRecord> = match filter {
        Some(battery_type) => query.get_batteries_by_type(battery_type),
        None => query.get_all_batteries().iter().collect(),
    };
    let mut text = String::new();
    for b in &batteries {
        let _ = writeln!(
            text,
            "{:<16} {:<24} {}",
            b.id.as_str(),
            b.name,
            b.battery_type.as_str()
        );
    }
    emit_cli(out, mode, &to_json(&batteries)?, &text)
}

fn describe(b: &BatteryRecord) -> String {
    let p = &b.performance;
    let mut text = String::new();
    let _ = writeln!(text, "{} ({})", b.name, b.battery_type);
    let _ = writeln!(text, "{}", b.description);
    let _ = writeln!(
        text,
        "\nChemistry\n  anode: {}\n  cathode: {}\n  electrolyte: {}\n  {}",
        b.chemistry.anode, b.chemistry.cathode, b.chemistry.electrolyte, b.chemistry.reactions
    );
    let _ = writeln!(text, "\nPerformance");
    for metric in ComparisonMetric::ALL {
        let _ = writeln!(text, "  {:<26} {}", metric.label(), metric.value(p));
    }
    let _ = writeln!(
        text,
        "  {:<26} {} to {}",
        "Operating Temperature (°C)", p.operating_temperature.min, p.operating_temperature.max
    );
    for (title, items) in [
        ("Applications", &b.applications),
        ("Advantages", &b.advantages),
        ("Disadvantages", &b.disadvantages),
    ] {
        let _ = writeln!(text, "\n{title}");
        for item in items {
            let _ = writeln!(text, "  - {item}");
        }
    }
    let _ = writeln!(text, "\nConstruction\n  {}", b.construction);
    text
}

pub(crate) fn show_battery(
    out: &mut impl Write,
    mode: OutputMode,
    query: &QueryService,
    id: &str,
) -> Result<(), CliError> {
    let record = query
        .get_battery_by_id(id)
        .map_err(|e| CliError::not_found(ApiError::from(e).message))?;
    emit_cli(out, mode, &to_json(record)?, &describe(record))
}

pub(crate) fn compare(
    out: &mut impl Write,
    mode: OutputMode,
    query: &QueryService,
    raw_ids: &str,
) -> Result<(), CliError> {
    let mut params = BTreeMap::new();
    params.insert("ids".to_string(), raw_ids.to_string());
    let ids = parse_compare_ids(&params).map_err(|e| CliError::usage(e.message))?;
    let found = query
        .get_batteries_by_ids(ids.as_slice())
        .map_err(|e| CliError::usage(ApiError::from(e).message))?;

    let mut selection = ComparisonSelection::new();
    let known = ids
        .iter()
        .filter_map(|id| found.iter().find(|b| b.id == id.as_str()));
    for (slot, record) in known.enumerate() {
        selection
            .select_battery(record.id.clone(), slot)
            .map_err(|e| CliError::internal(e.to_string()))?;
    }
    if selection.is_empty() {
        return Err(CliError::not_found(format!(
            "none of the requested batteries exist: {}",
            ids.join(",")
        )));
    }

    let all = query.get_all_batteries();
    let rows = selection.derive_comparison_rows(&ComparisonMetric::ALL, all);
    let chart = selection.derive_chart_series(&ComparisonMetric::ALL, all);

    let mut text = format!("{:<26}", "Metric");
    for series in &chart.series {
        let _ = write!(text, " {:>24}", series.name);
    }
    text.push('\n');
    for row in &rows {
        let _ = write!(text, "{:<26}", row.label);
        for cell in &row.values {
            let _ = write!(text, " {:>24}", cell.value);
        }
        text.push('\n');
    }

    let applications = selection.derive_applications(all);
    let pros_cons = selection.derive_pros_cons(all);
    let _ = writeln!(text, "\nApplications");
    for column in &applications {
        let _ = writeln!(text, "  {}", column.name);
        for item in &column.applications {
            let _ = writeln!(text, "    - {item}");
        }
    }
    let _ = writeln!(text, "\nPros & Cons");
    for column in &pros_cons {
        let _ = writeln!(text, "  {}", column.name);
        for item in &column.advantages {
            let _ = writeln!(text, "    + {item}");
        }
        for item in &column.disadvantages {
            let _ = writeln!(text, "    - {item}");
        }
    }

    let payload = json!({
        "batteries": to_json(&chart.series)?,
        "rows": to_json(&rows)?,
        "chart": to_json(&chart.data)?,
        "applications": to_json(&applications)?,
        "pros_cons": to_json(&pros_cons)?,
    });
    emit_cli(out, mode, &payload, &text)
}

pub(crate) fn list_units(
    out: &mut impl Write,
    mode: OutputMode,
    query: &QueryService,
) -> Result<(), CliError> {
    let units = query.get_quiz_units();
    let mut text = String::new();
    for u in units {
        let _ = writeln!(text, "Unit {}: {}\n  {}", u.unit, u.title, u.summary);
    }
    emit_cli(out, mode, &to_json(units)?, &text)
}

pub(crate) fn list_timeline(
    out: &mut impl Write,
    mode: OutputMode,
    query: &QueryService,
) -> Result<(), CliError> {
    let events = query.get_timeline();
    let mut text = String::new();
    for e in events {
        let _ = writeln!(text, "{:>5}  {}\n       {}", e.year, e.title, e.description);
    }
    emit_cli(out, mode, &to_json(events)?, &text)
}

pub(crate) fn quiz<R: BufRead>(
    input: &mut R,
    out: &mut impl Write,
    mode: OutputMode,
    query: &QueryService,
    raw_unit: &str,
    seed: Option<u64>,
    size: usize,
) -> Result<(), CliError> {
    let unit = parse_quiz_unit(raw_unit).map_err(|e| CliError::usage(e.message))?;
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let questions = query
        .get_quiz_by_unit_sized(unit, size.max(1), &mut rng)
        .map_err(|e| CliError::not_found(ApiError::from(e).message))?;

    let outcome = if mode.json {
        run_quiz(input, &mut std::io::stderr(), unit, questions)
    } else {
        run_quiz(input, &mut *out, unit, questions)
    };
    let report = outcome.map_err(CliError::internal)?;

    let text = format!(
        "\nQuiz complete: {}/{} ({}%)\n{}",
        report.score, report.total, report.percentage, report.feedback
    );
    emit_cli(out, mode, &to_json(&report)?, &text)
}

pub(crate) fn validate(
    out: &mut impl Write,
    mode: OutputMode,
    content: &dyn ContentStore,
) -> Result<(), CliError> {
    validate_content(content).map_err(|e| CliError::invalid_content(e.to_string()))?;
    let payload = json!({
        "status": "ok",
        "batteries": content.batteries().len(),
        "quiz_questions": content.quiz_questions().len(),
        "quiz_units": content.quiz_units().len(),
        "timeline_events": content.timeline().len(),
    });
    let text = format!(
        "content validation: OK ({} batteries, {} questions, {} units, {} timeline events)",
        content.batteries().len(),
        content.quiz_questions().len(),
        content.quiz_units().len(),
        content.timeline().len()
    );
    emit_cli(out, mode, &payload, &text)
}

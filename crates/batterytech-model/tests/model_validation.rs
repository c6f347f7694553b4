use batterytech_model::{
    BatteryId, BatteryRecord, BatteryType, Chemistry, ParseError, Performance, QuestionId,
    QuizQuestion, QuizUnit, TemperatureRange, ValidationError,
};

fn battery(id: &str) -> BatteryRecord {
    BatteryRecord {
        id: BatteryId::parse(id).expect("id"),
        name: "Zinc-Carbon Battery".to_string(),
        battery_type: BatteryType::Primary,
        description: "Inexpensive primary cell.".to_string(),
        chemistry: Chemistry {
            anode: "Zinc".to_string(),
            cathode: "Manganese Dioxide".to_string(),
            electrolyte: "Ammonium Chloride".to_string(),
            reactions: "Zinc is oxidized.".to_string(),
        },
        performance: Performance {
            energy_density: 65,
            power_density: 30,
            voltage: 1.5,
            lifespan: 0,
            charging_time: 0.0,
            discharging_rate: 0.1,
            efficiency: 75.0,
            self_discharge: 6.0,
            operating_temperature: TemperatureRange::new(0.0, 45.0),
        },
        applications: vec!["Remote controls".to_string()],
        advantages: vec!["Low cost".to_string()],
        disadvantages: vec!["Not rechargeable".to_string()],
        construction: "Zinc can around a carbon rod.".to_string(),
    }
}

fn question(correct: usize, options: usize) -> QuizQuestion {
    QuizQuestion {
        id: QuestionId::parse("q1").expect("id"),
        text: "Which is NOT a performance metric?".to_string(),
        options: (0..options).map(|i| format!("option {i}")).collect(),
        correct_answer: correct,
        explanation: "Because.".to_string(),
        unit: 1,
    }
}

#[test]
fn valid_battery_passes() {
    assert!(battery("zinc-carbon").validate().is_ok());
}

#[test]
fn inverted_temperature_range_is_rejected() {
    let mut record = battery("zinc-carbon");
    record.performance.operating_temperature = TemperatureRange::new(50.0, -10.0);
    assert!(matches!(
        record.validate(),
        Err(ValidationError::TemperatureRange { .. })
    ));
}

#[test]
fn negative_and_nan_metrics_are_rejected() {
    let mut negative = battery("zinc-carbon");
    negative.performance.voltage = -1.5;
    assert!(matches!(
        negative.validate(),
        Err(ValidationError::NegativeMetric { field: "voltage", .. })
    ));

    let mut nan = battery("zinc-carbon");
    nan.performance.efficiency = f64::NAN;
    assert!(matches!(
        nan.validate(),
        Err(ValidationError::NonFiniteMetric { field: "efficiency", .. })
    ));
}

#[test]
fn empty_name_is_rejected() {
    let mut record = battery("zinc-carbon");
    record.name = "  ".to_string();
    assert!(matches!(
        record.validate(),
        Err(ValidationError::EmptyField { field: "name", .. })
    ));
}

#[test]
fn question_needs_four_options_and_valid_answer_index() {
    assert!(question(2, 4).validate().is_ok());
    assert!(matches!(
        question(0, 3).validate(),
        Err(ValidationError::OptionCount { found: 3, .. })
    ));
    assert!(matches!(
        question(4, 4).validate(),
        Err(ValidationError::CorrectAnswerOutOfRange { index: 4, .. })
    ));
}

#[test]
fn unit_zero_is_rejected_for_questions_and_units() {
    let mut q = question(0, 4);
    q.unit = 0;
    assert!(matches!(
        q.validate(),
        Err(ValidationError::NonPositiveUnit { .. })
    ));
    let unit = QuizUnit {
        unit: 0,
        title: "Fundamentals".to_string(),
        summary: "Basics.".to_string(),
    };
    assert!(unit.validate().is_err());
}

#[test]
fn identifier_errors_surface_through_validation() {
    let err = BatteryId::parse("lithium-ion ").expect_err("trailing space");
    assert_eq!(err, ParseError::Trimmed("battery id"));
    assert_eq!(
        ValidationError::from(err).to_string(),
        "battery id must not contain leading/trailing whitespace"
    );
}

use std::io::Cursor;

use bikeshare_stats::config::DataConfig;
use bikeshare_stats::ingestion::LoadOptions;
use bikeshare_stats::prompt::run_session;
use bikeshare_stats::report::OutputFormat;

struct Transcript {
    output: String,
    errors: String,
}

fn drive(config: &DataConfig, script: &str, format: OutputFormat) -> Transcript {
    let mut input = Cursor::new(script.as_bytes().to_vec());
    let mut output = Vec::new();
    let mut errors = Vec::new();
    run_session(
        config,
        &LoadOptions::default(),
        format,
        &mut input,
        &mut output,
        &mut errors,
    )
    .unwrap();
    Transcript {
        output: String::from_utf8(output).unwrap(),
        errors: String::from_utf8(errors).unwrap(),
    }
}

#[test]
fn two_analyses_then_exit() {
    let cfg = DataConfig::with_data_dir("tests/fixtures");
    let t = drive(
        &cfg,
        "chicago\nmarch\nskip\nyes\nwashington\nskip\nskip\nno\n",
        OutputFormat::Text,
    );

    assert!(t.errors.is_empty(), "{}", t.errors);
    assert_eq!(t.output.matches("Hello! Let's explore some US bikeshare data!").count(), 2);
    assert_eq!(t.output.matches("Would you like to restart?").count(), 2);
    assert!(t.output.contains("6 trips (city: Chicago, month: March, day: all)"));
    assert!(t.output.contains("3 trips (city: Washington, month: all, day: all)"));
    assert!(t.output.contains("The most popular starting point is : Streeter Dr & Grand Ave station"));
    assert!(t.output.contains("\tCustomer : 0"));
}

#[test]
fn invalid_answers_are_reprompted() {
    let cfg = DataConfig::with_data_dir("tests/fixtures");
    let t = drive(&cfg, "boston\nnew york\njuly\nskip\nfunday\nmonday\nno\n", OutputFormat::Text);

    assert!(t.errors.is_empty(), "{}", t.errors);
    assert_eq!(t.output.matches("Invalid city name, please try again.").count(), 1);
    assert_eq!(t.output.matches("Invalid input, please try again.").count(), 2);
    assert!(t.output.contains("trips (city: New York City, month: all, day: Monday)"));
}

#[test]
fn failed_run_is_reported_and_restart_still_offered() {
    let cfg = DataConfig::with_data_dir("tests/fixtures/missing");
    let t = drive(&cfg, "chicago\nskip\nskip\nno\n", OutputFormat::Text);

    assert!(t.errors.starts_with("error: source not found for Chicago"), "{}", t.errors);
    assert!(t.output.contains("Would you like to restart?"));
    assert!(!t.output.contains("Processing Data"));
}

#[test]
fn end_of_input_ends_the_session() {
    let cfg = DataConfig::with_data_dir("tests/fixtures");
    let t = drive(&cfg, "washington\n", OutputFormat::Text);

    assert!(t.errors.is_empty());
    assert!(!t.output.contains("trips (city:"));
}

#[test]
fn json_format_in_session() {
    let cfg = DataConfig::with_data_dir("tests/fixtures");
    let t = drive(&cfg, "washington\nskip\nskip\nno\n", OutputFormat::Json);

    assert!(t.output.contains("\"city\": \"washington\""), "{}", t.output);
    assert!(t.output.contains("\"Subscriber\": 3"));
}

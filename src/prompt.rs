//! Interactive console session.
//!
//! The session reads from any [`BufRead`] and writes to any [`Write`], so it can be driven by
//! stdin/stdout or by in-memory buffers. Validation is delegated to the pure parsers in
//! [`crate::selector`]; this module only owns the re-prompt loop.

use std::io::{self, BufRead, Write};

use crate::config::DataConfig;
use crate::ingestion::LoadOptions;
use crate::pipeline;
use crate::report::{write_report, OutputFormat};
use crate::selector::{City, DayFilter, MonthFilter, Selector, SelectorError};

const CITY_QUESTION: &str = "Which city do you like to analyse Chicago, New York or Washington?";
const CITY_RETRY: &str = "\nInvalid city name, please try again.";
const MONTH_QUESTION: &str =
    "\nWould you like to filter data by month?\nPlease type month in full or \"skip\" for no month filter.";
const DAY_QUESTION: &str =
    "\nWould you like to filter data by day?\nPlease type day of week or \"skip\" for no day filter.";
const RETRY: &str = "\nInvalid input, please try again.";
const RESTART_QUESTION: &str = "\nWould you like to restart? Enter yes or no.";

/// Read one line; `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

/// Ask `question` until `parse` accepts the answer.
fn ask<R, W, T>(
    input: &mut R,
    output: &mut W,
    question: &str,
    retry: &str,
    parse: impl Fn(&str) -> Result<T, SelectorError>,
) -> io::Result<Option<T>>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{question}")?;
    loop {
        output.flush()?;
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        match parse(&line) {
            Ok(value) => return Ok(Some(value)),
            Err(e) => {
                log::debug!("rejected input: {e}");
                writeln!(output, "{retry}")?;
            }
        }
    }
}

/// Ask for city, month and day, re-prompting on invalid answers.
///
/// Returns `Ok(None)` if input ends before all three are answered.
pub fn prompt_selector<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<Selector>> {
    let Some(city) = ask(input, output, CITY_QUESTION, CITY_RETRY, City::parse)? else {
        return Ok(None);
    };
    let Some(month) = ask(input, output, MONTH_QUESTION, RETRY, MonthFilter::parse)? else {
        return Ok(None);
    };
    let Some(day) = ask(input, output, DAY_QUESTION, RETRY, DayFilter::parse)? else {
        return Ok(None);
    };
    Ok(Some(Selector::new(city, month, day)))
}

/// Ask whether to run again; only `yes` (any case) restarts.
pub fn prompt_restart<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<bool> {
    writeln!(output, "{RESTART_QUESTION}")?;
    output.flush()?;
    Ok(read_line(input)?.is_some_and(|answer| answer.trim().eq_ignore_ascii_case("yes")))
}

fn stage_banner<W: Write>(output: &mut W, stage: &str) -> io::Result<()> {
    let dots = ".".repeat(20);
    writeln!(output, "\n{dots} {stage} {dots}\n")
}

fn welcome_banner<W: Write>(output: &mut W) -> io::Result<()> {
    let hashes = "#".repeat(50);
    writeln!(
        output,
        "\t\n{hashes}\n\nHello! Let's explore some US bikeshare data!\n\n{hashes}\n"
    )
}

/// Run the interactive loop until the user declines to restart or input ends.
///
/// A failed run (missing source, malformed data) is reported on `errors` and the user is
/// offered a restart; only I/O errors on the console streams end the session early.
pub fn run_session<R, W, E>(
    config: &DataConfig,
    options: &LoadOptions,
    format: OutputFormat,
    input: &mut R,
    output: &mut W,
    errors: &mut E,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    loop {
        welcome_banner(output)?;
        let Some(selector) = prompt_selector(input, output)? else {
            return Ok(());
        };

        stage_banner(output, "Loading Data")?;
        match pipeline::run(config, &selector, options) {
            Ok(report) => {
                stage_banner(output, "Processing Data")?;
                write_report(output, &report, format)?;
            }
            Err(e) => {
                log::error!("analysis failed: {e}");
                writeln!(errors, "error: {e}")?;
            }
        }

        if !prompt_restart(input, output)? {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use chrono::Weekday;

    use super::{prompt_restart, prompt_selector};
    use crate::selector::{City, DayFilter, MonthFilter, Selector};

    fn run_prompt(script: &str) -> (Option<Selector>, String) {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        let sel = prompt_selector(&mut input, &mut output).unwrap();
        (sel, String::from_utf8(output).unwrap())
    }

    #[test]
    fn valid_answers_produce_selector() {
        let (sel, _) = run_prompt("Chicago\nmarch\nfriday\n");
        assert_eq!(
            sel,
            Some(Selector::new(
                City::Chicago,
                MonthFilter::Month(3),
                DayFilter::Day(Weekday::Fri)
            ))
        );
    }

    #[test]
    fn invalid_answers_are_reprompted() {
        let (sel, out) = run_prompt("paris\nwashington\nseptember\nskip\nfunday\nskip\n");
        assert_eq!(sel, Some(Selector::unfiltered(City::Washington)));
        assert_eq!(out.matches("Invalid city name, please try again.").count(), 1);
        assert_eq!(out.matches("Invalid input, please try again.").count(), 2);
    }

    #[test]
    fn end_of_input_yields_none() {
        let (sel, _) = run_prompt("new york city\njune\n");
        assert_eq!(sel, None);
    }

    #[test]
    fn restart_only_on_yes() {
        for (answer, expected) in [("yes\n", true), (" YES \n", true), ("no\n", false), ("y\n", false), ("", false)] {
            let mut input = Cursor::new(answer.as_bytes().to_vec());
            let mut output = Vec::new();
            assert_eq!(prompt_restart(&mut input, &mut output).unwrap(), expected, "{answer:?}");
        }
    }
}

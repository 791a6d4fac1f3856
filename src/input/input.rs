use std::io::{BufRead, Write};
use std::num::ParseIntError;

use crate::error::PomodoroError;
use crate::pomodoro::SessionConfig;

pub const INTERVALS_PROMPT: &str = "How many pomodoros would you like to complete today? ";
pub const WORK_PROMPT: &str = "For how long would you like to work (minutes)? ";
pub const SHORT_BREAK_PROMPT: &str = "How long would you like your short break to be (minutes)? ";
pub const LONG_BREAK_PROMPT: &str = "How long would you like your long break to be? (minutes) ";
pub const REPEAT_PROMPT: &str = "Yes or no? ";

/// Prompts for the four session settings in order.
///
/// Fails on the first answer that is not a whole number; no range checks are
/// made, so zero and negative values come back as typed.
pub fn read_session_config<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<SessionConfig, PomodoroError> {
    let interval_count = prompt_integer(input, output, INTERVALS_PROMPT)?;
    let work_minutes = prompt_integer(input, output, WORK_PROMPT)?;
    let short_break_minutes = prompt_integer(input, output, SHORT_BREAK_PROMPT)?;
    let long_break_minutes = prompt_integer(input, output, LONG_BREAK_PROMPT)?;

    Ok(SessionConfig {
        interval_count,
        work_minutes,
        short_break_minutes,
        long_break_minutes,
    })
}

/// Asks whether to run another session. Only "yes", in any letter case, is
/// affirmative; end of input counts as no.
pub fn ask_repeat<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<bool, PomodoroError> {
    Ok(read_line(input, output, REPEAT_PROMPT)?
        .map(|answer| is_affirmative(&answer))
        .unwrap_or(false))
}

pub fn is_affirmative(answer: &str) -> bool {
    answer.eq_ignore_ascii_case("yes")
}

fn prompt_integer<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<i64, PomodoroError> {
    let line = read_line(input, output, prompt)?.ok_or_else(|| PomodoroError::UnexpectedEof {
        prompt: prompt.trim_end().to_string(),
    })?;

    parse_whole_number(&line).map_err(|source| PomodoroError::Parse {
        prompt: prompt.trim_end().to_string(),
        input: line.clone(),
        source,
    })
}

/// Parses a signed whole number, allowing surrounding whitespace and single
/// `_` separators between digits (`1_000`). Values outside `i64` are errors.
fn parse_whole_number(text: &str) -> Result<i64, ParseIntError> {
    let text = text.trim();
    let bytes = text.as_bytes();
    let separators_between_digits = bytes.iter().enumerate().all(|(i, &b)| {
        b != b'_'
            || (i > 0
                && bytes[i - 1].is_ascii_digit()
                && bytes.get(i + 1).is_some_and(u8::is_ascii_digit))
    });

    if separators_between_digits && text.contains('_') {
        text.replace('_', "").parse()
    } else {
        text.parse()
    }
}

/// Returns the answer without its line terminator, or `None` at end of input.
fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<Option<String>, PomodoroError> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(Some(line))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn collect(text: &str) -> (Result<SessionConfig, PomodoroError>, String) {
        let mut input = Cursor::new(text.as_bytes().to_vec());
        let mut output = Vec::new();
        let result = read_session_config(&mut input, &mut output);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_reads_four_settings_in_order() {
        let (result, output) = collect("2\n25\n5\n15\n");
        let config = result.unwrap();

        assert_eq!(config.interval_count, 2);
        assert_eq!(config.work_minutes, 25);
        assert_eq!(config.short_break_minutes, 5);
        assert_eq!(config.long_break_minutes, 15);
        assert_eq!(
            output,
            format!("{INTERVALS_PROMPT}{WORK_PROMPT}{SHORT_BREAK_PROMPT}{LONG_BREAK_PROMPT}")
        );
    }

    #[test]
    fn test_accepts_surrounding_whitespace_and_signs() {
        let (result, _) = collect("  3 \r\n+10\n0\n-4\n");
        let config = result.unwrap();

        assert_eq!(config.interval_count, 3);
        assert_eq!(config.work_minutes, 10);
        assert_eq!(config.short_break_minutes, 0);
        assert_eq!(config.long_break_minutes, -4);
    }

    #[test]
    fn test_non_integer_stops_at_offending_prompt() {
        let (result, output) = collect("2\nabc\n5\n15\n");

        match result {
            Err(PomodoroError::Parse { prompt, input, .. }) => {
                assert_eq!(prompt, WORK_PROMPT.trim_end());
                assert_eq!(input, "abc");
            }
            other => panic!("expected parse error, got {:?}", other),
        }
        assert!(!output.contains(SHORT_BREAK_PROMPT));
    }

    #[test]
    fn test_digit_separators() {
        assert_eq!(parse_whole_number("1_000"), Ok(1000));
        assert_eq!(parse_whole_number(" -2_5 "), Ok(-25));
        for bad in ["_1", "1_", "1__0", "+_1", "_"] {
            assert!(parse_whole_number(bad).is_err(), "{bad:?} should be rejected");
        }

        let (result, _) = collect("1_0
25
5
15
");
        assert_eq!(result.unwrap().interval_count, 10);
    }

    #[test]
    fn test_out_of_range_is_rejected() {
        assert!(parse_whole_number("9223372036854775807").is_ok());
        assert!(parse_whole_number("9223372036854775808").is_err());
        assert!(matches!(
            collect("99999999999999999999
").0,
            Err(PomodoroError::Parse { .. })
        ));
    }

    #[test]
    fn test_decimal_is_rejected() {
        let (result, _) = collect("2.5\n");
        assert!(matches!(result, Err(PomodoroError::Parse { .. })));
    }

    #[test]
    fn test_end_of_input_is_an_error() {
        let (result, _) = collect("4\n25\n");
        match result {
            Err(PomodoroError::UnexpectedEof { prompt }) => {
                assert_eq!(prompt, SHORT_BREAK_PROMPT.trim_end());
            }
            other => panic!("expected end of input error, got {:?}", other),
        }
    }

    #[test]
    fn test_only_exact_yes_repeats() {
        for answer in ["yes", "YES", "Yes", "yEs"] {
            assert!(is_affirmative(answer), "{answer:?} should repeat");
        }
        for answer in ["", "y", "YES!", "no", "No", " yes", "yes "] {
            assert!(!is_affirmative(answer), "{answer:?} should not repeat");
        }
    }

    #[test]
    fn test_ask_repeat_prompts_and_reads_answer() {
        let mut input = Cursor::new(b"Yes\r\n".to_vec());
        let mut output = Vec::new();

        assert!(ask_repeat(&mut input, &mut output).unwrap());
        assert_eq!(String::from_utf8(output).unwrap(), REPEAT_PROMPT);
    }

    #[test]
    fn test_ask_repeat_treats_end_of_input_as_no() {
        let mut input = Cursor::new(Vec::new());
        let mut output = Vec::new();

        assert!(!ask_repeat(&mut input, &mut output).unwrap());
    }
}

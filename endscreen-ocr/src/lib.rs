//! League of Legends end-screen extraction.
//!
//! `extract --input <json>` validates the request payload and reports which
//! side won. Recognition is not wired in yet, so every accepted request gets
//! the placeholder record with both sides `unknown`.

pub mod args;
pub mod error;
pub mod extraction;
pub mod json;
pub mod payload;

pub use error::{ExtractError, Result};
pub use extraction::{ExtractionOutput, ExtractionRequest, Response, Side, TeamMember};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

/// Validates the `--input` payload found in `args` and produces the output record.
pub fn extract(args: &[String]) -> Result<ExtractionOutput> {
    let raw = args::find_input(args).ok_or(ExtractError::MissingInput)?;
    let payload = payload::validate(raw)?;

    // the payload only has to be JSON; its shape is logged, never enforced
    let _request = match serde_json::from_str::<serde_json::Value>(&payload) {
        Ok(value) => ExtractionRequest::recognize(&value),
        Err(e) => {
            tracing::debug!("Skipping request recognition: {e}");
            None
        }
    };

    Ok(ExtractionOutput::placeholder())
}

/// Exit status and stdout record of one invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub exit_code: i32,
    pub response: Response,
}

impl Outcome {
    pub fn line(&self) -> serde_json::Result<String> {
        json::to_line(&self.response)
    }
}

/// Runs one invocation over the arguments that follow the program name.
pub fn run(args: &[String]) -> Outcome {
    match extract(args) {
        Ok(output) => Outcome {
            exit_code: EXIT_SUCCESS,
            response: output.into(),
        },
        Err(e) => {
            tracing::info!("Rejected input: {e}");
            Outcome {
                exit_code: EXIT_FAILURE,
                response: Response::from(&e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLACEHOLDER: &str =
        r#"{"winnerSide": "unknown", "teamASide": "unknown", "confidence": {}, "result": {}}"#;
    const MISSING: &str = r#"{"error": "Missing --input"}"#;
    const INVALID: &str = r#"{"error": "Invalid JSON input"}"#;

    fn run_with(tokens: &[&str]) -> (i32, String) {
        let args = tokens.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        let outcome = run(&args);
        (outcome.exit_code, outcome.line().unwrap())
    }

    #[test]
    fn test_no_arguments() {
        assert_eq!(run_with(&[]), (1, MISSING.to_string()));
    }

    #[test]
    fn test_flag_as_last_argument() {
        assert_eq!(run_with(&["--input"]), (1, MISSING.to_string()));
        assert_eq!(run_with(&["--input", ""]), (1, MISSING.to_string()));
    }

    #[test]
    fn test_invalid_json() {
        assert_eq!(run_with(&["--input", "{bad json"]), (1, INVALID.to_string()));
        assert_eq!(run_with(&["--input", "not-json"]), (1, INVALID.to_string()));
        assert_eq!(run_with(&["--input", "{} trailing"]), (1, INVALID.to_string()));
    }

    #[test]
    fn test_any_json_value_accepted() {
        for payload in ["{}", "[1,2,3]", "\"x\"", "42", "null", "true", " {\"foo\":\"bar\"} "] {
            assert_eq!(
                run_with(&["--input", payload]),
                (0, PLACEHOLDER.to_string()),
                "payload {payload:?}"
            );
        }
    }

    #[test]
    fn test_valid_json_beyond_parser_limits_accepted() {
        let deep = format!("{}{}", "[".repeat(200), "]".repeat(200));
        assert_eq!(run_with(&["--input", deep.as_str()]), (0, PLACEHOLDER.to_string()));
        assert_eq!(run_with(&["--input", "1e400"]), (0, PLACEHOLDER.to_string()));
        assert_eq!(run_with(&["--input", r#""\ud800""#]), (0, PLACEHOLDER.to_string()));
    }

    #[test]
    fn test_non_finite_literals_accepted() {
        for payload in ["NaN", "Infinity", "-Infinity", r#"{"score": NaN, "kda": [Infinity]}"#] {
            assert_eq!(
                run_with(&["--input", payload]),
                (0, PLACEHOLDER.to_string()),
                "payload {payload:?}"
            );
        }
        assert_eq!(run_with(&["--input", "-NaN"]), (1, INVALID.to_string()));
    }

    #[test]
    fn test_payload_does_not_affect_output() {
        let first = run_with(&["--input", r#"{"a":1}"#]);
        let second = run_with(&["--input", r#"{"b":2}"#]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_full_request_gets_placeholder() {
        let payload = r#"{"attachmentId":"a1","matchId":"m1","s3Key":"k","teamA":[{"friendId":"f1","riotGameName":"Name","riotTagLine":"KR1"}],"teamB":[]}"#;
        assert_eq!(run_with(&["--input", payload]), (0, PLACEHOLDER.to_string()));
    }

    #[test]
    fn test_unrelated_arguments_ignored() {
        assert_eq!(
            run_with(&["--verbose", "--input", "{}", "extra"]),
            (0, PLACEHOLDER.to_string())
        );
    }

    #[test]
    fn test_output_round_trips_through_response() {
        let (_, line) = run_with(&["--input", "{}"]);
        let output = Response::from_line(&line).unwrap().into_result().unwrap();
        assert_eq!(output, ExtractionOutput::placeholder());

        let (_, line) = run_with(&[]);
        let err = Response::from_line(&line).unwrap().into_result().unwrap_err();
        assert_eq!(err.to_string(), "Missing --input");
    }
}

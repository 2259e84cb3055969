//! Command-line host for `rest-core`.
//!
//! # Overview
//! Resolves call parameters from flags and an optional JSON config, runs the
//! call through `UreqTransport`, and records the result as output artifacts:
//! `response` holds the body, `error` holds the coded error text.

pub mod args;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod transport;

use std::io::Write;

use rest_core::{CallExecutor, Transport};
use tracing::{info, warn};

pub use args::Cli;
pub use error::CliError;
pub use output::OutputDir;
pub use transport::UreqTransport;

/// Execute the call described by `cli` over `transport` and write the
/// artifacts. On success the body is also echoed to stdout.
pub fn run<T: Transport>(cli: &Cli, transport: T) -> Result<(), CliError> {
    let output = OutputDir::new(&cli.output_dir);
    let params = match config::resolve(cli) {
        Ok(params) => params,
        Err(err) => {
            output.write_error(&err.to_string())?;
            return Err(err);
        }
    };
    let executor = CallExecutor::new(transport);

    match executor.execute_params(&params) {
        Ok(response) => {
            info!(status = response.status, bytes = response.body.len(), "call succeeded");
            output.write_response(&response.body)?;
            let mut stdout = std::io::stdout().lock();
            if let Err(e) = stdout.write_all(&response.body).and_then(|()| stdout.flush()) {
                warn!(error = %e, "failed to echo response body to stdout");
            }
            Ok(())
        }
        Err(err) => {
            let body = err.response().map(|response| response.body.clone());
            let err = CliError::from(err);
            output.write_error(&err.to_string())?;
            if let Some(body) = body {
                output.write_response(&body)?;
            }
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use rest_core::{CannedTransport, HttpResponse, TransportFailure};
    use std::fs;

    fn cli(out: &std::path::Path, extra: &[&str]) -> Cli {
        let mut argv = vec![
            "rest-api",
            "--url",
            "https://localhost",
            "--output-dir",
            out.to_str().unwrap(),
        ];
        argv.extend_from_slice(extra);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn success_writes_response_artifact() {
        let tmp = tempfile::tempdir().unwrap();
        let transport = CannedTransport::respond(HttpResponse::new(200, "test"));

        run(&cli(tmp.path(), &["--requestType", "GET"]), &transport).unwrap();

        assert_eq!(fs::read_to_string(tmp.path().join("response")).unwrap(), "test");
        assert!(!tmp.path().join("error").exists());
    }

    #[test]
    fn mismatch_writes_both_artifacts() {
        let tmp = tempfile::tempdir().unwrap();
        let transport = CannedTransport::respond(HttpResponse::new(200, "body"));
        let args = ["--requestType", "GET", "--expectedResponseCode", "405"];

        let err = run(&cli(tmp.path(), &args), &transport).unwrap_err();
        assert!(matches!(err, CliError::Call(_)));

        let error = fs::read_to_string(tmp.path().join("error")).unwrap();
        assert!(error.starts_with("ERR_STATUS_MISMATCH: "), "{error}");
        assert_eq!(fs::read_to_string(tmp.path().join("response")).unwrap(), "body");
    }

    #[test]
    fn bad_verb_writes_error_only() {
        let tmp = tempfile::tempdir().unwrap();
        let transport = CannedTransport::respond(HttpResponse::new(200, ""));

        run(&cli(tmp.path(), &["--requestType", "badType"]), &transport).unwrap_err();

        let error = fs::read_to_string(tmp.path().join("error")).unwrap();
        assert!(error.starts_with("ERR_BUILD_FAILED: "), "{error}");
        assert!(!tmp.path().join("response").exists());
        assert!(transport.sent().is_empty());
    }

    #[test]
    fn missing_config_file_writes_error() {
        let tmp = tempfile::tempdir().unwrap();
        let transport = CannedTransport::respond(HttpResponse::new(200, ""));

        let err = run(&cli(tmp.path(), &["--config", "/nonexistent/rest.json"]), &transport)
            .unwrap_err();
        assert!(matches!(err, CliError::ConfigRead { .. }));

        let error = fs::read_to_string(tmp.path().join("error")).unwrap();
        assert!(error.starts_with("failed to read config /nonexistent/rest.json"), "{error}");
        assert!(transport.sent().is_empty());
    }

    #[test]
    fn malformed_config_file_writes_error() {
        let tmp = tempfile::tempdir().unwrap();
        let config = tmp.path().join("call.json");
        fs::write(&config, "{not json").unwrap();
        let transport = CannedTransport::respond(HttpResponse::new(200, ""));

        let err = run(&cli(tmp.path(), &["--config", config.to_str().unwrap()]), &transport)
            .unwrap_err();
        assert!(matches!(err, CliError::ConfigParse { .. }));
        assert!(tmp.path().join("error").exists());
    }

    #[test]
    fn empty_flag_clears_expected_code_from_config() {
        let tmp = tempfile::tempdir().unwrap();
        let config = tmp.path().join("call.json");
        fs::write(&config, r#"{"request_type":"GET","expected_response_code":"201"}"#).unwrap();
        let transport = CannedTransport::respond(HttpResponse::new(200, "ok"));
        let args = ["--config", config.to_str().unwrap(), "--expectedResponseCode", ""];

        run(&cli(tmp.path(), &args), &transport).unwrap();
        assert_eq!(fs::read_to_string(tmp.path().join("response")).unwrap(), "ok");
    }

    #[test]
    fn error_artifact_survives_unwritable_response() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir(tmp.path().join("response")).unwrap();
        let transport = CannedTransport::respond(HttpResponse::new(404, "gone"));

        let err = run(&cli(tmp.path(), &["--requestType", "GET"]), &transport).unwrap_err();
        assert!(matches!(err, CliError::Output { .. }));

        let error = fs::read_to_string(tmp.path().join("error")).unwrap();
        assert!(error.starts_with("NOT_FOUND: "), "{error}");
    }

    #[test]
    fn transport_failure_is_coded() {
        let tmp = tempfile::tempdir().unwrap();
        let transport = CannedTransport::fail(TransportFailure::new("connection refused"));

        run(&cli(tmp.path(), &["--requestType", "DELETE"]), &transport).unwrap_err();

        let error = fs::read_to_string(tmp.path().join("error")).unwrap();
        assert_eq!(error, "ERR_TRANSPORT: transport failure: connection refused");
    }
}

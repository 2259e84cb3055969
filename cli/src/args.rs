//! Command-line surface.
//!
//! Long flag names keep the camelCase spelling pipelines already pass.
//! Every call flag is optional here; validation happens in the core so an
//! unsupported verb still produces an error artifact.

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use rest_core::ParamOverrides;

/// Execute a single REST API call and record the response.
///
/// Examples:
///   rest-api --url https://api.example.com/items --requestType GET
///   rest-api --url https://api.example.com/items --requestType POST \
///       --payload '{"name":"x"}' --bearerToken "$TOKEN" --expectedResponseCode 201
#[derive(Debug, Parser)]
#[command(name = "rest-api")]
#[command(version)]
#[command(about = "Execute a single REST API call and record the response")]
pub struct Cli {
    /// REST API URL.
    #[arg(long, env = "REST_API_URL")]
    pub url: Option<String>,

    /// Request type [GET|POST|PUT|DELETE].
    #[arg(long = "requestType", value_name = "TYPE", env = "REST_API_REQUEST_TYPE")]
    pub request_type: Option<String>,

    /// Request body for POST and PUT, sent as application/json.
    #[arg(long, env = "REST_API_PAYLOAD")]
    pub payload: Option<String>,

    /// Bearer token for authentication.
    #[arg(long = "bearerToken", env = "REST_API_BEARER_TOKEN", hide_env_values = true)]
    pub bearer_token: Option<String>,

    /// Username for basic authentication (ignored when a bearer token is set).
    #[arg(long, env = "REST_API_USERNAME")]
    pub username: Option<String>,

    /// Password for basic authentication.
    #[arg(long, env = "REST_API_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Expected response code. When omitted any 2xx is accepted.
    #[arg(
        long = "expectedResponseCode",
        value_name = "CODE",
        env = "REST_API_EXPECTED_RESPONSE_CODE"
    )]
    pub expected_response_code: Option<String>,

    /// JSON file with default call parameters; flags override it.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory that receives the `response` and `error` artifacts.
    #[arg(long = "output-dir", value_name = "DIR", env = "CLOUDBEES_OUTPUTS", default_value = ".")]
    pub output_dir: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Call parameters given on the command line. A flag passed with an
    /// empty value is still present and clears the config file's value.
    pub fn overrides(&self) -> ParamOverrides {
        ParamOverrides {
            url: self.url.clone(),
            bearer_token: self.bearer_token.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
            request_type: self.request_type.clone(),
            payload: self.payload.clone(),
            expected_response_code: self.expected_response_code.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_camel_case_flags() {
        let cli = Cli::try_parse_from([
            "rest-api",
            "--url",
            "https://localhost",
            "--requestType",
            "POST",
            "--payload",
            "{}",
            "--bearerToken",
            "tok",
            "--expectedResponseCode",
            "201",
            "--output-dir",
            "/tmp/out",
        ])
        .unwrap();

        let overrides = cli.overrides();
        assert_eq!(overrides.url.as_deref(), Some("https://localhost"));
        assert_eq!(overrides.request_type.as_deref(), Some("POST"));
        assert_eq!(overrides.payload.as_deref(), Some("{}"));
        assert_eq!(overrides.bearer_token.as_deref(), Some("tok"));
        assert_eq!(overrides.expected_response_code.as_deref(), Some("201"));
        assert_eq!(cli.output_dir, PathBuf::from("/tmp/out"));
    }

    #[test]
    fn missing_flags_are_absent() {
        let cli = Cli::try_parse_from(["rest-api", "--url", "https://localhost", "-vv"]).unwrap();
        let overrides = cli.overrides();
        assert!(overrides.request_type.is_none());
        assert!(overrides.username.is_none());
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn empty_flag_is_present() {
        let argv = ["rest-api", "--expectedResponseCode", "", "--bearerToken", ""];
        let cli = Cli::try_parse_from(argv).unwrap();
        let overrides = cli.overrides();
        assert_eq!(overrides.expected_response_code.as_deref(), Some(""));
        assert_eq!(overrides.bearer_token.as_deref(), Some(""));
    }
}

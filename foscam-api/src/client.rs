use cgi_client::CgiClient;
use foscam_parser::Response;
use serde_json::Value as JsonValue;
use url::Url;

use crate::coerce::{boolean_to_number, Options};
use crate::config::FoscamConfig;
use crate::error::{ApiError, Result};
use crate::result_code::CgiResult;

/// A client for sending CGI commands to one Foscam camera
///
/// Commands are plain GET requests against `CGIProxy.fcgi` with the command
/// name, credentials and options in the query string. Replies go through
/// [`foscam_parser::normalize`] before they reach the caller.
///
/// ```rust,no_run
/// use foscam_api::{FoscamClient, FoscamConfig};
///
/// let config = FoscamConfig::new("192.168.1.50").with_credentials("admin", "secret");
/// let client = FoscamClient::new(config)?;
///
/// let osd = client.get_osd_setting()?;
/// println!("device name overlay: {}", osd.is_enable_dev_name);
/// # Ok::<(), foscam_api::ApiError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FoscamClient {
    config: FoscamConfig,
    url: String,
    endpoint: Url,
    cgi_client: CgiClient,
}

impl FoscamClient {
    /// Create a client, building a transport from the configuration
    pub fn new(config: FoscamConfig) -> Result<Self> {
        config.validate()?;
        let cgi_client = CgiClient::with_options(&config.transport_options())?;
        Self::with_cgi_client(config, cgi_client)
    }

    /// Create a client with a custom transport (for advanced use cases)
    pub fn with_cgi_client(config: FoscamConfig, cgi_client: CgiClient) -> Result<Self> {
        config.validate()?;
        let url = config.endpoint();
        let endpoint = Url::parse(&url)
            .map_err(|e| ApiError::InvalidConfig(format!("invalid endpoint '{}': {}", url, e)))?;

        Ok(Self {
            config,
            url,
            endpoint,
            cgi_client,
        })
    }

    /// The CGI endpoint, e.g. `http://192.168.1.50:88/cgi-bin/CGIProxy.fcgi`
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn config(&self) -> &FoscamConfig {
        &self.config
    }

    /// Build the full request URL for `cmd`.
    ///
    /// The query starts with `cmd`, `usr` and `pwd`, followed by `options` in
    /// order. Booleans are sent as `0`/`1` and `null` options are skipped.
    pub fn request_url(&self, cmd: &str, options: &Options) -> Url {
        let mut url = self.endpoint.clone();
        {
            let mut query = url.query_pairs_mut();
            query
                .append_pair("cmd", cmd)
                .append_pair("usr", &self.config.username)
                .append_pair("pwd", &self.config.password);

            for (key, value) in options {
                if let Some(text) = query_value(value) {
                    query.append_pair(key, &text);
                }
            }
        }
        url
    }

    /// Send `cmd` and return the normalized reply without interpreting it
    pub fn call(&self, cmd: &str, options: &Options) -> Result<Response> {
        tracing::debug!(cmd, host = %self.config.host, "Sending CGI command");

        let raw = self.cgi_client.get(&self.request_url(cmd, options))?;
        let response = foscam_parser::normalize(raw.as_deref());

        if let Response::Unparsed(_) = response {
            tracing::debug!(cmd, "CGI reply was not XML");
        }
        Ok(response)
    }

    /// Send `cmd`, require a successful `result` code and return the other
    /// reply fields as JSON
    pub fn execute(&self, cmd: &str, options: &Options) -> Result<Options> {
        let response = self.call(cmd, options)?;
        reply_fields(cmd, response)
    }
}

/// Query-string form of an option value
fn query_value(value: &JsonValue) -> Option<String> {
    match value {
        JsonValue::Null => None,
        JsonValue::Bool(flag) => Some(boolean_to_number(*flag).to_string()),
        JsonValue::String(text) => Some(text.clone()),
        JsonValue::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }
}

/// Check the `result` code of a normalized reply and strip it
pub(crate) fn reply_fields(cmd: &str, response: Response) -> Result<Options> {
    let mut fields = match response {
        Response::Parsed(value) => match value.to_json() {
            JsonValue::Object(map) => map,
            other => {
                return Err(ApiError::UnexpectedResponse(format!(
                    "{} replied with a bare value: {}",
                    cmd, other
                )))
            }
        },
        Response::Unparsed(text) => {
            return Err(ApiError::UnexpectedResponse(format!(
                "{} replied with a non-XML body ({} bytes)",
                cmd,
                text.len()
            )))
        }
        Response::Absent => {
            return Err(ApiError::UnexpectedResponse(format!("{} replied with an empty body", cmd)))
        }
    };

    let code = fields
        .remove("result")
        .and_then(|value| value.as_i64())
        .ok_or_else(|| ApiError::UnexpectedResponse(format!("{} reply has no result code", cmd)))?;

    let result = CgiResult::from_code(code);
    if !result.is_success() {
        tracing::warn!(cmd, code, "CGI command rejected by device");
        return Err(ApiError::CgiFailure(result));
    }

    Ok(fields)
}

use std::time::Duration;

use log::debug;
use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::COOKIE;
use serde::Deserialize;
use serde_json::Value;

use crate::cli::BackendArgs;
use crate::controls::ChartRequest;
use crate::fetch::Endpoint;
use crate::fetch::TraceSource;
use crate::fetch::error::FetchError;
use crate::fetch::error::Result;

pub(crate) struct DashboardClient {
    client: Client,
    base_url: String,
    session: Option<String>,
}

impl DashboardClient {
    pub fn new(config: &BackendArgs) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;
        let base_url = config.backend_url.trim_end_matches('/').to_owned();

        Ok(Self {
            client,
            base_url,
            session: config.session_cookie.clone(),
        })
    }

    fn url(&self, endpoint: Endpoint) -> String {
        format!(
            "{base_url}/{path}",
            base_url = self.base_url,
            path = endpoint.path()
        )
    }
}

impl TraceSource for DashboardClient {
    fn chart_traces(&self, endpoint: Endpoint, request: &ChartRequest) -> Result<Vec<Value>> {
        let url = self.url(endpoint);
        debug!("POST {url} {request:?}");

        let mut builder = self.client.post(url).json(request);

        if let Some(ref session) = self.session {
            builder = builder.header(COOKIE, format!("session={session}"));
        }

        let response = builder.send()?;
        let status_code = response.status();
        // Read the body first: a login redirect answers with an HTML page.
        let body = response.text()?;

        read_traces(status_code, body)
    }
}

fn read_traces(status_code: StatusCode, body: String) -> Result<Vec<Value>> {
    if !status_code.is_success() {
        return Err(FetchError::Response {
            status_code,
            message: body,
        });
    }

    let payload: TracesPayload = serde_json::from_str(&body)?;
    Ok(payload.traces)
}

#[derive(Debug, Deserialize)]
struct TracesPayload {
    traces: Vec<Value>,
}

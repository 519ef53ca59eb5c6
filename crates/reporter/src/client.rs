//! One-shot HTTP/1.1 score submission.
//!
//! `POST <endpoint>` with `{"username": ..., "score": ...}` as JSON. The reply
//! body is parsed leniently: a JSON object with a `message` string is picked
//! up, anything else is ignored.

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::client::conn::http1;
use hyper::header::{CONTENT_TYPE, HOST};
use hyper::{Method, Request, Uri};
use hyper_util::rt::TokioIo;
use log::debug;
use serde::{Deserialize, Serialize};
use tokio::net::TcpStream;

use crate::config::ReporterConfig;
use crate::error::ReportError;

/// Request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScorePayload {
    pub username: String,
    pub score: u32,
}

/// What the server said back.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ServerReply {
    #[serde(default)]
    pub message: Option<String>,
}

impl ServerReply {
    fn parse(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }
}

/// Parsed pieces of an `http://host[:port]/path` endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub host: String,
    pub port: u16,
    pub authority: String,
    pub path: String,
}

impl Endpoint {
    pub fn parse(url: &str) -> Result<Self, ReportError> {
        let uri: Uri = url.parse().map_err(|source| ReportError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;

        match uri.scheme_str() {
            Some("http") => {}
            _ => return Err(ReportError::UnsupportedScheme(url.to_string())),
        }

        let host = uri
            .host()
            .filter(|h| !h.is_empty())
            .ok_or_else(|| ReportError::MissingHost(url.to_string()))?;
        let authority = uri
            .authority()
            .map(|a| a.as_str().to_string())
            .unwrap_or_else(|| host.to_string());
        let path = uri
            .path_and_query()
            .map(|p| p.as_str().to_string())
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| "/".to_string());

        Ok(Self {
            // IPv6 literals come back bracketed.
            host: host.trim_start_matches('[').trim_end_matches(']').to_string(),
            port: uri.port_u16().unwrap_or(80),
            authority,
            path,
        })
    }
}

/// Submit one score, bounded by `config.timeout`.
pub async fn submit_score(
    config: &ReporterConfig,
    username: &str,
    score: u32,
) -> Result<ServerReply, ReportError> {
    let payload = ScorePayload {
        username: username.to_string(),
        score,
    };
    match tokio::time::timeout(config.timeout, post_json(&config.endpoint, &payload)).await {
        Ok(result) => result,
        Err(_) => Err(ReportError::Timeout(config.timeout)),
    }
}

async fn post_json(url: &str, payload: &ScorePayload) -> Result<ServerReply, ReportError> {
    let endpoint = Endpoint::parse(url)?;
    let body = serde_json::to_vec(payload)?;

    let stream = TcpStream::connect((endpoint.host.as_str(), endpoint.port))
        .await
        .map_err(|source| ReportError::Connect {
            addr: endpoint.authority.clone(),
            source,
        })?;

    let (mut sender, conn) = http1::handshake(TokioIo::new(stream)).await?;
    tokio::spawn(async move {
        if let Err(err) = conn.await {
            debug!("score connection closed with error: {err}");
        }
    });

    let req = Request::builder()
        .method(Method::POST)
        .uri(endpoint.path.as_str())
        .header(HOST, endpoint.authority.as_str())
        .header(CONTENT_TYPE, "application/json")
        .body(Full::new(Bytes::from(body)))?;

    let res = sender.send_request(req).await?;
    let status = res.status();
    let bytes = res.into_body().collect().await?.to_bytes();
    let reply = ServerReply::parse(&bytes);

    if !status.is_success() {
        return Err(ReportError::Status {
            status: status.as_u16(),
            message: reply.message,
        });
    }
    Ok(reply)
}

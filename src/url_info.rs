//! URL inspection tool: break a URL into its components and query pairs.

use serde::{Deserialize, Serialize};
use url::Url;

/// Components of a parsed URL. Absent parts are `None`; `query_pairs` keeps
/// decoded key/value pairs in document order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UrlParts {
    pub scheme: String,
    pub username: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub path: String,
    pub query: Option<String>,
    pub fragment: Option<String>,
    pub query_pairs: Vec<QueryPair>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct QueryPair {
    pub key: String,
    pub value: String,
}

/// Parses an absolute URL into display-ready parts.
pub fn parse_url(input: &str) -> Result<UrlParts, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("URL is empty".into());
    }
    let url = Url::parse(trimmed).map_err(|err| err.to_string())?;

    let username = (!url.username().is_empty()).then(|| url.username().to_string());
    let query_pairs = url
        .query_pairs()
        .map(|(key, value)| QueryPair {
            key: key.into_owned(),
            value: value.into_owned(),
        })
        .collect();

    Ok(UrlParts {
        scheme: url.scheme().to_string(),
        username,
        host: url.host_str().map(|host| host.to_string()),
        port: url.port(),
        path: url.path().to_string(),
        query: url.query().map(|query| query.to_string()),
        fragment: url.fragment().map(|fragment| fragment.to_string()),
        query_pairs,
    })
}

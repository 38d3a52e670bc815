//! Integration tests for the CGI transport against a mock HTTP server

use cgi_client::{CgiClient, CgiError};
use mockito::{Matcher, Server};
use url::Url;

fn endpoint(server: &Server, query: &str) -> Url {
    Url::parse(&format!("{}/cgi-bin/CGIProxy.fcgi?{}", server.url(), query)).unwrap()
}

#[test]
fn test_get_returns_body_verbatim() {
    let mut server = Server::new();
    let body = "<CGI_Result><result>0</result></CGI_Result>";

    let mock = server
        .mock("GET", "/cgi-bin/CGIProxy.fcgi")
        .match_query(Matcher::UrlEncoded("cmd".into(), "getDevState".into()))
        .with_status(200)
        .with_header("content-type", "text/plain")
        .with_body(body)
        .create();

    let client = CgiClient::new();
    let result = client.get(&endpoint(&server, "cmd=getDevState")).unwrap();

    assert_eq!(result.as_deref(), Some(body));
    mock.assert();
}

#[test]
fn test_get_empty_body_is_none() {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", "/cgi-bin/CGIProxy.fcgi")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("")
        .create();

    let client = CgiClient::new();
    let result = client.get(&endpoint(&server, "cmd=ptzStopRun")).unwrap();

    assert_eq!(result, None);
}

#[test]
fn test_get_http_error_status() {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", "/cgi-bin/CGIProxy.fcgi")
        .match_query(Matcher::Any)
        .with_status(404)
        .create();

    let client = CgiClient::new();
    match client.get(&endpoint(&server, "cmd=getDevInfo")) {
        Err(CgiError::Http(code)) => assert_eq!(code, 404),
        other => panic!("Expected CgiError::Http, got {:?}", other),
    }
}

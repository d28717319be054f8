// Integration tests for user info and repository listing

mod support;

use githubclient::GitHubError;
use reqwest::Method;
use serde_json::json;
use support::client_for;

#[test]
fn test_get_user_info_returns_body_unmodified() {
    let (client, transport) = client_for("me");
    let body = json!({
        "login": "octocat",
        "id": 583231,
        "name": "The Octocat",
        "company": null,
        "public_repos": 8,
        "plan": {"name": "free"}
    });
    transport.respond(200, &body.to_string());

    let info = client.get_user_info("octocat").unwrap();

    assert_eq!(info, body);
    let request = transport.last_request();
    assert_eq!(request.method, Method::GET);
    assert_eq!(request.path, "/users/octocat");
}

#[test]
fn test_user_lookups_are_unauthenticated() {
    let (client, transport) = client_for("me");
    transport.respond(200, r#"{"login":"octocat"}"#);
    transport.respond(200, "[]");

    client.get_user_info("octocat").unwrap();
    client.get_user_repos("octocat").unwrap();

    for request in &transport.requests()[1..] {
        assert!(!request.is_authorized(), "{} was authorized", request.path);
    }
}

#[test]
fn test_get_user_info_not_found() {
    let (client, transport) = client_for("me");
    transport.respond(404, r#"{"message":"Not Found"}"#);

    let error = client.get_user_info("no-such-user").unwrap_err();

    match error {
        GitHubError::UserNotFound(username) => assert_eq!(username, "no-such-user"),
        other => panic!("expected UserNotFound, got {other:?}"),
    }
}

#[test]
fn test_every_non_2xx_is_user_not_found() {
    for status in [301, 400, 403, 404, 422, 500, 503] {
        let (client, transport) = client_for("me");
        transport.respond(status, "");

        let error = client.get_user_info("ghost").unwrap_err();
        assert!(
            matches!(&error, GitHubError::UserNotFound(name) if name == "ghost"),
            "status {status} gave {error:?}"
        );
    }
}

#[test]
fn test_user_not_found_display() {
    let (client, transport) = client_for("me");
    transport.respond(404, r#"{"message":"Not Found"}"#);

    let error = client.get_user_info("ghost").unwrap_err();
    assert_eq!(error.to_string(), "User ghost not found");
}

#[test]
fn test_get_user_info_network_failure() {
    let (client, transport) = client_for("me");
    transport.fail("operation timed out");

    let error = client.get_user_info("octocat").unwrap_err();

    assert!(matches!(error, GitHubError::Network(_)));
    assert!(error.to_string().contains("operation timed out"));
}

#[test]
fn test_get_user_repos_preserves_order() {
    let (client, transport) = client_for("me");
    transport.respond(200, r#"[{"name":"a"},{"name":"b"}]"#);

    let names = client.get_user_repos("octocat").unwrap();

    assert_eq!(names, ["a", "b"]);
    assert_eq!(transport.last_request().path, "/users/octocat/repos");
}

#[test]
fn test_get_user_repos_reduces_full_records() {
    let (client, transport) = client_for("me");
    let body = json!([
        {"id": 3, "name": "zeta", "full_name": "octocat/zeta", "private": false},
        {"id": 1, "name": "alpha", "full_name": "octocat/alpha", "fork": true},
        {"id": 2, "name": "Hello-World", "full_name": "octocat/Hello-World"}
    ]);
    transport.respond(200, &body.to_string());

    let names = client.get_user_repos("octocat").unwrap();

    assert_eq!(names, ["zeta", "alpha", "Hello-World"]);
}

#[test]
fn test_get_user_repos_empty() {
    let (client, transport) = client_for("me");
    transport.respond(200, "[]");

    assert!(client.get_user_repos("newcomer").unwrap().is_empty());
}

#[test]
fn test_get_user_repos_not_found() {
    let (client, transport) = client_for("me");
    transport.respond(404, r#"{"message":"Not Found"}"#);

    let error = client.get_user_repos("ghost").unwrap_err();

    assert!(matches!(error, GitHubError::UserNotFound(name) if name == "ghost"));
}

#[test]
fn test_get_user_repos_malformed_body() {
    let (client, transport) = client_for("me");
    transport.respond(200, r#"{"message":"not a list"}"#);

    let error = client.get_user_repos("octocat").unwrap_err();

    assert!(matches!(error, GitHubError::UnexpectedResponse(_)));
}

#[test]
fn test_user_lookups_encode_login_as_one_segment() {
    let (client, transport) = client_for("me");
    transport.respond(200, r#"{"login":"x"}"#).respond(200, "[]");

    client.get_user_info("octocat/repos").unwrap();
    client.get_user_repos("a?b#c").unwrap();

    let requests = transport.requests();
    assert_eq!(requests[1].path, "/users/octocat%2Frepos");
    assert_eq!(requests[2].path, "/users/a%3Fb%23c/repos");
}

#[test]
fn test_dot_segment_login_makes_no_request() {
    let (client, transport) = client_for("me");

    let error = client.get_user_info("..").unwrap_err();
    assert!(matches!(error, GitHubError::UserNotFound(name) if name == ".."));

    let error = client.get_user_repos(".").unwrap_err();
    assert!(matches!(error, GitHubError::UserNotFound(name) if name == "."));

    assert_eq!(transport.request_count(), 1);
}

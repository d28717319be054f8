//! Common test support utilities and fixtures
//!
//! Provides a scripted in-memory transport so client behaviour can be tested
//! without a network, plus a one-shot local HTTP server for the real
//! `reqwest` transport.

#![allow(dead_code)]

use githubclient::github::{
    ApiClient, ApiRequest, ApiResponse, StaticCredentials, Transport, TransportError,
};
use reqwest::StatusCode;
use std::collections::VecDeque;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread;

pub const TEST_TOKEN: &str = "ghp_test_token_1234567890";

#[derive(Default)]
struct FakeState {
    responses: VecDeque<Result<ApiResponse, String>>,
    requests: Vec<ApiRequest>,
}

/// Transport that replays queued responses and records every request
///
/// Clones share state, so a test can keep one handle while the client owns
/// another.
#[derive(Clone, Default)]
pub struct FakeTransport {
    state: Arc<Mutex<FakeState>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response with the given status and body
    pub fn respond(&self, status: u16, body: &str) -> &Self {
        let status = StatusCode::from_u16(status).expect("valid status code");
        self.state
            .lock()
            .unwrap()
            .responses
            .push_back(Ok(ApiResponse::new(status, body)));
        self
    }

    /// Queue a transport-level failure
    pub fn fail(&self, message: &str) -> &Self {
        self.state
            .lock()
            .unwrap()
            .responses
            .push_back(Err(message.to_string()));
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn last_request(&self) -> ApiRequest {
        self.requests().pop().expect("at least one request")
    }

    pub fn request_count(&self) -> usize {
        self.state.lock().unwrap().requests.len()
    }
}

impl Transport for FakeTransport {
    fn execute(&self, request: &ApiRequest) -> Result<ApiResponse, TransportError> {
        let mut state = self.state.lock().unwrap();
        state.requests.push(request.clone());

        match state.responses.pop_front() {
            Some(Ok(response)) => Ok(response),
            Some(Err(message)) => Err(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                message,
            )
            .into()),
            None => panic!("unexpected request: {} {}", request.method, request.path),
        }
    }
}

/// Body of a successful `GET /user`
pub fn login_body(login: &str) -> String {
    format!(r#"{{"login":"{}","id":583231,"type":"User"}}"#, login)
}

/// A client authenticated as `login`, plus a handle on its transport
pub fn client_for(login: &str) -> (ApiClient<FakeTransport>, FakeTransport) {
    let transport = FakeTransport::new();
    transport.respond(200, &login_body(login));

    let client = ApiClient::with_transport(&StaticCredentials::new(TEST_TOKEN), transport.clone())
        .unwrap_or_else(|e| panic!("client construction failed: {e}"));
    (client, transport)
}

/// Request captured by [`serve_once`] or [`serve_sequence`]
pub struct CapturedRequest {
    pub head: String,
    pub body: String,
}

/// Serve exactly one canned HTTP response on an ephemeral local port
///
/// Returns the base URL and a receiver yielding the raw request.
pub fn serve_once(status_line: &str, body: &str) -> (String, mpsc::Receiver<CapturedRequest>) {
    serve_sequence(&[(status_line, body)])
}

/// Answer one connection per canned response, in order
pub fn serve_sequence(responses: &[(&str, &str)]) -> (String, mpsc::Receiver<CapturedRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let addr = listener.local_addr().expect("socket address");
    let responses: Vec<String> = responses
        .iter()
        .map(|(status_line, body)| {
            format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            )
        })
        .collect();
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        for response in responses {
            let (mut stream, _) = listener.accept().expect("accept connection");
            let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));

            let mut head = String::new();
            let mut content_length = 0usize;
            loop {
                let mut line = String::new();
                if reader.read_line(&mut line).unwrap_or(0) == 0 || line == "\r\n" {
                    break;
                }
                if let Some((name, value)) = line.split_once(':')
                    && name.eq_ignore_ascii_case("content-length")
                {
                    content_length = value.trim().parse().unwrap_or(0);
                }
                head.push_str(&line);
            }

            let mut body = vec![0u8; content_length];
            reader.read_exact(&mut body).ok();

            stream.write_all(response.as_bytes()).ok();
            stream.flush().ok();

            tx.send(CapturedRequest {
                head,
                body: String::from_utf8_lossy(&body).into_owned(),
            })
            .ok();
        }
    });

    (format!("http://{}", addr), rx)
}

/// Accept connections on an ephemeral port but never answer
pub fn serve_silence() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let addr = listener.local_addr().expect("socket address");

    thread::spawn(move || {
        let mut open = Vec::new();
        for stream in listener.incoming().flatten() {
            open.push(stream);
        }
    });

    format!("http://{}", addr)
}

/// A local address nothing listens on
pub fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let addr = listener.local_addr().expect("socket address");
    drop(listener);
    format!("http://{}", addr)
}

//! Test helpers: canned standings payloads and a one-shot local HTTP server that
//! stands in for the Codeforces API.
#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

/// Serves exactly one HTTP request with a fixed status and JSON body.
pub struct StubServer {
    pub base_url: String,
    handle: JoinHandle<String>,
}

impl StubServer {
    pub fn start(status_line: &'static str, body: impl Into<String>) -> Self {
        let body = body.into();
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut req = Vec::new();
            let mut buf = [0u8; 1024];
            while !req.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                req.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).unwrap();
            stream.flush().unwrap();
            let text = String::from_utf8_lossy(&req).into_owned();
            text.lines().next().unwrap_or_default().to_string()
        });
        Self {
            base_url: format!("http://{}/api", addr),
            handle,
        }
    }

    pub fn ok(body: impl Into<String>) -> Self {
        Self::start("200 OK", body)
    }

    /// Request line (`GET /api/... HTTP/1.1`) of the served request.
    pub fn request_line(self) -> String {
        self.handle.join().unwrap()
    }
}

/// Row JSON with the given rank, members and per-problem points.
pub fn row_json(rank: u32, handles: &[&str], points: &[f64]) -> String {
    let members: Vec<String> = handles
        .iter()
        .map(|h| format!(r#"{{"handle":"{}"}}"#, h))
        .collect();
    let results: Vec<String> = points
        .iter()
        .map(|p| format!(r#"{{"points":{:.1},"rejectedAttemptCount":0,"type":"FINAL"}}"#, p))
        .collect();
    format!(
        r#"{{"party":{{"contestId":1552,"members":[{}],"participantType":"CONTESTANT","ghost":false}},"rank":{},"points":0.0,"penalty":0,"problemResults":[{}]}}"#,
        members.join(","),
        rank,
        results.join(",")
    )
}

/// Full `contest.standings` OK envelope.
pub fn standings_json(problems: &[&str], rows: &[String]) -> String {
    let problems: Vec<String> = problems
        .iter()
        .map(|i| format!(r#"{{"contestId":1552,"index":"{}","name":"Problem {}","type":"PROGRAMMING"}}"#, i, i))
        .collect();
    format!(
        r#"{{"status":"OK","result":{{"contest":{{"id":1552,"name":"Codeforces Global Round 15","type":"CF","phase":"FINISHED"}},"problems":[{}],"rows":[{}]}}}}"#,
        problems.join(","),
        rows.join(",")
    )
}

/// Four rows whose solved counts are [3, 3, 0, 5]; rows 1 and 4 are from Belarus.
pub fn sample_standings() -> String {
    standings_json(
        &["A", "B", "C", "D", "E"],
        &[
            row_json(1, &["tourist"], &[500.0, 750.0, 1000.0, 0.0, 0.0]),
            row_json(2, &["Petr"], &[1.0, 1.0, 1.0, 0.0, 0.0]),
            row_json(3, &["jiangly"], &[0.0, 0.0, 0.0, 0.0, 0.0]),
            row_json(4, &["Um_nik"], &[1.0, 1.0, 1.0, 1.0, 1.0]),
        ],
    )
}

pub const SAMPLE_USERS: &str = r#"[
  {"handle":"tourist","country":"Belarus","rating":3800,"firstName":"Gennady"},
  {"handle":"Petr","country":"Russia","rating":3100},
  {"handle":"jiangly","country":"China","rating":3700},
  {"handle":"Um_nik","country":"  belarus ","rating":3300},
  {"handle":"ghost","rating":1500}
]"#;

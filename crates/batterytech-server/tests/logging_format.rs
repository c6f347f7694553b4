mod support;

use batterytech_server::ApiConfig;
use serde_json::Value;
use std::io;
use std::sync::{Arc, Mutex};
use support::{send_raw, spawn_server};
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

/// Collects everything the JSON formatter writes.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn lines(&self) -> Vec<Value> {
        let bytes = self.0.lock().expect("log buffer").clone();
        String::from_utf8(bytes)
            .expect("utf8 logs")
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| serde_json::from_str(line).expect("log line is json"))
            .collect()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log buffer poisoned"))?
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[tokio::test]
async fn served_request_is_logged_as_json_inside_its_span() {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .json()
        .with_writer(logs.clone())
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("install subscriber");

    let addr = spawn_server(ApiConfig::default()).await;
    let (status, _, _) = send_raw(
        addr,
        "GET",
        "/api/quiz/1",
        &[("X-Request-Id", "req-logging-check")],
    )
    .await;
    assert_eq!(status, 200);

    let lines = logs.lines();
    let completed = lines
        .iter()
        .find(|line| line["fields"]["message"] == "request completed")
        .expect("completion line logged");

    assert_eq!(completed["level"], "INFO");
    assert_eq!(completed["fields"]["status"].as_u64(), Some(200));
    assert!(completed["fields"]["latency_ms"].is_u64());

    let span = &completed["span"];
    assert_eq!(span["name"], "http.request");
    assert_eq!(span["request_id"], "req-logging-check");
    assert_eq!(span["method"], "GET");
    assert_eq!(span["route"], "/api/quiz/1");
}

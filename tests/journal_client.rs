use reqwest::{Client, StatusCode};
use std::{net::SocketAddr, sync::Arc};
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::{TcpListener, TcpStream},
    sync::Mutex,
};
use trade_journal::{
    api::journal_client::{ApiError, JournalClient},
    models::{
        auth::{LoginPayload, ResetPasswordPayload},
        trade::{TradeId, TradeStatus},
        trade_form::TradeForm,
    },
};

#[derive(Debug, Clone)]
struct RecordedRequest {
    method: String,
    path: String,
    authorization: Option<String>,
    body: String,
}

type Routes = Vec<(&'static str, &'static str, u16, &'static str)>;

/// Minimal HTTP/1.1 server answering canned JSON per method and path.
struct MockJournalServer {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockJournalServer {
    async fn start(routes: Routes) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let routes = Arc::new(routes);

        let recorded = Arc::clone(&requests);
        tokio::spawn(async move {
            loop {
                let Ok((stream, _)) = listener.accept().await else {
                    break;
                };
                let routes = Arc::clone(&routes);
                let recorded = Arc::clone(&recorded);
                tokio::spawn(async move {
                    handle_connection(stream, &routes, &recorded).await;
                });
            }
        });

        Self { addr, requests }
    }

    fn url(&self) -> String {
        format!("http://{}/api", self.addr)
    }

    async fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().await.clone()
    }
}

async fn handle_connection(
    mut stream: TcpStream,
    routes: &Routes,
    recorded: &Mutex<Vec<RecordedRequest>>,
) {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        let n = stream.read(&mut chunk).await.unwrap();
        if n == 0 {
            return;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let mut lines = head.lines();
    let mut request_line = lines.next().unwrap().split_whitespace();
    let method = request_line.next().unwrap().to_string();
    let path = request_line.next().unwrap().to_string();

    let mut content_length = 0;
    let mut authorization = None;
    for line in lines {
        if let Some((name, value)) = line.split_once(':') {
            match name.trim().to_lowercase().as_str() {
                "content-length" => content_length = value.trim().parse().unwrap(),
                "authorization" => authorization = Some(value.trim().to_string()),
                _ => {}
            }
        }
    }

    while buf.len() < header_end + content_length {
        let n = stream.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }
    let body = String::from_utf8_lossy(&buf[header_end..]).to_string();

    recorded.lock().await.push(RecordedRequest {
        method: method.clone(),
        path: path.clone(),
        authorization,
        body,
    });

    let (status, payload) = routes
        .iter()
        .find(|(m, p, _, _)| *m == method && *p == path)
        .map(|(_, _, status, payload)| (*status, *payload))
        .unwrap_or((404, r#"{"msg":"Not found"}"#));

    let response = format!(
        "HTTP/1.1 {} Mock\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        payload.len(),
        payload
    );
    stream.write_all(response.as_bytes()).await.unwrap();
    stream.shutdown().await.ok();
}

const TRADES: &str = r#"{"trades":[
    {"_id":"a1","pair":"EURUSD","type":"Long","lot_size":0.1,"entry_price":1.085,
     "stop_loss":1.08,"take_profit":1.09,"profit_loss":25.0,"emotion":"patient",
     "status":"Closed","trade_date":"2024-01-15T09:30:00.000Z"},
    {"_id":"a2","pair":"GBPUSD","type":"Short","lot_size":0.2,"entry_price":1.27,
     "status":"Open","trade_date":"2024-01-16T10:00:00.000Z"}
]}"#;

const STATS: &str = r#"{"totalTrades":2,"totalProfit":25.0,"winningTrades":1,
    "losingTrades":1,"winRate":50,"dailyPL":[{"_id":"2024-01-15","total":25.0}]}"#;

fn client(server: &MockJournalServer, token: Option<&str>) -> JournalClient {
    JournalClient::with_client(Client::new(), &server.url())
        .unwrap()
        .with_token(token)
}

#[tokio::test]
async fn test_fetch_dashboard_sends_token_and_parses_payloads() {
    let server = MockJournalServer::start(vec![
        ("GET", "/api/trades", 200, TRADES),
        ("GET", "/api/trades/stats", 200, STATS),
    ])
    .await;

    let (trades, stats) = client(&server, Some("secret-token"))
        .fetch_dashboard()
        .await
        .unwrap();

    assert_eq!(trades.len(), 2);
    assert_eq!(trades[0].id, Some(TradeId::from("a1")));
    assert_eq!(trades[1].status, TradeStatus::Open);
    assert_eq!(stats.win_rate, 50.0);
    assert_eq!(stats.daily_pl[0].date, "2024-01-15");

    let requests = server.requests().await;
    assert_eq!(requests.len(), 2);
    assert!(requests
        .iter()
        .all(|r| r.authorization.as_deref() == Some("Bearer secret-token")));
}

#[tokio::test]
async fn test_create_and_close_trade_bodies() {
    let server = MockJournalServer::start(vec![
        ("POST", "/api/trades", 201, r#"{"_id":"new"}"#),
        ("PUT", "/api/trades/a2", 200, r#"{"_id":"a2"}"#),
    ])
    .await;
    let client = client(&server, Some("t"));

    let form = TradeForm {
        entry_price: "1.0850".to_string(),
        stop_loss: "1.0800".to_string(),
        take_profit: "1.0900".to_string(),
        notes: "London open breakout".to_string(),
        ..TradeForm::default()
    };
    client.create_trade(&form.parse().unwrap()).await.unwrap();
    client.close_trade(&TradeId::from("a2"), 1.2650).await.unwrap();

    let requests = server.requests().await;
    assert_eq!(requests.len(), 2);

    let created: serde_json::Value = serde_json::from_str(&requests[0].body).unwrap();
    assert_eq!(requests[0].method, "POST");
    assert_eq!(created["pair"], "EURUSD");
    assert_eq!(created["type"], "Long");
    assert_eq!(created["emotion"], "patient");
    assert_eq!(created["risk_reward"], "1:1.0");
    assert_eq!(created["notes"], "London open breakout");

    let closed: serde_json::Value = serde_json::from_str(&requests[1].body).unwrap();
    assert_eq!(requests[1].method, "PUT");
    assert_eq!(requests[1].path, "/api/trades/a2");
    assert_eq!(closed, serde_json::json!({ "exit_price": 1.265, "status": "Closed" }));
}

#[tokio::test]
async fn test_login_returns_token_without_auth_header() {
    let server =
        MockJournalServer::start(vec![("POST", "/api/auth/login", 200, r#"{"token":"jwt"}"#)])
            .await;

    let payload = LoginPayload::new("trader@example.com", "hunter22").unwrap();
    let token = client(&server, None).login(&payload).await.unwrap();

    assert_eq!(token, "jwt");

    let requests = server.requests().await;
    assert_eq!(requests[0].authorization, None);
    let body: serde_json::Value = serde_json::from_str(&requests[0].body).unwrap();
    assert_eq!(body["email"], "trader@example.com");
}

#[tokio::test]
async fn test_api_error_carries_server_message() {
    let server = MockJournalServer::start(vec![(
        "POST",
        "/api/auth/reset-password",
        400,
        r#"{"msg":"Invalid or expired code"}"#,
    )])
    .await;

    let payload = ResetPasswordPayload::new("a@b.c", "123456", "secret1", "secret1").unwrap();
    let err = client(&server, None)
        .reset_password(&payload)
        .await
        .unwrap_err();

    let api_error = err.downcast_ref::<ApiError>().unwrap();
    assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
    assert_eq!(api_error.message, "Invalid or expired code");
    assert!(!api_error.is_unauthorized());
}

#[tokio::test]
async fn test_expired_session_is_unauthorized() {
    let server =
        MockJournalServer::start(vec![("GET", "/api/trades", 401, r#"{"msg":"Token is not valid"}"#)])
            .await;

    let err = client(&server, Some("stale")).get_trades().await.unwrap_err();

    assert!(err.downcast_ref::<ApiError>().unwrap().is_unauthorized());
}

#[tokio::test]
async fn test_close_trade_escapes_reserved_characters_in_id() {
    let server = MockJournalServer::start(vec![(
        "PUT",
        "/api/trades/x%2F..%2Fstats%3Fall",
        200,
        r#"{"msg":"Trade closed"}"#,
    )])
    .await;

    client(&server, Some("secret-token"))
        .close_trade(&TradeId::from("x/../stats?all"), 1.1)
        .await
        .unwrap();

    let requests = server.requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "PUT");
    assert_eq!(requests[0].path, "/api/trades/x%2F..%2Fstats%3Fall");
}

use std::net::TcpListener;
use std::sync::{Arc, Mutex};

use actix_web::http::StatusCode;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use serde_json::json;

struct MockState {
    status: StatusCode,
    body: serde_json::Value,
    requests: Arc<Mutex<Vec<String>>>,
}

/// In-process stand-in for the odds provider
pub struct OddsMock {
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl OddsMock {
    /// Query strings of every request received so far
    pub fn received_queries(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

async fn odds(req: HttpRequest, state: web::Data<MockState>) -> HttpResponse {
    state.requests.lock().unwrap().push(req.query_string().to_string());
    HttpResponse::build(state.status)
        .insert_header(("x-requests-remaining", "499"))
        .insert_header(("x-requests-used", "1"))
        .json(&state.body)
}

pub fn spawn_odds_mock(status: u16, body: serde_json::Value) -> OddsMock {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let requests = Arc::new(Mutex::new(Vec::new()));

    let state = web::Data::new(MockState {
        status: StatusCode::from_u16(status).expect("Invalid mock status"),
        body,
        requests: requests.clone(),
    });

    let server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .route("/sports/{sport}/odds/", web::get().to(odds))
    })
    .workers(1)
    .listen(listener)
    .expect("Failed to bind odds mock")
    .run();
    let _ = tokio::spawn(server);

    OddsMock {
        base_url: format!("http://127.0.0.1:{}", port),
        requests,
    }
}

pub fn sample_matchups() -> serde_json::Value {
    json!([
        {
            "id": "e912304de2b2ce35b473ce2ecd3d1502",
            "sport_key": "americanfootball_nfl",
            "sport_title": "NFL",
            "commence_time": "2024-09-06T00:20:00Z",
            "home_team": "Kansas City Chiefs",
            "away_team": "Baltimore Ravens",
            "bookmakers": [
                {
                    "key": "draftkings",
                    "title": "DraftKings",
                    "last_update": "2024-09-05T12:00:00Z",
                    "markets": [
                        {
                            "key": "h2h",
                            "last_update": "2024-09-05T12:00:00Z",
                            "outcomes": [
                                { "name": "Baltimore Ravens", "price": 2.3 },
                                { "name": "Kansas City Chiefs", "price": 1.65 }
                            ]
                        }
                    ]
                }
            ]
        },
        {
            "id": "a4c1f0b5a1d8a0e3c0b1a2d3e4f5a6b7",
            "sport_key": "americanfootball_nfl",
            "sport_title": "NFL",
            "commence_time": "2024-09-08T17:00:00Z",
            "home_team": "Philadelphia Eagles",
            "away_team": "Green Bay Packers",
            "bookmakers": []
        }
    ])
}

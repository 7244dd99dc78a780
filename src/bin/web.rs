//! Single binary web server: tournament API via REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default.
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080).

use actix_web::{
    delete, get, post,
    web::{Data, Json},
    App, HttpResponse, HttpServer, Responder,
};
use serde::Deserialize;
use std::sync::RwLock;
use swiss_tournament_web::{
    compute_standings, generate_pairings, MemoryRepository, PlayerId, Repository,
    TournamentError,
};

/// In-memory state: one tournament's repository, serialized behind a lock so
/// each request sees a consistent snapshot of players and matches.
type AppState = Data<RwLock<MemoryRepository>>;

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct RegisterPlayerBody {
    name: String,
}

#[derive(Deserialize)]
struct ReportMatchBody {
    winner_id: PlayerId,
    loser_id: PlayerId,
}

fn error_response(e: &TournamentError) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "swiss-tournament-web",
    })
}

/// Register a player (repository assigns the id, returned to the client).
#[post("/api/players")]
async fn api_register_player(state: AppState, body: Json<RegisterPlayerBody>) -> HttpResponse {
    let mut repo = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match repo.add_player(&body.name) {
        Ok(id) => {
            HttpResponse::Ok().json(serde_json::json!({ "id": id, "name": body.name.clone() }))
        }
        Err(e) => error_response(&e),
    }
}

/// Number of registered players.
#[get("/api/players/count")]
async fn api_count_players(state: AppState) -> HttpResponse {
    let repo = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match repo.count_players() {
        Ok(count) => HttpResponse::Ok().json(serde_json::json!({ "count": count })),
        Err(e) => error_response(&e),
    }
}

/// Remove all player records.
#[delete("/api/players")]
async fn api_clear_players(state: AppState) -> HttpResponse {
    let mut repo = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match repo.clear_players() {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => error_response(&e),
    }
}

/// Record one match outcome (winner and loser by id).
#[post("/api/matches")]
async fn api_report_match(state: AppState, body: Json<ReportMatchBody>) -> HttpResponse {
    let mut repo = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match repo.add_match(body.winner_id, body.loser_id) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => error_response(&e),
    }
}

/// Remove all match records.
#[delete("/api/matches")]
async fn api_clear_matches(state: AppState) -> HttpResponse {
    let mut repo = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match repo.clear_matches() {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => error_response(&e),
    }
}

/// Current standings, sorted descending by wins.
#[get("/api/standings")]
async fn api_standings(state: AppState) -> HttpResponse {
    let repo = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match compute_standings(&*repo) {
        Ok(standings) => HttpResponse::Ok().json(standings),
        Err(e) => error_response(&e),
    }
}

/// Adjacent-ranked pairings for the next round (400 with fewer than 2 players).
#[get("/api/pairings")]
async fn api_pairings(state: AppState) -> HttpResponse {
    let repo = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match generate_pairings(&*repo) {
        Ok(pairings) => HttpResponse::Ok().json(pairings),
        Err(e) => error_response(&e),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(RwLock::new(MemoryRepository::new()));

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(api_health)
            .service(api_register_player)
            .service(api_count_players)
            .service(api_clear_players)
            .service(api_report_match)
            .service(api_clear_matches)
            .service(api_standings)
            .service(api_pairings)
    })
    .bind(bind)?
    .run()
    .await
}

//! Single binary web server: HTML from templates/, static from /static, API via REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default.
//! Override with env: HOST, PORT, TOURNAMENT_DB (path of the SQLite file).

use actix_files::Files;
use actix_web::{
    delete, get, post,
    web::{self, Data, Json},
    App, HttpResponse, HttpServer, Responder,
};
use serde::{Deserialize, Serialize};
use swiss_tournament_web::{PlayerId, SqliteStore, Tournament, TournamentError};

/// The tournament is stateless apart from its store; every request reads a fresh snapshot.
type AppState = Data<Tournament<SqliteStore>>;

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Serialize)]
struct CountResponse {
    count: usize,
}

#[derive(Serialize)]
struct ClearedResponse {
    ok: bool,
}

#[derive(Deserialize)]
struct RegisterPlayerBody {
    name: String,
}

#[derive(Deserialize)]
struct ReportMatchBody {
    winner: PlayerId,
    loser: PlayerId,
}

/// Run a tournament operation on the blocking pool and render its result.
/// Bad input maps to 400, store failures to 500.
async fn run<T, F>(state: &AppState, op: F) -> HttpResponse
where
    F: FnOnce(&Tournament<SqliteStore>) -> Result<T, TournamentError> + Send + 'static,
    T: Serialize + Send + 'static,
{
    let state = state.clone();
    match web::block(move || op(&state)).await {
        Ok(Ok(value)) => HttpResponse::Ok().json(value),
        Ok(Err(e)) if e.is_client_error() => {
            HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
        }
        Ok(Err(e)) => {
            log::error!("Tournament store failure: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({ "error": e.to_string() }))
        }
        Err(e) => {
            log::error!("Blocking task failed: {}", e);
            HttpResponse::InternalServerError().body("blocking task error")
        }
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "swiss-tournament-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// All registered players in registration order.
#[get("/api/players")]
async fn api_list_players(state: AppState) -> HttpResponse {
    run(&state, |t| t.players()).await
}

#[get("/api/players/count")]
async fn api_count_players(state: AppState) -> HttpResponse {
    run(&state, |t| t.count_players().map(|count| CountResponse { count })).await
}

/// Register a player (returns it with its assigned id).
#[post("/api/players")]
async fn api_register_player(state: AppState, body: Json<RegisterPlayerBody>) -> HttpResponse {
    let name = body.into_inner().name;
    run(&state, move |t| t.register_player(name)).await
}

/// Remove every player and every match.
#[delete("/api/players")]
async fn api_delete_players(state: AppState) -> HttpResponse {
    run(&state, |t| t.delete_players().map(|()| ClearedResponse { ok: true })).await
}

/// Record a match outcome.
#[post("/api/matches")]
async fn api_report_match(state: AppState, body: Json<ReportMatchBody>) -> HttpResponse {
    let ReportMatchBody { winner, loser } = body.into_inner();
    run(&state, move |t| t.report_match(winner, loser)).await
}

/// Remove every match, keeping players registered.
#[delete("/api/matches")]
async fn api_delete_matches(state: AppState) -> HttpResponse {
    run(&state, |t| t.delete_matches().map(|()| ClearedResponse { ok: true })).await
}

#[get("/api/standings")]
async fn api_standings(state: AppState) -> HttpResponse {
    run(&state, |t| t.player_standings()).await
}

/// Next-round pairings (400 if the player count is odd).
#[get("/api/pairings")]
async fn api_pairings(state: AppState) -> HttpResponse {
    run(&state, |t| t.swiss_pairings()).await
}

/// Settings read from the environment at startup.
#[derive(Debug)]
struct ServerConfig {
    host: String,
    port: u16,
    db_path: String,
}

impl ServerConfig {
    fn from_env() -> Self {
        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| default_host()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or_else(default_port),
            db_path: std::env::var("TOURNAMENT_DB").unwrap_or_else(|_| default_db_path()),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_db_path() -> String {
    "tournament.db".to_string()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::from_env();
    log::debug!("{:?}", config);

    let store = SqliteStore::open(&config.db_path).map_err(std::io::Error::other)?;
    let state = Data::new(Tournament::new(store));

    let bind = (config.host.as_str(), config.port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .route("/", web::get().to(serve_index_async))
            .service(api_health)
            .service(favicon)
            .service(api_count_players)
            .service(api_list_players)
            .service(api_register_player)
            .service(api_delete_players)
            .service(api_report_match)
            .service(api_delete_matches)
            .service(api_standings)
            .service(api_pairings)
            .service(Files::new("/static", "static"))
    })
    .bind(bind)?
    .run()
    .await
}

async fn serve_index_async() -> HttpResponse {
    let html = include_str!("../../templates/index.html");
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}

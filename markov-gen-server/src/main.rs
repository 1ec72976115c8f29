use std::path::PathBuf;
use std::sync::Mutex;

use actix_web::{get, put, web, App, HttpResponse, HttpServer, Responder};
use clap::Parser;
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use markov_gen_core::io::{corpus_path, list_corpora, read_corpus};
use markov_gen_core::{GeneratorConfig, MarkovError, MarkovModel};

/// Command-line options for the server.
#[derive(Parser, Debug)]
#[command(name = "markov-gen-server")]
struct Cli {
	/// Directory holding `*.txt` corpora
	#[arg(long, default_value = "./data")]
	data_dir: PathBuf,

	/// Port to listen on (127.0.0.1)
	#[arg(long, default_value_t = 5000)]
	port: u16,

	/// Path to a TOML config file
	#[arg(long)]
	config: Option<PathBuf>,
}

/// Query parameters for the `/v1/generate` endpoint
#[derive(Deserialize)]
struct GenerateParams {
	k: usize,
	n: Option<usize>,
}

#[derive(Deserialize)]
struct CorpusQuery {
	name: Option<String>,
}

struct SharedData {
	model: MarkovModel,
	corpus_name: Option<String>,
	data_dir: PathBuf,
}

fn error_response(e: MarkovError) -> HttpResponse {
	match e {
		MarkovError::InvalidOrder { .. } | MarkovError::Command(_) => HttpResponse::BadRequest().body(e.to_string()),
		MarkovError::EmptyCorpus => HttpResponse::Conflict().body(e.to_string()),
		MarkovError::Config(_) | MarkovError::Io(_) => HttpResponse::InternalServerError().body(e.to_string()),
	}
}

/// HTTP GET endpoint `/v1/generate`
///
/// Generates at most `n` characters with an order-`k` process over the
/// loaded corpus. The graph is rebuilt when `k` differs from the last request.
#[get("/v1/generate")]
async fn get_generated(data: web::Data<Mutex<SharedData>>, query: web::Query<GenerateParams>) -> impl Responder {
	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Model lock failed"),
	};

	let n = query.n.unwrap_or(shared_data.model.config().default_length);
	match shared_data.model.process(&format!("{} {}", query.k, n)) {
		Ok(result) => HttpResponse::Ok().body(result),
		Err(e) => error_response(e),
	}
}

#[get("/v1/corpora")]
async fn get_corpora(data: web::Data<Mutex<SharedData>>) -> impl Responder {
	let data_dir = match data.lock() {
		Ok(m) => m.data_dir.clone(),
		Err(_) => return HttpResponse::InternalServerError().body("Model lock failed"),
	};
	match list_corpora(&data_dir) {
		Ok(names) => HttpResponse::Ok().body(names.join("\n")),
		Err(_) => HttpResponse::InternalServerError().body("Failed to list corpora"),
	}
}

#[get("/v1/loaded_corpus")]
async fn get_loaded_corpus(data: web::Data<Mutex<SharedData>>) -> impl Responder {
	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Model lock failed"),
	};
	match (&shared_data.corpus_name, shared_data.model.corpus()) {
		(Some(name), Some(corpus)) => HttpResponse::Ok().body(format!("{name} ({} chars)", corpus.len())),
		_ => HttpResponse::Ok().body(""),
	}
}

#[put("/v1/load_corpus")]
async fn put_corpus(data: web::Data<Mutex<SharedData>>, query: web::Query<CorpusQuery>) -> impl Responder {
	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Model lock failed"),
	};

	let name = match &query.name {
		Some(s) if !s.trim().is_empty() => s.trim(),
		_ => return HttpResponse::BadRequest().body("Missing or empty corpus name"),
	};
	let path = match corpus_path(&shared_data.data_dir, name) {
		Ok(p) => p,
		Err(e) => return HttpResponse::BadRequest().body(e.to_string()),
	};
	let corpus = match read_corpus(&path) {
		Ok(c) => c,
		Err(e) => return HttpResponse::InternalServerError().body(format!("Failed to load corpus: {e}")),
	};

	// Fresh model: the random source restarts from the configured seed
	let mut model = MarkovModel::new(shared_data.model.config().clone());
	model.set_corpus(corpus);
	shared_data.model = model;
	shared_data.corpus_name = Some(name.to_owned());

	tracing::info!(corpus = name, "corpus loaded");
	HttpResponse::Ok().body("Corpus loaded successfully")
}

/// Main entry point for the server.
///
/// Starts with no corpus loaded; `PUT /v1/load_corpus` selects one from the
/// data directory. The model sits behind a `Mutex`, so requests are served
/// one at a time.
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
		.init();

	let cli = Cli::parse();
	let config = match &cli.config {
		Some(path) => GeneratorConfig::from_file(path)?,
		None => GeneratorConfig::default(),
	};

	let shared_data = SharedData {
		model: MarkovModel::new(config),
		corpus_name: None,
		data_dir: cli.data_dir,
	};
	let shared_model = web::Data::new(Mutex::new(shared_data));

	tracing::info!(port = cli.port, "listening on 127.0.0.1");
	HttpServer::new(move || {
		App::new()
			.app_data(shared_model.clone())
			.service(get_generated)
			.service(get_corpora)
			.service(put_corpus)
			.service(get_loaded_corpus)
	})
		.bind(("127.0.0.1", cli.port))?
		.run()
		.await?;

	Ok(())
}

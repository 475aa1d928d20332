// src/bin/seed.rs
// Loads team members and cards from a JSON manifest through the admin API.
//
// Manifest format (SEED_FILE, default seed.json; photo paths are relative to the manifest):
// {
//   "teams": [{"name": "Ada", "role": "Engineer", "photo": "img/ada.png"}],
//   "cards": [{"title": "Support", "description": "Around the clock", "photo": "img/support.png"}]
// }

use anyhow::{bail, Context, Result};
use dotenv::dotenv;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

#[derive(Debug, Deserialize)]
struct SeedManifest {
    #[serde(default)]
    teams: Vec<TeamSeed>,
    #[serde(default)]
    cards: Vec<CardSeed>,
}

#[derive(Debug, Deserialize)]
struct TeamSeed {
    name: String,
    role: String,
    photo: PathBuf,
}

#[derive(Debug, Deserialize)]
struct CardSeed {
    title: String,
    description: String,
    photo: PathBuf,
}

#[derive(Debug, Deserialize)]
struct CreatedResponse {
    id: i64,
}

#[derive(Debug)]
struct SeedResult {
    collection: &'static str,
    label: String,
    id: Option<i64>,
    error: Option<String>,
}

struct Seeder {
    base_url: String,
    base_dir: PathBuf,
    client: Client,
    results: Vec<SeedResult>,
}

impl Seeder {
    fn new(base_url: String, base_dir: PathBuf) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            base_url,
            base_dir,
            client,
            results: Vec::new(),
        })
    }

    async fn check_service_health(&self) -> bool {
        match self.client.get(format!("{}/health", self.base_url)).send().await {
            Ok(resp) => resp.status().is_success(),
            Err(_) => false,
        }
    }

    async fn photo_part(&self, photo: &Path) -> Result<Part> {
        let path = self.base_dir.join(photo);
        let bytes = tokio::fs::read(&path)
            .await
            .with_context(|| format!("Cannot read photo {}", path.display()))?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        Ok(Part::bytes(bytes).file_name(file_name))
    }

    async fn post_form(&self, collection: &str, form: Form) -> Result<i64> {
        let response = self
            .client
            .post(format!("{}/admin/{}", self.base_url, collection))
            .multipart(form)
            .send()
            .await?;

        if response.status().is_success() {
            Ok(response.json::<CreatedResponse>().await?.id)
        } else {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            bail!("HTTP {} - {}", status, body)
        }
    }

    async fn seed_team_member(&self, member: &TeamSeed) -> Result<i64> {
        let form = Form::new()
            .text("name", member.name.clone())
            .text("role", member.role.clone())
            .part("photo", self.photo_part(&member.photo).await?);
        self.post_form("teams", form).await
    }

    async fn seed_card(&self, card: &CardSeed) -> Result<i64> {
        let form = Form::new()
            .text("title", card.title.clone())
            .text("description", card.description.clone())
            .part("photo", self.photo_part(&card.photo).await?);
        self.post_form("cards", form).await
    }

    fn record(&mut self, collection: &'static str, label: String, outcome: Result<i64>) {
        match outcome {
            Ok(id) => {
                println!("{}✅ {} '{}' created with id {}{}", GREEN, collection, label, id, RESET);
                self.results.push(SeedResult {
                    collection,
                    label,
                    id: Some(id),
                    error: None,
                });
            }
            Err(e) => {
                println!("{}❌ {} '{}': {:#}{}", RED, collection, label, e, RESET);
                self.results.push(SeedResult {
                    collection,
                    label,
                    id: None,
                    error: Some(format!("{:#}", e)),
                });
            }
        }
    }

    async fn run(&mut self, manifest: &SeedManifest) -> Result<()> {
        println!("\n{}🔍 Checking service status...{}", CYAN, RESET);
        if !self.check_service_health().await {
            bail!(
                "Service unavailable at {} (is the server running?)",
                self.base_url
            );
        }
        println!("{}✅ Service available{}\n", GREEN, RESET);

        let started = Instant::now();
        println!(
            "{}🚀 Seeding {} team members and {} cards...{}\n",
            BOLD,
            manifest.teams.len(),
            manifest.cards.len(),
            RESET
        );

        for member in &manifest.teams {
            let outcome = self.seed_team_member(member).await;
            self.record("team", member.name.clone(), outcome);
        }
        for card in &manifest.cards {
            let outcome = self.seed_card(card).await;
            self.record("card", card.title.clone(), outcome);
        }

        self.print_summary(started.elapsed());
        Ok(())
    }

    fn print_summary(&self, elapsed: Duration) {
        println!("\n{}📋 Seed Summary{}", BOLD, RESET);
        println!("──────────────────────────────────────────────────────────────");
        println!("{:<8} {:<32} {:>8}  {}", "Table", "Record", "Id", "Status");
        println!("──────────────────────────────────────────────────────────────");

        for res in &self.results {
            let id = res.id.map(|id| id.to_string()).unwrap_or_else(|| "-".to_string());
            let status = match &res.error {
                None => "✅".to_string(),
                Some(e) => format!("❌ {}", e),
            };
            println!("{:<8} {:<32} {:>8}  {}", res.collection, res.label, id, status);
        }

        let failed = self.results.iter().filter(|r| r.error.is_some()).count();
        println!("──────────────────────────────────────────────────────────────");
        println!(
            "  • Created: {}{}{}",
            GREEN,
            self.results.len() - failed,
            RESET
        );
        if failed > 0 {
            println!("  • Failed: {}{}{}", YELLOW, failed, RESET);
        }
        println!("  • Duration: {:.1}s", elapsed.as_secs_f64());
    }
}

fn load_manifest(path: &Path) -> Result<SeedManifest> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read seed file {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Invalid seed file {}", path.display()))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let seed_file = PathBuf::from(env::var("SEED_FILE").unwrap_or_else(|_| "seed.json".to_string()));
    let base_url =
        env::var("SHOWCASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());

    let manifest = load_manifest(&seed_file)?;
    let base_dir = seed_file
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default();

    let mut seeder = Seeder::new(base_url.trim_end_matches('/').to_string(), base_dir)?;
    seeder.run(&manifest).await
}

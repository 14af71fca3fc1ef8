// src/bin/smoke.rs
// DOCUMENTATION: Smoke check for a running backend
// PURPOSE: Hit every public endpoint once and print a status table

use anyhow::{bail, Context, Result};
use dotenv::dotenv;
use reqwest::{Client, Method};
use serde_json::Value;
use std::env;
use std::time::{Duration, Instant};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

// Chennai Central → Egmore, the pair the frontend uses for manual checks
const CHECKS: &[Check] = &[
    Check { name: "Health", method: Method::GET, path: "/health" },
    Check { name: "Frontend ping", method: Method::POST, path: "/api/route/get" },
    Check { name: "SerpAPI connection", method: Method::GET, path: "/api/test-serp" },
    Check { name: "Geocoding", method: Method::GET, path: "/api/geocode?q=Chennai%20Central" },
    Check {
        name: "Driving route",
        method: Method::GET,
        path: "/api/route/directions?start_lat=13.0827&start_lon=80.2707&end_lat=13.0604&end_lon=80.2496",
    },
    Check { name: "Attractions", method: Method::GET, path: "/api/attractions?lat=13.0827&lon=80.2707" },
];

struct Check {
    name: &'static str,
    method: Method,
    path: &'static str,
}

struct CheckResult {
    name: &'static str,
    success: bool,
    detail: String,
    duration_secs: f64,
}

struct SmokeRunner {
    base_url: String,
    client: Client,
    results: Vec<CheckResult>,
}

impl SmokeRunner {
    fn new(base_url: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            results: Vec::new(),
        })
    }

    async fn run_check(&self, check: &Check) -> Result<String> {
        let url = format!("{}{}", self.base_url, check.path);
        let response = self
            .client
            .request(check.method.clone(), &url)
            .send()
            .await
            .with_context(|| format!("{} {} unreachable", check.method, url))?;

        let status = response.status();
        let body: Value = response.json().await.unwrap_or(Value::Null);

        if !status.is_success() {
            let message = body["error"]["message"]
                .as_str()
                .or_else(|| body["message"].as_str())
                .unwrap_or("no message");
            bail!("HTTP {} - {}", status, message);
        }

        Ok(summarize(&body))
    }

    async fn run_all(&mut self) -> Result<()> {
        println!("\n{}🔍 Checking {}...{}\n", CYAN, self.base_url, RESET);

        for (i, check) in CHECKS.iter().enumerate() {
            println!("{}[{}/{}] {}...{}", CYAN, i + 1, CHECKS.len(), check.name, RESET);

            let start_time = Instant::now();
            let outcome = self.run_check(check).await;
            let duration_secs = start_time.elapsed().as_secs_f64();

            let (success, detail) = match outcome {
                Ok(detail) => {
                    println!("{}✅ {} ({:.1}s){}", GREEN, detail, duration_secs, RESET);
                    (true, detail)
                }
                Err(err) => {
                    println!("{}❌ {:#}{}", RED, err, RESET);
                    (false, format!("{:#}", err))
                }
            };

            self.results.push(CheckResult {
                name: check.name,
                success,
                detail,
                duration_secs,
            });
        }

        self.print_summary();

        let failed = self.results.iter().filter(|r| !r.success).count();
        if failed > 0 {
            bail!("{} of {} checks failed", failed, self.results.len());
        }
        Ok(())
    }

    fn print_summary(&self) {
        println!("\n{}📋 Summary{}", BOLD, RESET);
        println!("──────────────────────────────────────────────────────────────────────────────");
        println!("{:<22} {:<8} {:>9}  {}", "Check", "Status", "Duration", "Detail");
        println!("──────────────────────────────────────────────────────────────────────────────");

        for res in &self.results {
            let status_icon = if res.success { "✅" } else { "❌" };
            println!(
                "{:<22} {:<8} {:>8.1}s  {}",
                res.name, status_icon, res.duration_secs, res.detail
            );
        }

        println!("──────────────────────────────────────────────────────────────────────────────");
    }
}

/// One-line description of a successful response body
fn summarize(body: &Value) -> String {
    if let Some(count) = body["count"].as_u64() {
        return format!("{} results", count);
    }
    if let Some(distance) = body["route"]["distance_m"].as_f64() {
        return format!("{:.1} km", distance / 1000.0);
    }
    body["message"]
        .as_str()
        .or_else(|| body["status"].as_str())
        .unwrap_or("ok")
        .to_string()
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let base_url = env::var("BACKEND_URL").unwrap_or_else(|_| "http://localhost:5000".to_string());

    if env::var("SERPAPI_KEY").is_err() {
        println!(
            "{}⚠️  SERPAPI_KEY not found in .env. Attraction checks will fail if the server lacks it too.{}",
            YELLOW, RESET
        );
    }

    let mut runner = SmokeRunner::new(base_url)?;
    runner.run_all().await
}

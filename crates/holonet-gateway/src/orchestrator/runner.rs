use std::fmt::Write as _;
use std::io::{self, Write as _};
use std::sync::Arc;

use serde_json::Value;

use holonet_core::error::{HolonetError, Result};
use holonet_core::render::{self, field::display_field, DetailTitle, RenderOptions};

use crate::fetch::{FetchClient, FetchContext};

/// Starships shown from the first page.
pub const STARSHIP_PREVIEW: usize = 3;
/// Vehicles are featured while the current identifier is at most this.
pub const VEHICLE_LIMIT: u64 = 4;

const STARSHIPS_PATH: &str = "starships/?page=1";
const PLANETS_PATH: &str = "planets/?page=1";
const FILMS_PATH: &str = "films/";

/// Outcome of one run. `output` keeps everything rendered before a failure.
#[derive(Debug, Default)]
pub struct RunReport {
    pub output: String,
    pub error: Option<HolonetError>,
    /// Identifier of the vehicle featured by this run, if any.
    pub vehicle: Option<u64>,
}

impl RunReport {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    pub fn write_to<W: io::Write>(&self, w: &mut W) -> io::Result<()> {
        w.write_all(self.output.as_bytes())?;
        w.flush()
    }

    /// Print the output to stdout in one piece, and the error, if any, to stderr.
    pub fn emit(&self) {
        if let Err(e) = self.write_to(&mut io::stdout().lock()) {
            tracing::warn!(error = %e, "failed to write run output");
        }
        if let Some(err) = &self.error {
            let _ = writeln!(io::stderr().lock(), "Error: {err}");
        }
    }
}

pub struct Orchestrator {
    client: FetchClient,
    ctx: Arc<FetchContext>,
    render: RenderOptions,
}

impl Orchestrator {
    pub fn new(client: FetchClient, ctx: Arc<FetchContext>, render: RenderOptions) -> Self {
        Self { client, ctx, render }
    }

    pub fn context(&self) -> &FetchContext {
        &self.ctx
    }

    /// Run the full sequence once. Never fails: the first error aborts the
    /// remaining steps, is counted once more, and is returned in the report.
    pub async fn run(&self) -> RunReport {
        let mut report = RunReport::default();
        if self.ctx.debug {
            tracing::info!(id = self.ctx.metrics.last_id(), "starting data fetch");
        }
        self.ctx.metrics.requests.inc();

        if let Err(e) = self.run_steps(&mut report).await {
            self.ctx.metrics.errors.inc();
            tracing::error!(
                kind = e.kind().as_str(),
                fetch_failure = e.is_fetch_failure(),
                error = %e,
                "run aborted"
            );
            report.error = Some(e);
        }
        report
    }

    async fn run_steps(&self, report: &mut RunReport) -> Result<()> {
        let out = &mut report.output;

        // 1) character
        let id = self.ctx.metrics.last_id();
        let person = self.fetch_counted(&format!("people/{id}")).await?;
        render::render_character(out, &person);

        // 2) starships
        let ships = self.fetch_counted(STARSHIPS_PATH).await?;
        let _ = writeln!(out, "\nTotal Starships: {}", display_field(&ships, "count"));
        let preview = results(&ships, STARSHIPS_PATH)?.iter().take(STARSHIP_PREVIEW);
        for (index, ship) in preview.enumerate() {
            let title = DetailTitle::Indexed { kind: "Starship", index };
            render::render_detail(out, ship, title, self.render);
        }

        // 3) planets
        let planets = self.fetch_counted(PLANETS_PATH).await?;
        let _ = writeln!(out, "\nLarge populated planets:");
        for planet in results(&planets, PLANETS_PATH)? {
            render::render_planet(out, planet);
        }

        // 4) films
        let films = self.fetch_counted(FILMS_PATH).await?;
        let mut ordered = results(&films, FILMS_PATH)?.to_vec();
        render::sort_chronologically(&mut ordered);
        let _ = writeln!(out, "\nStar Wars Films in chronological order:");
        render::render_films(out, &ordered);

        // 5) featured vehicle, cycling through the first few identifiers
        let id = self.ctx.metrics.last_id();
        if id <= VEHICLE_LIMIT {
            let vehicle = self.fetch_counted(&format!("vehicles/{id}")).await?;
            render::render_detail(out, &vehicle, DetailTitle::Featured("Vehicle"), self.render);
            report.vehicle = Some(id);
            self.ctx.metrics.advance_last_id();
        }

        // 6) stats
        if self.ctx.debug {
            self.ctx.metrics.render(self.ctx.cache.size(), out);
        }
        Ok(())
    }

    /// Fetch and add the payload's serialized length to the byte counter.
    async fn fetch_counted(&self, path: &str) -> Result<Arc<Value>> {
        let payload = self.client.fetch(&self.ctx, path).await?;
        self.ctx.metrics.bytes.add(serialized_len(&payload) as u64);
        Ok(payload)
    }
}

fn serialized_len(v: &Value) -> usize {
    serde_json::to_string(v).map(|s| s.len()).unwrap_or(0)
}

fn results<'a>(page: &'a Value, path: &str) -> Result<&'a [Value]> {
    page.get("results")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .ok_or_else(|| HolonetError::UnexpectedShape(format!("{path} has no results array")))
}

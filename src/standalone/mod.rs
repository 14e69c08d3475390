use std::{env, num::NonZeroUsize, thread};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use crate::{fetch, utils, workload, FrequencyTable};

pub mod engine;

/// Where the document comes from unless `WORDFREQ_URL` says otherwise.
pub const DEFAULT_URL: &str = "https://gutenberg.net.au/ebooks01/0100021.txt";

pub const URL_VAR: &str = "WORDFREQ_URL";
pub const WORKERS_VAR: &str = "WORDFREQ_WORKERS";

/// MapReduce word count + visualization
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// How many top words to show and visualize
    #[arg(short = 'n', long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..))]
    pub top: u64,
}

#[derive(Debug, Clone)]
pub struct Job {
    /// Document to fetch.
    pub url: String,
    /// Number of words to chart.
    pub top: usize,
    /// Threads in each of the map and reduce pools.
    pub workers: usize,
}

impl Job {
    /// A job with the default source and one worker per available core.
    pub fn new(top: usize) -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            top,
            workers: default_workers(),
        }
    }

    /// Builds the job from parsed arguments plus the environment overrides.
    pub fn from_args(args: Args) -> Result<Self> {
        let top = usize::try_from(args.top).context("--top is too large")?;
        Self::with_overrides(top, env::var(URL_VAR).ok(), env::var(WORKERS_VAR).ok())
    }

    fn with_overrides(top: usize, url: Option<String>, workers: Option<String>) -> Result<Self> {
        let mut job = Self::new(top);
        if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
            job.url = url;
        }
        if let Some(raw) = workers {
            let n: NonZeroUsize = raw
                .trim()
                .parse()
                .with_context(|| format!("{WORKERS_VAR} must be a positive integer, got `{raw}`"))?;
            job.workers = n.get();
        }
        Ok(job)
    }
}

fn default_workers() -> usize {
    thread::available_parallelism().map_or(1, NonZeroUsize::get)
}

/// Counts the words of an already downloaded document with the `wc`
/// workload.
pub fn count_words(text: &str, workers: usize) -> Result<FrequencyTable> {
    let engine = workload::named("wc")?;
    let tokens = utils::tokenize(text);
    info!(tokens = tokens.len(), workers, "counting words");
    engine::count(&tokens, &engine, workers)
}

/// Fetches the job's document and counts it.
///
/// A failed fetch aborts before any counting happens.
pub async fn run_job(client: &reqwest::Client, job: &Job) -> Result<FrequencyTable> {
    let text = fetch::get_text(client, &job.url).await?;
    count_words(&text, job.workers)
}

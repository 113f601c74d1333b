use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use othellobot::game::{play_game, GameRecord};
use othellobot::{Board, Player, RandomMover, SearchParams, Searcher};
use rayon::prelude::*;
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "othellobot-arena", about = "Play the alpha-beta engine against the random baseline")]
struct Args {
    /// Number of games to play (engine colour alternates)
    #[arg(long, default_value_t = 20)]
    games: usize,

    /// Board side length
    #[arg(long, default_value_t = 8)]
    size: usize,

    /// Search config (JSON)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Maximum search depth in plies (overrides config)
    #[arg(long)]
    depth: Option<u32>,

    /// Max plies before a game is abandoned
    #[arg(long, default_value_t = 200)]
    max_plies: usize,

    /// Worker threads; each game runs on one thread
    #[arg(long, default_value_t = 1)]
    threads: usize,

    /// Random seed for the baseline
    #[arg(long, default_value_t = 1u64)]
    seed: u64,

    /// Optional: write summary and game records as JSON to this path
    #[arg(long)]
    json_out: Option<PathBuf>,
}

#[derive(Debug, Default, Serialize)]
struct Summary {
    games: usize,
    engine_wins: usize,
    random_wins: usize,
    draws: usize,
    unfinished: usize,
    params: SearchParams,
}

#[derive(Serialize)]
struct Report<'a> {
    summary: &'a Summary,
    records: &'a [GameRecord],
}

fn engine_seat(game_idx: usize) -> Player {
    if game_idx % 2 == 0 { Player::One } else { Player::Two }
}

fn main() -> Result<()> {
    env_logger::init();
    let a = Args::parse();

    let mut params = match &a.config {
        Some(p) => SearchParams::from_json_file(p)?,
        None => SearchParams::default(),
    };
    if let Some(d) = a.depth {
        params.max_depth = d;
    }
    let start = Board::new(a.size)?;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(a.threads.max(1))
        .build()
        .context("building thread pool")?;

    let pb = ProgressBar::new(a.games as u64);
    pb.set_style(
        ProgressStyle::with_template("{bar:40} {pos}/{len} games [{elapsed_precise}]")
            .context("progress template")?,
    );

    eprintln!(
        "Playing {} games on {}x{} (depth={}, pruning={}, threads={})",
        a.games, a.size, a.size, params.max_depth, params.use_pruning, a.threads
    );
    let t0 = Instant::now();
    let records: Vec<GameRecord> = pool.install(|| {
        (0..a.games)
            .into_par_iter()
            .map(|gi| {
                let mut engine = Searcher::new(params);
                let mut random = RandomMover::new(a.seed.wrapping_add(gi as u64));
                let rec = match engine_seat(gi) {
                    Player::One => play_game(&mut engine, &mut random, start.clone(), a.max_plies),
                    Player::Two => play_game(&mut random, &mut engine, start.clone(), a.max_plies),
                };
                pb.inc(1);
                rec
            })
            .collect::<Result<Vec<_>, _>>()
    })?;
    pb.finish_and_clear();

    let mut summary = Summary { games: records.len(), params, ..Summary::default() };
    for (gi, rec) in records.iter().enumerate() {
        match (rec.finished, rec.winner) {
            (false, _) => summary.unfinished += 1,
            (true, None) => summary.draws += 1,
            (true, Some(w)) if w == engine_seat(gi) => summary.engine_wins += 1,
            (true, Some(_)) => summary.random_wins += 1,
        }
    }

    println!(
        "engine {} / random {} / draws {} / unfinished {} in {:.1}s",
        summary.engine_wins,
        summary.random_wins,
        summary.draws,
        summary.unfinished,
        t0.elapsed().as_secs_f32()
    );

    if let Some(path) = &a.json_out {
        let f = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(f), &Report { summary: &summary, records: &records })?;
        eprintln!("Wrote {}", path.display());
    }
    Ok(())
}

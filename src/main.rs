use anyhow::Result;
use clap::Parser;
use othellobot::search::observer::LogObserver;
use othellobot::{Board, Coord, GameState, Player, RandomMover, SearchParams, Searcher, Strategy};
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(author, version, about = "Play Othello against the alpha-beta engine", long_about = None)]
struct Args {
    /// Board side length (even, 4..=26)
    #[arg(long, default_value_t = 8)]
    size: usize,

    /// Operation mode: 'h' for human vs engine, 's' for engine vs random
    #[arg(long, default_value = "h")]
    mode: String,

    /// Your colour: 'x' moves first, 'o' moves second
    #[arg(long, default_value = "x")]
    color: String,

    /// Search config (JSON); individual flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Maximum search depth in plies
    #[arg(long)]
    depth: Option<u32>,

    /// Disable alpha-beta pruning (plain minimax)
    #[arg(long)]
    no_pruning: bool,

    /// Seed for the random opponent
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Print search statistics
    #[arg(long)]
    verbose: bool,
}

fn parse_color(color_str: &str) -> Result<Player> {
    match color_str.to_lowercase().as_str() {
        "x" | "b" | "black" | "1" => Ok(Player::One),
        "o" | "w" | "white" | "2" => Ok(Player::Two),
        _ => anyhow::bail!("Invalid color: use 'x' or 'o'"),
    }
}

fn parse_mode(mode_str: &str) -> Result<char> {
    match mode_str.to_lowercase().as_str() {
        "h" | "human" => Ok('h'),
        "s" | "self" => Ok('s'),
        _ => anyhow::bail!("Invalid mode: use 'h' or 's'"),
    }
}

fn load_params(args: &Args) -> Result<SearchParams> {
    let mut params = match &args.config {
        Some(path) => SearchParams::from_json_file(path)?,
        None => SearchParams::default(),
    };
    if let Some(d) = args.depth {
        params.max_depth = d;
    }
    if args.no_pruning {
        params.use_pruning = false;
    }
    Ok(params)
}

fn get_human_move(board: &Board) -> Result<Coord> {
    let legal = board.legal_moves();
    loop {
        print!("Enter your move (e.g., d3): ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            anyhow::bail!("stdin closed");
        }
        match input.trim().parse::<Coord>() {
            Ok(mv) if legal.contains(&mv) => return Ok(mv),
            Ok(_) => {
                let list: Vec<String> = legal.iter().map(|m| m.to_string()).collect();
                println!("Illegal move! Legal moves are: {}", list.join(" "));
            }
            Err(e) => println!("{e}"),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mode = parse_mode(&args.mode)?;
    let human = parse_color(&args.color)?;
    let params = load_params(&args)?;
    let mut board = Board::new(args.size)?;

    let mut engine = Searcher::new(params);
    if args.verbose {
        engine.set_observer(Some(Box::new(LogObserver)));
        let p = engine.params();
        println!(
            "Search: depth={} pruning={} cutoff={} tiebreak={}",
            p.max_depth, p.use_pruning, p.use_cutoff, p.use_tiebreak
        );
    }
    let mut random = RandomMover::new(args.seed);

    loop {
        if board.is_terminal() {
            println!("\n{board}");
            match board.leader() {
                Some(p) => println!("\nGame over! {p} wins!"),
                None => println!("\nGame over! It's a draw!"),
            }
            break;
        }

        println!("\n{board}");
        let to_move = board.side_to_move();
        if board.legal_moves().is_empty() {
            println!("{to_move} has no legal move and passes.");
            board = board.forced_pass();
            continue;
        }

        let engine_turn = mode == 's' || to_move != human;
        let mv = if !engine_turn {
            get_human_move(&board)?
        } else if mode == 's' && to_move == human {
            // In self-play mode the "human" seat is the random baseline.
            match random.decide_move(&board) {
                Some(mv) => mv,
                None => break,
            }
        } else {
            if args.verbose {
                println!("Thinking...");
            }
            let start = Instant::now();
            let res = engine.search(&board);
            if args.verbose {
                println!(
                    "utility: {:.4}, nodes: {}, cutoffs: {}, passes: {}, elapsed: {:.2}s",
                    res.utility,
                    res.nodes,
                    res.cutoffs,
                    res.passes,
                    start.elapsed().as_secs_f32()
                );
            }
            match res.best_move {
                Some(mv) => {
                    println!("Engine plays: {mv}");
                    mv
                }
                None => {
                    println!("No legal moves available!");
                    break;
                }
            }
        };
        board = board.play(mv)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_mode_is_rejected() {
        assert_eq!(parse_mode("h").unwrap(), 'h');
        assert_eq!(parse_mode("Self").unwrap(), 's');
        assert!(parse_mode("engine").is_err());
        assert!(parse_mode("").is_err());
    }
}

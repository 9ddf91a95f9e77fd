use patience_autoplay::{
    run_batch, write_json, write_text, AutoplayConfig, RunStatus, Simulator,
};
use patience_core::{CardView, PileView, RngState, TableView};
use std::path::PathBuf;

const SUIT_GLYPHS: [char; 4] = ['♠', '♥', '♣', '♦'];
const RANK_GLYPHS: [char; 13] = [
    'A', '2', '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K',
];

#[derive(Debug, Clone)]
struct CliOptions {
    games: u32,
    seed: u64,
    draw_count: usize,
    max_redeals: u32,
    record_steps: bool,
    verbose: bool,
    show_final: bool,
    json_out: Option<PathBuf>,
    text_out: Option<PathBuf>,
}

impl Default for CliOptions {
    fn default() -> Self {
        let config = AutoplayConfig::default();
        Self {
            games: config.games,
            seed: config.seed,
            draw_count: config.table.draw_count,
            max_redeals: config.table.max_redeals,
            record_steps: false,
            verbose: false,
            show_final: false,
            json_out: None,
            text_out: None,
        }
    }
}

fn parse_cli_options(args: &[String]) -> CliOptions {
    let mut options = CliOptions::default();
    let mut idx = 0usize;
    while idx < args.len() {
        match args[idx].as_str() {
            "--games" | "-n" => {
                if let Some(value) = args.get(idx + 1) {
                    if let Ok(games) = value.parse::<u32>() {
                        options.games = games;
                    }
                    idx += 1;
                }
            }
            "--seed" => {
                if let Some(value) = args.get(idx + 1) {
                    if let Ok(seed) = value.parse::<u64>() {
                        options.seed = seed;
                    }
                    idx += 1;
                }
            }
            "--draw" => {
                if let Some(value) = args.get(idx + 1) {
                    if let Ok(count) = value.parse::<usize>() {
                        options.draw_count = count;
                    }
                    idx += 1;
                }
            }
            "--redeals" => {
                if let Some(value) = args.get(idx + 1) {
                    if let Ok(count) = value.parse::<u32>() {
                        options.max_redeals = count;
                    }
                    idx += 1;
                }
            }
            "--json" => {
                if let Some(value) = args.get(idx + 1) {
                    options.json_out = Some(PathBuf::from(value));
                    idx += 1;
                }
            }
            "--out" => {
                if let Some(value) = args.get(idx + 1) {
                    options.text_out = Some(PathBuf::from(value));
                    idx += 1;
                }
            }
            "--trace" => options.record_steps = true,
            "--verbose" | "-v" => options.verbose = true,
            "--show-final" => options.show_final = true,
            _ => {}
        }
        idx += 1;
    }
    options
}

fn config_from(options: &CliOptions) -> AutoplayConfig {
    let mut config = AutoplayConfig {
        seed: options.seed,
        games: options.games,
        record_steps: options.record_steps,
        ..Default::default()
    };
    config.table.draw_count = options.draw_count;
    config.table.max_redeals = options.max_redeals;
    config
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = parse_cli_options(&args);
    let config = config_from(&options);

    let result = match run_batch(&config) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("autoplay error: {err}");
            std::process::exit(1);
        }
    };

    println!(
        "played {} game(s): {} won, win rate {:.4}",
        result.summary.games,
        result.summary.wins,
        result.summary.win_rate()
    );
    println!(
        "total iterations: {} ({} ms)",
        result.summary.total_iterations, result.summary.wall_time_ms
    );

    if options.verbose {
        for (idx, game) in result.games.iter().enumerate() {
            println!(
                "game {:>4} | seed {:>20} | {} | {} iterations",
                idx,
                game.seed,
                match game.status {
                    RunStatus::Won => "won ",
                    RunStatus::Lost => "lost",
                },
                game.iterations
            );
        }
    }

    if let Some(path) = options.json_out.as_ref() {
        if let Err(err) = write_json(path, &result) {
            eprintln!("failed to write {}: {err}", path.display());
            std::process::exit(1);
        }
        println!("wrote {}", path.display());
    }
    if let Some(path) = options.text_out.as_ref() {
        if let Err(err) = write_text(path, &result) {
            eprintln!("failed to write {}: {err}", path.display());
            std::process::exit(1);
        }
        println!("wrote {}", path.display());
    }

    if options.show_final {
        match replay_first_game(&config) {
            Ok(view) => print_table(&view),
            Err(err) => {
                eprintln!("replay error: {err}");
                std::process::exit(1);
            }
        }
    }
}

/// Re-run the batch's first game to show where its table ended up.
fn replay_first_game(
    config: &AutoplayConfig,
) -> Result<TableView, patience_autoplay::AutoplayError> {
    let mut base = RngState::from_seed(config.seed);
    let mut rng = base.fork();
    let mut simulator = Simulator::new(config, &mut rng)?;
    simulator.run(false)?;
    Ok(simulator.table.view())
}

fn format_card(view: &CardView) -> String {
    match view {
        CardView::Hidden => "??".to_string(),
        CardView::Visible { rank, suit } => format!(
            "{}{}",
            RANK_GLYPHS[rank.code() as usize], SUIT_GLYPHS[suit.code() as usize]
        ),
    }
}

fn format_pile(pile: &PileView) -> String {
    if pile.cards.is_empty() {
        "--".to_string()
    } else {
        pile.cards
            .iter()
            .map(format_card)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn print_table(view: &TableView) {
    println!("stock: {} card(s)", view.stock.cards.len());
    println!("waste: {}", format_pile(&view.waste));
    for (idx, foundation) in view.foundations.iter().enumerate() {
        let top = foundation.cards.last().map(format_card);
        println!(
            "foundation {}: {} ({} cards)",
            idx + 1,
            top.unwrap_or_else(|| "--".to_string()),
            foundation.cards.len()
        );
    }
    for (idx, tableau) in view.tableaus.iter().enumerate() {
        println!("tableau {}: {}", idx + 1, format_pile(tableau));
    }
}

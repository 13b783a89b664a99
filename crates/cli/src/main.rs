use anyhow::{bail, Context};
use arcana_autoplay::{
    best_play, choose_action, run_autoplay, write_json, write_text, AutoAction, AutoplayConfig,
    AutoplayResult,
};
use arcana_core::{Battle, BattleError, Card, Event, EventBus, GameConfig, PlayResult, Preview};
use arcana_data::{default_assets_dir, load_config_path};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_RUN_SEED: u64 = 0xC0FFEE;
/// Upper bound for a range like `0-4`; hands never come close.
const MAX_RANGE_INDEX: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliOptions {
    seed: u64,
    assets: Option<PathBuf>,
    auto: bool,
    max_steps: Option<u32>,
    json: bool,
    out: Option<PathBuf>,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            seed: DEFAULT_RUN_SEED,
            assets: None,
            auto: false,
            max_steps: None,
            json: false,
            out: None,
        }
    }
}

fn parse_cli_options(args: &[String]) -> anyhow::Result<CliOptions> {
    let mut options = CliOptions::default();
    let mut idx = 0usize;
    while idx < args.len() {
        match args[idx].as_str() {
            "--auto" => options.auto = true,
            "--json" => options.json = true,
            "--seed" => {
                let value = args.get(idx + 1).context("--seed needs a value")?;
                options.seed = value
                    .parse::<u64>()
                    .with_context(|| format!("invalid seed '{value}'"))?;
                idx += 1;
            }
            "--assets" => {
                let value = args.get(idx + 1).context("--assets needs a path")?;
                options.assets = Some(PathBuf::from(value));
                idx += 1;
            }
            "--out" => {
                let value = args.get(idx + 1).context("--out needs a path")?;
                options.out = Some(PathBuf::from(value));
                idx += 1;
            }
            "--max-steps" => {
                let value = args.get(idx + 1).context("--max-steps needs a value")?;
                options.max_steps = Some(
                    value
                        .parse::<u32>()
                        .with_context(|| format!("invalid step count '{value}'"))?,
                );
                idx += 1;
            }
            other => bail!("unknown option '{other}'"),
        }
        idx += 1;
    }
    Ok(options)
}

/// Logs go to stderr so they never interleave with game output.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = parse_cli_options(&args)?;
    let config = load_config(&options)?;
    if options.auto {
        return run_auto(config, &options);
    }
    run_repl(config, options.seed)
}

fn load_config(options: &CliOptions) -> anyhow::Result<GameConfig> {
    let path = match options.assets.as_ref() {
        Some(path) => path.clone(),
        None => {
            let local = PathBuf::from("assets");
            if local.is_dir() {
                local
            } else {
                default_assets_dir()
            }
        }
    };
    debug!(path = %path.display(), "loading game config");
    load_config_path(&path).with_context(|| format!("load game config from {}", path.display()))
}

fn run_auto(config: GameConfig, options: &CliOptions) -> anyhow::Result<()> {
    let mut autoplay = AutoplayConfig {
        seed: options.seed,
        ..AutoplayConfig::default()
    };
    if let Some(max_steps) = options.max_steps {
        autoplay.max_steps = max_steps;
    }
    let result: AutoplayResult = run_autoplay(config, &autoplay)?;
    if let Some(path) = options.out.as_ref() {
        if options.json {
            write_json(path, &result)?;
        } else {
            write_text(path, &result)?;
        }
        println!("report written to {}", path.display());
        return Ok(());
    }
    if options.json {
        println!("{}", result.to_json()?);
    } else {
        println!("{}", result.to_text_report());
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Empty,
    Hand,
    Select(Vec<usize>),
    Clear,
    Play(Vec<usize>),
    Discard(Vec<usize>),
    Preview(Vec<usize>),
    State,
    Hint,
    New,
    Help,
    Quit,
    Unknown(String),
}

fn parse_command(line: &str) -> Result<Command, String> {
    let mut parts = line.split_whitespace();
    let Some(cmd) = parts.next() else {
        return Ok(Command::Empty);
    };
    let args: Vec<&str> = parts.collect();
    let command = match cmd {
        "hand" | "h" => Command::Hand,
        "select" | "s" => Command::Select(parse_indices_result(&args)?),
        "clear" => Command::Clear,
        "play" | "p" => Command::Play(parse_optional_indices(&args)?),
        "discard" | "d" => Command::Discard(parse_optional_indices(&args)?),
        "preview" => Command::Preview(parse_optional_indices(&args)?),
        "state" => Command::State,
        "hint" => Command::Hint,
        "new" => Command::New,
        "help" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        other => Command::Unknown(other.to_string()),
    };
    Ok(command)
}

/// Accepts `1 3`, `1,3` and `1-3`.
fn parse_indices_result(args: &[&str]) -> Result<Vec<usize>, String> {
    if args.is_empty() {
        return Err("missing indices".to_string());
    }
    let mut indices = Vec::new();
    for arg in args {
        for part in arg.split(',') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            if let Some((start, end)) = part.split_once('-') {
                let start = start
                    .trim()
                    .parse::<usize>()
                    .map_err(|_| "invalid range start".to_string())?;
                let end = end
                    .trim()
                    .parse::<usize>()
                    .map_err(|_| "invalid range end".to_string())?;
                if start > end {
                    return Err("range start larger than end".to_string());
                }
                if end > MAX_RANGE_INDEX {
                    return Err("range too large".to_string());
                }
                indices.extend(start..=end);
            } else {
                let idx = part
                    .parse::<usize>()
                    .map_err(|_| format!("invalid index '{part}'"))?;
                indices.push(idx);
            }
        }
    }
    if indices.is_empty() {
        return Err("missing indices".to_string());
    }
    Ok(indices)
}

fn parse_optional_indices(args: &[&str]) -> Result<Vec<usize>, String> {
    if args.is_empty() {
        return Ok(Vec::new());
    }
    parse_indices_result(args)
}

fn run_repl(config: GameConfig, seed: u64) -> anyhow::Result<()> {
    let autoplay = AutoplayConfig {
        seed,
        ..AutoplayConfig::default()
    };
    let mut battle = Battle::new(config, seed)?;
    let mut events = EventBus::default();
    println!("seed: {seed}");
    print_help();
    print_status(&battle);
    print_hand(&battle);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let command = match parse_command(line.trim()) {
            Ok(command) => command,
            Err(err) => {
                println!("error: {err}");
                continue;
            }
        };
        match command {
            Command::Empty => {}
            Command::Quit => break,
            Command::Help => print_help(),
            Command::Unknown(cmd) => {
                println!("unknown command '{cmd}'");
                print_help();
            }
            Command::Hand => {
                print_status(&battle);
                print_hand(&battle);
            }
            Command::Select(indices) => {
                for idx in indices {
                    match battle.toggle_select(idx) {
                        Ok(true) => println!("selected {idx}"),
                        Ok(false) => println!("deselected {idx}"),
                        Err(err) => print_battle_error(&err),
                    }
                }
                print_preview(&battle.preview());
            }
            Command::Clear => {
                battle.clear_selection();
                println!("selection cleared");
            }
            Command::Preview(indices) => {
                let preview = if indices.is_empty() {
                    battle.preview()
                } else {
                    battle.preview_indices(&indices)
                };
                print_preview(&preview);
            }
            Command::State => println!("{}", serde_json::to_string_pretty(&battle.snapshot())?),
            Command::Play(indices) => {
                let result = if indices.is_empty() {
                    battle.play_selected(&mut events)
                } else {
                    battle.play(&indices, &mut events)
                };
                match result {
                    Ok(result) => {
                        battle.lock_input();
                        print_play(&result);
                        drain_events(&mut events);
                        battle.unlock_input();
                        print_status(&battle);
                        print_hand(&battle);
                    }
                    Err(err) => print_battle_error(&err),
                }
            }
            Command::Discard(indices) => {
                let result = if indices.is_empty() {
                    battle.discard_selected(&mut events)
                } else {
                    battle.discard(&indices, &mut events)
                };
                match result {
                    Ok(cards) => {
                        println!("discarded: {}", format_cards(&cards));
                        drain_events(&mut events);
                        print_hand(&battle);
                    }
                    Err(err) => print_battle_error(&err),
                }
            }
            Command::Hint => print_hint(&battle, &autoplay),
            Command::New => match battle.new_run(&mut events) {
                Ok(()) => {
                    drain_events(&mut events);
                    print_status(&battle);
                    print_hand(&battle);
                }
                Err(err) => print_battle_error(&err),
            },
        }
    }
    Ok(())
}

fn print_help() {
    println!("commands:");
    println!("  hand | h              show the hand and the battle status");
    println!("  select | s <i..>      toggle cards in the selection");
    println!("  clear                 clear the selection");
    println!("  play | p [i..]        play the given cards or the selection");
    println!("  discard | d [i..]     discard the given cards or the selection");
    println!("  preview [i..]         evaluate cards or the selection without playing");
    println!("  state                 print the battle snapshot as JSON");
    println!("  hint                  suggest an action");
    println!("  new                   restart the run");
    println!("  help | ?              show this help");
    println!("  quit | q              leave");
}

fn print_status(battle: &Battle) {
    let snapshot = battle.snapshot();
    println!(
        "round {} | enemy {}/{} {} hp {}/{} dmg {} | player hp {}/{} pentacles {} | discards {} | deck {}",
        snapshot.round,
        snapshot.enemy.index + 1,
        snapshot.enemy_count,
        snapshot.enemy.name,
        snapshot.enemy.health,
        snapshot.enemy.baseline_health,
        snapshot.enemy.damage,
        snapshot.player.health,
        snapshot.player.max_health,
        snapshot.player.pentacles,
        snapshot.discards_left,
        snapshot.deck_count
    );
}

fn print_hand(battle: &Battle) {
    println!("== Hand == ({} cards)", battle.hand.len());
    for (idx, card) in battle.hand.iter().enumerate() {
        let marker = if battle.is_selected(idx) { '*' } else { ' ' };
        println!("{marker}{idx:>3}  {:<8} {}", card.to_string(), card_detail(card));
    }
}

fn card_detail(card: &Card) -> String {
    match (card.special_kind(), card.suit()) {
        (Some(kind), _) => kind.description().to_string(),
        (None, Some(suit)) => suit.id().to_string(),
        (None, None) => String::new(),
    }
}

fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|card| card.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn print_preview(preview: &Preview) {
    println!(
        "preview: {} x{} | damage {} shield {} healing {} pentacles {}",
        preview.label,
        preview.multiplier,
        preview.totals.damage,
        preview.totals.shield,
        preview.totals.healing,
        preview.totals.pentacles
    );
}

fn print_play(result: &PlayResult) {
    println!(
        "played {} -> {} x{}",
        format_cards(&result.played),
        result.evaluation.hand.label(),
        result.evaluation.multiplier
    );
    println!(
        "effects: damage {} shield {} healing {} pentacles {}",
        result.totals.damage, result.totals.shield, result.totals.healing, result.totals.pentacles
    );
    for special in &result.specials {
        println!(
            "{}: damage {} spent {} gained {}",
            special.kind.name(),
            special.effect.damage,
            special.effect.pentacles_spent,
            special.effect.pentacles_gained
        );
    }
    println!("enemy strikes for {}", result.counter_damage);
    println!("outcome: {:?}", result.outcome);
}

fn print_hint(battle: &Battle, autoplay: &AutoplayConfig) {
    let action = choose_action(battle, autoplay);
    match (&action, best_play(battle, autoplay.weights)) {
        (AutoAction::Play { .. }, Some(best)) => println!(
            "hint: {} ({}, score {:.1})",
            action.short_label(),
            best.hand.label(),
            best.score
        ),
        _ => println!("hint: {}", action.short_label()),
    }
}

fn print_battle_error(err: &BattleError) {
    warn!(error = %err, "command rejected");
    println!("error: {err}");
}

fn drain_events(events: &mut EventBus) {
    for event in events.drain() {
        println!("event: {}", format_event(&event));
    }
}

fn format_event(event: &Event) -> String {
    match event {
        Event::RoundStarted {
            enemy_index,
            enemy_health,
            discards,
        } => format!(
            "round started vs enemy {} ({enemy_health} hp), {discards} discards",
            enemy_index + 1
        ),
        Event::HandDealt { count, deck_left } => {
            format!("dealt {count} cards, {deck_left} left in deck")
        }
        Event::CardsDiscarded {
            cards,
            discards_left,
        } => format!("{} cards discarded, {discards_left} discards left", cards.len()),
        Event::HandEvaluated {
            hand, multiplier, ..
        } => format!("{} x{multiplier}", hand.label()),
        Event::EffectsApplied {
            enemy_health,
            player_health,
            ..
        } => format!("effects applied: enemy {enemy_health} hp, player {player_health} hp"),
        Event::SpecialResolved(outcome) => format!(
            "{} resolved for {} damage",
            outcome.kind.name(),
            outcome.effect.damage
        ),
        Event::EnemyAttacked {
            damage,
            blocked,
            player_health,
        } => format!("enemy hit for {damage} ({blocked} blocked), player {player_health} hp"),
        Event::EnemyDefeated { enemy_index } => format!("enemy {} defeated", enemy_index + 1),
        Event::RunWon => "run won, starting over".to_string(),
        Event::PlayerDefeated => "player defeated, starting over".to_string(),
    }
}

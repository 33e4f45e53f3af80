// Hide console window on Windows for release builds (GUI app).
// In debug builds, keep the console so panics/backtraces are visible.
#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

use bevy::prelude::*;
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;

use botanic_sweeper::sweeper3d::{
    BlockType, BoardRng, BoardSnapshot, Difficulty, GameSettings, Grid, SweeperPlugin,
    DEFAULT_CONFIG_FILE,
};

/// Botanic Sweeper - a minesweeper-style 3D block puzzle
#[derive(Parser)]
#[command(name = "botanic-sweeper")]
#[command(author, version, about = "Botanic Sweeper - dig up the flowers, avoid the rot")]
struct Cli {
    /// Print a generated board to the terminal instead of opening a window
    #[arg(long)]
    cli: bool,

    /// Difficulty (easy, medium, hard); overrides the config file
    #[arg(short, long, value_parser = parse_difficulty_arg)]
    difficulty: Option<Difficulty>,

    /// Seed for board generation; overrides the config file
    #[arg(short, long)]
    seed: Option<u64>,

    /// Path to the RON settings file
    #[arg(short = 'c', long = "config", default_value = DEFAULT_CONFIG_FILE)]
    config_file: PathBuf,

    /// With --cli, print the board as JSON
    #[arg(long, requires = "cli")]
    json: bool,
}

fn parse_difficulty_arg(s: &str) -> Result<Difficulty, String> {
    Difficulty::parse(s)
        .ok_or_else(|| format!("Unknown difficulty: {}. Valid: easy, medium, hard", s))
}

fn main() {
    let cli = Cli::parse();

    let mut settings = GameSettings::load_or_default(&cli.config_file);
    if let Some(difficulty) = cli.difficulty {
        settings.difficulty = difficulty;
    }
    if cli.seed.is_some() {
        settings.seed = cli.seed;
    }

    if cli.cli {
        #[cfg(windows)]
        attach_parent_console();

        if let Err(e) = run_cli_mode(&settings, cli.json) {
            eprintln!("{} {}", "error:".red().bold(), e);
            std::process::exit(1);
        }
    } else {
        run_3d_mode(settings);
    }
}

/// Attach to the parent process's console on Windows so CLI output is visible
/// despite `windows_subsystem = "windows"`.
#[cfg(windows)]
fn attach_parent_console() {
    use std::io::{self, Write};

    #[link(name = "kernel32")]
    extern "system" {
        fn AttachConsole(dwProcessId: u32) -> i32;
        fn AllocConsole() -> i32;
    }

    const ATTACH_PARENT_PROCESS: u32 = 0xFFFFFFFF;

    unsafe {
        if AttachConsole(ATTACH_PARENT_PROCESS) == 0 {
            AllocConsole();
        }
    }

    let _ = io::stdout().flush();
    let _ = io::stderr().flush();
}

// ============================================================================
// 3D Mode
// ============================================================================

fn run_3d_mode(settings: GameSettings) {
    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Botanic Sweeper".to_string(),
                        resolution: (800u32, 450u32).into(),
                        ..default()
                    }),
                    ..default()
                })
                .set(bevy::log::LogPlugin {
                    level: bevy::log::Level::INFO,
                    filter: "info,wgpu=error,naga=warn".to_string(),
                    ..default()
                }),
        )
        // Settings go in first: the plugin seeds its RNG from them
        .insert_resource(settings)
        .add_plugins(SweeperPlugin)
        .run();
}

// ============================================================================
// CLI Mode
// ============================================================================

fn run_cli_mode(settings: &GameSettings, json: bool) -> Result<(), String> {
    let mut rng = BoardRng::new(settings.seed);
    let grid = Grid::generate(settings.difficulty, &mut rng.0);
    let snapshot = BoardSnapshot::from_grid(&grid, settings.difficulty, settings.seed);

    if json {
        println!("{}", snapshot.to_json()?);
        return Ok(());
    }

    let side = snapshot.side;
    println!(
        "{} {} ({}x{})",
        "Botanic Sweeper".bold(),
        settings.difficulty.name().cyan(),
        side,
        side
    );
    if let Some(seed) = settings.seed {
        println!("Seed: {}", seed);
    }
    println!();

    for row in grid.blocks().chunks(side) {
        let line: Vec<String> = row
            .iter()
            .map(|block| {
                let glyph = block.block_type.glyph().to_string();
                match block.block_type {
                    BlockType::Dirt => glyph.yellow().dimmed().to_string(),
                    BlockType::Flower => glyph.magenta().bold().to_string(),
                    BlockType::Rotten => glyph.green().to_string(),
                }
            })
            .collect();
        println!("  {}", line.join(" "));
    }

    println!();
    let counts = grid.counts();
    for block_type in BlockType::ALL {
        let count = counts.get(block_type);
        println!(
            "  {} {:<7} {}",
            block_type.glyph(),
            block_type.name(),
            count.to_string().bold()
        );
    }

    Ok(())
}

use std::fs;

use anyhow::{Context, Result};
use clap::Parser;
use game_core::content::LevelPlan;
use game_core::{Game, LogEvent};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a level plan JSON file; the built-in demo layout when omitted
    #[arg(short, long)]
    level: Option<String>,
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 200)]
    ticks: u32,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let plan = match &args.level {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read level file: {path}"))?;
            LevelPlan::from_json(&text).with_context(|| "Failed to deserialize level JSON")?
        }
        None => LevelPlan::demo(),
    };

    let mut game = Game::new(args.seed, &plan)
        .map_err(|e| anyhow::anyhow!("Level plan rejected at load: {e:?}"))?;

    let mut simulated = 0;
    for _ in 0..args.ticks {
        let report = game.advance_tick();
        simulated += 1;
        for slain in &report.slain {
            println!("tick {:4}: enemy {slain:?} died", game.tick());
        }
        if report.player_defeated {
            println!("tick {:4}: player defeated", game.tick());
            break;
        }
    }

    let hits = game
        .log()
        .iter()
        .filter(|event| matches!(event, LogEvent::AttackHit { .. }))
        .count();
    let dodges = game
        .log()
        .iter()
        .filter(|event| matches!(event, LogEvent::AttackDodged { .. }))
        .count();
    let player = game.actor_info(game.state().player_id).expect("player is never removed");

    println!("Run complete.");
    println!("Ticks: {simulated}");
    println!("Enemies left: {}", game.state().actors.len() - 1);
    println!("Player health: {} (armor {:.1})", player.health, player.armor);
    println!("Hits taken: {hits}, dodges: {dodges}");
    println!("Snapshot hash: {}", game.snapshot_hash());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_files_round_trip_from_disk() {
        let plan = LevelPlan::demo();
        let text = serde_json::to_string(&plan).expect("plan serializes");
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("demo_level.json");
        fs::write(&path, &text).expect("write level");

        let loaded = LevelPlan::from_json(&fs::read_to_string(&path).expect("read level"))
            .expect("parse level");
        assert_eq!(loaded.width, plan.width);
        assert_eq!(loaded.enemies.len(), plan.enemies.len());
    }
}

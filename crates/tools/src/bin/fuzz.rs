use anyhow::{Result, bail};
use clap::Parser;
use game_core::content::LevelPlan;
use game_core::{Direction, Game};
use rand_chacha::{ChaCha8Rng, rand_core::Rng, rand_core::SeedableRng};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 1000)]
    ticks: u32,
}

fn choose_direction(rng: &mut ChaCha8Rng) -> Direction {
    Direction::ALL[(rng.next_u32() % 4) as usize]
}

/// Every tile handle must point at a live actor standing on that tile.
fn check_occupancy(game: &Game) -> Result<()> {
    let state = game.state();
    let mut occupied = 0;
    for tile in &state.field.tiles {
        if let Some(id) = tile.occupant {
            if !state.actors.contains_key(id) {
                bail!("tile holds a handle to a removed actor at tick {}", game.tick());
            }
            occupied += 1;
        }
    }
    if occupied != state.actors.len() {
        bail!("{} occupied tiles for {} actors at tick {}", occupied, state.actors.len(), game.tick());
    }
    for (id, actor) in state.actors.iter() {
        let tile = state
            .field
            .tile(actor.pos)
            .map_err(|e| anyhow::anyhow!("actor {:?} off-grid: {e:?}", id))?;
        if tile.occupant != Some(id) {
            bail!("{} is not on its own tile at tick {}", actor.name, game.tick());
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    println!("Starting fuzz harness on seed {} for max {} ticks...", args.seed, args.ticks);
    let mut game = Game::new(args.seed, &LevelPlan::demo())
        .map_err(|e| anyhow::anyhow!("demo plan rejected: {e:?}"))?;
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    for _ in 0..args.ticks {
        let direction = choose_direction(&mut rng);
        // Swing when something is adjacent, walk otherwise; both may no-op.
        if game.player_attack(direction).is_none() {
            game.move_player(direction);
        }
        let report = game.advance_tick();
        check_occupancy(&game)?;

        if report.player_defeated {
            println!("Player defeated at tick {}", game.tick());
            break;
        }
        if game.state().actors.len() == 1 {
            println!("Field cleared at tick {}", game.tick());
            break;
        }
    }

    println!("Invariants held for {} ticks.", game.tick());
    println!("Snapshot hash: {}", game.snapshot_hash());
    Ok(())
}

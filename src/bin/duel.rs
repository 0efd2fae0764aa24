//! Duel Binary
//!
//! Runs one game between two CPU players and prints the final line.
//! Ctrl+C stops the room early; the report is still printed.

use battleline::gameroom::*;
use battleline::players::*;
use clap::Parser;
use clap::ValueEnum;
use std::time::Duration;

#[derive(Parser)]
#[command(author, version, about = "Play a Battle Line duel between two CPU players", long_about = None)]
struct Args {
    #[arg(long, help = "Seed for the deck shuffle (random when omitted)")]
    seed: Option<u64>,
    #[arg(long, value_parser = duration, default_value = "10ms", help = "Maintenance interval")]
    tick: Duration,
    #[arg(long, value_parser = duration, default_value = "30s", help = "Time allowed per turn")]
    timeout: Duration,
    #[arg(long, value_enum, default_value_t = Rule::None, help = "Match rule that may end the game")]
    arbiter: Rule,
    #[arg(long, value_enum, default_value_t = Brain::Fish, help = "Strategy for both players")]
    strategy: Brain,
    #[arg(long, help = "Print every published snapshot while playing")]
    watch: bool,
    #[arg(long, help = "Print the final report as JSON")]
    json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Rule {
    None,
    Breakthrough,
    Envelopment,
    Official,
}

impl From<Rule> for Box<dyn Arbiter> {
    fn from(rule: Rule) -> Self {
        match rule {
            Rule::None => Box::new(Undeclared),
            Rule::Breakthrough => Box::new(Breakthrough),
            Rule::Envelopment => Box::new(Envelopment),
            Rule::Official => Box::new(Official),
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Brain {
    Fish,
    Eager,
}

impl From<Brain> for Box<dyn Strategy> {
    fn from(brain: Brain) -> Self {
        match brain {
            Brain::Fish => Box::new(Fish::default()),
            Brain::Eager => Box::new(Eager),
        }
    }
}

fn duration(s: &str) -> Result<Duration, String> {
    battleline::parse_duration(s).ok_or_else(|| format!("invalid duration: {}", s))
}

// actors share one thread so replenishment draws land in turn order
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    battleline::log()?;
    let args = Args::parse();
    let config = args
        .seed
        .map(|seed| Config::default().with_seed(seed))
        .unwrap_or_default()
        .with_tick(args.tick)
        .with_timeout(args.timeout);
    let room = Room::new(
        config,
        Box::<dyn Strategy>::from(args.strategy),
        Box::<dyn Strategy>::from(args.strategy),
    )
    .with_arbiter(Box::<dyn Arbiter>::from(args.arbiter));
    battleline::kys(room.stopper());
    if args.watch {
        let mut screen = room.subscribe();
        tokio::spawn(async move {
            while screen.changed().await.is_ok() {
                println!("{}", *screen.borrow_and_update());
            }
        });
    }
    let report = room.run().await;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.snapshot);
        println!("{:?} after {} plays", report.ending, report.history.len());
    }
    Ok(())
}

//! Contested-line engine for a two-player Battle Line style duel.
//!
//! Two player actors alternately draw from a shared [`cards::Shoe`] and commit
//! cards to one of nine stones on a shared [`line::BattleLine`]. A stone is won
//! by whichever side holds the stronger 3-card formation once both sides are full.
//!
//! ## Modules
//!
//! - [`cards`] — clans, ranks, cards, the owned [`cards::Deck`] and its synchronized [`cards::Shoe`]
//! - [`line`] — card sets, formation evaluation, stones and the battle line itself
//! - [`gameroom`] — the coordinator [`gameroom::Room`], player actors, messages and arbiters
//! - [`players`] — reference [`gameroom::Strategy`] implementations
pub mod cards;
pub mod gameroom;
pub mod line;
pub mod players;

// ============================================================================
// LINE GEOMETRY
// ============================================================================
/// Number of stones in the battle line.
pub const N_STONES: usize = 9;
/// Cards each side may commit to a single stone.
pub const CAPACITY: usize = 3;
/// Players at the table. One per side of the line.
pub const N_SIDES: usize = 2;

// ============================================================================
// CARD SPACE
// ============================================================================
/// Distinct ranks per clan (1 through 9).
pub const N_RANKS: usize = 9;
/// Distinct clans.
pub const N_CLANS: usize = 6;
/// Cards in a full deck, each appearing exactly once.
pub const N_CARDS: usize = N_RANKS * N_CLANS;

// ============================================================================
// TURN COORDINATION
// ============================================================================
/// Cards dealt to each player before the first turn.
pub const OPENING_HAND: usize = 6;
/// Idle interval between maintenance passes (winner sweep + snapshot publish).
pub const MAINTENANCE_INTERVAL: std::time::Duration = std::time::Duration::from_millis(10);
/// Time a player has to answer a turn before it is forfeited.
pub const TURN_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and benchmarking.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() -> anyhow::Result<()> {
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time))?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}

/// Register a Ctrl+C handler that asks the room to stop after the current message.
/// A second Ctrl+C exits immediately.
#[cfg(feature = "cli")]
pub fn kys(stopper: gameroom::Stopper) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            println!();
            log::warn!("interrupt received, stopping the room");
            stopper.stop();
        }
        if tokio::signal::ctrl_c().await.is_ok() {
            log::warn!("violent interrupt received, exiting immediately");
            std::process::exit(0);
        }
    });
}

/// Parse duration string like "250ms", "30s", "5m", "2h" into Duration.
pub fn parse_duration(s: &str) -> Option<std::time::Duration> {
    let s = s.trim();
    if let Some(num) = s.strip_suffix("ms") {
        return num.parse().ok().map(std::time::Duration::from_millis);
    }
    let (num, unit) = s.split_at(s.len().saturating_sub(1));
    let value: u64 = num.parse().ok()?;
    match unit {
        "s" => Some(std::time::Duration::from_secs(value)),
        "m" => Some(std::time::Duration::from_secs(value * 60)),
        "h" => Some(std::time::Duration::from_secs(value * 3600)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn deck_fills_every_slot_exactly() {
        assert_eq!(N_CARDS, N_STONES * CAPACITY * N_SIDES);
    }

    #[test]
    fn parses_durations() {
        assert_eq!(parse_duration("250ms"), Some(Duration::from_millis(250)));
        assert_eq!(parse_duration("30s"), Some(Duration::from_secs(30)));
        assert_eq!(parse_duration("5m"), Some(Duration::from_secs(300)));
        assert_eq!(parse_duration("2h"), Some(Duration::from_secs(7200)));
        assert_eq!(parse_duration("2d"), None);
        assert_eq!(parse_duration("ms"), None);
        assert_eq!(parse_duration(""), None);
    }
}

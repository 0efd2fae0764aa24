use super::*;
use crate::N_SIDES;
use crate::cards::Shoe;
use crate::line::BattleLine;
use crate::line::Side;
use crate::line::Snapshot;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;
use tokio::sync::mpsc::*;
use tokio::sync::watch;
use tokio::time::Instant;
use tokio::time::MissedTickBehavior;

/// Why the room stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Ending {
    /// The arbiter declared a match winner.
    Verdict(Side),
    /// Both players passed back to back: nobody can play anymore.
    Stalled,
    /// A [`Stopper`] asked the room to stop.
    Stopped,
    /// Every player actor is gone.
    Abandoned,
}

/// What a finished room hands back.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub ending: Ending,
    pub history: History,
    pub snapshot: Snapshot,
}

/// Handle for stopping a running room from another task.
#[derive(Debug, Clone)]
pub struct Stopper(Arc<Notify>);

impl Stopper {
    /// The room finishes the message it is handling, then returns its report.
    pub fn stop(&self) {
        self.0.notify_one();
    }
}

/// Central coordinator for one game.
/// Single writer of the battle line and sole keeper of turn order.
///
/// Key responsibilities:
/// - Deal opening hands
/// - Alternate turns and enforce that only the active player is heard
/// - Re-validate and apply plays, keeping the move history
/// - Replenish the acting player's hand
/// - Between messages, sweep stone winners and publish snapshots
/// - Forfeit turns that outlast the timeout
///
/// Room runs in a loop waiting on whichever comes first:
/// - Stop: return immediately
/// - Message: apply the active player's reply and hand the turn over
/// - Deadline: forfeit the active player's turn
/// - Tick: maintenance pass
pub struct Room {
    config: Config,
    shoe: Shoe,
    line: BattleLine,
    arbiter: Box<dyn Arbiter>,
    history: History,
    players: [UnboundedSender<Event>; N_SIDES],
    inbox: UnboundedReceiver<Message>,
    screen: watch::Sender<Snapshot>,
    halt: Arc<Notify>,
    active: Side,
    turn: usize,
    passes: usize,
}

impl Room {
    /// Builds the shoe and line and seats both players. Must be called
    /// inside a tokio runtime since each player starts its own task.
    pub fn new<A, B>(config: Config, a: A, b: B) -> Self
    where
        A: Strategy + 'static,
        B: Strategy + 'static,
    {
        let shoe = Shoe::new(config.seed());
        let line = BattleLine::default();
        let (tx, rx) = unbounded_channel();
        let players = [
            Actor::spawn(Side::A, Box::new(a), shoe.clone(), line.clone(), tx.clone()),
            Actor::spawn(Side::B, Box::new(b), shoe.clone(), line.clone(), tx),
        ];
        Self::seat(config, shoe, line, players, rx)
    }
    fn seat(
        config: Config,
        shoe: Shoe,
        line: BattleLine,
        players: [UnboundedSender<Event>; N_SIDES],
        inbox: UnboundedReceiver<Message>,
    ) -> Self {
        let (screen, _) = watch::channel(line.snapshot());
        Self {
            config,
            shoe,
            line,
            players,
            inbox,
            screen,
            arbiter: Box::new(Undeclared),
            history: History::default(),
            halt: Arc::new(Notify::new()),
            active: Side::A,
            turn: 0,
            passes: 0,
        }
    }
    pub fn with_arbiter<T>(self, arbiter: T) -> Self
    where
        T: Arbiter + 'static,
    {
        Self {
            arbiter: Box::new(arbiter),
            ..self
        }
    }
    pub fn stopper(&self) -> Stopper {
        Stopper(self.halt.clone())
    }
    /// Snapshots published after every maintenance pass.
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.screen.subscribe()
    }
    pub fn line(&self) -> BattleLine {
        self.line.clone()
    }
    pub fn shoe(&self) -> Shoe {
        self.shoe.clone()
    }

    pub async fn run(mut self) -> Report {
        log::info!("[room] begin! seed {}", self.config.seed());
        self.deal();
        self.unicast(self.active, Event::YourTurn(self.turn));
        let mut tick = tokio::time::interval(self.config.tick().max(Duration::from_millis(1)));
        tick.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut deadline = Instant::now() + self.config.timeout();
        let ending = loop {
            tokio::select! {
                biased;
                _ = self.halt.notified() => break Ending::Stopped,
                message = self.inbox.recv() => match message {
                    None => break Ending::Abandoned,
                    Some(message) if self.is_current(&message) => {
                        self.handle(message);
                        deadline = Instant::now() + self.config.timeout();
                    }
                    Some(message) => self.ignore(message),
                },
                _ = tokio::time::sleep_until(deadline) => {
                    self.expire();
                    deadline = Instant::now() + self.config.timeout();
                }
                _ = tick.tick() => self.maintain(),
            }
            if self.is_stalled() {
                self.maintain();
            }
            if let Some(ending) = self.ending() {
                break ending;
            }
        };
        self.maintain();
        log::info!("[room] game over: {:?} after {} plays", ending, self.history.len());
        Report {
            ending,
            history: self.history,
            snapshot: self.line.snapshot(),
        }
    }
}

impl Room {
    fn deal(&self) {
        for _ in 0..self.config.opening() {
            for side in Side::all() {
                self.unicast(side, Event::Draw);
            }
        }
    }

    fn is_current(&self, message: &Message) -> bool {
        message.side == self.active && message.turn == self.turn
    }

    fn handle(&mut self, message: Message) {
        match message.reply {
            Reply::Play(play) => self.accept(message.side, play),
            Reply::Pass(pass) => self.pass(message.side, pass),
        }
    }

    fn accept(&mut self, side: Side, play: Play) {
        log::debug!("[room] got {} from {}", play, side);
        match self.line.play(play.stone, side, play.card) {
            Ok(()) => {
                let m = Move {
                    side,
                    card: play.card,
                    stone: play.stone,
                };
                self.history.record(m);
                self.passes = 0;
                self.unicast(side, Event::Draw);
                self.broadcast(Event::Played(m));
            }
            Err(rejection) => {
                log::warn!("[room] rejected {} from {}: {}", play, side, rejection);
                self.passes = 0;
                self.unicast(side, Event::Refund(play.card));
            }
        }
        self.advance();
    }

    fn pass(&mut self, side: Side, pass: Pass) {
        log::debug!("[room] {} passes: {:?}", side, pass);
        match pass {
            Pass::EmptyHand | Pass::LineClosed => self.passes += 1,
            Pass::Forfeit => self.passes = 0,
        }
        self.advance();
    }

    fn expire(&mut self) {
        log::warn!("[room] {} ran out of time on turn {}", self.active, self.turn);
        self.passes = 0;
        self.advance();
    }

    /// Replies from the idle player or for a finished turn are dropped.
    /// A dropped play's card goes back to its owner.
    fn ignore(&self, message: Message) {
        log::warn!(
            "[room] ignoring {:?} from {} for turn {} (now turn {})",
            message.reply,
            message.side,
            message.turn,
            self.turn
        );
        if let Reply::Play(play) = message.reply {
            self.unicast(message.side, Event::Refund(play.card));
        }
    }

    fn advance(&mut self) {
        self.active = self.active.other();
        self.turn += 1;
        log::debug!("[room] instructing {} to begin turn {}", self.active, self.turn);
        self.unicast(self.active, Event::YourTurn(self.turn));
    }

    fn maintain(&self) {
        for (stone, side) in self.line.update_stone_winners() {
            log::info!("[room] stone {} claimed by {}", stone, side);
        }
        self.screen.send_replace(self.line.snapshot());
    }

    fn is_stalled(&self) -> bool {
        self.passes >= N_SIDES
    }

    /// Reads the line as last swept. A stalled room must be swept first
    /// so the arbiter sees every decidable stone.
    fn ending(&self) -> Option<Ending> {
        self.arbiter
            .judge(&self.line.winners())
            .map(Ending::Verdict)
            .or_else(|| self.is_stalled().then_some(Ending::Stalled))
    }
}

impl Room {
    fn unicast(&self, side: Side, event: Event) {
        if let Err(e) = self.players[side.index()].send(event) {
            log::warn!("[room] failed unicast to {}: {:?}", side, e);
        }
    }
    fn broadcast(&self, event: Event) {
        Side::all()
            .into_iter()
            .for_each(|side| self.unicast(side, event));
    }
}

use super::event::*;
use super::hand::Hand;
use super::strategy::Strategy;
use crate::cards::Shoe;
use crate::line::BattleLine;
use crate::line::Side;
use tokio::sync::mpsc::*;

/// Runs one player in its own task.
///
/// - Room unicasts Draw, YourTurn and Refund to this actor only
/// - Actor owns the hand; nothing else ever touches it
/// - On YourTurn the actor asks its Strategy and replies Play or Pass
/// - Every event is forwarded to Strategy::notify after it is handled
pub struct Actor {
    side: Side,
    hand: Hand,
    shoe: Shoe,
    line: BattleLine,
    strategy: Box<dyn Strategy>,
    getter: UnboundedReceiver<Event>,
    sender: UnboundedSender<Message>,
}

impl Actor {
    pub fn spawn(
        side: Side,
        strategy: Box<dyn Strategy>,
        shoe: Shoe,
        line: BattleLine,
        sender: UnboundedSender<Message>,
    ) -> UnboundedSender<Event> {
        let (tx, rx) = unbounded_channel();
        let actor = Self {
            side,
            shoe,
            line,
            strategy,
            sender,
            hand: Hand::default(),
            getter: rx,
        };
        tokio::spawn(actor.run());
        tx
    }
    async fn run(mut self) {
        while let Some(event) = self.getter.recv().await {
            match event {
                Event::Draw => self.draw(),
                Event::YourTurn(turn) => self.act(turn).await,
                Event::Refund(card) => self.hand.add(card),
                Event::Played(_) => {}
            }
            self.strategy.notify(&event).await;
        }
        log::debug!("[actor] {} leaves the table", self.side);
    }
    fn draw(&mut self) {
        match self.shoe.draw() {
            Some(card) => {
                log::debug!("[actor] {} draws {}", self.side, card);
                self.hand.add(card);
            }
            None => log::warn!("[actor] no cards for {} to draw", self.side),
        }
    }
    async fn act(&mut self, turn: usize) {
        let reply = self.propose().await;
        let message = Message {
            side: self.side,
            turn,
            reply,
        };
        if let Err(e) = self.sender.send(message) {
            log::warn!("[actor] {} failed to reach the room: {:?}", self.side, e);
        }
    }
    async fn propose(&mut self) -> Reply {
        if self.hand.is_empty() {
            log::debug!("[actor] {} has no cards to play", self.side);
            return Reply::Pass(Pass::EmptyHand);
        }
        let open = self.line.open_stones(self.side);
        if open.is_empty() {
            log::debug!("[actor] {} has no open stones", self.side);
            return Reply::Pass(Pass::LineClosed);
        }
        let choice = self.strategy.decide(self.hand.cards(), &open).await;
        if !open.contains(&choice.stone) {
            log::warn!("[actor] {} chose closed stone {}", self.side, choice.stone);
            return Reply::Pass(Pass::Forfeit);
        }
        match self.hand.take(choice.card) {
            Some(card) => {
                let play = Play {
                    card,
                    stone: choice.stone,
                };
                log::debug!("[actor] {} to play {}", self.side, play);
                Reply::Play(play)
            }
            None => {
                log::warn!("[actor] {} chose missing card {}", self.side, choice.card);
                Reply::Pass(Pass::Forfeit)
            }
        }
    }
}

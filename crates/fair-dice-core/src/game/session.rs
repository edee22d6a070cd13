//! One game between the computer and a user.

use super::player::Player;
use super::types::{Actor, DieChoiceRequest, GameEvent, GameOutcome, GameReport};
use crate::dice::{DiceSet, Die, ProbabilityMatrix};
use crate::error::{FrgError, Result};
use crate::protocol::{FairValueNegotiator, NegotiationResult, RoundPurpose};
use tracing::info;

/// A game over a fixed dice set
pub struct Game {
    dice: DiceSet,
    matrix: ProbabilityMatrix,
    negotiator: FairValueNegotiator,
}

impl Game {
    pub fn new(dice: DiceSet) -> Self {
        let matrix = dice.probability_matrix();
        Self {
            dice,
            matrix,
            negotiator: FairValueNegotiator::new(),
        }
    }

    pub fn dice(&self) -> &DiceSet {
        &self.dice
    }

    pub fn matrix(&self) -> &ProbabilityMatrix {
        &self.matrix
    }

    /// Play one game. Runs three negotiation rounds: move order, the user's
    /// roll and the computer's roll.
    pub async fn play<P>(&self, player: &mut P) -> Result<GameReport>
    where
        P: Player + ?Sized,
    {
        let mut rounds = Vec::with_capacity(3);

        // Value 0 hands the first pick to the user.
        let order = self.round(RoundPurpose::FirstMove, 1, player).await?;
        let first_mover = if order.value == 0 {
            Actor::User
        } else {
            Actor::Computer
        };
        rounds.push(order);
        info!(%first_mover, "Move order decided");
        player.observe(&GameEvent::FirstMove { actor: first_mover });

        let (user_index, computer_index) = match first_mover {
            Actor::User => {
                let user = self.user_pick(player, None).await?;
                let computer = self.computer_pick(player, Some(user))?;
                (user, computer)
            }
            Actor::Computer => {
                let computer = self.computer_pick(player, None)?;
                let user = self.user_pick(player, Some(computer)).await?;
                (user, computer)
            }
        };
        let user_die = self.die(user_index)?.clone();
        let computer_die = self.die(computer_index)?.clone();

        let (user_roll, user_face) = self
            .roll(RoundPurpose::UserRoll, Actor::User, &user_die, player)
            .await?;
        rounds.push(user_roll);
        let (computer_roll, computer_face) = self
            .roll(RoundPurpose::ComputerRoll, Actor::Computer, &computer_die, player)
            .await?;
        rounds.push(computer_roll);

        let outcome = GameOutcome::from_faces(user_face, computer_face);
        info!(user_face, computer_face, %outcome, "Game finished");

        let report = GameReport {
            first_mover,
            user_win_probability: self.matrix.cell(user_index, computer_index).unwrap_or(0.0),
            user_die,
            computer_die,
            user_face,
            computer_face,
            outcome,
            rounds,
        };
        player.observe(&GameEvent::Finished {
            report: report.clone(),
        });
        Ok(report)
    }

    async fn round<P>(
        &self,
        purpose: RoundPurpose,
        max: u64,
        player: &mut P,
    ) -> Result<NegotiationResult>
    where
        P: Player + ?Sized,
    {
        let result = self.negotiator.negotiate(purpose, max, player).await?;
        player.observe(&GameEvent::RoundRevealed {
            result: result.clone(),
        });
        Ok(result)
    }

    async fn roll<P>(
        &self,
        purpose: RoundPurpose,
        actor: Actor,
        die: &Die,
        player: &mut P,
    ) -> Result<(NegotiationResult, i64)>
    where
        P: Player + ?Sized,
    {
        let result = self.round(purpose, die.max_index(), player).await?;
        let face = die.result_for_index(result.value);
        player.observe(&GameEvent::Rolled {
            actor,
            index: result.value,
            face,
        });
        Ok((result, face))
    }

    async fn user_pick<P>(&self, player: &mut P, computer: Option<usize>) -> Result<usize>
    where
        P: Player + ?Sized,
    {
        let request = DieChoiceRequest {
            available: self
                .dice
                .iter()
                .enumerate()
                .filter(|(i, _)| Some(*i) != computer)
                .map(|(i, d)| (i, d.clone()))
                .collect(),
            computer_die: computer.and_then(|i| self.dice.get(i).cloned()),
        };
        let index = player.choose_die(&request).await?;
        if !request.allows(index) {
            return Err(FrgError::violation(format!("die {index} is not available")));
        }
        let die = self.die(index)?.clone();
        info!(index, %die, "User selected die");
        player.observe(&GameEvent::DieSelected {
            actor: Actor::User,
            index,
            die,
        });
        Ok(index)
    }

    /// Going second: the best answer to the user's die. Going first: the die
    /// whose worst matchup is best.
    fn computer_pick<P>(&self, player: &mut P, user: Option<usize>) -> Result<usize>
    where
        P: Player + ?Sized,
    {
        let choice = match user {
            Some(u) => self.matrix.best_response(u, &[u]),
            None => self.matrix.maximin_choice(),
        };
        let index = choice.ok_or_else(|| FrgError::config("no die left for the computer"))?;
        let die = self.die(index)?.clone();
        info!(index, %die, "Computer selected die");
        player.observe(&GameEvent::DieSelected {
            actor: Actor::Computer,
            index,
            die,
        });
        Ok(index)
    }

    fn die(&self, index: usize) -> Result<&Die> {
        self.dice
            .get(index)
            .ok_or_else(|| FrgError::violation(format!("no die at index {index}")))
    }
}

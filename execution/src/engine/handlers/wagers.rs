use plunder_types::{
    Amount, CoinSide, CommandError, DuelOutcome, DuelRound, Event, GameError, GridRound,
    RoundAction, RoundId, UserId,
};
use tracing::{info, warn};

use crate::engine::{Engine, Round};
use crate::games::{coinflip, duel, grid};
use crate::state::Store;

impl<S: Store> Engine<S> {
    pub(in crate::engine) fn handle_coinflip(
        &mut self,
        actor: &UserId,
        now: u64,
        side: CoinSide,
        amount: Amount,
    ) -> Result<Vec<Event>, CommandError> {
        let mut account = self.account(actor);
        let bet = Self::resolve_positive(amount, account.balances.wallet)?;
        Self::ensure_funds(account.balances.wallet, bet)?;

        let landed = coinflip::toss(&mut self.rng);
        let delta = coinflip::delta(side, landed, bet, account.booster_factor(now));
        account.balances.wallet = account.balances.wallet.saturating_add(delta);
        let wallet = account.balances.wallet;
        self.store.put(actor, account);
        info!(user = %actor, bet, delta, "coinflip resolved");

        Ok(vec![Event::CoinflipResolved {
            user: actor.clone(),
            side,
            landed,
            delta,
            wallet,
        }])
    }

    pub(in crate::engine) fn handle_mines(
        &mut self,
        actor: &UserId,
        now: u64,
        bet: Amount,
    ) -> Result<Vec<Event>, CommandError> {
        let account = self.account(actor);
        let bet = Self::resolve_positive(bet, account.balances.wallet)?;
        Self::ensure_funds(account.balances.wallet, bet)?;

        let id = self.allocate_round_id();
        let round = grid::deal(id, actor.clone(), bet, now, &mut self.rng);
        self.rounds.insert(id, Round::Grid(round));
        info!(user = %actor, round = id, bet, "grid round opened");

        Ok(vec![Event::GridOpened {
            id,
            player: actor.clone(),
            bet,
        }])
    }

    pub(in crate::engine) fn handle_duel(
        &mut self,
        actor: &UserId,
        now: u64,
        opponent: &UserId,
        bet: Amount,
    ) -> Result<Vec<Event>, CommandError> {
        if opponent == actor {
            return Err(CommandError::SelfTarget);
        }

        let challenger = self.account(actor);
        let challenged = self.account(opponent);
        let bet = Self::resolve_positive(bet, challenger.balances.wallet)?;
        // Both sides must be able to cover the stake up front.
        Self::ensure_funds(challenger.balances.wallet, bet)?;
        Self::ensure_funds(challenged.balances.wallet, bet)?;

        let id = self.allocate_round_id();
        let round = duel::propose(id, actor.clone(), opponent.clone(), bet, now);
        self.rounds.insert(id, Round::Duel(round));
        info!(challenger = %actor, opponent = %opponent, round = id, bet, "duel proposed");

        Ok(vec![Event::DuelProposed {
            id,
            challenger: actor.clone(),
            opponent: opponent.clone(),
            bet,
        }])
    }

    pub(in crate::engine) fn handle_round_action(
        &mut self,
        actor: &UserId,
        now: u64,
        id: RoundId,
        action: RoundAction,
    ) -> Result<Vec<Event>, CommandError> {
        let round = self
            .rounds
            .remove(&id)
            .ok_or(CommandError::RoundNotFound(id))?;
        match round {
            Round::Grid(round) => self.grid_action(actor, now, id, round, action),
            Round::Duel(round) => self.duel_action(actor, id, round, action),
        }
    }

    fn grid_action(
        &mut self,
        actor: &UserId,
        now: u64,
        id: RoundId,
        mut round: GridRound,
        action: RoundAction,
    ) -> Result<Vec<Event>, CommandError> {
        // Inputs from anyone but the player are silently ignored.
        if round.player != *actor {
            self.rounds.insert(id, Round::Grid(round));
            return Ok(vec![]);
        }

        match action {
            RoundAction::Reveal(cell) => match grid::reveal(&mut round, cell) {
                Ok(grid::Reveal::Safe {
                    revealed_count,
                    multiplier_bps,
                }) => {
                    self.rounds.insert(id, Round::Grid(round));
                    Ok(vec![Event::CellRevealed {
                        id,
                        cell,
                        revealed_count,
                        multiplier_bps,
                    }])
                }
                Ok(grid::Reveal::Hazard) => {
                    let mut account = self.account(actor);
                    account.balances.wallet -= round.bet;
                    let wallet = account.balances.wallet;
                    self.store.put(actor, account);
                    info!(user = %actor, round = id, bet = round.bet, "grid round busted");

                    Ok(vec![Event::GridBusted {
                        id,
                        player: actor.clone(),
                        bet: round.bet,
                        wallet,
                    }])
                }
                Err(err) => {
                    self.rounds.insert(id, Round::Grid(round));
                    Err(err.into())
                }
            },
            RoundAction::CashOut => {
                let mut account = self.account(actor);
                let boosted = account.booster_active(now);
                match grid::cash_out(&mut round, account.booster_factor(now)) {
                    Ok(net) => {
                        account.balances.wallet = account.balances.wallet.saturating_add(net);
                        let wallet = account.balances.wallet;
                        let multiplier_bps = round.multiplier_bps();
                        self.store.put(actor, account);
                        info!(user = %actor, round = id, net, "grid round cashed out");

                        Ok(vec![Event::GridCashedOut {
                            id,
                            player: actor.clone(),
                            net,
                            multiplier_bps,
                            boosted,
                            wallet,
                        }])
                    }
                    Err(err) => {
                        self.rounds.insert(id, Round::Grid(round));
                        Err(err.into())
                    }
                }
            }
            RoundAction::Accept | RoundAction::Decline | RoundAction::Choose(_) => {
                self.rounds.insert(id, Round::Grid(round));
                Err(GameError::WrongPhase.into())
            }
        }
    }

    fn duel_action(
        &mut self,
        actor: &UserId,
        id: RoundId,
        mut round: DuelRound,
        action: RoundAction,
    ) -> Result<Vec<Event>, CommandError> {
        // Inputs from anyone outside the pairing are silently ignored.
        if !round.is_participant(actor) {
            self.rounds.insert(id, Round::Duel(round));
            return Ok(vec![]);
        }

        match action {
            RoundAction::Accept => match duel::accept(&mut round, actor) {
                Ok(()) => {
                    self.rounds.insert(id, Round::Duel(round));
                    Ok(vec![Event::DuelAccepted { id }])
                }
                // The challenger pressing their own challenge's controls is
                // ignored, matching the unauthorized-input rule.
                Err(GameError::NotAParticipant) => {
                    self.rounds.insert(id, Round::Duel(round));
                    Ok(vec![])
                }
                Err(err) => {
                    self.rounds.insert(id, Round::Duel(round));
                    Err(err.into())
                }
            },
            RoundAction::Decline => match duel::decline(&mut round, actor) {
                Ok(()) => {
                    info!(round = id, "duel declined");
                    Ok(vec![Event::DuelDeclined { id }])
                }
                Err(GameError::NotAParticipant) => {
                    self.rounds.insert(id, Round::Duel(round));
                    Ok(vec![])
                }
                Err(err) => {
                    self.rounds.insert(id, Round::Duel(round));
                    Err(err.into())
                }
            },
            RoundAction::Choose(choice) => match duel::choose(&mut round, actor, choice) {
                Ok(None) => {
                    self.rounds.insert(id, Round::Duel(round));
                    Ok(vec![Event::DuelChoiceRecorded {
                        id,
                        user: actor.clone(),
                    }])
                }
                Ok(Some(verdict)) => {
                    let outcome = self.settle_duel(&round, verdict);
                    info!(round = id, ?verdict, "duel settled");
                    Ok(vec![Event::DuelSettled { id, outcome }])
                }
                // A recorded choice is final; repeats are dropped quietly.
                Err(GameError::ChoiceAlreadyRecorded) => {
                    self.rounds.insert(id, Round::Duel(round));
                    Ok(vec![])
                }
                Err(err) => {
                    self.rounds.insert(id, Round::Duel(round));
                    Err(err.into())
                }
            },
            RoundAction::Reveal(_) | RoundAction::CashOut => {
                self.rounds.insert(id, Round::Duel(round));
                Err(GameError::WrongPhase.into())
            }
        }
    }

    fn settle_duel(&mut self, round: &DuelRound, verdict: duel::Verdict) -> DuelOutcome {
        let (winner, loser) = match verdict {
            duel::Verdict::Draw => return DuelOutcome::Draw,
            duel::Verdict::ChallengerWins => (&round.challenger, &round.opponent),
            duel::Verdict::OpponentWins => (&round.opponent, &round.challenger),
        };

        let mut winner_account = self.account(winner);
        let mut loser_account = self.account(loser);
        winner_account.balances.wallet = winner_account.balances.wallet.saturating_add(round.bet);
        // Funds were only checked at challenge time; a loser who spent down
        // in the meantime goes negative here.
        if loser_account.balances.wallet < round.bet {
            warn!(loser = %loser, bet = round.bet, "duel settled against a drained wallet");
        }
        loser_account.balances.wallet -= round.bet;
        self.store.put(winner, winner_account);
        self.store.put(loser, loser_account);

        DuelOutcome::Won {
            winner: winner.clone(),
            loser: loser.clone(),
            amount: round.bet,
        }
    }
}

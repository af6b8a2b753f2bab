//! Rock-paper-scissors duel.
//!
//! A challenge waits for the opponent to accept or decline. Once accepted,
//! each participant records one immutable choice; the round settles when
//! both are in. The bet moves loser to winner only at settlement.

use plunder_types::{DuelChoice, DuelPhase, DuelRound, GameError, RoundId, UserId};

/// Settlement verdict once both choices are recorded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Draw,
    ChallengerWins,
    OpponentWins,
}

pub fn propose(
    id: RoundId,
    challenger: UserId,
    opponent: UserId,
    bet: i64,
    created_at: u64,
) -> DuelRound {
    DuelRound {
        id,
        challenger,
        opponent,
        bet,
        phase: DuelPhase::AwaitingAcceptance,
        challenger_choice: None,
        opponent_choice: None,
        created_at,
    }
}

/// Only the challenged party may accept.
pub fn accept(round: &mut DuelRound, actor: &UserId) -> Result<(), GameError> {
    if round.is_complete() {
        return Err(GameError::RoundComplete);
    }
    if *actor != round.opponent {
        return Err(GameError::NotAParticipant);
    }
    if round.phase != DuelPhase::AwaitingAcceptance {
        return Err(GameError::WrongPhase);
    }
    round.phase = DuelPhase::AwaitingChoices;
    Ok(())
}

/// Only the challenged party may decline; terminal, no transfer.
pub fn decline(round: &mut DuelRound, actor: &UserId) -> Result<(), GameError> {
    if round.is_complete() {
        return Err(GameError::RoundComplete);
    }
    if *actor != round.opponent {
        return Err(GameError::NotAParticipant);
    }
    if round.phase != DuelPhase::AwaitingAcceptance {
        return Err(GameError::WrongPhase);
    }
    round.phase = DuelPhase::Declined;
    Ok(())
}

/// Record a participant's choice. Returns the verdict when this was the
/// second choice; the first recorded choice per participant is final.
pub fn choose(
    round: &mut DuelRound,
    actor: &UserId,
    choice: DuelChoice,
) -> Result<Option<Verdict>, GameError> {
    if round.is_complete() {
        return Err(GameError::RoundComplete);
    }
    if round.phase != DuelPhase::AwaitingChoices {
        return Err(GameError::WrongPhase);
    }
    if !round.is_participant(actor) {
        return Err(GameError::NotAParticipant);
    }

    let slot = if *actor == round.challenger {
        &mut round.challenger_choice
    } else {
        &mut round.opponent_choice
    };
    if slot.is_some() {
        return Err(GameError::ChoiceAlreadyRecorded);
    }
    *slot = Some(choice);

    match (round.challenger_choice, round.opponent_choice) {
        (Some(challenger), Some(opponent)) => {
            round.phase = DuelPhase::Settled;
            Ok(Some(verdict(challenger, opponent)))
        }
        _ => Ok(None),
    }
}

fn verdict(challenger: DuelChoice, opponent: DuelChoice) -> Verdict {
    if challenger == opponent {
        Verdict::Draw
    } else if challenger.beats(opponent) {
        Verdict::ChallengerWins
    } else {
        Verdict::OpponentWins
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> UserId {
        UserId::from("alice")
    }

    fn bob() -> UserId {
        UserId::from("bob")
    }

    fn accepted_round() -> DuelRound {
        let mut round = propose(1, alice(), bob(), 100, 0);
        accept(&mut round, &bob()).unwrap();
        round
    }

    #[test]
    fn test_only_opponent_accepts() {
        let mut round = propose(1, alice(), bob(), 100, 0);
        assert!(matches!(
            accept(&mut round, &alice()),
            Err(GameError::NotAParticipant)
        ));
        assert!(matches!(
            accept(&mut round, &UserId::from("carol")),
            Err(GameError::NotAParticipant)
        ));
        accept(&mut round, &bob()).unwrap();
        assert_eq!(round.phase, DuelPhase::AwaitingChoices);
    }

    #[test]
    fn test_decline_is_terminal() {
        let mut round = propose(1, alice(), bob(), 100, 0);
        decline(&mut round, &bob()).unwrap();
        assert_eq!(round.phase, DuelPhase::Declined);
        assert!(round.is_complete());
        assert!(matches!(
            choose(&mut round, &alice(), DuelChoice::Rock),
            Err(GameError::RoundComplete)
        ));
    }

    #[test]
    fn test_choose_requires_acceptance_first() {
        let mut round = propose(1, alice(), bob(), 100, 0);
        assert!(matches!(
            choose(&mut round, &alice(), DuelChoice::Rock),
            Err(GameError::WrongPhase)
        ));
    }

    #[test]
    fn test_first_choice_is_immutable() {
        let mut round = accepted_round();
        assert_eq!(choose(&mut round, &alice(), DuelChoice::Rock).unwrap(), None);
        assert!(matches!(
            choose(&mut round, &alice(), DuelChoice::Paper),
            Err(GameError::ChoiceAlreadyRecorded)
        ));
        assert_eq!(round.challenger_choice, Some(DuelChoice::Rock));
    }

    #[test]
    fn test_outsider_choice_rejected() {
        let mut round = accepted_round();
        assert!(matches!(
            choose(&mut round, &UserId::from("carol"), DuelChoice::Rock),
            Err(GameError::NotAParticipant)
        ));
    }

    #[test]
    fn test_second_choice_settles() {
        let mut round = accepted_round();
        assert_eq!(choose(&mut round, &bob(), DuelChoice::Scissors).unwrap(), None);
        let verdict = choose(&mut round, &alice(), DuelChoice::Rock)
            .unwrap()
            .unwrap();
        // Rock beats scissors: the challenger takes it.
        assert_eq!(verdict, Verdict::ChallengerWins);
        assert_eq!(round.phase, DuelPhase::Settled);
        assert!(matches!(
            choose(&mut round, &alice(), DuelChoice::Rock),
            Err(GameError::RoundComplete)
        ));
    }

    #[test]
    fn test_equal_choices_draw() {
        let mut round = accepted_round();
        choose(&mut round, &alice(), DuelChoice::Rock).unwrap();
        let verdict = choose(&mut round, &bob(), DuelChoice::Rock).unwrap().unwrap();
        assert_eq!(verdict, Verdict::Draw);
    }

    #[test]
    fn test_verdict_covers_every_matchup() {
        use DuelChoice::*;
        let cases = [
            (Rock, Scissors, Verdict::ChallengerWins),
            (Scissors, Paper, Verdict::ChallengerWins),
            (Paper, Rock, Verdict::ChallengerWins),
            (Scissors, Rock, Verdict::OpponentWins),
            (Paper, Scissors, Verdict::OpponentWins),
            (Rock, Paper, Verdict::OpponentWins),
            (Rock, Rock, Verdict::Draw),
            (Paper, Paper, Verdict::Draw),
            (Scissors, Scissors, Verdict::Draw),
        ];
        for (challenger, opponent, expected) in cases {
            assert_eq!(verdict(challenger, opponent), expected);
        }
    }
}

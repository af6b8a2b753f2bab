use plunder_types::{CommandError, Event, Partnership, UserId};
use tracing::info;

use crate::engine::Engine;
use crate::state::Store;

impl<S: Store> Engine<S> {
    pub(in crate::engine) fn handle_marry(
        &mut self,
        actor: &UserId,
        now: u64,
        partner: &UserId,
    ) -> Result<Vec<Event>, CommandError> {
        if partner == actor {
            return Err(CommandError::SelfTarget);
        }

        let mut account = self.account(actor);
        let mut other = self.account(partner);
        if account.partnership.is_some() {
            return Err(CommandError::AlreadyMarried);
        }
        if other.partnership.is_some() {
            return Err(CommandError::PartnerAlreadyMarried);
        }

        account.partnership = Some(Partnership {
            partner: partner.clone(),
            married_at: now,
        });
        other.partnership = Some(Partnership {
            partner: actor.clone(),
            married_at: now,
        });
        self.store.put(actor, account);
        self.store.put(partner, other);
        info!(user = %actor, partner = %partner, "married");

        Ok(vec![Event::Married {
            user: actor.clone(),
            partner: partner.clone(),
            married_at: now,
        }])
    }

    pub(in crate::engine) fn handle_divorce(
        &mut self,
        actor: &UserId,
    ) -> Result<Vec<Event>, CommandError> {
        let mut account = self.account(actor);
        let partnership = account
            .partnership
            .take()
            .ok_or(CommandError::NotMarried)?;

        let partner = partnership.partner;
        let mut other = self.account(&partner);
        other.partnership = None;
        self.store.put(actor, account);
        self.store.put(&partner, other);
        info!(user = %actor, partner = %partner, "divorced");

        Ok(vec![Event::Divorced {
            user: actor.clone(),
            partner,
        }])
    }
}

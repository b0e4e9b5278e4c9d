//! Passive penalty tick processing

use super::{PassiveAction, PassivePenalty};
use crate::hero::Hero;
use tracing::debug;

impl Hero {
    /// Install a passive penalty lasting `rounds` ticks.
    ///
    /// A pending finish action of the previous penalty runs first, so a
    /// replaced effect always completes its cleanup.
    pub fn set_passive_penalty(
        &mut self,
        rounds: u32,
        action: Option<PassiveAction>,
        finish: Option<PassiveAction>,
    ) {
        if let Some(previous) = self.passive.finish.take() {
            previous.apply(self);
        }

        self.passive = PassivePenalty {
            rounds,
            action,
            finish,
            just_ended: false,
        };
    }

    /// Run one round of the current passive penalty
    pub fn apply_passive_penalty(&mut self) {
        if self.passive.just_ended {
            debug!(hero = %self, "passive penalty expired");
            self.set_passive_penalty(0, None, None);
        }

        if self.passive.rounds != 0 {
            if let Some(action) = self.passive.action {
                if !self.is_dead() {
                    action.apply(self);
                }
            }

            self.passive.rounds -= 1;
            if self.passive.rounds == 0 {
                self.passive.just_ended = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::passive::{PassiveAction, PassiveState};
    use crate::hero::Hero;
    use crate::types::{HeroId, HeroKind};

    fn make_knight() -> Hero {
        Hero::new(HeroId(0), HeroKind::Knight)
    }

    #[test]
    fn test_action_runs_once_per_active_round() {
        let mut hero = make_knight();
        hero.set_stunned(true);
        hero.set_passive_penalty(
            2,
            Some(PassiveAction::Damage { amount: 10 }),
            Some(PassiveAction::Unstun),
        );
        assert_eq!(hero.passive_penalty().state(), PassiveState::Active);

        hero.apply_passive_penalty();
        assert_eq!(hero.damage_taken(), 10);
        hero.apply_passive_penalty();
        assert_eq!(hero.damage_taken(), 20);
        assert_eq!(hero.passive_penalty().state(), PassiveState::Expiring);
        // Finish has not run yet
        assert!(hero.is_stunned());

        hero.apply_passive_penalty();
        // No third action, finish ran exactly once
        assert_eq!(hero.damage_taken(), 20);
        assert!(!hero.is_stunned());
        assert_eq!(hero.passive_penalty().state(), PassiveState::Inactive);

        hero.set_stunned(true);
        hero.apply_passive_penalty();
        assert_eq!(hero.damage_taken(), 20);
        assert!(hero.is_stunned());
    }

    #[test]
    fn test_replacement_runs_previous_finish() {
        let mut hero = make_knight();
        hero.set_stunned(true);
        hero.set_passive_penalty(3, None, Some(PassiveAction::Unstun));

        hero.set_passive_penalty(2, Some(PassiveAction::Damage { amount: 5 }), None);
        assert!(!hero.is_stunned());
        assert_eq!(hero.passive_penalty().rounds_remaining(), 2);
        assert_eq!(hero.passive_penalty().finish(), None);
    }

    #[test]
    fn test_dead_hero_skips_action_but_counts_down() {
        let mut hero = make_knight();
        hero.set_passive_penalty(1, Some(PassiveAction::Damage { amount: 50 }), None);
        let _ = hero.set_hp(0);

        hero.apply_passive_penalty();
        assert_eq!(hero.damage_taken(), 0);
        assert_eq!(hero.passive_penalty().state(), PassiveState::Expiring);
    }

    #[test]
    fn test_absent_actions_are_skipped() {
        let mut hero = make_knight();
        hero.set_passive_penalty(1, None, None);
        hero.apply_passive_penalty();
        hero.apply_passive_penalty();
        assert_eq!(hero.passive_penalty().state(), PassiveState::Inactive);
        assert_eq!(hero.damage_taken(), 0);
    }

    #[test]
    fn test_stun_and_damage_keeps_stun() {
        let mut hero = make_knight();
        hero.set_passive_penalty(
            2,
            Some(PassiveAction::StunAndDamage { amount: 7 }),
            Some(PassiveAction::Unstun),
        );

        hero.apply_passive_penalty();
        assert!(hero.is_stunned());
        hero.apply_passive_penalty();
        assert!(hero.is_stunned());
        assert_eq!(hero.damage_taken(), 14);

        hero.apply_passive_penalty();
        assert!(!hero.is_stunned());
    }
}

//! RoundReport - outcome of one round of play

use crate::types::{EntityRef, HeroId};
use serde::{Deserialize, Serialize};

/// Everything that changed while a round was resolved
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoundReport {
    pub round: u32,

    // === Damage ===
    /// Pending damage committed to HP at the end of the round
    pub damage_committed: Vec<DamageCommitted>,

    // === Lifecycle ===
    pub deaths: Vec<Death>,
    pub kill_bonuses: Vec<KillBonus>,
    pub level_ups: Vec<LevelUp>,
}

impl RoundReport {
    pub fn new(round: u32) -> Self {
        RoundReport {
            round,
            ..Default::default()
        }
    }

    /// Total damage committed this round
    pub fn total_damage(&self) -> i32 {
        self.damage_committed.iter().map(|d| d.amount).sum()
    }

    /// Damage committed to one hero
    pub fn damage_to(&self, hero: HeroId) -> Option<&DamageCommitted> {
        self.damage_committed.iter().find(|d| d.hero == hero)
    }

    pub fn died(&self, hero: HeroId) -> bool {
        self.deaths.iter().any(|d| d.victim == hero)
    }

    /// Get a summary string
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();

        if self.total_damage() > 0 {
            parts.push(format!("{} damage dealt", self.total_damage()));
        }

        if !self.deaths.is_empty() {
            parts.push(format!("{} killed", self.deaths.len()));
        }

        let xp: i32 = self.kill_bonuses.iter().map(|k| k.xp).sum();
        if xp > 0 {
            parts.push(format!("{} bonus XP", xp));
        }

        if !self.level_ups.is_empty() {
            parts.push(format!("{} leveled up", self.level_ups.len()));
        }

        if parts.is_empty() {
            format!("Round {}: quiet", self.round)
        } else {
            format!("Round {}: {}", self.round, parts.join(", "))
        }
    }
}

/// Damage committed to a single hero
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DamageCommitted {
    pub hero: HeroId,
    pub amount: i32,
    pub hp_before: i32,
    pub hp_after: i32,
}

/// A hero whose HP dropped to zero or below
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Death {
    pub victim: HeroId,
    pub attacker: Option<EntityRef>,
}

/// XP awarded to a killer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KillBonus {
    pub killer: HeroId,
    pub victim: HeroId,
    pub xp: i32,
}

/// Levels gained during the end-of-round level check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelUp {
    pub hero: HeroId,
    pub levels: u32,
    pub new_level: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_totals() {
        let mut report = RoundReport::new(3);
        report.damage_committed.push(DamageCommitted {
            hero: HeroId(0),
            amount: 120,
            hp_before: 900,
            hp_after: 780,
        });
        report.damage_committed.push(DamageCommitted {
            hero: HeroId(1),
            amount: 49,
            hp_before: 600,
            hp_after: 551,
        });

        assert_eq!(report.total_damage(), 169);
        assert_eq!(report.damage_to(HeroId(1)).map(|d| d.hp_after), Some(551));
        assert!(report.damage_to(HeroId(2)).is_none());
    }

    #[test]
    fn test_quiet_summary() {
        let report = RoundReport::new(1);
        assert_eq!(report.summary(), "Round 1: quiet");
    }

    #[test]
    fn test_killing_summary() {
        let mut report = RoundReport::new(2);
        report.deaths.push(Death {
            victim: HeroId(1),
            attacker: Some(EntityRef::Hero(HeroId(0))),
        });
        report.kill_bonuses.push(KillBonus {
            killer: HeroId(0),
            victim: HeroId(1),
            xp: 200,
        });

        let summary = report.summary();
        assert!(summary.contains("1 killed"));
        assert!(summary.contains("200 bonus XP"));
        assert!(report.died(HeroId(1)));
    }
}

use crate::{EnemyRule, PlayerRule};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Phase {
    Drafting,
    Resolving,
    RoundEnd,
    Reset,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub health: i64,
    pub max_health: i64,
    pub shield: i64,
    pub pentacles: i64,
}

impl Player {
    pub fn new(rule: &PlayerRule) -> Self {
        Self {
            health: rule.max_health,
            max_health: rule.max_health,
            shield: 0,
            pentacles: rule.starting_pentacles,
        }
    }

    pub fn heal(&mut self, amount: i64) {
        self.health = (self.health + amount.max(0)).min(self.max_health);
    }

    pub fn take_damage(&mut self, amount: i64) {
        self.health = (self.health - amount.max(0)).max(0);
    }

    pub fn is_defeated(&self) -> bool {
        self.health <= 0
    }

    pub fn missing_health(&self) -> i64 {
        (self.max_health - self.health).max(0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Enemy {
    #[serde(default)]
    pub name: Option<String>,
    pub health: i64,
    pub damage: i64,
    pub baseline_health: i64,
}

impl Enemy {
    pub fn from_rule(rule: &EnemyRule) -> Self {
        Self {
            name: rule.name.clone(),
            health: rule.health,
            damage: rule.damage,
            baseline_health: rule.health,
        }
    }

    pub fn is_defeated(&self) -> bool {
        self.health <= 0
    }

    pub fn display_name(&self, index: usize) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| format!("Enemy {}", index + 1))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EnemyRoster {
    pub enemies: Vec<Enemy>,
    pub current: usize,
}

impl EnemyRoster {
    pub fn from_rules(rules: &[EnemyRule]) -> Self {
        Self {
            enemies: rules.iter().map(Enemy::from_rule).collect(),
            current: 0,
        }
    }

    /// Validated configs never build an empty roster.
    pub fn current(&self) -> &Enemy {
        &self.enemies[self.current]
    }

    pub fn current_mut(&mut self) -> &mut Enemy {
        &mut self.enemies[self.current]
    }

    pub fn len(&self) -> usize {
        self.enemies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enemies.is_empty()
    }

    pub fn has_next(&self) -> bool {
        self.current + 1 < self.enemies.len()
    }

    /// Moves the cursor forward; false when the roster is exhausted.
    pub fn advance(&mut self) -> bool {
        if self.has_next() {
            self.current += 1;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        for enemy in &mut self.enemies {
            enemy.health = enemy.baseline_health;
        }
        self.current = 0;
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CombatState {
    pub player: Player,
    pub roster: EnemyRoster,
}

impl CombatState {
    pub fn new(player: &PlayerRule, enemies: &[EnemyRule]) -> Self {
        Self {
            player: Player::new(player),
            roster: EnemyRoster::from_rules(enemies),
        }
    }

    pub fn enemy(&self) -> &Enemy {
        self.roster.current()
    }

    pub fn enemy_mut(&mut self) -> &mut Enemy {
        self.roster.current_mut()
    }
}

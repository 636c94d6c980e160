//! Core game state for Monster Hunt: the stage, the hero, the monster and the
//! catch counter, plus the update step that moves, clamps and scores.

use crate::config::GameConfig;
use crate::state::input::{Direction, InputState};

/// Uniform draws in `[0, 1)`. Production uses `Math.random`; tests seed their own.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct MathRandom;

impl RandomSource for MathRandom {
    fn next_unit(&mut self) -> f64 {
        js_sys::Math::random()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stage {
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hero {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Pixels per second at a modifier of 1.0.
    pub speed: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Monster {
    pub x: f64,
    pub y: f64,
    /// Sprite size only; overlap uses `GameState::collision_box`.
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub stage: Stage,
    pub hero: Hero,
    pub monster: Monster,
    pub monsters_caught: u32,
    pub collision_box: f64,
    pub monster_inset: f64,
}

impl GameState {
    pub fn new(config: &GameConfig, rng: &mut impl RandomSource) -> Self {
        let mut state = Self {
            stage: Stage {
                width: config.stage_width,
                height: config.stage_height,
            },
            hero: Hero {
                x: 0.0,
                y: 0.0,
                width: config.hero.width,
                height: config.hero.height,
                speed: config.hero.speed,
            },
            monster: Monster {
                x: 0.0,
                y: 0.0,
                width: config.monster.width,
                height: config.monster.height,
            },
            monsters_caught: 0,
            collision_box: config.collision_box,
            monster_inset: config.monster_inset,
        };
        state.reset(rng);
        state
    }

    /// Hero back to the stage centre, monster thrown somewhere new.
    pub fn reset(&mut self, rng: &mut impl RandomSource) {
        self.hero.x = self.stage.width / 2.0;
        self.hero.y = self.stage.height / 2.0;
        self.relocate_monster(rng);
    }

    /// One simulation step. Returns true when the hero caught the monster.
    pub fn update(&mut self, input: &InputState, modifier: f64, rng: &mut impl RandomSource) -> bool {
        let step = self.hero.speed * modifier;
        if Direction::Up.is_held(input) {
            self.hero.y -= step;
        }
        if Direction::Down.is_held(input) {
            self.hero.y += step;
        }
        if Direction::Left.is_held(input) {
            self.hero.x -= step;
        }
        if Direction::Right.is_held(input) {
            self.hero.x += step;
        }
        self.clamp_hero();
        log::trace!("hero at ({:.1}, {:.1})", self.hero.x, self.hero.y);

        if self.collide() {
            self.monsters_caught = self.monsters_caught.saturating_add(1);
            self.relocate_monster(rng);
            log::debug!(
                "monster caught ({} total), respawned at ({:.1}, {:.1})",
                self.monsters_caught,
                self.monster.x,
                self.monster.y
            );
            return true;
        }
        false
    }

    pub fn clamp_hero(&mut self) {
        let max_x = self.stage.width - self.hero.width;
        let max_y = self.stage.height - self.hero.height;
        self.hero.x = self.hero.x.max(0.0).min(max_x);
        self.hero.y = self.hero.y.max(0.0).min(max_y);
    }

    /// Inclusive overlap of two `collision_box`-sided squares anchored at the
    /// hero and monster positions.
    pub fn collide(&self) -> bool {
        let b = self.collision_box;
        let (h, m) = (&self.hero, &self.monster);
        h.x <= m.x + b && m.x <= h.x + b && h.y <= m.y + b && m.y <= h.y + b
    }

    pub fn relocate_monster(&mut self, rng: &mut impl RandomSource) {
        let inset = self.monster_inset;
        self.monster.x = inset + rng.next_unit() * (self.stage.width - 2.0 * inset);
        self.monster.y = inset + rng.next_unit() * (self.stage.height - 2.0 * inset);
    }
}

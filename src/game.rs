//! The single context object the browser callbacks mutate: game state, key
//! state, loop driver and sprites, with one entry point per callback.

use crate::config::GameConfig;
use crate::model::{GameState, RandomSource};
use crate::render::{render_frame, Surface};
use crate::state::{AssetId, AssetSet, DelayedTick, InputState, LoopDriver, LoopEvent, LoopStatus};

pub struct GameLoop<H> {
    pub state: GameState,
    pub input: InputState,
    pub driver: LoopDriver,
    pub assets: AssetSet<H>,
}

impl<H> GameLoop<H> {
    pub fn new(config: &GameConfig, assets: AssetSet<H>, started_at_ms: f64, rng: &mut impl RandomSource) -> Self {
        Self {
            state: GameState::new(config, rng),
            input: InputState::default(),
            driver: LoopDriver::new(started_at_ms, config.time_scale_ms, config.first_tick_delay_ms),
            assets,
        }
    }

    pub fn status(&self) -> LoopStatus {
        self.driver.status()
    }

    pub fn key_down(&mut self, key: &str) {
        self.input.key_down(key);
        self.driver.handle(LoopEvent::KeyDown);
    }

    pub fn key_up(&mut self, key: &str) {
        self.input.key_up(key);
        self.driver.handle(LoopEvent::KeyUp);
    }

    pub fn asset_loaded(&mut self, id: AssetId) {
        if self.assets.mark_loaded(id) {
            log::info!("{:?} image ready", id);
        }
    }

    /// Animation-frame entry point. Runs update+render when the loop is
    /// active and hands back the one-time delayed tick for the caller to schedule.
    pub fn frame<S, R>(&mut self, now_ms: f64, surface: &S, rng: &mut R) -> Option<DelayedTick>
    where
        S: Surface<Image = H>,
        R: RandomSource,
    {
        let plan = self.driver.frame(now_ms);
        if let Some(modifier) = plan.step {
            self.step(modifier, surface, rng);
        }
        plan.delayed
    }

    pub fn delayed<S, R>(&mut self, tick: DelayedTick, surface: &S, rng: &mut R)
    where
        S: Surface<Image = H>,
        R: RandomSource,
    {
        self.step(tick.modifier, surface, rng);
    }

    fn step<S, R>(&mut self, modifier: f64, surface: &S, rng: &mut R)
    where
        S: Surface<Image = H>,
        R: RandomSource,
    {
        if self.state.update(&self.input, modifier, rng) {
            log::info!("caught! score {}", self.state.monsters_caught);
        }
        self.render(surface);
    }

    pub fn render<S: Surface<Image = H>>(&self, surface: &S) {
        render_frame(surface, &self.state, &self.assets, self.driver.fps());
    }
}

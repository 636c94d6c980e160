//! Loop status state machine and frame timing.
//!
//! The status only moves to `Active` on a key press and to `Paused` on a key
//! release; frames advance the simulation only while `Active`. The very first
//! frame additionally schedules one delayed step.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoopStatus {
    #[default]
    Idle,
    Started,
    Active,
    Paused,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopEvent {
    Tick,
    KeyDown,
    KeyUp,
}

pub fn transition(state: LoopStatus, event: LoopEvent) -> LoopStatus {
    match (state, event) {
        (_, LoopEvent::KeyDown) => LoopStatus::Active,
        (_, LoopEvent::KeyUp) => LoopStatus::Paused,
        (LoopStatus::Idle, LoopEvent::Tick) => LoopStatus::Started,
        (other, LoopEvent::Tick) => other,
    }
}

/// One update+render to run after `delay_ms`, with the modifier of the frame
/// that scheduled it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DelayedTick {
    pub delay_ms: u32,
    pub modifier: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FramePlan {
    /// Modifier for an immediate update+render, if one should run.
    pub step: Option<f64>,
    pub delayed: Option<DelayedTick>,
}

#[derive(Clone, Debug)]
pub struct LoopDriver {
    status: LoopStatus,
    then_ms: f64,
    fps: f64,
    time_scale_ms: f64,
    first_tick_delay_ms: u32,
}

impl LoopDriver {
    pub fn new(started_at_ms: f64, time_scale_ms: f64, first_tick_delay_ms: u32) -> Self {
        Self {
            status: LoopStatus::Idle,
            then_ms: started_at_ms,
            fps: 0.0,
            time_scale_ms,
            first_tick_delay_ms,
        }
    }

    pub fn status(&self) -> LoopStatus {
        self.status
    }

    pub fn fps(&self) -> f64 {
        self.fps
    }

    pub fn handle(&mut self, event: LoopEvent) {
        let next = transition(self.status, event);
        if next != self.status {
            log::debug!("loop status {:?} -> {:?}", self.status, next);
        }
        self.status = next;
    }

    pub fn frame(&mut self, now_ms: f64) -> FramePlan {
        let delta = (now_ms - self.then_ms).max(0.0);
        if delta > 0.0 {
            self.fps = 1000.0 / delta;
        }
        let modifier = delta / self.time_scale_ms;

        let was_idle = self.status == LoopStatus::Idle;
        self.handle(LoopEvent::Tick);
        let delayed = was_idle.then_some(DelayedTick {
            delay_ms: self.first_tick_delay_ms,
            modifier,
        });
        let step = (self.status == LoopStatus::Active).then_some(modifier);

        self.then_ms = now_ms;
        FramePlan { step, delayed }
    }
}

//! Force-Break Trigger.
//!
//! A one-shot trigger armed by the driver, typically to implement "step over" or "step
//! out". It fires at most once per arming, either unconditionally or when a stack reaches
//! a recorded depth, and disarms itself when it fires.

use serde::Serialize;

/// Condition under which an armed force-break fires.
///
/// Call-depth and loop-depth conditions are mutually exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ForceCondition {
    /// Fire on the next step.
    Always,
    /// Fire when the call stack depth equals the target.
    CallDepth(usize),
    /// Fire when the loop stack depth equals the target.
    LoopDepth(usize),
}

/// Observable force-break configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ForceBreakState {
    /// Trigger is armed.
    pub armed: bool,
    /// Firing depends on the call stack depth.
    pub consider_call_depth: bool,
    /// Call stack depth to match.
    pub call_depth_target: usize,
    /// Firing depends on the loop stack depth.
    pub consider_loop_depth: bool,
    /// Loop stack depth to match.
    pub loop_depth_target: usize,
}

/// One-shot break trigger.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ForceBreak {
    armed: Option<ForceCondition>,
}

impl ForceBreak {
    /// Creates a disarmed trigger.
    pub const fn new() -> Self {
        Self { armed: None }
    }

    /// Arms the trigger, replacing any previous condition.
    pub const fn arm(&mut self, cond: ForceCondition) {
        self.armed = Some(cond);
    }

    /// Disarms the trigger.
    pub const fn disarm(&mut self) {
        self.armed = None;
    }

    /// Returns `true` while armed.
    pub const fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    /// The armed condition, if any.
    pub const fn condition(&self) -> Option<ForceCondition> {
        self.armed
    }

    /// Checks the trigger against the current stack depths, disarming it if it fires.
    pub fn evaluate(&mut self, call_depth: usize, loop_depth: usize) -> bool {
        let fired = match self.armed {
            None => false,
            Some(ForceCondition::Always) => true,
            Some(ForceCondition::CallDepth(target)) => call_depth == target,
            Some(ForceCondition::LoopDepth(target)) => loop_depth == target,
        };
        if fired {
            self.armed = None;
        }
        fired
    }

    /// The configuration as its five observable fields.
    pub const fn state(&self) -> ForceBreakState {
        let mut state = ForceBreakState {
            armed: self.armed.is_some(),
            consider_call_depth: false,
            call_depth_target: 0,
            consider_loop_depth: false,
            loop_depth_target: 0,
        };
        match self.armed {
            Some(ForceCondition::CallDepth(target)) => {
                state.consider_call_depth = true;
                state.call_depth_target = target;
            }
            Some(ForceCondition::LoopDepth(target)) => {
                state.consider_loop_depth = true;
                state.loop_depth_target = target;
            }
            Some(ForceCondition::Always) | None => {}
        }
        state
    }
}

//! Enter/exit sequencing between route views.
//!
//! One view is shown at a time. A request for a different view first plays the
//! shown view's exit, then swaps and plays the new view's enter ("wait" mode).
//! Each timed phase hands back a [`Cue`]; the caller fires [`Transition::settle`]
//! with the cue's epoch once `after_ms` has elapsed. Cues from phases that were
//! superseded in the meantime are ignored.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Entering,
    Visible,
    Exiting,
    /// Nothing shown yet.
    Removed,
}

impl Phase {
    /// CSS class driving the keyframe animation for this phase.
    pub fn class(self) -> &'static str {
        match self {
            Phase::Entering => "page-enter",
            Phase::Exiting => "page-exit",
            Phase::Visible | Phase::Removed => "",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cue {
    pub epoch: u64,
    pub after_ms: u32,
}

#[derive(Debug, Clone)]
pub struct Transition<K> {
    current: Option<K>,
    pending: Option<K>,
    phase: Phase,
    epoch: u64,
    enter_ms: u32,
    exit_ms: u32,
}

impl<K: Copy + PartialEq> Transition<K> {
    pub fn new(enter_ms: u32, exit_ms: u32) -> Self {
        Self {
            current: None,
            pending: None,
            phase: Phase::Removed,
            epoch: 0,
            enter_ms,
            exit_ms,
        }
    }

    pub fn current(&self) -> Option<K> {
        self.current
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Asks for `key` to become the shown view.
    pub fn request(&mut self, key: K) -> Option<Cue> {
        match self.current {
            None => {
                self.current = Some(key);
                Some(self.begin(Phase::Entering))
            }
            Some(shown) if shown == key => {
                self.pending = None;
                // walked back before the exit finished: bring it back in
                if self.phase == Phase::Exiting {
                    Some(self.begin(Phase::Entering))
                } else {
                    None
                }
            }
            Some(_) => {
                self.pending = Some(key);
                if self.phase == Phase::Exiting {
                    // already on the way out; the swap picks up the new target
                    None
                } else {
                    Some(self.begin(Phase::Exiting))
                }
            }
        }
    }

    /// Called when the animation started under `epoch` has run its course.
    pub fn settle(&mut self, epoch: u64) -> Option<Cue> {
        if epoch != self.epoch {
            return None;
        }
        match self.phase {
            Phase::Entering => {
                self.phase = Phase::Visible;
                None
            }
            Phase::Exiting => match self.pending.take() {
                Some(next) => {
                    self.current = Some(next);
                    Some(self.begin(Phase::Entering))
                }
                None => {
                    self.current = None;
                    self.phase = Phase::Removed;
                    None
                }
            },
            Phase::Visible | Phase::Removed => None,
        }
    }

    fn begin(&mut self, phase: Phase) -> Cue {
        self.phase = phase;
        self.epoch += 1;
        let after_ms = match phase {
            Phase::Exiting => self.exit_ms,
            _ => self.enter_ms,
        };
        Cue {
            epoch: self.epoch,
            after_ms,
        }
    }
}

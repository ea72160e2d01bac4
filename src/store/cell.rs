//! Lock-protected state slot shared by all containers.

use parking_lot::{Mutex, MutexGuard};

use super::mvi::{Reducer, UiState};

/// Holds a container's state plus a generation counter.
///
/// The generation is bumped whenever in-flight work must be disowned
/// (reset, superseding query). Effects capture the generation when they
/// start and only apply their outcome if it is still current.
pub(crate) struct StateCell<S> {
    slot: Mutex<Slot<S>>,
}

struct Slot<S> {
    state: S,
    generation: u64,
}

pub(crate) struct CellGuard<'a, S> {
    slot: MutexGuard<'a, Slot<S>>,
}

impl<S: UiState> StateCell<S> {
    pub fn new() -> Self {
        Self {
            slot: Mutex::new(Slot {
                state: S::default(),
                generation: 0,
            }),
        }
    }

    /// Lock for a short synchronous transition. Never hold across `.await`.
    pub fn lock(&self) -> CellGuard<'_, S> {
        CellGuard {
            slot: self.slot.lock(),
        }
    }

    pub fn snapshot(&self) -> S {
        self.slot.lock().state.clone()
    }

    pub fn read<T>(&self, f: impl FnOnce(&S) -> T) -> T {
        f(&self.slot.lock().state)
    }
}

impl<S: UiState> CellGuard<'_, S> {
    pub fn state(&self) -> &S {
        &self.slot.state
    }

    pub fn generation(&self) -> u64 {
        self.slot.generation
    }

    /// Run the reducer over the current state.
    pub fn apply<R: Reducer<State = S>>(&mut self, intent: R::Intent) {
        let state = std::mem::take(&mut self.slot.state);
        self.slot.state = R::reduce(state, intent);
    }

    /// Apply only if no reset or superseding request happened since
    /// `generation` was captured. Returns whether the intent was applied.
    pub fn apply_if_current<R: Reducer<State = S>>(
        &mut self,
        generation: u64,
        intent: R::Intent,
    ) -> bool {
        if self.slot.generation != generation {
            return false;
        }
        self.apply::<R>(intent);
        true
    }

    /// Disown all in-flight work. Returns the new generation.
    pub fn invalidate(&mut self) -> u64 {
        self.slot.generation = self.slot.generation.wrapping_add(1);
        self.slot.generation
    }
}

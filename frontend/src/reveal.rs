use std::any::Any;
use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use yew::prelude::*;

/// Visibility of the revealed content for one page view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Hidden,
    Visible,
}

/// When a page view flips from hidden to visible.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealPolicy {
    OnMount,
    After(u32),
}

impl RevealPolicy {
    /// `OnMount` still goes through the scheduler so the hidden pose gets
    /// painted before the switch and the enter transition can run.
    pub fn delay_ms(&self) -> u32 {
        match self {
            RevealPolicy::OnMount => 0,
            RevealPolicy::After(ms) => *ms,
        }
    }
}

/// Keeps a scheduled task alive. Dropping it cancels the task.
pub struct ScheduledTask(Box<dyn Any>);

impl ScheduledTask {
    pub fn new<H: 'static>(handle: H) -> Self {
        Self(Box::new(handle))
    }
}

/// Runs a task once after a delay.
pub trait Scheduler {
    fn schedule_once(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> ScheduledTask;
}

pub struct GlooScheduler;

impl Scheduler for GlooScheduler {
    fn schedule_once(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> ScheduledTask {
        ScheduledTask::new(Timeout::new(delay_ms, task))
    }
}

/// Scheduler handed to `use_reveal` through a `ContextProvider`.
/// Without a provider the browser timer is used.
#[derive(Clone)]
pub struct RevealScheduler(pub Rc<dyn Scheduler>);

impl Default for RevealScheduler {
    fn default() -> Self {
        Self(Rc::new(GlooScheduler))
    }
}

impl PartialEq for RevealScheduler {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// One-shot Hidden -> Visible transition.
///
/// The pending task is cancelled when the timer is dropped, so a view torn
/// down before the delay elapses never sees the callback.
pub struct VisibilityTimer {
    state: Rc<Cell<RevealState>>,
    _pending: ScheduledTask,
}

impl VisibilityTimer {
    pub fn start<F>(scheduler: &dyn Scheduler, policy: RevealPolicy, on_reveal: F) -> Self
    where
        F: FnOnce(RevealState) + 'static,
    {
        let state = Rc::new(Cell::new(RevealState::Hidden));
        let reveal = {
            let state = state.clone();
            move || {
                if state.get() == RevealState::Hidden {
                    state.set(RevealState::Visible);
                    on_reveal(RevealState::Visible);
                }
            }
        };
        let pending = scheduler.schedule_once(policy.delay_ms(), Box::new(reveal));

        Self {
            state,
            _pending: pending,
        }
    }

    pub fn current_state(&self) -> RevealState {
        self.state.get()
    }
}

/// Reveal state for the calling component, started on mount.
#[hook]
pub fn use_reveal(policy: RevealPolicy) -> RevealState {
    let state = use_state_eq(RevealState::default);
    let scheduler = use_context::<RevealScheduler>().unwrap_or_default();

    {
        let setter = state.setter();
        use_effect_with_deps(
            move |policy| {
                debug!("Starting reveal timer with {:?}", policy);
                let timer = VisibilityTimer::start(scheduler.0.as_ref(), *policy, move |revealed| {
                    debug!("Reveal fired");
                    setter.set(revealed);
                });
                move || drop(timer)
            },
            policy,
        );
    }

    *state
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;

    struct Pending {
        due: u64,
        cancelled: Rc<Cell<bool>>,
        task: Box<dyn FnOnce()>,
    }

    /// Manual clock: tasks only run when `advance` passes their due time.
    #[derive(Default)]
    pub(crate) struct ManualScheduler {
        now: Cell<u64>,
        queue: RefCell<Vec<Pending>>,
    }

    struct ManualHandle(Rc<Cell<bool>>);

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            self.0.set(true);
        }
    }

    impl Scheduler for ManualScheduler {
        fn schedule_once(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> ScheduledTask {
            let cancelled = Rc::new(Cell::new(false));
            self.queue.borrow_mut().push(Pending {
                due: self.now.get() + u64::from(delay_ms),
                cancelled: cancelled.clone(),
                task,
            });
            ScheduledTask::new(ManualHandle(cancelled))
        }
    }

    impl ManualScheduler {
        pub(crate) fn advance(&self, ms: u64) {
            let now = self.now.get() + ms;
            self.now.set(now);
            let due: Vec<Pending> = {
                let mut queue = self.queue.borrow_mut();
                let (due, rest): (Vec<Pending>, Vec<Pending>) =
                    queue.drain(..).partition(|p| p.due <= now);
                *queue = rest;
                due
            };
            for pending in due {
                if !pending.cancelled.get() {
                    (pending.task)();
                }
            }
        }
    }

    fn counter() -> (Rc<Cell<u32>>, impl FnOnce(RevealState) + 'static) {
        let fired = Rc::new(Cell::new(0));
        let hook = {
            let fired = fired.clone();
            move |_: RevealState| fired.set(fired.get() + 1)
        };
        (fired, hook)
    }

    #[test]
    fn delayed_reveal_waits_for_the_delay() {
        let scheduler = ManualScheduler::default();
        let (fired, on_reveal) = counter();
        let timer = VisibilityTimer::start(&scheduler, RevealPolicy::After(500), on_reveal);

        assert_eq!(timer.current_state(), RevealState::Hidden);
        scheduler.advance(499);
        assert_eq!(timer.current_state(), RevealState::Hidden);
        scheduler.advance(1);
        assert_eq!(timer.current_state(), RevealState::Visible);
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn visible_is_terminal() {
        let scheduler = ManualScheduler::default();
        let (fired, on_reveal) = counter();
        let timer = VisibilityTimer::start(&scheduler, RevealPolicy::After(10), on_reveal);

        scheduler.advance(10);
        for _ in 0..3 {
            scheduler.advance(1_000);
            assert_eq!(timer.current_state(), RevealState::Visible);
        }
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn on_mount_reveals_on_the_next_scheduler_turn() {
        let scheduler = ManualScheduler::default();
        let (fired, on_reveal) = counter();
        let timer = VisibilityTimer::start(&scheduler, RevealPolicy::OnMount, on_reveal);

        assert_eq!(timer.current_state(), RevealState::Hidden);
        assert_eq!(fired.get(), 0);
        assert_eq!(scheduler.queue.borrow().len(), 1);

        scheduler.advance(0);
        assert_eq!(timer.current_state(), RevealState::Visible);
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn dropping_the_timer_cancels_the_reveal() {
        let scheduler = ManualScheduler::default();
        let (fired, on_reveal) = counter();
        let timer = VisibilityTimer::start(&scheduler, RevealPolicy::After(500), on_reveal);

        drop(timer);
        scheduler.advance(500);
        assert_eq!(fired.get(), 0);
    }

    #[test]
    fn provided_scheduler_compares_by_identity() {
        let clock = RevealScheduler(Rc::new(ManualScheduler::default()));
        assert!(clock == clock.clone());
        assert!(clock != RevealScheduler::default());
    }
}

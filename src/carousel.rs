//! Hero carousel state machine.
//!
//! `CarouselController` owns the ordered list of media items, the active
//! index, and the repeating advance timer. It performs no DOM access itself:
//! the component that mounts it injects a [`PlaybackSurface`] (start/pause a
//! slide's media) and an [`AdvanceScheduler`] (create a repeating timer whose
//! handle cancels on drop, matching `gloo_timers::callback::Interval`). That
//! keeps the machine testable off the browser.

use std::fmt;

use log::warn;

/// Delay between mount and `arm()`, giving the videos time to load.
pub const WARMUP_DELAY_MS: u32 = 1_000;

/// Period of the automatic slide advance.
pub const ADVANCE_PERIOD_MS: u32 = 5_000;

/// One slide of the hero carousel. Immutable once the controller is built.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaItem {
    pub source_ref: String,
    pub label: String,
}

impl MediaItem {
    pub fn new(source_ref: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            source_ref: source_ref.into(),
            label: label.into(),
        }
    }
}

/// The active media item could not begin playing, e.g. because the browser
/// blocked autoplay. Non-fatal: logged and otherwise ignored, the next
/// scheduled or manual advance is the implicit retry path.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackStartError {
    reason: String,
}

impl PlaybackStartError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for PlaybackStartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "playback did not start: {}", self.reason)
    }
}

/// Media side of the host surface.
///
/// `begin_playback` must restart the item from position zero before playing.
pub trait PlaybackSurface {
    fn begin_playback(&mut self, index: usize) -> Result<(), PlaybackStartError>;
    fn pause(&mut self, index: usize);
}

/// Timer side of the host surface.
///
/// Dropping the returned handle cancels the timer. The controller owns the
/// handle exclusively and replaces it on every manual advance.
pub trait AdvanceScheduler {
    type Handle;

    fn repeating(&mut self, period_ms: u32) -> Self::Handle;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Unarmed,
    Armed,
    Detached,
}

/// State of one indicator affordance, for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndicatorState {
    /// This indicator's slide is the visible one.
    pub active: bool,
    /// The progress fill should be running (active slide while armed).
    pub progress_running: bool,
}

pub struct CarouselController<P, S>
where
    P: PlaybackSurface,
    S: AdvanceScheduler,
{
    items: Vec<MediaItem>,
    active: usize,
    phase: Phase,
    period_ms: u32,
    surface: P,
    scheduler: S,
    timer: Option<S::Handle>,
}

impl<P, S> CarouselController<P, S>
where
    P: PlaybackSurface,
    S: AdvanceScheduler,
{
    /// Build a controller in the `Unarmed` phase, showing index 0.
    ///
    /// `items` must not be empty; every index computation is modulo its
    /// length.
    pub fn new(items: Vec<MediaItem>, surface: P, scheduler: S, period_ms: u32) -> Self {
        assert!(!items.is_empty(), "carousel needs at least one media item");
        Self {
            items,
            active: 0,
            phase: Phase::Unarmed,
            period_ms,
            surface,
            scheduler,
            timer: None,
        }
    }

    /// `Unarmed -> Armed`: start playback of the active item from zero and
    /// start the repeating advance timer. Fires once; later calls are no-ops.
    pub fn arm(&mut self) {
        if self.phase != Phase::Unarmed {
            return;
        }
        self.phase = Phase::Armed;
        self.start_active();
        self.timer = Some(self.scheduler.repeating(self.period_ms));
    }

    /// Automatic advance, invoked by the repeating timer.
    ///
    /// Pauses the current item, moves to `(active + 1) mod N` and plays it
    /// from zero. The timer itself is left alone; it repeats on its own
    /// cadence. A tick that was queued before `detach()` ran is ignored.
    pub fn tick(&mut self) {
        if self.phase != Phase::Armed {
            return;
        }
        let next = (self.active + 1) % self.items.len();
        self.surface.pause(self.active);
        self.active = next;
        self.start_active();
    }

    /// Manual jump to `target`.
    ///
    /// A jump to the already-active index is a complete no-op: no replay, no
    /// timer reset. Otherwise the pending timer is cancelled first, so a tick
    /// already queued behind this handler can never fire, and a fresh
    /// full-length period is scheduled after the switch.
    pub fn go_to(&mut self, target: usize) {
        if self.phase == Phase::Detached || target == self.active || target >= self.items.len() {
            return;
        }
        if self.phase == Phase::Unarmed {
            // Nothing plays and no timer runs before arm(); just move.
            self.active = target;
            return;
        }
        self.timer = None;
        self.surface.pause(self.active);
        self.active = target;
        self.start_active();
        self.timer = Some(self.scheduler.repeating(self.period_ms));
    }

    /// Cancel the timer and refuse all further advances. Must run on
    /// unmount, otherwise the interval keeps driving a detached state.
    pub fn detach(&mut self) {
        self.timer = None;
        self.phase = Phase::Detached;
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn is_armed(&self) -> bool {
        self.phase == Phase::Armed
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    pub fn indicator(&self, index: usize) -> IndicatorState {
        let active = index == self.active;
        IndicatorState {
            active,
            progress_running: active && self.phase == Phase::Armed,
        }
    }

    fn start_active(&mut self) {
        if let Err(err) = self.surface.begin_playback(self.active) {
            warn!("carousel: slide {} {}", self.active, err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Call {
        Begin(usize),
        Pause(usize),
        Scheduled(u32),
        Cancelled(u32),
    }

    type Log = Rc<RefCell<Vec<Call>>>;

    /// Playback surface that records calls and can refuse to start a slide.
    struct RecordingSurface {
        log: Log,
        fail_on: Option<usize>,
    }

    impl PlaybackSurface for RecordingSurface {
        fn begin_playback(&mut self, index: usize) -> Result<(), PlaybackStartError> {
            self.log.borrow_mut().push(Call::Begin(index));
            if self.fail_on == Some(index) {
                Err(PlaybackStartError::new("autoplay blocked"))
            } else {
                Ok(())
            }
        }

        fn pause(&mut self, index: usize) {
            self.log.borrow_mut().push(Call::Pause(index));
        }
    }

    /// Scheduler whose handles report their cancellation on drop, numbered
    /// in creation order.
    struct RecordingScheduler {
        log: Log,
        next_id: u32,
    }

    struct TimerHandle {
        log: Log,
        id: u32,
    }

    impl Drop for TimerHandle {
        fn drop(&mut self) {
            self.log.borrow_mut().push(Call::Cancelled(self.id));
        }
    }

    impl AdvanceScheduler for RecordingScheduler {
        type Handle = TimerHandle;

        fn repeating(&mut self, _period_ms: u32) -> TimerHandle {
            let id = self.next_id;
            self.next_id += 1;
            self.log.borrow_mut().push(Call::Scheduled(id));
            TimerHandle {
                log: self.log.clone(),
                id,
            }
        }
    }

    fn items(n: usize) -> Vec<MediaItem> {
        (0..n)
            .map(|i| MediaItem::new(format!("/videos/slide-{i}.mp4"), format!("slide {i}")))
            .collect()
    }

    fn controller(
        n: usize,
        fail_on: Option<usize>,
    ) -> (CarouselController<RecordingSurface, RecordingScheduler>, Log) {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let surface = RecordingSurface {
            log: log.clone(),
            fail_on,
        };
        let scheduler = RecordingScheduler {
            log: log.clone(),
            next_id: 0,
        };
        (
            CarouselController::new(items(n), surface, scheduler, ADVANCE_PERIOD_MS),
            log,
        )
    }

    #[test]
    fn arm_plays_first_slide_and_starts_timer() {
        let (mut c, log) = controller(3, None);
        assert!(!c.is_armed());
        c.arm();
        assert!(c.is_armed());
        assert_eq!(c.active_index(), 0);
        assert_eq!(*log.borrow(), vec![Call::Begin(0), Call::Scheduled(0)]);
    }

    #[test]
    fn ticks_cycle_in_order_and_wrap() {
        for n in [1usize, 2, 3, 5] {
            let (mut c, _log) = controller(n, None);
            c.arm();
            for expected in (1..n).chain([0]) {
                c.tick();
                assert_eq!(c.active_index(), expected, "n = {n}");
            }
            // After N ticks from index 0 we are back at 0.
            assert_eq!(c.active_index(), 0);
        }
    }

    #[test]
    fn tick_pauses_old_slide_plays_new_and_keeps_timer() {
        let (mut c, log) = controller(3, None);
        c.arm();
        log.borrow_mut().clear();
        c.tick();
        assert_eq!(c.active_index(), 1);
        // No Cancelled/Scheduled entries: the repeating timer is untouched.
        assert_eq!(*log.borrow(), vec![Call::Pause(0), Call::Begin(1)]);
    }

    #[test]
    fn tick_before_arm_does_nothing() {
        let (mut c, log) = controller(3, None);
        c.tick();
        assert_eq!(c.active_index(), 0);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn go_to_same_index_is_a_complete_noop() {
        let (mut c, log) = controller(3, None);
        c.arm();
        log.borrow_mut().clear();
        c.go_to(0);
        assert_eq!(c.active_index(), 0);
        assert!(log.borrow().is_empty(), "no replay, no timer reset");
    }

    #[test]
    fn go_to_switches_slide_and_restarts_the_period() {
        let (mut c, log) = controller(3, None);
        c.arm();
        c.tick(); // now at 1
        log.borrow_mut().clear();
        c.go_to(0);
        assert_eq!(c.active_index(), 0);
        assert_eq!(
            *log.borrow(),
            vec![
                Call::Cancelled(0),
                Call::Pause(1),
                Call::Begin(0),
                Call::Scheduled(1),
            ],
            "old timer cancelled before the switch, fresh one after"
        );
    }

    #[test]
    fn go_to_out_of_range_is_ignored() {
        let (mut c, log) = controller(3, None);
        c.arm();
        log.borrow_mut().clear();
        c.go_to(7);
        assert_eq!(c.active_index(), 0);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn go_to_before_arm_moves_without_playing() {
        let (mut c, log) = controller(3, None);
        c.go_to(2);
        assert_eq!(c.active_index(), 2);
        assert!(log.borrow().is_empty());
        // Arm then plays the slide that was selected while unarmed.
        c.arm();
        assert_eq!(*log.borrow(), vec![Call::Begin(2), Call::Scheduled(0)]);
    }

    #[test]
    fn detach_cancels_timer_and_freezes_the_index() {
        let (mut c, log) = controller(3, None);
        c.arm();
        c.detach();
        assert!(log.borrow().contains(&Call::Cancelled(0)));
        log.borrow_mut().clear();
        // A tick that was already queued when detach ran must not advance a
        // detached state, and manual input is dead too.
        c.tick();
        c.go_to(2);
        assert_eq!(c.active_index(), 0);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn playback_failure_does_not_stall_the_machine() {
        // Slide 1 refuses to play; the carousel must still reach 2.
        let (mut c, log) = controller(3, Some(1));
        c.arm();
        c.tick();
        assert_eq!(c.active_index(), 1, "index advances despite the failure");
        log.borrow_mut().clear();
        c.tick();
        assert_eq!(c.active_index(), 2);
        assert_eq!(*log.borrow(), vec![Call::Pause(1), Call::Begin(2)]);
    }

    #[test]
    fn arm_is_one_shot() {
        let (mut c, log) = controller(3, None);
        c.arm();
        log.borrow_mut().clear();
        c.arm();
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn indicator_state_follows_active_index_and_phase() {
        let (mut c, _log) = controller(3, None);
        assert_eq!(
            c.indicator(0),
            IndicatorState {
                active: true,
                progress_running: false,
            },
            "no progress fill before arm"
        );
        c.arm();
        assert_eq!(
            c.indicator(0),
            IndicatorState {
                active: true,
                progress_running: true,
            }
        );
        assert_eq!(
            c.indicator(1),
            IndicatorState {
                active: false,
                progress_running: false,
            }
        );
        c.tick();
        assert!(c.indicator(1).progress_running);
        assert!(!c.indicator(0).active);
    }

    #[test]
    fn single_item_carousel_wraps_onto_itself() {
        let (mut c, log) = controller(1, None);
        c.arm();
        log.borrow_mut().clear();
        c.tick();
        assert_eq!(c.active_index(), 0);
        assert_eq!(*log.borrow(), vec![Call::Pause(0), Call::Begin(0)]);
    }
}

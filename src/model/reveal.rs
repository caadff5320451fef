//! Per-slide reveal animation
//!
//! The animator turns a slide's reveal sequence into a queue of steps and
//! plays them one at a time. Time is a virtual offset from the start of the
//! session, passed in with every message, so a step's follow-up timer is
//! scheduled relative to the moment the previous timer was due rather than
//! to when it was observed.
//!
//! At most one timer is pending at any moment. Restarting replaces the queue
//! and drops that timer before anything else happens, so a previous slide's
//! sequence can never write into the new one.

use std::collections::{HashMap, VecDeque};
use std::time::Duration;

use crate::domain::{
    classify::{discover, Animatable, RevealKind},
    deck::{ElementPath, Slide},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealTiming {
    /// Delay between two typed characters
    pub char_delay: Duration,
    /// Pause after the last character before the step completes
    pub typing_pause: Duration,
    /// Time a bubble reveal holds the sequence before the next step
    pub bubble_delay: Duration,
}

impl Default for RevealTiming {
    fn default() -> Self {
        Self {
            char_delay: Duration::from_millis(15),
            typing_pause: Duration::from_millis(50),
            bubble_delay: Duration::from_millis(300),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Discovering,
    Playing,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ElementId {
    pub slide: usize,
    pub path: ElementPath,
}

impl ElementId {
    pub fn new(slide: usize, path: ElementPath) -> Self {
        Self { slide, path }
    }
}

/// Live rendering state of an element that has taken part in a reveal.
/// Elements without a view are shown as authored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementView {
    pub displayed: String,
    pub visible: bool,
    pub typing: bool,
    pub transparent: bool,
    pub revealed: bool,
    /// Rows the text spanned before it was cleared, counting explicit line
    /// breaks only; the view widens this to the wrapped height
    pub reserved_lines: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevealEvent {
    StepStarted {
        path: ElementPath,
        kind: RevealKind,
        at: Duration,
    },
    CharTyped {
        path: ElementPath,
        ch: char,
        at: Duration,
    },
    TypingFinished {
        path: ElementPath,
        at: Duration,
    },
    StepCompleted {
        path: ElementPath,
        at: Duration,
    },
    SequenceFinished {
        slide: usize,
        at: Duration,
    },
}

pub enum Message<'a> {
    /// A slide was activated and its sequence must start over
    Restarted {
        slide_index: usize,
        slide: &'a Slide,
        now: Duration,
    },
    /// Time moved on; every timer due at or before `now` fires
    TimersDue { now: Duration },
    /// The session is being torn down
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum TimerAction {
    TypeChar { path: ElementPath, next: usize },
    Complete { path: ElementPath },
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Timer {
    due: Duration,
    action: TimerAction,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RevealAnimator {
    timing: RevealTiming,
    phase: Phase,
    slide: Option<usize>,
    queue: VecDeque<Animatable>,
    timer: Option<Timer>,
    views: HashMap<ElementId, ElementView>,
    captured: HashMap<ElementId, String>,
}

impl RevealAnimator {
    pub fn new(timing: RevealTiming) -> Self {
        Self {
            timing,
            phase: Phase::Idle,
            slide: None,
            queue: VecDeque::new(),
            timer: None,
            views: HashMap::new(),
            captured: HashMap::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Slide whose sequence was started last
    pub fn slide(&self) -> Option<usize> {
        self.slide
    }

    /// Steps still waiting behind the one in flight
    pub fn queued_steps(&self) -> usize {
        self.queue.len()
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.timer.as_ref().map(|t| t.due)
    }

    pub fn view(&self, slide: usize, path: &ElementPath) -> Option<&ElementView> {
        self.views.get(&ElementId::new(slide, path.clone()))
    }

    pub fn captured_text(&self, slide: usize, path: &ElementPath) -> Option<&str> {
        self.captured
            .get(&ElementId::new(slide, path.clone()))
            .map(String::as_str)
    }

    pub fn update(&mut self, message: Message<'_>) -> Vec<RevealEvent> {
        let mut events = Vec::new();
        match message {
            Message::Restarted {
                slide_index,
                slide,
                now,
            } => self.restart(slide_index, slide, now, &mut events),
            Message::TimersDue { now } => {
                while self.timer.as_ref().is_some_and(|t| t.due <= now) {
                    if let Some(timer) = self.timer.take() {
                        self.fire(timer, &mut events);
                    }
                }
            }
            Message::Cancelled => self.cancel(),
        }
        events
    }

    fn cancel(&mut self) {
        if self.timer.is_some() || !self.queue.is_empty() {
            log::debug!(
                "cancelling reveal of slide {:?} ({} queued)",
                self.slide,
                self.queue.len()
            );
        }
        self.timer = None;
        self.queue.clear();
        self.phase = Phase::Idle;
    }

    fn restart(
        &mut self,
        slide_index: usize,
        slide: &Slide,
        now: Duration,
        events: &mut Vec<RevealEvent>,
    ) {
        self.cancel();
        self.slide = Some(slide_index);

        self.phase = Phase::Discovering;
        let steps = discover(slide);
        log::trace!("slide {slide_index}: {} reveal steps", steps.len());

        for step in &steps {
            let Some(element) = slide.element(&step.path) else {
                continue;
            };
            let id = ElementId::new(slide_index, step.path.clone());
            match step.kind {
                RevealKind::Text => {
                    let current = self
                        .views
                        .get(&id)
                        .map_or_else(|| element.text.clone(), |v| v.displayed.clone());
                    let rows = current.lines().count().max(1);
                    self.captured.entry(id.clone()).or_insert(current);

                    let view = self.views.entry(id).or_default();
                    view.reserved_lines = view.reserved_lines.max(rows);
                    view.displayed.clear();
                    view.visible = false;
                    view.typing = false;
                }
                RevealKind::Bubble => {
                    let view = self.views.entry(id).or_default();
                    view.transparent = true;
                    view.revealed = false;
                }
            }
        }

        self.queue = steps.into();
        self.phase = Phase::Playing;
        self.start_next(now, events);
    }

    fn start_next(&mut self, at: Duration, events: &mut Vec<RevealEvent>) {
        let Some(slide) = self.slide else {
            self.phase = Phase::Idle;
            return;
        };
        let Some(step) = self.queue.pop_front() else {
            self.phase = Phase::Idle;
            events.push(RevealEvent::SequenceFinished { slide, at });
            return;
        };

        events.push(RevealEvent::StepStarted {
            path: step.path.clone(),
            kind: step.kind,
            at,
        });
        let view = self
            .views
            .entry(ElementId::new(slide, step.path.clone()))
            .or_default();
        match step.kind {
            RevealKind::Text => {
                view.visible = true;
                view.typing = true;
                self.type_from(slide, step.path, 0, at, events);
            }
            RevealKind::Bubble => {
                view.transparent = false;
                view.revealed = true;
                self.timer = Some(Timer {
                    due: at + self.timing.bubble_delay,
                    action: TimerAction::Complete { path: step.path },
                });
            }
        }
    }

    fn type_from(
        &mut self,
        slide: usize,
        path: ElementPath,
        next: usize,
        at: Duration,
        events: &mut Vec<RevealEvent>,
    ) {
        let id = ElementId::new(slide, path.clone());
        let ch = self.captured.get(&id).and_then(|t| t.chars().nth(next));
        let view = self.views.entry(id).or_default();
        match ch {
            Some(ch) => {
                view.displayed.push(ch);
                events.push(RevealEvent::CharTyped {
                    path: path.clone(),
                    ch,
                    at,
                });
                self.timer = Some(Timer {
                    due: at + self.timing.char_delay,
                    action: TimerAction::TypeChar {
                        path,
                        next: next + 1,
                    },
                });
            }
            None => {
                view.typing = false;
                events.push(RevealEvent::TypingFinished {
                    path: path.clone(),
                    at,
                });
                self.timer = Some(Timer {
                    due: at + self.timing.typing_pause,
                    action: TimerAction::Complete { path },
                });
            }
        }
    }

    fn fire(&mut self, timer: Timer, events: &mut Vec<RevealEvent>) {
        let Some(slide) = self.slide else {
            return;
        };
        match timer.action {
            TimerAction::TypeChar { path, next } => {
                self.type_from(slide, path, next, timer.due, events);
            }
            TimerAction::Complete { path } => {
                events.push(RevealEvent::StepCompleted {
                    path,
                    at: timer.due,
                });
                self.start_next(timer.due, events);
            }
        }
    }
}

impl Default for RevealAnimator {
    fn default() -> Self {
        Self::new(RevealTiming::default())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::domain::deck::{Element, ElementKind};

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn path(indices: Vec<usize>) -> ElementPath {
        ElementPath::from(indices)
    }

    fn three_texts() -> Slide {
        Slide::new(vec![
            Element::text(ElementKind::Heading, "Hello"),
            Element::text(ElementKind::Paragraph, "abc"),
            Element::text(ElementKind::Paragraph, "xyz"),
        ])
    }

    fn restart(animator: &mut RevealAnimator, index: usize, slide: &Slide, now: u64) {
        animator.update(Message::Restarted {
            slide_index: index,
            slide,
            now: ms(now),
        });
    }

    #[test]
    fn test_restart_prehides_and_types_first_char() {
        let slide = three_texts();
        let mut animator = RevealAnimator::default();
        let events = animator.update(Message::Restarted {
            slide_index: 0,
            slide: &slide,
            now: ms(0),
        });

        assert_eq!(animator.phase(), Phase::Playing);
        assert_eq!(animator.queued_steps(), 2);
        assert_eq!(animator.next_deadline(), Some(ms(15)));
        assert_eq!(
            events,
            vec![
                RevealEvent::StepStarted {
                    path: path(vec![0]),
                    kind: RevealKind::Text,
                    at: ms(0)
                },
                RevealEvent::CharTyped {
                    path: path(vec![0]),
                    ch: 'H',
                    at: ms(0)
                },
            ]
        );

        let first = animator.view(0, &path(vec![0])).cloned().unwrap_or_default();
        assert_eq!(first.displayed, "H");
        assert!(first.visible && first.typing);

        let second = animator.view(0, &path(vec![1])).cloned().unwrap_or_default();
        assert_eq!(second.displayed, "");
        assert!(!second.visible);
        assert_eq!(second.reserved_lines, 1);
    }

    #[test]
    fn test_text_types_at_char_delay_then_pauses() {
        let slide = Slide::new(vec![Element::text(ElementKind::Heading, "Hi")]);
        let mut animator = RevealAnimator::default();
        restart(&mut animator, 0, &slide, 0);

        let events = animator.update(Message::TimersDue { now: ms(15) });
        assert_eq!(
            events,
            vec![RevealEvent::CharTyped {
                path: path(vec![0]),
                ch: 'i',
                at: ms(15)
            }]
        );

        let events = animator.update(Message::TimersDue { now: ms(30) });
        assert_eq!(
            events,
            vec![RevealEvent::TypingFinished {
                path: path(vec![0]),
                at: ms(30)
            }]
        );
        let view = animator.view(0, &path(vec![0])).cloned().unwrap_or_default();
        assert!(!view.typing);
        assert_eq!(view.displayed, "Hi");

        assert!(animator
            .update(Message::TimersDue { now: ms(79) })
            .is_empty());
        let events = animator.update(Message::TimersDue { now: ms(80) });
        assert_eq!(
            events,
            vec![
                RevealEvent::StepCompleted {
                    path: path(vec![0]),
                    at: ms(80)
                },
                RevealEvent::SequenceFinished { slide: 0, at: ms(80) },
            ]
        );
        assert_eq!(animator.phase(), Phase::Idle);
        assert_eq!(animator.next_deadline(), None);
    }

    #[test]
    fn test_zero_length_text_completes_after_pause() {
        let slide = Slide::new(vec![Element::new(ElementKind::Paragraph)]);
        let mut animator = RevealAnimator::default();
        restart(&mut animator, 0, &slide, 0);

        assert_eq!(animator.next_deadline(), Some(ms(50)));
        let events = animator.update(Message::TimersDue { now: ms(50) });
        assert_eq!(
            events.last(),
            Some(&RevealEvent::SequenceFinished { slide: 0, at: ms(50) })
        );
    }

    #[test]
    fn test_bubble_completes_after_fixed_delay() {
        let slide = Slide::new(vec![Element::new(ElementKind::Card)]);
        let mut animator = RevealAnimator::default();
        restart(&mut animator, 0, &slide, 100);

        let view = animator.view(0, &path(vec![0])).cloned().unwrap_or_default();
        assert!(view.revealed && !view.transparent);
        assert_eq!(animator.next_deadline(), Some(ms(400)));
    }

    #[test]
    fn test_late_tick_fires_every_due_timer_in_order() {
        let slide = Slide::new(vec![
            Element::text(ElementKind::Heading, "Hi"),
            Element::new(ElementKind::Card),
        ]);
        let mut animator = RevealAnimator::default();
        restart(&mut animator, 0, &slide, 0);

        let events = animator.update(Message::TimersDue { now: ms(1000) });
        assert_eq!(
            events,
            vec![
                RevealEvent::CharTyped {
                    path: path(vec![0]),
                    ch: 'i',
                    at: ms(15)
                },
                RevealEvent::TypingFinished {
                    path: path(vec![0]),
                    at: ms(30)
                },
                RevealEvent::StepCompleted {
                    path: path(vec![0]),
                    at: ms(80)
                },
                RevealEvent::StepStarted {
                    path: path(vec![1]),
                    kind: RevealKind::Bubble,
                    at: ms(80)
                },
                RevealEvent::StepCompleted {
                    path: path(vec![1]),
                    at: ms(380)
                },
                RevealEvent::SequenceFinished { slide: 0, at: ms(380) },
            ]
        );
    }

    #[test]
    fn test_restart_cancels_previous_sequence() {
        let first = three_texts();
        let second = Slide::new(vec![Element::text(ElementKind::Heading, "Next")]);
        let mut animator = RevealAnimator::default();
        restart(&mut animator, 0, &first, 0);

        restart(&mut animator, 1, &second, 5);
        assert_eq!(animator.slide(), Some(1));
        assert_eq!(animator.queued_steps(), 0);
        assert_eq!(animator.next_deadline(), Some(ms(20)));

        let events = animator.update(Message::TimersDue { now: ms(10_000) });
        assert!(events.iter().all(|e| !matches!(
            e,
            RevealEvent::CharTyped { path, .. } if path == &ElementPath::from(vec![1])
        )));

        let stale = animator.view(0, &path(vec![0])).cloned().unwrap_or_default();
        assert_eq!(stale.displayed, "H");
        let fresh = animator.view(1, &path(vec![0])).cloned().unwrap_or_default();
        assert_eq!(fresh.displayed, "Next");
    }

    #[test]
    fn test_captured_text_survives_partial_reveal() {
        let slide = three_texts();
        let other = Slide::default();
        let mut animator = RevealAnimator::default();

        restart(&mut animator, 0, &slide, 0);
        animator.update(Message::TimersDue { now: ms(30) });
        assert_eq!(
            animator.view(0, &path(vec![0])).map(|v| v.displayed.as_str()),
            Some("Hel")
        );

        restart(&mut animator, 1, &other, 31);
        restart(&mut animator, 0, &slide, 100);
        assert_eq!(animator.captured_text(0, &path(vec![0])), Some("Hello"));

        animator.update(Message::TimersDue { now: ms(10_000) });
        assert_eq!(
            animator.view(0, &path(vec![0])).map(|v| v.displayed.as_str()),
            Some("Hello")
        );
        assert_eq!(
            animator.view(0, &path(vec![2])).map(|v| v.displayed.as_str()),
            Some("xyz")
        );
    }

    #[test]
    fn test_reserved_lines_never_shrink() {
        let slide = Slide::new(vec![Element::text(ElementKind::Paragraph, "one\ntwo")]);
        let mut animator = RevealAnimator::default();
        restart(&mut animator, 0, &slide, 0);
        restart(&mut animator, 0, &slide, 1);

        let view = animator.view(0, &path(vec![0])).cloned().unwrap_or_default();
        assert_eq!(view.reserved_lines, 2);
        assert_eq!(view.displayed, "o");
    }

    #[test]
    fn test_bubble_prehide_on_revisit() {
        let slide = Slide::new(vec![
            Element::text(ElementKind::Heading, "A"),
            Element::new(ElementKind::Grid),
        ]);
        let mut animator = RevealAnimator::default();
        restart(&mut animator, 0, &slide, 0);
        animator.update(Message::TimersDue { now: ms(1000) });
        assert!(animator.view(0, &path(vec![1])).is_some_and(|v| v.revealed));

        restart(&mut animator, 0, &slide, 2000);
        let grid = animator.view(0, &path(vec![1])).cloned().unwrap_or_default();
        assert!(grid.transparent && !grid.revealed);
    }

    #[test]
    fn test_cancelled_goes_idle() {
        let slide = three_texts();
        let mut animator = RevealAnimator::default();
        restart(&mut animator, 0, &slide, 0);

        assert!(animator.update(Message::Cancelled).is_empty());
        assert_eq!(animator.phase(), Phase::Idle);
        assert_eq!(animator.next_deadline(), None);
        assert!(animator
            .update(Message::TimersDue { now: ms(1000) })
            .is_empty());
    }

    #[test]
    fn test_empty_slide_finishes_immediately() {
        let mut animator = RevealAnimator::default();
        let events = animator.update(Message::Restarted {
            slide_index: 3,
            slide: &Slide::default(),
            now: ms(7),
        });
        assert_eq!(
            events,
            vec![RevealEvent::SequenceFinished { slide: 3, at: ms(7) }]
        );
        assert_eq!(animator.phase(), Phase::Idle);
    }

    #[test]
    fn test_custom_timing() {
        let timing = RevealTiming {
            char_delay: ms(1),
            typing_pause: ms(2),
            bubble_delay: ms(3),
        };
        let slide = Slide::new(vec![Element::new(ElementKind::Image)]);
        let mut animator = RevealAnimator::new(timing);
        restart(&mut animator, 0, &slide, 0);
        assert_eq!(animator.next_deadline(), Some(ms(3)));
    }
}

//! Typing effect state machine
//!
//! Cycles a list of role strings through type, pause, delete, pause. The
//! machine never sleeps itself: every `advance()` reports how long the caller
//! should wait before the next one, so a browser timer chain or a virtual
//! clock can drive it equally well.

use std::time::Duration;

use crate::consts::*;
use crate::error::{AmbientError, Result};

/// Delay table for each phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypingDelays {
    pub type_char: Duration,
    pub delete_char: Duration,
    pub pause_after_type: Duration,
    pub pause_after_delete: Duration,
}

impl Default for TypingDelays {
    fn default() -> Self {
        Self::from_millis(
            TYPE_DELAY_MS,
            DELETE_DELAY_MS,
            PAUSE_AFTER_TYPE_MS,
            PAUSE_AFTER_DELETE_MS,
        )
    }
}

impl TypingDelays {
    pub fn from_millis(type_ms: u32, delete_ms: u32, after_type_ms: u32, after_delete_ms: u32) -> Self {
        Self {
            type_char: Duration::from_millis(type_ms as u64),
            delete_char: Duration::from_millis(delete_ms as u64),
            pause_after_type: Duration::from_millis(after_type_ms as u64),
            pause_after_delete: Duration::from_millis(after_delete_ms as u64),
        }
    }
}

/// Current phase. `role` indexes the role list, `chars` is the visible
/// character count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypingPhase {
    Typing { role: usize, chars: usize },
    PausedAfterType { role: usize },
    Deleting { role: usize, chars: usize },
    PausedAfterDelete { role: usize },
}

/// Result of a single transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypingStep<'a> {
    /// New text to display, if this transition changed it
    pub text: Option<&'a str>,
    /// Wait before the next `advance()`
    pub delay: Duration,
}

/// The typing state machine
#[derive(Debug, Clone)]
pub struct TypingMachine {
    roles: Vec<String>,
    delays: TypingDelays,
    phase: TypingPhase,
    /// Visible characters of the current role
    visible: usize,
}

impl TypingMachine {
    /// Start at `Typing(0, 0)` with nothing displayed
    pub fn new(roles: Vec<String>, delays: TypingDelays) -> Result<Self> {
        if roles.is_empty() {
            return Err(AmbientError::NoRoles);
        }
        Ok(Self {
            roles,
            delays,
            phase: TypingPhase::Typing { role: 0, chars: 0 },
            visible: 0,
        })
    }

    pub fn phase(&self) -> TypingPhase {
        self.phase
    }

    pub fn roles(&self) -> &[String] {
        &self.roles
    }

    /// Text currently displayed
    pub fn text(&self) -> &str {
        let role = match self.phase {
            TypingPhase::Typing { role, .. }
            | TypingPhase::PausedAfterType { role }
            | TypingPhase::Deleting { role, .. } => role,
            // Already pointing at the next role with nothing shown
            TypingPhase::PausedAfterDelete { .. } => return "",
        };
        prefix(&self.roles[role], self.visible)
    }

    /// Perform exactly one transition
    pub fn advance(&mut self) -> TypingStep<'_> {
        let (next, text_changed, delay) = match self.phase {
            TypingPhase::Typing { role, chars } => {
                let len = self.role_len(role);
                let shown = (chars + 1).min(len);
                self.visible = shown;
                if shown >= len {
                    (
                        TypingPhase::PausedAfterType { role },
                        true,
                        self.delays.pause_after_type,
                    )
                } else {
                    (
                        TypingPhase::Typing { role, chars: shown },
                        true,
                        self.delays.type_char,
                    )
                }
            }
            TypingPhase::PausedAfterType { role } => (
                TypingPhase::Deleting {
                    role,
                    chars: self.role_len(role),
                },
                false,
                Duration::ZERO,
            ),
            TypingPhase::Deleting { role, chars } => {
                let shown = chars.saturating_sub(1);
                self.visible = shown;
                if shown == 0 {
                    (
                        TypingPhase::PausedAfterDelete {
                            role: (role + 1) % self.roles.len(),
                        },
                        true,
                        self.delays.pause_after_delete,
                    )
                } else {
                    (
                        TypingPhase::Deleting { role, chars: shown },
                        true,
                        self.delays.delete_char,
                    )
                }
            }
            TypingPhase::PausedAfterDelete { role } => (
                TypingPhase::Typing { role, chars: 0 },
                false,
                Duration::ZERO,
            ),
        };

        self.phase = next;
        let text = if text_changed { Some(self.text()) } else { None };
        TypingStep { text, delay }
    }

    /// Advance through any zero-delay transitions until the machine asks to
    /// wait, reporting each text change to `on_text`. At most
    /// `MAX_INLINE_TRANSITIONS` are taken, after which the zero delay is
    /// returned as is.
    pub fn advance_until_wait<F>(&mut self, mut on_text: F) -> Duration
    where
        F: FnMut(&str),
    {
        let mut delay = Duration::ZERO;
        for _ in 0..MAX_INLINE_TRANSITIONS {
            let step = self.advance();
            if let Some(text) = step.text {
                on_text(text);
            }
            delay = step.delay;
            if !delay.is_zero() {
                break;
            }
        }
        delay
    }

    fn role_len(&self, role: usize) -> usize {
        self.roles[role].chars().count()
    }
}

/// First `chars` characters of `s`
fn prefix(s: &str, chars: usize) -> &str {
    match s.char_indices().nth(chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Transitions one timer tick may take before it has to wait
pub const MAX_INLINE_TRANSITIONS: usize = 4;

/// Upper bound on timer ticks in one `poll`
const MAX_TICKS_PER_POLL: usize = 1024;

/// Drives a `TypingMachine` from an injected clock
#[derive(Debug, Clone)]
pub struct TypingDriver {
    machine: TypingMachine,
    next_due_ms: f64,
}

impl TypingDriver {
    /// The first transition is due at `start_ms`
    pub fn new(machine: TypingMachine, start_ms: f64) -> Self {
        Self {
            machine,
            next_due_ms: start_ms,
        }
    }

    pub fn machine(&self) -> &TypingMachine {
        &self.machine
    }

    pub fn next_due_ms(&self) -> f64 {
        self.next_due_ms
    }

    /// Run every timer tick due at or before `now_ms`, reporting each text
    /// change to `on_text`. Returns the number of ticks taken.
    pub fn poll<F>(&mut self, now_ms: f64, mut on_text: F) -> usize
    where
        F: FnMut(&str),
    {
        let mut ticks = 0;
        while self.next_due_ms <= now_ms && ticks < MAX_TICKS_PER_POLL {
            let delay = self.machine.advance_until_wait(&mut on_text);
            self.next_due_ms += delay.as_millis() as f64;
            ticks += 1;
        }
        ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn machine(roles: &[&str]) -> TypingMachine {
        TypingMachine::new(
            roles.iter().map(|r| r.to_string()).collect(),
            TypingDelays::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_empty_role_list_rejected() {
        let result = TypingMachine::new(Vec::new(), TypingDelays::default());
        assert!(matches!(result, Err(AmbientError::NoRoles)));
    }

    #[test]
    fn test_single_role_scenario() {
        let mut m = machine(&["AB"]);
        let ms = |d: Duration| d.as_millis() as u64;

        let s = m.advance();
        assert_eq!((s.text, ms(s.delay)), (Some("A"), 80));
        let s = m.advance();
        assert_eq!((s.text, ms(s.delay)), (Some("AB"), 1800));
        assert_eq!(m.phase(), TypingPhase::PausedAfterType { role: 0 });

        // Leaving the pause is immediate and silent
        let s = m.advance();
        assert_eq!((s.text, ms(s.delay)), (None, 0));
        assert_eq!(m.phase(), TypingPhase::Deleting { role: 0, chars: 2 });

        let s = m.advance();
        assert_eq!((s.text, ms(s.delay)), (Some("A"), 40));
        let s = m.advance();
        assert_eq!((s.text, ms(s.delay)), (Some(""), 400));
        assert_eq!(m.phase(), TypingPhase::PausedAfterDelete { role: 0 });

        let s = m.advance();
        assert_eq!((s.text, ms(s.delay)), (None, 0));
        assert_eq!(m.phase(), TypingPhase::Typing { role: 0, chars: 0 });

        let s = m.advance();
        assert_eq!(s.text, Some("A"));
    }

    #[test]
    fn test_round_trip_reaches_next_role() {
        let mut m = machine(&["Software Engineer", "Data Scientist", "AI Engineer"]);
        let len = "Software Engineer".chars().count();
        for _ in 0..(len + 1 + len + 1) {
            m.advance();
        }
        assert_eq!(m.phase(), TypingPhase::Typing { role: 1, chars: 0 });
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        let roles = ["Software Engineer", "Data Scientist", "AI Engineer"];
        let mut m = machine(&roles);
        let transitions: usize = roles.iter().map(|r| 2 * r.chars().count() + 2).sum();

        for _ in 0..transitions {
            m.advance();
        }
        assert_eq!(m.phase(), TypingPhase::Typing { role: 0, chars: 0 });

        // And again, to show the cycle is stable
        for _ in 0..transitions {
            m.advance();
        }
        assert_eq!(m.phase(), TypingPhase::Typing { role: 0, chars: 0 });
    }

    #[test]
    fn test_text_never_exceeds_role() {
        let roles = ["Software Engineer", "x", "Data Scientist"];
        let mut m = machine(&roles);
        for _ in 0..500 {
            let phase = m.phase();
            let text = m.advance().text.map(str::to_owned);
            let role = match phase {
                TypingPhase::Typing { role, .. }
                | TypingPhase::PausedAfterType { role }
                | TypingPhase::Deleting { role, .. } => role,
                TypingPhase::PausedAfterDelete { role } => role,
            };
            if let Some(text) = text {
                assert!(roles[role].starts_with(&text));
                assert!(text.chars().count() <= roles[role].chars().count());
            }
        }
    }

    #[test]
    fn test_multibyte_roles() {
        let mut m = machine(&["héllo"]);
        let shown: Vec<String> = (0..5).filter_map(|_| m.advance().text.map(str::to_owned)).collect();
        assert_eq!(shown, vec!["h", "hé", "hél", "héll", "héllo"]);
    }

    #[test]
    fn test_empty_role_still_pauses() {
        let mut m = machine(&["", "A"]);
        let s = m.advance();
        assert_eq!(s.text, Some(""));
        assert_eq!(m.phase(), TypingPhase::PausedAfterType { role: 0 });
        m.advance();
        assert_eq!(m.phase(), TypingPhase::Deleting { role: 0, chars: 0 });
        let s = m.advance();
        assert_eq!(s.text, Some(""));
        assert_eq!(m.phase(), TypingPhase::PausedAfterDelete { role: 1 });
    }

    #[test]
    fn test_driver_timeline() {
        let mut driver = TypingDriver::new(machine(&["AB"]), 0.0);
        let mut log: Vec<(f64, String)> = Vec::new();

        for now in [0.0, 79.0, 80.0, 1879.0, 1880.0, 1920.0, 2319.0, 2320.0] {
            driver.poll(now, |t| log.push((now, t.to_string())));
        }

        let expected = vec![
            (0.0, "A"),
            (80.0, "AB"),
            (1880.0, "A"),
            (1920.0, ""),
            (2320.0, "A"),
        ];
        let log: Vec<(f64, &str)> = log.iter().map(|(t, s)| (*t, s.as_str())).collect();
        assert_eq!(log, expected);
        assert_eq!(driver.next_due_ms(), 2400.0);
    }

    #[test]
    fn test_driver_zero_delays_bounded() {
        let m = TypingMachine::new(vec!["AB".into()], TypingDelays::from_millis(0, 0, 0, 0)).unwrap();
        let mut driver = TypingDriver::new(m, 0.0);
        assert_eq!(driver.poll(0.0, |_| {}), MAX_TICKS_PER_POLL);
    }

    #[test]
    fn test_advance_until_wait_skips_pauses_inline() {
        let mut m = machine(&["AB"]);
        let mut shown = Vec::new();
        let mut waits = Vec::new();
        for _ in 0..5 {
            let delay = m.advance_until_wait(|t| shown.push(t.to_string()));
            waits.push(delay.as_millis() as u64);
        }
        // Leaving a pause costs no timer tick of its own
        assert_eq!(waits, vec![80, 1800, 40, 400, 80]);
        assert_eq!(shown, vec!["A", "AB", "A", "", "A"]);
        assert_eq!(m.phase(), TypingPhase::Typing { role: 0, chars: 1 });
    }

    #[test]
    fn test_advance_until_wait_from_pause() {
        let mut m = machine(&["AB"]);
        m.advance();
        m.advance();
        assert_eq!(m.phase(), TypingPhase::PausedAfterType { role: 0 });

        let mut shown = Vec::new();
        let delay = m.advance_until_wait(|t| shown.push(t.to_string()));
        assert_eq!(delay, Duration::from_millis(40));
        assert_eq!(shown, vec!["A"]);
    }

    #[test]
    fn test_advance_until_wait_bounded_by_zero_delays() {
        let mut m =
            TypingMachine::new(vec!["ABCDEFGH".into()], TypingDelays::from_millis(0, 0, 0, 0)).unwrap();
        let mut changes = 0;
        assert_eq!(m.advance_until_wait(|_| changes += 1), Duration::ZERO);
        assert_eq!(changes, MAX_INLINE_TRANSITIONS);
        assert_eq!(m.phase(), TypingPhase::Typing { role: 0, chars: 4 });
    }
}

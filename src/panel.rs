//! Widget-level panel state
//!
//! This module defines the small state machine of the chat panel:
//! - Closed <-> Open, toggled by the user
//! - Within Open: Idle -> Capturing (speech start) -> Idle, and
//!   Idle -> AwaitingReply (dispatch sent) -> Idle
//!
//! All transitions are user- or I/O-triggered; none are time-driven
//! beyond the transport timeout. Closing the panel does not cancel an
//! in-flight dispatch; the reply still lands on the log.

use colored::Colorize;
use std::fmt;

/// Whether the chat panel is open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    /// Panel hidden; only the floating toggle is visible
    Closed,
    /// Panel visible and accepting input
    Open,
}

impl fmt::Display for PanelState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Closed => write!(f, "CLOSED"),
            Self::Open => write!(f, "OPEN"),
        }
    }
}

impl PanelState {
    /// Toggles between Open and Closed
    ///
    /// # Examples
    ///
    /// ```
    /// use chatling::panel::PanelState;
    ///
    /// assert_eq!(PanelState::Closed.toggled(), PanelState::Open);
    /// assert_eq!(PanelState::Open.toggled(), PanelState::Closed);
    /// ```
    pub fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    /// Whether the panel is open
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

/// What the open panel is currently doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activity {
    /// Waiting for user input
    Idle,
    /// A speech recognition pass is running
    Capturing,
    /// A dispatch is in flight
    AwaitingReply,
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "IDLE"),
            Self::Capturing => write!(f, "CAPTURING"),
            Self::AwaitingReply => write!(f, "AWAITING"),
        }
    }
}

impl Activity {
    /// Get a colored tag representation of this activity
    ///
    /// # Returns
    ///
    /// A colored string suitable for display in terminal output
    pub fn colored_tag(&self) -> String {
        match self {
            Self::Idle => format!("[{}]", "IDLE".green()),
            Self::Capturing => format!("[{}]", "CAPTURING".yellow()),
            Self::AwaitingReply => format!("[{}]", "AWAITING".cyan()),
        }
    }
}

/// Current panel state
///
/// Tracks the open/closed state, the current activity, and the selected
/// language during a session.
#[derive(Debug, Clone)]
pub struct PanelStateMachine {
    /// Whether the panel is open
    pub panel: PanelState,
    /// Current activity within the open panel
    pub activity: Activity,
    /// Selected language tag for speech capabilities
    pub language: String,
}

impl PanelStateMachine {
    /// Create a new state machine with the panel closed and idle
    ///
    /// # Arguments
    ///
    /// * `language` - Initial language tag
    ///
    /// # Examples
    ///
    /// ```
    /// use chatling::panel::{Activity, PanelState, PanelStateMachine};
    ///
    /// let state = PanelStateMachine::new("en");
    /// assert_eq!(state.panel, PanelState::Closed);
    /// assert_eq!(state.activity, Activity::Idle);
    /// ```
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            panel: PanelState::Closed,
            activity: Activity::Idle,
            language: language.into(),
        }
    }

    /// Toggles the panel open or closed
    ///
    /// # Returns
    ///
    /// The new panel state
    pub fn toggle_panel(&mut self) -> PanelState {
        self.panel = self.panel.toggled();
        self.panel
    }

    /// Marks the start of a dispatch
    pub fn begin_dispatch(&mut self) {
        self.activity = Activity::AwaitingReply;
    }

    /// Marks the start of a recognition pass
    pub fn begin_capture(&mut self) {
        self.activity = Activity::Capturing;
    }

    /// Returns the panel to idle after a dispatch or capture finishes
    pub fn finish(&mut self) {
        self.activity = Activity::Idle;
    }

    /// Switch the selected language
    ///
    /// # Arguments
    ///
    /// * `language` - The new language tag
    ///
    /// # Returns
    ///
    /// The old language tag that was replaced
    pub fn switch_language(&mut self, language: impl Into<String>) -> String {
        std::mem::replace(&mut self.language, language.into())
    }

    /// Format a prompt string with state indicators
    ///
    /// # Examples
    ///
    /// ```
    /// use chatling::panel::PanelStateMachine;
    ///
    /// let mut state = PanelStateMachine::new("en");
    /// state.toggle_panel();
    /// assert_eq!(state.format_prompt(), "[OPEN][IDLE][en] >> ");
    /// ```
    pub fn format_prompt(&self) -> String {
        format!("[{}][{}][{}] >> ", self.panel, self.activity, self.language)
    }

    /// Format a prompt string with colored state indicators
    pub fn format_colored_prompt(&self) -> String {
        format!(
            "{}{} >> ",
            self.activity.colored_tag(),
            format!("[{}]", self.language).bold()
        )
    }
}

//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with
//! `use_context::<AppState>()`. The behavioural state machines themselves
//! live in `forest-core`; the signals only make them reactive.

use dioxus::prelude::*;
use forest_core::{ChatThread, Session};

/// Visual theme of the dashboard (the original shipped a dark and a light
/// variant; both collapse into this switch).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn page_style(&self) -> &'static str {
        match self {
            Theme::Dark => "background: #0a0a0a; color: #f3f4f6; min-height: 100vh; padding: 24px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",
            Theme::Light => "background: #f9fafb; color: #111827; min-height: 100vh; padding: 24px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",
        }
    }

    pub fn card_style(&self) -> &'static str {
        match self {
            Theme::Dark => "background: #1f2937; border: 1px solid #374151; border-radius: 8px; padding: 20px;",
            Theme::Light => "background: #ffffff; border: 1px solid #e5e7eb; border-radius: 8px; padding: 20px; box-shadow: 0 1px 3px rgba(0,0,0,0.1);",
        }
    }

    pub fn input_style(&self) -> &'static str {
        match self {
            Theme::Dark => "width: 100%; padding: 8px; background: #374151; color: #ffffff; border: 1px solid #4b5563; border-radius: 6px;",
            Theme::Light => "width: 100%; padding: 8px; background: #ffffff; color: #111827; border: 1px solid #d1d5db; border-radius: 6px;",
        }
    }

    pub fn muted_color(&self) -> &'static str {
        match self {
            Theme::Dark => "#9ca3af",
            Theme::Light => "#6b7280",
        }
    }

    /// Accent for headings, the submit button and the healthy status.
    pub fn accent_color(&self) -> &'static str {
        match self {
            Theme::Dark => "#a78bfa",
            Theme::Light => "#16a34a",
        }
    }

    /// Color for the forest health label. Anything that is not a decline or
    /// stable reading (the upstream emits `Expansion`) gets the accent.
    pub fn health_color(&self, status: &str) -> &'static str {
        match status {
            "Decline" => "#f87171",
            "Stable" => "#fbbf24",
            _ => self.accent_color(),
        }
    }
}

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Visual theme (fixed per app configuration).
    pub theme: Signal<Theme>,
    /// Filter state, fetched record, loading flag and error banner.
    pub session: Signal<Session>,
    /// Chat thread seeded by the analysis backend.
    pub chat: Signal<ChatThread>,
    /// Whether the chat widget is revealed.
    pub show_chat: Signal<bool>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self::with_theme(Theme::Dark)
    }

    pub fn with_theme(theme: Theme) -> Self {
        Self {
            theme: Signal::new(theme),
            session: Signal::new(Session::new()),
            chat: Signal::new(ChatThread::new()),
            show_chat: Signal::new(false),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

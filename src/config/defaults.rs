// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application.

// ==========================================================================
// Language Defaults
// ==========================================================================

/// Content languages offered by the language picker, in display order.
pub const SUPPORTED_LANGUAGES: [&str; 3] = ["en", "tr", "de"];

/// Content language used when nothing else selects one.
pub const DEFAULT_LANGUAGE: &str = "en";

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Maximum width of the release list column (logical pixels).
pub const CONTENT_MAX_WIDTH: f32 = 760.0;

/// Default window size.
pub const WINDOW_DEFAULT_WIDTH: u32 = 820;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 680;

/// Smallest window the layout is designed for.
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 360;

// ==========================================================================
// Compile-time validation
// ==========================================================================

const _: () = {
    assert!(WINDOW_DEFAULT_WIDTH >= MIN_WINDOW_WIDTH);
    assert!(WINDOW_DEFAULT_HEIGHT >= MIN_WINDOW_HEIGHT);
    assert!(CONTENT_MAX_WIDTH <= WINDOW_DEFAULT_WIDTH as f32);
    assert!(!SUPPORTED_LANGUAGES.is_empty());
};

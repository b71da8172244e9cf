// SPDX-License-Identifier: MPL-2.0
//! User interface components and styling.
//!
//! Follows the Elm-style "state down, messages up" pattern: screens expose a
//! `view` taking a context of borrowed state and an `update` that returns an
//! event for the parent application.
//!
//! - [`changelog`] - Release-notes screen with collapsible releases
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod changelog;
pub mod design_tokens;
pub mod styles;
pub mod theming;

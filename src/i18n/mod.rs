// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module localizes the application chrome (window title, toolbar,
//! empty state) using the Fluent localization system. Release content is
//! catalog data and is never routed through Fluent.
//!
//! # Features
//!
//! - Automatic locale detection from CLI, config, or system settings
//! - Embedded `.ftl` translation files, optionally overridden from a directory
//! - Runtime language switching
//! - Resolution of the content language code used for catalog lookups

pub mod fluent;

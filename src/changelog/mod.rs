// SPDX-License-Identifier: MPL-2.0
//! Release-notes core: catalog data, date formatting, disclosure state and
//! the pure rendering of localized content.
//!
//! # Data flow
//!
//! ```text
//! ReleaseCatalog ──► render(catalog, language, &DisclosureState) ──► ChangelogTree
//!                                   ▲
//!               header click ──► DisclosureState::toggle(version)
//! ```
//!
//! # Examples
//!
//! ```
//! use iced_changelog::changelog::{render, DisclosureState, Release, ReleaseCatalog};
//!
//! let catalog = ReleaseCatalog::new(vec![Release::new("1.0.0").with_date("2024-01-10")]);
//! let mut state = DisclosureState::new();
//!
//! let tree = render(&catalog, "en", &state);
//! assert_eq!(tree.releases[0].header.summary(), "1.0.0 • Jan 10, 2024");
//! assert!(tree.releases[0].body.is_none());
//!
//! state.toggle("1.0.0");
//! assert!(render(&catalog, "en", &state).releases[0].body.is_some());
//! ```

pub mod catalog;
pub mod date;
pub mod disclosure;
pub mod model;
pub mod render;

pub use catalog::ReleaseCatalog;
pub use date::{format_release_date, DateLocale};
pub use disclosure::DisclosureState;
pub use model::{LocalizedList, LocalizedText, Release, Section};
pub use render::{render, ChangelogTree, ReleaseEntry, ReleaseHeader, SectionEntry};

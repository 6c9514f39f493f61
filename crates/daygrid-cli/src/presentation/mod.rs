//! # Presentation Layer
//!
//! MVVM split, same for console and TUI output:
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> serde_json
//!                                                                  ==(Text)==> [ View ]
//!
//! [ TUI Renderer ] --key/mouse--> [ Component ] --Action--> [ CalendarPicker ]
//!        |                                                          |
//!        +<--------------- [ ViewModel ] <-- [ Presenter ] <--------+
//! ```
//!
//! * `view_models/` holds raw data only (dates, indices, flags). It is the JSON API.
//! * `presenters/` turns engine state into view models.
//! * `views/` owns layout and styling (`fmt::Display` or ratatui `Widget`).
//! * `components/` owns TUI cursor state and maps input to actions.
//! * `renderers/` picks the output channel and routes input; no calendar logic.

pub mod components;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::ConsoleRenderer;
pub use view_models::{CreateView, TextStyle};

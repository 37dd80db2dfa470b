//! # Core Carousel Logic
//!
//! The slide-index state machine. It knows nothing about terminals,
//! widgets or real time.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • index (arithmetic)   │
//!                    │  • controller (modes)   │
//!                    │  • timer (clock/handle) │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                 ┌──────────────┴──────────────┐
//!                 ▼                             ▼
//!          ┌────────────┐                ┌────────────┐
//!          │    TUI     │                │   Tests    │
//!          │  Adapter   │                │ (manual    │
//!          │ (ratatui)  │                │  clock)    │
//!          └────────────┘                └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`index`]: wraparound stepping (`advance`, `apply_step`)
//! - [`intent`]: `Direction` and `NavigationIntent`
//! - [`controller`]: `CarouselController`, controlled/uncontrolled duality
//! - [`timer`]: `Clock`, `ManualClock`, `TimerHandle`
//! - [`slide`]: slide records and TOML decks
//! - [`config`]: layered settings for the binary
//! - [`error`]: `CarouselError` and `Anomaly`

pub mod config;
pub mod controller;
pub mod error;
pub mod index;
pub mod intent;
pub mod slide;
pub mod timer;

pub use controller::{Callbacks, CarouselController, CarouselProps, ControlMode};
pub use error::{Anomaly, CarouselError};

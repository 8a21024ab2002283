//! # Home Feed
//!
//! > **The state and loading core of an Instagram-style client, on Tokio.**
//!
//! This crate holds everything behind the client's screens that is not drawing:
//! an observable snapshot per screen, the view model that fills it from the
//! backend, the story player's timer, and the small form and dialog models.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### One writer per screen state
//!
//! A screen's state is a plain value ([`HomeUiState`](model::HomeUiState)). Many tasks
//! want to change it (one per fetch), and each change is a *reducer*: a function
//! from the previous snapshot to the next. A [`StateActor`](framework::StateActor)
//! owns the snapshot and applies reducers one at a time. A load that finishes
//! late can therefore never overwrite what a load of another section wrote in
//! the meantime, and a reload of the same section only keeps the newest answer.
//!
//! ### Sections, not flags
//!
//! Each independently loaded part of a screen is a
//! [`LoadState`](model::LoadState): `Idle`, `Loading`, `Loaded(data)` or
//! `Failed(message)`. Data and an error cannot coexist within a section.
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### 1. Errors
//! Fetch failures are *state*, not return values: they become `Failed(message)`
//! and the screen shows the message. Plumbing failures (a closed store, a
//! task that panicked) are typed errors: [`FrameworkError`](framework::FrameworkError),
//! [`HomeError`](home::HomeError), [`GatewayError`](gateway::GatewayError).
//!
//! ### 2. Concurrency Model
//! Fetches run as Tokio tasks. Results are published by the store actor, and
//! the presentation layer observes them through a `watch` receiver.
//!
//! ### 3. Observability
//! `tracing` with structured fields throughout. See [`lifecycle::tracing`].
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic single-writer store.
//! - **Key items**: [`StateActor`](framework::StateActor), [`StateClient`](framework::StateClient).
//!
//! ### 2. The Boundary ([`gateway`])
//! The backend contract and two offline implementations.
//! - **Key items**: [`HomeGateway`](gateway::HomeGateway), [`FixtureGateway`](gateway::FixtureGateway),
//!   [`MockGateway`](gateway::MockGateway).
//!
//! ### 3. The Screens ([`home`], [`story`], [`profile`], [`dialog`])
//! - **Key items**: [`HomeViewModel`](home::HomeViewModel), [`StoryActor`](story::StoryActor),
//!   [`EditTextForm`](profile::EditTextForm), [`DialogSpec`](dialog::DialogSpec).
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! Spins up a screen session and tears it down.
//! - **Key items**: [`HomeSystem`](lifecycle::HomeSystem), [`setup_tracing`](lifecycle::setup_tracing).
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demo with info logs
//! RUST_LOG=info cargo run
//!
//! # Skip the minimum loading times
//! HOME_FEED_USER_DELAY_MS=0 HOME_FEED_POSTS_DELAY_MS=0 cargo run
//! ```

pub mod dialog;
pub mod framework;
pub mod gateway;
pub mod home;
pub mod lifecycle;
pub mod model;
pub mod profile;
pub mod story;

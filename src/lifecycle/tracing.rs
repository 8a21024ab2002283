//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a `tracing-subscriber` fmt subscriber for the binary.
//!
//! ## Configuration
//!
//! Compact format without the crate/module prefix (`with_target(false)`).
//! Log levels come from `RUST_LOG`.
//!
//! ## What Gets Traced
//!
//! - **Store lifecycle**: `Store started`, `Reset`, and `Shutdown` with the final snapshot
//! - **Loads**: one `load` span per fetch carrying `section` and `generation`,
//!   with `Loaded` or `Load failed error=...` inside it. The compact format prints
//!   span fields after the event's own fields.
//! - **Store changes** (debug): every applied reducer with its label and the new snapshot
//! - **Stories**: player start/stop, and at debug level each command and advance
//!
//! ## Usage Examples
//!
//! ```bash
//! # Load outcomes only
//! RUST_LOG=info cargo run
//!
//! # Every state transition with the full snapshot
//! RUST_LOG=debug cargo run
//!
//! # Store internals only
//! RUST_LOG=home_feed::framework=debug cargo run
//! ```
//!
//! ## Workflow Trace Example
//!
//! **With `RUST_LOG=info`**:
//!
//! ```text
//! INFO Store started state_type="HomeUiState"
//! INFO load: Loaded section=Posts generation=1
//! INFO load: Loaded section=Profile generation=1
//! INFO Home state cleared
//! INFO Shutdown state_type="HomeUiState" final_state=HomeUiState { profile: Idle, posts: Idle }
//! ```
//!
//! **With `RUST_LOG=debug`** the same run also shows each reducer:
//!
//! ```text
//! DEBUG Applied state_type="HomeUiState" label="profile_loading" next=HomeUiState { profile: Loading, posts: Idle }
//! DEBUG Applied state_type="HomeUiState" label="posts_loading" next=HomeUiState { profile: Loading, posts: Loading }
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}

//! Client for the Sector Alarm app API: arm state, door locks, temperature
//! sensors, ethernet status and the event log. The API's short date strings
//! (`MM/DD HH:MM`, `Today HH:MM`, `Yesterday HH:MM`) are normalized to
//! absolute ISO-8601 timestamps before they reach the caller.
//!
//! ```no_run
//! use sectoralarm::Session;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), sectoralarm::SessionError> {
//!     let session = Session::create("user@example.com", "password", "01234567").await?;
//!
//!     let state = session.arm_state().await?;
//!     println!("{} since {}", state.fields["statusType"], state.time);
//!     Ok(())
//! }
//! ```

mod domain;
mod error;
mod response;
mod session;
mod short_date;
mod urls;

pub use domain::{ArmLevel, ArmState, HistoryEntry, TemperatureReading};
pub use error::SessionError;
pub use session::{Credentials, PanelSession, Session, SessionBuilder};
pub use short_date::ShortDateError;

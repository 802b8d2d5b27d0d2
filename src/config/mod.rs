//! Configuration loading for the Roster Engine.
//!
//! Scheduler settings (week start, copy lookback, report rounding and the
//! rotation templates) are read from a single YAML file.
//!
//! # Example
//!
//! ```no_run
//! use roster_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config").unwrap();
//! println!("Weeks start on {:?}", loader.week_start());
//! ```

mod loader;
mod types;

pub use loader::{CONFIG_FILE_NAME, ConfigLoader};
pub use types::{
    ClockWindow, CopyConfig, ReportingConfig, RotationConfig, SchedulerConfig, WeekStart,
};

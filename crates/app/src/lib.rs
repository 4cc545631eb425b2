//! Newsdesk App Library
//!
//! The state layer a UI shell binds to: the session store, headless page
//! controllers, configuration, and background tickers. Rendering, routing
//! tables, and styling live in the embedding shell, not here.

pub mod config;
pub mod error;
pub mod pages;
pub mod state;
pub mod tasks;

pub use config::AppConfig;
pub use error::{Error, Result};
pub use pages::{
    AdminNews, AdminPeople, NewsFeed, NewsForm, PeopleDirectory, PersonDetail, PersonForm,
    VideoNews,
};
pub use state::{Domain, SessionStore};
pub use tasks::{feed_refresh, session_watchdog, Ticker};

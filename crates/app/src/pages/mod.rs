//! Headless page controllers
//!
//! Each page owns independent loading/error/data state, fetches on mount
//! and on dependency change, and exposes a retry that re-issues the
//! identical prior fetch. Rendering belongs to the embedding shell.

mod admin;
mod news;
mod people;
mod person;

pub use admin::{AdminNews, AdminPeople, NewsForm, PersonForm};
pub use news::{NewsFeed, VideoNews};
pub use people::PeopleDirectory;
pub use person::PersonDetail;

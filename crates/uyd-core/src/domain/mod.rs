//! Domain entities.
//!
//! Programs, events and news articles are independent aggregates: there are
//! no relationships between them. Each carries the same soft-delete flag
//! (`is_active`) and audit timestamps.

mod event;
mod news;
mod program;

pub use event::{Event, EventPatch, NewEvent};
pub use news::{NewNewsArticle, NewsArticle, NewsArticlePatch};
pub use program::{NewProgram, Program, ProgramPatch};

//! Omnibar Navigation
//!
//! Decides what a line typed into the command bar should do:
//!   1. Empty → configured new-tab target, or the built-in new-tab page
//!   2. `scheme:...` that parses → open it
//!   3. Search-URL alias → expand the template
//!   4. Search-engine alias → search with that engine
//!   5. Bare domain (`example.com`, `host:8080`) → open it over http
//!   6. Configured default engine, else the browser's own default search
//!
//! `search foo` forces a search for `foo` even when it would match a rule above.

mod classify;
mod engine;
mod error;
mod query;
mod search_url;

pub use classify::{
    classify, classify_without_engines, ClassifiedAddress, ClassifierConfig, ClassifyInput, Rule,
};
pub use engine::{find_by_alias, SearchEngine};
pub use error::NavigationError;
pub use query::AddressQuery;
pub use search_url::{encode_component, expand, parse_template, PLACEHOLDER};

pub type Result<T> = std::result::Result<T, NavigationError>;

//! Spark SSO Helpers
//!
//! After a single sign-on redirect the identity provider hands data back in
//! the query string, e.g. `https://app.example.com/#/home?access_token=...`.
//!
//! - [`resolve_url_search_params`]: read the query, hash-mode URLs included
//! - [`remove_url_search_params`]: drop consumed params from the URL
//! - [`parse_url`]: match the query against parameter groups
//!   (`success: [access_token]`, `error: [error]`) and return the data of
//!   the first complete group together with a cleaned URL

mod params;
mod parse;
mod search;

pub use params::{GroupKey, Param, ParamGroup, ParamGroups};
pub use parse::{parse_url, ParseUrlResult};
pub use search::{remove_url_search_params, resolve_url_search_params, RemoveParams, SearchParams};

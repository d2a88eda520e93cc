//! Callback URL parsing

use crate::params::{ParamGroup, ParamGroups};
use crate::search::{remove_url_search_params, resolve_url_search_params, RemoveParams, SearchParams};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseUrlResult {
    /// The group that matched
    pub group: ParamGroup,
    /// Value of each group param in declaration order, `None` when an
    /// optional param is missing
    pub data: Vec<(String, Option<String>)>,
    /// The URL as given
    pub raw_url: String,
    /// The URL without the group's params
    pub clean_url: String,
}

impl ParseUrlResult {
    /// Value of a group param
    pub fn get(&self, name: &str) -> Option<&str> {
        self.data
            .iter()
            .find(|(n, _)| n == name)
            .and_then(|(_, v)| v.as_deref())
    }
}

/// Match the query of `url` against `groups`.
///
/// Returns `None` when the URL carries no params or no group is complete.
/// Groups without params never match.
pub fn parse_url(url: impl AsRef<str>, groups: &ParamGroups) -> Option<ParseUrlResult> {
    let url = url.as_ref();
    let search_params = resolve_url_search_params(url);

    if search_params.is_empty() {
        return None;
    }

    let group = groups
        .clone()
        .normalize()
        .into_iter()
        .find(|group| validate_group(&search_params, group))?;

    tracing::debug!(group = %group.key, "SSO callback parameters matched");

    Some(ParseUrlResult {
        data: pick_group_data(&search_params, &group),
        raw_url: url.to_string(),
        clean_url: remove_url_search_params(url, RemoveParams::Names(group.param_names())),
        group,
    })
}

fn validate_group(search_params: &SearchParams, group: &ParamGroup) -> bool {
    !group.params.is_empty()
        && group
            .params
            .iter()
            .all(|param| !param.required || search_params.has(&param.name))
}

fn pick_group_data(search_params: &SearchParams, group: &ParamGroup) -> Vec<(String, Option<String>)> {
    group
        .params
        .iter()
        .map(|param| {
            (
                param.name.clone(),
                search_params.get(&param.name).map(str::to_string),
            )
        })
        .collect()
}

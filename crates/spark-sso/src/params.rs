//! Parameter groups
//!
//! A group is matched when all of its required params are present. Params
//! are required unless marked otherwise.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ParamRaw", into = "ParamRaw")]
pub struct Param {
    pub name: String,
    pub required: bool,
}

impl Param {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: true,
        }
    }

    pub fn optional(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: false,
        }
    }
}

impl From<&str> for Param {
    fn from(name: &str) -> Self {
        Param::new(name)
    }
}

impl From<String> for Param {
    fn from(name: String) -> Self {
        Param::new(name)
    }
}

/// Serialized form: `"name"` or `{ "name": "...", "required": false }`
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum ParamRaw {
    Name(String),
    Full {
        name: String,
        #[serde(default = "default_required")]
        required: bool,
    },
}

fn default_required() -> bool {
    true
}

impl From<ParamRaw> for Param {
    fn from(raw: ParamRaw) -> Self {
        match raw {
            ParamRaw::Name(name) => Param::new(name),
            ParamRaw::Full { name, required } => Param { name, required },
        }
    }
}

impl From<Param> for ParamRaw {
    fn from(param: Param) -> Self {
        if param.required {
            ParamRaw::Name(param.name)
        } else {
            ParamRaw::Full {
                name: param.name,
                required: false,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GroupKey {
    /// The only group of [`ParamGroups::Default`], `null` in JSON
    Default,
    Named(String),
}

impl std::fmt::Display for GroupKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GroupKey::Default => write!(f, "default"),
            GroupKey::Named(name) => write!(f, "{}", name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamGroup {
    pub key: GroupKey,
    pub params: Vec<Param>,
}

impl ParamGroup {
    pub fn new<I, P>(key: GroupKey, params: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Param>,
    {
        Self {
            key,
            params: params.into_iter().map(Into::into).collect(),
        }
    }

    pub fn param_names(&self) -> Vec<String> {
        self.params.iter().map(|p| p.name.clone()).collect()
    }
}

/// Groups tried in declaration order.
///
/// In JSON a plain list is the default group:
/// ```json
/// ["access_token", "domain"]
/// ```
/// and a list of keyed groups declares several:
/// ```json
/// [
///   { "key": "success", "params": ["access_token", { "name": "domain", "required": false }] },
///   { "key": "error", "params": ["error"] }
/// ]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamGroups {
    Default(Vec<Param>),
    Named(Vec<ParamGroup>),
}

impl ParamGroups {
    pub fn default_group<I, P>(params: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Param>,
    {
        ParamGroups::Default(params.into_iter().map(Into::into).collect())
    }

    pub fn named() -> Self {
        ParamGroups::Named(Vec::new())
    }

    /// Append a named group. An existing default group keeps its key and
    /// stays first.
    pub fn group<I, P>(self, key: impl Into<String>, params: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Param>,
    {
        let mut groups = self.normalize();
        groups.push(ParamGroup::new(GroupKey::Named(key.into()), params));
        ParamGroups::Named(groups)
    }

    /// Flatten into keyed groups
    pub fn normalize(self) -> Vec<ParamGroup> {
        match self {
            ParamGroups::Default(params) => vec![ParamGroup {
                key: GroupKey::Default,
                params,
            }],
            ParamGroups::Named(groups) => groups,
        }
    }
}

impl Default for ParamGroups {
    fn default() -> Self {
        ParamGroups::Default(Vec::new())
    }
}

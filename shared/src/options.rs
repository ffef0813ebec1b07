//! Optional filters accepted by the list and search endpoints, and their
//! serialization into a query string.

use urlencoding::encode;

/// Anything that can be turned into the query part of a request URL.
///
/// Pairs keep the order they are declared in. Absent values never produce a key.
pub trait QueryParams: Send + Sync {
    fn query_pairs(&self) -> Vec<(&'static str, String)>;

    fn to_query_string(&self) -> String {
        self.query_pairs()
            .iter()
            .map(|(key, value)| format!("{}={}", key, encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl QueryParams for () {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }
}

impl<T: QueryParams> QueryParams for Option<T> {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        self.as_ref().map(T::query_pairs).unwrap_or_default()
    }
}

fn push<V: ToString>(pairs: &mut Vec<(&'static str, String)>, key: &'static str, value: &Option<V>) {
    if let Some(value) = value {
        pairs.push((key, value.to_string()));
    }
}

/// Pagination cursors shared by every list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub limit: Option<u32>,
    pub after: Option<String>,
    pub before: Option<String>,
}

impl FilterOptions {
    pub fn with_limit(limit: u32) -> Self {
        Self {
            limit: Some(limit),
            ..Default::default()
        }
    }
}

impl QueryParams for FilterOptions {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push(&mut pairs, "limit", &self.limit);
        push(&mut pairs, "after", &self.after);
        push(&mut pairs, "before", &self.before);
        pairs
    }
}

/// Clan search criteria. At least one criterion is expected by the API, this
/// type does not enforce it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClanSearchOptions {
    pub name: Option<String>,
    pub war_frequency: Option<String>,
    pub location_id: Option<u32>,
    pub min_members: Option<u32>,
    pub max_members: Option<u32>,
    pub min_clan_points: Option<u32>,
    pub min_clan_level: Option<u32>,
    pub limit: Option<u32>,
    pub after: Option<String>,
    pub before: Option<String>,
    pub label_ids: Vec<u64>,
}

impl From<&str> for ClanSearchOptions {
    fn from(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            ..Default::default()
        }
    }
}

impl From<String> for ClanSearchOptions {
    fn from(name: String) -> Self {
        Self {
            name: Some(name),
            ..Default::default()
        }
    }
}

impl QueryParams for ClanSearchOptions {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push(&mut pairs, "name", &self.name);
        push(&mut pairs, "warFrequency", &self.war_frequency);
        push(&mut pairs, "locationId", &self.location_id);
        push(&mut pairs, "minMembers", &self.min_members);
        push(&mut pairs, "maxMembers", &self.max_members);
        push(&mut pairs, "minClanPoints", &self.min_clan_points);
        push(&mut pairs, "minClanLevel", &self.min_clan_level);
        push(&mut pairs, "limit", &self.limit);
        push(&mut pairs, "after", &self.after);
        push(&mut pairs, "before", &self.before);
        if !self.label_ids.is_empty() {
            let ids = self
                .label_ids
                .iter()
                .map(u64::to_string)
                .collect::<Vec<_>>()
                .join(",");
            pairs.push(("labelIds", ids));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_and_after_keep_declaration_order() {
        let opts = FilterOptions {
            limit: Some(5),
            after: Some("xyz".to_string()),
            before: None,
        };

        assert_eq!(opts.to_query_string(), "limit=5&after=xyz");
    }

    #[test]
    fn absent_options_serialize_to_empty_string() {
        assert_eq!(FilterOptions::default().to_query_string(), "");
        assert_eq!(None::<FilterOptions>.to_query_string(), "");
        assert_eq!(().to_query_string(), "");
    }

    #[test]
    fn clan_search_from_name_encodes_value() {
        let opts = ClanSearchOptions::from("Reddit Example");

        assert_eq!(opts.to_query_string(), "name=Reddit%20Example");
    }

    #[test]
    fn clan_search_joins_label_ids() {
        let opts = ClanSearchOptions {
            war_frequency: Some("always".to_string()),
            min_members: Some(10),
            label_ids: vec![56000000, 56000001],
            ..Default::default()
        };

        assert_eq!(
            opts.to_query_string(),
            "warFrequency=always&minMembers=10&labelIds=56000000%2C56000001"
        );
    }

    #[test]
    fn cursor_values_are_percent_encoded() {
        let opts = FilterOptions {
            before: Some("eyJwb3MiOjF9=".to_string()),
            ..Default::default()
        };

        assert_eq!(opts.to_query_string(), "before=eyJwb3MiOjF9%3D");
    }
}

//! Conversion between pair sequences and insertion-ordered maps.

use datapair_types::DataPair;
use indexmap::IndexMap;

/// String map that remembers insertion order.
pub type PairMap = IndexMap<String, String>;

/// Collect pairs into a map, in sequence order.
///
/// A key seen more than once takes the value of its last occurrence and
/// keeps the position of its first.
pub fn to_map(pairs: &[DataPair]) -> PairMap {
    let mut map = PairMap::with_capacity(pairs.len());
    for pair in pairs {
        map.insert(pair.key().to_string(), pair.value().to_string());
    }
    map
}

/// One pair per map entry, in insertion order.
pub fn from_map(map: &PairMap) -> Vec<DataPair> {
    map.iter()
        .map(|(key, value)| DataPair::new(key.as_str(), value.as_str()))
        .collect()
}

/// Lazily turn pairs into `(key, value)` entries.
pub fn to_entries<I>(pairs: I) -> impl Iterator<Item = (String, String)>
where
    I: IntoIterator<Item = DataPair>,
{
    pairs.into_iter().map(DataPair::into_entry)
}

/// Lazily turn `(key, value)` entries into pairs.
pub fn from_entries<I, K, V>(entries: I) -> impl Iterator<Item = DataPair>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    entries.into_iter().map(DataPair::from_entry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_write_wins() {
        let pairs = vec![DataPair::new("k", "a"), DataPair::new("k", "b")];
        let map = to_map(&pairs);
        assert_eq!(map.len(), 1);
        assert_eq!(map["k"], "b");
    }

    #[test]
    fn duplicate_keeps_first_position() {
        let pairs = vec![
            DataPair::new("x", "1"),
            DataPair::new("y", "2"),
            DataPair::new("x", "3"),
        ];
        let map = to_map(&pairs);
        let entries: Vec<(&str, &str)> = map.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
        assert_eq!(entries, [("x", "3"), ("y", "2")]);
    }

    #[test]
    fn from_map_preserves_insertion_order() {
        let mut map = PairMap::new();
        map.insert("zeta".into(), "1".into());
        map.insert("alpha".into(), "2".into());
        map.insert("mid".into(), "3".into());

        let keys: Vec<String> = from_map(&map).iter().map(|p| p.key().to_string()).collect();
        assert_eq!(keys, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn map_roundtrip() {
        let mut map = PairMap::new();
        map.insert("a".into(), "x=y".into());
        map.insert("b".into(), String::new());
        assert_eq!(to_map(&from_map(&map)), map);
    }

    #[test]
    fn entry_helpers() {
        let pairs: Vec<DataPair> = from_entries([("a", "1"), ("b", "2")]).collect();
        assert_eq!(pairs[1], DataPair::new("b", "2"));

        let entries: Vec<(String, String)> = to_entries(pairs).collect();
        assert_eq!(entries[0], ("a".to_string(), "1".to_string()));
    }
}

//! Ordering of keyed entries by key.

use std::cmp::Ordering;

/// Returns the values ordered by key, largest key first.
///
/// With `reverse` the result is the exact reverse of the descending order.
/// Equal keys keep their input order in the descending result.
pub fn order_object_by<K: Ord, V>(mut entries: Vec<(K, V)>, reverse: bool) -> Vec<V> {
    entries.sort_by(|(a, _), (b, _)| b.cmp(a));
    into_values(entries, reverse)
}

/// Like [`order_object_by`], with the sort key taken from each entry by `sort_key`.
pub fn order_object_by_key<K, V, S, F>(mut entries: Vec<(K, V)>, sort_key: F, reverse: bool) -> Vec<V>
where
    S: Ord,
    F: Fn(&K, &V) -> S,
{
    entries.sort_by(|(ka, va), (kb, vb)| sort_key(kb, vb).cmp(&sort_key(ka, va)));
    into_values(entries, reverse)
}

fn into_values<K, V>(entries: Vec<(K, V)>, reverse: bool) -> Vec<V> {
    let mut values: Vec<V> = entries.into_iter().map(|(_, value)| value).collect();
    if reverse {
        values.reverse();
    }
    values
}

/// Key of a JSON object entry: numeric keys sort by value, all others as text
/// above every number.
#[derive(Debug, Clone, PartialEq)]
pub enum ObjectKey {
    Number(f64),
    Text(String),
}

impl ObjectKey {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().parse::<f64>() {
            Ok(number) if number.is_finite() => ObjectKey::Number(number),
            _ => ObjectKey::Text(raw.to_string()),
        }
    }
}

impl Eq for ObjectKey {}

impl PartialOrd for ObjectKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ObjectKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (ObjectKey::Number(a), ObjectKey::Number(b)) => a.total_cmp(b),
            (ObjectKey::Number(_), ObjectKey::Text(_)) => Ordering::Less,
            (ObjectKey::Text(_), ObjectKey::Number(_)) => Ordering::Greater,
            (ObjectKey::Text(a), ObjectKey::Text(b)) => a.cmp(b),
        }
    }
}

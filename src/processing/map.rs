//! Value mapping for [`crate::types::OrderedMap`].

use crate::types::OrderedMap;

/// Returns a new map with every value replaced by `mapper(key, value)`.
///
/// Keys and their order are unchanged.
pub fn map<V, F>(map: &OrderedMap<V>, mut mapper: F) -> OrderedMap<V>
where
    F: FnMut(&str, &V) -> V,
{
    map.iter().map(|(k, v)| (k.clone(), mapper(k.as_str(), v))).collect()
}

/// Replaces every value in place with `mapper(key, value)`.
pub(crate) fn map_in_place<V, F>(map: &mut OrderedMap<V>, mut mapper: F)
where
    F: FnMut(&str, &V) -> V,
{
    for (k, v) in map.iter_mut() {
        let next = mapper(k.as_str(), &*v);
        *v = next;
    }
}

#[cfg(test)]
mod tests {
    use super::{map, map_in_place};
    use crate::types::{OrderedMap, Value};

    fn sample_map() -> OrderedMap<Value> {
        let mut m = OrderedMap::new();
        m.insert("name".to_string(), Value::from("Jamie"));
        m.insert("age".to_string(), Value::from(29));
        m
    }

    #[test]
    fn map_transforms_values_and_preserves_keys() {
        let m = sample_map();
        let out = map(&m, |k, v| Value::from(format!("k={k}, v={v}")));

        assert_eq!(out.keys().collect::<Vec<_>>(), vec!["name", "age"]);
        assert_eq!(out["name"], Value::from("k=name, v=Jamie"));
        assert_eq!(out["age"], Value::from("k=age, v=29"));
        // Original unchanged
        assert_eq!(m["age"], Value::from(29));
    }

    #[test]
    fn map_in_place_visits_pairs_in_order() {
        let mut m = sample_map();
        let mut order = Vec::new();
        map_in_place(&mut m, |k, v| {
            order.push(k.to_string());
            match v {
                Value::Int64(n) => Value::Int64(n + 1),
                other => other.clone(),
            }
        });
        assert_eq!(order, vec!["name", "age"]);
        assert_eq!(m["age"], Value::from(30));
        assert_eq!(m["name"], Value::from("Jamie"));
    }
}

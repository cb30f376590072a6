/// Running per-key totals. Keys iterate in the order they were first added.
#[derive(Debug, Clone)]
pub struct Aggregate<K, V> {
    keys: Vec<K>,
    m: std::collections::HashMap<K, V>,
    sum: V,
}

impl<K, V> Default for Aggregate<K, V>
where
    V: Default,
{
    fn default() -> Self {
        Self {
            keys: Default::default(),
            m: Default::default(),
            sum: Default::default(),
        }
    }
}

impl<K, V> PartialEq for Aggregate<K, V>
where
    K: Eq + std::hash::Hash,
    V: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.keys == other.keys && self.m == other.m && self.sum == other.sum
    }
}

impl<K, V> Eq for Aggregate<K, V>
where
    K: Eq + std::hash::Hash,
    V: Eq,
{
}

impl<K, V> Aggregate<K, V> {
    pub fn sum(&self) -> V
    where
        V: Copy,
    {
        self.sum
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn add(&mut self, key: K, value: V)
    where
        K: Copy + Eq + std::hash::Hash,
        V: Copy + Default + std::ops::AddAssign,
    {
        if !self.m.contains_key(&key) {
            self.keys.push(key);
        }
        *(self.m.entry(key).or_default()) += value;
        self.sum += value;
    }

    pub fn get(&self, key: K) -> Option<V>
    where
        K: Copy + Eq + std::hash::Hash,
        V: Copy,
    {
        self.m.get(&key).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (K, V)> + '_
    where
        K: Copy + Eq + std::hash::Hash,
        V: Copy + Default,
    {
        self.keys
            .iter()
            .map(|k| (*k, self.m.get(k).copied().unwrap_or_default()))
    }

    /// Returns at most `limit` entries by descending value. Equal values keep
    /// first-added order.
    pub fn ranked(&self, limit: usize) -> Vec<(K, V)>
    where
        K: Copy + Eq + std::hash::Hash,
        V: Copy + Default + Ord,
    {
        let mut v = self.iter().collect::<Vec<_>>();
        v.sort_by(|a, b| b.1.cmp(&a.1));
        v.truncate(limit);
        v
    }
}

impl<K, V> FromIterator<(K, V)> for Aggregate<K, V>
where
    K: Copy + Eq + std::hash::Hash,
    V: Copy + Default + std::ops::AddAssign,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut agg = Aggregate::<K, V>::default();
        for (k, v) in iter {
            agg.add(k, v);
        }
        agg
    }
}

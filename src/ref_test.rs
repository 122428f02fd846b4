// Dense reference index, entry for key `k` lives at entries[k].
struct RefNodes {
    entries: Vec<Option<i64>>,
}

impl RefNodes {
    fn new(capacity: usize) -> RefNodes {
        RefNodes {
            entries: vec![None; capacity],
        }
    }

    fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    fn get(&self, key: i64) -> Option<i64> {
        self.entries[key as usize]
    }

    fn create(&mut self, key: i64, value: i64) -> bool {
        let entry = &mut self.entries[key as usize];
        match entry {
            Some(_) => false,
            None => {
                *entry = Some(value);
                true
            }
        }
    }

    fn insert(&mut self, key: i64, value: i64) -> Option<i64> {
        self.entries[key as usize].replace(value)
    }

    fn remove(&mut self, key: i64) -> Option<i64> {
        self.entries[key as usize].take()
    }

    fn inorder(&self) -> Vec<(i64, i64)> {
        self.entries
            .iter()
            .enumerate()
            .filter_map(|(key, entry)| entry.map(|value| (key as i64, value)))
            .collect()
    }
}

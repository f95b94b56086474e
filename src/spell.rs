/// Edit-distance scratch row reused across candidates.
pub struct Spell(Vec<usize>);

impl Spell {
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Dictionary words strictly closer than `maximum` to `word`, nearest
    /// first. Ties keep dictionary order.
    pub fn suggest<'a>(
        &mut self,
        word: &str,
        dictionary: impl IntoIterator<Item = &'a str>,
        maximum: usize,
    ) -> Vec<&'a str> {
        let mut found: Vec<_> = dictionary
            .into_iter()
            .filter_map(|candidate| {
                let distance = self.distance(word, candidate);
                (distance < maximum).then_some((distance, candidate))
            })
            .collect();
        found.sort_by_key(|&(distance, _)| distance);
        found.into_iter().map(|(_, candidate)| candidate).collect()
    }

    /// Levenshtein distance over characters, ignoring ASCII case.
    fn distance(&mut self, left: &str, right: &str) -> usize {
        let Self(row) = self;
        let count = right.chars().count();
        row.clear();
        row.extend(0..=count);

        for (i, first) in left.chars().enumerate() {
            let mut diagonal = row[0];
            row[0] = i + 1;
            for (j, second) in right.chars().enumerate() {
                let above = row[j + 1];
                let replace = diagonal + usize::from(!first.eq_ignore_ascii_case(&second));
                row[j + 1] = replace.min(above + 1).min(row[j] + 1);
                diagonal = above;
            }
        }
        row[count]
    }
}

/// Distance bound used for unknown long options: roughly one edit per three
/// letters, never more than three.
pub fn tolerance(word: &str) -> usize {
    (word.chars().count() / 3).min(3) + 1
}

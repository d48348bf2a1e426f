
use serde::{Serialize, Deserialize};
use std::fmt::{self, Display};


/// A discrete label read from tabular input, either an integer or a string.
///
/// The adapter keeps one variant per column, so the derived ordering (integers
/// before strings) only ever compares labels of the same kind.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Label {
    Int(i64),
    Text(String),
}

impl Label {

    pub fn kind(&self) -> &'static str {
        match self {
            Label::Int(_) => "integer",
            Label::Text(_) => "string",
        }
    }

    // the integer a cell spells exactly, "0101" and "+101" are not 101
    pub fn canonical_int(cell: &str) -> Option<i64> {
        match cell.parse::<i64>() {
            Ok(i) if i.to_string() == cell => Some(i),
            _ => None,
        }
    }

    // csv cells carry no type, a cell is an integer only if it prints back unchanged
    pub fn parse(cell: &str) -> Label {
        let cell = cell.trim();
        match Self::canonical_int(cell) {
            Some(i) => Label::Int(i),
            None => Label::Text(cell.to_string()),
        }
    }
}

impl Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Int(i) => write!(f, "{}", i),
            Label::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for Label {
    fn from(s: &str) -> Self {
        Label::Text(s.to_string())
    }
}

impl From<String> for Label {
    fn from(s: String) -> Self {
        Label::Text(s)
    }
}

impl From<i64> for Label {
    fn from(i: i64) -> Self {
        Label::Int(i)
    }
}


/// Sorted, deduplicated labels of one axis; a label's position is its matrix index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelIndex<L> {
    labels: Vec<L>,
}

impl<L: Ord + Clone> LabelIndex<L> {

    pub fn from_labels<'a, I>(labels: I) -> LabelIndex<L>
    where
        I: IntoIterator<Item = &'a L>,
        L: 'a {

        let mut labels: Vec<L> = labels.into_iter().cloned().collect();
        labels.sort();
        labels.dedup();
        Self { labels }
    }

    pub fn position(&self, label: &L) -> Option<usize> {
        self.labels.binary_search(label).ok()
    }

    pub fn get(&self, i: usize) -> Option<&L> {
        self.labels.get(i)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn labels(&self) -> &[L] {
        &self.labels
    }

    pub fn into_labels(self) -> Vec<L> {
        self.labels
    }
}


#[cfg(test)]
mod tests {

    use super::{Label, LabelIndex};

    #[test]
    fn index_is_sorted_and_deduplicated() {

        let raw = vec!["ent3", "ent1", "ent3", "ent2", "ent1"];
        let index = LabelIndex::from_labels(raw.iter());

        assert_eq!(index.labels(), &["ent1", "ent2", "ent3"]);
        assert_eq!(index.position(&"ent2"), Some(1));
        assert_eq!(index.position(&"ent4"), None);
        assert_eq!(index.get(2), Some(&"ent3"));
    }

    #[test]
    fn integer_labels_use_numeric_order() {

        // 10 would come before 9 if compared as text
        let raw = vec![Label::Int(10), Label::Int(9), Label::from(1i64)];
        let index = LabelIndex::from_labels(raw.iter());
        assert_eq!(index.into_labels(), vec![Label::Int(1), Label::Int(9), Label::Int(10)]);
    }

    #[test]
    fn parse_cells() {
        assert_eq!(Label::parse(" 42 "), Label::Int(42));
        assert_eq!(Label::parse("cat1"), Label::Text("cat1".to_string()));
        assert_eq!(Label::parse("4.5"), Label::Text("4.5".to_string()));
        assert_eq!(Label::Int(-3).to_string(), "-3");
    }

    #[test]
    fn padded_integers_stay_text() {
        assert_eq!(Label::parse("0101"), Label::Text("0101".to_string()));
        assert_eq!(Label::parse("+101"), Label::Text("+101".to_string()));
        assert_eq!(Label::parse("-0"), Label::Text("-0".to_string()));
        assert_eq!(Label::parse("101"), Label::Int(101));
        assert_eq!(Label::canonical_int("-7"), Some(-7));
    }

    #[test]
    fn empty_index() {
        let raw: Vec<String> = Vec::new();
        let index = LabelIndex::from_labels(raw.iter());
        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
    }
}

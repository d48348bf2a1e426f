
// imports
use crate::cooccurrence::CoOccurrence;
use crate::error::EmbedError;
use crate::labels::Label;
use crate::matrix::{Adjacency, MatrixBuilder, Triple};
use crate::rca::RcaFilter;

use ndarray::Array2;
use std::fmt::{self, Display};
use tracing::info;


/// Knobs of the embedding, defaults: rca filter on, threshold 1, self loops kept.
#[derive(Clone, Debug, PartialEq)]
pub struct EmbedOptions {
    pub rca: bool,
    pub threshold: f64,
    pub self_loops: bool,
    pub parallel: bool,
}

impl Default for EmbedOptions {
    fn default() -> Self {
        Self {
            rca: true,
            threshold: 1.0,
            self_loops: true,
            parallel: false,
        }
    }
}

impl Display for EmbedOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "embedding parameters:
        rca: {},
        threshold: {},
        self_loops: {},
        parallel: {}",
        self.rca, self.threshold, self.self_loops, self.parallel)
    }
}


/// The co-occurrence network: an n x n matrix over the categories, plus both label axes.
#[derive(Clone, Debug, PartialEq)]
pub struct Network<C, E> {
    pub matrix: Array2<f64>,
    pub categories: Vec<C>,
    pub entities: Vec<E>,
}

impl<C, E> Network<C, E>
where
    C: Ord + Clone {

    pub fn new(matrix: Array2<f64>, categories: Vec<C>, entities: Vec<E>) -> Result<Network<C, E>, EmbedError> {

        let (rows, cols) = matrix.dim();
        if rows != categories.len() || cols != categories.len() {
            return Err(EmbedError::ShapeMismatch { rows, cols, categories: categories.len() });
        }

        // lookups binary search the labels, so they must be sorted without repeats
        if let Some(position) = categories.windows(2).position(|pair| pair[0] >= pair[1]) {
            return Err(EmbedError::UnsortedLabels { position: position + 1 });
        }
        Ok(Self { matrix, categories, entities })
    }

    fn position(&self, category: &C) -> Option<usize> {
        self.categories.binary_search(category).ok()
    }

    /// Similarity of two categories, `None` if either is unknown.
    pub fn strength(&self, a: &C, b: &C) -> Option<f64> {
        let i = self.position(a)?;
        let k = self.position(b)?;
        Some(self.matrix[[i, k]])
    }

    /// The `k` categories most similar to `category`, strongest first.
    ///
    /// The category itself is skipped and ties keep label order.
    pub fn neighbours(&self, category: &C, k: usize) -> Result<Vec<(C, f64)>, EmbedError>
    where
        C: Display {

        let i = match self.position(category) {
            Some(i) => i,
            None => return Err(EmbedError::UnknownLabel { label: category.to_string() })
        };

        let mut indexed_scores: Vec<(usize, f64)> = self.matrix.row(i)
        .iter()
        .copied()
        .enumerate()
        .filter(|(j, _)| *j != i)
        .collect();

        // stable, so equal scores stay in label order
        indexed_scores.sort_by(|(_i, s), (_j, t)| t.total_cmp(s));
        indexed_scores.truncate(k);

        Ok(indexed_scores.into_iter().map(|(j, score)| (self.categories[j].clone(), score)).collect())
    }

    /// Upper-triangle pairs with a positive strength of at least `min_strength`.
    pub fn edges(&self, min_strength: f64) -> Vec<(C, C, f64)> {

        let n = self.categories.len();
        let mut edges = Vec::new();
        for i in 0..n {
            for k in i + 1..n {
                let strength = self.matrix[[i, k]];
                if strength > 0.0 && strength >= min_strength {
                    edges.push((self.categories[i].clone(), self.categories[k].clone(), strength));
                }
            }
        }
        edges
    }
}


impl<E> Network<Label, E> {

    /// The category a typed query refers to.
    ///
    /// A query such as `42` is tried as an integer label first, then as the text label "42".
    pub fn find_category(&self, query: &str) -> Option<Label> {
        let parsed = Label::parse(query);
        if self.position(&parsed).is_some() {
            return Some(parsed);
        }
        let text = Label::Text(query.trim().to_string());
        self.position(&text).map(|_| text)
    }
}


pub struct Embed {}

impl Embed {

    // runs the three stages in order -
    // -> adjacency matrix from the triples
    // -> rca filter, when enabled
    // -> co-occurrence of the (filtered) matrix
    // without the filter, the raw values flow into the co-occurrence and the result is
    // a weighted similarity rather than a frequency based one.

    pub fn embed<C, E>(triples: &[Triple<C, E>], options: &EmbedOptions) -> Network<C, E>
    where
        C: Ord + Clone,
        E: Ord + Clone {

        let Adjacency { matrix, categories, entities } = MatrixBuilder::build(triples);

        let matrix = if options.rca {
            RcaFilter::filter(&matrix, options.threshold)
        } else {
            matrix
        };

        let matrix = if options.parallel {
            CoOccurrence::compute_par(&matrix, options.self_loops)
        } else {
            CoOccurrence::compute(&matrix, options.self_loops)
        };

        info!(categories = categories.len(), entities = entities.len(), rca = options.rca, "embedded co-occurrence network");

        Network { matrix, categories, entities }
    }
}

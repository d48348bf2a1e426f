
// imports
use crate::labels::LabelIndex;

use ndarray::Array2;
use tracing::debug;


/// One (category, entity, value) record of the bipartite relation.
#[derive(Clone, Debug, PartialEq)]
pub struct Triple<C, E> {
    pub category: C,
    pub entity: E,
    pub value: f64,
}

impl<C, E> Triple<C, E> {

    pub fn new(category: C, entity: E, value: f64) -> Triple<C, E> {
        Self { category, entity, value }
    }

    // a record without a relationship strength counts once
    pub fn unit(category: C, entity: E) -> Triple<C, E> {
        Self::new(category, entity, 1.0)
    }
}


/// Dense category x entity matrix, with the labels of its rows and columns in index order.
#[derive(Clone, Debug, PartialEq)]
pub struct Adjacency<C, E> {
    pub matrix: Array2<f64>,
    pub categories: Vec<C>,
    pub entities: Vec<E>,
}


pub struct MatrixBuilder {}

impl MatrixBuilder {

    // builds the adjacency matrix of the triples. rows and columns follow the sorted
    // unique category and entity labels, so identical input always gives identical matrices.
    // repeated (category, entity) pairs are summed.

    pub fn build<C, E>(triples: &[Triple<C, E>]) -> Adjacency<C, E>
    where
        C: Ord + Clone,
        E: Ord + Clone {

        let categories = LabelIndex::from_labels(triples.iter().map(|t| &t.category));
        let entities = LabelIndex::from_labels(triples.iter().map(|t| &t.entity));

        let mut matrix: Array2<f64> = Array2::zeros((categories.len(), entities.len()));
        for triple in triples {
            // both indexes were built from these same triples, a miss cannot happen
            if let (Some(i), Some(j)) = (categories.position(&triple.category), entities.position(&triple.entity)) {
                matrix[[i, j]] += triple.value;
            }
        }

        debug!(categories = categories.len(), entities = entities.len(), records = triples.len(), "built adjacency matrix");

        Adjacency {
            matrix,
            categories: categories.into_labels(),
            entities: entities.into_labels(),
        }
    }
}

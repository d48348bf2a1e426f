use cooc_network::{Adapter, CoOccurrence, Embed, EmbedOptions, Label, MatrixBuilder, RcaFilter, Triple};
use ndarray::{array, Array2};
use rand::{thread_rng, Rng};
use serde_json::json;


fn partition_triples() -> Vec<Triple<&'static str, &'static str>> {
    vec![
        Triple::new("cat1", "ent1", 2.0),
        Triple::new("cat1", "ent2", 3.0),
        Triple::new("cat2", "ent1", 4.0),
        Triple::new("cat3", "ent3", 5.0),
    ]
}

fn assert_symmetric(m: &Array2<f64>) {
    let (n, k) = m.dim();
    assert_eq!(n, k);
    for i in 0..n {
        for j in 0..n {
            assert_eq!(m[[i, j]], m[[j, i]], "asymmetric at ({}, {})", i, j);
        }
    }
}

#[test]
fn partition_with_self_loops() {

    // cat1 holds only 5/14 of the mass but 1/3 of ent1, rca 0.93, so only ent2 survives for cat1
    let adj = MatrixBuilder::build(&partition_triples());
    let filtered = RcaFilter::filter(&adj.matrix, 1.0);
    assert_eq!(filtered, array![[0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]]);

    let network = Embed::embed(&partition_triples(), &EmbedOptions::default());
    assert_eq!(network.matrix, Array2::<f64>::eye(3));
    assert_eq!(network.categories, vec!["cat1", "cat2", "cat3"]);
    assert_eq!(network.entities, vec!["ent1", "ent2", "ent3"]);
}

#[test]
fn partition_without_self_loops() {

    let options = EmbedOptions { self_loops: false, ..EmbedOptions::default() };
    let network = Embed::embed(&partition_triples(), &options);
    assert_eq!(network.matrix, Array2::<f64>::zeros((3, 3)));
}

#[test]
fn filter_then_co_occur_on_overlapping_pattern() {

    let data = array![[1.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]];
    let filtered = RcaFilter::filter(&data, 1.0);
    assert_eq!(filtered, data);

    let with_loops = CoOccurrence::compute(&filtered, true);
    assert_eq!(with_loops, array![[1.0, 0.5, 0.0], [0.5, 1.0, 0.0], [0.0, 0.0, 1.0]]);

    let without_loops = CoOccurrence::compute(&filtered, false);
    assert_eq!(without_loops, array![[0.0, 0.5, 0.0], [0.5, 0.0, 0.0], [0.0, 0.0, 0.0]]);
}

#[test]
fn one_to_one_pattern_gives_identity() {

    for k in [1usize, 2, 7, 30] {
        let triples: Vec<Triple<usize, usize>> = (0..k).map(|i| Triple::new(i, i, (i + 1) as f64)).collect();
        let network = Embed::embed(&triples, &EmbedOptions::default());
        assert_eq!(network.matrix, Array2::<f64>::eye(k), "k = {}", k);
    }
}

#[test]
fn diagonal_policy_on_binary_input() {

    // category 2 never shows up anywhere
    let data = array![[1.0, 0.0, 1.0], [0.0, 1.0, 1.0], [0.0, 0.0, 0.0]];

    let with_loops = CoOccurrence::compute(&data, true);
    assert_eq!(with_loops.diag().to_vec(), vec![1.0, 1.0, 0.0]);

    let without_loops = CoOccurrence::compute(&data, false);
    assert!(without_loops.diag().iter().all(|&x| x == 0.0));
}

#[test]
fn empty_input_at_every_stage() {

    let triples: Vec<Triple<Label, Label>> = Adapter::from_json(&json!({"category": [], "entity": []})).unwrap();
    let adj = MatrixBuilder::build(&triples);
    assert_eq!(adj.matrix.dim(), (0, 0));
    assert_eq!(RcaFilter::filter(&adj.matrix, 1.0).dim(), (0, 0));
    assert_eq!(CoOccurrence::compute(&adj.matrix, true).dim(), (0, 0));

    let network = Embed::embed(&triples, &EmbedOptions::default());
    assert_eq!(network.matrix.dim(), (0, 0));
    assert!(network.categories.is_empty());
}

#[test]
fn repeated_runs_are_identical() {

    let data = json!({
        "skill": ["rust", "go", "rust", "sql", "go", "sql", "rust"],
        "firm": ["f2", "f1", "f1", "f3", "f2", "f1", "f2"],
        "weight": [3, 1, 2, 5, 2, 1, 4]
    });
    let triples = Adapter::from_json(&data).unwrap();

    let mut shuffled = triples.clone();
    shuffled.reverse();

    let options = EmbedOptions::default();
    let first = Embed::embed(&triples, &options);
    let second = Embed::embed(&triples, &options);
    let reordered = Embed::embed(&shuffled, &options);

    assert_eq!(first, second);
    assert_eq!(first, reordered);
    assert_symmetric(&first.matrix);
}

#[test]
fn random_dataset_is_symmetric_and_bounded() {

    let mut rng = thread_rng();
    let triples: Vec<Triple<String, String>> = (0..2000)
    .map(|_| Triple::new(
        format!("cat{}", rng.gen_range(0..40)),
        format!("ent{}", rng.gen_range(0..60)),
        rng.gen_range(1..100) as f64,
    ))
    .collect();

    for self_loops in [true, false] {
        let options = EmbedOptions { self_loops, ..EmbedOptions::default() };
        let network = Embed::embed(&triples, &options);
        assert_symmetric(&network.matrix);
        assert!(network.matrix.iter().all(|&x| (0.0..=1.0).contains(&x)));

        let parallel = Embed::embed(&triples, &EmbedOptions { parallel: true, ..options });
        assert_eq!(parallel, network);
    }
}

#[test]
fn large_dataset_shape() {

    // 10000 records cycling over 100 categories and 100 entities in lockstep
    let mut rng = thread_rng();
    let triples: Vec<Triple<String, String>> = (0..10000)
    .map(|i| Triple::new(format!("cat{}", i % 100), format!("ent{}", i % 100), rng.gen_range(1..100) as f64))
    .collect();

    let adj = MatrixBuilder::build(&triples);
    assert_eq!(adj.matrix.dim(), (100, 100));

    let network = Embed::embed(&triples, &EmbedOptions::default());
    assert_eq!(network.matrix.dim(), (100, 100));
    assert_eq!(network.matrix, Array2::<f64>::eye(100));
}

#[test]
fn weighted_similarity_without_rca() {

    let options = EmbedOptions { rca: false, ..EmbedOptions::default() };
    let network = Embed::embed(&partition_triples(), &options);

    // raw values: cat1 = [2, 3, 0], cat2 = [4, 0, 0]
    // gram[0][1] = 8, over degrees 2 and 1 gives 4 and 8, the min is 4
    assert_eq!(network.matrix[[0, 1]], 4.0);
    assert_eq!(network.matrix[[1, 0]], 4.0);
    assert_eq!(network.matrix[[0, 0]], 13.0 / 2.0);
    assert_symmetric(&network.matrix);
}

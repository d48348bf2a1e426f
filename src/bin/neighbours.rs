use std::{error::Error, env, process};
use cooc_network::{files_handling, Label, Network};
use ndarray::Array2;
use tracing::error;


// looks up the most similar categories in a saved network.
// treated as binary executable so it can be ran independently from the main pipeline.
//
// arguments to this executable should be:
// path to the output dir of a pipeline run (holding network.npy, categories.json, entities.json)
// number of neighbours to list
// one or more categories to query
// example: ... Output 5 cat1 cat2

fn main() {

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 4 {
        error!("expected arguments: <output dir> <k> <category>...");
        process::exit(2);
    }

    if let Err(e) = run(&args[1], &args[2], &args[3..]) {
        error!("{}", e);
        process::exit(1);
    }
}


fn run(output_dir: &str, k: &str, queries: &[String]) -> Result<(), Box<dyn Error>> {

    let k: usize = k.parse()?;
    let matrix = files_handling::read_input::<Array2<f64>>(&format!("{}/network", output_dir))?;
    let categories = files_handling::read_input::<Vec<Label>>(&format!("{}/categories", output_dir))?;
    let entities = files_handling::read_input::<Vec<Label>>(&format!("{}/entities", output_dir))?;
    let network = Network::new(matrix, categories, entities)?;

    for query in queries {

        let category = match network.find_category(query) {
            Some(category) => category,
            None => return Err(format!("category '{}' is not in the network", query).into())
        };
        println!("searching {} most similar categories to {}", k, category);
        for (i, (similar, score)) in network.neighbours(&category, k)?.iter().enumerate() {
            println!("{} : {} ? {} = {:.4}", i, category, similar, score);
        }
        println!();
    }

    Ok(())
}

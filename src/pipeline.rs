
// imports
use crate::config::{files_handling, Config};
use crate::embed::{Embed, Network};
use crate::labels::Label;
use crate::matrix::Triple;

use ndarray::Array2;
use rayon::ThreadPoolBuilder;
use std::error::Error;
use std::time::Instant;
use tracing::{info, warn};

pub struct Pipeline {}

impl Pipeline {

    // runs the main procedure of 3 steps -
    // -> configuration of arguments
    // -> reading and validating the input records
    // -> embedding, then saving the network with both label axes

    pub fn run(args: &[String]) -> Result<Network<Label, Label>, Box<dyn Error>> {

        info!("building parameters...");
        let params = Config::new(args)?.get_params();
        info!("{}", params);

        if params.options.parallel {
            // the global pool can only be set once per process
            if let Err(e) = ThreadPoolBuilder::new().num_threads(params.num_threads).build_global() {
                warn!("keeping existing thread pool: {}", e);
            }
        }

        let timer = Instant::now();
        let triples = files_handling::read_input::<Vec<Triple<Label, Label>>>(&params.input_file)?;
        info!("loaded {} records from {}", triples.len(), params.input_file);

        let network = Embed::embed(&triples, &params.options);
        info!("embedded {} categories over {} entities, took {} ms ...",
            network.categories.len(), network.entities.len(), timer.elapsed().as_millis());

        if let Some(k) = params.top_k {
            for category in &network.categories {
                let neighbours = network.neighbours(category, k)?;
                let listed: Vec<String> = neighbours.iter().map(|(c, s)| format!("{} = {:.4}", c, s)).collect();
                info!("{} : {}", category, listed.join(", "));
            }
        }

        // save the network and its labels
        files_handling::save_output::<Array2<f64>>(&params.output_dir, "network", network.matrix.clone())?;
        files_handling::save_output::<Vec<Label>>(&params.output_dir, "categories", network.categories.clone())?;
        files_handling::save_output::<Vec<Label>>(&params.output_dir, "entities", network.entities.clone())?;
        files_handling::save_output::<Vec<(Label, Label, f64)>>(&params.output_dir, "edges", network.edges(0.0))?;
        info!("saved network to {}", params.output_dir);

        Ok(network)
    }
}

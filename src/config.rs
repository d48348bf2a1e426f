
use crate::embed::EmbedOptions;
use crate::error::ConfigError;

use serde_json::Value;
use std::fmt::Display;
use std::fs;


#[derive(Clone, Debug)]
pub struct JsonTypes {
    pub input_file: String,
    pub output_dir: String,
    pub num_threads: usize,
    pub top_k: Option<usize>,
    pub options: EmbedOptions,
}

impl Display for JsonTypes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "using params:
        input_file: {}
        output_dir: {}
        num_threads: {}
        top_k: {:?},
        Using {}",
        self.input_file, self.output_dir, self.num_threads, self.top_k, self.options)
    }
}

pub struct Config {
    params: JsonTypes
}

impl Config {

    pub fn get_params(&self) -> JsonTypes {
        self.params.clone()
    }

    fn required_str(json: &Value, key: &'static str) -> Result<String, ConfigError> {
        match json.get(key) {
            Some(v) => v.as_str().map(|s| s.to_owned()).ok_or(ConfigError::WrongType { key, expected: "a string" }),
            None => Err(ConfigError::MissingKey { key })
        }
    }

    fn optional_bool(json: &Value, key: &'static str, default: bool) -> Result<bool, ConfigError> {
        match json.get(key) {
            Some(v) => v.as_bool().ok_or(ConfigError::WrongType { key, expected: "boolean" }),
            None => Ok(default)
        }
    }

    fn optional_f64(json: &Value, key: &'static str, default: f64) -> Result<f64, ConfigError> {
        match json.get(key) {
            Some(v) => v.as_f64().ok_or(ConfigError::WrongType { key, expected: "numeric" }),
            None => Ok(default)
        }
    }

    fn optional_usize(json: &Value, key: &'static str) -> Result<Option<usize>, ConfigError> {
        match json.get(key) {
            Some(v) => v.as_u64().map(|n| Some(n as usize)).ok_or(ConfigError::WrongType { key, expected: "a non-negative integer" }),
            None => Ok(None)
        }
    }

    pub fn from_json(json: &Value) -> Result<Config, ConfigError> {

        // validate input and output in json
        let input_file = Self::required_str(json, "input_file")?;
        let output_dir = Self::required_str(json, "output_dir")?;

        // handle default vs input parameters
        let defaults = EmbedOptions::default();
        let options = EmbedOptions {
            rca: Self::optional_bool(json, "rca", defaults.rca)?,
            threshold: Self::optional_f64(json, "threshold", defaults.threshold)?,
            self_loops: Self::optional_bool(json, "self_loops", defaults.self_loops)?,
            parallel: Self::optional_bool(json, "parallel", defaults.parallel)?,
        };
        let num_threads = Self::optional_usize(json, "num_threads")?.unwrap_or(4);
        let top_k = Self::optional_usize(json, "top_k")?;

        let params = JsonTypes {
            input_file,
            output_dir,
            num_threads,
            top_k,
            options,
        };

        Ok(Self { params })
    }

    pub fn new(args: &[String]) -> Result<Config, ConfigError> {

        if args.len() != 2 {
            return Err(ConfigError::Usage);
        }

        // parse input json
        let f = fs::File::open(&args[1])?;
        let json: Value = serde_json::from_reader(f)?;
        Self::from_json(&json)
    }
}


pub mod files_handling {

    use crate::adapter::Adapter;
    use crate::labels::Label;
    use crate::matrix::Triple;

    use ndarray::Array2;
    use ndarray_npy::{read_npy, write_npy, ReadNpyError};
    use serde_json::Value;
    use std::error::Error;
    use std::fs::{self, File};
    use std::io::{BufReader, BufWriter};
    use std::path::Path;

    pub fn read_input<R: ReadFile>(file_path: &str) -> Result<<R as ReadFile>::Item, <R as ReadFile>::Error> {
        let input = <R as ReadFile>::read_file(file_path)?;
        Ok(input)
    }

    pub fn save_output<S>(output_dir: &str, file_name: &str, item: S) -> Result<(), <S as SaveFile>::Error>
    where
        S: SaveFile,
        <S as SaveFile>::Error: From<std::io::Error> {

        // create output folder
        fs::create_dir_all(output_dir)?;
        item.save_file(output_dir, file_name)?;
        Ok(())
    }

    pub trait ReadFile {
        type Error;
        type Item;
        fn read_file(file_path: &str) -> Result<Self::Item, Self::Error>;
    }

    // raw records, the extension decides between the csv and the json adapter
    impl ReadFile for Vec<Triple<Label, Label>> {
        type Error = Box<dyn Error>;
        type Item = Self;
        fn read_file(file_path: &str) -> Result<Self::Item, Self::Error> {

            let extension = Path::new(file_path).extension().and_then(|e| e.to_str()).map(|e| e.to_lowercase());
            let f = BufReader::new(File::open(file_path)?);
            match extension.as_deref() {
                Some("csv") => Ok(Adapter::from_csv(f)?),
                Some("json") => {
                    let json: Value = serde_json::from_reader(f)?;
                    Ok(Adapter::from_json(&json)?)
                },
                _ => Err(format!("unsupported input file {}, expected .csv or .json", file_path).into())
            }
        }
    }

    impl ReadFile for Array2<f64> {
        type Error = ReadNpyError;
        type Item = Self;
        fn read_file(file_path: &str) -> Result<Self::Item, Self::Error> {
            let in_file = file_path.to_string() + ".npy";
            read_npy(in_file)
        }
    }

    impl ReadFile for Vec<Label> {
        type Error = Box<dyn Error>;
        type Item = Self;
        fn read_file(file_path: &str) -> Result<Self::Item, Self::Error> {
            let in_file = file_path.to_string() + ".json";
            let f = BufReader::new(File::open(in_file)?);
            let item = serde_json::from_reader(f)?;
            Ok(item)
        }
    }

    pub trait SaveFile {
        type Error;
        fn save_file(&self, output_dir: &str, file_name: &str) -> Result<(), Self::Error>;
    }

    impl SaveFile for Array2<f64> {
        type Error = Box<dyn Error>;
        fn save_file(&self, output_dir: &str, file_name: &str) -> Result<(), Self::Error> {
            let out = output_dir.to_string() + "/" + file_name + ".npy";
            write_npy(out, self)?;
            Ok(())
        }
    }

    impl SaveFile for Vec<Label> {
        type Error = Box<dyn Error>;
        fn save_file(&self, output_dir: &str, file_name: &str) -> Result<(), Self::Error> {
            let out = output_dir.to_string() + "/" + file_name + ".json";
            let f = BufWriter::new(File::create(out)?);
            serde_json::to_writer(f, self)?;
            Ok(())
        }
    }

    impl SaveFile for Vec<(Label, Label, f64)> {
        type Error = Box<dyn Error>;
        fn save_file(&self, output_dir: &str, file_name: &str) -> Result<(), Self::Error> {

            let out = output_dir.to_string() + "/" + file_name + ".csv";
            let mut wrt = csv::WriterBuilder::new().from_path(out)?;
            wrt.write_record(["Source", "Target", "Strength"])?;

            for (source, target, strength) in self {
                wrt.write_record([source.to_string(), target.to_string(), strength.to_string()])?;
            }
            wrt.flush()?;
            Ok(())
        }
    }
}

/*
MIT License
Copyright (c)  Germán Molina
Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:
The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.
THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

use apmv::error_msgs::print_error;
use apmv::{
    apply_apmv_setpoints, available_target_names, input_template, set_timesteps,
    set_zones_always_occupied, ApmvError, ApmvOptions, Idf,
};
use clap::Parser;

/// Adds adaptive-PMV setpoints to an EnergyPlus model
#[derive(Parser, Default)]
#[clap(author, version, about, long_about = None)]
struct CliOptions {
    /// The input IDF file
    #[clap(short = 'i')]
    input_file: String,

    /// Specifies the path to which to write the modified model.
    #[clap(short = 'o')]
    output: Option<String>,

    /// A JSON or JSON5 file with the options
    #[clap(short = 'c')]
    config_file: Option<String>,

    /// Report everything that is added to the model
    #[clap(short = 'v', long)]
    verbose: bool,

    /// The number of timesteps per hour in the simulation
    #[clap(short = 'n')]
    timesteps: Option<u32>,

    /// Make every People in the model be present all the time
    #[clap(long)]
    always_occupied: bool,

    /// Print the targets found in the model, and exit
    #[clap(long)]
    list_targets: bool,

    /// Print a template for per-target options, and exit
    #[clap(long)]
    template: bool,
}

/// Reads the options from the configuration file, if any. The
/// `-v` flag adds to whatever the file says.
fn load_options(cli: &CliOptions) -> Result<ApmvOptions, ApmvError> {
    let mut options = match &cli.config_file {
        Some(path) => ApmvOptions::from_file(path)?,
        None => ApmvOptions::default(),
    };
    options.verbose |= cli.verbose;
    Ok(options)
}

/// The filter used when `RUST_LOG` is not set. Narration is logged at `info`.
fn default_log_filter(verbose: bool) -> &'static str {
    if verbose {
        "info"
    } else {
        "warn"
    }
}

fn run(cli: &CliOptions, options: &ApmvOptions) -> Result<(), ApmvError> {
    let mut model = Idf::from_file(&cli.input_file)?;

    if cli.list_targets {
        for name in available_target_names(&model)? {
            println!("{}", name);
        }
        return Ok(());
    }
    if cli.template {
        let template = input_template(&model)?;
        let json = serde_json::to_string_pretty(&template).map_err(|e| ApmvError::Config {
            path: "template".to_string(),
            msg: e.to_string(),
        })?;
        println!("{}", json);
        return Ok(());
    }

    let output = cli.output.as_ref().ok_or_else(|| ApmvError::InvalidOption {
        option: "-o".to_string(),
        msg: "an output file is needed".to_string(),
    })?;

    if let Some(n) = cli.timesteps {
        set_timesteps(&mut model, n)?;
    }
    if cli.always_occupied {
        set_zones_always_occupied(&mut model, options.verbose)?;
    }

    let report = apply_apmv_setpoints(&mut model, options)?;
    log::info!(
        "{} targets, {} programs, {} warnings",
        report.targets.len(),
        report.programs.len(),
        report.warnings.len()
    );
    model.write_file(output)?;
    Ok(())
}

fn main() {
    let cli = CliOptions::parse();

    let options = load_options(&cli);
    let verbose = match &options {
        Ok(options) => options.verbose,
        Err(_) => cli.verbose,
    };
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_log_filter(verbose)),
    )
    .init();

    if let Err(e) = options.and_then(|options| run(&cli, &options)) {
        print_error("apmv", e);
        std::process::exit(1);
    }
}

/***********/
/* TESTING */
/***********/

#[cfg(test)]
mod testing {
    use super::*;
    use std::io::Write;

    fn options_from(config: &str, args: &[&str]) -> Result<ApmvOptions, ApmvError> {
        let mut file = tempfile::Builder::new()
            .suffix(".json5")
            .tempfile()
            .map_err(|e| ApmvError::Config {
                path: "temp".to_string(),
                msg: e.to_string(),
            })?;
        write!(file, "{}", config).map_err(|e| ApmvError::Config {
            path: "temp".to_string(),
            msg: e.to_string(),
        })?;
        let path = file.path().to_string_lossy().to_string();

        let mut full_args = vec!["apmv", "-i", "model.idf", "-c", path.as_str()];
        full_args.extend_from_slice(args);
        let cli = CliOptions::parse_from(full_args);
        load_options(&cli)
    }

    #[test]
    fn test_verbose_config_shows_narration() -> Result<(), ApmvError> {
        let options = options_from("{verbose: true}", &[])?;
        assert_eq!(default_log_filter(options.verbose), "info");
        Ok(())
    }

    #[test]
    fn test_quiet_config() -> Result<(), ApmvError> {
        let options = options_from("{verbose: false}", &[])?;
        assert_eq!(default_log_filter(options.verbose), "warn");

        let options = options_from("{verbose: false}", &["-v"])?;
        assert_eq!(default_log_filter(options.verbose), "info");
        Ok(())
    }

    #[test]
    fn test_default_options_are_verbose() -> Result<(), ApmvError> {
        let cli = CliOptions::parse_from(["apmv", "-i", "model.idf"]);
        let options = load_options(&cli)?;
        assert_eq!(default_log_filter(options.verbose), "info");
        Ok(())
    }
}

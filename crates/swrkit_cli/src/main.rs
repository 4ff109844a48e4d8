//! SWR cutlist workbook generator.

mod cli;
mod config;
mod run;

fn main() {
    env_logger::init();

    let args = cli::CliArgs::parse_args();
    match run::run(&args) {
        Ok(report) => println!("{report}"),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

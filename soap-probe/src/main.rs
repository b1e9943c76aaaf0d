use clap::Parser;
use env_logger::Env;
use log::error;
use soap_probe::Probe;
use soap_probe::args::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let probe = Probe::new(cli.config()).decode(cli.decode);

    let stdout = std::io::stdout();
    if let Err(error) = probe.run(&cli.call(), &mut stdout.lock()).await {
        error!("Could not write to stdout: {error}");
    }
}

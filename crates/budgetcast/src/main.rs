use budgetcast::commands::execute;
use budgetcast::data::DataDirectory;
use budgetcast::render::render;
use budgetcast::{Args, init_logging};
use budgetcast_core::SystemClock;
use clap::Parser;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = DataDirectory::new(
        args.data_dir
            .clone()
            .unwrap_or_else(DataDirectory::default_path),
    );

    init_logging(data_dir.root(), &args.log_level)?;

    let config = data_dir.load_config()?;
    let ledger_path = args
        .ledger
        .clone()
        .unwrap_or_else(|| data_dir.ledger_path(&config));
    let format = args.format.or(config.format).unwrap_or_default();

    let output = match execute(&args.command, &data_dir, &ledger_path, &SystemClock) {
        Ok(output) => output,
        Err(err) => {
            tracing::error!(%err, "command failed");
            return Err(err.into());
        }
    };

    println!("{}", render(&output, format)?.trim_end());
    Ok(())
}

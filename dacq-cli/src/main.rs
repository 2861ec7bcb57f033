mod cli;
mod commands;

#[snafu::report]
fn main() -> Result<(), dacq_data::Error> {
    let cli = cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .init();

    let output = commands::run(cli.command)?;
    println!("{output}");

    Ok(())
}

fn main() -> anyhow::Result<()> {
    tintwork::cli::run_cli()
}

fn main() -> anyhow::Result<()> {
    cdbtiles::cli::run_cli()
}

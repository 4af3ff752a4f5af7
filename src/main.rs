fn main() -> anyhow::Result<()> {
    toolscope::run()
}

fn main() {
    ondemand_hooks::app::cli::run();
}

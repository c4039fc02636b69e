fn main() {
    shade::app::cli::run();
}

fn main() {
    kscaffold::app::cli::run();
}

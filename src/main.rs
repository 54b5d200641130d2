fn main() {
    memforge::app::cli::run();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    codenav_cli::run()
}

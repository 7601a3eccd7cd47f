use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    translaterm::cli::main()
}

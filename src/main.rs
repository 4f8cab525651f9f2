use bikeshare::{CityFiles, Shell};
use std::error::Error;
use std::io;
use std::process;

fn main() -> Result<(), Box<dyn Error>> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(stdin.lock(), stdout.lock(), CityFiles::default());

    let result = shell.run();
    // Suelta stdout antes de salir
    drop(shell);

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    Ok(())
}

use recipe_extract::extract_recipe;
use std::env;
use std::io::Read;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Read HTML from the file given as an argument, or from stdin
    let args: Vec<String> = env::args().collect();
    let html = match args.get(1) {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let recipe = extract_recipe(&html);
    println!("{}", serde_json::to_string_pretty(&recipe)?);

    Ok(())
}

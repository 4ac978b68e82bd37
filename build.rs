use std::fs;

fn main() {
    // Validate default config at compile time
    let config_path = "src/default_config.toml";
    println!("cargo:rerun-if-changed={}", config_path);

    let content = fs::read_to_string(config_path).expect("Failed to read default_config.toml");

    // Parse it as TOML and make sure both tables are present
    match content.parse::<toml::Table>() {
        Err(e) => panic!("Invalid default_config.toml: {}", e),
        Ok(table) => {
            if let Some(missing) = ["paths", "template"].iter().find(|s| !table.contains_key(**s)) {
                panic!("default_config.toml is missing the [{}] table", missing);
            }
        }
    }
}

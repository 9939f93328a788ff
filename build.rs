use std::fs;
use std::path::Path;

fn main() -> anyhow::Result<()> {
    // Necessary for ESP-IDF
    embuild::espidf::sysenv::output();

    // Build stamp reported by POST /status
    let now = chrono::Local::now();
    println!("cargo:rustc-env=BUILD_TIME={}", now.format("%H:%M:%S"));
    println!("cargo:rustc-env=BUILD_DATE={}", now.format("%b %e %Y"));

    println!("cargo:rerun-if-changed=wifi_config.h");
    println!("cargo:rerun-if-changed=partitions.csv");

    let wifi_config_path = "wifi_config.h";
    if Path::new(wifi_config_path).exists() {
        let contents = fs::read_to_string(wifi_config_path)?;
        println!("cargo:rustc-env=WIFI_SSID={}", define_value(&contents, "WIFI_SSID"));
        println!("cargo:rustc-env=WIFI_PASSWORD={}", define_value(&contents, "WIFI_PASSWORD"));
    } else {
        println!("cargo:rustc-env=WIFI_SSID=");
        println!("cargo:rustc-env=WIFI_PASSWORD=");
        println!("cargo:warning=wifi_config.h not found! Copy wifi_config.h.example to wifi_config.h and add your credentials.");
    }

    Ok(())
}

/// Value of `#define NAME "value"`, empty when the line is missing.
fn define_value(contents: &str, name: &str) -> String {
    let directive = format!("#define {}", name);
    contents
        .lines()
        .find(|l| l.trim_start().starts_with(&directive))
        .and_then(|l| l.split('"').nth(1))
        .unwrap_or_default()
        .to_string()
}

//! Collect a single product page with the builder API
//!
//! Run with: cargo run --example builder_basic -- <url> <manufacturer> <product-id>

use appliance_import::{Collector, Manufacturer};
use std::env;
use std::time::Duration;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().skip(1).collect();
    let [url, manufacturer, product_id] = args.as_slice() else {
        return Err("usage: builder_basic <url> <manufacturer> <product-id>".into());
    };
    let manufacturer: Manufacturer = manufacturer.parse()?;

    let collector = Collector::builder()
        .url(url.as_str())
        .header(
            "User-Agent",
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
        )
        .output_dir(format!("output/{manufacturer}/{product_id}"))
        .product_id(product_id.as_str())
        .manufacturer(manufacturer)
        .image_pause(Duration::from_secs(10))
        .build()?;

    let report = collector.collect();
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

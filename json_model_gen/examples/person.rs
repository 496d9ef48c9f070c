//! Generate models for a small person record and print them to stdout.

use std::io;

const SAMPLE_JSON: &str = r#"{
  "id": 1,
  "name": "Ann",
  "active": true,
  "nickname": null,
  "tags": ["x", "y"],
  "address": { "city": "NYC", "geo": { "lat": 40.7, "lng": -74.0 } },
  "orders": [{ "sku": "A1", "quantity": 2 }]
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut stdout: io::Stdout = io::stdout();
    let settings = json_model_gen::GenerateSettings {
        inspect_arrays: true,
        ..json_model_gen::GenerateSettings::default()
    };
    json_model_gen::generate_to_writer(SAMPLE_JSON, "Person", &mut stdout, &settings)?;
    Ok(())
}

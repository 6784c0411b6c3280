//! Demonstrates loading the HQDM schema, building one entity, and serializing.
//!
//! Run with: `cargo run --example dump_schema -p hqdm-ontology`

use hqdm_ontology::builders::AssetBuilder;
use hqdm_ontology::{IriBase, Schema};

fn main() {
    let schema = Schema::hqdm();

    println!("HQDM schema v{}", schema.version);
    println!("  Modules:  {}", schema.modules.len());
    println!("  Classes:  {}", schema.class_count());
    println!("  Rules:    {}", schema.rule_count());
    println!();

    for module in &schema.modules {
        let mandatory: usize = module.classes.iter().map(|c| c.mandatory().count()).sum();
        println!(
            "  {:16} {:>2} classes, {:>3} mandatory rules  [{}]",
            module.name,
            module.classes.len(),
            mandatory,
            module.label,
        );
    }

    println!();

    // An asset with nothing but its possible world is rejected.
    let ex = IriBase::new("ex", "http://example.com/ns#");
    let (Ok(a1), Ok(world)) = (ex.iri("a1"), ex.iri("world")) else {
        return;
    };
    match AssetBuilder::new(a1).part_of_possible_world_m(&world).build() {
        Ok(asset) => println!("Built {}", asset.iri()),
        Err(e) => println!("Rejected: {e}"),
    }

    let json_ld = hqdm_ontology::serializer::jsonld::to_json_ld(schema);
    let json_str =
        serde_json::to_string_pretty(&json_ld).unwrap_or_else(|e| format!("JSON error: {e}"));
    println!("JSON-LD output ({} bytes):", json_str.len());
    let preview_end = json_str
        .char_indices()
        .nth(200)
        .map_or(json_str.len(), |(i, _)| i);
    println!("{}...", &json_str[..preview_end]);
}

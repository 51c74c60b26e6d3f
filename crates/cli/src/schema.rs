use codenav_api::CodeGraphData;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("Code graph input accepted by every command:");
    println!("===========================================");
    println!("A single object, or an array of objects, of this shape.");
    println!("Occurrences should be sorted by range start; overlapping ones are");
    println!("flattened so the earliest in sort order wins.\n");

    let schema = schemars::schema_for!(CodeGraphData);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}

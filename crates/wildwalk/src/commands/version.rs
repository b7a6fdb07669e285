pub fn run() -> anyhow::Result<()> {
    println!("wildwalk {}", env!("CARGO_PKG_VERSION"));
    println!("Waypoint-walking sighting tracker");
    Ok(())
}

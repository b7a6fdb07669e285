use crate::settings::{resolve_path, Settings};
use std::path::Path;
use wildwalk_core::WaypointPlan;

pub fn run(config: Option<&Path>) -> anyhow::Result<()> {
    let path = resolve_path(config)?;
    let settings = Settings::load(&path)?;
    let plan = settings.walk.plan()?;
    print!("{}", render(&plan));
    Ok(())
}

fn render(plan: &WaypointPlan) -> String {
    let mut out = format!("Waypoint plan ({} steps)\n", plan.len());
    for (index, waypoint) in plan.waypoints().iter().enumerate() {
        out.push_str(&format!(
            "  {:>3}  {:.6}, {:.6}\n",
            index + 1,
            waypoint.latitude,
            waypoint.longitude
        ));
    }
    out
}

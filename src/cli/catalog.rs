use tripcraft_itinerary::{ACTIVITIES_PER_DAY, catalog};

pub fn list_catalog(json: bool) -> anyhow::Result<()> {
    let activities = catalog();

    if json {
        println!("{}", serde_json::to_string_pretty(activities)?);
        return Ok(());
    }

    for (index, activity) in activities.iter().enumerate() {
        let marker = if index < ACTIVITIES_PER_DAY { "*" } else { " " };
        println!(
            "{marker} {:>2}  {:<24} {:<13} {:>5}  {}",
            activity.id,
            activity.title,
            activity.kind.as_ref(),
            activity.cost,
            activity.location
        );
    }
    println!("\n* placed on every day of a generated itinerary");

    Ok(())
}

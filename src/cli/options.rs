use strum::VariantArray;
use tripcraft_shared::trip::{
    AgeRange, Budget, GroupSize, INTEREST_OPTIONS, Mobility, TripDuration,
};

/// Prints the values each form field accepts.
pub fn list_options() {
    section(
        "age-range",
        AgeRange::VARIANTS.iter().map(|v| (v.to_string(), v.label())),
    );
    section(
        "group-size",
        GroupSize::VARIANTS.iter().map(|v| (v.to_string(), v.label())),
    );
    section(
        "duration",
        TripDuration::VARIANTS
            .iter()
            .map(|v| (v.to_string(), v.label())),
    );
    section(
        "mobility",
        Mobility::VARIANTS.iter().map(|v| (v.to_string(), v.label())),
    );
    section(
        "budget",
        Budget::VARIANTS.iter().map(|v| (v.to_string(), v.label())),
    );

    println!("interest (free text, suggestions):");
    for interest in INTEREST_OPTIONS {
        println!("  {interest}");
    }
}

fn section(name: &str, values: impl Iterator<Item = (String, &'static str)>) {
    println!("{name}:");
    for (value, label) in values {
        println!("  {value:<10} {label}");
    }
    println!();
}

use uncertain_value::{BinaryOperation, FloorDiv, UncertainValue, try_binary};

/// Density of a metal sample from bench measurements
///
/// Every reading carries the resolution of the instrument it came from, and
/// the final density reports how those errors accumulate.
fn main() {
    println!("Density of a metal cylinder");
    println!("===========================\n");

    // Caliper resolution 0.01 cm, scale resolution 0.1 g
    let diameter = UncertainValue::new(2.54, 0.01);
    let height = UncertainValue::new(5.08, 0.01);
    let mass = UncertainValue::new(220.3, 0.1);

    println!("   diameter: {diameter} cm");
    println!("   height:   {height} cm");
    println!("   mass:     {mass} g");

    // Halving the diameter is exact, so the radius keeps the caliper error
    let radius: UncertainValue = diameter / 2;
    let volume = std::f64::consts::PI * radius.pow(2) * height;
    let density = mass / volume;

    println!("\nDerived quantities:");
    println!("   volume:   {volume:.3} cm^3");
    println!("   density:  {density:.4} g/cm^3");
    println!("   relative error: {:.2}%", density.relative_error() * 100.0);
    println!("   reported: {} g/cm^3", density.round(2, 2));

    for (metal, reference) in [("brass", 8.5), ("copper", 8.96), ("steel", 7.85)] {
        let verdict = if density.contains(reference) {
            "consistent"
        } else {
            "ruled out"
        };
        println!("   {metal:<7} ({reference} g/cm^3): {verdict}");
    }

    println!("\nFloor division is true division:");
    println!("   mass // 10 = {}", mass.floor_div(10));

    println!("\nRuntime-typed operands:");
    match try_binary(BinaryOperation::Add, &mass, &"12 g") {
        Ok(total) => println!("   total: {total}"),
        Err(err) => println!("   error: {err}"),
    }
}

//! Print every registered curve sampled at a few points.

use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // snips-start: example
    for curve in easecurve::enumerate_curves() {
        let row: Vec<String> = curve
            .sample(4)
            .map(|(_, v)| format!("{v:6.3}"))
            .collect();
        println!("{:<18} {}", curve.id(), row.join(" "));
    }

    let mid = easecurve::evaluate("SmoothStart3", 0.5)?;
    println!("SmoothStart3(0.5) = {mid}");
    assert_eq!(mid, 0.125);
    // snips-end: example

    Ok(())
}

//! Minimal example: generate an order-2 curve and push it through a mapping.

use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let curve = hilbertdisk::generate_normalized_curve(2)?;
    println!("order 2: {} points", curve.len());

    let disk = hilbertdisk::apply_mapping("Shirley-Chiu", &curve)?;
    for (p, q) in curve.iter().zip(&disk) {
        println!("({:+.3}, {:+.3}) -> ({:+.3}, {:+.3})", p.x, p.y, q.x, q.y);
    }

    assert!(hilbertdisk::apply_mapping("Mercator", &curve).is_err());
    Ok(())
}

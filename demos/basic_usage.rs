use anyhow::Context;
use ndvector::{utils::generate_random_vectors, vector::Vector, Item, SliceSpec};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("🚀 Vector Demo");
    println!("==============\n");

    let v = Vector::new([3, 4]);
    println!("📐 {:?} has magnitude {} and is truthy: {}", v, v.magnitude(), v.is_truthy());
    println!("   x = {}, y = {}", v.x()?, v.y()?);

    // Shortcuts past the arity are reported as missing attributes
    if let Err(e) = v.z() {
        println!("   z -> {}", e);
    }
    if let Err(e) = v.set_attr("x", 10.0) {
        println!("   set x -> {}", e);
    }

    println!("\n📦 Encoding...");
    let octets = v.to_bytes();
    println!("  {} bytes: {:02x?}", octets.len(), octets);
    let decoded = Vector::from_bytes(&octets).context("Failed to decode vector bytes")?;
    println!("  Round trip equal: {}", decoded == v);

    println!("\n✂️  Slicing...");
    let long: Vector = (0..10).map(f64::from).collect();
    println!("  {:?}", long);
    println!("  [2:5]   = {}", long.slice(2..5)?);
    println!("  [::-3]  = {}", long.slice(SliceSpec::from(..).with_step(-3))?);
    match long.item("-1")? {
        Item::Component(value) => println!("  [-1]    = {}", value),
        Item::Slice(slice) => println!("  [-1]    = {}", slice),
    }

    println!("\n🎲 Random vectors...");
    for (i, vector) in generate_random_vectors(4, 3).iter().enumerate() {
        println!("  {}: {} (|v| = {:.3}, hash = {:016x})", i, vector, vector.magnitude(), vector.hash_value());
    }

    let parsed = Vector::from_json("[1, 2.5, true]").context("Failed to parse vector JSON")?;
    println!("\n🧾 From JSON: {}", parsed);

    Ok(())
}

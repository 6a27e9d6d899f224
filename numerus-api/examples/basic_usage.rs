//! Basic usage example for the numerus API

use numerus_api::{extract_text, Config, NumberExtractor, NumberKind};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Method 1: Simplest usage with the convenience function
    println!("=== Method 1: Convenience Function ===");
    let output = extract_text("WBC 12,000 x10^9/L, CRP 3.5 mg/L, BE -2.5")?;

    println!("Found {} numerals:", output.matches.len());
    for m in &output.matches {
        println!(
            "  {:?} at bytes {}..{} -> sign {} digits {} fraction {:?}",
            m.text, m.start, m.end, m.sign, m.int_digits, m.fraction
        );
    }
    println!("Processing took {}ms\n", output.metadata.processing_time_ms);

    // Method 2: A specific number kind
    println!("=== Method 2: Unsigned Integers ===");
    let extractor = NumberExtractor::with_kind(NumberKind::UnsignedInteger)?;
    let output = extractor.extract_text("platelets 250,000; 3+4 scored")?;
    for m in &output.matches {
        println!("  {:?} -> {}", m.text, m.int_digits);
    }

    // Method 3: Custom configuration with an extra magnitude scale
    println!("\n=== Method 3: Custom Configuration ===");
    let config = Config::builder()
        .kind("unsigned-float")?
        .scale_exponent("6")?
        .build()?;
    let extractor = NumberExtractor::with_config(config)?;

    let text = "CFU 2.5 x10^6/mL and WBC 12 x10^9/L";
    for scale in extractor.find_scales(text) {
        println!("  scale {:?} denotes 10^{}", scale.text, scale.exponent);
    }

    Ok(())
}

//! Principles listing command.

use solid_lint_rules::{class_rules, method_rules};

/// Prints the built-in checks grouped by level, in evaluation order.
pub fn run() {
    println!("Class-level checks:");
    for rule in class_rules() {
        println!(
            "  {:<4} {:<24} {}",
            rule.principle().tag(),
            rule.name(),
            rule.description()
        );
    }

    println!();
    println!("Method-level checks:");
    for rule in method_rules() {
        println!(
            "  {:<4} {:<24} {}",
            rule.principle().tag(),
            rule.name(),
            rule.description()
        );
    }

    println!();
    println!("Principles:");
    for principle in [
        solid_lint_core::Principle::Srp,
        solid_lint_core::Principle::Ocp,
        solid_lint_core::Principle::Lsp,
        solid_lint_core::Principle::Isp,
        solid_lint_core::Principle::Dip,
    ] {
        println!("  {:<4} {}", principle.tag(), principle.description());
    }
}

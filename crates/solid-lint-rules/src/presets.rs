//! Ordered presets of the built-in checks.
//!
//! Check order is part of the output contract: a line's note lists class
//! findings as SRP, DIP, OCP, LSP, ISP and method findings as SRP, DIP.

use solid_lint_core::{ClassRuleBox, Config, MethodRuleBox};

use crate::{
    concrete_dependency, direct_instantiation, fat_interface, mixed_method_concerns,
    mixed_responsibilities, no_public_surface, not_substitutable,
};
use crate::{
    ConcreteDependency, DirectInstantiation, FatInterface, MixedMethodConcerns,
    MixedResponsibilities, NoPublicSurface, NotSubstitutable,
};

/// Returns the class-level checks in their fixed evaluation order.
#[must_use]
pub fn class_rules() -> Vec<ClassRuleBox> {
    vec![
        Box::new(MixedResponsibilities::new()),
        Box::new(ConcreteDependency::new()),
        Box::new(NoPublicSurface::new()),
        Box::new(NotSubstitutable::new()),
        Box::new(FatInterface::new()),
    ]
}

/// Returns the method-level checks in their fixed evaluation order.
#[must_use]
pub fn method_rules() -> Vec<MethodRuleBox> {
    vec![
        Box::new(MixedMethodConcerns::new()),
        Box::new(DirectInstantiation::new()),
    ]
}

/// Builds the class-level checks from configuration.
///
/// Disabled checks are dropped; recognized options override the defaults.
/// The evaluation order of the remaining checks is unchanged.
#[must_use]
pub fn class_rules_from(config: &Config) -> Vec<ClassRuleBox> {
    let mut rules: Vec<ClassRuleBox> = Vec::new();

    if config.is_rule_enabled(mixed_responsibilities::NAME) {
        let mut rule = MixedResponsibilities::new();
        if let Some(cfg) = config.rules.get(mixed_responsibilities::NAME) {
            if let Some(v) = cfg.get_str("log_method") {
                rule = rule.log_method(v);
            }
            if let Some(v) = cfg.get_str("db_method") {
                rule = rule.db_method(v);
            }
        }
        rules.push(Box::new(rule));
    }

    if config.is_rule_enabled(concrete_dependency::NAME) {
        rules.push(Box::new(ConcreteDependency::new()));
    }

    if config.is_rule_enabled(no_public_surface::NAME) {
        rules.push(Box::new(NoPublicSurface::new()));
    }

    if config.is_rule_enabled(not_substitutable::NAME) {
        rules.push(Box::new(NotSubstitutable::new()));
    }

    if config.is_rule_enabled(fat_interface::NAME) {
        let mut rule = FatInterface::new();
        let max = config
            .rules
            .get(fat_interface::NAME)
            .and_then(|c| c.get_int("max_methods"))
            .and_then(|v| usize::try_from(v).ok());
        if let Some(max) = max {
            rule = rule.max_methods(max);
        }
        rules.push(Box::new(rule));
    }

    rules
}

/// Builds the method-level checks from configuration.
#[must_use]
pub fn method_rules_from(config: &Config) -> Vec<MethodRuleBox> {
    let mut rules: Vec<MethodRuleBox> = Vec::new();

    if config.is_rule_enabled(mixed_method_concerns::NAME) {
        let mut rule = MixedMethodConcerns::new();
        if let Some(cfg) = config.rules.get(mixed_method_concerns::NAME) {
            if let Some(v) = cfg.get_str("log_token") {
                rule = rule.log_token(v);
            }
            if let Some(v) = cfg.get_str("db_token") {
                rule = rule.db_token(v);
            }
        }
        rules.push(Box::new(rule));
    }

    if config.is_rule_enabled(direct_instantiation::NAME) {
        let mut rule = DirectInstantiation::new();
        if let Some(v) = config
            .rules
            .get(direct_instantiation::NAME)
            .and_then(|c| c.get_str("marker"))
        {
            rule = rule.marker(v);
        }
        rules.push(Box::new(rule));
    }

    rules
}

// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Meshspell Inc.

//! CLI output reporter with colored formatting

use crate::spells::{Outcome, Spell};
use crate::transplant::TransplantReport;
use colored::*;

/// CLI reporter for formatted output
pub struct Reporter;

impl Reporter {
    /// Report a successful cast with its advisory warnings.
    pub fn report_outcome(spell: &str, outcome: &Outcome) {
        println!(
            "{} {} {}",
            "✅".green(),
            spell.bold(),
            outcome.message.green()
        );
        for warning in &outcome.warnings {
            println!("{} {}", "⚠️".yellow(), warning.yellow());
        }
    }

    pub fn report_error(context: &str, error: &dyn std::fmt::Display) {
        eprintln!("{} {} {}", "❌".red(), context.bold(), error.to_string().red());
    }

    /// Print the spell registry grouped by page.
    pub fn report_registry(spells: &[Spell]) {
        println!("{}", "Spells:".bold());
        let mut page: Option<&str> = None;
        for spell in spells {
            if page != Some(spell.page) {
                println!("  {}", spell.page.cyan());
                page = Some(spell.page);
            }
            println!("    {}", spell.name);
        }
    }

    /// Print a transplant summary, listing every unmatched vertex.
    pub fn report_transplant(report: &TransplantReport) {
        let total = report.modified + report.unmatched.len();
        println!(
            "{} modified {} of {} vertices",
            "✅".green(),
            report.modified.to_string().bold(),
            total
        );

        if !report.unmatched.is_empty() {
            println!(
                "{} {} vertices had no matching sample and were left unchanged:",
                "⚠️".yellow(),
                report.unmatched.len().to_string().yellow()
            );
            for (index, position) in &report.unmatched {
                println!(
                    "    {} ({:.6}, {:.6}, {:.6})",
                    index.to_string().bright_black(),
                    position.x,
                    position.y,
                    position.z
                );
            }
        }
    }
}

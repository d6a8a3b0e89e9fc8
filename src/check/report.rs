//! Human-readable report for the registration check.
use std::io::{self, Write};

use serde_json::Value;

use super::protocol::AdvertisedTool;

pub const BANNER: &str = "Testing Excel MCP Server - New Tools Registration";
pub const PASSED_LINE: &str = "✅ Test PASSED - All new tools are available!";
pub const FAILED_LINE: &str = "❌ Test FAILED - Some tools are missing!";
const RULE_WIDTH: usize = 50;

/// An expected tool the server does advertise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundTool {
    pub name: String,
    pub required_arguments: Vec<String>,
}

/// Expected tools compared against what the server advertised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolReport {
    pub available: Vec<String>,
    pub found: Vec<FoundTool>,
    pub missing: Vec<String>,
}

impl ToolReport {
    /// Compare in `expected` order; duplicates in `advertised` are harmless.
    pub fn evaluate(expected: &[String], advertised: &[AdvertisedTool]) -> Self {
        let available = advertised.iter().map(|tool| tool.name.clone()).collect();
        let mut found = Vec::new();
        let mut missing = Vec::new();
        for name in expected {
            match advertised.iter().find(|tool| &tool.name == name) {
                Some(tool) => found.push(FoundTool {
                    name: name.clone(),
                    required_arguments: tool.required_arguments(),
                }),
                None => missing.push(name.clone()),
            }
        }
        Self {
            available,
            found,
            missing,
        }
    }

    pub fn all_registered(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Final state of a check that got as far as a `tools/list` answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    Listed(ToolReport),
    NoToolsListed,
}

impl CheckOutcome {
    pub fn passed(&self) -> bool {
        matches!(self, CheckOutcome::Listed(report) if report.all_registered())
    }

    pub fn missing_count(&self) -> usize {
        match self {
            CheckOutcome::Listed(report) => report.missing.len(),
            CheckOutcome::NoToolsListed => 0,
        }
    }
}

pub fn write_banner(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{BANNER}")?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(out)
}

pub fn write_response(out: &mut impl Write, label: &str, raw: &Value) -> io::Result<()> {
    let pretty = serde_json::to_string_pretty(raw)?;
    writeln!(out, "{label} {pretty}")
}

pub fn write_outcome(out: &mut impl Write, outcome: &CheckOutcome) -> io::Result<()> {
    let report = match outcome {
        CheckOutcome::Listed(report) => report,
        CheckOutcome::NoToolsListed => return writeln!(out, "❌ No tools found in response"),
    };

    writeln!(out)?;
    writeln!(out, "Available tools: {:?}", report.available)?;
    for tool in &report.found {
        writeln!(out, "✅ {} - FOUND", tool.name)?;
        if !tool.required_arguments.is_empty() {
            writeln!(
                out,
                "   required arguments: {}",
                tool.required_arguments.join(", ")
            )?;
        }
    }
    for name in &report.missing {
        writeln!(out, "❌ {name} - MISSING")?;
    }

    writeln!(out)?;
    if report.all_registered() {
        writeln!(out, "🎉 All new tools are successfully registered!")
    } else {
        writeln!(out, "❌ Missing tools: {:?}", report.missing)
    }
}

pub fn write_error(out: &mut impl Write, error: &dyn std::fmt::Display) -> io::Result<()> {
    writeln!(out, "Error testing tools: {error}")
}

pub fn write_verdict(out: &mut impl Write, passed: bool) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", if passed { PASSED_LINE } else { FAILED_LINE })
}

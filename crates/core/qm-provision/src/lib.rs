//! Provisioning-output lookups.
//!
//! Both tools can take their resource identifier from the output of the
//! infrastructure provisioning tool instead of a flag. That capability is
//! modeled as the [`ProvisionedOutputs`] trait so command logic can be
//! exercised with canned values instead of a real `terraform` binary.
//!
//! Implementations:
//! - [`TerraformOutputs`] - runs `terraform output -raw <name>` (production)
//! - [`StaticOutputs`] - returns values from an in-memory map (tests)

use std::collections::HashMap;
use std::process::Command;

use qm_error::{ProvisionError, Result};
use tracing::debug;

/// A source of named provisioning outputs.
///
/// `output` returns the trimmed value for `name`, or fails. Failures are
/// fatal to the invocation: an operator who asked for a provisioned
/// identifier and did not get one has nothing useful to fall back to.
pub trait ProvisionedOutputs {
    /// Look up the value of a single named output.
    fn output(&self, name: &str) -> Result<String>;
}

/// Reads outputs by shelling out to the terraform CLI.
#[derive(Debug, Clone)]
pub struct TerraformOutputs {
    program: String,
}

impl TerraformOutputs {
    /// Create a provider that invokes `terraform` from the PATH.
    pub fn new() -> Self {
        Self::with_program("terraform")
    }

    /// Create a provider that invokes a specific program.
    ///
    /// Used by tests to substitute a harmless binary for terraform.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for TerraformOutputs {
    fn default() -> Self {
        Self::new()
    }
}

impl ProvisionedOutputs for TerraformOutputs {
    fn output(&self, name: &str) -> Result<String> {
        debug!(program = %self.program, output = %name, "Reading provisioning output");

        let result = Command::new(&self.program)
            .args(["output", "-raw", name])
            .output()
            .map_err(|e| ProvisionError::Spawn(format!("`{}`: {e}", self.program)))?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            return Err(ProvisionError::Lookup(format!(
                "`{} output -raw {}` exited with {}: {}",
                self.program,
                name,
                result.status,
                stderr.trim()
            ))
            .into());
        }

        Ok(String::from_utf8_lossy(&result.stdout).trim().to_string())
    }
}

/// Canned outputs for tests.
#[derive(Debug, Clone, Default)]
pub struct StaticOutputs {
    values: HashMap<String, String>,
}

impl StaticOutputs {
    /// Create an empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a named output value.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }
}

impl ProvisionedOutputs for StaticOutputs {
    fn output(&self, name: &str) -> Result<String> {
        self.values
            .get(name)
            .cloned()
            .ok_or_else(|| ProvisionError::Lookup(format!("no output named '{name}'")).into())
    }
}

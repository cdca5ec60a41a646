use std::collections::HashSet;

use crate::error::{PluginError, Result};
use crate::hash::fnv32a;
use crate::job::{JobDefinition, JobHandler};

/// A job after registration: identifier assigned, handler captured.
/// Created once at registry build time and never mutated afterwards.
#[derive(Clone)]
pub struct RegisteredJob {
    /// Identifier derived from the title via FNV-1a.
    pub id: u32,
    pub title: String,
    pub description: String,
    pub priority: i64,
    pub handler: JobHandler,
}

/// The immutable, validated collection of jobs a plugin serves for its
/// lifetime.
///
/// Built once before the listener starts accepting connections and shared
/// read-only across in-flight RPC calls, so no locking is needed.
pub struct JobRegistry {
    jobs: Vec<RegisteredJob>,
}

impl JobRegistry {
    /// Build a registry from caller-supplied definitions, preserving input
    /// order.
    ///
    /// Fails with `DuplicateJob` if two titles map to the same identifier.
    /// An ambiguous registry could dispatch to the wrong handler, so this is
    /// startup-fatal: no registry is returned and nothing must be served.
    pub fn build(definitions: Vec<JobDefinition>) -> Result<Self> {
        let mut jobs = Vec::with_capacity(definitions.len());
        let mut seen = HashSet::with_capacity(definitions.len());

        for def in definitions {
            let id = fnv32a(&def.title);
            if !seen.insert(id) {
                return Err(PluginError::DuplicateJob(def.title));
            }
            jobs.push(RegisteredJob {
                id,
                title: def.title,
                description: def.description,
                priority: def.priority,
                handler: def.handler,
            });
        }

        Ok(Self { jobs })
    }

    /// Look up a job by identifier.
    pub fn get(&self, id: u32) -> Option<&RegisteredJob> {
        self.jobs.iter().find(|job| job.id == id)
    }

    /// Jobs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &RegisteredJob> {
        self.jobs.iter()
    }

    /// Returns the number of registered jobs.
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    /// Returns true if no jobs are registered.
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}

//! Overload grouping.
//!
//! Partitions the ordered argument catalog into one group per
//! `(routine name, overload id)` pair. Groups come out in the order their key
//! first appears, and rows keep their catalog order inside a group.
//!
//! # Examples
//!
//! ```
//! use pkgmap_codegen::grouper::group_overloads;
//! use pkgmap_core::{ArgumentDescriptor, Direction};
//!
//! let rows = vec![
//!     ArgumentDescriptor::new("APP", "PKG", "ADD").with_overload("1").with_name("P_A"),
//!     ArgumentDescriptor::new("APP", "PKG", "ADD").with_overload("2").with_name("P_B"),
//! ];
//!
//! let groups = group_overloads(&rows).unwrap();
//! assert_eq!(groups.len(), 2);
//! assert!(groups[0].is_overloaded_in(&groups));
//! ```

use pkgmap_core::{ArgumentDescriptor, Error, Result};
use std::collections::HashMap;

/// Key identifying one overload of a routine.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OverloadKey {
    /// Remote routine name
    pub routine: String,
    /// Overload id, absent for routines that are not overloaded remotely
    pub overload: Option<String>,
}

/// All catalog rows of one routine overload.
#[derive(Debug, Clone, PartialEq)]
pub struct OverloadGroup {
    key: OverloadKey,
    arguments: Vec<ArgumentDescriptor>,
}

impl OverloadGroup {
    /// Creates a group from its rows.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyGroup`] if `arguments` is empty.
    pub fn new(key: OverloadKey, arguments: Vec<ArgumentDescriptor>) -> Result<Self> {
        if arguments.is_empty() {
            return Err(Error::EmptyGroup {
                routine: key.routine,
            });
        }
        Ok(Self { key, arguments })
    }

    /// Returns the group key.
    #[inline]
    #[must_use]
    pub const fn key(&self) -> &OverloadKey {
        &self.key
    }

    /// Returns the remote routine name.
    #[inline]
    #[must_use]
    pub fn routine(&self) -> &str {
        &self.key.routine
    }

    /// Returns the overload id.
    #[inline]
    #[must_use]
    pub fn overload(&self) -> Option<&str> {
        self.key.overload.as_deref()
    }

    /// Returns the rows in catalog order.
    #[inline]
    #[must_use]
    pub fn arguments(&self) -> &[ArgumentDescriptor] {
        &self.arguments
    }

    /// Returns the first row, which carries owner and package.
    #[must_use]
    pub fn head(&self) -> &ArgumentDescriptor {
        // non-empty by construction
        &self.arguments[0]
    }

    /// Returns `true` if another group in `groups` shares this routine name.
    #[must_use]
    pub fn is_overloaded_in(&self, groups: &[Self]) -> bool {
        groups
            .iter()
            .filter(|g| g.routine() == self.routine())
            .nth(1)
            .is_some()
    }
}

/// Groups catalog rows by routine name and overload id.
///
/// # Errors
///
/// Returns [`Error::EmptyCatalog`] if `rows` is empty.
pub fn group_overloads(rows: &[ArgumentDescriptor]) -> Result<Vec<OverloadGroup>> {
    if rows.is_empty() {
        return Err(Error::EmptyCatalog);
    }

    let mut order: Vec<OverloadKey> = Vec::new();
    let mut buckets: HashMap<OverloadKey, Vec<ArgumentDescriptor>> = HashMap::new();

    for row in rows {
        let key = OverloadKey {
            routine: row.routine_name.clone(),
            overload: row.overload.clone().filter(|id| !id.trim().is_empty()),
        };
        buckets
            .entry(key.clone())
            .or_insert_with(|| {
                order.push(key);
                Vec::new()
            })
            .push(row.clone());
    }

    let groups = order
        .into_iter()
        .map(|key| {
            let arguments = buckets.remove(&key).unwrap_or_default();
            OverloadGroup::new(key, arguments)
        })
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(groups = groups.len(), rows = rows.len(), "grouped catalog");
    Ok(groups)
}

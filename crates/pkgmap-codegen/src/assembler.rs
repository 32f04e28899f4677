//! Declaration assembly.
//!
//! Runs the synthesizer, holder emitter and body emitter over every overload
//! group and collects the results under one package container. For each
//! group the synchronous callable precedes the asynchronous one.

use crate::body::{BodyEmitter, CallBody};
use crate::common::naming;
use crate::composite::{self, CompositeOutputType};
use crate::grouper::OverloadGroup;
use crate::signature::{NamingScope, ReturnShape, RoutineSignature, SignatureSynthesizer, Variant};
use crate::type_map::TypeMapper;
use pkgmap_core::{Error, GenerationConfig, Namespace, Result};
use serde::Serialize;
use std::collections::HashMap;

/// One synthesized callable.
#[derive(Debug, Clone, PartialEq)]
pub struct Callable {
    /// Resolved signature
    pub signature: RoutineSignature,
    /// Call body
    pub body: CallBody,
}

/// Everything generated for one package.
#[derive(Debug, Clone, PartialEq)]
pub struct PackageDeclaration {
    /// Owning schema
    pub owner: String,
    /// Remote package name
    pub package: String,
    /// Target module path
    pub namespace: Namespace,
    /// Container type name
    pub container: String,
    /// Output holders, deduplicated by name and shape
    pub holders: Vec<CompositeOutputType>,
    /// Callables in emission order
    pub callables: Vec<Callable>,
}

impl PackageDeclaration {
    /// Returns the relative path of the generated file.
    #[must_use]
    pub fn file_path(&self) -> String {
        naming::module_file_path(self.namespace.segments(), &self.package)
    }

    /// Returns the number of callables whose body is a stub.
    #[must_use]
    pub fn unsupported_count(&self) -> usize {
        self.callables.iter().filter(|c| c.body.is_stub()).count()
    }

    /// Returns a flat description of every callable.
    #[must_use]
    pub fn summary(&self) -> Vec<CallableSummary> {
        self.callables
            .iter()
            .map(|c| {
                let sig = &c.signature;
                CallableSummary {
                    name: sig.name.clone(),
                    routine: sig.id.routine().to_string(),
                    overload: sig.overload.clone(),
                    variant: sig.variant,
                    shape: sig.return_shape,
                    return_type: sig.return_type(),
                    params: sig
                        .params
                        .iter()
                        .map(|p| format!("{}: {}", p.name, p.declared_type()))
                        .collect(),
                    holder: sig.holder.clone(),
                    unsupported: c.body.is_stub(),
                }
            })
            .collect()
    }
}

/// Flat description of one callable, for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallableSummary {
    /// Callable name
    pub name: String,
    /// Remote routine name
    pub routine: String,
    /// Overload id
    pub overload: Option<String>,
    /// Calling convention
    pub variant: Variant,
    /// Return shape
    pub shape: ReturnShape,
    /// Declared return type
    pub return_type: String,
    /// Parameter declarations, connection excluded
    pub params: Vec<String>,
    /// Output holder name
    pub holder: Option<String>,
    /// Body is a not-implemented stub
    pub unsupported: bool,
}

/// Assembles the package declaration for a set of groups.
///
/// # Errors
///
/// Propagates synthesis and body emission errors; the first error aborts
/// the run. Returns [`Error::InvalidCatalog`] if two routines map to the
/// same callable name.
pub fn assemble(groups: &[OverloadGroup], config: &GenerationConfig) -> Result<PackageDeclaration> {
    let mapper = TypeMapper::new(config.strict_types);
    let synthesizer = SignatureSynthesizer::new(&mapper);
    let emitter = BodyEmitter::new(&mapper);

    let variants: Vec<Variant> = [
        (config.emit_sync, Variant::Sync),
        (config.emit_async, Variant::Async),
    ]
    .into_iter()
    .filter_map(|(enabled, variant)| enabled.then_some(variant))
    .collect();

    let mut holders: Vec<CompositeOutputType> = Vec::new();
    let mut callables = Vec::new();
    let mut taken: HashMap<String, String> = HashMap::new();

    for group in groups {
        let scope = NamingScope {
            overloaded: group.is_overloaded_in(groups),
            both_variants: config.emits_both(),
        };

        for &variant in &variants {
            let mut signature = synthesizer.synthesize(group, variant, scope)?;
            claim_name(&mut taken, &signature)?;
            if let Some(holder) = composite::emit_holder(&signature) {
                let holder = place_holder(&mut holders, holder, group, scope);
                signature.holder = Some(holder);
            }
            let body = emitter.emit(&signature)?;
            callables.push(Callable { signature, body });
        }
    }

    let declaration = PackageDeclaration {
        owner: config.owner.clone(),
        package: config.package.clone(),
        namespace: config.namespace.clone(),
        container: naming::pascal_case(&config.package),
        holders,
        callables,
    };

    tracing::debug!(
        package = %declaration.package,
        callables = declaration.callables.len(),
        holders = declaration.holders.len(),
        unsupported = declaration.unsupported_count(),
        "assembled package"
    );
    Ok(declaration)
}

/// Records the callable name of a signature, failing if another routine
/// already produced it.
fn claim_name(taken: &mut HashMap<String, String>, signature: &RoutineSignature) -> Result<()> {
    let owner = match &signature.overload {
        Some(id) => format!("{} (overload {id})", signature.id),
        None => signature.id.to_string(),
    };
    if let Some(existing) = taken.get(&signature.name) {
        return Err(Error::InvalidCatalog {
            message: format!(
                "'{existing}' and '{owner}' both map to callable '{}'",
                signature.name
            ),
        });
    }
    taken.insert(signature.name.clone(), owner);
    Ok(())
}

/// Adds a holder unless an identical one exists, renaming it when a
/// different holder already took the name. Returns the name to use.
fn place_holder(
    holders: &mut Vec<CompositeOutputType>,
    mut holder: CompositeOutputType,
    group: &OverloadGroup,
    scope: NamingScope,
) -> String {
    let clash = holders.iter().find(|h| h.name == holder.name);
    match clash {
        Some(existing) if existing.same_shape(&holder) => return holder.name,
        Some(_) => {
            holder.name =
                naming::holder_name(group.routine(), group.overload(), scope.overloaded, true);
            if let Some(existing) = holders.iter().find(|h| h.name == holder.name)
                && existing.same_shape(&holder)
            {
                return holder.name;
            }
        }
        None => {}
    }

    let name = holder.name.clone();
    holders.push(holder);
    name
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grouper::group_overloads;
    use pkgmap_core::{ArgumentDescriptor, Direction};

    fn arg(routine: &str, overload: &str, name: Option<&str>, ty: &str, dir: Direction, pos: u32) -> ArgumentDescriptor {
        let mut a = ArgumentDescriptor::new("APP", "ORDERS_PKG", routine)
            .with_overload(overload)
            .at_position(pos)
            .with_type(ty)
            .with_direction(dir);
        if let Some(n) = name {
            a = a.with_name(n);
        }
        a
    }

    fn config(sync: bool, asynchronous: bool) -> GenerationConfig {
        GenerationConfig::builder()
            .owner("APP")
            .package("ORDERS_PKG")
            .namespace("db::orders")
            .emit_sync(sync)
            .emit_async(asynchronous)
            .build()
            .unwrap()
    }

    #[test]
    fn test_both_variants_interleaved() {
        let rows = [
            arg("ADD_ITEM", "1", Some("P_ID"), "NUMBER", Direction::In, 1),
            arg("ADD_ITEM", "1", None, "NUMBER", Direction::Out, 0),
            arg("PURGE", "1", Some("P_DAYS"), "PLS_INTEGER", Direction::In, 1),
        ];
        let groups = group_overloads(&rows).unwrap();
        let decl = assemble(&groups, &config(true, true)).unwrap();

        let names: Vec<_> = decl.callables.iter().map(|c| c.signature.name.as_str()).collect();
        assert_eq!(names, vec!["add_item", "add_item_async", "purge", "purge_async"]);
        assert_eq!(decl.container, "OrdersPkg");
        assert_eq!(decl.file_path(), "db/orders/orders_pkg.rs");
    }

    #[test]
    fn test_single_variant_has_no_suffix() {
        let rows = [arg("PURGE", "1", Some("P_DAYS"), "PLS_INTEGER", Direction::In, 1)];
        let groups = group_overloads(&rows).unwrap();
        let decl = assemble(&groups, &config(false, true)).unwrap();
        assert_eq!(decl.callables.len(), 1);
        assert_eq!(decl.callables[0].signature.name, "purge");
        assert!(decl.callables[0].signature.variant.is_async());
    }

    #[test]
    fn test_identical_holders_shared() {
        let rows = [
            arg("GET_INFO", "1", Some("P_NAME"), "VARCHAR2", Direction::Out, 1),
            arg("GET_INFO", "1", Some("P_AGE"), "NUMBER", Direction::Out, 2),
        ];
        let groups = group_overloads(&rows).unwrap();
        let decl = assemble(&groups, &config(true, true)).unwrap();
        assert_eq!(decl.holders.len(), 1);
        assert_eq!(decl.callables[0].signature.holder.as_deref(), Some("GetInfoOut"));
        assert_eq!(decl.callables[1].signature.holder.as_deref(), Some("GetInfoOut"));
    }

    #[test]
    fn test_in_out_holder_shared_across_variants() {
        let rows = [
            arg("GET_INFO", "1", Some("P_NAME"), "VARCHAR2", Direction::Out, 1),
            arg("GET_INFO", "1", Some("P_AGE"), "NUMBER", Direction::Out, 2),
            arg("GET_INFO", "1", Some("P_TAG"), "VARCHAR2", Direction::InOut, 3),
        ];
        let groups = group_overloads(&rows).unwrap();
        let decl = assemble(&groups, &config(true, true)).unwrap();

        let names: Vec<_> = decl.holders.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, vec!["GetInfoOut"]);
        // the synchronous form takes P_TAG as a parameter and still returns it
        // through the holder, so both holders have the same fields
        assert_eq!(decl.holders[0].fields.len(), 3);
    }

    #[test]
    fn test_async_return_merge_gets_own_holder() {
        let rows = [
            arg("F", "1", None, "NUMBER", Direction::Out, 0),
            arg("F", "1", Some("P_A"), "NUMBER", Direction::Out, 1),
            arg("F", "1", Some("P_B"), "NUMBER", Direction::Out, 2),
            arg("G", "1", Some("P_A"), "NUMBER", Direction::Out, 1),
            arg("G", "1", Some("P_B"), "NUMBER", Direction::Out, 2),
        ];
        let groups = group_overloads(&rows).unwrap();
        let decl = assemble(&groups, &config(true, true)).unwrap();

        // F: sync returns the result with &mut outputs, async merges into FOut
        assert_eq!(decl.callables[0].signature.holder, None);
        assert_eq!(decl.callables[1].signature.holder.as_deref(), Some("FOut"));
        let names: Vec<_> = decl.holders.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, vec!["FOut", "GOut"]);
    }

    #[test]
    fn test_place_holder_renames_on_clash() {
        let rows = [arg("F", "1", Some("P_A"), "NUMBER", Direction::Out, 1)];
        let groups = group_overloads(&rows).unwrap();
        let mut holders = vec![CompositeOutputType {
            name: "FOut".to_string(),
            routine: "APP.ORDERS_PKG.F".to_string(),
            fields: vec![],
        }];
        let incoming = CompositeOutputType {
            name: "FOut".to_string(),
            routine: "APP.ORDERS_PKG.F".to_string(),
            fields: vec![composite::HolderField {
                name: "p_a".to_string(),
                remote: "P_A".to_string(),
                ty: "Option<Decimal>".to_string(),
            }],
        };

        let name = place_holder(&mut holders, incoming.clone(), &groups[0], NamingScope::default());
        assert_eq!(name, "FAsyncOut");
        assert_eq!(holders.len(), 2);

        // a second identical holder reuses the renamed one
        let again = place_holder(&mut holders, incoming, &groups[0], NamingScope::default());
        assert_eq!(again, "FAsyncOut");
        assert_eq!(holders.len(), 2);
    }

    #[test]
    fn test_sanitized_names_collide() {
        let rows = [
            arg("GET$INFO", "1", Some("P_A"), "NUMBER", Direction::In, 1),
            arg("GET_INFO", "1", Some("P_A"), "NUMBER", Direction::In, 1),
        ];
        let groups = group_overloads(&rows).unwrap();
        let err = assemble(&groups, &config(true, false)).unwrap_err();

        assert!(err.is_catalog_error());
        let message = err.to_string();
        assert!(message.contains("APP.ORDERS_PKG.GET$INFO"));
        assert!(message.contains("APP.ORDERS_PKG.GET_INFO"));
        assert!(message.contains("'get_info'"));
    }

    #[test]
    fn test_async_suffix_collides_with_routine_name() {
        let rows = [
            arg("X", "1", Some("P_A"), "NUMBER", Direction::In, 1),
            arg("X_ASYNC", "1", Some("P_A"), "NUMBER", Direction::In, 1),
        ];
        let groups = group_overloads(&rows).unwrap();

        let err = assemble(&groups, &config(true, true)).unwrap_err();
        assert!(err.is_catalog_error());
        assert!(err.to_string().contains("'x_async'"));

        // without the suffix the names stay distinct
        let decl = assemble(&groups, &config(true, false)).unwrap();
        let names: Vec<_> = decl.callables.iter().map(|c| c.signature.name.as_str()).collect();
        assert_eq!(names, vec!["x", "x_async"]);
    }

    #[test]
    fn test_summary_reports_shapes() {
        let rows = [
            arg("SAVE", "1", Some("P_REC"), "PL/SQL RECORD", Direction::In, 1),
            arg("SAVE", "1", Some("F1"), "NUMBER", Direction::In, 1).at_level(1),
            arg("GET", "1", Some("P_V"), "VARCHAR2", Direction::Out, 1),
        ];
        let groups = group_overloads(&rows).unwrap();
        let decl = assemble(&groups, &config(true, false)).unwrap();
        let summary = decl.summary();

        assert!(summary[0].unsupported);
        assert_eq!(summary[0].params, vec!["p_rec: Value"]);
        assert_eq!(summary[1].shape, ReturnShape::OutAsReturn);
        assert_eq!(summary[1].return_type, "Option<String>");
        assert_eq!(decl.unsupported_count(), 1);
    }
}

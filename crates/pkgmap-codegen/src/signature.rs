//! Signature synthesis.
//!
//! Decides, per overload group and calling convention, the return shape,
//! the exposed parameter list and whether an output holder is needed.
//!
//! Return shape precedence, where the output set is the named OUT arguments
//! in the synchronous form and the named OUT and IN_OUT arguments in the
//! asynchronous form:
//!
//! 1. a nameless OUT argument is the return slot; in the asynchronous form
//!    it is merged into a holder when the output set is not empty
//! 2. a single output becomes the return value
//! 3. two or more outputs return a holder
//! 4. otherwise nothing is returned
//!
//! Defaulted parameters are declared after all others; binding order is
//! unaffected and follows catalog position.

use crate::common::naming;
use crate::grouper::OverloadGroup;
use crate::type_map::{LocalType, TypeMapper};
use pkgmap_core::{ArgumentDescriptor, Direction, Error, Result, RoutineId};
use serde::Serialize;
use std::fmt;

/// Calling convention of a generated callable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Blocking call through `Connection`
    Sync,
    /// Awaited call through `AsyncConnection`
    Async,
}

impl Variant {
    /// Returns `true` for the asynchronous convention.
    #[must_use]
    pub const fn is_async(&self) -> bool {
        matches!(self, Self::Async)
    }

    /// Returns the lowercase name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sync => "sync",
            Self::Async => "async",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a callable returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReturnShape {
    /// Nothing
    Void,
    /// The function result
    ReturnSlot,
    /// The single output argument
    OutAsReturn,
    /// An output holder
    Composite,
}

impl ReturnShape {
    /// Returns the snake_case name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Void => "void",
            Self::ReturnSlot => "return_slot",
            Self::OutAsReturn => "out_as_return",
            Self::Composite => "composite",
        }
    }
}

impl fmt::Display for ReturnShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a parameter is passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamMode {
    /// By value
    Value,
    /// `&mut`, written after the call
    OutRef,
    /// `&mut`, read before and written after the call
    InOutRef,
}

impl ParamMode {
    /// Returns `true` for by-reference modes.
    #[must_use]
    pub const fn is_ref(&self) -> bool {
        !matches!(self, Self::Value)
    }
}

/// One exposed parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Param {
    /// Rust identifier
    pub name: String,
    /// Remote argument name
    pub remote: String,
    /// Resolved type
    pub ty: LocalType,
    /// Passing mode
    pub mode: ParamMode,
    /// Remote argument has a default value
    pub defaulted: bool,
}

impl Param {
    /// Returns the declared Rust type (`Option<T>` or `&mut Option<T>`).
    #[must_use]
    pub fn declared_type(&self) -> String {
        if self.mode.is_ref() {
            format!("&mut {}", self.ty.nullable)
        } else {
            self.ty.nullable.clone()
        }
    }
}

/// A level-0 argument with its resolved local type.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedArgument {
    /// Catalog row
    pub descriptor: ArgumentDescriptor,
    /// Resolved local type
    pub ty: LocalType,
}

impl TypedArgument {
    /// Returns the remote name, empty for the return slot.
    #[must_use]
    pub fn remote_name(&self) -> &str {
        self.descriptor.name().unwrap_or_default()
    }
}

/// Fully resolved callable signature.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutineSignature {
    /// Routine identifier
    pub id: RoutineId,
    /// Overload id
    pub overload: Option<String>,
    /// Calling convention
    pub variant: Variant,
    /// Callable name
    pub name: String,
    /// Level-0 arguments in catalog order, placeholders removed
    pub arguments: Vec<TypedArgument>,
    /// Resolved return shape
    pub return_shape: ReturnShape,
    /// Index into `arguments` of the return slot
    pub return_slot: Option<usize>,
    /// Index into `arguments` of the out-as-return argument
    pub out_as_return: Option<usize>,
    /// Exposed parameters in declaration order
    pub params: Vec<Param>,
    /// Output holder type name, for composite returns
    pub holder: Option<String>,
    /// Body is a not-implemented stub
    pub unsupported: bool,
}

impl RoutineSignature {
    /// Returns `true` if a holder is returned.
    #[must_use]
    pub const fn requires_composite(&self) -> bool {
        matches!(self.return_shape, ReturnShape::Composite)
    }

    /// Returns the declared Rust return type, without the `Result`.
    #[must_use]
    pub fn return_type(&self) -> String {
        match self.return_shape {
            ReturnShape::Void => "()".to_string(),
            ReturnShape::ReturnSlot => self.typed(self.return_slot),
            ReturnShape::OutAsReturn => self.typed(self.out_as_return),
            ReturnShape::Composite => self.holder.clone().unwrap_or_else(|| "()".to_string()),
        }
    }

    fn typed(&self, index: Option<usize>) -> String {
        index
            .and_then(|i| self.arguments.get(i))
            .map_or_else(|| "()".to_string(), |arg| arg.ty.nullable.clone())
    }

    /// Returns the exposed parameter for a remote argument name.
    #[must_use]
    pub fn param_for(&self, remote: &str) -> Option<&Param> {
        self.params.iter().find(|p| p.remote == remote)
    }

    /// Returns `true` if the argument at `index` is written into the holder.
    #[must_use]
    pub fn is_holder_member(&self, index: usize) -> bool {
        self.requires_composite()
            && self
                .arguments
                .get(index)
                .is_some_and(|arg| arg.descriptor.direction.is_output())
    }

    /// Returns `true` if a named argument belongs to the output set.
    #[must_use]
    pub fn is_output(&self, arg: &ArgumentDescriptor) -> bool {
        if arg.is_return_slot() {
            return false;
        }
        match self.variant {
            Variant::Sync => arg.direction == Direction::Out,
            Variant::Async => arg.direction.is_output(),
        }
    }
}

/// Naming facts that depend on the whole run rather than one group.
#[derive(Debug, Clone, Copy, Default)]
pub struct NamingScope {
    /// The routine name has more than one overload in the catalog
    pub overloaded: bool,
    /// Both calling conventions are emitted
    pub both_variants: bool,
}

/// Builds signatures for overload groups.
#[derive(Debug, Clone, Copy)]
pub struct SignatureSynthesizer<'m> {
    mapper: &'m TypeMapper,
}

impl<'m> SignatureSynthesizer<'m> {
    /// Creates a synthesizer using the given type mapper.
    #[must_use]
    pub const fn new(mapper: &'m TypeMapper) -> Self {
        Self { mapper }
    }

    /// Synthesizes the signature of one group for one calling convention.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCatalog`] if the group has more than one return
    /// slot, and [`Error::UnmappedLocalType`] for unmapped types in strict
    /// mode.
    pub fn synthesize(
        &self,
        group: &OverloadGroup,
        variant: Variant,
        scope: NamingScope,
    ) -> Result<RoutineSignature> {
        let head = group.head();
        let id = head.routine_id();

        let unsupported = group
            .arguments()
            .iter()
            .any(|arg| !arg.is_top_level() || (!arg.is_placeholder() && self.mapper.is_composite(arg)));

        let arguments = group
            .arguments()
            .iter()
            .filter(|arg| arg.is_top_level() && !arg.is_placeholder())
            .map(|arg| {
                let ty = if unsupported {
                    self.mapper.local_type_lenient(arg)
                } else {
                    self.mapper.local_type(arg)?
                };
                Ok(TypedArgument {
                    descriptor: arg.clone(),
                    ty,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let mut slots = arguments
            .iter()
            .enumerate()
            .filter(|(_, arg)| arg.descriptor.is_return_slot())
            .map(|(i, _)| i);
        let return_slot = slots.next();
        if slots.next().is_some() {
            return Err(Error::InvalidCatalog {
                message: format!("routine '{id}' has more than one return slot"),
            });
        }

        let mut signature = RoutineSignature {
            name: naming::callable_name(
                group.routine(),
                group.overload(),
                scope.overloaded,
                variant.is_async() && scope.both_variants,
            ),
            id,
            overload: group.overload().map(str::to_string),
            variant,
            arguments,
            return_shape: ReturnShape::Void,
            return_slot,
            out_as_return: None,
            params: Vec::new(),
            holder: None,
            unsupported,
        };

        let outputs: Vec<usize> = signature
            .arguments
            .iter()
            .enumerate()
            .filter(|(_, arg)| signature.is_output(&arg.descriptor))
            .map(|(i, _)| i)
            .collect();

        let (return_shape, out_as_return) = match (return_slot, outputs.as_slice()) {
            (Some(_), []) => (ReturnShape::ReturnSlot, None),
            (Some(_), _) if variant == Variant::Sync => (ReturnShape::ReturnSlot, None),
            (Some(_), _) => (ReturnShape::Composite, None),
            (None, [single]) => (ReturnShape::OutAsReturn, Some(*single)),
            (None, []) => (ReturnShape::Void, None),
            (None, _) => (ReturnShape::Composite, None),
        };
        signature.return_shape = return_shape;
        signature.out_as_return = out_as_return;

        if signature.requires_composite() {
            signature.holder = Some(naming::holder_name(
                group.routine(),
                group.overload(),
                scope.overloaded,
                false,
            ));
        }
        signature.params = exposed_params(&signature);

        tracing::debug!(
            routine = %signature.id,
            overload = signature.overload.as_deref().unwrap_or("-"),
            %variant,
            name = %signature.name,
            shape = %signature.return_shape,
            params = signature.params.len(),
            unsupported,
            "synthesized signature"
        );

        Ok(signature)
    }
}

fn exposed_params(signature: &RoutineSignature) -> Vec<Param> {
    let composite = signature.requires_composite();

    let candidates = signature
        .arguments
        .iter()
        .enumerate()
        .filter(|(i, _)| Some(*i) != signature.return_slot && Some(*i) != signature.out_as_return)
        .filter_map(|(_, arg)| {
            let direction = arg.descriptor.direction;
            let mode = match (signature.variant, direction) {
                (_, Direction::In) => ParamMode::Value,
                (Variant::Async, _) => return None,
                (Variant::Sync, Direction::Out) if composite => return None,
                (Variant::Sync, Direction::InOut) if composite => ParamMode::Value,
                (Variant::Sync, Direction::Out) => ParamMode::OutRef,
                (Variant::Sync, Direction::InOut) => ParamMode::InOutRef,
            };
            Some(Param {
                name: naming::snake_case(arg.remote_name()),
                remote: arg.remote_name().to_string(),
                ty: arg.ty.clone(),
                mode,
                defaulted: arg.descriptor.defaulted,
            })
        });

    let (mut required, defaulted): (Vec<_>, Vec<_>) = candidates.partition(|p| !p.defaulted);
    required.extend(defaulted);
    required
}
